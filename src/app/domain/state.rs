use serde::{Deserialize, Serialize};

use super::notification::Notification;
use super::theme::ThemeMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Ar,
    En,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextDirection {
    Ltr,
    Rtl,
}

impl Language {
    pub fn code(self) -> &'static str {
        match self {
            Self::Ar => "ar",
            Self::En => "en",
        }
    }

    pub fn direction(self) -> TextDirection {
        match self {
            Self::Ar => TextDirection::Rtl,
            Self::En => TextDirection::Ltr,
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            Self::Ar => Self::En,
            Self::En => Self::Ar,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub role: String,
}

/// Cross-cutting application state owned by the store.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    pub theme: ThemeMode,
    pub language: Language,
    pub user: Option<User>,
    pub notifications: Vec<Notification>,
}

impl AppState {
    /// Startup state, seeded with the persisted theme preference if any.
    pub fn with_theme(theme: ThemeMode) -> Self {
        Self {
            theme,
            ..Default::default()
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}
