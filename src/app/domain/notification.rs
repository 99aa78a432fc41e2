use std::time::SystemTime;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NotificationId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
    Warning,
    Info,
}

impl NotificationKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::Error => "Error",
            Self::Warning => "Warning",
            Self::Info => "Info",
        }
    }
}

/// A queued user-facing message. `id` and `created_at` are assigned by the
/// store on insertion; entries are never edited afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: NotificationId,
    pub message: String,
    pub kind: NotificationKind,
    pub created_at: SystemTime,
}

/// What a caller supplies when adding a notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationDraft {
    pub message: String,
    pub kind: NotificationKind,
}

impl NotificationDraft {
    pub fn new(message: impl Into<String>, kind: NotificationKind) -> Self {
        Self {
            message: message.into(),
            kind,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, NotificationKind::Success)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, NotificationKind::Error)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message, NotificationKind::Warning)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, NotificationKind::Info)
    }

    pub(crate) fn into_notification(
        self,
        id: NotificationId,
        created_at: SystemTime,
    ) -> Notification {
        Notification {
            id,
            message: self.message,
            kind: self.kind,
            created_at,
        }
    }
}
