//! Application layer - organized by Clean Architecture principles.
//!
//! # Structure
//!
//! - `domain/` - Core data structures (routes, state, actions, notifications, theme)
//! - `controllers/` - Orchestration (synchronizer, store, theme resolver)
//! - `infrastructure/` - External integrations (platform signal, storage, providers, error)

pub mod controllers;
pub mod domain;
pub mod infrastructure;

// Re-exports for convenient external access
pub use controllers::navigation::{Navigator, ReconcileOutcome, SectionRouteSynchronizer};
pub use controllers::store::{AppStore, StoreProvider, store_scope};
pub use controllers::theme::{
    THEME_PREFERENCE_KEY, ThemeProvider, ThemeResolver, ThemeSurface, theme_scope,
};
pub use domain::{
    Action, AppState, DEFAULT_SECTION, EffectiveTheme, Language, Notification, NotificationDraft,
    NotificationId, NotificationKind, RouteTable, TextDirection, ThemeMode, User,
};
pub use infrastructure::error::{AppError, Result};
pub use infrastructure::listeners::Subscription;
pub use infrastructure::platform::{ColorSchemeSignal, probe_system_dark_mode};
pub use infrastructure::provider::Provider;
pub use infrastructure::storage::{JsonPreferenceFile, MemoryPreferences, PreferenceStore};
