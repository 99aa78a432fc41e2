//! Domain layer - core data structures and types.
//!
//! This module contains the fundamental domain models:
//! - Section/route table
//! - Application state, actions and the reducer
//! - Notifications
//! - Theme preference and effective theme

pub mod actions;
pub mod notification;
pub mod routes;
pub mod state;
pub mod theme;

pub use actions::{Action, Stamp, reduce};
pub use notification::{Notification, NotificationDraft, NotificationId, NotificationKind};
pub use routes::{DEFAULT_SECTION, RouteTable, normalize_path};
pub use state::{AppState, Language, TextDirection, User};
pub use theme::{EffectiveTheme, ThemeMode};
