use std::time::SystemTime;

use super::notification::{NotificationDraft, NotificationId};
use super::state::{AppState, Language, User};
use super::theme::ThemeMode;

/// All actions the store accepts. Every state change goes through one of these.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    SetTheme(ThemeMode),
    SetLanguage(Language),
    SetUser(Option<User>),

    // Notification queue
    AddNotification(NotificationDraft),
    RemoveNotification(NotificationId),
    ClearNotifications,
}

impl Action {
    pub fn name(&self) -> &'static str {
        match self {
            Self::SetTheme(_) => "SetTheme",
            Self::SetLanguage(_) => "SetLanguage",
            Self::SetUser(_) => "SetUser",
            Self::AddNotification(_) => "AddNotification",
            Self::RemoveNotification(_) => "RemoveNotification",
            Self::ClearNotifications => "ClearNotifications",
        }
    }
}

/// Identity assigned to a notification at insertion time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stamp {
    pub id: NotificationId,
    pub created_at: SystemTime,
}

/// Compute the next state. `stamp` is only called for `AddNotification`.
pub fn reduce(state: &AppState, action: Action, stamp: impl FnOnce() -> Stamp) -> AppState {
    let mut next = state.clone();
    match action {
        Action::SetTheme(theme) => next.theme = theme,
        Action::SetLanguage(language) => next.language = language,
        Action::SetUser(user) => next.user = user,
        Action::AddNotification(draft) => {
            let Stamp { id, created_at } = stamp();
            next.notifications.push(draft.into_notification(id, created_at));
        }
        Action::RemoveNotification(id) => {
            if let Some(pos) = next.notifications.iter().position(|n| n.id == id) {
                next.notifications.remove(pos);
            }
        }
        Action::ClearNotifications => next.notifications.clear(),
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::domain::notification::NotificationKind;
    use std::time::{Duration, UNIX_EPOCH};

    fn stamp(id: u64) -> impl FnOnce() -> Stamp {
        move || Stamp {
            id: NotificationId(id),
            created_at: UNIX_EPOCH + Duration::from_secs(id),
        }
    }

    fn unused() -> Stamp {
        panic!("stamp requested for an action that does not insert")
    }

    #[test]
    fn test_field_replacement_actions() {
        let state = AppState::default();
        let user = User {
            id: "7".to_string(),
            name: "Omar".to_string(),
            email: "omar@example.com".to_string(),
            role: "admin".to_string(),
        };

        let state = reduce(&state, Action::SetTheme(ThemeMode::Dark), unused);
        let state = reduce(&state, Action::SetLanguage(Language::En), unused);
        let state = reduce(&state, Action::SetUser(Some(user.clone())), unused);

        assert_eq!(state.theme, ThemeMode::Dark);
        assert_eq!(state.language, Language::En);
        assert_eq!(state.user, Some(user));
        assert!(state.is_authenticated());

        let state = reduce(&state, Action::SetUser(None), unused);
        assert!(!state.is_authenticated());
    }

    #[test]
    fn test_add_appends_in_insertion_order() {
        let state = AppState::default();
        let state = reduce(&state, Action::AddNotification(NotificationDraft::info("b")), stamp(1));
        let state = reduce(&state, Action::AddNotification(NotificationDraft::info("a")), stamp(2));
        let state = reduce(&state, Action::AddNotification(NotificationDraft::info("a")), stamp(3));

        let messages: Vec<&str> = state.notifications.iter().map(|n| n.message.as_str()).collect();
        assert_eq!(messages, vec!["b", "a", "a"]);
        assert_eq!(state.notifications[2].id, NotificationId(3));
        assert_eq!(state.notifications[2].kind, NotificationKind::Info);
    }

    #[test]
    fn test_remove_only_matching_entry() {
        let state = AppState::default();
        let state = reduce(&state, Action::AddNotification(NotificationDraft::error("x")), stamp(1));
        let state = reduce(&state, Action::AddNotification(NotificationDraft::error("y")), stamp(2));

        let state = reduce(&state, Action::RemoveNotification(NotificationId(1)), unused);
        assert_eq!(state.notifications.len(), 1);
        assert_eq!(state.notifications[0].message, "y");
    }

    #[test]
    fn test_remove_missing_id_is_noop() {
        let state = AppState::default();
        let state = reduce(&state, Action::AddNotification(NotificationDraft::warning("x")), stamp(1));
        let after = reduce(&state, Action::RemoveNotification(NotificationId(99)), unused);
        assert_eq!(after, state);
    }

    #[test]
    fn test_clear_is_total() {
        let mut state = AppState::default();
        for i in 1..=5 {
            state = reduce(&state, Action::AddNotification(NotificationDraft::success("ok")), stamp(i));
        }
        let state = reduce(&state, Action::ClearNotifications, unused);
        assert!(state.notifications.is_empty());

        let state = reduce(&state, Action::ClearNotifications, unused);
        assert!(state.notifications.is_empty());
    }

    #[test]
    fn test_reduce_leaves_input_untouched() {
        let state = AppState::default();
        let _ = reduce(&state, Action::SetTheme(ThemeMode::System), unused);
        assert_eq!(state.theme, ThemeMode::Light);
    }
}
