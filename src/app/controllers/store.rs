//! Reducer-driven application store.
//!
//! The store owns one [`AppState`] behind an `Rc`. Dispatch computes the next
//! state with [`reduce`], swaps it in whole, and only then notifies
//! subscribers, so an observer never sees a half-applied action.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;
use std::time::SystemTime;

use tracing::debug;

use crate::app::domain::actions::{Action, Stamp, reduce};
use crate::app::domain::notification::{Notification, NotificationDraft, NotificationId};
use crate::app::domain::state::{AppState, Language, User};
use crate::app::domain::theme::ThemeMode;
use crate::app::infrastructure::listeners::{Listeners, Subscription};
use crate::app::infrastructure::provider::Provider;

pub type StoreProvider = Provider<AppStore>;

/// An empty provider scope for the store.
pub fn store_scope() -> StoreProvider {
    Provider::new("AppStore")
}

struct StoreInner {
    state: RefCell<Rc<AppState>>,
    next_id: Cell<u64>,
    listeners: Listeners<AppState>,
}

/// Cheap-to-clone handle; all clones share one state cell.
#[derive(Clone)]
pub struct AppStore {
    inner: Rc<StoreInner>,
}

impl AppStore {
    pub fn new(initial: AppState) -> Self {
        Self {
            inner: Rc::new(StoreInner {
                state: RefCell::new(Rc::new(initial)),
                next_id: Cell::new(1),
                listeners: Listeners::new(),
            }),
        }
    }

    /// Apply `action`. Returns the id of the inserted notification, if the
    /// action added one.
    pub fn dispatch(&self, action: Action) -> Option<NotificationId> {
        let mut inserted = None;
        self.commit(action, || {
            let stamp = self.next_stamp();
            inserted = Some(stamp.id);
            stamp
        });
        inserted
    }

    fn commit(&self, action: Action, stamp: impl FnOnce() -> Stamp) {
        debug!(action = action.name(), "dispatch");

        let current = self.state();
        let next = Rc::new(reduce(&current, action, stamp));
        *self.inner.state.borrow_mut() = Rc::clone(&next);
        self.inner.listeners.emit(&next);
    }

    fn next_stamp(&self) -> Stamp {
        let id = self.inner.next_id.get();
        self.inner.next_id.set(id + 1);
        Stamp {
            id: NotificationId(id),
            created_at: SystemTime::now(),
        }
    }

    /// Observe every state produced by a dispatch.
    pub fn subscribe(&self, listener: impl Fn(&AppState) + 'static) -> Subscription {
        self.inner.listeners.subscribe(listener)
    }

    pub fn state(&self) -> Rc<AppState> {
        Rc::clone(&self.inner.state.borrow())
    }

    pub fn theme(&self) -> ThemeMode {
        self.state().theme
    }

    pub fn language(&self) -> Language {
        self.state().language
    }

    pub fn user(&self) -> Option<User> {
        self.state().user.clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state().is_authenticated()
    }

    pub fn notifications(&self) -> Vec<Notification> {
        self.state().notifications.clone()
    }

    pub fn set_theme(&self, theme: ThemeMode) {
        self.dispatch(Action::SetTheme(theme));
    }

    pub fn set_language(&self, language: Language) {
        self.dispatch(Action::SetLanguage(language));
    }

    pub fn set_user(&self, user: User) {
        self.dispatch(Action::SetUser(Some(user)));
    }

    pub fn sign_out(&self) {
        self.dispatch(Action::SetUser(None));
    }

    pub fn add_notification(&self, draft: NotificationDraft) -> NotificationId {
        let stamp = self.next_stamp();
        let id = stamp.id;
        self.commit(Action::AddNotification(draft), move || stamp);
        id
    }

    pub fn remove_notification(&self, id: NotificationId) {
        self.dispatch(Action::RemoveNotification(id));
    }

    pub fn clear_notifications(&self) {
        self.dispatch(Action::ClearNotifications);
    }
}

impl Default for AppStore {
    fn default() -> Self {
        Self::new(AppState::default())
    }
}

impl fmt::Debug for AppStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppStore")
            .field("state", &self.state())
            .field("subscribers", &self.inner.listeners.len())
            .finish()
    }
}
