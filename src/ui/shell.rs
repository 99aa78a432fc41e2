use std::cell::RefCell;

use fltk::{app, browser::HoldBrowser, button::Button, frame::Frame, prelude::*};
use tracing::{debug, info};

use super::main_window::MainWidgets;
use super::messages::Message;
use super::navigator::FltkNavigator;
use crate::app::controllers::navigation::{ReconcileOutcome, SectionRouteSynchronizer};
use crate::app::controllers::store::StoreProvider;
use crate::app::controllers::theme::ThemeProvider;
use crate::app::domain::notification::{NotificationDraft, NotificationKind};
use crate::app::domain::state::{AppState, User};
use crate::app::infrastructure::error::Result;
use crate::app::infrastructure::listeners::Subscription;
use crate::app::infrastructure::platform::ColorSchemeSignal;

/// Widgets that mirror the store; re-rendered on every dispatch.
struct StateView {
    theme_button: Button,
    language_button: Button,
    user_button: Button,
    notifications: HoldBrowser,
}

impl StateView {
    fn render(&mut self, state: &AppState) {
        self.theme_button
            .set_label(&format!("Theme: {}", state.theme.display_name()));
        self.language_button
            .set_label(&state.language.code().to_uppercase());
        let user_label = match &state.user {
            Some(user) => format!("{} (sign out)", user.name),
            None => "Sign in".to_string(),
        };
        self.user_button.set_label(&user_label);

        self.notifications.clear();
        for n in &state.notifications {
            self.notifications
                .add(&format!("[{}] {}", n.kind.label(), n.message));
        }

        self.theme_button.redraw();
        self.language_button.redraw();
        self.user_button.redraw();
        self.notifications.redraw();
    }
}

/// Main shell coordinator: owns the navigation state and routes channel
/// messages to the synchronizer, the store and the theme resolver.
pub struct ShellState {
    sync: SectionRouteSynchronizer,
    navigator: FltkNavigator,
    store: StoreProvider,
    theme: ThemeProvider,
    signal: ColorSchemeSignal,
    sidebar: HoldBrowser,
    content: Frame,
    notifications: HoldBrowser,
    active_section: String,
    store_watch: Option<Subscription>,
}

impl ShellState {
    pub fn new(
        widgets: &MainWidgets,
        sync: SectionRouteSynchronizer,
        initial_path: &str,
        store: StoreProvider,
        theme: ThemeProvider,
        signal: ColorSchemeSignal,
    ) -> Result<Self> {
        let app_store = store.get()?;
        let view = RefCell::new(StateView {
            theme_button: widgets.theme_button.clone(),
            language_button: widgets.language_button.clone(),
            user_button: widgets.user_button.clone(),
            notifications: widgets.notifications.clone(),
        });
        view.borrow_mut().render(&app_store.state());
        let store_watch = app_store.subscribe(move |state| view.borrow_mut().render(state));

        let navigator = FltkNavigator::new(widgets.location.clone(), initial_path);
        let active_section = sync.current_section(initial_path).to_string();

        let mut shell = Self {
            sync,
            navigator,
            store,
            theme,
            signal,
            sidebar: widgets.sidebar.clone(),
            content: widgets.content.clone(),
            notifications: widgets.notifications.clone(),
            active_section,
            store_watch: Some(store_watch),
        };
        shell.reconcile();
        Ok(shell)
    }

    pub fn handle(&mut self, msg: Message) -> Result<()> {
        match msg {
            Message::SelectSection(section) => {
                self.active_section = section;
                self.reconcile();
            }
            Message::NavigateBack => {
                if self.navigator.back() {
                    // Location moved first; derive the selection from it
                    self.active_section = self
                        .sync
                        .current_section(self.navigator.current_path())
                        .to_string();
                    self.reconcile();
                }
            }
            Message::CycleTheme => {
                let theme = self.theme.get()?;
                let store = self.store.get()?;
                if let Err(e) = theme.cycle() {
                    store.add_notification(NotificationDraft::warning(format!(
                        "Theme preference not saved: {e}"
                    )));
                }
                store.set_theme(theme.preference());
            }
            Message::ToggleLanguage => {
                let store = self.store.get()?;
                store.set_language(store.language().toggle());
            }
            Message::ToggleSignIn => {
                let store = self.store.get()?;
                if store.is_authenticated() {
                    store.sign_out();
                } else {
                    store.set_user(demo_user());
                }
            }
            Message::Notify(kind) => {
                let store = self.store.get()?;
                store.add_notification(NotificationDraft::new(
                    notification_text(kind, &self.active_section),
                    kind,
                ));
            }
            Message::DismissNotification => {
                let line = self.notifications.value();
                if line > 0 {
                    let store = self.store.get()?;
                    let selected = store.notifications().get(line as usize - 1).map(|n| n.id);
                    if let Some(id) = selected {
                        store.remove_notification(id);
                    }
                }
            }
            Message::ClearNotifications => self.store.get()?.clear_notifications(),
            Message::PollColorScheme => self.signal.refresh_from_platform(),
            Message::WindowClose => {
                self.shutdown();
                app::quit();
            }
        }
        Ok(())
    }

    fn reconcile(&mut self) {
        let current = self.navigator.current_path().to_string();
        let outcome = self
            .sync
            .reconcile(&self.active_section, &current, &mut self.navigator);
        debug!(section = %self.active_section, ?outcome, "reconciled");

        if matches!(outcome, ReconcileOutcome::Unchanged | ReconcileOutcome::UnknownSection) {
            return;
        }
        let path = self.navigator.current_path().to_string();
        let shown = self.sync.current_section(&path).to_string();
        self.highlight(&shown);
        self.content.set_label(&format!("{shown}\n{path}"));
        self.content.redraw();
    }

    fn highlight(&mut self, section: &str) {
        if let Some(pos) = self.sync.table().sections().position(|s| s == section) {
            self.sidebar.select(pos as i32 + 1);
        }
    }

    /// Release subscriptions and leave the provider scopes.
    pub fn shutdown(&mut self) {
        self.store_watch = None;
        if let Ok(theme) = self.theme.get() {
            theme.teardown();
        }
        self.theme.unmount();
        self.store.unmount();
        info!("shell shut down");
    }
}

fn demo_user() -> User {
    User {
        id: "1".to_string(),
        name: "Demo Manager".to_string(),
        email: "manager@example.com".to_string(),
        role: "admin".to_string(),
    }
}

fn notification_text(kind: NotificationKind, section: &str) -> String {
    match kind {
        NotificationKind::Success => format!("Saved changes in {section}"),
        NotificationKind::Error => format!("Could not load {section}"),
        NotificationKind::Warning => format!("Check pending items in {section}"),
        NotificationKind::Info => format!("Opened {section}"),
    }
}
