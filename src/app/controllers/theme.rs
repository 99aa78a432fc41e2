//! Theme preference resolution.
//!
//! The resolver owns the tri-state [`ThemeMode`] preference, resolves it to
//! an [`EffectiveTheme`] against the platform [`ColorSchemeSignal`], and keeps
//! exactly one theme marker on the rendering surface. It follows the platform
//! signal only while the preference is `System`; the subscription is released
//! on [`ThemeResolver::teardown`] or when the last handle is dropped.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use tracing::{debug, info, warn};

use crate::app::domain::theme::{EffectiveTheme, ThemeMode};
use crate::app::infrastructure::error::Result;
use crate::app::infrastructure::listeners::Subscription;
use crate::app::infrastructure::platform::ColorSchemeSignal;
use crate::app::infrastructure::provider::Provider;
use crate::app::infrastructure::storage::PreferenceStore;

/// Fixed key of the persisted preference.
pub const THEME_PREFERENCE_KEY: &str = "theme";

pub type ThemeProvider = Provider<ThemeResolver>;

/// An empty provider scope for the theme resolver.
pub fn theme_scope() -> ThemeProvider {
    Provider::new("ThemeResolver")
}

/// Where the effective theme is shown.
pub trait ThemeSurface {
    fn remove_marker(&mut self, theme: EffectiveTheme);
    fn apply_marker(&mut self, theme: EffectiveTheme);
}

struct ResolverInner {
    preference: ThemeMode,
    applied: Option<EffectiveTheme>,
    store: Box<dyn PreferenceStore>,
    surface: Box<dyn ThemeSurface>,
    signal: ColorSchemeSignal,
    watch: Option<Subscription>,
    torn_down: bool,
}

impl ResolverInner {
    fn resolve(&self) -> EffectiveTheme {
        self.preference.resolve(self.signal.prefers_dark())
    }

    /// Swap the surface marker if the effective theme changed.
    fn refresh(&mut self) {
        let effective = self.resolve();
        if self.applied == Some(effective) {
            return;
        }
        if let Some(old) = self.applied {
            self.surface.remove_marker(old);
        }
        self.surface.apply_marker(effective);
        self.applied = Some(effective);
        debug!(marker = effective.marker(), "theme marker applied");
    }
}

#[derive(Clone)]
pub struct ThemeResolver {
    inner: Rc<RefCell<ResolverInner>>,
}

impl ThemeResolver {
    /// Read the stored preference once (default `Light`), apply the initial
    /// marker, and start following the platform if the preference is `System`.
    pub fn new(
        store: impl PreferenceStore + 'static,
        surface: impl ThemeSurface + 'static,
        signal: ColorSchemeSignal,
    ) -> Self {
        let preference = match store.read(THEME_PREFERENCE_KEY) {
            Some(value) => ThemeMode::parse(&value).unwrap_or_else(|| {
                warn!(value = %value, "unknown stored theme preference");
                ThemeMode::default()
            }),
            None => ThemeMode::default(),
        };

        let resolver = Self {
            inner: Rc::new(RefCell::new(ResolverInner {
                preference,
                applied: None,
                store: Box::new(store),
                surface: Box::new(surface),
                signal,
                watch: None,
                torn_down: false,
            })),
        };
        resolver.inner.borrow_mut().refresh();
        resolver.sync_watch();
        resolver
    }

    pub fn preference(&self) -> ThemeMode {
        self.inner.borrow().preference
    }

    pub fn effective(&self) -> EffectiveTheme {
        self.inner.borrow().resolve()
    }

    pub fn is_dark(&self) -> bool {
        self.effective().is_dark()
    }

    pub fn is_watching_system(&self) -> bool {
        self.inner.borrow().watch.is_some()
    }

    /// Explicit user choice: apply it and persist it. The new preference is
    /// in effect even when persisting fails; the error is returned.
    pub fn set_preference(&self, mode: ThemeMode) -> Result<()> {
        let persisted = {
            let mut inner = self.inner.borrow_mut();
            inner.preference = mode;
            inner.refresh();
            inner.store.write(THEME_PREFERENCE_KEY, mode.as_str())
        };
        self.sync_watch();

        info!(preference = mode.as_str(), "theme preference changed");
        if let Err(e) = &persisted {
            warn!(error = %e, "failed to persist theme preference");
        }
        persisted
    }

    /// Light -> Dark -> System -> Light
    pub fn cycle(&self) -> Result<ThemeMode> {
        let next = self.preference().cycle();
        self.set_preference(next)?;
        Ok(next)
    }

    /// Stop following the platform signal. Safe to call more than once.
    pub fn teardown(&self) {
        let mut inner = self.inner.borrow_mut();
        inner.torn_down = true;
        inner.watch = None;
    }

    fn sync_watch(&self) {
        let mut inner = self.inner.borrow_mut();
        let wanted = inner.preference == ThemeMode::System && !inner.torn_down;

        if !wanted {
            if inner.watch.take().is_some() {
                debug!("stopped following platform color scheme");
            }
            return;
        }
        if inner.watch.is_some() {
            return;
        }

        let weak: Weak<RefCell<ResolverInner>> = Rc::downgrade(&self.inner);
        let subscription = inner.signal.subscribe(move |_| {
            let Some(inner) = weak.upgrade() else {
                return;
            };
            let mut inner = inner.borrow_mut();
            if inner.preference == ThemeMode::System {
                inner.refresh();
            }
        });
        inner.watch = Some(subscription);
        debug!("following platform color scheme");
    }
}

impl fmt::Debug for ThemeResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("ThemeResolver")
            .field("preference", &inner.preference)
            .field("applied", &inner.applied)
            .field("watching", &inner.watch.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::infrastructure::error::AppError;
    use crate::app::infrastructure::storage::MemoryPreferences;

    type Log = Rc<RefCell<Vec<String>>>;

    struct RecordingSurface(Log);

    impl ThemeSurface for RecordingSurface {
        fn remove_marker(&mut self, theme: EffectiveTheme) {
            self.0.borrow_mut().push(format!("remove:{}", theme.marker()));
        }

        fn apply_marker(&mut self, theme: EffectiveTheme) {
            self.0.borrow_mut().push(format!("apply:{}", theme.marker()));
        }
    }

    /// Memory store that records every write.
    struct RecordingStore {
        values: MemoryPreferences,
        writes: Log,
    }

    impl PreferenceStore for RecordingStore {
        fn read(&self, key: &str) -> Option<String> {
            self.values.read(key)
        }

        fn write(&mut self, key: &str, value: &str) -> Result<()> {
            self.writes.borrow_mut().push(format!("{key}={value}"));
            self.values.write(key, value)
        }
    }

    struct ReadOnlyStore;

    impl PreferenceStore for ReadOnlyStore {
        fn read(&self, _key: &str) -> Option<String> {
            None
        }

        fn write(&mut self, _key: &str, _value: &str) -> Result<()> {
            Err(AppError::Io(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "read-only",
            )))
        }
    }

    fn build(stored: Option<&str>, signal: &ColorSchemeSignal) -> (ThemeResolver, Log, Log) {
        let surface_log = Log::default();
        let writes = Log::default();
        let values = match stored {
            Some(v) => MemoryPreferences::with_value(THEME_PREFERENCE_KEY, v),
            None => MemoryPreferences::new(),
        };
        let store = RecordingStore {
            values,
            writes: Rc::clone(&writes),
        };
        let resolver = ThemeResolver::new(
            store,
            RecordingSurface(Rc::clone(&surface_log)),
            signal.clone(),
        );
        (resolver, surface_log, writes)
    }

    #[test]
    fn test_defaults_to_light_without_stored_preference() {
        let signal = ColorSchemeSignal::with_value(true);
        let (resolver, surface, writes) = build(None, &signal);

        assert_eq!(resolver.preference(), ThemeMode::Light);
        assert_eq!(resolver.effective(), EffectiveTheme::Light);
        assert_eq!(*surface.borrow(), vec!["apply:light"]);
        assert!(writes.borrow().is_empty());
        assert!(!resolver.is_watching_system());
    }

    #[test]
    fn test_reads_stored_preference_once() {
        let signal = ColorSchemeSignal::with_value(false);
        let (resolver, _, _) = build(Some("dark"), &signal);
        assert_eq!(resolver.preference(), ThemeMode::Dark);
        assert!(resolver.is_dark());

        let (resolver, _, _) = build(Some("garbage"), &signal);
        assert_eq!(resolver.preference(), ThemeMode::Light);
    }

    #[test]
    fn test_marker_replaced_not_stacked() {
        let signal = ColorSchemeSignal::with_value(false);
        let (resolver, surface, _) = build(None, &signal);

        resolver.set_preference(ThemeMode::Dark).unwrap();
        resolver.set_preference(ThemeMode::Dark).unwrap();
        resolver.set_preference(ThemeMode::Light).unwrap();

        assert_eq!(
            *surface.borrow(),
            vec!["apply:light", "remove:light", "apply:dark", "remove:dark", "apply:light"]
        );
    }

    #[test]
    fn test_every_explicit_change_is_persisted() {
        let signal = ColorSchemeSignal::with_value(false);
        let (resolver, _, writes) = build(None, &signal);

        assert_eq!(resolver.cycle().unwrap(), ThemeMode::Dark);
        assert_eq!(resolver.cycle().unwrap(), ThemeMode::System);
        assert_eq!(resolver.cycle().unwrap(), ThemeMode::Light);

        assert_eq!(
            *writes.borrow(),
            vec!["theme=dark", "theme=system", "theme=light"]
        );
    }

    #[test]
    fn test_system_mode_follows_signal_without_writes() {
        let signal = ColorSchemeSignal::with_value(true);
        let (resolver, surface, writes) = build(Some("system"), &signal);

        assert_eq!(resolver.effective(), EffectiveTheme::Dark);
        assert!(resolver.is_watching_system());

        signal.set_prefers_dark(false);
        assert_eq!(resolver.effective(), EffectiveTheme::Light);
        assert_eq!(resolver.preference(), ThemeMode::System);
        assert!(writes.borrow().is_empty());
        assert_eq!(*surface.borrow(), vec!["apply:dark", "remove:dark", "apply:light"]);
    }

    #[test]
    fn test_explicit_mode_ignores_signal_and_unsubscribes() {
        let signal = ColorSchemeSignal::with_value(false);
        let (resolver, surface, _) = build(Some("system"), &signal);
        assert_eq!(signal.listener_count(), 1);

        resolver.set_preference(ThemeMode::Light).unwrap();
        assert!(!resolver.is_watching_system());
        assert_eq!(signal.listener_count(), 0);

        signal.set_prefers_dark(true);
        assert_eq!(resolver.effective(), EffectiveTheme::Light);
        assert_eq!(*surface.borrow(), vec!["apply:light"]);
    }

    #[test]
    fn test_no_theme_api_falls_back_to_light() {
        let signal = ColorSchemeSignal::unsupported();
        let (resolver, _, _) = build(Some("system"), &signal);
        assert_eq!(resolver.effective(), EffectiveTheme::Light);
    }

    #[test]
    fn test_teardown_releases_subscription() {
        let signal = ColorSchemeSignal::with_value(false);
        let (resolver, surface, _) = build(Some("system"), &signal);

        resolver.teardown();
        resolver.teardown();
        assert_eq!(signal.listener_count(), 0);

        signal.set_prefers_dark(true);
        assert_eq!(*surface.borrow(), vec!["apply:light"]);

        // Stays detached after teardown
        resolver.set_preference(ThemeMode::System).unwrap();
        assert_eq!(signal.listener_count(), 0);
    }

    #[test]
    fn test_dropping_last_handle_releases_subscription() {
        let signal = ColorSchemeSignal::with_value(false);
        let (resolver, _, _) = build(Some("system"), &signal);
        let clone = resolver.clone();

        drop(resolver);
        assert_eq!(signal.listener_count(), 1);
        drop(clone);
        assert_eq!(signal.listener_count(), 0);
    }

    #[test]
    fn test_persist_failure_still_applies_preference() {
        let signal = ColorSchemeSignal::with_value(false);
        let log = Log::default();
        let resolver = ThemeResolver::new(ReadOnlyStore, RecordingSurface(Rc::clone(&log)), signal);

        assert!(resolver.set_preference(ThemeMode::Dark).is_err());
        assert_eq!(resolver.preference(), ThemeMode::Dark);
        assert_eq!(log.borrow().last().map(String::as_str), Some("apply:dark"));
    }

    #[test]
    fn test_access_outside_scope_fails() {
        let scope = theme_scope();
        assert!(matches!(
            scope.get().unwrap_err(),
            AppError::MissingProvider("ThemeResolver")
        ));

        let signal = ColorSchemeSignal::with_value(false);
        let (resolver, _, _) = build(None, &signal);
        scope.mount(resolver);
        assert_eq!(scope.get().unwrap().preference(), ThemeMode::Light);
    }
}
