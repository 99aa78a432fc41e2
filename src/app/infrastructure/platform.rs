//! Platform "prefers dark" color-scheme signal.

use std::cell::Cell;
use std::rc::Rc;

use tracing::debug;

use super::listeners::{Listeners, Subscription};

/// Ask the host OS whether it prefers a dark color scheme.
///
/// Returns `None` when no theme API could be queried at all, which callers
/// treat as "light".
pub fn probe_system_dark_mode() -> Option<bool> {
    probe()
}

// Windows: AppsUseLightTheme is 0 for dark, 1 for light
#[cfg(target_os = "windows")]
fn probe() -> Option<bool> {
    use winreg::RegKey;
    use winreg::enums::HKEY_CURRENT_USER;

    let key = RegKey::predef(HKEY_CURRENT_USER)
        .open_subkey("Software\\Microsoft\\Windows\\CurrentVersion\\Themes\\Personalize")
        .ok()?;
    let value = key.get_value::<u32, _>("AppsUseLightTheme").ok()?;
    Some(value == 0)
}

// Linux: GNOME color-scheme first, then the GTK theme name
#[cfg(target_os = "linux")]
fn probe() -> Option<bool> {
    let scheme = gsettings("color-scheme");
    if scheme.as_deref().is_some_and(|s| s.contains("prefer-dark")) {
        return Some(true);
    }
    let gtk_theme = gsettings("gtk-theme");
    if gtk_theme
        .as_deref()
        .is_some_and(|t| t.to_lowercase().contains("dark"))
    {
        return Some(true);
    }
    if scheme.is_some() || gtk_theme.is_some() {
        Some(false)
    } else {
        None
    }
}

#[cfg(target_os = "linux")]
fn gsettings(key: &str) -> Option<String> {
    use std::process::Command;

    let output = Command::new("gsettings")
        .args(["get", "org.gnome.desktop.interface", key])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    Some(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

// macOS: AppleInterfaceStyle only exists while dark mode is on
#[cfg(target_os = "macos")]
fn probe() -> Option<bool> {
    use std::process::Command;

    let output = Command::new("defaults")
        .args(["read", "-g", "AppleInterfaceStyle"])
        .output()
        .ok()?;
    let style = String::from_utf8_lossy(&output.stdout).to_lowercase();
    Some(output.status.success() && style.contains("dark"))
}

#[cfg(not(any(target_os = "windows", target_os = "linux", target_os = "macos")))]
fn probe() -> Option<bool> {
    None
}

struct SignalInner {
    prefers_dark: Cell<Option<bool>>,
    listeners: Listeners<bool>,
}

/// Cloneable handle to the platform "prefers dark" signal.
///
/// `None` means the platform exposes no color-scheme API. Listeners are only
/// notified when a concrete value changes.
#[derive(Clone)]
pub struct ColorSchemeSignal {
    inner: Rc<SignalInner>,
}

impl ColorSchemeSignal {
    fn new(prefers_dark: Option<bool>) -> Self {
        Self {
            inner: Rc::new(SignalInner {
                prefers_dark: Cell::new(prefers_dark),
                listeners: Listeners::new(),
            }),
        }
    }

    pub fn from_platform() -> Self {
        Self::new(probe_system_dark_mode())
    }

    pub fn with_value(prefers_dark: bool) -> Self {
        Self::new(Some(prefers_dark))
    }

    pub fn unsupported() -> Self {
        Self::new(None)
    }

    pub fn prefers_dark(&self) -> Option<bool> {
        self.inner.prefers_dark.get()
    }

    pub fn set_prefers_dark(&self, prefers_dark: bool) {
        let previous = self.inner.prefers_dark.replace(Some(prefers_dark));
        if previous != Some(prefers_dark) {
            debug!(prefers_dark, "platform color scheme changed");
            self.inner.listeners.emit(&prefers_dark);
        }
    }

    /// Re-probe the host and emit if the answer changed.
    pub fn refresh_from_platform(&self) {
        if let Some(prefers_dark) = probe_system_dark_mode() {
            self.set_prefers_dark(prefers_dark);
        }
    }

    pub fn subscribe(&self, listener: impl Fn(&bool) + 'static) -> Subscription {
        self.inner.listeners.subscribe(listener)
    }

    pub fn listener_count(&self) -> usize {
        self.inner.listeners.len()
    }
}
