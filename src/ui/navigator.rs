use fltk::{frame::Frame, prelude::*};
use tracing::debug;

use crate::app::controllers::navigation::Navigator;

/// In-window location with a back stack, shown in the location bar.
pub struct FltkNavigator {
    history: Vec<String>,
    location: Frame,
}

impl FltkNavigator {
    pub fn new(location: Frame, initial_path: &str) -> Self {
        let mut navigator = Self {
            history: vec![initial_path.to_string()],
            location,
        };
        navigator.show_location();
        navigator
    }

    pub fn current_path(&self) -> &str {
        self.history.last().map(String::as_str).unwrap_or("/")
    }

    /// Pop one entry. Returns false when already at the first entry.
    pub fn back(&mut self) -> bool {
        if self.history.len() < 2 {
            return false;
        }
        self.history.pop();
        debug!(path = self.current_path(), "back");
        self.show_location();
        true
    }

    fn show_location(&mut self) {
        let label = format!("  {}", self.current_path());
        self.location.set_label(&label);
        self.location.redraw();
    }
}

impl Navigator for FltkNavigator {
    fn navigate(&mut self, route: &str) {
        self.history.push(route.to_string());
        self.show_location();
    }
}
