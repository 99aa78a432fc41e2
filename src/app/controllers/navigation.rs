//! Keeps the selected dashboard section and the displayed route in agreement.
//!
//! Callers invoke [`SectionRouteSynchronizer::reconcile`] whenever they
//! observe a change in either the selected section or the current path. The
//! synchronizer issues at most one navigation per call and never acts twice
//! on the same section in a row, so frequent re-renders with an unchanged
//! selection cannot cause a navigation storm.

use tracing::debug;

use crate::app::domain::routes::{DEFAULT_SECTION, RouteTable, normalize_path};

/// The surface that owns the current location.
pub trait Navigator {
    fn navigate(&mut self, route: &str);

    /// Whether the surface can animate between views.
    fn supports_transitions(&self) -> bool {
        false
    }

    fn navigate_with_transition(&mut self, route: &str) {
        self.navigate(route);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReconcileOutcome {
    /// Same section as the last one acted on.
    Unchanged,
    /// Section has no route; nothing happens.
    UnknownSection,
    /// Location already shows the section's route.
    InSync,
    Navigated { route: String, animated: bool },
}

#[derive(Debug, Clone)]
pub struct SectionRouteSynchronizer {
    table: RouteTable,
    last_section: Option<String>,
    transitions: bool,
}

impl SectionRouteSynchronizer {
    pub fn new(table: RouteTable) -> Self {
        Self {
            table,
            last_section: None,
            transitions: true,
        }
    }

    /// Enable or disable transition hints (enabled by default).
    pub fn with_transitions(mut self, enabled: bool) -> Self {
        self.transitions = enabled;
        self
    }

    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    /// The section the synchronizer last acted on.
    pub fn last_section(&self) -> Option<&str> {
        self.last_section.as_deref()
    }

    /// Forget the last acted-on section.
    pub fn reset(&mut self) {
        self.last_section = None;
    }

    pub fn reconcile<N: Navigator + ?Sized>(
        &mut self,
        active_section: &str,
        current_path: &str,
        navigator: &mut N,
    ) -> ReconcileOutcome {
        if self.last_section.as_deref() == Some(active_section) {
            return ReconcileOutcome::Unchanged;
        }

        let Some(route) = self.table.route_for(active_section) else {
            debug!(section = active_section, "no route for section");
            return ReconcileOutcome::UnknownSection;
        };
        let route = route.to_string();
        let path = normalize_path(current_path);

        if route == path {
            debug!(section = active_section, route = %route, "already in sync");
            self.last_section = Some(active_section.to_string());
            return ReconcileOutcome::InSync;
        }

        // Detail pages belong to their parent section and stay where they are
        if self.table.prefix_owner(path) == Some(active_section) {
            debug!(section = active_section, path, "on a sub-route of the section");
            self.last_section = Some(active_section.to_string());
            return ReconcileOutcome::InSync;
        }

        let animated = self.transitions && navigator.supports_transitions();
        debug!(section = active_section, from = current_path, to = %route, animated, "navigating");
        if animated {
            navigator.navigate_with_transition(&route);
        } else {
            navigator.navigate(&route);
        }
        self.last_section = Some(active_section.to_string());

        ReconcileOutcome::Navigated { route, animated }
    }

    /// Section to highlight for `current_path`. Never fails: exact match,
    /// then dynamic sub-route owner, then [`DEFAULT_SECTION`].
    pub fn current_section(&self, current_path: &str) -> &str {
        self.table
            .section_for(normalize_path(current_path))
            .or_else(|| self.table.prefix_owner(current_path))
            .unwrap_or(DEFAULT_SECTION)
    }
}
