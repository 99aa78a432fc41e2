//! Explicit provider scopes.
//!
//! A [`Provider`] is a shared slot that holds a single application-wide
//! instance (the store, the theme resolver) once it has been mounted.
//! Components receive the provider by reference and ask it for the instance;
//! asking before mount or after unmount is a configuration error.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use tracing::debug;

use super::error::{AppError, Result};

pub struct Provider<T> {
    name: &'static str,
    slot: Rc<RefCell<Option<T>>>,
}

impl<T: Clone> Provider<T> {
    /// An empty scope. `name` identifies the provider in errors.
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            slot: Rc::new(RefCell::new(None)),
        }
    }

    /// A scope that is already mounted with `value`.
    pub fn mounted(name: &'static str, value: T) -> Self {
        let provider = Self::new(name);
        provider.mount(value);
        provider
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Install `value`, returning whatever was mounted before.
    pub fn mount(&self, value: T) -> Option<T> {
        debug!(provider = self.name, "mounted");
        self.slot.borrow_mut().replace(value)
    }

    pub fn unmount(&self) -> Option<T> {
        debug!(provider = self.name, "unmounted");
        self.slot.borrow_mut().take()
    }

    pub fn is_mounted(&self) -> bool {
        self.slot.borrow().is_some()
    }

    /// A handle to the mounted instance.
    ///
    /// The check happens here only: a handle obtained while mounted keeps
    /// working after [`Provider::unmount`]. Call `get` at each use instead of
    /// holding on to the handle.
    pub fn get(&self) -> Result<T> {
        self.slot
            .borrow()
            .clone()
            .ok_or(AppError::MissingProvider(self.name))
    }
}

impl<T> Clone for Provider<T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name,
            slot: Rc::clone(&self.slot),
        }
    }
}

impl<T> fmt::Debug for Provider<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Provider")
            .field("name", &self.name)
            .field("mounted", &self.slot.borrow().is_some())
            .finish()
    }
}
