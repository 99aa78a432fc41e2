//! Navigation, state and theme core for a business management dashboard.
//!
//! The [`app`] module holds everything the dashboard pages depend on: the
//! section/route table and its synchronizer, the reducer-driven store, and
//! the theme resolver. The optional [`ui`] module (feature `gui`) is an FLTK
//! shell that drives them.

pub mod app;
#[cfg(feature = "gui")]
pub mod ui;

pub use app::{AppError, Result};
