//! FLTK desktop front end (feature `gui`).

pub mod main_window;
pub mod messages;
pub mod navigator;
pub mod shell;
pub mod theme;
