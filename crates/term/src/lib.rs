//! Terminal presentation layer.
//!
//! `view` is pure (session snapshot in, text rows out) so the whole layout
//! can be unit-tested; `screen` owns the raw-mode terminal lifecycle and
//! flushes rows through crossterm.

pub mod screen;
pub mod view;

pub use screen::Screen;
pub use view::{Selection, SessionView};
