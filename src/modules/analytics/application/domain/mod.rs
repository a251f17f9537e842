mod date_window;
pub mod entities;

pub use date_window::{DateWindow, DefaultSpan};
