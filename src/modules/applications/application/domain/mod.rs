mod commands;
pub mod entities;

pub use commands::{ApplicationFilter, BulkStatusChange, NewNote, StatusChange};
