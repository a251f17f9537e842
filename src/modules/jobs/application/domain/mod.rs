pub mod entities;
mod job_filter;

pub use job_filter::{JobFilter, DEFAULT_PUBLIC_STATUS};
