mod analytics_reports;

pub use analytics_reports::*;
