mod analytics_use_cases;

pub use analytics_use_cases::AnalyticsUseCases;
