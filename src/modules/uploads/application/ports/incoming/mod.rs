mod upload_use_cases;

pub use upload_use_cases::{UploadError, UploadUseCases};
