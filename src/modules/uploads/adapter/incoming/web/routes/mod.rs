mod presigned_url;
mod upload_resume;

pub use presigned_url::*;
pub use upload_resume::*;
