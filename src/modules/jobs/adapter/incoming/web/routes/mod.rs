mod create_job;
mod generate_job_description;
mod get_job;
mod increment_job_view;
mod job_lifecycle;
mod list_jobs;
mod update_job;

pub use create_job::*;
pub use generate_job_description::*;
pub use get_job::*;
pub use increment_job_view::*;
pub use job_lifecycle::*;
pub use list_jobs::*;
pub use update_job::*;
