mod add_application_note;
mod get_application;
mod list_applications;
mod score_application;
mod submit_application;
mod update_application_status;

pub use add_application_note::*;
pub use get_application::*;
pub use list_applications::*;
pub use score_application::*;
pub use submit_application::*;
pub use update_application_status::*;
