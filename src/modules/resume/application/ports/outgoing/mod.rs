pub mod resume_api;

pub use resume_api::{ResumeApi, ResumeApiError, ResumePreview};
