mod get_resume_preview;

pub use get_resume_preview::{GetResumePreviewError, GetResumePreviewUseCase};
