mod get_resume_preview_service;

pub use get_resume_preview_service::GetResumePreviewService;
