use async_trait::async_trait;

use crate::modules::resume::application::ports::outgoing::resume_api::ResumePreview;

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetResumePreviewError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Server error: {0}")]
    Server(String),
}

//
// ──────────────────────────────────────────────────────────
// Use case trait
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait GetResumePreviewUseCase: Send + Sync {
    async fn execute(&self) -> Result<ResumePreview, GetResumePreviewError>;
}
