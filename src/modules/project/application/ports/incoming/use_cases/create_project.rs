use async_trait::async_trait;

use crate::modules::project::application::ports::outgoing::project_api::{
    DraftValidationError, ProjectDraft, ProjectRecord,
};

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateProjectError {
    /// Raised before any network I/O.
    #[error(transparent)]
    InvalidDraft(#[from] DraftValidationError),

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
pub trait CreateProjectUseCase: Send + Sync {
    async fn execute(&self, draft: ProjectDraft) -> Result<ProjectRecord, CreateProjectError>;
}
