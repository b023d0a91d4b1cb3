use async_trait::async_trait;

use crate::modules::project::application::ports::outgoing::project_api::{
    DraftValidationError, ProjectDraft, ProjectId, ProjectRecord,
};

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateProjectError {
    /// Raised before any network I/O.
    #[error(transparent)]
    InvalidDraft(#[from] DraftValidationError),

    #[error("Project not found")]
    NotFound,

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
pub trait UpdateProjectUseCase: Send + Sync {
    async fn execute(
        &self,
        id: &ProjectId,
        draft: ProjectDraft,
    ) -> Result<ProjectRecord, UpdateProjectError>;
}
