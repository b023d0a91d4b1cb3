use async_trait::async_trait;

use crate::modules::portfolio::application::domain::entities::{PortfolioRecord, SectionPatch};

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdatePortfolioSectionError {
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
pub trait UpdatePortfolioSectionUseCase: Send + Sync {
    /// Returns the full server-confirmed record; callers pick the
    /// subsection they care about out of it.
    async fn execute(
        &self,
        patch: SectionPatch,
    ) -> Result<PortfolioRecord, UpdatePortfolioSectionError>;
}
