// src/modules/portfolio/application/ports/outgoing/portfolio_api.rs

use async_trait::async_trait;

use crate::modules::portfolio::application::domain::entities::{PortfolioRecord, SectionPatch};

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum PortfolioApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Server error: {0}")]
    Server(String),

    #[error("Malformed response: {0}")]
    Decode(String),
}

//
// ──────────────────────────────────────────────────────────
// Port
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait PortfolioApi: Send + Sync {
    async fn fetch_portfolio(&self) -> Result<PortfolioRecord, PortfolioApiError>;

    /// The server merges the patched subsection into its record and
    /// answers with the full updated record.
    async fn update_section(
        &self,
        patch: &SectionPatch,
    ) -> Result<PortfolioRecord, PortfolioApiError>;
}
