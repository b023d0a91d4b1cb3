use async_trait::async_trait;

use crate::modules::portfolio::application::domain::entities::{PortfolioRecord, SectionPatch};
use crate::modules::portfolio::application::ports::incoming::use_cases::{
    UpdatePortfolioSectionError, UpdatePortfolioSectionUseCase,
};
use crate::modules::portfolio::application::ports::outgoing::portfolio_api::{
    PortfolioApi, PortfolioApiError,
};

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

pub struct UpdatePortfolioSectionService<A>
where
    A: PortfolioApi,
{
    api: A,
}

impl<A> UpdatePortfolioSectionService<A>
where
    A: PortfolioApi,
{
    pub fn new(api: A) -> Self {
        Self { api }
    }
}

#[async_trait]
impl<A> UpdatePortfolioSectionUseCase for UpdatePortfolioSectionService<A>
where
    A: PortfolioApi + Send + Sync,
{
    async fn execute(
        &self,
        patch: SectionPatch,
    ) -> Result<PortfolioRecord, UpdatePortfolioSectionError> {
        self.api.update_section(&patch).await.map_err(|e| match e {
            PortfolioApiError::Network(msg) => UpdatePortfolioSectionError::Network(msg),
            PortfolioApiError::Server(msg) => UpdatePortfolioSectionError::Server(msg),
            PortfolioApiError::Decode(msg) => UpdatePortfolioSectionError::Server(msg),
        })
    }
}
