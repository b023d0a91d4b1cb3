use async_trait::async_trait;

use crate::modules::portfolio::application::domain::entities::PortfolioRecord;
use crate::modules::portfolio::application::ports::incoming::use_cases::{
    GetPortfolioError, GetPortfolioUseCase,
};
use crate::modules::portfolio::application::ports::outgoing::portfolio_api::{
    PortfolioApi, PortfolioApiError,
};

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

pub struct GetPortfolioService<A>
where
    A: PortfolioApi,
{
    api: A,
}

impl<A> GetPortfolioService<A>
where
    A: PortfolioApi,
{
    pub fn new(api: A) -> Self {
        Self { api }
    }
}

#[async_trait]
impl<A> GetPortfolioUseCase for GetPortfolioService<A>
where
    A: PortfolioApi + Send + Sync,
{
    async fn execute(&self) -> Result<PortfolioRecord, GetPortfolioError> {
        self.api.fetch_portfolio().await.map_err(|e| match e {
            PortfolioApiError::Network(msg) => GetPortfolioError::Network(msg),
            PortfolioApiError::Server(msg) => GetPortfolioError::Server(msg),
            PortfolioApiError::Decode(msg) => GetPortfolioError::Server(msg),
        })
    }
}
