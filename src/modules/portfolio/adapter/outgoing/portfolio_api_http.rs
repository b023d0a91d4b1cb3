// src/modules/portfolio/adapter/outgoing/portfolio_api_http.rs

use async_trait::async_trait;
use serde::Deserialize;
use url::Url;

use crate::modules::portfolio::application::domain::entities::{PortfolioRecord, SectionPatch};
use crate::modules::portfolio::application::ports::outgoing::portfolio_api::{
    PortfolioApi, PortfolioApiError,
};
use crate::shared::api::envelope::{ApiEnvelope, ApiStatus};

//
// ──────────────────────────────────────────────────────────
// HTTP adapter
// ──────────────────────────────────────────────────────────
// Endpoints:
//   GET api/portfolio -> bare portfolio record
//   PUT api/portfolio -> { success, portfolio, error }
//

#[derive(Debug, Clone)]
pub struct PortfolioApiHttp {
    http: reqwest::Client,
    base_url: Url,
}

#[derive(Debug, Default, Deserialize)]
struct PortfolioBody {
    #[serde(default)]
    portfolio: Option<PortfolioRecord>,
}

impl PortfolioApiHttp {
    pub fn new(http: reqwest::Client, base_url: Url) -> Self {
        Self { http, base_url }
    }

    fn endpoint(&self) -> Result<Url, PortfolioApiError> {
        self.base_url
            .join("api/portfolio")
            .map_err(|e| PortfolioApiError::Network(format!("invalid endpoint: {e}")))
    }

    async fn fail_from_status(response: reqwest::Response) -> PortfolioApiError {
        let status = response.status();
        match response.json::<ApiStatus>().await {
            Ok(body) => PortfolioApiError::Server(
                body.error.unwrap_or_else(|| format!("HTTP {status}")),
            ),
            Err(_) => PortfolioApiError::Server(format!("HTTP {status}")),
        }
    }
}

#[async_trait]
impl PortfolioApi for PortfolioApiHttp {
    async fn fetch_portfolio(&self) -> Result<PortfolioRecord, PortfolioApiError> {
        let response = self
            .http
            .get(self.endpoint()?)
            .send()
            .await
            .map_err(|e| PortfolioApiError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(Self::fail_from_status(response).await);
        }

        response
            .json()
            .await
            .map_err(|e| PortfolioApiError::Decode(e.to_string()))
    }

    async fn update_section(
        &self,
        patch: &SectionPatch,
    ) -> Result<PortfolioRecord, PortfolioApiError> {
        tracing::debug!(section = %patch.name(), "saving portfolio section");

        let response = self
            .http
            .put(self.endpoint()?)
            .json(patch)
            .send()
            .await
            .map_err(|e| PortfolioApiError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(Self::fail_from_status(response).await);
        }

        let envelope: ApiEnvelope<PortfolioBody> = response
            .json()
            .await
            .map_err(|e| PortfolioApiError::Decode(e.to_string()))?;

        let body = envelope
            .confirmed()
            .map_err(|rejection| PortfolioApiError::Server(rejection.to_string()))?;

        body.portfolio
            .ok_or_else(|| PortfolioApiError::Decode("response missing portfolio".to_string()))
    }
}
