// src/modules/resume/adapter/outgoing/resume_api_http.rs

use async_trait::async_trait;
use serde::Deserialize;
use url::Url;

use crate::modules::resume::application::ports::outgoing::resume_api::{
    ResumeApi, ResumeApiError, ResumePreview,
};
use crate::shared::api::envelope::{ApiEnvelope, ApiStatus};

//
// ──────────────────────────────────────────────────────────
// HTTP adapter
// ──────────────────────────────────────────────────────────
// GET api/resume/preview -> { success, resume_data, error }
//

#[derive(Debug, Clone)]
pub struct ResumeApiHttp {
    http: reqwest::Client,
    base_url: Url,
}

#[derive(Debug, Default, Deserialize)]
struct ResumeBody {
    #[serde(default)]
    resume_data: Option<ResumePreview>,
}

impl ResumeApiHttp {
    pub fn new(http: reqwest::Client, base_url: Url) -> Self {
        Self { http, base_url }
    }
}

#[async_trait]
impl ResumeApi for ResumeApiHttp {
    async fn fetch_resume_preview(&self) -> Result<ResumePreview, ResumeApiError> {
        let url = self
            .base_url
            .join("api/resume/preview")
            .map_err(|e| ResumeApiError::Network(format!("invalid endpoint: {e}")))?;

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| ResumeApiError::Network(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            return Err(match response.json::<ApiStatus>().await {
                Ok(body) => ResumeApiError::Server(
                    body.error.unwrap_or_else(|| format!("HTTP {status}")),
                ),
                Err(_) => ResumeApiError::Server(format!("HTTP {status}")),
            });
        }

        let envelope: ApiEnvelope<ResumeBody> = response
            .json()
            .await
            .map_err(|e| ResumeApiError::Decode(e.to_string()))?;

        let body = envelope
            .confirmed()
            .map_err(|rejection| ResumeApiError::Server(rejection.to_string()))?;

        body.resume_data
            .ok_or_else(|| ResumeApiError::Decode("response missing resume_data".to_string()))
    }
}
