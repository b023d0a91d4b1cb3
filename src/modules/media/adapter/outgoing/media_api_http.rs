// src/modules/media/adapter/outgoing/media_api_http.rs

use async_trait::async_trait;
use reqwest::multipart;
use serde::Deserialize;
use url::Url;

use crate::modules::media::application::ports::outgoing::media_api::{
    AssetReference, MediaApi, MediaApiError,
};
use crate::shared::api::envelope::{ApiEnvelope, ApiStatus};

//
// ──────────────────────────────────────────────────────────
// HTTP adapter
// ──────────────────────────────────────────────────────────
// POST api/upload (multipart `file` part) -> { success, filename, url, error }
//

#[derive(Debug, Clone)]
pub struct MediaApiHttp {
    http: reqwest::Client,
    base_url: Url,
}

#[derive(Debug, Default, Deserialize)]
struct UploadBody {
    #[serde(default)]
    filename: Option<String>,
    #[serde(default)]
    url: Option<String>,
}

impl MediaApiHttp {
    pub fn new(http: reqwest::Client, base_url: Url) -> Self {
        Self { http, base_url }
    }
}

#[async_trait]
impl MediaApi for MediaApiHttp {
    async fn upload(
        &self,
        bytes: Vec<u8>,
        file_name: &str,
    ) -> Result<AssetReference, MediaApiError> {
        let url = self
            .base_url
            .join("api/upload")
            .map_err(|e| MediaApiError::Network(format!("invalid endpoint: {e}")))?;

        let part = multipart::Part::bytes(bytes).file_name(file_name.to_string());
        let form = multipart::Form::new().part("file", part);

        let response = self
            .http
            .post(url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| MediaApiError::Network(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            return Err(match response.json::<ApiStatus>().await {
                Ok(body) => MediaApiError::Server(
                    body.error.unwrap_or_else(|| format!("HTTP {status}")),
                ),
                Err(_) => MediaApiError::Server(format!("HTTP {status}")),
            });
        }

        let envelope: ApiEnvelope<UploadBody> = response
            .json()
            .await
            .map_err(|e| MediaApiError::Decode(e.to_string()))?;

        let body = envelope
            .confirmed()
            .map_err(|rejection| MediaApiError::Server(rejection.to_string()))?;

        let filename = body
            .filename
            .ok_or_else(|| MediaApiError::Decode("response missing filename".to_string()))?;

        Ok(AssetReference {
            filename,
            url: body.url,
        })
    }
}
