// src/modules/media/application/ports/outgoing/media_api.rs

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

//
// ──────────────────────────────────────────────────────────
// DTOs
// ──────────────────────────────────────────────────────────
//

/// Server-assigned handle for an uploaded asset. `filename` is what a
/// project stores in its `image` field; `url` is where the renderer
/// can show it from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetReference {
    pub filename: String,

    #[serde(default)]
    pub url: Option<String>,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum MediaApiError {
    #[error("Network error: {0}")]
    Network(String),

    /// Covers rejected uploads too (no file, disallowed type).
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
pub trait MediaApi: Send + Sync {
    async fn upload(
        &self,
        bytes: Vec<u8>,
        file_name: &str,
    ) -> Result<AssetReference, MediaApiError>;
}
