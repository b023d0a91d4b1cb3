use async_trait::async_trait;

use crate::modules::media::application::ports::outgoing::media_api::AssetReference;

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum UploadAssetError {
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
pub trait UploadAssetUseCase: Send + Sync {
    async fn execute(
        &self,
        bytes: Vec<u8>,
        file_name: &str,
    ) -> Result<AssetReference, UploadAssetError>;
}
