use async_trait::async_trait;

use crate::modules::media::application::ports::incoming::use_cases::{
    UploadAssetError, UploadAssetUseCase,
};
use crate::modules::media::application::ports::outgoing::media_api::{
    AssetReference, MediaApi, MediaApiError,
};

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

pub struct UploadAssetService<A>
where
    A: MediaApi,
{
    api: A,
}

impl<A> UploadAssetService<A>
where
    A: MediaApi,
{
    pub fn new(api: A) -> Self {
        Self { api }
    }
}

#[async_trait]
impl<A> UploadAssetUseCase for UploadAssetService<A>
where
    A: MediaApi + Send + Sync,
{
    async fn execute(
        &self,
        bytes: Vec<u8>,
        file_name: &str,
    ) -> Result<AssetReference, UploadAssetError> {
        tracing::debug!(file_name, size = bytes.len(), "uploading asset");

        self.api
            .upload(bytes, file_name)
            .await
            .map_err(|e| match e {
                MediaApiError::Network(msg) => UploadAssetError::Network(msg),
                MediaApiError::Server(msg) => UploadAssetError::Server(msg),
                MediaApiError::Decode(msg) => UploadAssetError::Server(msg),
            })
    }
}
