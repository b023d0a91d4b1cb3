use async_trait::async_trait;

use crate::modules::resume::application::ports::incoming::use_cases::{
    GetResumePreviewError, GetResumePreviewUseCase,
};
use crate::modules::resume::application::ports::outgoing::resume_api::{
    ResumeApi, ResumeApiError, ResumePreview,
};

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

pub struct GetResumePreviewService<A>
where
    A: ResumeApi,
{
    api: A,
}

impl<A> GetResumePreviewService<A>
where
    A: ResumeApi,
{
    pub fn new(api: A) -> Self {
        Self { api }
    }
}

#[async_trait]
impl<A> GetResumePreviewUseCase for GetResumePreviewService<A>
where
    A: ResumeApi + Send + Sync,
{
    async fn execute(&self) -> Result<ResumePreview, GetResumePreviewError> {
        self.api.fetch_resume_preview().await.map_err(|e| match e {
            ResumeApiError::Network(msg) => GetResumePreviewError::Network(msg),
            ResumeApiError::Server(msg) => GetResumePreviewError::Server(msg),
            ResumeApiError::Decode(msg) => GetResumePreviewError::Server(msg),
        })
    }
}
