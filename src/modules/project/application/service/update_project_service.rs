use async_trait::async_trait;

use crate::modules::project::application::ports::incoming::use_cases::{
    UpdateProjectError, UpdateProjectUseCase,
};
use crate::modules::project::application::ports::outgoing::project_api::{
    ProjectApi, ProjectApiError, ProjectDraft, ProjectId, ProjectRecord,
};

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

pub struct UpdateProjectService<A>
where
    A: ProjectApi,
{
    api: A,
}

impl<A> UpdateProjectService<A>
where
    A: ProjectApi,
{
    pub fn new(api: A) -> Self {
        Self { api }
    }
}

#[async_trait]
impl<A> UpdateProjectUseCase for UpdateProjectService<A>
where
    A: ProjectApi + Send + Sync,
{
    async fn execute(
        &self,
        id: &ProjectId,
        draft: ProjectDraft,
    ) -> Result<ProjectRecord, UpdateProjectError> {
        draft.validate()?;

        self.api
            .update_project(id, &draft)
            .await
            .map_err(|e| match e {
                ProjectApiError::NotFound => UpdateProjectError::NotFound,
                ProjectApiError::Network(msg) => UpdateProjectError::Network(msg),
                ProjectApiError::Server(msg) => UpdateProjectError::Server(msg),
                ProjectApiError::Decode(msg) => UpdateProjectError::Server(msg),
            })
    }
}
