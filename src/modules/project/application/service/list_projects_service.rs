use async_trait::async_trait;

use crate::modules::project::application::ports::incoming::use_cases::{
    ListProjectsError, ListProjectsUseCase,
};
use crate::modules::project::application::ports::outgoing::project_api::{
    ProjectApi, ProjectApiError, ProjectRecord,
};

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

pub struct ListProjectsService<A>
where
    A: ProjectApi,
{
    api: A,
}

impl<A> ListProjectsService<A>
where
    A: ProjectApi,
{
    pub fn new(api: A) -> Self {
        Self { api }
    }
}

#[async_trait]
impl<A> ListProjectsUseCase for ListProjectsService<A>
where
    A: ProjectApi + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<ProjectRecord>, ListProjectsError> {
        self.api.list_projects().await.map_err(|e| match e {
            ProjectApiError::Network(msg) => ListProjectsError::Network(msg),
            ProjectApiError::Server(msg) => ListProjectsError::Server(msg),
            ProjectApiError::Decode(msg) => ListProjectsError::Server(msg),
            // The collection endpoint has no id to miss.
            ProjectApiError::NotFound => {
                ListProjectsError::Server("unexpected not found while listing projects".to_string())
            }
        })
    }
}
