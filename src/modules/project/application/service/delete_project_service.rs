use async_trait::async_trait;

use crate::modules::project::application::ports::incoming::use_cases::{
    DeleteProjectError, DeleteProjectUseCase,
};
use crate::modules::project::application::ports::outgoing::project_api::{
    ProjectApi, ProjectApiError, ProjectId,
};

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

pub struct DeleteProjectService<A>
where
    A: ProjectApi,
{
    api: A,
}

impl<A> DeleteProjectService<A>
where
    A: ProjectApi,
{
    pub fn new(api: A) -> Self {
        Self { api }
    }
}

#[async_trait]
impl<A> DeleteProjectUseCase for DeleteProjectService<A>
where
    A: ProjectApi + Send + Sync,
{
    async fn execute(&self, id: &ProjectId) -> Result<(), DeleteProjectError> {
        self.api.delete_project(id).await.map_err(|e| match e {
            ProjectApiError::NotFound => DeleteProjectError::NotFound,
            ProjectApiError::Network(msg) => DeleteProjectError::Network(msg),
            ProjectApiError::Server(msg) => DeleteProjectError::Server(msg),
            ProjectApiError::Decode(msg) => DeleteProjectError::Server(msg),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    use crate::modules::project::application::ports::outgoing::project_api::{
        ProjectDraft, ProjectRecord,
    };

    #[derive(Clone)]
    struct StubProjectApi {
        result: Result<(), ProjectApiError>,
    }

    #[async_trait]
    impl ProjectApi for StubProjectApi {
        async fn list_projects(&self) -> Result<Vec<ProjectRecord>, ProjectApiError> {
            unimplemented!("not needed for delete_project tests")
        }

        async fn create_project(
            &self,
            _draft: &ProjectDraft,
        ) -> Result<ProjectRecord, ProjectApiError> {
            unimplemented!("not needed for delete_project tests")
        }

        async fn update_project(
            &self,
            _id: &ProjectId,
            _draft: &ProjectDraft,
        ) -> Result<ProjectRecord, ProjectApiError> {
            unimplemented!("not needed for delete_project tests")
        }

        async fn delete_project(&self, _id: &ProjectId) -> Result<(), ProjectApiError> {
            self.result.clone()
        }
    }

    #[tokio::test]
    async fn execute_confirms_the_deletion() {
        let service = DeleteProjectService::new(StubProjectApi { result: Ok(()) });
        assert!(service.execute(&ProjectId::from("5")).await.is_ok());
    }

    #[tokio::test]
    async fn execute_maps_missing_id_to_not_found() {
        let service = DeleteProjectService::new(StubProjectApi {
            result: Err(ProjectApiError::NotFound),
        });

        let err = service.execute(&ProjectId::from("missing")).await.unwrap_err();
        assert!(matches!(err, DeleteProjectError::NotFound));
    }

    #[tokio::test]
    async fn execute_maps_server_errors() {
        let service = DeleteProjectService::new(StubProjectApi {
            result: Err(ProjectApiError::Server("write failed".to_string())),
        });

        let err = service.execute(&ProjectId::from("5")).await.unwrap_err();
        assert!(matches!(err, DeleteProjectError::Server(msg) if msg == "write failed"));
    }
}
