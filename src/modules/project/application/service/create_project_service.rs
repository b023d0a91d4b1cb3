use async_trait::async_trait;

use crate::modules::project::application::ports::incoming::use_cases::{
    CreateProjectError, CreateProjectUseCase,
};
use crate::modules::project::application::ports::outgoing::project_api::{
    ProjectApi, ProjectApiError, ProjectDraft, ProjectRecord,
};

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

pub struct CreateProjectService<A>
where
    A: ProjectApi,
{
    api: A,
}

impl<A> CreateProjectService<A>
where
    A: ProjectApi,
{
    pub fn new(api: A) -> Self {
        Self { api }
    }
}

#[async_trait]
impl<A> CreateProjectUseCase for CreateProjectService<A>
where
    A: ProjectApi + Send + Sync,
{
    async fn execute(&self, draft: ProjectDraft) -> Result<ProjectRecord, CreateProjectError> {
        draft.validate()?;

        self.api.create_project(&draft).await.map_err(|e| match e {
            ProjectApiError::Network(msg) => CreateProjectError::Network(msg),
            ProjectApiError::Server(msg) => CreateProjectError::Server(msg),
            ProjectApiError::Decode(msg) => CreateProjectError::Server(msg),
            // Creation addresses no existing id.
            ProjectApiError::NotFound => CreateProjectError::Server(
                "unexpected not found while creating project".to_string(),
            ),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use crate::modules::project::application::ports::outgoing::project_api::{
        DraftValidationError, ProjectId,
    };

    struct StubProjectApi {
        result: Result<ProjectRecord, ProjectApiError>,
        calls: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl ProjectApi for StubProjectApi {
        async fn list_projects(&self) -> Result<Vec<ProjectRecord>, ProjectApiError> {
            unimplemented!("not needed for create_project tests")
        }

        async fn create_project(
            &self,
            _draft: &ProjectDraft,
        ) -> Result<ProjectRecord, ProjectApiError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.result.clone()
        }

        async fn update_project(
            &self,
            _id: &ProjectId,
            _draft: &ProjectDraft,
        ) -> Result<ProjectRecord, ProjectApiError> {
            unimplemented!("not needed for create_project tests")
        }

        async fn delete_project(&self, _id: &ProjectId) -> Result<(), ProjectApiError> {
            unimplemented!("not needed for create_project tests")
        }
    }

    fn sample_draft() -> ProjectDraft {
        ProjectDraft {
            title: "Portfolio Site".to_string(),
            description: "A site.".to_string(),
            technologies: vec!["TypeScript".to_string()],
            ..Default::default()
        }
    }

    fn confirmed(draft: &ProjectDraft) -> ProjectRecord {
        ProjectRecord {
            id: ProjectId::from(uuid::Uuid::new_v4().to_string()),
            title: draft.title.clone(),
            description: draft.description.clone(),
            technologies: draft.technologies.clone(),
            github_link: draft.github_link.clone(),
            demo_link: draft.demo_link.clone(),
            image: draft.image.clone(),
        }
    }

    #[tokio::test]
    async fn execute_returns_the_confirmed_record() {
        let draft = sample_draft();
        let record = confirmed(&draft);
        let service = CreateProjectService::new(StubProjectApi {
            result: Ok(record.clone()),
            calls: Arc::new(AtomicUsize::new(0)),
        });

        let created = service.execute(draft.clone()).await.unwrap();
        assert!(!created.id.as_str().is_empty());
        assert_eq!(created.title, draft.title);
        assert_eq!(created.technologies, draft.technologies);
        assert_eq!(created.image, None);
    }

    #[tokio::test]
    async fn invalid_draft_never_reaches_the_api() {
        let calls = Arc::new(AtomicUsize::new(0));
        let service = CreateProjectService::new(StubProjectApi {
            result: Ok(confirmed(&sample_draft())),
            calls: Arc::clone(&calls),
        });

        let err = service
            .execute(ProjectDraft {
                title: String::new(),
                ..sample_draft()
            })
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            CreateProjectError::InvalidDraft(DraftValidationError::MissingTitle)
        ));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn execute_maps_server_errors() {
        let service = CreateProjectService::new(StubProjectApi {
            result: Err(ProjectApiError::Server("disk full".to_string())),
            calls: Arc::new(AtomicUsize::new(0)),
        });

        let err = service.execute(sample_draft()).await.unwrap_err();
        assert!(matches!(err, CreateProjectError::Server(msg) if msg == "disk full"));
    }

    #[tokio::test]
    async fn execute_maps_unexpected_not_found() {
        let service = CreateProjectService::new(StubProjectApi {
            result: Err(ProjectApiError::NotFound),
            calls: Arc::new(AtomicUsize::new(0)),
        });

        let err = service.execute(sample_draft()).await.unwrap_err();
        assert!(matches!(
            err,
            CreateProjectError::Server(msg)
                if msg == "unexpected not found while creating project"
        ));
    }
}
