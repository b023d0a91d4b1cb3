// src/modules/project/adapter/outgoing/project_api_http.rs

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use url::Url;

use crate::modules::project::application::ports::outgoing::project_api::{
    ProjectApi, ProjectApiError, ProjectDraft, ProjectId, ProjectRecord,
};
use crate::shared::api::envelope::{ApiEnvelope, ApiStatus};

//
// ──────────────────────────────────────────────────────────
// HTTP adapter
// ──────────────────────────────────────────────────────────
// Endpoints:
//   GET    api/projects        -> { projects: [..] }        (no envelope)
//   POST   api/projects        -> { success, project, error }
//   PUT    api/projects/{id}   -> { success, project, error } (404 on unknown id)
//   DELETE api/projects/{id}   -> { success, deleted, error } (404 on unknown id)
//

#[derive(Debug, Clone)]
pub struct ProjectApiHttp {
    http: reqwest::Client,
    base_url: Url,
}

#[derive(Debug, Deserialize)]
struct ProjectListBody {
    #[serde(default)]
    projects: Vec<ProjectRecord>,
}

#[derive(Debug, Default, Deserialize)]
struct ProjectBody {
    #[serde(default)]
    project: Option<ProjectRecord>,
}

impl ProjectApiHttp {
    pub fn new(http: reqwest::Client, base_url: Url) -> Self {
        Self { http, base_url }
    }

    fn endpoint(&self, path: &str) -> Result<Url, ProjectApiError> {
        self.base_url
            .join(path)
            .map_err(|e| ProjectApiError::Network(format!("invalid endpoint {path}: {e}")))
    }

    async fn read_project(response: reqwest::Response) -> Result<ProjectRecord, ProjectApiError> {
        let envelope: ApiEnvelope<ProjectBody> = response
            .json()
            .await
            .map_err(|e| ProjectApiError::Decode(e.to_string()))?;

        let body = envelope
            .confirmed()
            .map_err(|rejection| ProjectApiError::Server(rejection.to_string()))?;

        body.project
            .ok_or_else(|| ProjectApiError::Decode("response missing project".to_string()))
    }

    async fn fail_from_status(response: reqwest::Response) -> ProjectApiError {
        let status = response.status();
        match response.json::<ApiStatus>().await {
            Ok(body) => ProjectApiError::Server(
                body.error.unwrap_or_else(|| format!("HTTP {status}")),
            ),
            Err(_) => ProjectApiError::Server(format!("HTTP {status}")),
        }
    }
}

#[async_trait]
impl ProjectApi for ProjectApiHttp {
    async fn list_projects(&self) -> Result<Vec<ProjectRecord>, ProjectApiError> {
        let url = self.endpoint("api/projects")?;
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| ProjectApiError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(Self::fail_from_status(response).await);
        }

        let body: ProjectListBody = response
            .json()
            .await
            .map_err(|e| ProjectApiError::Decode(e.to_string()))?;
        Ok(body.projects)
    }

    async fn create_project(&self, draft: &ProjectDraft) -> Result<ProjectRecord, ProjectApiError> {
        let url = self.endpoint("api/projects")?;
        tracing::debug!(title = %draft.title, "creating project");

        let response = self
            .http
            .post(url)
            .json(draft)
            .send()
            .await
            .map_err(|e| ProjectApiError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(Self::fail_from_status(response).await);
        }

        Self::read_project(response).await
    }

    async fn update_project(
        &self,
        id: &ProjectId,
        draft: &ProjectDraft,
    ) -> Result<ProjectRecord, ProjectApiError> {
        let url = self.endpoint(&format!("api/projects/{id}"))?;
        tracing::debug!(%id, "updating project");

        let response = self
            .http
            .put(url)
            .json(draft)
            .send()
            .await
            .map_err(|e| ProjectApiError::Network(e.to_string()))?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(ProjectApiError::NotFound);
        }
        if !response.status().is_success() {
            return Err(Self::fail_from_status(response).await);
        }

        Self::read_project(response).await
    }

    async fn delete_project(&self, id: &ProjectId) -> Result<(), ProjectApiError> {
        let url = self.endpoint(&format!("api/projects/{id}"))?;
        tracing::debug!(%id, "deleting project");

        let response = self
            .http
            .delete(url)
            .send()
            .await
            .map_err(|e| ProjectApiError::Network(e.to_string()))?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(ProjectApiError::NotFound);
        }
        if !response.status().is_success() {
            return Err(Self::fail_from_status(response).await);
        }

        let status: ApiStatus = response
            .json()
            .await
            .map_err(|e| ProjectApiError::Decode(e.to_string()))?;
        status
            .confirmed()
            .map_err(|rejection| ProjectApiError::Server(rejection.to_string()))
    }
}
