//! Scripted API ports for controller-level tests. Each stub keeps a
//! queue of scripted results and falls back to an echo of the request
//! when the queue is empty, which is what the real server does on the
//! happy path.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::Notify;
use uuid::Uuid;

use crate::modules::media::application::ports::outgoing::media_api::{
    AssetReference, MediaApi, MediaApiError,
};
use crate::modules::portfolio::application::domain::entities::{PortfolioRecord, SectionPatch};
use crate::modules::portfolio::application::ports::outgoing::portfolio_api::{
    PortfolioApi, PortfolioApiError,
};
use crate::modules::project::application::ports::outgoing::project_api::{
    ProjectApi, ProjectApiError, ProjectDraft, ProjectId, ProjectRecord,
};
use crate::modules::resume::application::ports::outgoing::resume_api::{
    ResumeApi, ResumeApiError, ResumePreview,
};

//
// ──────────────────────────────────────────────────────────
// Projects
// ──────────────────────────────────────────────────────────
//

#[derive(Default)]
pub struct ProjectApiScript {
    pub list_queue: Mutex<VecDeque<Result<Vec<ProjectRecord>, ProjectApiError>>>,
    pub create_queue: Mutex<VecDeque<Result<ProjectRecord, ProjectApiError>>>,
    pub update_queue: Mutex<VecDeque<Result<ProjectRecord, ProjectApiError>>>,
    pub delete_queue: Mutex<VecDeque<Result<(), ProjectApiError>>>,
    pub list_calls: AtomicUsize,
    pub create_calls: AtomicUsize,
    pub update_calls: AtomicUsize,
    pub delete_calls: AtomicUsize,
    /// When set, the first list call blocks here after taking its
    /// scripted response, so a second call can overtake it.
    first_list_gate: Mutex<Option<Arc<Notify>>>,
}

#[derive(Clone, Default)]
pub struct StubProjectApi {
    inner: Arc<ProjectApiScript>,
}

impl StubProjectApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn script(&self) -> &ProjectApiScript {
        &self.inner
    }

    pub fn push_list(&self, result: Result<Vec<ProjectRecord>, ProjectApiError>) {
        self.inner.list_queue.lock().unwrap().push_back(result);
    }

    pub fn push_update(&self, result: Result<ProjectRecord, ProjectApiError>) {
        self.inner.update_queue.lock().unwrap().push_back(result);
    }

    pub fn push_delete(&self, result: Result<(), ProjectApiError>) {
        self.inner.delete_queue.lock().unwrap().push_back(result);
    }

    pub fn gate_first_list(&self) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        *self.inner.first_list_gate.lock().unwrap() = Some(Arc::clone(&gate));
        gate
    }

    fn record_from(id: ProjectId, draft: &ProjectDraft) -> ProjectRecord {
        ProjectRecord {
            id,
            title: draft.title.clone(),
            description: draft.description.clone(),
            technologies: draft.technologies.clone(),
            github_link: draft.github_link.clone(),
            demo_link: draft.demo_link.clone(),
            image: draft.image.clone(),
        }
    }
}

#[async_trait]
impl ProjectApi for StubProjectApi {
    async fn list_projects(&self) -> Result<Vec<ProjectRecord>, ProjectApiError> {
        let call_index = self.inner.list_calls.fetch_add(1, Ordering::SeqCst);
        let result = self
            .inner
            .list_queue
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(vec![]));

        if call_index == 0 {
            let gate = self.inner.first_list_gate.lock().unwrap().clone();
            if let Some(gate) = gate {
                gate.notified().await;
            }
        }

        result
    }

    async fn create_project(&self, draft: &ProjectDraft) -> Result<ProjectRecord, ProjectApiError> {
        self.inner.create_calls.fetch_add(1, Ordering::SeqCst);
        self.inner
            .create_queue
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| {
                Ok(Self::record_from(
                    ProjectId::from(Uuid::new_v4().to_string()),
                    draft,
                ))
            })
    }

    async fn update_project(
        &self,
        id: &ProjectId,
        draft: &ProjectDraft,
    ) -> Result<ProjectRecord, ProjectApiError> {
        self.inner.update_calls.fetch_add(1, Ordering::SeqCst);
        self.inner
            .update_queue
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(Self::record_from(id.clone(), draft)))
    }

    async fn delete_project(&self, _id: &ProjectId) -> Result<(), ProjectApiError> {
        self.inner.delete_calls.fetch_add(1, Ordering::SeqCst);
        self.inner
            .delete_queue
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Ok(()))
    }
}

//
// ──────────────────────────────────────────────────────────
// Portfolio
// ──────────────────────────────────────────────────────────
// Mimics the server's merge: holds a record, applies each patch to
// it, answers with the merged record.
//

#[derive(Default)]
pub struct PortfolioApiScript {
    pub state: Mutex<PortfolioRecord>,
    pub fail_next: Mutex<Option<PortfolioApiError>>,
    pub update_calls: AtomicUsize,
    pub patches: Mutex<Vec<SectionPatch>>,
}

#[derive(Clone, Default)]
pub struct StubPortfolioApi {
    inner: Arc<PortfolioApiScript>,
}

impl StubPortfolioApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_state(record: PortfolioRecord) -> Self {
        let stub = Self::default();
        *stub.inner.state.lock().unwrap() = record;
        stub
    }

    pub fn script(&self) -> &PortfolioApiScript {
        &self.inner
    }

    pub fn fail_next(&self, error: PortfolioApiError) {
        *self.inner.fail_next.lock().unwrap() = Some(error);
    }
}

#[async_trait]
impl PortfolioApi for StubPortfolioApi {
    async fn fetch_portfolio(&self) -> Result<PortfolioRecord, PortfolioApiError> {
        if let Some(err) = self.inner.fail_next.lock().unwrap().take() {
            return Err(err);
        }
        Ok(self.inner.state.lock().unwrap().clone())
    }

    async fn update_section(
        &self,
        patch: &SectionPatch,
    ) -> Result<PortfolioRecord, PortfolioApiError> {
        self.inner.update_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(err) = self.inner.fail_next.lock().unwrap().take() {
            return Err(err);
        }

        self.inner.patches.lock().unwrap().push(patch.clone());
        let mut state = self.inner.state.lock().unwrap();
        state.apply(patch.clone());
        Ok(state.clone())
    }
}

//
// ──────────────────────────────────────────────────────────
// Media and resume
// ──────────────────────────────────────────────────────────
//

#[derive(Default)]
pub struct MediaApiScript {
    pub fail_next: Mutex<Option<MediaApiError>>,
    pub uploads: Mutex<Vec<String>>,
}

#[derive(Clone, Default)]
pub struct StubMediaApi {
    inner: Arc<MediaApiScript>,
}

impl StubMediaApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_next(&self, error: MediaApiError) {
        *self.inner.fail_next.lock().unwrap() = Some(error);
    }
}

#[async_trait]
impl MediaApi for StubMediaApi {
    async fn upload(
        &self,
        _bytes: Vec<u8>,
        file_name: &str,
    ) -> Result<AssetReference, MediaApiError> {
        if let Some(err) = self.inner.fail_next.lock().unwrap().take() {
            return Err(err);
        }

        self.inner.uploads.lock().unwrap().push(file_name.to_string());
        Ok(AssetReference {
            filename: format!("{}_{file_name}", Uuid::new_v4()),
            url: None,
        })
    }
}

#[derive(Clone, Default)]
pub struct StubResumeApi {
    preview: Arc<Mutex<ResumePreview>>,
    fail_next: Arc<Mutex<Option<ResumeApiError>>>,
}

impl StubResumeApi {
    pub fn with_preview(preview: ResumePreview) -> Self {
        Self {
            preview: Arc::new(Mutex::new(preview)),
            fail_next: Arc::default(),
        }
    }

    pub fn fail_next(&self, error: ResumeApiError) {
        *self.fail_next.lock().unwrap() = Some(error);
    }
}

#[async_trait]
impl ResumeApi for StubResumeApi {
    async fn fetch_resume_preview(&self) -> Result<ResumePreview, ResumeApiError> {
        if let Some(err) = self.fail_next.lock().unwrap().take() {
            return Err(err);
        }
        Ok(self.preview.lock().unwrap().clone())
    }
}
