// src/controller.rs

use std::sync::Arc;
use std::time::Duration;

use crate::modules::media::adapter::outgoing::MediaApiHttp;
use crate::modules::media::application::ports::incoming::use_cases::{
    UploadAssetError, UploadAssetUseCase,
};
use crate::modules::media::application::ports::outgoing::media_api::{AssetReference, MediaApi};
use crate::modules::media::application::service::UploadAssetService;
use crate::modules::portfolio::adapter::outgoing::PortfolioApiHttp;
use crate::modules::portfolio::application::domain::entities::{
    PortfolioRecord, SectionName, SectionPatch,
};
use crate::modules::portfolio::application::ports::incoming::use_cases::{
    GetPortfolioError, GetPortfolioUseCase, UpdatePortfolioSectionError,
    UpdatePortfolioSectionUseCase,
};
use crate::modules::portfolio::application::ports::outgoing::portfolio_api::PortfolioApi;
use crate::modules::portfolio::application::service::{
    GetPortfolioService, UpdatePortfolioSectionService,
};
use crate::modules::project::adapter::outgoing::ProjectApiHttp;
use crate::modules::project::application::ports::incoming::use_cases::{
    CreateProjectError, CreateProjectUseCase, DeleteProjectError, DeleteProjectUseCase,
    ListProjectsError, ListProjectsUseCase, UpdateProjectError, UpdateProjectUseCase,
};
use crate::modules::project::application::ports::outgoing::project_api::{
    ProjectApi, ProjectDraft, ProjectId, ProjectRecord,
};
use crate::modules::project::application::service::{
    CreateProjectService, DeleteProjectService, ListProjectsService, UpdateProjectService,
};
use crate::modules::resume::adapter::outgoing::ResumeApiHttp;
use crate::modules::resume::application::ports::incoming::use_cases::{
    GetResumePreviewError, GetResumePreviewUseCase,
};
use crate::modules::resume::application::ports::outgoing::resume_api::{ResumeApi, ResumePreview};
use crate::modules::resume::application::service::GetResumePreviewService;
use crate::shared::config::{ApiConfig, ConfigError};
use crate::shared::debounce::Debouncer;
use crate::shared::notify::{Notification, NotificationSink};
use crate::shared::render::{RenderScope, RenderSink};
use crate::shared::tags::clean_entries;
use crate::store::{ContentStore, RequestSequencer, SharedContentStore, SyncTarget};

//
// ──────────────────────────────────────────────────────────
// SyncController
// ──────────────────────────────────────────────────────────
// The admin panel's single entry point: one instance per session,
// cheap to clone, handed by reference to whatever renders it. Each
// operation issues one API call; a confirmed response produces one
// store mutation and one re-render request, a failure produces one
// banner and leaves the store exactly as it was.
//

/// Certification edits coalesce for this long before committing.
const CERT_AUTOSAVE_DELAY: Duration = Duration::from_secs(1);

#[derive(Debug, thiserror::Error)]
pub enum ConnectError {
    #[error("failed to build HTTP client: {0}")]
    HttpClient(String),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

#[derive(Clone)]
pub struct SyncController {
    list_projects_uc: Arc<dyn ListProjectsUseCase>,
    create_project_uc: Arc<dyn CreateProjectUseCase>,
    update_project_uc: Arc<dyn UpdateProjectUseCase>,
    delete_project_uc: Arc<dyn DeleteProjectUseCase>,
    get_portfolio_uc: Arc<dyn GetPortfolioUseCase>,
    update_section_uc: Arc<dyn UpdatePortfolioSectionUseCase>,
    upload_asset_uc: Arc<dyn UploadAssetUseCase>,
    resume_preview_uc: Arc<dyn GetResumePreviewUseCase>,
    store: SharedContentStore,
    sequencer: Arc<RequestSequencer>,
    notifier: Arc<dyn NotificationSink>,
    renderer: Arc<dyn RenderSink>,
    cert_autosave: Arc<Debouncer>,
}

impl SyncController {
    /// Wire a controller over arbitrary API ports. `connect` is the
    /// production path; this one also serves tests and custom stacks.
    pub fn from_apis<P, F, M, R>(
        project_api: P,
        portfolio_api: F,
        media_api: M,
        resume_api: R,
        notifier: Arc<dyn NotificationSink>,
        renderer: Arc<dyn RenderSink>,
    ) -> Self
    where
        P: ProjectApi + Clone + 'static,
        F: PortfolioApi + Clone + 'static,
        M: MediaApi + 'static,
        R: ResumeApi + 'static,
    {
        Self {
            list_projects_uc: Arc::new(ListProjectsService::new(project_api.clone())),
            create_project_uc: Arc::new(CreateProjectService::new(project_api.clone())),
            update_project_uc: Arc::new(UpdateProjectService::new(project_api.clone())),
            delete_project_uc: Arc::new(DeleteProjectService::new(project_api)),
            get_portfolio_uc: Arc::new(GetPortfolioService::new(portfolio_api.clone())),
            update_section_uc: Arc::new(UpdatePortfolioSectionService::new(portfolio_api)),
            upload_asset_uc: Arc::new(UploadAssetService::new(media_api)),
            resume_preview_uc: Arc::new(GetResumePreviewService::new(resume_api)),
            store: ContentStore::shared(),
            sequencer: Arc::new(RequestSequencer::new()),
            notifier,
            renderer,
            cert_autosave: Arc::new(Debouncer::new(CERT_AUTOSAVE_DELAY)),
        }
    }

    /// Build the HTTP adapters against `config.base_url` and wire a
    /// controller over them.
    pub fn connect(
        config: ApiConfig,
        notifier: Arc<dyn NotificationSink>,
        renderer: Arc<dyn RenderSink>,
    ) -> Result<Self, ConnectError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ConnectError::HttpClient(e.to_string()))?;

        tracing::info!(base_url = %config.base_url, "connecting to portfolio API");

        Ok(Self::from_apis(
            ProjectApiHttp::new(http.clone(), config.base_url.clone()),
            PortfolioApiHttp::new(http.clone(), config.base_url.clone()),
            MediaApiHttp::new(http.clone(), config.base_url.clone()),
            ResumeApiHttp::new(http, config.base_url),
            notifier,
            renderer,
        ))
    }

    /// `connect` with configuration from `.env` / the environment.
    pub fn from_env(
        notifier: Arc<dyn NotificationSink>,
        renderer: Arc<dyn RenderSink>,
    ) -> Result<Self, ConnectError> {
        dotenvy::dotenv().ok();
        Self::connect(ApiConfig::from_env()?, notifier, renderer)
    }

    //
    // Snapshot access
    //

    /// Shared handle for the rendering layer.
    pub fn store(&self) -> &SharedContentStore {
        &self.store
    }

    pub async fn projects(&self) -> Vec<ProjectRecord> {
        self.store.lock().await.projects().to_vec()
    }

    pub async fn portfolio(&self) -> Option<PortfolioRecord> {
        self.store.lock().await.portfolio().cloned()
    }

    pub async fn search_projects(
        &self,
        search: &str,
        technology: Option<&str>,
    ) -> Vec<ProjectRecord> {
        self.store.lock().await.filter_projects(search, technology)
    }

    //
    // Projects
    //

    pub async fn list_projects(&self) -> Result<Vec<ProjectRecord>, ListProjectsError> {
        let ticket = self.sequencer.begin(SyncTarget::ProjectCollection);

        match self.list_projects_uc.execute().await {
            Ok(projects) => {
                if self.sequencer.is_current(&ticket) {
                    self.store.lock().await.replace_projects(projects.clone());
                    self.renderer.request_render(RenderScope::Projects);
                } else {
                    tracing::debug!("discarding stale project list response");
                }
                Ok(projects)
            }
            Err(err) => {
                self.notifier
                    .publish(Notification::danger(format!("Error loading projects: {err}")));
                Err(err)
            }
        }
    }

    pub async fn create_project(
        &self,
        draft: ProjectDraft,
    ) -> Result<ProjectRecord, CreateProjectError> {
        if let Err(invalid) = draft.validate() {
            self.notifier
                .publish(Notification::warning(invalid.to_string()));
            return Err(invalid.into());
        }

        match self.create_project_uc.execute(draft).await {
            Ok(record) => {
                self.store.lock().await.insert_project(record.clone());
                self.renderer.request_render(RenderScope::Projects);
                self.notifier
                    .publish(Notification::success("Project created successfully!"));
                Ok(record)
            }
            Err(err) => {
                self.notifier
                    .publish(Notification::danger(format!("Error saving project: {err}")));
                Err(err)
            }
        }
    }

    pub async fn update_project(
        &self,
        id: &ProjectId,
        draft: ProjectDraft,
    ) -> Result<ProjectRecord, UpdateProjectError> {
        if let Err(invalid) = draft.validate() {
            self.notifier
                .publish(Notification::warning(invalid.to_string()));
            return Err(invalid.into());
        }

        let ticket = self.sequencer.begin(SyncTarget::Project(id.clone()));

        match self.update_project_uc.execute(id, draft).await {
            Ok(record) => {
                if self.sequencer.is_current(&ticket) {
                    self.store.lock().await.replace_project(record.clone());
                    self.renderer.request_render(RenderScope::Projects);
                } else {
                    tracing::debug!(%id, "discarding stale project update response");
                }
                self.notifier
                    .publish(Notification::success("Project updated successfully!"));
                Ok(record)
            }
            Err(err) => {
                self.notifier
                    .publish(Notification::danger(format!("Error saving project: {err}")));
                Err(err)
            }
        }
    }

    pub async fn delete_project(&self, id: &ProjectId) -> Result<(), DeleteProjectError> {
        let ticket = self.sequencer.begin(SyncTarget::Project(id.clone()));

        match self.delete_project_uc.execute(id).await {
            Ok(()) => {
                if self.sequencer.is_current(&ticket) {
                    self.store.lock().await.remove_project(id);
                    self.renderer.request_render(RenderScope::Projects);
                } else {
                    tracing::debug!(%id, "discarding stale project delete response");
                }
                self.notifier
                    .publish(Notification::success("Project deleted successfully!"));
                Ok(())
            }
            Err(err) => {
                self.notifier
                    .publish(Notification::danger(format!("Error deleting project: {err}")));
                Err(err)
            }
        }
    }

    //
    // Portfolio
    //

    pub async fn get_portfolio(&self) -> Result<PortfolioRecord, GetPortfolioError> {
        let ticket = self.sequencer.begin(SyncTarget::PortfolioRecord);

        match self.get_portfolio_uc.execute().await {
            Ok(record) => {
                if self.sequencer.is_current(&ticket) {
                    self.store.lock().await.replace_portfolio(record.clone());
                    self.renderer.request_render(RenderScope::Portfolio);
                } else {
                    tracing::debug!("discarding stale portfolio response");
                }
                Ok(record)
            }
            Err(err) => {
                self.notifier.publish(Notification::danger(format!(
                    "Error loading portfolio data: {err}"
                )));
                Err(err)
            }
        }
    }

    /// Save one subsection and return the server-confirmed version of
    /// it; the other three stay untouched locally.
    pub async fn update_portfolio_section(
        &self,
        patch: SectionPatch,
    ) -> Result<SectionPatch, UpdatePortfolioSectionError> {
        let section = patch.name();
        let ticket = self.sequencer.begin(SyncTarget::Section(section));

        match self.update_section_uc.execute(patch).await {
            Ok(record) => {
                let confirmed = record.section(section);
                if self.sequencer.is_current(&ticket) {
                    self.store.lock().await.apply_section(confirmed.clone());
                    self.renderer.request_render(RenderScope::Portfolio);
                } else {
                    tracing::debug!(%section, "discarding stale section update response");
                }
                if let Some(message) = section_saved_message(section) {
                    self.notifier.publish(Notification::success(message));
                }
                Ok(confirmed)
            }
            Err(err) => {
                self.notifier.publish(Notification::danger(format!(
                    "Error updating {}: {err}",
                    section.label()
                )));
                Err(err)
            }
        }
    }

    /// Save all four subsections in order, stopping at the first
    /// failure (which has already raised its banner).
    pub async fn save_full_portfolio(
        &self,
        record: PortfolioRecord,
    ) -> Result<(), UpdatePortfolioSectionError> {
        let PortfolioRecord {
            personal,
            education,
            skills,
            certifications,
        } = record;

        self.update_portfolio_section(SectionPatch::Personal(personal))
            .await?;
        self.update_portfolio_section(SectionPatch::Education(education))
            .await?;
        self.update_portfolio_section(SectionPatch::Skills(skills))
            .await?;
        self.update_portfolio_section(SectionPatch::Certifications(certifications))
            .await?;

        self.notifier.publish(Notification::success(
            "All portfolio data saved successfully!",
        ));
        Ok(())
    }

    /// Queue a debounced certifications commit. Bursts of edits
    /// coalesce into one save; the commit is idempotent, so a commit
    /// racing a still-in-flight older save converges via the section
    /// sequencer.
    pub fn autosave_certifications(&self, entries: Vec<String>) {
        let controller = self.clone();
        let entries = clean_entries(entries);

        self.cert_autosave.call(move || async move {
            let _ = controller
                .update_portfolio_section(SectionPatch::Certifications(entries))
                .await;
        });
    }

    //
    // Assets and derived views
    //

    /// Upload an image and hand back the reference to store in a
    /// project draft. No store mutation; the asset only becomes
    /// visible once a project referencing it is saved.
    pub async fn upload_asset(
        &self,
        bytes: Vec<u8>,
        file_name: &str,
    ) -> Result<AssetReference, UploadAssetError> {
        match self.upload_asset_uc.execute(bytes, file_name).await {
            Ok(reference) => Ok(reference),
            Err(err) => {
                self.notifier
                    .publish(Notification::danger(format!("Error uploading file: {err}")));
                Err(err)
            }
        }
    }

    /// Fetch the server-side join of portfolio and projects. Purely
    /// transient; nothing is cached.
    pub async fn get_resume_preview(&self) -> Result<ResumePreview, GetResumePreviewError> {
        match self.resume_preview_uc.execute().await {
            Ok(preview) => {
                self.notifier.publish(Notification::success(
                    "Resume preview loaded successfully!",
                ));
                Ok(preview)
            }
            Err(err) => {
                self.notifier.publish(Notification::danger(format!(
                    "Error loading resume preview: {err}"
                )));
                Err(err)
            }
        }
    }
}

fn section_saved_message(section: SectionName) -> Option<&'static str> {
    match section {
        SectionName::Personal => Some("Personal information updated successfully!"),
        SectionName::Education => Some("Education information updated successfully!"),
        SectionName::Skills => Some("Skills information updated successfully!"),
        // Debounced autosaves would spam the banner surface.
        SectionName::Certifications => None,
    }
}
