// src/modules/resume/application/ports/outgoing/resume_api.rs

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::modules::portfolio::application::domain::entities::{
    Education, PersonalInfo, SkillSet,
};
use crate::modules::project::application::ports::outgoing::project_api::ProjectRecord;

//
// ──────────────────────────────────────────────────────────
// DTOs
// ──────────────────────────────────────────────────────────
//

/// Server-side join of the portfolio record and the project
/// collection. Read-only; never written back and never cached.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResumePreview {
    #[serde(default)]
    pub personal: PersonalInfo,

    #[serde(default)]
    pub education: Education,

    #[serde(default)]
    pub skills: SkillSet,

    #[serde(default)]
    pub projects: Vec<ProjectRecord>,

    #[serde(default)]
    pub certifications: Vec<String>,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum ResumeApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Server error: {0}")]
    Server(String),

    #[error("Malformed response: {0}")]
    Decode(String),
}

//
// ──────────────────────────────────────────────────────────
// Port
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait ResumeApi: Send + Sync {
    async fn fetch_resume_preview(&self) -> Result<ResumePreview, ResumeApiError>;
}
