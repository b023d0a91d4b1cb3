// src/modules/project/application/ports/outgoing/project_api.rs

use std::fmt;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::shared::api::fields::{empty_string_as_none, none_as_empty_string};

//
// ──────────────────────────────────────────────────────────
// Identifiers
// ──────────────────────────────────────────────────────────
//

/// Server-assigned project identifier. Opaque on this side of the
/// wire; a draft without one has not been created yet.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(String);

impl ProjectId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for ProjectId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for ProjectId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

//
// ──────────────────────────────────────────────────────────
// DTOs
// ──────────────────────────────────────────────────────────
//

/// A project as confirmed by the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub id: ProjectId,

    pub title: String,

    pub description: String,

    /// Ordered as entered by the author.
    #[serde(default)]
    pub technologies: Vec<String>,

    #[serde(
        default,
        deserialize_with = "empty_string_as_none",
        serialize_with = "none_as_empty_string"
    )]
    pub github_link: Option<String>,

    #[serde(
        default,
        deserialize_with = "empty_string_as_none",
        serialize_with = "none_as_empty_string"
    )]
    pub demo_link: Option<String>,

    /// Server-assigned filename of the uploaded cover image.
    #[serde(
        default,
        deserialize_with = "empty_string_as_none",
        serialize_with = "none_as_empty_string"
    )]
    pub image: Option<String>,
}

/// Candidate data for create/update; not confirmed until the server
/// echoes it back with an id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectDraft {
    pub title: String,

    pub description: String,

    #[serde(default)]
    pub technologies: Vec<String>,

    #[serde(
        default,
        deserialize_with = "empty_string_as_none",
        serialize_with = "none_as_empty_string"
    )]
    pub github_link: Option<String>,

    #[serde(
        default,
        deserialize_with = "empty_string_as_none",
        serialize_with = "none_as_empty_string"
    )]
    pub demo_link: Option<String>,

    #[serde(
        default,
        deserialize_with = "empty_string_as_none",
        serialize_with = "none_as_empty_string"
    )]
    pub image: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DraftValidationError {
    #[error("Project title is required")]
    MissingTitle,

    #[error("Project description is required")]
    MissingDescription,

    #[error("At least one technology is required")]
    MissingTechnologies,
}

impl ProjectDraft {
    /// Runs before any network call; an invalid draft never leaves the
    /// client.
    pub fn validate(&self) -> Result<(), DraftValidationError> {
        if self.title.trim().is_empty() {
            return Err(DraftValidationError::MissingTitle);
        }
        if self.description.trim().is_empty() {
            return Err(DraftValidationError::MissingDescription);
        }
        if !self.technologies.iter().any(|tag| !tag.trim().is_empty()) {
            return Err(DraftValidationError::MissingTechnologies);
        }
        Ok(())
    }
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProjectApiError {
    /// No project with the referenced id on the server.
    #[error("Project not found")]
    NotFound,

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
pub trait ProjectApi: Send + Sync {
    async fn list_projects(&self) -> Result<Vec<ProjectRecord>, ProjectApiError>;

    async fn create_project(&self, draft: &ProjectDraft) -> Result<ProjectRecord, ProjectApiError>;

    async fn update_project(
        &self,
        id: &ProjectId,
        draft: &ProjectDraft,
    ) -> Result<ProjectRecord, ProjectApiError>;

    async fn delete_project(&self, id: &ProjectId) -> Result<(), ProjectApiError>;
}
