pub mod project_api;

pub use project_api::{
    DraftValidationError, ProjectApi, ProjectApiError, ProjectDraft, ProjectId, ProjectRecord,
};
