mod create_project;
mod delete_project;
mod list_projects;
mod update_project;

pub use create_project::{CreateProjectError, CreateProjectUseCase};
pub use delete_project::{DeleteProjectError, DeleteProjectUseCase};
pub use list_projects::{ListProjectsError, ListProjectsUseCase};
pub use update_project::{UpdateProjectError, UpdateProjectUseCase};
