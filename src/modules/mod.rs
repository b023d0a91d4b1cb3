pub mod media;
pub mod portfolio;
pub mod project;
pub mod resume;
