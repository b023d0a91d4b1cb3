// src/store/content_store.rs

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::modules::portfolio::application::domain::entities::{PortfolioRecord, SectionPatch};
use crate::modules::project::application::ports::outgoing::project_api::{
    ProjectId, ProjectRecord,
};

//
// ──────────────────────────────────────────────────────────
// ContentStore
// ──────────────────────────────────────────────────────────
// The rendering layer's single source of truth. Holds only
// server-confirmed data: the initial fetch plus confirmed mutations,
// never an optimistic guess. Mutation methods are called by the
// controller alone; everything else reads snapshots.
//

pub type SharedContentStore = Arc<Mutex<ContentStore>>;

#[derive(Debug, Default)]
pub struct ContentStore {
    projects: Vec<ProjectRecord>,
    portfolio: Option<PortfolioRecord>,
}

impl ContentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shared() -> SharedContentStore {
        Arc::new(Mutex::new(Self::new()))
    }

    //
    // Reads
    //

    pub fn projects(&self) -> &[ProjectRecord] {
        &self.projects
    }

    pub fn project(&self, id: &ProjectId) -> Option<&ProjectRecord> {
        self.projects.iter().find(|p| &p.id == id)
    }

    /// `None` until the first portfolio fetch lands.
    pub fn portfolio(&self) -> Option<&PortfolioRecord> {
        self.portfolio.as_ref()
    }

    /// Case-insensitive title/description search, optionally narrowed
    /// to projects tagged with one technology. Pure read; no network.
    pub fn filter_projects(&self, search: &str, technology: Option<&str>) -> Vec<ProjectRecord> {
        let needle = search.to_lowercase();
        self.projects
            .iter()
            .filter(|p| {
                let matches_search = needle.is_empty()
                    || p.title.to_lowercase().contains(&needle)
                    || p.description.to_lowercase().contains(&needle);
                let matches_tech = technology
                    .map(|tech| p.technologies.iter().any(|t| t == tech))
                    .unwrap_or(true);
                matches_search && matches_tech
            })
            .cloned()
            .collect()
    }

    /// Pretty-printed JSON of the project collection, for the export
    /// button.
    pub fn export_projects_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.projects)
    }

    /// Pretty-printed JSON of the portfolio record, for the export
    /// button. Exports an empty record before the first fetch.
    pub fn export_portfolio_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.portfolio.clone().unwrap_or_default())
    }

    //
    // Server-confirmed mutations
    //

    pub fn replace_projects(&mut self, projects: Vec<ProjectRecord>) {
        self.projects = projects;
    }

    pub fn insert_project(&mut self, record: ProjectRecord) {
        self.projects.push(record);
    }

    /// Replace the entity with the matching id. Returns `false` when
    /// the id is not cached; the record is not resurrected.
    pub fn replace_project(&mut self, record: ProjectRecord) -> bool {
        match self.projects.iter_mut().find(|p| p.id == record.id) {
            Some(slot) => {
                *slot = record;
                true
            }
            None => false,
        }
    }

    /// Remove the entity with the matching id. Removing an absent id
    /// is a no-op, so repeated deletions converge on the same state.
    pub fn remove_project(&mut self, id: &ProjectId) -> bool {
        let before = self.projects.len();
        self.projects.retain(|p| &p.id != id);
        self.projects.len() != before
    }

    pub fn replace_portfolio(&mut self, record: PortfolioRecord) {
        self.portfolio = Some(record);
    }

    /// Replace one subsection, leaving the other three untouched. A
    /// patch arriving before the first fetch starts from an empty
    /// record.
    pub fn apply_section(&mut self, patch: SectionPatch) {
        self.portfolio
            .get_or_insert_with(PortfolioRecord::default)
            .apply(patch);
    }
}
