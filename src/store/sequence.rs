// src/store/sequence.rs

use std::collections::HashMap;
use std::sync::Mutex;

use crate::modules::portfolio::application::domain::entities::SectionName;
use crate::modules::project::application::ports::outgoing::project_api::ProjectId;

//
// ──────────────────────────────────────────────────────────
// Request sequencer
// ──────────────────────────────────────────────────────────
// Independent calls are not serialized, so a slow response can land
// after a newer request for the same target was already issued. Each
// issued request takes a ticket; a response is applied to the store
// only while its ticket is still the latest for that target.
//

/// What a request is about to overwrite. Creates carry no target:
/// every create addresses a brand-new entity, so there is no
/// older/newer conflict to resolve.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SyncTarget {
    /// Wholesale replacement of the project collection.
    ProjectCollection,
    /// Update or deletion of one project; both share a counter so the
    /// later-issued of the two wins.
    Project(ProjectId),
    /// Wholesale replacement of the portfolio record.
    PortfolioRecord,
    /// Replacement of one portfolio subsection.
    Section(SectionName),
}

#[derive(Debug)]
pub struct SyncTicket {
    target: SyncTarget,
    seq: u64,
}

#[derive(Debug, Default)]
pub struct RequestSequencer {
    latest: Mutex<HashMap<SyncTarget, u64>>,
}

impl RequestSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a request about to be issued for `target`.
    pub fn begin(&self, target: SyncTarget) -> SyncTicket {
        let mut latest = self.latest.lock().expect("sequencer lock poisoned");
        let seq = latest
            .entry(target.clone())
            .and_modify(|s| *s += 1)
            .or_insert(1);
        SyncTicket { target, seq: *seq }
    }

    /// Whether no newer request has been issued for this ticket's
    /// target since it was taken.
    pub fn is_current(&self, ticket: &SyncTicket) -> bool {
        let latest = self.latest.lock().expect("sequencer lock poisoned");
        latest.get(&ticket.target) == Some(&ticket.seq)
    }
}
