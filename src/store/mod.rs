mod content_store;
mod sequence;

pub use content_store::{ContentStore, SharedContentStore};
pub use sequence::{RequestSequencer, SyncTarget, SyncTicket};
