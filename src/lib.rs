//! Client-side synchronization core for a portfolio admin panel.
//!
//! The remote portfolio API owns the data; this crate owns keeping a
//! session's view of it honest. A [`SyncController`] issues one API
//! call per user action and reconciles confirmed responses into the
//! [`store::ContentStore`] the rendering layer draws from; failures
//! surface as banners and never touch the cache.

pub mod controller;
pub mod modules;
pub mod shared;
pub mod store;

pub use controller::{ConnectError, SyncController};
pub use modules::media;
pub use modules::portfolio;
pub use modules::project;
pub use modules::resume;

#[cfg(test)]
mod tests;
