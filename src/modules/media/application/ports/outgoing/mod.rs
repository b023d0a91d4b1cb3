pub mod media_api;

pub use media_api::{AssetReference, MediaApi, MediaApiError};
