mod upload_asset_service;

pub use upload_asset_service::UploadAssetService;
