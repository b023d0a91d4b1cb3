mod media_api_http;

pub use media_api_http::MediaApiHttp;
