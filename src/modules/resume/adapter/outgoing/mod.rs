mod resume_api_http;

pub use resume_api_http::ResumeApiHttp;
