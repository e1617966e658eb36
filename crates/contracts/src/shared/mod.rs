pub mod analytics;
pub mod api_error;
pub mod navigation;
