pub mod api_error;
pub mod config;
pub mod format;
