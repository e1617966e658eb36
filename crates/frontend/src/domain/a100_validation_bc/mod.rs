pub mod api;
pub mod filters;
pub mod nav;
pub mod registry;
pub mod ui;
