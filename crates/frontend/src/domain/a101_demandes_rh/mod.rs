pub mod api;
pub mod nav;
pub mod registry;
pub mod ui;
