//! Types shared between the browser application and the mock API server.

pub mod domain;
pub mod enums;
pub mod shared;
