pub mod mock_latency;
pub mod request_logger;

pub use mock_latency::mock_latency;
pub use request_logger::request_logger;
