pub mod api_client;
pub mod response_handler;

pub use api_client::{ApiClient, HttpTransport};
pub use response_handler::*;
