pub mod routes;
pub mod types;

pub use types::{EmailQuery, ErrorDetail, MessageResponse};
