//! # Clubhouse Server
//!
//! HTTP surface for the Clubhouse activity directory: list activities, sign
//! participants up, and unregister them. State lives in memory for the life
//! of the process.

pub mod app;
pub mod handlers;
pub mod infra;
pub mod routes;

pub use app::create_app;
pub use infra::app_state::AppState;
