//! REST API module
//!
//! HTTP endpoints for training, prediction, filtering, and notification

pub mod handlers;
pub mod server;

pub use handlers::AppState;
pub use server::ApiServer;
