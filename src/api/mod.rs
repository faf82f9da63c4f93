//! API layer - read-only HTTP surface
//!
//! - Request handlers
//! - Route definitions
//! - OpenAPI document

pub mod handlers;
pub mod openapi;
pub mod routes;
pub mod state;

pub use openapi::ApiDoc;
pub use routes::create_router;
pub use state::AppState;
