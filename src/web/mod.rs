//! Web API module for lapak.
//!
//! Exposes the liveness endpoints, the diagnostics probe, the item creation
//! endpoint and read-only static serving of stored images.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod server;

pub use error::ApiError;
pub use router::{create_docs_router, create_router};
pub use server::WebServer;
