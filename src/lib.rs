//! lapak - small marketplace backend.
//!
//! A minimal HTTP backend: liveness endpoints, a database diagnostics probe,
//! one multipart item-creation endpoint that validates and stores an image,
//! and read-only static serving of the stored images.

pub mod config;
pub mod db;
pub mod error;
pub mod item;
pub mod logging;
pub mod storage;
pub mod web;

pub use config::Config;
pub use db::{DatabaseProbe, DatabaseStatus};
pub use error::{LapakError, Result};
pub use item::{Category, Condition, ImageType, ItemDraft, ItemSubmission};
pub use storage::ImageStore;
pub use web::WebServer;
