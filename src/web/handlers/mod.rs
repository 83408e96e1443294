//! API handlers for the Web API.

pub mod item;
pub mod status;

pub use item::*;
pub use status::*;

use std::sync::Arc;

use crate::config::UploadsConfig;
use crate::db::DatabaseProbe;
use crate::storage::ImageStore;

/// Shared application state, constructed once at startup and passed into
/// every handler. No ambient globals.
#[derive(Clone)]
pub struct AppState {
    /// Image storage rooted at the upload directory.
    pub store: ImageStore,
    /// URL prefix under which stored images are served.
    pub public_prefix: String,
    /// Inclusive upload size ceiling in bytes.
    pub max_image_bytes: usize,
    /// Optional external database collaborator, probed by the diagnostics
    /// endpoint only.
    pub database: Option<Arc<dyn DatabaseProbe>>,
}

impl AppState {
    /// Create application state from an image store and upload configuration.
    pub fn new(store: ImageStore, uploads: &UploadsConfig) -> Self {
        Self {
            store,
            public_prefix: uploads.public_prefix.clone(),
            max_image_bytes: uploads.max_upload_bytes() as usize,
            database: None,
        }
    }

    /// Attach a database probe.
    pub fn with_database_probe(mut self, probe: Arc<dyn DatabaseProbe>) -> Self {
        self.database = Some(probe);
        self
    }
}
