//! Web server for lapak.

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use crate::config::Config;
use crate::db::DatabaseProbe;
use crate::storage::ImageStore;
use crate::Result;

use super::handlers::AppState;
use super::router::{create_docs_router, create_router};

/// Web server for the API.
pub struct WebServer {
    /// Server address.
    addr: SocketAddr,
    /// Application state.
    app_state: Arc<AppState>,
    /// Allowed CORS origins.
    cors_origins: Vec<String>,
}

impl WebServer {
    /// Create a new web server from configuration.
    ///
    /// Creates the upload root if it doesn't exist.
    pub fn new(config: &Config) -> Result<Self> {
        let addr = format!("{}:{}", config.server.host, config.server.port)
            .parse()
            .map_err(|e| {
                crate::LapakError::Config(format!("invalid server address: {e}"))
            })?;

        let store = ImageStore::new(&config.uploads.dir)?;
        tracing::info!("Upload root initialized at: {}", config.uploads.dir);

        let app_state = AppState::new(store, &config.uploads);

        Ok(Self {
            addr,
            app_state: Arc::new(app_state),
            cors_origins: config.web.cors_origins.clone(),
        })
    }

    /// Create a new web server from prebuilt application state.
    pub fn from_state(addr: SocketAddr, app_state: Arc<AppState>) -> Self {
        Self {
            addr,
            app_state,
            cors_origins: Vec::new(),
        }
    }

    /// Attach a database probe for the diagnostics endpoint.
    pub fn with_database_probe(mut self, probe: Arc<dyn DatabaseProbe>) -> Self {
        let mut state = (*self.app_state).clone();
        state.database = Some(probe);
        self.app_state = Arc::new(state);
        self
    }

    /// Get the server address.
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    fn build_router(&self) -> axum::Router {
        let web_config = crate::config::WebConfig {
            cors_origins: self.cors_origins.clone(),
        };
        create_router(self.app_state.clone(), &web_config).merge(create_docs_router())
    }

    /// Run the web server.
    pub async fn run(self) -> std::io::Result<()> {
        let router = self.build_router();

        let listener = TcpListener::bind(self.addr).await?;
        let local_addr = listener.local_addr()?;

        tracing::info!("Web server listening on http://{}", local_addr);

        axum::serve(listener, router).await
    }

    /// Run the server and return the actual bound address.
    ///
    /// This is useful for testing when binding to port 0.
    pub async fn run_with_addr(self) -> std::io::Result<SocketAddr> {
        let router = self.build_router();

        let listener = TcpListener::bind(self.addr).await?;
        let local_addr = listener.local_addr()?;

        tracing::info!("Web server listening on http://{}", local_addr);

        tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, router).await {
                tracing::error!("Web server error: {}", e);
            }
        });

        Ok(local_addr)
    }
}
