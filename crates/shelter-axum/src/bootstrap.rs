//! Axum server bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the Axum web adapter. All concrete implementations are instantiated here.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use shelter_core::{AppCore, data_root, database_path};
use shelter_db::{CoreFactory, setup_database};

/// Environment variable overriding the default listen port.
pub const PORT_ENV: &str = "SHELTER_PORT";

/// Port used when neither the CLI nor the environment picks one.
pub const DEFAULT_PORT: u16 = 5100;

/// Interface bound when none is configured.
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// CORS configuration for the web server.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CorsConfig {
    /// Allow all origins (development mode).
    #[default]
    AllowAll,
    /// Allow specific origins (production mode).
    AllowOrigins(Vec<String>),
}

/// Server configuration for the Axum adapter.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Interface to bind.
    pub host: String,
    /// Port for the HTTP server.
    pub port: u16,
    /// Database file; `None` resolves the platform default at bootstrap.
    pub database_path: Option<PathBuf>,
    /// CORS configuration.
    pub cors: CorsConfig,
}

impl ServerConfig {
    /// Create config with defaults, honouring `SHELTER_PORT`.
    pub fn with_defaults() -> Result<Self> {
        Ok(Self {
            host: DEFAULT_HOST.to_string(),
            port: port_from_env(std::env::var(PORT_ENV).ok().as_deref())?,
            database_path: None,
            cors: CorsConfig::default(),
        })
    }

    /// Override the listen port.
    #[must_use]
    pub const fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Override the bound interface.
    #[must_use]
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Use an explicit database file instead of the platform default.
    #[must_use]
    pub fn with_database_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.database_path = Some(path.into());
        self
    }

    /// Set CORS to allow specific origins.
    #[must_use]
    pub fn with_allowed_origins(mut self, origins: Vec<String>) -> Self {
        self.cors = CorsConfig::AllowOrigins(origins);
        self
    }

    /// Socket address string for the listener.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn port_from_env(value: Option<&str>) -> Result<u16> {
    match value.map(str::trim) {
        None | Some("") => Ok(DEFAULT_PORT),
        Some(raw) => raw
            .parse()
            .with_context(|| format!("{PORT_ENV} must be a port number, got '{raw}'")),
    }
}

/// Application context for the Axum adapter.
pub struct AxumContext {
    /// The core application facade.
    pub core: Arc<AppCore>,
}

impl AxumContext {
    /// Wrap an already-assembled core.
    pub fn new(core: AppCore) -> Self {
        Self {
            core: Arc::new(core),
        }
    }
}

/// Bootstrap the Axum server: open the database and assemble `AppCore`.
pub async fn bootstrap(config: &ServerConfig) -> Result<AxumContext> {
    let db_path = match &config.database_path {
        Some(path) => path.clone(),
        None => database_path()?,
    };

    tracing::info!(
        target: "shelter.paths",
        database_path = %db_path.display(),
        data_root = ?data_root().ok().map(|p| p.display().to_string()),
        "Axum bootstrap resolved paths"
    );

    let pool = setup_database(&db_path).await?;
    Ok(AxumContext::new(CoreFactory::build_app_core(pool)))
}

/// Start the web server and serve until the process is stopped.
pub async fn start_server(config: ServerConfig) -> Result<()> {
    use tokio::net::TcpListener;
    use tracing::info;

    let ctx = bootstrap(&config).await?;
    let app = crate::routes::create_router(ctx, &config.cors);

    let addr = config.addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    info!("shelter web server listening on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
