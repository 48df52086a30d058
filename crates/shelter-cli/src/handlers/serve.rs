//! Serve command handler.

use anyhow::Result;

use shelter_axum::{ServerConfig, start_server};

/// Apply command-line overrides on top of the environment defaults.
fn server_config(
    port: Option<u16>,
    host: Option<String>,
    allow_origin: Vec<String>,
) -> Result<ServerConfig> {
    let mut config = ServerConfig::with_defaults()?;
    if let Some(port) = port {
        config = config.with_port(port);
    }
    if let Some(host) = host {
        config = config.with_host(host);
    }
    if !allow_origin.is_empty() {
        config = config.with_allowed_origins(allow_origin);
    }
    Ok(config)
}

/// Execute the serve command. Runs until the process is stopped.
pub async fn execute(
    port: Option<u16>,
    host: Option<String>,
    allow_origin: Vec<String>,
) -> Result<()> {
    start_server(server_config(port, host, allow_origin)?).await
}
