//! PassGen server entry point.
//!
//! Loads the TOML configuration, applies CLI overrides, binds the listener,
//! and runs the accept loop on the Tokio runtime until Ctrl-C.
//!
//! # Architecture
//!
//! ```text
//! main()
//!  └─ load_config()                -- TOML config with serde defaults
//!  └─ bind_listener()              -- TcpSocket bind + listen(backlog)
//!  └─ serve()                      -- accept loop
//!       └─ one spawned Session per connection
//! ```

use std::net::IpAddr;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use passgen_server::infrastructure::network;
use passgen_server::infrastructure::storage::config;

/// Password-generation TCP server.
#[derive(Debug, Parser)]
#[command(name = "passgen-server", version, about)]
struct Args {
    /// Path to the TOML config file (defaults to the platform config dir).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the configured bind address.
    #[arg(long)]
    bind: Option<IpAddr>,

    /// Override the configured port.
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let cfg = match &args.config {
        Some(path) => config::load_from(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => config::load_config().context("loading config")?,
    };

    // Initialise structured logging.  `RUST_LOG` wins over the config level.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(cfg.server.log_level.clone())),
        )
        .init();

    info!("PassGen server starting");

    let mut addr = cfg
        .network
        .socket_addr()
        .context("invalid bind_address in config")?;
    if let Some(bind) = args.bind {
        addr.set_ip(bind);
    }
    if let Some(port) = args.port {
        addr.set_port(port);
    }

    let listener = network::bind_listener(addr, cfg.network.backlog)?;
    info!(%addr, backlog = cfg.network.backlog, "waiting for clients");

    tokio::select! {
        result = network::serve(listener, cfg.password) => {
            result.context("listening role failed")?;
        }
        _ = tokio::signal::ctrl_c() => {
            info!("shutdown signal received");
        }
    }

    info!("PassGen server stopped");
    Ok(())
}
