//! Veritier daemon — entry point for the verification status service.

use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;
use veritier_client::AccountsClient;
use veritier_rpc::RpcServer;

mod config;
use config::ServiceConfig;

#[derive(Parser)]
#[command(name = "veritier-daemon", about = "Veritier verification status service")]
struct Cli {
    /// Port the HTTP API listens on.
    #[arg(long, env = "VERITIER_LISTEN_PORT")]
    listen_port: Option<u16>,

    /// Base URL of the upstream accounts service.
    #[arg(long, env = "VERITIER_ACCOUNTS_URL")]
    accounts_url: Option<String>,

    /// Upstream request timeout in seconds.
    #[arg(long, env = "VERITIER_REQUEST_TIMEOUT_SECS")]
    request_timeout_secs: Option<u64>,

    /// Log level: "trace", "debug", "info", "warn", "error".
    #[arg(long, default_value = "info", env = "VERITIER_LOG_LEVEL")]
    log_level: String,

    /// Path to a TOML configuration file. If provided, file settings
    /// are used as the base; CLI flags and env vars override them.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_tracing(&cli.log_level);

    let file_config: Option<ServiceConfig> = if let Some(ref config_path) = cli.config {
        match std::fs::read_to_string(config_path) {
            Ok(contents) => match toml::from_str::<ServiceConfig>(&contents) {
                Ok(cfg) => {
                    tracing::info!("Loaded config from {}", config_path.display());
                    Some(cfg)
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config file: {e}, using CLI defaults");
                    None
                }
            },
            Err(e) => {
                tracing::warn!(
                    "Failed to read config file {}: {e}, using CLI defaults",
                    config_path.display()
                );
                None
            }
        }
    } else {
        None
    };

    let base = file_config.unwrap_or_default();
    let config = ServiceConfig {
        listen_port: cli.listen_port.unwrap_or(base.listen_port),
        accounts_url: cli.accounts_url.unwrap_or(base.accounts_url),
        request_timeout_secs: cli.request_timeout_secs.unwrap_or(base.request_timeout_secs),
        log_level: cli.log_level,
    };

    tracing::info!(
        "Starting Veritier on port {} (accounts service: {})",
        config.listen_port,
        config.accounts_url,
    );

    let accounts = AccountsClient::with_timeout(
        &config.accounts_url,
        Duration::from_secs(config.request_timeout_secs),
    );
    let server = RpcServer::new(config.listen_port, accounts);
    server.start().await?;

    tracing::info!("Veritier daemon exited cleanly");
    Ok(())
}

/// Initialize the tracing subscriber.
///
/// Respects the `RUST_LOG` environment variable; falls back to the
/// configured level when it is unset.
fn init_tracing(level: &str) {
    use tracing_subscriber::EnvFilter;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
