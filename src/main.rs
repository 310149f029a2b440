//! health-server binary.
//!
//! With no arguments: bind `0.0.0.0:8000`, print one line to stdout, and
//! serve `/health` until SIGINT or SIGTERM.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use health_server::config::{load_config, validate_config, ConfigError, ServerConfig};
use health_server::observability::init_logging;
use health_server::HealthServer;

#[derive(Parser)]
#[command(name = "health-server")]
#[command(version, about = "HTTP server answering a fixed /health liveness check", long_about = None)]
struct Cli {
    /// TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Interface to bind, overriding the configuration.
    #[arg(short, long)]
    bind: Option<String>,

    /// Port to listen on, overriding the configuration.
    #[arg(short, long)]
    port: Option<u16>,
}

impl Cli {
    fn resolve_config(&self) -> Result<ServerConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => ServerConfig::default(),
        };

        if let Some(bind) = &self.bind {
            config.listener.bind_address = bind.clone();
        }
        if let Some(port) = self.port {
            config.listener.port = port;
        }

        validate_config(&config).map_err(ConfigError::Validation)?;
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("health-server: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = cli.resolve_config()?;
    init_logging(&config.logging);

    tracing::info!(
        bind_address = %config.listener.bind_address,
        port = config.listener.port,
        "Configuration loaded"
    );

    let server = HealthServer::bind(&config).await?;
    println!("Health server listening on :{}", server.local_addr().port());

    server.serve().await?;

    tracing::info!("Shutdown complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments_means_defaults() {
        let cli = Cli::parse_from(["health-server"]);
        assert_eq!(cli.resolve_config().unwrap(), ServerConfig::default());
    }

    #[test]
    fn flags_override_defaults() {
        let cli = Cli::parse_from(["health-server", "--bind", "127.0.0.1", "--port", "9100"]);
        let config = cli.resolve_config().unwrap();
        assert_eq!(config.listener.bind_address, "127.0.0.1");
        assert_eq!(config.listener.port, 9100);
    }

    #[test]
    fn invalid_bind_flag_is_rejected() {
        let cli = Cli::parse_from(["health-server", "--bind", "example.com"]);
        assert!(matches!(
            cli.resolve_config(),
            Err(ConfigError::Validation(_))
        ));
    }
}
