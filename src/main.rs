use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use tokio::net::TcpListener;

use metalink_server::config::validation::warn_relative_mirrors;
use metalink_server::lifecycle::{shutdown_signal, Shutdown};
use metalink_server::observability::init_logging;
use metalink_server::{load_config, Cli, ConfigError, MetalinkServer};

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let config = match load_config(Cli::parse()) {
        Ok(config) => config,
        Err(ConfigError::MissingPort) => {
            eprintln!("{}", Cli::command().render_help());
            return Ok(ExitCode::FAILURE);
        }
        Err(e) => {
            eprintln!("{}", e);
            return Ok(ExitCode::FAILURE);
        }
    };

    init_logging();
    warn_relative_mirrors(&config.mirrors);

    tracing::info!(
        port = config.port,
        bind = %config.bind,
        mirrors = ?config.mirrors,
        priority = ?config.priority,
        "Configuration loaded"
    );

    let listener = TcpListener::bind(config.socket_addr()).await?;

    let shutdown = Shutdown::new();
    let stopped = shutdown.wait();
    tokio::spawn(async move {
        shutdown_signal().await;
        shutdown.trigger();
    });

    let server = MetalinkServer::new(config);
    server.run(listener, stopped).await?;

    Ok(ExitCode::SUCCESS)
}
