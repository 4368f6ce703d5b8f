//! Configuration loading from the command line.

use thiserror::Error;

use crate::config::cli::Cli;
use crate::config::schema::ServerConfig;
use crate::config::validation::{validate_mirrors, validate_port};
use crate::mirrors::PriorityOrder;

/// Errors that prevent the server from starting.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No port (or port 0) was given.
    #[error("port number to be bound to is required")]
    MissingPort,

    /// No positional mirror URL was given.
    #[error("at least one link url required")]
    NoMirrorsSupplied,

    /// A mirror URL cannot be sent in a header value.
    #[error("invalid link url {url:?}: {reason}")]
    InvalidMirror { url: String, reason: String },
}

/// Validate parsed arguments into an immutable [`ServerConfig`].
pub fn load_config(cli: Cli) -> Result<ServerConfig, ConfigError> {
    let port = validate_port(cli.port)?;
    validate_mirrors(&cli.urls)?;

    Ok(ServerConfig {
        mirrors: cli.urls,
        port,
        priority: PriorityOrder::from_reverse(cli.reverse),
        bind: cli.bind,
    })
}
