//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! process arguments
//!     → cli.rs (clap parse)
//!     → validation.rs (port present, mirrors present and header-safe)
//!     → loader.rs (assemble)
//!     → ServerConfig (validated, immutable)
//!     → shared via Arc with the request handler
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded
//! - No ambient globals: the handler receives the config through state

pub mod cli;
pub mod loader;
pub mod schema;
pub mod validation;

pub use cli::Cli;
pub use loader::{load_config, ConfigError};
pub use schema::ServerConfig;
