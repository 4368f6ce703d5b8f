//! Mock Metalink/HTTP (RFC 6249) server.
//!
//! Every GET or HEAD request is answered with a `307 Temporary Redirect`
//! to the first configured mirror and one `Link` header per mirror:
//!
//! ```text
//! Location: http://m1//file.iso
//! Link: <http://m1//file.iso>; rel="duplicate"; pri=1
//! Link: <http://m2//file.iso>; rel="duplicate"; pri=2
//! ```

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod mirrors;
pub mod observability;

pub use config::{load_config, Cli, ConfigError, ServerConfig};
pub use http::MetalinkServer;
pub use lifecycle::Shutdown;
pub use mirrors::{MirrorSet, PriorityOrder};
