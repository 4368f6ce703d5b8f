//! Configuration validation.
//!
//! # Responsibilities
//! - Require a non-zero port
//! - Require at least one mirror
//! - Reject mirrors that cannot be carried in a header value
//!
//! # Design Decisions
//! - Checks are pure functions over the parsed arguments
//! - Port is checked before mirrors, first failure wins
//! - Mirrors that are not absolute URLs are only warned about; the
//!   wire contract is raw concatenation, not URL joining

use axum::http::HeaderValue;
use url::Url;

use crate::config::loader::ConfigError;

/// A port of zero counts as not supplied.
pub fn validate_port(port: Option<u16>) -> Result<u16, ConfigError> {
    match port {
        Some(port) if port != 0 => Ok(port),
        _ => Err(ConfigError::MissingPort),
    }
}

pub fn validate_mirrors(mirrors: &[String]) -> Result<(), ConfigError> {
    if mirrors.is_empty() {
        return Err(ConfigError::NoMirrorsSupplied);
    }

    for mirror in mirrors {
        HeaderValue::from_str(mirror).map_err(|e| ConfigError::InvalidMirror {
            url: mirror.clone(),
            reason: e.to_string(),
        })?;
    }

    Ok(())
}

/// Warn about mirrors that do not parse as absolute URLs.
///
/// Runs after logging is initialised. Returns how many mirrors were flagged.
pub fn warn_relative_mirrors(mirrors: &[String]) -> usize {
    let mut flagged = 0;
    for mirror in mirrors {
        if let Err(e) = Url::parse(mirror) {
            tracing::warn!(mirror = %mirror, error = %e, "Mirror is not an absolute URL");
            flagged += 1;
        }
    }
    flagged
}
