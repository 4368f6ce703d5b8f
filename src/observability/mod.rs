//! Observability subsystem.
//!
//! Structured logging through `tracing`. Request spans come from
//! tower-http's `TraceLayer` in `http::server`.

pub mod logging;

pub use logging::init_logging;
