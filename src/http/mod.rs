//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, tracing and Server header layers)
//!     → redirect.rs (GET/HEAD → 307 + Location + Link headers)
//!     → Send to client
//! ```

pub mod redirect;
pub mod server;

pub use redirect::{redirect_response, RedirectError};
pub use server::{AppState, MetalinkServer, SERVER_NAME};
