//! Mirror advertisement subsystem.
//!
//! # Data Flow
//! ```text
//! ServerConfig (mirrors, reverse flag)
//!     → priority.rs (one pri value per mirror)
//!     → link.rs (Location + Link values for a request target)
//!     → http::redirect (307 response)
//! ```

pub mod link;
pub mod priority;

pub use link::{MirrorLink, MirrorSet};
pub use priority::{Priorities, PriorityOrder};
