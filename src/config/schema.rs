//! Configuration schema definitions.

use std::net::{IpAddr, SocketAddr};

use crate::mirrors::PriorityOrder;

/// Validated server configuration. Built once at startup and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Mirror base URLs, in command-line order. Never empty.
    pub mirrors: Vec<String>,

    /// TCP port to listen on. Never zero.
    pub port: u16,

    /// How `pri` values are assigned across `mirrors`.
    pub priority: PriorityOrder,

    /// Address the listener binds on.
    pub bind: IpAddr,
}

impl ServerConfig {
    /// Socket address the listener binds to.
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind, self.port)
    }
}
