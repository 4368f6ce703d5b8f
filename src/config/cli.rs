//! Command line surface.

use std::net::{IpAddr, Ipv4Addr};

use clap::Parser;

/// Mock Metalink/HTTP (RFC 6249) server.
///
/// Answers every GET and HEAD request with a 307 redirect to the first
/// mirror and one `Link: <...>; rel="duplicate"; pri=N` header per mirror.
#[derive(Debug, Clone, Parser)]
#[command(name = "metalink_server", version)]
#[command(override_usage = "metalink_server [-h|--version] -p PORT [-r] URL...")]
pub struct Cli {
    /// Port number to be bound to (required)
    #[arg(short, long, value_name = "PORT")]
    pub port: Option<u16>,

    /// Reverse the priorities of the mirror URLs
    #[arg(short, long)]
    pub reverse: bool,

    /// Address to bind the listener on
    #[arg(long, value_name = "ADDR", default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    pub bind: IpAddr,

    /// Mirror base URLs advertised in Link headers
    #[arg(value_name = "URL")]
    pub urls: Vec<String>,
}
