//! Shared utilities for integration testing.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;

use metalink_server::{MetalinkServer, PriorityOrder, ServerConfig, Shutdown};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

/// Start a server on an ephemeral localhost port.
///
/// The server stops when the returned `Shutdown` is triggered or dropped.
pub async fn spawn_server(mirrors: &[&str], reverse: bool) -> (SocketAddr, Shutdown) {
    let listener = TcpListener::bind((Ipv4Addr::LOCALHOST, 0)).await.unwrap();
    let addr = listener.local_addr().unwrap();

    let config = ServerConfig {
        mirrors: mirrors.iter().map(|m| m.to_string()).collect(),
        port: addr.port(),
        priority: PriorityOrder::from_reverse(reverse),
        bind: IpAddr::V4(Ipv4Addr::LOCALHOST),
    };

    let shutdown = Shutdown::new();
    let stopped = shutdown.wait();
    let server = MetalinkServer::new(config);

    tokio::spawn(async move {
        let _ = server.run(listener, stopped).await;
    });

    (addr, shutdown)
}

/// HTTP client that reports redirects instead of following them.
#[allow(dead_code)]
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}

/// Send a raw HTTP/1.1 request and read the full reply until close.
#[allow(dead_code)]
pub async fn raw_exchange(addr: SocketAddr, method: &str, target: &str) -> String {
    let mut stream = TcpStream::connect(addr).await.unwrap();
    let request = format!(
        "{} {} HTTP/1.1\r\nHost: {}\r\nConnection: close\r\n\r\n",
        method, target, addr
    );
    stream.write_all(request.as_bytes()).await.unwrap();

    let mut reply = Vec::new();
    tokio::time::timeout(Duration::from_secs(5), stream.read_to_end(&mut reply))
        .await
        .expect("server did not close the connection")
        .unwrap();

    String::from_utf8(reply).unwrap()
}

/// Split a raw reply into (status line, header lines, body).
#[allow(dead_code)]
pub fn split_reply(reply: &str) -> (String, Vec<(String, String)>, String) {
    let (head, body) = reply.split_once("\r\n\r\n").expect("no end of headers");
    let mut lines = head.split("\r\n");
    let status = lines.next().unwrap_or_default().to_string();
    let headers = lines
        .filter_map(|line| line.split_once(':'))
        .map(|(name, value)| (name.trim().to_ascii_lowercase(), value.trim().to_string()))
        .collect();
    (status, headers, body.to_string())
}
