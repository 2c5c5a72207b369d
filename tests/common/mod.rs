//! Shared utilities for integration tests.

use std::net::SocketAddr;
use std::time::Duration;

use storefront_backend::config::{LatencyConfig, ServiceConfig};
use storefront_backend::http::HttpServer;
use storefront_backend::lifecycle::Shutdown;

/// A server running on an ephemeral port; shuts down when dropped.
pub struct TestServer {
    pub addr: SocketAddr,
    shutdown: Shutdown,
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.shutdown.trigger();
    }
}

/// Start a server with the given latency on 127.0.0.1:0.
pub async fn start_server(latency: LatencyConfig) -> TestServer {
    let mut config = ServiceConfig::default();
    config.listener.bind_address = "127.0.0.1:0".into();
    config.latency = latency;

    let listener = tokio::net::TcpListener::bind(&config.listener.bind_address)
        .await
        .unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config);
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    TestServer { addr, shutdown }
}

/// Start a server with no artificial latency.
#[allow(dead_code)]
pub async fn start_fast_server() -> TestServer {
    start_server(LatencyConfig::none()).await
}

pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .no_proxy()
        .timeout(Duration::from_secs(10))
        .build()
        .unwrap()
}
