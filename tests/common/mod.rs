//! Shared utilities for integration tests.

use health_server::{HealthServer, ServerConfig, ServerHandle};

/// Config bound to loopback on an OS-assigned port.
pub fn loopback_config() -> ServerConfig {
    let mut config = ServerConfig::default();
    config.listener.bind_address = "127.0.0.1".into();
    config.listener.port = 0;
    config
}

/// Bind on loopback and serve in the background.
pub async fn spawn_server() -> ServerHandle {
    HealthServer::bind(&loopback_config())
        .await
        .expect("loopback bind failed")
        .spawn()
}

/// Client without pooling so every request opens a fresh connection.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}
