//! Listen-address configuration.
//!
//! The core stays environment-agnostic; the binary reads the two keys it
//! needs from `DOG_HTTP_HOST` / `DOG_HTTP_PORT`, defaulting to
//! `127.0.0.1:1234`.

use std::env;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        let host = env::var("DOG_HTTP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("DOG_HTTP_PORT")
            .ok()
            .and_then(|v| v.parse::<u16>().ok())
            .unwrap_or(1234);

        Self { host, port }
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
