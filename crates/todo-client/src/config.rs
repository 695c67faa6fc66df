//! Client configuration.

/// Default server URL
const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:3000";

/// Client configuration, read from the environment.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the todo service
    pub server_url: String,
}

impl ClientConfig {
    pub fn from_env() -> Self {
        let server_url =
            std::env::var("SERVER_URL").unwrap_or_else(|_| DEFAULT_SERVER_URL.to_string());
        Self { server_url }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::from_env()
    }
}
