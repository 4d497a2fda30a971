/// Relay server configuration.
#[derive(Debug, Clone)]
pub struct RelayConfig {
    /// Bind address.
    pub bind_addr: String,
    /// WebSocket port. `0` picks a free port.
    pub port: u16,
    /// Broadcasts buffered per subscriber before a slow one starts skipping.
    pub channel_capacity: usize,
}

impl RelayConfig {
    pub fn address(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1".to_string(),
            port: 3000,
            channel_capacity: 256,
        }
    }
}

/// Authoring-side publisher configuration.
#[derive(Debug, Clone)]
pub struct PublisherConfig {
    /// Relay WebSocket URL.
    pub url: String,
    /// Frames queued between the UI thread and the network thread.
    pub queue_capacity: usize,
}

impl Default for PublisherConfig {
    fn default() -> Self {
        Self {
            url: "ws://127.0.0.1:3000".to_string(),
            queue_capacity: 256,
        }
    }
}
