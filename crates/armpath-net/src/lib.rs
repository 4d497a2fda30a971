pub mod config;
pub mod error;
pub mod publisher;
pub mod relay;
pub mod server;
pub mod subscriber;
pub mod wire;

pub use config::{PublisherConfig, RelayConfig};
pub use error::{RelayError, WireError};
pub use publisher::Publisher;
pub use relay::{Relay, RelayMonitor};
pub use server::RelayServer;
pub use subscriber::listen;
