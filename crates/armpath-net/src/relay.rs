use std::net::SocketAddr;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use futures_util::{SinkExt, StreamExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::broadcast;
use tokio::sync::broadcast::error::RecvError;
use tokio_tungstenite::tungstenite::Message;

use crate::config::RelayConfig;
use crate::error::RelayError;
use crate::wire::{decode_publish, format_broadcast};

/// Stateless fan-out relay.
///
/// Every publish received from any client is reformatted and rebroadcast
/// to all connected clients, the publisher included. The only server-side
/// state is the set of live subscriptions.
pub struct Relay {
    listener: TcpListener,
    hub: broadcast::Sender<String>,
}

impl Relay {
    pub async fn bind(config: &RelayConfig) -> Result<Self, RelayError> {
        let addr = config.address();
        let listener = TcpListener::bind(&addr)
            .await
            .map_err(|source| RelayError::Bind { addr: addr.clone(), source })?;
        Ok(Self::with_listener(listener, config.channel_capacity))
    }

    /// Adopt a listener bound elsewhere. Must run inside a tokio runtime.
    pub fn from_std(listener: std::net::TcpListener, channel_capacity: usize) -> Result<Self, RelayError> {
        listener.set_nonblocking(true)?;
        Ok(Self::with_listener(TcpListener::from_std(listener)?, channel_capacity))
    }

    fn with_listener(listener: TcpListener, channel_capacity: usize) -> Self {
        let (hub, _) = broadcast::channel(channel_capacity.max(1));
        Self { listener, hub }
    }

    pub fn local_addr(&self) -> Result<SocketAddr, RelayError> {
        Ok(self.listener.local_addr()?)
    }

    /// Number of currently connected clients.
    pub fn subscriber_count(&self) -> usize {
        self.hub.receiver_count()
    }

    /// A handle that keeps reporting the client count after [`Relay::run`] takes the relay.
    pub fn monitor(&self) -> RelayMonitor {
        RelayMonitor { hub: self.hub.clone() }
    }

    /// Accept clients until shutdown is signalled.
    pub async fn run(self, shutdown: Arc<AtomicBool>) -> Result<(), RelayError> {
        log::info!("Relay listening on {}", self.local_addr()?);

        loop {
            if shutdown.load(Ordering::Relaxed) {
                break;
            }

            let accept = tokio::select! {
                result = self.listener.accept() => result,
                _ = tokio::time::sleep(std::time::Duration::from_millis(100)) => continue,
            };

            match accept {
                Ok((stream, peer)) => {
                    // Subscribe before the handshake completes so a client never
                    // misses a broadcast sent right after it connects.
                    let inbox = self.hub.subscribe();
                    let hub = self.hub.clone();
                    let shutdown_clone = shutdown.clone();
                    tokio::spawn(async move {
                        log::info!("Relay client connected: {}", peer);
                        if let Err(e) = handle_connection(stream, hub, inbox, shutdown_clone).await {
                            log::warn!("Relay connection error ({}): {}", peer, e);
                        }
                        log::info!("Relay client disconnected: {}", peer);
                    });
                }
                Err(e) => {
                    log::warn!("Relay accept error: {}", e);
                }
            }
        }

        Ok(())
    }
}

#[derive(Clone)]
pub struct RelayMonitor {
    hub: broadcast::Sender<String>,
}

impl RelayMonitor {
    pub fn subscriber_count(&self) -> usize {
        self.hub.receiver_count()
    }
}

async fn handle_connection(
    stream: TcpStream,
    hub: broadcast::Sender<String>,
    mut inbox: broadcast::Receiver<String>,
    shutdown: Arc<AtomicBool>,
) -> Result<(), RelayError> {
    let ws_stream = tokio_tungstenite::accept_async(stream)
        .await
        .map_err(RelayError::Handshake)?;

    let (mut write, mut read) = ws_stream.split();

    loop {
        if shutdown.load(Ordering::Relaxed) {
            break;
        }

        tokio::select! {
            incoming = read.next() => {
                let msg = match incoming {
                    Some(Ok(m)) => m,
                    Some(Err(e)) => return Err(e.into()),
                    None => break,
                };
                match msg {
                    Message::Text(text) => handle_publish(text.as_str(), &hub),
                    Message::Close(_) => break,
                    _ => {}
                }
            }
            outgoing = inbox.recv() => {
                match outgoing {
                    Ok(line) => write.send(Message::text(line)).await?,
                    Err(RecvError::Lagged(skipped)) => {
                        log::warn!("Relay subscriber lagging, skipped {} frame(s)", skipped);
                    }
                    Err(RecvError::Closed) => break,
                }
            }
        }
    }

    Ok(())
}

fn handle_publish(text: &str, hub: &broadcast::Sender<String>) {
    let frame = match decode_publish(text) {
        Ok(frame) => frame,
        Err(e) => {
            log::warn!("Relay ignored message: {}", e);
            return;
        }
    };

    let line = format_broadcast(&frame);
    log::info!("Received servo angles: {}", line);

    // Fails only when nobody is subscribed.
    if hub.send(line).is_err() {
        log::debug!("Relay broadcast with no subscribers");
    }
}
