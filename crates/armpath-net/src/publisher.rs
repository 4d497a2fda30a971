//! Authoring-side publisher.
//!
//! The UI thread hands frames to a bounded crossbeam queue without
//! blocking; a background thread with its own runtime sends them, in
//! queue order, over a single WebSocket connection to the relay.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use armpath_core::ServoFrame;
use crossbeam::channel::{Receiver, RecvTimeoutError, Sender, TrySendError};
use futures_util::stream::{SplitSink, SplitStream};
use futures_util::{FutureExt, SinkExt, StreamExt};
use tokio::net::TcpStream;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream};

use crate::config::PublisherConfig;
use crate::error::RelayError;
use crate::wire::encode_publish;

type WsStream = WebSocketStream<MaybeTlsStream<TcpStream>>;

pub struct Publisher {
    tx: Sender<ServoFrame>,
    running: Arc<AtomicBool>,
    thread: Option<JoinHandle<()>>,
}

impl Publisher {
    pub fn start(config: PublisherConfig) -> Self {
        let (tx, rx) = crossbeam::channel::bounded(config.queue_capacity.max(1));
        let running = Arc::new(AtomicBool::new(true));
        let running_clone = running.clone();

        let thread = thread::Builder::new()
            .name("armpath-publisher".to_string())
            .spawn(move || {
                let rt = match tokio::runtime::Builder::new_current_thread().enable_all().build() {
                    Ok(rt) => rt,
                    Err(e) => {
                        log::error!("Failed to create tokio runtime: {}", e);
                        return;
                    }
                };
                let mut link = RelayLink::new(config.url);
                drain_queue(&rt, &mut link, &rx, &running_clone);
                rt.block_on(link.close());
            })
            .expect("Failed to spawn armpath-publisher thread");

        Self {
            tx,
            running,
            thread: Some(thread),
        }
    }

    /// Non-blocking enqueue. Returns `true` if the frame was accepted.
    pub fn publish(&self, frame: ServoFrame) -> bool {
        match self.tx.try_send(frame) {
            Ok(()) => true,
            Err(TrySendError::Full(_)) => {
                log::warn!("Publish queue full, dropped frame");
                false
            }
            Err(TrySendError::Disconnected(_)) => {
                log::warn!("Publisher stopped, dropped frame");
                false
            }
        }
    }

    /// Enqueue frames in order. Returns how many were accepted.
    pub fn publish_all(&self, frames: &[ServoFrame]) -> usize {
        frames.iter().filter(|f| self.publish(**f)).count()
    }

    /// Signal shutdown and wait for the background thread to finish.
    ///
    /// Frames already queued are sent before the thread exits.
    pub fn stop(&mut self) {
        self.running.store(false, Ordering::Relaxed);
        if let Some(handle) = self.thread.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for Publisher {
    fn drop(&mut self) {
        self.stop();
    }
}

fn drain_queue(
    rt: &tokio::runtime::Runtime,
    link: &mut RelayLink,
    rx: &Receiver<ServoFrame>,
    running: &AtomicBool,
) {
    loop {
        match rx.recv_timeout(Duration::from_millis(100)) {
            Ok(frame) => rt.block_on(link.send(frame)),
            Err(RecvTimeoutError::Timeout) => {
                if !running.load(Ordering::Relaxed) {
                    break;
                }
                // Other publishers keep the relay busy while we sit idle.
                rt.block_on(async { link.discard_echoes() });
            }
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }
}

/// A lazily opened connection to the relay.
struct RelayLink {
    url: String,
    sink: Option<SplitSink<WsStream, Message>>,
    echoes: Option<SplitStream<WsStream>>,
}

impl RelayLink {
    fn new(url: String) -> Self {
        Self { url, sink: None, echoes: None }
    }

    async fn connect(&mut self) -> Result<(), RelayError> {
        let (ws_stream, _) = tokio_tungstenite::connect_async(self.url.as_str())
            .await
            .map_err(|source| RelayError::Connect { url: self.url.clone(), source })?;
        let (sink, echoes) = ws_stream.split();
        self.sink = Some(sink);
        self.echoes = Some(echoes);
        log::info!("Publisher connected to {}", self.url);
        Ok(())
    }

    /// Send one frame. A failed connect or send drops the frame.
    async fn send(&mut self, frame: ServoFrame) {
        if self.sink.is_none() {
            if let Err(e) = self.connect().await {
                log::warn!("Dropped frame: {}", e);
                return;
            }
        }

        let text = match encode_publish(&frame) {
            Ok(text) => text,
            Err(e) => {
                log::warn!("Dropped frame: {}", e);
                return;
            }
        };

        if let Some(sink) = self.sink.as_mut() {
            match sink.send(Message::text(text)).await {
                Ok(()) => log::debug!("Sent angles to relay: {:?}", frame),
                Err(e) => {
                    log::warn!("Dropped frame, relay connection lost: {}", e);
                    self.sink = None;
                    self.echoes = None;
                    return;
                }
            }
        }

        self.discard_echoes();
    }

    /// The relay echoes every broadcast back to us; read and discard
    /// whatever is already buffered so the socket never backs up.
    fn discard_echoes(&mut self) {
        let Some(echoes) = self.echoes.as_mut() else {
            return;
        };
        while let Some(next) = echoes.next().now_or_never() {
            match next {
                Some(Ok(_)) => {}
                Some(Err(e)) => {
                    log::warn!("Relay connection lost: {}", e);
                    self.sink = None;
                    self.echoes = None;
                    return;
                }
                None => {
                    self.sink = None;
                    self.echoes = None;
                    return;
                }
            }
        }
    }

    async fn close(&mut self) {
        if let Some(mut sink) = self.sink.take() {
            let _ = sink.close().await;
        }
        self.echoes = None;
    }
}
