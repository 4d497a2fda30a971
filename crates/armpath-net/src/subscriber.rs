use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use armpath_core::ServoFrame;
use futures_util::StreamExt;
use tokio_tungstenite::tungstenite::Message;

use crate::error::RelayError;
use crate::wire::parse_broadcast;

const SHUTDOWN_POLL: Duration = Duration::from_millis(100);

/// Connect to a relay and hand every well-formed broadcast to `on_frame`.
///
/// Malformed lines are logged and skipped. Returns when the relay closes
/// the connection or shutdown is signalled, even while no broadcast arrives.
pub async fn listen<F>(url: &str, shutdown: Arc<AtomicBool>, mut on_frame: F) -> Result<(), RelayError>
where
    F: FnMut(ServoFrame),
{
    let (ws_stream, _) = tokio_tungstenite::connect_async(url)
        .await
        .map_err(|source| RelayError::Connect { url: url.to_string(), source })?;
    log::info!("Listening to relay at {}", url);

    let (_, mut read) = ws_stream.split();

    loop {
        if shutdown.load(Ordering::Relaxed) {
            log::info!("Listener shutting down");
            return Ok(());
        }

        let incoming = tokio::select! {
            incoming = read.next() => incoming,
            _ = tokio::time::sleep(SHUTDOWN_POLL) => continue,
        };

        let Some(msg_result) = incoming else {
            break;
        };
        match msg_result? {
            Message::Text(text) => match parse_broadcast(text.as_str()) {
                Ok(frame) => on_frame(frame),
                Err(e) => log::warn!("Skipped broadcast {:?}: {}", text.as_str(), e),
            },
            Message::Close(_) => break,
            _ => {}
        }
    }

    log::info!("Relay connection closed");
    Ok(())
}
