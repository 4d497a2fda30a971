use std::net::{SocketAddr, TcpListener};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use crate::config::RelayConfig;
use crate::error::RelayError;
use crate::relay::Relay;

/// A [`Relay`] hosted in-process by the authoring window.
///
/// The socket is bound on the calling thread, so a taken port is reported
/// to the caller; serving happens on a dedicated runtime thread.
pub struct RelayServer {
    local_addr: SocketAddr,
    shutdown: Arc<AtomicBool>,
    thread: Option<JoinHandle<()>>,
}

impl RelayServer {
    pub fn start(config: RelayConfig) -> Result<Self, RelayError> {
        let addr = config.address();
        let listener = TcpListener::bind(&addr).map_err(|source| RelayError::Bind { addr, source })?;
        let local_addr = listener.local_addr()?;

        let shutdown = Arc::new(AtomicBool::new(false));
        let flag = shutdown.clone();
        let capacity = config.channel_capacity;
        let thread = thread::Builder::new()
            .name("armpath-relay".to_string())
            .spawn(move || serve(listener, capacity, flag))?;

        Ok(Self {
            local_addr,
            shutdown,
            thread: Some(thread),
        })
    }

    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    pub fn is_running(&self) -> bool {
        self.thread.as_ref().is_some_and(|t| !t.is_finished())
    }

    /// Stop accepting and wait for the serving thread.
    pub fn stop(&mut self) {
        self.shutdown.store(true, Ordering::Relaxed);
        if let Some(handle) = self.thread.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for RelayServer {
    fn drop(&mut self) {
        self.stop();
    }
}

fn serve(listener: TcpListener, capacity: usize, shutdown: Arc<AtomicBool>) {
    let rt = match tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()
    {
        Ok(rt) => rt,
        Err(e) => {
            log::error!("Relay runtime unavailable: {}", e);
            return;
        }
    };

    let result = rt.block_on(async {
        let relay = Relay::from_std(listener, capacity)?;
        relay.run(shutdown).await
    });
    if let Err(e) = result {
        log::error!("Embedded relay stopped: {}", e);
    }
}
