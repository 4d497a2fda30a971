use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use anyhow::Context;
use armpath_core::ServoFrame;
use armpath_net::listen;
use armpath_net::wire::to_packet;
use clap::Parser;
use crossbeam::channel::Receiver;

/// Receive relay broadcasts and forward each as a 4-byte servo packet.
#[derive(Parser)]
#[command(name = "armpath-listen", version)]
struct Cli {
    #[arg(long, env = "ARMPATH_RELAY_URL", default_value = "ws://127.0.0.1:3000")]
    url: String,
    /// Character device the controller board listens on. Omit to only log packets.
    #[arg(long)]
    device: Option<PathBuf>,
    /// Pause after each packet so the servos can settle.
    #[arg(long, default_value_t = 1000)]
    settle_ms: u64,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let cli = Cli::parse();

    let device = match &cli.device {
        Some(path) => Some(
            OpenOptions::new()
                .write(true)
                .open(path)
                .with_context(|| format!("opening {}", path.display()))?,
        ),
        None => None,
    };

    let (tx, rx) = crossbeam::channel::unbounded::<ServoFrame>();
    let settle = Duration::from_millis(cli.settle_ms);
    let writer = thread::Builder::new()
        .name("servo-writer".to_string())
        .spawn(move || write_packets(rx, device, settle))
        .context("spawning servo writer")?;

    let shutdown = Arc::new(AtomicBool::new(false));
    let signal = shutdown.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            signal.store(true, Ordering::Relaxed);
        }
    });

    let result = listen(&cli.url, shutdown, move |frame| {
        let _ = tx.send(frame);
    })
    .await;

    let _ = writer.join();
    result?;
    Ok(())
}

fn write_packets(rx: Receiver<ServoFrame>, mut device: Option<File>, settle: Duration) {
    for frame in rx {
        let packet = match to_packet(&frame) {
            Ok(packet) => packet,
            Err(e) => {
                log::warn!("Skipped frame {:?}: {}", frame, e);
                continue;
            }
        };

        match device.as_mut() {
            Some(file) => match file.write_all(&packet).and_then(|_| file.flush()) {
                Ok(()) => log::info!("Sent to device: {:?}", packet),
                Err(e) => log::warn!("Device write failed: {}", e),
            },
            None => log::info!("Packet (dry run): {:?}", packet),
        }

        thread::sleep(settle);
    }
}
