use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use armpath_net::{Relay, RelayConfig};
use clap::Parser;

/// Rebroadcast servo frames from the authoring surface to every connected client.
#[derive(Parser)]
#[command(name = "armpath-relay", version)]
struct Cli {
    #[arg(long, env = "ARMPATH_BIND", default_value = "127.0.0.1")]
    bind: String,
    #[arg(long, env = "ARMPATH_PORT", default_value_t = 3000)]
    port: u16,
    /// Broadcasts buffered per client before a slow one starts skipping.
    #[arg(long, default_value_t = 256)]
    capacity: usize,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    let config = RelayConfig {
        bind_addr: cli.bind,
        port: cli.port,
        channel_capacity: cli.capacity,
    };

    let relay = Relay::bind(&config).await?;
    let shutdown = Arc::new(AtomicBool::new(false));

    let signal = shutdown.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            log::info!("Shutting down relay");
            signal.store(true, Ordering::Relaxed);
        }
    });

    relay.run(shutdown).await?;
    Ok(())
}
