use std::path::PathBuf;

use armpath_core::config::load_or_default;
use armpath_core::AuthoringConfig;
use armpath_gui::{AppOptions, AuthoringApp};
use armpath_net::{PublisherConfig, RelayConfig};
use clap::Parser;
use eframe::egui;

/// Author a robot-arm path over a camera backdrop and launch it to the relay.
#[derive(Parser)]
#[command(name = "armpath", version)]
struct Cli {
    #[arg(long, env = "ARMPATH_RELAY_URL", default_value = "ws://127.0.0.1:3000")]
    relay_url: String,
    /// JSON authoring config. Defaults apply when absent or unreadable.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Marker image drawn at each waypoint.
    #[arg(long)]
    marker: Option<PathBuf>,
    /// Still image shown as the camera backdrop.
    #[arg(long)]
    backdrop: Option<PathBuf>,
    /// Also host the relay in this process on the given port.
    #[arg(long)]
    serve: Option<u16>,
}

fn main() -> eframe::Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_or_default(path),
        None => AuthoringConfig::default(),
    };

    let options = AppOptions {
        config,
        publisher: PublisherConfig {
            url: cli.relay_url,
            ..Default::default()
        },
        embedded_relay: cli.serve.map(|port| RelayConfig {
            port,
            ..Default::default()
        }),
        marker: cli.marker,
        backdrop: cli.backdrop,
    };

    log::info!("Starting armpath authoring window");

    let native = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("armpath")
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([640.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "armpath",
        native,
        Box::new(|cc| Ok(Box::new(AuthoringApp::new(cc, options)))),
    )
}
