use std::path::PathBuf;

use armpath_core::{AuthoringConfig, InputEvent, Outcome, RenderLoop, Session, SurfaceSize};
use armpath_net::{Publisher, PublisherConfig, RelayConfig, RelayServer};
use eframe::egui;

use crate::backdrop::{Backdrop, StillImageFeed};
use crate::canvas::{self, SurfaceTransform};
use crate::marker::MarkerSprite;
use crate::paint;
use crate::sidebar::{self, SidebarAction};
use crate::theme;

// Surface assumed until the first frame reports the real canvas size.
const INITIAL_SURFACE: (f32, f32) = (1280.0, 720.0);

/// Startup options for the authoring window.
#[derive(Debug, Clone, Default)]
pub struct AppOptions {
    pub config: AuthoringConfig,
    pub publisher: PublisherConfig,
    /// Host a relay in-process before connecting to it.
    pub embedded_relay: Option<RelayConfig>,
    pub marker: Option<PathBuf>,
    pub backdrop: Option<PathBuf>,
}

/// The authoring window: canvas, side panel, publisher.
pub struct AuthoringApp {
    session: Option<Session>,
    render: RenderLoop,
    publisher: Publisher,
    // Dropped after the publisher so queued frames can still go out.
    _relay: Option<RelayServer>,
    marker: MarkerSprite,
    backdrop: Backdrop,
    surface: Option<SurfaceSize>,
}

impl AuthoringApp {
    pub fn new(cc: &eframe::CreationContext<'_>, options: AppOptions) -> Self {
        theme::apply(&cc.egui_ctx);

        let relay = options.embedded_relay.and_then(|config| match RelayServer::start(config) {
            Ok(server) => {
                log::info!("Embedded relay on {}", server.local_addr());
                Some(server)
            }
            Err(e) => {
                log::error!("Embedded relay unavailable: {}", e);
                None
            }
        });
        let publisher = Publisher::start(options.publisher);

        let session = Session::create(INITIAL_SURFACE.0, INITIAL_SURFACE.1, options.config);
        let render = session.render_loop();

        let marker = MarkerSprite::load(&cc.egui_ctx, options.marker.as_deref());
        let backdrop = match options.backdrop {
            Some(path) => Backdrop::acquire(Box::new(StillImageFeed::new(path))),
            None => Backdrop::none(),
        };

        Self {
            session: Some(session),
            render,
            publisher,
            _relay: relay,
            marker,
            backdrop,
            surface: None,
        }
    }
}

impl eframe::App for AuthoringApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.backdrop.poll(ctx);

        let Some(session) = self.session.as_mut() else {
            return;
        };
        let Some(scene) = self.render.next_frame(session) else {
            return;
        };

        let mut events: Vec<InputEvent> = Vec::new();
        let mut launch = false;

        egui::SidePanel::right("waypoints")
            .resizable(true)
            .default_width(320.0)
            .show(ctx, |ui| {
                let actions = sidebar::draw(
                    ui,
                    session.slider_value(),
                    session.depth_range(),
                    &scene.readouts,
                );
                for action in actions {
                    match action {
                        SidebarAction::Input(event) => events.push(event),
                        SidebarAction::Launch => launch = true,
                    }
                }
            });

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let (response, painter) =
                    ui.allocate_painter(ui.available_size(), egui::Sense::click_and_drag());
                let transform = SurfaceTransform::new(response.rect, ctx.pixels_per_point());
                events.extend(canvas::pointer_events(ui, &response, &transform, &mut self.surface));
                paint::paint_scene(&painter, &transform, &scene, &self.backdrop, &self.marker);
            });

        for event in events {
            match session.handle(event) {
                Outcome::Placed(index) => log::debug!("Placed waypoint {}", index),
                Outcome::Removed(Some(_)) => log::debug!("Removed waypoint {}", session.store().len()),
                _ => {}
            }
        }

        if launch {
            let frames = session.launch();
            let queued = self.publisher.publish_all(&frames);
            log::info!("Launch queued {}/{} frame(s)", queued, frames.len());
        }

        ctx.request_repaint();
    }
}

impl Drop for AuthoringApp {
    fn drop(&mut self) {
        if let Some(session) = self.session.take() {
            session.dispose();
        }
        self.publisher.stop();
    }
}
