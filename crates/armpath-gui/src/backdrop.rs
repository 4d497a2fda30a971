//! Camera backdrop behind the authoring canvas.
//!
//! The feed is purely visual. When it cannot be acquired the failure is
//! logged and the canvas keeps working over a solid fill.

use std::path::PathBuf;

use eframe::egui;

use crate::marker::load_image;
use crate::theme;

/// Fill used when no camera frame is available (#2c3e50).
pub const FALLBACK_FILL: egui::Color32 = theme::MIDNIGHT;

/// A source of backdrop frames.
pub trait CameraFeed: Send {
    /// Open the feed. Called once before any frame is polled.
    fn acquire(&mut self) -> Result<(), String>;

    /// The newest frame, if one arrived since the last poll.
    fn poll_frame(&mut self) -> Option<egui::ColorImage>;
}

/// A feed that shows one still image.
pub struct StillImageFeed {
    path: PathBuf,
    pending: Option<egui::ColorImage>,
}

impl StillImageFeed {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            pending: None,
        }
    }
}

impl CameraFeed for StillImageFeed {
    fn acquire(&mut self) -> Result<(), String> {
        let image = load_image(&self.path).map_err(|e| format!("{}: {}", self.path.display(), e))?;
        self.pending = Some(image);
        Ok(())
    }

    fn poll_frame(&mut self) -> Option<egui::ColorImage> {
        self.pending.take()
    }
}

/// Backdrop state owned by the app.
#[derive(Default)]
pub struct Backdrop {
    feed: Option<Box<dyn CameraFeed>>,
    texture: Option<egui::TextureHandle>,
}

impl Backdrop {
    /// Solid fill only.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn acquire(mut feed: Box<dyn CameraFeed>) -> Self {
        match feed.acquire() {
            Ok(()) => {
                log::info!("Camera backdrop acquired");
                Self {
                    feed: Some(feed),
                    texture: None,
                }
            }
            Err(e) => {
                log::error!("Camera initialization error: {}", e);
                Self::none()
            }
        }
    }

    pub fn is_live(&self) -> bool {
        self.feed.is_some()
    }

    /// Upload the newest feed frame, if any.
    pub fn poll(&mut self, ctx: &egui::Context) {
        let Some(feed) = self.feed.as_mut() else {
            return;
        };
        let Some(image) = feed.poll_frame() else {
            return;
        };
        match &mut self.texture {
            Some(texture) => texture.set(image, egui::TextureOptions::LINEAR),
            None => {
                self.texture = Some(ctx.load_texture("camera-backdrop", image, egui::TextureOptions::LINEAR));
            }
        }
    }

    pub fn texture(&self) -> Option<&egui::TextureHandle> {
        self.texture.as_ref()
    }
}
