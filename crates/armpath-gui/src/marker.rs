use std::path::Path;

use eframe::egui;

/// Decode an encoded image (PNG or JPEG) into an egui image.
pub fn decode_image(bytes: &[u8]) -> image::ImageResult<egui::ColorImage> {
    let rgba = image::load_from_memory(bytes)?.to_rgba8();
    Ok(to_color_image(rgba))
}

/// Load and decode an image file.
pub fn load_image(path: &Path) -> image::ImageResult<egui::ColorImage> {
    let rgba = image::open(path)?.to_rgba8();
    Ok(to_color_image(rgba))
}

fn to_color_image(rgba: image::RgbaImage) -> egui::ColorImage {
    let size = [rgba.width() as usize, rgba.height() as usize];
    egui::ColorImage::from_rgba_unmultiplied(size, rgba.as_raw())
}

/// Waypoint marker artwork. Without a texture the painter draws a circle.
#[derive(Default)]
pub struct MarkerSprite {
    texture: Option<egui::TextureHandle>,
}

impl MarkerSprite {
    /// A sprite that always falls back to circles.
    pub fn circle() -> Self {
        Self::default()
    }

    pub fn load(ctx: &egui::Context, path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::circle();
        };
        match load_image(path) {
            Ok(image) => {
                log::info!("Loaded marker image {}", path.display());
                Self {
                    texture: Some(ctx.load_texture("waypoint-marker", image, egui::TextureOptions::LINEAR)),
                }
            }
            Err(e) => {
                log::warn!("Marker image {} unavailable, drawing circles: {}", path.display(), e);
                Self::circle()
            }
        }
    }

    pub fn texture(&self) -> Option<&egui::TextureHandle> {
        self.texture.as_ref()
    }
}
