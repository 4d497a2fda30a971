use armpath_core::{DrawCommand, Scene};
use eframe::egui;

use crate::backdrop::{Backdrop, FALLBACK_FILL};
use crate::canvas::SurfaceTransform;
use crate::marker::MarkerSprite;
use crate::theme;

const PATH_COLOR: egui::Color32 = egui::Color32::WHITE;
const LABEL_COLOR: egui::Color32 = egui::Color32::WHITE;
// rgba(255, 255, 255, 0.8)
const MARKER_FILL: egui::Color32 = egui::Color32::from_rgba_premultiplied(204, 204, 204, 204);

const FULL_UV: egui::Rect = egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));

/// Paint one scene onto the canvas.
pub fn paint_scene(
    painter: &egui::Painter,
    transform: &SurfaceTransform,
    scene: &Scene,
    backdrop: &Backdrop,
    marker: &MarkerSprite,
) {
    for command in &scene.commands {
        match command {
            DrawCommand::Clear => paint_backdrop(painter, transform, backdrop),
            DrawCommand::DashedPath { points, width, dash, gap } => {
                let points: Vec<egui::Pos2> = points.iter().map(|p| transform.to_screen(*p)).collect();
                let stroke = egui::Stroke::new(transform.to_points(*width), PATH_COLOR);
                painter.extend(egui::Shape::dashed_line(
                    &points,
                    stroke,
                    transform.to_points(*dash),
                    transform.to_points(*gap),
                ));
            }
            DrawCommand::Marker { center, size, dragged, .. } => {
                let center = transform.to_screen(*center);
                let size = transform.to_points(*size);
                paint_marker(painter, marker, center, size, *dragged);
            }
            DrawCommand::Label { text, anchor, font_size } => {
                painter.text(
                    transform.to_screen(*anchor),
                    egui::Align2::LEFT_BOTTOM,
                    text,
                    egui::FontId::proportional(transform.to_points(*font_size)),
                    LABEL_COLOR,
                );
            }
        }
    }
}

fn paint_backdrop(painter: &egui::Painter, transform: &SurfaceTransform, backdrop: &Backdrop) {
    let rect = transform.rect();
    match backdrop.texture() {
        Some(texture) => {
            painter.image(texture.id(), rect, FULL_UV, egui::Color32::WHITE);
        }
        None => {
            painter.rect_filled(rect, 0.0, FALLBACK_FILL);
        }
    }
}

fn paint_marker(
    painter: &egui::Painter,
    marker: &MarkerSprite,
    center: egui::Pos2,
    size: f32,
    dragged: bool,
) {
    match marker.texture() {
        Some(texture) => {
            let rect = egui::Rect::from_center_size(center, egui::vec2(size, size));
            let tint = if dragged { theme::HIGHLIGHT } else { egui::Color32::WHITE };
            painter.image(texture.id(), rect, FULL_UV, tint);
        }
        None => {
            let fill = if dragged { theme::HIGHLIGHT } else { MARKER_FILL };
            painter.circle_filled(center, size / 2.0, fill);
        }
    }
}
