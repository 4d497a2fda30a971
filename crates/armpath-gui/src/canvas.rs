//! Pointer input on the authoring canvas.
//!
//! egui reports positions in logical points relative to the window; the
//! session works in backing pixels relative to the canvas origin.

use armpath_core::{InputEvent, SurfaceSize};
use eframe::egui;
use glam::Vec2;

/// Maps between canvas screen points and backing pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceTransform {
    rect: egui::Rect,
    scale: f32,
}

impl SurfaceTransform {
    /// `scale` is backing pixels per displayed point.
    pub fn new(rect: egui::Rect, scale: f32) -> Self {
        let scale = if scale.is_finite() && scale > 0.0 { scale } else { 1.0 };
        Self { rect, scale }
    }

    pub fn rect(&self) -> egui::Rect {
        self.rect
    }

    pub fn backing_size(&self) -> SurfaceSize {
        SurfaceSize::new(self.rect.width() * self.scale, self.rect.height() * self.scale)
    }

    pub fn to_backing(&self, pos: egui::Pos2) -> Vec2 {
        let local = pos - self.rect.min;
        Vec2::new(local.x * self.scale, local.y * self.scale)
    }

    pub fn to_screen(&self, point: Vec2) -> egui::Pos2 {
        self.rect.min + egui::vec2(point.x / self.scale, point.y / self.scale)
    }

    /// Convert a backing-pixel length to screen points.
    pub fn to_points(&self, length: f32) -> f32 {
        length / self.scale
    }
}

/// Pointer facts for one frame, in screen points.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerSample {
    /// Where the primary button went down this frame.
    pub pressed_at: Option<egui::Pos2>,
    /// Current pointer position while it interacts with the canvas.
    pub position: Option<egui::Pos2>,
    /// The pointer moved while dragging.
    pub moved: bool,
    /// The primary button came up this frame.
    pub released: bool,
    pub clicked: bool,
    pub double_clicked: bool,
}

impl PointerSample {
    pub fn read(ui: &egui::Ui, response: &egui::Response) -> Self {
        let (primary_pressed, press_origin, released) = ui.input(|i| {
            (
                i.pointer.primary_pressed(),
                i.pointer.press_origin(),
                i.pointer.primary_released(),
            )
        });
        Self {
            pressed_at: press_origin.filter(|_| primary_pressed),
            position: response.interact_pointer_pos(),
            moved: response.dragged() && response.drag_delta() != egui::Vec2::ZERO,
            released,
            clicked: response.clicked(),
            double_clicked: response.double_clicked(),
        }
    }
}

/// Translate this frame's canvas interaction into session events.
pub fn pointer_events(
    ui: &egui::Ui,
    response: &egui::Response,
    transform: &SurfaceTransform,
    last_size: &mut Option<SurfaceSize>,
) -> Vec<InputEvent> {
    translate(&PointerSample::read(ui, response), transform, last_size)
}

/// Turn one frame's pointer facts into session events.
///
/// A changed backing size yields a `Resize` first so the other events are
/// interpreted under the new calibration. The press is reported on the
/// frame the button goes down, before any drag threshold is crossed.
pub fn translate(
    sample: &PointerSample,
    transform: &SurfaceTransform,
    last_size: &mut Option<SurfaceSize>,
) -> Vec<InputEvent> {
    let mut events = Vec::new();

    let size = transform.backing_size();
    if *last_size != Some(size) {
        *last_size = Some(size);
        events.push(InputEvent::Resize { width: size.width, height: size.height });
    }

    let on_canvas = |p: &egui::Pos2| transform.rect().contains(*p);

    if let Some(origin) = sample.pressed_at.filter(on_canvas) {
        events.push(InputEvent::Press { at: transform.to_backing(origin) });
    }

    let pointer = sample.position.map(|p| transform.to_backing(p));

    if sample.moved {
        if let Some(to) = pointer {
            events.push(InputEvent::Move { to });
        }
    }

    if sample.released {
        events.push(InputEvent::Release);
    }

    if let Some(at) = pointer {
        if sample.double_clicked {
            events.push(InputEvent::Place { at });
        } else if sample.clicked {
            events.push(InputEvent::Select { at });
        }
    }

    events
}
