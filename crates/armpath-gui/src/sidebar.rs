use armpath_core::{AxisRange, InputEvent, WaypointReadout};
use eframe::egui;

use crate::theme;

/// What the user asked for from the side panel this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SidebarAction {
    Input(InputEvent),
    Launch,
}

/// Depth slider, action buttons and the waypoint list.
pub fn draw(
    ui: &mut egui::Ui,
    depth: f32,
    depth_range: AxisRange,
    readouts: &[WaypointReadout],
) -> Vec<SidebarAction> {
    let mut actions = Vec::new();

    ui.heading("Waypoints");
    ui.separator();

    let mut value = depth;
    let slider = egui::Slider::new(&mut value, depth_range.min()..=depth_range.max())
        .step_by(0.1)
        .text("Depth");
    if ui.add(slider).changed() {
        actions.push(SidebarAction::Input(InputEvent::DepthInput { value }));
    }

    ui.add_space(4.0);
    ui.horizontal(|ui| {
        if ui
            .add_enabled(!readouts.is_empty(), egui::Button::new("Delete last point"))
            .clicked()
        {
            actions.push(SidebarAction::Input(InputEvent::RemoveLast));
        }
        let launch = egui::Button::new(egui::RichText::new("Launch").color(theme::LAUNCH));
        if ui.add_enabled(!readouts.is_empty(), launch).clicked() {
            actions.push(SidebarAction::Launch);
        }
    });

    ui.separator();

    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            if readouts.is_empty() {
                ui.weak("Double-click the canvas to place a waypoint");
            }
            for readout in readouts {
                let text = egui::RichText::new(readout.to_string()).monospace();
                if readout.editing {
                    ui.label(text.color(theme::HIGHLIGHT));
                } else {
                    ui.label(text);
                }
            }
        });

    actions
}
