use eframe::egui::{self, Color32, Stroke};

// Flat palette built around the backdrop fill.
pub const MIDNIGHT: Color32 = Color32::from_rgb(0x2c, 0x3e, 0x50);
const ASPHALT: Color32 = Color32::from_rgb(0x34, 0x49, 0x5e);
const DEEP: Color32 = Color32::from_rgb(0x1f, 0x2d, 0x3a);
const CONCRETE: Color32 = Color32::from_rgb(0x95, 0xa5, 0xa6);
const CLOUDS: Color32 = Color32::from_rgb(0xec, 0xf0, 0xf1);
const RIVER: Color32 = Color32::from_rgb(0x34, 0x98, 0xdb);
const ALIZARIN: Color32 = Color32::from_rgb(0xe7, 0x4c, 0x3c);

/// Dragged marker tint and the edited row in the waypoint list.
pub const HIGHLIGHT: Color32 = Color32::from_rgb(0xe6, 0x7e, 0x22);
/// Launch button text.
pub const LAUNCH: Color32 = Color32::from_rgb(0x2e, 0xcc, 0x71);

static INIT: std::sync::Once = std::sync::Once::new();

/// Install the authoring visuals on first use.
pub fn apply(ctx: &egui::Context) {
    INIT.call_once(|| ctx.set_visuals(visuals()));
}

fn visuals() -> egui::Visuals {
    let mut visuals = egui::Visuals::dark();

    visuals.panel_fill = MIDNIGHT;
    visuals.window_fill = MIDNIGHT;
    visuals.faint_bg_color = ASPHALT;
    visuals.extreme_bg_color = DEEP;
    visuals.window_stroke = Stroke::new(1.0, ASPHALT);

    visuals.selection.bg_fill = RIVER;
    visuals.selection.stroke = Stroke::new(1.0, CLOUDS);
    visuals.hyperlink_color = RIVER;
    visuals.warn_fg_color = HIGHLIGHT;
    visuals.error_fg_color = ALIZARIN;

    let widgets = &mut visuals.widgets;
    widgets.noninteractive.bg_fill = MIDNIGHT;
    widgets.noninteractive.fg_stroke = Stroke::new(1.0, CLOUDS);

    for (state, fill, text_width) in [
        (&mut widgets.inactive, ASPHALT, 1.0),
        (&mut widgets.hovered, CONCRETE, 1.5),
        (&mut widgets.active, RIVER, 2.0),
    ] {
        state.bg_fill = fill;
        state.weak_bg_fill = fill;
        state.fg_stroke = Stroke::new(text_width, CLOUDS);
    }
    widgets.hovered.bg_stroke = Stroke::new(1.0, RIVER);
    widgets.active.bg_stroke = Stroke::new(1.0, CLOUDS);

    visuals
}
