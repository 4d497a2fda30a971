use glam::Vec2;

use crate::calibration::{AxisRange, HitRadii};
use crate::waypoint::{Waypoint, WaypointPatch, WaypointStore};

/// Pointer, slider and command input, in backing-pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Double activation: append a waypoint here.
    Place { at: Vec2 },
    /// Button/touch down: start dragging the waypoint under the pointer.
    Press { at: Vec2 },
    /// Pointer movement while held.
    Move { to: Vec2 },
    /// Button/touch up.
    Release,
    /// Single activation: target the depth slider at the waypoint here.
    Select { at: Vec2 },
    /// Depth slider changed.
    DepthInput { value: f32 },
    /// Delete the most recently placed waypoint.
    RemoveLast,
    /// The surface's backing size changed.
    Resize { width: f32, height: f32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        index: usize,
        /// Waypoint position when the drag began; bounds the slip limit.
        origin: Vec2,
    },
}

/// What an input event did to the session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outcome {
    Unchanged,
    Placed(usize),
    DragStarted(usize),
    Moved(usize),
    Released,
    Selected(usize),
    DepthChanged(usize),
    SliderMoved,
    Removed(Option<Waypoint>),
    Resized,
}

/// Turns input events into waypoint store mutations.
///
/// Owns the transient selection: the dragged index, the index the depth
/// slider edits, and the slider value itself. Both indices are dropped as
/// soon as the waypoint they point at is removed.
#[derive(Debug, Clone)]
pub struct InteractionController {
    drag: DragState,
    editing: Option<usize>,
    slider: f32,
    depth_range: AxisRange,
}

impl InteractionController {
    pub fn new(depth_range: AxisRange, initial_depth: f32) -> Self {
        Self {
            drag: DragState::Idle,
            editing: None,
            slider: depth_range.clamp(initial_depth),
            depth_range,
        }
    }

    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    pub fn dragging(&self) -> Option<usize> {
        match self.drag {
            DragState::Dragging { index, .. } => Some(index),
            DragState::Idle => None,
        }
    }

    pub fn editing(&self) -> Option<usize> {
        self.editing
    }

    /// Current depth slider value, synced to the edited waypoint on selection.
    pub fn slider_value(&self) -> f32 {
        self.slider
    }

    /// Apply one event. `Resize` is handled by the session, not here.
    pub fn handle(&mut self, event: InputEvent, store: &mut WaypointStore, radii: &HitRadii) -> Outcome {
        match event {
            InputEvent::Place { at } => self.place(at, store),
            InputEvent::Press { at } => self.press(at, store, radii),
            InputEvent::Move { to } => self.drag_to(to, store, radii),
            InputEvent::Release => {
                self.drag = DragState::Idle;
                Outcome::Released
            }
            InputEvent::Select { at } => self.select(at, store, radii),
            InputEvent::DepthInput { value } => self.set_depth(value, store),
            InputEvent::RemoveLast => {
                let removed = store.remove_last();
                self.invalidate(store.len());
                Outcome::Removed(removed)
            }
            InputEvent::Resize { .. } => Outcome::Unchanged,
        }
    }

    fn place(&mut self, at: Vec2, store: &mut WaypointStore) -> Outcome {
        if self.dragging().is_some() {
            return Outcome::Unchanged;
        }
        Outcome::Placed(store.append(Waypoint::at(at, self.slider)))
    }

    fn press(&mut self, at: Vec2, store: &WaypointStore, radii: &HitRadii) -> Outcome {
        let Some(index) = store.nearest(at, radii.drag) else {
            return Outcome::Unchanged;
        };
        let Some(point) = store.get(index) else {
            return Outcome::Unchanged;
        };
        self.drag = DragState::Dragging { index, origin: point.planar() };
        self.editing = Some(index);
        self.slider = self.depth_range.clamp(point.depth);
        Outcome::DragStarted(index)
    }

    fn drag_to(&mut self, to: Vec2, store: &mut WaypointStore, radii: &HitRadii) -> Outcome {
        let DragState::Dragging { index, origin } = self.drag else {
            return Outcome::Unchanged;
        };
        // Slip limit: movement farther than the drag radius from the start is ignored.
        if to.distance(origin) >= radii.drag {
            return Outcome::Unchanged;
        }
        if store.update_at(index, WaypointPatch::planar(to)) {
            Outcome::Moved(index)
        } else {
            Outcome::Unchanged
        }
    }

    fn select(&mut self, at: Vec2, store: &WaypointStore, radii: &HitRadii) -> Outcome {
        if self.dragging().is_some() {
            return Outcome::Unchanged;
        }
        match store.nearest(at, radii.select).and_then(|i| store.get(i).map(|p| (i, p))) {
            Some((index, point)) => {
                self.editing = Some(index);
                self.slider = self.depth_range.clamp(point.depth);
                Outcome::Selected(index)
            }
            None => Outcome::Unchanged,
        }
    }

    fn set_depth(&mut self, value: f32, store: &mut WaypointStore) -> Outcome {
        self.slider = self.depth_range.clamp(value);
        match self.editing {
            Some(index) if store.update_at(index, WaypointPatch::depth(self.slider)) => {
                Outcome::DepthChanged(index)
            }
            _ => Outcome::SliderMoved,
        }
    }

    fn invalidate(&mut self, len: usize) {
        if matches!(self.editing, Some(i) if i >= len) {
            self.editing = None;
        }
        if matches!(self.drag, DragState::Dragging { index, .. } if index >= len) {
            self.drag = DragState::Idle;
        }
    }
}
