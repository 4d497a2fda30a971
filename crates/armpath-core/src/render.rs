//! Per-frame scene building for the authoring surface.
//!
//! The host (an egui window) drives [`RenderLoop::next_frame`] once per
//! display refresh and paints the returned [`Scene`]. The loop holds no
//! waypoint state of its own; it reads the session each frame and stops
//! for good once its [`LoopHandle`] is cancelled.

use std::f32::consts::TAU;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use glam::Vec2;

use crate::mapper::{map_waypoint, ServoAngles};
use crate::session::Session;

const DASH_LENGTH: f32 = 5.0;
const GAP_LENGTH: f32 = 10.0;
const MIN_MARKER_SIZE: f32 = 20.0;
const MARKER_SIZE_PER_DEPTH: f32 = 100.0;

/// Cancellation handle shared between a session and its render loop.
#[derive(Debug, Clone, Default)]
pub struct LoopHandle {
    stopped: Arc<AtomicBool>,
}

impl LoopHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stop(&self) {
        self.stopped.store(true, Ordering::Relaxed);
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::Relaxed)
    }
}

/// Monotonic oscillation phase, wrapped to one full cycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FramePhase {
    phase: f32,
    speed: f32,
}

impl FramePhase {
    pub fn new(speed: f32) -> Self {
        Self {
            phase: 0.0,
            speed: if speed.is_finite() { speed } else { 0.0 },
        }
    }

    pub fn value(&self) -> f32 {
        self.phase
    }

    pub fn advance(&mut self) -> f32 {
        self.phase = (self.phase + self.speed).rem_euclid(TAU);
        self.phase
    }
}

/// A drawing primitive in backing-pixel coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear,
    DashedPath {
        points: Vec<Vec2>,
        width: f32,
        dash: f32,
        gap: f32,
    },
    Marker {
        index: usize,
        center: Vec2,
        size: f32,
        dragged: bool,
    },
    Label {
        text: String,
        anchor: Vec2,
        font_size: f32,
    },
}

/// One row of the waypoint list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaypointReadout {
    pub index: usize,
    pub angles: ServoAngles,
    pub editing: bool,
}

impl fmt::Display for WaypointReadout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Point {}  X: {}  Y: {}  Z: {}",
            self.index, self.angles.pan, self.angles.tilt, self.angles.grip
        )
    }
}

/// Everything needed to paint one frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    pub commands: Vec<DrawCommand>,
    pub readouts: Vec<WaypointReadout>,
}

impl Scene {
    pub fn markers(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Marker { .. }))
    }
}

/// Continuous redraw task bound to a session's lifetime.
pub struct RenderLoop {
    phase: FramePhase,
    handle: LoopHandle,
    frames: u64,
}

impl RenderLoop {
    pub fn new(speed: f32, handle: LoopHandle) -> Self {
        Self {
            phase: FramePhase::new(speed),
            handle,
            frames: 0,
        }
    }

    pub fn handle(&self) -> LoopHandle {
        self.handle.clone()
    }

    pub fn is_running(&self) -> bool {
        !self.handle.is_stopped()
    }

    pub fn frame_count(&self) -> u64 {
        self.frames
    }

    /// Advance the phase and build the next frame. `None` once stopped.
    pub fn next_frame(&mut self, session: &Session) -> Option<Scene> {
        if self.handle.is_stopped() {
            return None;
        }
        let phase = self.phase.advance();
        self.frames += 1;
        Some(build_scene(session, phase))
    }
}

/// Build the scene for a session at a given oscillation phase.
pub fn build_scene(session: &Session, phase: f32) -> Scene {
    let store = session.store();
    let surface = session.surface();
    let dragged = session.controller().dragging();
    let editing = session.controller().editing();

    let mut commands = Vec::with_capacity(2 + store.len() * 2);
    commands.push(DrawCommand::Clear);

    if store.len() > 1 {
        commands.push(DrawCommand::DashedPath {
            points: store.iter().map(|p| p.planar()).collect(),
            width: (surface.width * 0.003).max(2.0),
            dash: DASH_LENGTH,
            gap: GAP_LENGTH,
        });
    }

    let bounce_amplitude = surface.height * 0.01;
    let font_size = (surface.width * 0.015).max(16.0);

    for (index, point) in store.iter().enumerate() {
        let size = (MARKER_SIZE_PER_DEPTH * point.depth).max(MIN_MARKER_SIZE);
        let bounce = (phase + index as f32).sin() * bounce_amplitude;
        let center = point.planar() + Vec2::new(0.0, bounce);

        commands.push(DrawCommand::Marker {
            index,
            center,
            size,
            dragged: dragged == Some(index),
        });
        commands.push(DrawCommand::Label {
            text: index.to_string(),
            anchor: center + Vec2::new(size / 2.0, -size / 2.0),
            font_size,
        });
    }

    let readouts = store
        .iter()
        .enumerate()
        .map(|(index, point)| WaypointReadout {
            index,
            angles: map_waypoint(point, session.calibration(), &session.config().limits),
            editing: editing == Some(index),
        })
        .collect();

    Scene { commands, readouts }
}
