pub mod calibration;
pub mod config;
pub mod interaction;
pub mod launch;
pub mod mapper;
pub mod render;
pub mod session;
pub mod waypoint;

pub use calibration::{AxisRange, Calibration, HitRadii, SurfaceSize};
pub use config::AuthoringConfig;
pub use interaction::{DragState, InputEvent, InteractionController, Outcome};
pub use launch::{plan_launch, ServoFrame};
pub use mapper::{map_waypoint, ActuatorLimits, Interval, ServoAngles, SERVO_LIMITS};
pub use render::{DrawCommand, FramePhase, LoopHandle, RenderLoop, Scene, WaypointReadout};
pub use session::Session;
pub use waypoint::{Waypoint, WaypointPatch, WaypointStore};
