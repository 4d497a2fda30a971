use serde::{Deserialize, Serialize};

use crate::calibration::{AxisRange, Calibration};
use crate::waypoint::Waypoint;

/// A closed integer output interval for one servo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interval {
    pub min: i32,
    pub max: i32,
}

impl Interval {
    pub const fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }

    pub fn low(&self) -> i32 {
        self.min.min(self.max)
    }

    pub fn high(&self) -> i32 {
        self.min.max(self.max)
    }

    pub fn contains(&self, value: i32) -> bool {
        value >= self.low() && value <= self.high()
    }

    fn clamp(&self, value: i32) -> i32 {
        value.clamp(self.low(), self.high())
    }
}

/// Hardware servo intervals for the wrist pan, wrist tilt and grip axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActuatorLimits {
    pub pan: Interval,
    pub tilt: Interval,
    pub grip: Interval,
}

impl Default for ActuatorLimits {
    fn default() -> Self {
        SERVO_LIMITS
    }
}

pub const SERVO_LIMITS: ActuatorLimits = ActuatorLimits {
    pan: Interval::new(0, 150),
    tilt: Interval::new(0, 180),
    grip: Interval::new(0, 50),
};

/// Servo angles derived from one waypoint. Never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ServoAngles {
    pub pan: i32,
    pub tilt: i32,
    pub grip: i32,
}

/// Linearly remap `value` from `from` into `[to_min, to_max]`, clamping first.
pub fn map_range(value: f32, from: AxisRange, to_min: f32, to_max: f32) -> f32 {
    to_min + from.fraction(value) * (to_max - to_min)
}

/// Clamp, remap and round onto the output interval.
fn direct_axis(value: f32, from: AxisRange, out: Interval) -> i32 {
    let mapped = map_range(value, from, out.low() as f32, out.high() as f32);
    out.clamp(mapped.round() as i32)
}

/// Like [`direct_axis`], but larger inputs yield smaller angles.
///
/// The grip servo's zero sits at the "largest apparent size" end, so the
/// remapped offset is subtracted from the interval's upper bound.
fn inverted_axis(value: f32, from: AxisRange, out: Interval) -> i32 {
    let offset = map_range(value, from, 0.0, (out.high() - out.low()) as f32);
    out.clamp(out.high() - offset.round() as i32)
}

/// Convert a waypoint into servo angles under the given calibration.
///
/// Total over all inputs: NaN and infinities clamp to a range boundary.
pub fn map_waypoint(point: &Waypoint, calibration: &Calibration, limits: &ActuatorLimits) -> ServoAngles {
    ServoAngles {
        pan: direct_axis(point.x, calibration.horizontal, limits.pan),
        tilt: direct_axis(point.depth, calibration.depth, limits.tilt),
        grip: inverted_axis(point.z, calibration.size, limits.grip),
    }
}
