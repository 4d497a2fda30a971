use serde::{Deserialize, Serialize};

use crate::calibration::Calibration;
use crate::mapper::{map_waypoint, ActuatorLimits, ServoAngles};
use crate::waypoint::WaypointStore;

/// One launched waypoint: three mapped servo angles plus the claw command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ServoFrame {
    pub pan: i32,
    pub tilt: i32,
    pub grip: i32,
    pub claw: i32,
}

impl ServoFrame {
    pub fn new(angles: ServoAngles, claw: i32) -> Self {
        Self {
            pan: angles.pan,
            tilt: angles.tilt,
            grip: angles.grip,
            claw,
        }
    }

    pub fn angles(&self) -> ServoAngles {
        ServoAngles { pan: self.pan, tilt: self.tilt, grip: self.grip }
    }
}

/// Map every waypoint, in store order, to a frame. The store is left intact.
pub fn plan_launch(
    store: &WaypointStore,
    calibration: &Calibration,
    limits: &ActuatorLimits,
    claw: i32,
) -> Vec<ServoFrame> {
    store
        .iter()
        .map(|p| ServoFrame::new(map_waypoint(p, calibration, limits), claw))
        .collect()
}
