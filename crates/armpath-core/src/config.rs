use serde::{Deserialize, Serialize};
use std::io;
use std::path::Path;

use crate::mapper::{ActuatorLimits, SERVO_LIMITS};

/// Tunables for one authoring session.
///
/// Every field has a default, so a partial JSON file only overrides
/// what it names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthoringConfig {
    /// Servo output intervals (pan, tilt, grip).
    pub limits: ActuatorLimits,
    /// Depth-proxy range in operator units, independent of the surface.
    pub depth_min: f32,
    pub depth_max: f32,
    /// Slider value used for waypoints placed before any slider input.
    pub initial_depth: f32,
    /// Size-proxy calibration floor, as a fraction of surface height.
    pub size_floor: f32,
    /// Size-proxy calibration ceiling, as a fraction of surface height.
    pub size_ceiling: f32,
    /// Drag catchment, as a fraction of the shorter surface side.
    pub drag_radius: f32,
    /// Click-to-edit catchment, as a fraction of the shorter surface side.
    pub select_radius: f32,
    /// Marker oscillation phase advance per frame, in radians.
    pub animation_speed: f32,
    /// Claw command sent with every launched frame.
    pub claw: i32,
}

impl Default for AuthoringConfig {
    fn default() -> Self {
        Self {
            limits: SERVO_LIMITS,
            depth_min: 0.5,
            depth_max: 3.0,
            initial_depth: 1.0,
            size_floor: 0.01,
            size_ceiling: 0.8,
            drag_radius: 0.1,
            select_radius: 0.05,
            animation_speed: 0.05,
            claw: 0,
        }
    }
}

/// Save an authoring config to disk as JSON.
pub fn save_config(path: &Path, config: &AuthoringConfig) -> io::Result<()> {
    let json = serde_json::to_string_pretty(config)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    std::fs::write(path, json)
}

/// Load an authoring config from disk.
pub fn load_config(path: &Path) -> io::Result<AuthoringConfig> {
    let json = std::fs::read_to_string(path)?;
    serde_json::from_str(&json).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

/// Load a config, falling back to defaults when the file is missing or invalid.
pub fn load_or_default(path: &Path) -> AuthoringConfig {
    match load_config(path) {
        Ok(config) => {
            log::info!("Loaded authoring config from {}", path.display());
            config
        }
        Err(e) => {
            log::warn!("Using default authoring config ({}: {})", path.display(), e);
            AuthoringConfig::default()
        }
    }
}
