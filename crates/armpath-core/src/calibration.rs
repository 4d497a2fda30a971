use crate::config::AuthoringConfig;

/// A closed input interval with `min < max` guaranteed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisRange {
    min: f32,
    max: f32,
}

impl AxisRange {
    /// Build a range from two bounds in either order.
    ///
    /// Non-finite bounds fall back to 0, and a collapsed range is widened
    /// by one unit so that remapping never divides by zero.
    pub fn new(a: f32, b: f32) -> Self {
        let a = if a.is_finite() { a } else { 0.0 };
        let b = if b.is_finite() { b } else { 0.0 };
        let (min, max) = if a <= b { (a, b) } else { (b, a) };
        if max > min {
            Self { min, max }
        } else {
            Self { min, max: min + 1.0 }
        }
    }

    pub fn min(&self) -> f32 {
        self.min
    }

    pub fn max(&self) -> f32 {
        self.max
    }

    pub fn span(&self) -> f32 {
        self.max - self.min
    }

    /// Clamp into the range. NaN lands on the lower bound.
    pub fn clamp(&self, value: f32) -> f32 {
        if value.is_nan() {
            self.min
        } else {
            value.clamp(self.min, self.max)
        }
    }

    /// Position of a (clamped) value within the range, in [0, 1].
    pub fn fraction(&self, value: f32) -> f32 {
        (self.clamp(value) - self.min) / self.span()
    }
}

/// Backing size of the drawing surface, floored to one unit per side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceSize {
    pub width: f32,
    pub height: f32,
}

impl SurfaceSize {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: floor_dimension(width),
            height: floor_dimension(height),
        }
    }

    pub fn shorter_side(&self) -> f32 {
        self.width.min(self.height)
    }
}

fn floor_dimension(value: f32) -> f32 {
    if value.is_finite() {
        value.max(1.0)
    } else {
        1.0
    }
}

/// Valid input intervals for each mapped axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Calibration {
    /// Horizontal surface position, `[0, width]`.
    pub horizontal: AxisRange,
    /// Depth proxy, fixed operator units.
    pub depth: AxisRange,
    /// Vertical surface position used as the size proxy.
    pub size: AxisRange,
}

impl Calibration {
    /// Derive the input ranges for a surface of the given backing size.
    pub fn recompute(width: f32, height: f32, config: &AuthoringConfig) -> Self {
        Self::for_surface(SurfaceSize::new(width, height), config)
    }

    pub fn for_surface(surface: SurfaceSize, config: &AuthoringConfig) -> Self {
        let size_min = (surface.height * config.size_floor).round().max(1.0);
        let size_max = (surface.height * config.size_ceiling).round().max(size_min + 1.0);

        Self {
            horizontal: AxisRange::new(0.0, surface.width),
            depth: AxisRange::new(config.depth_min, config.depth_max),
            size: AxisRange::new(size_min, size_max),
        }
    }

    /// Construct from explicit ranges, bypassing surface derivation.
    pub fn from_ranges(horizontal: AxisRange, depth: AxisRange, size: AxisRange) -> Self {
        Self { horizontal, depth, size }
    }
}

/// Pointer catchment radii in backing pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitRadii {
    /// Press-to-drag catchment, also the drag slip limit.
    pub drag: f32,
    /// Click-to-edit catchment.
    pub select: f32,
}

impl HitRadii {
    pub fn for_surface(surface: SurfaceSize, config: &AuthoringConfig) -> Self {
        let side = surface.shorter_side();
        Self {
            drag: side * config.drag_radius,
            select: side * config.select_radius,
        }
    }
}
