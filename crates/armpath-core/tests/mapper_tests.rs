use armpath_core::{
    map_waypoint, AuthoringConfig, AxisRange, Calibration, ServoAngles, Waypoint, SERVO_LIMITS,
};

// ── Helpers ──────────────────────────────────────────────────────

fn calibration_800x600() -> Calibration {
    Calibration::recompute(800.0, 600.0, &AuthoringConfig::default())
}

/// Fixture calibration with the size proxy pinned to [6, 240].
fn fixture_calibration() -> Calibration {
    Calibration::from_ranges(
        AxisRange::new(0.0, 800.0),
        AxisRange::new(0.5, 3.0),
        AxisRange::new(6.0, 240.0),
    )
}

fn within_limits(angles: ServoAngles) -> bool {
    SERVO_LIMITS.pan.contains(angles.pan)
        && SERVO_LIMITS.tilt.contains(angles.tilt)
        && SERVO_LIMITS.grip.contains(angles.grip)
}

// ── 1. Calibration ───────────────────────────────────────────────

#[test]
fn horizontal_range_tracks_surface_width() {
    let cal = calibration_800x600();
    assert_eq!(cal.horizontal.min(), 0.0);
    assert_eq!(cal.horizontal.max(), 800.0);
}

#[test]
fn depth_range_is_independent_of_surface() {
    let small = Calibration::recompute(100.0, 50.0, &AuthoringConfig::default());
    let large = Calibration::recompute(4000.0, 3000.0, &AuthoringConfig::default());
    assert_eq!(small.depth, large.depth);
    assert_eq!(small.depth.min(), 0.5);
    assert_eq!(small.depth.max(), 3.0);
}

#[test]
fn size_range_scales_with_height() {
    let cal = calibration_800x600();
    assert_eq!(cal.size.min(), 6.0);
    assert_eq!(cal.size.max(), 480.0);
}

#[test]
fn zero_sized_surface_keeps_ranges_ordered() {
    for (w, h) in [(0.0, 0.0), (-10.0, 5.0), (f32::NAN, f32::INFINITY), (1.0, 1.0)] {
        let cal = Calibration::recompute(w, h, &AuthoringConfig::default());
        for range in [cal.horizontal, cal.depth, cal.size] {
            assert!(range.min() < range.max(), "degenerate range for {}x{}: {:?}", w, h, range);
        }
    }
}

#[test]
fn axis_range_sorts_and_widens() {
    let swapped = AxisRange::new(10.0, 2.0);
    assert_eq!((swapped.min(), swapped.max()), (2.0, 10.0));

    let collapsed = AxisRange::new(4.0, 4.0);
    assert!(collapsed.min() < collapsed.max());
}

// ── 2. Mapping ───────────────────────────────────────────────────

#[test]
fn centre_of_800x600_surface_maps_to_mid_pan() {
    let angles = map_waypoint(&Waypoint::new(400.0, 1.5, 300.0), &fixture_calibration(), &SERVO_LIMITS);
    assert_eq!(angles.pan, 75);
    // (1.5 - 0.5) / 2.5 * 180
    assert_eq!(angles.tilt, 72);
    // 50 - round((123 - 6) / 234 * 50)
    let grip = map_waypoint(&Waypoint::new(400.0, 1.5, 123.0), &fixture_calibration(), &SERVO_LIMITS).grip;
    assert_eq!(grip, 25);
}

#[test]
fn range_endpoints_hit_servo_endpoints() {
    let cal = fixture_calibration();
    let low = map_waypoint(&Waypoint::new(0.0, 0.5, 6.0), &cal, &SERVO_LIMITS);
    let high = map_waypoint(&Waypoint::new(800.0, 3.0, 240.0), &cal, &SERVO_LIMITS);

    assert_eq!(low, ServoAngles { pan: 0, tilt: 0, grip: 50 });
    assert_eq!(high, ServoAngles { pan: 150, tilt: 180, grip: 0 });
}

#[test]
fn grip_decreases_as_size_grows() {
    let cal = fixture_calibration();
    let mut previous = i32::MAX;
    for step in 0..=100 {
        let z = 6.0 + step as f32 * 2.34;
        let grip = map_waypoint(&Waypoint::new(0.0, 1.0, z), &cal, &SERVO_LIMITS).grip;
        assert!(grip <= previous, "grip rose from {} to {} at z={}", previous, grip, z);
        previous = grip;
    }
}

#[test]
fn out_of_range_input_clamps() {
    let cal = calibration_800x600();
    let far = map_waypoint(&Waypoint::new(1.0e9, 99.0, 1.0e9), &cal, &SERVO_LIMITS);
    assert_eq!(far, ServoAngles { pan: 150, tilt: 180, grip: 0 });

    let negative = map_waypoint(&Waypoint::new(-1.0e9, -99.0, -1.0e9), &cal, &SERVO_LIMITS);
    assert_eq!(negative, ServoAngles { pan: 0, tilt: 0, grip: 50 });
}

#[test]
fn non_finite_input_stays_in_limits() {
    let cal = calibration_800x600();
    let values = [f32::NAN, f32::INFINITY, f32::NEG_INFINITY, 0.0, -1.0, 1.0e30];
    for &x in &values {
        for &depth in &values {
            for &z in &values {
                let angles = map_waypoint(&Waypoint::new(x, depth, z), &cal, &SERVO_LIMITS);
                assert!(within_limits(angles), "({}, {}, {}) mapped to {:?}", x, depth, z, angles);
            }
        }
    }
}

#[test]
fn nan_lands_on_lower_input_bound() {
    let cal = calibration_800x600();
    let angles = map_waypoint(&Waypoint::new(f32::NAN, f32::NAN, f32::NAN), &cal, &SERVO_LIMITS);
    assert_eq!(angles, ServoAngles { pan: 0, tilt: 0, grip: 50 });
}
