//! Property-style sweeps over the tilt computation.

use glint_core::{compute_tilt, HoverMachine, SurfaceRect, TiltConfig, TiltState};

#[test]
fn rotations_bounded_for_all_interior_pointers() {
    let config = TiltConfig::default();
    let rect = SurfaceRect::new(40.0, 60.0, 320.0, 180.0);

    // Sample a dense grid strictly inside the rect.
    for i in 0..=64 {
        for j in 0..=64 {
            let x = rect.left + rect.width * (i as f64 / 64.0);
            let y = rect.top + rect.height * (j as f64 / 64.0);
            let state = compute_tilt(x, y, &rect, &config);

            assert!(
                state.rotation_x_deg.abs() <= config.max_angle_deg,
                "rotation_x {} out of range at ({}, {})",
                state.rotation_x_deg,
                x,
                y
            );
            assert!(
                state.rotation_y_deg.abs() <= config.max_angle_deg,
                "rotation_y {} out of range at ({}, {})",
                state.rotation_y_deg,
                x,
                y
            );
            assert!(state.glow_x_pct >= 0.0 && state.glow_x_pct <= 100.0);
            assert!(state.glow_y_pct >= 0.0 && state.glow_y_pct <= 100.0);
        }
    }
}

#[test]
fn computation_is_deterministic_across_repeated_calls() {
    let config = TiltConfig::default();
    let rect = SurfaceRect::new(0.0, 0.0, 333.0, 177.0);

    for i in 0..100 {
        let x = (i as f64) * 3.7;
        let y = (i as f64) * 1.3;
        let first = compute_tilt(x, y, &rect, &config);
        let second = compute_tilt(x, y, &rect, &config);
        assert_eq!(first, second);
    }
}

#[test]
fn hover_cycle_always_ends_neutral() {
    let rect = SurfaceRect::new(0.0, 0.0, 200.0, 100.0);

    // Several different trajectories, all ending in a leave.
    for seed in 0..10 {
        let mut machine = HoverMachine::new(TiltConfig::default());
        machine.pointer_enter(seed as f64 * 17.0, seed as f64 * 7.0, &rect);
        for step in 0..seed {
            machine.pointer_move(step as f64 * 11.0, step as f64 * 5.0, &rect);
        }
        assert_eq!(machine.pointer_leave(), TiltState::neutral());
    }
}

#[test]
fn mirrored_pointers_produce_mirrored_rotations() {
    let config = TiltConfig::default();
    let rect = SurfaceRect::new(0.0, 0.0, 200.0, 100.0);

    let left = compute_tilt(50.0, 50.0, &rect, &config);
    let right = compute_tilt(150.0, 50.0, &rect, &config);
    assert_eq!(left.rotation_y_deg, -right.rotation_y_deg);

    let above = compute_tilt(100.0, 25.0, &rect, &config);
    let below = compute_tilt(100.0, 75.0, &rect, &config);
    assert_eq!(above.rotation_x_deg, -below.rotation_x_deg);
}

#[test]
fn tilt_state_survives_serde_round_trip() {
    let config = TiltConfig::default();
    let rect = SurfaceRect::new(0.0, 0.0, 200.0, 100.0);
    let state = compute_tilt(137.0, 41.0, &rect, &config);

    let json = serde_json::to_string(&state).unwrap();
    let back: TiltState = serde_json::from_str(&json).unwrap();
    assert_eq!(state, back);
}
