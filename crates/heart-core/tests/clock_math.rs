// Host-side tests for the orbit and shader clock arithmetic.

use heart_core::*;

fn approx(a: f32, b: f32, eps: f32) -> bool {
    (a - b).abs() < eps
}

#[test]
fn shader_clocks_move_monotonically_for_forward_deltas() {
    let mut adv = UniformTimeAdvancer::new(ClockRates::default());
    let deltas = [0.0_f32, 0.5, 16.7, 33.3, 60.0, 1.0];
    let intensities = [0.0_f32, 0.1, 1.0, 5.0, 32.5];
    let mut prev = adv.clocks();
    for (i, d) in deltas.iter().cycle().take(60).enumerate() {
        let c = adv.advance(*d, intensities[i % intensities.len()]);
        assert!(c.heart_time >= prev.heart_time);
        assert!(c.snow_time >= prev.snow_time);
        assert!(c.model_rotation <= prev.model_rotation);
        prev = c;
    }
}

#[test]
fn zero_delta_leaves_clocks_untouched() {
    let mut adv = UniformTimeAdvancer::new(ClockRates::default());
    adv.advance(16.7, 2.0);
    let before = adv.clocks();
    for intensity in [0.0_f32, 0.5, 3.0, 32.5] {
        let after = adv.advance(0.0, intensity);
        assert_eq!(after, before);
    }
}

#[test]
fn resting_model_rotation_after_sixty_frames() {
    let mut adv = UniformTimeAdvancer::new(ClockRates::default());
    for _ in 0..60 {
        adv.advance(16.7, 0.0);
    }
    let c = adv.clocks();
    assert!(approx(c.model_rotation, -0.501, 1e-4), "got {}", c.model_rotation);
    assert!(approx(c.heart_time, 0.501, 1e-4));
    assert!(approx(c.snow_time, 0.4008, 1e-4));
}

#[test]
fn intensity_speeds_clocks_with_their_own_gains() {
    let mut adv = UniformTimeAdvancer::new(ClockRates::default());
    let c = adv.advance(10.0, 1.0);
    assert!(approx(c.heart_time, 10.0 * 0.0005 * 1.2, 1e-7));
    assert!(approx(c.model_rotation, -0.0005 * 10.0 * 2.0, 1e-7));
    assert!(approx(c.snow_time, 10.0 * 0.0004 * 2.0, 1e-7));
}

#[test]
fn orbit_angles_after_ten_frames() {
    let mut orbit = CameraOrbitDriver::new(OrbitParams::default());
    for _ in 0..10 {
        orbit.advance(16.7, 1.0);
    }
    let a = orbit.angle();
    assert!(approx(a.x, 0.10521, 1e-4), "x={}", a.x);
    assert!(approx(a.z, 0.06513, 1e-4), "z={}", a.z);
}

#[test]
fn orbit_rate_ignores_intensity() {
    let mut quiet = CameraOrbitDriver::new(OrbitParams::default());
    let mut loud = CameraOrbitDriver::new(OrbitParams::default());
    let a = quiet.advance(16.7, 0.0);
    let b = loud.advance(16.7, 30.0);
    assert_eq!(a, b);
}

#[test]
fn orbit_z_stays_in_bounds() {
    let p = OrbitParams::default();
    let mut angle = -20.0_f32;
    while angle < 20.0 {
        let pos = orbit_position(OrbitAngle { x: angle, z: angle }, &p);
        assert!((1.75..=6.5).contains(&pos.z), "z={} at {}", pos.z, angle);
        assert!(pos.x.abs() <= 2.0 + 1e-6);
        angle += 0.01;
    }
}

#[test]
fn orbit_z_clamps_high_values() {
    // cos(0) * 10 = 10, above the ceiling
    let p = OrbitParams {
        amplitude_z: 10.0,
        ..OrbitParams::default()
    };
    let pos = orbit_position(OrbitAngle { x: 0.0, z: 0.0 }, &p);
    assert_eq!(pos.z, 6.5);
}

#[test]
fn finish_resets_orbit_angles() {
    let mut orbit = CameraOrbitDriver::new(OrbitParams::default());
    orbit.advance(40.0, 0.0);
    assert!(orbit.angle().x > 0.0);
    orbit.on_finish();
    assert_eq!(orbit.angle(), OrbitAngle::default());
}
