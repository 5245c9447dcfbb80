// Host-side tests for frame driving and the explicit stop handle.

mod common;

use common::core::constants::PARTICLE_COUNT;
use common::core::lifecycle::*;
use common::core::particles::*;
use common::RecordingSurface;

fn driver() -> FrameDriver {
    FrameDriver::new(ParticleField::new(
        800.0,
        600.0,
        FieldConfig::default(),
        21,
    ))
}

#[test]
fn tick_steps_renders_and_counts_frames() {
    let mut d = driver();
    let control = d.control();
    let before = d.field.particles.clone();
    let mut surface = RecordingSurface::default();

    for _ in 0..3 {
        assert!(d.tick(&mut surface));
    }
    assert_eq!(control.frames(), 3);
    assert_eq!(surface.circles(), 3 * PARTICLE_COUNT);
    assert_ne!(before, d.field.particles);
}

#[test]
fn stopped_driver_does_nothing() {
    let mut d = driver();
    let control = d.control();
    let mut surface = RecordingSurface::default();
    assert!(d.tick(&mut surface));

    control.stop();
    assert!(d.control().is_stopped(), "clones share the stop flag");

    let frozen = d.field.particles.clone();
    let calls = surface.calls.len();
    assert!(!d.tick(&mut surface));
    assert!(!d.resize(400.0, 300.0));
    assert_eq!(d.field.particles, frozen);
    assert_eq!(surface.calls.len(), calls);
    assert_eq!(control.frames(), 1);
}

#[test]
fn stop_is_idempotent() {
    let control = LoopControl::new();
    assert!(!control.is_stopped());
    control.stop();
    control.stop();
    assert!(control.is_stopped());
}

#[test]
fn host_loop_runs_until_stopped() {
    let mut d = driver();
    let control = d.control();
    let mut surface = RecordingSurface::default();
    let mut ticks = 0;
    while d.tick(&mut surface) {
        ticks += 1;
        if ticks == 10 {
            control.stop();
        }
    }
    assert_eq!(ticks, 10);
    assert_eq!(control.frames(), 10);
}

#[test]
fn resize_reseeds_running_field() {
    let mut d = driver();
    let mut surface = RecordingSurface::default();
    for _ in 0..5 {
        d.tick(&mut surface);
    }
    assert!(d.resize(400.0, 300.0));
    assert_eq!(d.field.len(), PARTICLE_COUNT);
    for p in &d.field.particles {
        assert!(p.position.x >= 0.0 && p.position.x <= 400.0);
        assert!(p.position.y >= 0.0 && p.position.y <= 300.0);
    }
    assert!(d.tick(&mut surface));
}

#[test]
fn dropping_the_guard_stops_the_loop() {
    let mut d = driver();
    let mut surface = RecordingSurface::default();
    let guard = d.control().guard();
    assert!(d.tick(&mut surface));

    drop(guard);
    assert!(d.control().is_stopped());
    assert!(!d.tick(&mut surface));
    assert!(!d.resize(400.0, 300.0));
    assert_eq!(d.control().frames(), 1);
}

#[test]
fn guard_shares_state_with_driver_until_dropped() {
    let mut d = driver();
    let mut surface = RecordingSurface::default();
    {
        let guard = d.control().guard();
        for _ in 0..4 {
            assert!(d.tick(&mut surface));
        }
        assert_eq!(guard.control().frames(), 4);
        assert!(!guard.control().is_stopped());
    }
    assert!(!d.tick(&mut surface));
}
