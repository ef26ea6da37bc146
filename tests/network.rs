// Native integration tests for the particle network. These stay clear of
// browser APIs so they run under a plain `cargo test`.

use std::cell::RefCell;
use std::rc::Rc;

use particle_network::{
    run, Color, DrawCommand, FixedViewport, ManualClock, NetworkConfig, NetworkError,
    ParticleNetwork, RecordingSurface, Surface,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn build(config: NetworkConfig, viewport: &FixedViewport) -> ParticleNetwork<RecordingSurface> {
    ParticleNetwork::initialize(
        Some(RecordingSurface::new(0, 0)),
        Box::new(viewport.clone()),
        config,
        StdRng::seed_from_u64(7),
    )
    .expect("valid config")
    .expect("surface present")
}

fn freeze(network: &mut ParticleNetwork<RecordingSurface>, positions: &[[f64; 2]]) {
    for (p, pos) in network.particles_mut().iter_mut().zip(positions) {
        p.pos = *pos;
        p.vel = [0.0, 0.0];
    }
}

#[test]
fn missing_surface_is_a_silent_no_op() {
    let network = ParticleNetwork::<RecordingSurface>::initialize(
        None,
        Box::new(FixedViewport::new(800, 600)),
        NetworkConfig::default(),
        StdRng::seed_from_u64(1),
    );
    assert!(matches!(network, Ok(None)));
}

#[test]
fn invalid_config_is_rejected() {
    let network = ParticleNetwork::initialize(
        Some(RecordingSurface::new(0, 0)),
        Box::new(FixedViewport::new(800, 600)),
        NetworkConfig::default().with_mouse_distance(-1.0),
        StdRng::seed_from_u64(1),
    );
    assert!(matches!(network, Err(NetworkError::InvalidConfig(_))));
}

#[test]
fn populate_yields_exact_count_within_bounds() {
    let viewport = FixedViewport::new(320, 200);
    for &count in &[0usize, 1, 2, 17, 250] {
        let mut network = build(NetworkConfig::default().with_particle_count(count), &viewport);
        assert_eq!(network.particles().len(), count);
        network.populate();
        assert_eq!(network.particles().len(), count);
        for p in network.particles() {
            assert!(p.pos[0] >= 0.0 && p.pos[0] <= 320.0, "x out of bounds: {}", p.pos[0]);
            assert!(p.pos[1] >= 0.0 && p.pos[1] <= 200.0, "y out of bounds: {}", p.pos[1]);
        }
    }
}

#[test]
fn two_particles_fifty_apart_get_one_half_opacity_line() {
    let viewport = FixedViewport::new(200, 200);
    let config = NetworkConfig::default()
        .with_particle_count(2)
        .with_connection_distance(100.0);
    let mut network = build(config, &viewport);
    freeze(&mut network, &[[0.0, 0.0], [50.0, 0.0]]);

    network.render_frame();

    let lines: Vec<_> = network.surface().lines().cloned().collect();
    assert_eq!(
        lines,
        vec![DrawCommand::Line {
            from: [0.0, 0.0],
            to: [50.0, 0.0],
            color: Color::from_u32(0xffffffff),
            opacity: 0.5,
            width: 1.0,
        }]
    );
}

#[test]
fn frame_clears_then_draws_every_particle() {
    let viewport = FixedViewport::new(400, 300);
    let mut network = build(NetworkConfig::default().with_particle_count(12), &viewport);

    network.render_frame();

    let surface = network.surface();
    assert_eq!(surface.commands().first(), Some(&DrawCommand::Clear));
    assert_eq!(surface.circles().count(), 12);
    assert_eq!(surface.lines().count(), network.connections().len());
}

#[test]
fn no_line_at_or_beyond_connection_distance() {
    let viewport = FixedViewport::new(500, 500);
    let config = NetworkConfig::default()
        .with_particle_count(3)
        .with_connection_distance(100.0);
    let mut network = build(config, &viewport);
    freeze(&mut network, &[[0.0, 0.0], [100.0, 0.0], [300.0, 300.0]]);

    network.render_frame();

    assert_eq!(network.surface().lines().count(), 0);
    assert!(network.connections().is_empty());
}

#[test]
fn line_opacity_tracks_distance() {
    let viewport = FixedViewport::new(500, 500);
    let config = NetworkConfig::default()
        .with_particle_count(2)
        .with_connection_distance(80.0);
    let mut network = build(config, &viewport);
    freeze(&mut network, &[[10.0, 10.0], [10.0, 30.0]]);

    let connections = network.connections();
    assert_eq!(connections.len(), 1);
    assert_eq!(connections[0].distance, 20.0);
    assert_eq!(connections[0].opacity, 0.75);
}

#[test]
fn resize_follows_viewport_and_keeps_particles() {
    let viewport = FixedViewport::new(640, 480);
    let mut network = build(NetworkConfig::default().with_particle_count(30), &viewport);
    let before = network.particles().to_vec();

    viewport.set(1280, 720);
    network.resize();

    assert_eq!(network.surface().width(), 1280);
    assert_eq!(network.surface().height(), 720);
    assert_eq!(network.particles(), &before[..]);
}

#[test]
fn shrinking_resize_brings_particles_back_inside() {
    let viewport = FixedViewport::new(1000, 500);
    let mut network = build(NetworkConfig::default().with_particle_count(1), &viewport);
    freeze(&mut network, &[[900.0, 100.0]]);
    network.particles_mut()[0].vel = [0.3, 0.0];

    viewport.set(500, 500);
    network.resize();
    for _ in 0..2000 {
        network.render_frame();
    }

    let x = network.particles()[0].pos[0];
    assert!(x >= 0.0 && x <= 500.0, "particle stuck outside at x = {}", x);
}

#[test]
fn pointer_pulls_nearby_particle() {
    let viewport = FixedViewport::new(500, 500);
    let config = NetworkConfig::default()
        .with_particle_count(1)
        .with_mouse_distance(100.0)
        .with_base_speed(1.0);
    let mut network = build(config, &viewport);
    freeze(&mut network, &[[100.0, 100.0]]);

    network.pointer().moved(150.0, 100.0);
    network.render_frame();

    let p = network.particles()[0];
    assert_eq!(p.pos, [100.0, 100.0]);
    assert!((p.vel[0] - 0.5).abs() < 1e-12);
    assert_eq!(p.vel[1], 0.0);
}

#[test]
fn pointer_far_away_changes_nothing() {
    let viewport = FixedViewport::new(500, 500);
    let config = NetworkConfig::default()
        .with_particle_count(1)
        .with_mouse_distance(100.0);
    let mut network = build(config, &viewport);
    freeze(&mut network, &[[100.0, 100.0]]);

    network.pointer().moved(400.0, 400.0);
    network.render_frame();

    assert_eq!(network.particles()[0].vel, [0.0, 0.0]);
}

#[test]
fn pointer_on_top_of_particle_stays_finite() {
    let viewport = FixedViewport::new(500, 500);
    let mut network = build(NetworkConfig::default().with_particle_count(1), &viewport);
    freeze(&mut network, &[[250.0, 250.0]]);

    network.pointer().moved(250.0, 250.0);
    for _ in 0..10 {
        network.render_frame();
        let p = network.particles()[0];
        assert!(p.pos.iter().chain(p.vel.iter()).all(|v| v.is_finite()));
        assert!(vecmath::vec2_len(p.vel) <= network.config().max_speed() + 1e-9);
    }
}

#[test]
fn run_renders_once_per_frame_until_stopped() {
    let viewport = FixedViewport::new(300, 300);
    let network = Rc::new(RefCell::new(build(
        NetworkConfig::default().with_particle_count(4),
        &viewport,
    )));
    let clock = Rc::new(ManualClock::new());

    let stop = run(network.clone(), clock.clone());
    assert_eq!(network.borrow().surface().clears(), 0);
    assert_eq!(clock.pending(), 1);

    assert!(clock.step(16.0));
    assert!(clock.step(32.0));
    assert_eq!(network.borrow().surface().clears(), 2);
    assert_eq!(clock.pending(), 1);

    stop.stop();
    assert!(clock.step(48.0));
    assert_eq!(network.borrow().surface().clears(), 2);
    assert_eq!(clock.pending(), 0);
}
