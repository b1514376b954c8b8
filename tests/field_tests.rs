// Host-side tests for frame geometry: core radius, particle motion and the
// proximity graph.

use ai_orb::constants::*;
use ai_orb::core::{
    connections, core_radius, particle_depth, DisplayList, DrawCommand, Mood, ParticleField,
    Surface,
};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;
use std::f32::consts::TAU;

fn make_field(mood: Mood, scale: f32, seed: u64) -> ParticleField {
    let side = (SURFACE_SIZE * scale) as u32;
    ParticleField::new(mood, scale, side, &mut StdRng::seed_from_u64(seed))
}

#[test]
fn seeded_particles_stay_in_range() {
    let field = make_field(Mood::Idle, 1.0, 7);
    assert_eq!(field.particles().len(), PARTICLE_COUNT);
    for p in field.particles() {
        assert!(p.position.x >= 0.0 && p.position.x < 300.0);
        assert!(p.position.y >= 0.0 && p.position.y < 300.0);
        assert!(p.radius >= PARTICLE_RADIUS_MIN && p.radius < PARTICLE_RADIUS_MAX);
        assert!(p.angular_speed >= PARTICLE_SPEED_MIN && p.angular_speed < PARTICLE_SPEED_MAX);
        assert!(p.phase_offset >= 0.0 && p.phase_offset < TAU);
    }
}

#[test]
fn same_seed_gives_same_particles() {
    let a = make_field(Mood::Speaking, 1.5, 99);
    let b = make_field(Mood::Speaking, 1.5, 99);
    assert_eq!(a.particles(), b.particles());
}

#[test]
fn core_radius_is_bounded_for_every_mood() {
    for mood in Mood::ALL {
        let pulse = mood.params().pulse_speed;
        for scale in [0.2_f32, 1.0, 2.0] {
            for frame in 0..5_000 {
                let r = core_radius(frame as f32 * TIME_STEP, scale, pulse);
                assert!(r >= 55.0 * scale - 1e-3, "{mood} scale {scale}: {r}");
                assert!(r <= 65.0 * scale + 1e-3, "{mood} scale {scale}: {r}");
            }
        }
    }
}

#[test]
fn core_radius_is_periodic_in_pulse_speed() {
    for mood in Mood::ALL {
        let pulse = mood.params().pulse_speed;
        let period = TAU / pulse;
        for step in 0..50 {
            let t = step as f32 * 0.13;
            let a = core_radius(t, 1.0, pulse);
            let b = core_radius(t + period, 1.0, pulse);
            assert!((a - b).abs() < 1e-3, "{mood} at t={t}: {a} vs {b}");
        }
    }
}

#[test]
fn hundred_frames_reach_time_one() {
    let mut field = make_field(Mood::Idle, 1.0, 1);
    for _ in 0..100 {
        field.advance();
    }
    assert_eq!(field.frames(), 100);
    assert!((field.time() - 1.0).abs() < 1e-6);
    let g = field.geometry(Vec2::splat(150.0));
    let expected = 60.0 + 5.0 * 1.0_f32.sin();
    assert!((g.radius - expected).abs() < 1e-4, "radius {}", g.radius);
}

#[test]
fn particles_orbit_at_fixed_vertical_distance() {
    let mut field = make_field(Mood::Thinking, 1.0, 3);
    for _ in 0..37 {
        field.advance();
    }
    let center = Vec2::splat(150.0);
    let g = field.geometry(center);
    let orbit = g.radius * ORBIT_DISTANCE_FRACTION;
    for (i, pos) in g.positions.iter().enumerate() {
        // x is squashed by the wobble, y is the plain orbit
        let dx = (pos.x - center.x).abs();
        let dy = (pos.y - center.y).abs();
        assert!(dx <= orbit + 1e-3, "particle {i} x out of orbit");
        assert!(dy <= orbit + 1e-3, "particle {i} y out of orbit");
    }
}

#[test]
fn depth_proxy_stays_in_unit_range() {
    for i in 0..PARTICLE_COUNT {
        for frame in 0..200 {
            let z = particle_depth(i, frame as f32 * TIME_STEP);
            assert!((-1.0..=1.0).contains(&z));
        }
    }
}

#[test]
fn connections_respect_threshold() {
    let positions = vec![
        Vec2::new(0.0, 0.0),
        Vec2::new(30.0, 0.0),
        Vec2::new(0.0, 40.0),
        Vec2::new(100.0, 100.0),
    ];
    let links = connections(&positions, 40.0);
    let pairs: Vec<(usize, usize)> = links.iter().map(|l| (l.a, l.b)).collect();
    // (0,2) is exactly 40 apart and excluded
    assert_eq!(pairs, vec![(0, 1)]);
    assert!((links[0].distance - 30.0).abs() < 1e-6);
}

#[test]
fn connections_are_symmetric_in_iteration_order() {
    let mut field = make_field(Mood::Listening, 1.0, 11);
    for _ in 0..250 {
        field.advance();
    }
    let g = field.geometry(Vec2::splat(150.0));
    let n = g.positions.len();

    let forward: HashSet<(usize, usize)> = connections(&g.positions, 40.0)
        .into_iter()
        .map(|l| (l.a, l.b))
        .collect();

    let reversed: Vec<Vec2> = g.positions.iter().rev().copied().collect();
    let backward: HashSet<(usize, usize)> = connections(&reversed, 40.0)
        .into_iter()
        .map(|l| {
            let (a, b) = (n - 1 - l.a, n - 1 - l.b);
            (a.min(b), a.max(b))
        })
        .collect();

    assert_eq!(forward, backward);
    for a in 0..n {
        for b in a + 1..n {
            let close = g.positions[a].distance(g.positions[b]) < 40.0;
            assert_eq!(close, forward.contains(&(a, b)));
        }
    }
}

#[test]
fn frame_draws_halo_rings_dots_then_lines() {
    let mut field = make_field(Mood::Idle, 1.0, 5);
    field.advance();
    let mut surface = DisplayList::new(300, 300);
    field.draw(&mut surface);

    let cmds = surface.commands();
    assert_eq!(cmds[0], DrawCommand::Clear);
    assert!(matches!(cmds[1], DrawCommand::FillRadialGradient { .. }));
    assert!(cmds[2..5]
        .iter()
        .all(|c| matches!(c, DrawCommand::StrokeEllipse { .. })));
    assert!(cmds[5..5 + PARTICLE_COUNT]
        .iter()
        .all(|c| matches!(c, DrawCommand::FillCircle { .. })));
    assert!(cmds[5 + PARTICLE_COUNT..]
        .iter()
        .all(|c| matches!(c, DrawCommand::StrokeLine { .. })));
}

#[test]
fn halo_gradient_uses_core_radius() {
    let mut field = make_field(Mood::Speaking, 1.0, 5);
    field.advance();
    let mut surface = DisplayList::new(300, 300);
    field.draw(&mut surface);
    let radius = core_radius(field.time(), 1.0, 3.0);

    let DrawCommand::FillRadialGradient {
        center,
        inner_radius,
        outer_radius,
        stops,
    } = &surface.commands()[1]
    else {
        panic!("expected gradient");
    };
    assert_eq!(*center, Vec2::splat(150.0));
    assert!((inner_radius - radius * 0.2).abs() < 1e-4);
    assert!((outer_radius - radius * 2.0).abs() < 1e-4);
    assert_eq!(stops.len(), 3);
    assert_eq!(stops[1].offset, 0.5);
    assert!((stops[0].color.alpha - 0.1 * 1.3).abs() < 1e-6);
    assert!((stops[1].color.alpha - 0.05 * 1.3).abs() < 1e-6);
    assert_eq!(stops[2].color.alpha, 0.0);
}

#[test]
fn rings_grow_wider_and_flatter() {
    let mut field = make_field(Mood::Thinking, 2.0, 5);
    field.advance();
    let mut surface = DisplayList::new(600, 600);
    field.draw(&mut surface);
    let t = field.time();
    let radius = core_radius(t, 2.0, 1.0);

    for (i, cmd) in surface.commands()[2..5].iter().enumerate() {
        let DrawCommand::StrokeEllipse {
            radii,
            rotation,
            color,
            width,
            ..
        } = cmd
        else {
            panic!("expected ellipse");
        };
        let k = i as f32;
        assert!((radii.x - radius * (1.0 + 0.3 * k)).abs() < 1e-3);
        assert!((radii.y - radius * (0.8 - 0.1 * k)).abs() < 1e-3);
        assert!((rotation - (t * 0.2 * 2.0 + t + k)).abs() < 1e-5);
        assert_eq!(color.hue, 270.0 + 20.0 * k);
        assert_eq!(*width, 1.0);
    }
}

#[test]
fn dots_scale_and_fade_with_depth() {
    let mut field = make_field(Mood::Idle, 1.5, 8);
    field.advance();
    let mut surface = DisplayList::new(450, 450);
    field.draw(&mut surface);
    let t = field.time();

    for (i, (cmd, p)) in surface.circles().zip(field.particles()).enumerate() {
        let DrawCommand::FillCircle { radius, color, .. } = cmd else {
            unreachable!()
        };
        let z = particle_depth(i, t);
        assert!((radius - p.radius * 1.5 * (z + 2.0) / 2.0).abs() < 1e-5);
        assert!((color.alpha - (z + 1.5) / 3.0).abs() < 1e-5);
        assert_eq!((color.saturation, color.lightness), (90.0, 70.0));
    }
}

#[test]
fn lines_join_dots_of_the_same_frame() {
    let mut field = make_field(Mood::Listening, 1.0, 21);
    let mut surface = DisplayList::new(300, 300);
    let mut saw_lines = false;
    for _ in 0..300 {
        field.advance();
        field.draw(&mut surface);
        let centers: Vec<Vec2> = surface
            .circles()
            .map(|c| match c {
                DrawCommand::FillCircle { center, .. } => *center,
                _ => unreachable!(),
            })
            .collect();
        for line in surface.lines() {
            let DrawCommand::StrokeLine {
                from,
                to,
                color,
                width,
            } = line
            else {
                unreachable!()
            };
            saw_lines = true;
            assert!(centers.contains(from) && centers.contains(to));
            let d = from.distance(*to);
            assert!(d < 40.0);
            assert!((color.alpha - 0.1 * (1.0 - d / 40.0)).abs() < 1e-5);
            assert_eq!(*width, 0.5);
        }
    }
    assert!(saw_lines, "60 particles on a small orbit should touch");
}

#[test]
fn draw_does_not_advance_clock() {
    let field = make_field(Mood::Idle, 1.0, 2);
    let mut surface = DisplayList::new(300, 300);
    field.draw(&mut surface);
    field.draw(&mut surface);
    assert_eq!(field.time(), 0.0);
    assert_eq!(surface.size(), (300, 300));
}
