// Host-side tests for the particle field simulation.

use folio_core::constants::*;
use folio_core::*;
use glam::Vec2;

fn field(theme: Theme) -> ParticleField {
    ParticleField::new(theme, 800.0, 600.0, 7)
}

#[test]
fn theme_sets_particle_count_and_kinds() {
    let light = field(Theme::Light);
    assert_eq!(light.particles().len(), LIGHT_PARTICLE_COUNT);
    assert!(light
        .particles()
        .iter()
        .all(|p| p.kind != ParticleKind::MagicOrb));

    let dark = field(Theme::Dark);
    assert_eq!(dark.particles().len(), DARK_PARTICLE_COUNT);
    assert!(dark
        .particles()
        .iter()
        .all(|p| matches!(p.kind, ParticleKind::MagicOrb | ParticleKind::Sparkle)));
    assert!(DARK_PARTICLE_COUNT > LIGHT_PARTICLE_COUNT);
}

#[test]
fn seeded_values_fall_in_ranges() {
    for theme in [Theme::Light, Theme::Dark] {
        let span = FieldParams::for_theme(theme).size_span;
        for p in field(theme).particles() {
            assert!(p.position.x >= 0.0 && p.position.x < 800.0);
            assert!(p.position.y >= 0.0 && p.position.y < 600.0);
            assert!(p.size >= PARTICLE_MIN_SIZE && p.size < PARTICLE_MIN_SIZE + span);
            assert!(p.velocity.x >= -0.25 && p.velocity.x < 0.25);
            assert!(p.velocity.y >= 0.2 && p.velocity.y < 0.7);
            assert!(p.opacity >= 0.2 && p.opacity < 0.7);
        }
    }
}

#[test]
fn particle_below_bottom_respawns_above_top() {
    let mut f = field(Theme::Light);
    let (w, h) = f.size();
    f.particles_mut()[3].position = Vec2::new(400.0, h + PARTICLE_EDGE_MARGIN + 1.0);
    f.step();
    let p = &f.particles()[3];
    assert!(p.position.y < 0.0, "y = {}", p.position.y);
    assert!(p.position.x >= 0.0 && p.position.x < w, "x = {}", p.position.x);
}

#[test]
fn every_particle_stays_in_the_wrapped_band() {
    let mut f = field(Theme::Dark);
    let (w, h) = f.size();
    for _ in 0..5000 {
        f.step();
        for p in f.particles() {
            assert!(p.position.y >= -PARTICLE_EDGE_MARGIN);
            assert!(p.position.y <= h + PARTICLE_EDGE_MARGIN + 1.0);
            assert!(p.position.x >= -PARTICLE_EDGE_MARGIN - 1.0);
            assert!(p.position.x <= w + PARTICLE_EDGE_MARGIN + 1.0);
        }
    }
    assert_eq!(f.particles().len(), DARK_PARTICLE_COUNT);
}

#[test]
fn horizontal_overflow_wraps_to_opposite_edge() {
    let mut f = field(Theme::Light);
    let (w, _) = f.size();
    {
        let ps = f.particles_mut();
        ps[0].position = Vec2::new(w + 50.0, 100.0);
        ps[0].velocity = Vec2::ZERO;
        ps[1].position = Vec2::new(-50.0, 100.0);
        ps[1].velocity = Vec2::ZERO;
    }
    f.step();
    assert_eq!(f.particles()[0].position.x, -PARTICLE_EDGE_MARGIN);
    assert_eq!(f.particles()[1].position.x, w + PARTICLE_EDGE_MARGIN);
}

#[test]
fn sway_depends_on_index_and_height() {
    let mut f = field(Theme::Light);
    {
        let ps = f.particles_mut();
        for p in ps.iter_mut().take(2) {
            p.position = Vec2::new(300.0, 200.0);
            p.velocity = Vec2::ZERO;
        }
    }
    f.step();
    let a = f.particles()[0].position.x;
    let b = f.particles()[1].position.x;
    let expected_a = 300.0 + (200.0_f32 * SWAY_FREQUENCY).sin() * SWAY_AMPLITUDE;
    let expected_b = 300.0 + (200.0_f32 * SWAY_FREQUENCY + 1.0).sin() * SWAY_AMPLITUDE;
    assert!((a - expected_a).abs() < 1e-4);
    assert!((b - expected_b).abs() < 1e-4);
    assert!((a - b).abs() > 1e-3);
}

#[test]
fn resize_keeps_running_particles() {
    let mut f = field(Theme::Light);
    for _ in 0..10 {
        f.step();
    }
    let before: Vec<Vec2> = f.particles().iter().map(|p| p.position).collect();
    f.resize(1024.0, 768.0);
    let after: Vec<Vec2> = f.particles().iter().map(|p| p.position).collect();
    assert_eq!(before, after);
    assert_eq!(f.size(), (1024.0, 768.0));
}

#[test]
fn reseed_switches_to_dark_parameters() {
    let mut f = field(Theme::Light);
    f.step();
    f.reseed(Theme::Dark);
    assert_eq!(f.theme(), Theme::Dark);
    assert_eq!(f.particles().len(), DARK_PARTICLE_COUNT);
}

#[test]
fn zero_sized_canvas_does_not_panic() {
    let mut f = ParticleField::new(Theme::Dark, 0.0, 0.0, 1);
    for _ in 0..100 {
        f.step();
    }
    assert_eq!(f.particles().len(), DARK_PARTICLE_COUNT);
}

#[test]
fn draw_styles_follow_kind_and_theme() {
    let mut p = field(Theme::Light).particles()[0].clone();
    p.size = 4.0;
    p.opacity = 0.5;

    p.kind = ParticleKind::Petal;
    let s = draw_style(&p, Theme::Light);
    assert_eq!(s.fill, "#FFB7C5");
    assert!(s.glow.is_none());
    assert_eq!(s.alpha, 0.5);
    assert!(matches!(
        s.shape,
        Shape::Ellipse { rx, ry, .. } if rx == 4.0 && (ry - 2.4).abs() < 1e-6
    ));

    p.kind = ParticleKind::Sparkle;
    let light = draw_style(&p, Theme::Light);
    let dark = draw_style(&p, Theme::Dark);
    assert_ne!(light.fill, dark.fill);
    assert_eq!(light.glow.map(|g| g.blur), Some(10.0));
    assert_eq!(dark.glow.map(|g| g.blur), Some(15.0));
    assert_eq!(light.shape, Shape::Circle { radius: 2.0 });

    p.kind = ParticleKind::MagicOrb;
    let orb = draw_style(&p, Theme::Dark);
    assert_eq!(orb.glow.map(|g| g.blur), Some(20.0));
}
