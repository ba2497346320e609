//! Drifting, pulsing points.

use std::f32::consts::TAU;

use nannou::prelude::Vec2;
use nannou::rand::Rng;

use crate::color::Tint;
use crate::surface::{Glow, Paint, Surface};
use crate::viewport::Viewport;

/// Ranges the points are randomized from when spawned.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpawnParams {
    /// Per-axis speed bound, velocity components fall in `[-max_speed, max_speed)`.
    pub max_speed: f32,
    pub min_radius: f32,
    pub max_radius: f32,
    pub min_hue: f32,
    pub max_hue: f32,
}

impl Default for SpawnParams {
    fn default() -> Self {
        Self {
            max_speed: 0.3,
            min_radius: 2.0,
            max_radius: 4.0,
            min_hue: 180.0,
            max_hue: 240.0,
        }
    }
}

/// Phase advance per frame, in radians.
pub const DEFAULT_PULSE_RATE: f32 = 0.06;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub position: Vec2,
    pub velocity: Vec2,
    pub base_radius: f32,
    pub radius: f32,
    pub phase: f32,
    pub hue: f32,
}

impl Point {
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, viewport: &Viewport, params: &SpawnParams) -> Self {
        let base_radius = uniform(rng, params.min_radius, params.max_radius);
        Self {
            position: Vec2::new(
                uniform(rng, 0.0, viewport.width()),
                uniform(rng, 0.0, viewport.height()),
            ),
            velocity: Vec2::new(
                uniform(rng, -params.max_speed, params.max_speed),
                uniform(rng, -params.max_speed, params.max_speed),
            ),
            base_radius,
            radius: base_radius,
            phase: uniform(rng, 0.0, TAU),
            hue: uniform(rng, params.min_hue, params.max_hue),
        }
    }

    /// One fixed simulation step: move, bounce off the viewport edges and
    /// advance the pulse.
    ///
    /// Bouncing only flips the velocity; a point may sit one step outside the
    /// bounds before coming back.
    pub fn advance(&mut self, viewport: &Viewport, pulse_rate: f32) {
        self.position += self.velocity;

        if self.position.x < 0.0 || self.position.x > viewport.width() {
            self.velocity.x = -self.velocity.x;
        }
        if self.position.y < 0.0 || self.position.y > viewport.height() {
            self.velocity.y = -self.velocity.y;
        }

        self.phase = (self.phase + pulse_rate).rem_euclid(TAU);
        self.radius = self.base_radius + self.phase.sin() * self.base_radius / 2.0;
    }

    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) {
        let paint = Paint::RadialGradient {
            inner: Tint::hsla(self.hue, 1.0, 0.8, 0.9),
            outer: Tint::hsla(self.hue, 1.0, 0.5, 0.0),
            extent: self.radius * 3.0,
        };
        let glow = Glow::new(Tint::hsla(self.hue, 1.0, 0.8, 0.8), self.radius * 6.0);
        surface.fill_disc(self.position, self.radius, paint, glow);
    }
}

/// Uniform sample from `[lo, hi)`, or `lo` when the range is empty or
/// unbounded.
fn uniform<R: Rng + ?Sized>(rng: &mut R, lo: f32, hi: f32) -> f32 {
    if hi > lo && (hi - lo).is_finite() {
        rng.gen_range(lo..hi)
    } else {
        lo
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{DisplayList, DrawCommand};
    use nannou::rand::rngs::StdRng;
    use nannou::rand::SeedableRng;

    fn viewport() -> Viewport {
        Viewport::new(640.0, 480.0, 1.0)
    }

    #[test]
    fn spawn_stays_in_ranges() {
        let mut rng = StdRng::seed_from_u64(7);
        let viewport = viewport();
        let params = SpawnParams::default();
        for _ in 0..1000 {
            let p = Point::spawn(&mut rng, &viewport, &params);
            assert!(p.position.x >= 0.0 && p.position.x < 640.0);
            assert!(p.position.y >= 0.0 && p.position.y < 480.0);
            assert!(p.velocity.x.abs() <= 0.3 && p.velocity.y.abs() <= 0.3);
            assert!((2.0..4.0).contains(&p.base_radius));
            assert_eq!(p.radius, p.base_radius);
            assert!((0.0..TAU).contains(&p.phase));
            assert!((180.0..240.0).contains(&p.hue));
        }
    }

    #[test]
    fn spawn_on_empty_viewport_lands_at_origin() {
        let mut rng = StdRng::seed_from_u64(1);
        let p = Point::spawn(&mut rng, &Viewport::new(0.0, 0.0, 1.0), &SpawnParams::default());
        assert_eq!(p.position, Vec2::ZERO);
    }

    #[test]
    fn unbounded_ranges_fall_back_to_lower_bound() {
        let mut rng = StdRng::seed_from_u64(3);
        let params = SpawnParams {
            max_radius: f32::INFINITY,
            ..SpawnParams::default()
        };
        let p = Point::spawn(&mut rng, &viewport(), &params);
        assert_eq!(p.base_radius, 2.0);
    }

    #[test]
    fn radius_stays_within_pulse_bounds() {
        let mut rng = StdRng::seed_from_u64(42);
        let viewport = viewport();
        let params = SpawnParams::default();
        let mut points: Vec<Point> = (0..50)
            .map(|_| Point::spawn(&mut rng, &viewport, &params))
            .collect();
        for _ in 0..2000 {
            for p in &mut points {
                p.advance(&viewport, DEFAULT_PULSE_RATE);
                assert!(p.radius >= p.base_radius / 2.0 - 1e-5);
                assert!(p.radius <= p.base_radius * 1.5 + 1e-5);
                assert!((0.0..TAU).contains(&p.phase));
            }
        }
    }

    #[test]
    fn reflection_flips_once_per_crossing() {
        let viewport = Viewport::new(10.0, 10.0, 1.0);
        let mut p = Point {
            position: Vec2::new(9.5, 5.0),
            velocity: Vec2::new(0.3, 0.0),
            base_radius: 2.0,
            radius: 2.0,
            phase: 0.0,
            hue: 200.0,
        };

        p.advance(&viewport, DEFAULT_PULSE_RATE);
        assert!(p.position.x < 10.0);
        assert_eq!(p.velocity.x, 0.3);

        p.advance(&viewport, DEFAULT_PULSE_RATE);
        assert!(p.position.x > 10.0 && p.position.x <= 10.0 + 0.3);
        assert_eq!(p.velocity.x, -0.3);

        let mut flips = 0;
        for _ in 0..20 {
            let before = p.velocity.x;
            p.advance(&viewport, DEFAULT_PULSE_RATE);
            if p.velocity.x != before {
                flips += 1;
            }
            assert!(p.position.x <= 10.0 + 0.3);
        }
        assert_eq!(flips, 0);
        assert_eq!(p.velocity.y, 0.0);
    }

    #[test]
    fn positions_stay_within_one_step_of_bounds() {
        let mut rng = StdRng::seed_from_u64(99);
        let viewport = Viewport::new(50.0, 30.0, 1.0);
        let params = SpawnParams::default();
        let mut points: Vec<Point> = (0..40)
            .map(|_| Point::spawn(&mut rng, &viewport, &params))
            .collect();
        let eps = params.max_speed + 1e-4;
        for _ in 0..5000 {
            for p in &mut points {
                p.advance(&viewport, DEFAULT_PULSE_RATE);
                assert!(p.position.x >= -eps && p.position.x <= 50.0 + eps);
                assert!(p.position.y >= -eps && p.position.y <= 30.0 + eps);
            }
        }
    }

    #[test]
    fn render_emits_gradient_disc_with_glow() {
        let p = Point {
            position: Vec2::new(12.0, 34.0),
            velocity: Vec2::ZERO,
            base_radius: 2.0,
            radius: 3.0,
            phase: 0.0,
            hue: 210.0,
        };
        let mut list = DisplayList::new();
        p.render(&mut list);

        match &list.commands()[..] {
            [DrawCommand::Disc {
                center,
                radius,
                paint,
                glow,
            }] => {
                assert_eq!(*center, Vec2::new(12.0, 34.0));
                assert_eq!(*radius, 3.0);
                assert_eq!(
                    *paint,
                    Paint::RadialGradient {
                        inner: Tint::hsla(210.0, 1.0, 0.8, 0.9),
                        outer: Tint::hsla(210.0, 1.0, 0.5, 0.0),
                        extent: 9.0,
                    }
                );
                assert_eq!(glow.blur, 18.0);
                assert_eq!(glow.color, Tint::hsla(210.0, 1.0, 0.8, 0.8));
            }
            other => panic!("unexpected commands: {other:?}"),
        }
    }
}
