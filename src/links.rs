//! Glowing lines between points that are close to each other.

use nannou::prelude::Vec2;
use serde::{Deserialize, Serialize};

use crate::color::Tint;
use crate::point::Point;
use crate::spatial::SpatialGrid;
use crate::surface::{Glow, Stroke, Surface};
use crate::viewport::Viewport;

pub const DEFAULT_LINK_DISTANCE: f32 = 150.0;

const LINK_HUE: f32 = 190.0;
const LINK_LIGHTNESS: f32 = 0.75;
const MAX_OPACITY: f32 = 0.7;
const GLOW_PER_OPACITY: f32 = 15.0;

/// How candidate pairs are found. Both produce the same lines in the same
/// order; the grid only pays off for large point counts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LinkStrategy {
    #[default]
    AllPairs,
    Grid,
}

/// Stroke for two points `distance` apart, `None` at or beyond `max_distance`.
pub fn link_stroke(distance: f32, max_distance: f32) -> Option<Stroke> {
    // NaN distances fall through here as well
    if distance.partial_cmp(&max_distance) != Some(std::cmp::Ordering::Less) {
        return None;
    }
    let closeness = 1.0 - distance / max_distance;
    let opacity = closeness * MAX_OPACITY;
    let color = Tint::hsla(LINK_HUE, 1.0, LINK_LIGHTNESS, opacity);
    Some(Stroke {
        color,
        width: 1.0 + closeness * 2.0,
        glow: Glow::new(color, GLOW_PER_OPACITY * opacity),
    })
}

/// Scan every unordered pair `i < j`. Returns the number of lines drawn.
pub fn render_links<S: Surface + ?Sized>(
    points: &[Point],
    max_distance: f32,
    surface: &mut S,
) -> usize {
    let mut drawn = 0;
    for (i, a) in points.iter().enumerate() {
        for b in &points[i + 1..] {
            drawn += draw_link(a.position, b.position, max_distance, surface);
        }
    }
    drawn
}

/// Link renderer that keeps the grid storage alive between frames.
#[derive(Debug, Default)]
pub struct LinkRenderer {
    strategy: LinkStrategy,
    grid: SpatialGrid,
    positions: Vec<Vec2>,
}

impl LinkRenderer {
    pub fn new(strategy: LinkStrategy) -> Self {
        Self {
            strategy,
            ..Self::default()
        }
    }

    pub fn render<S: Surface + ?Sized>(
        &mut self,
        points: &[Point],
        max_distance: f32,
        viewport: &Viewport,
        surface: &mut S,
    ) -> usize {
        match self.strategy {
            LinkStrategy::AllPairs => render_links(points, max_distance, surface),
            LinkStrategy::Grid => {
                self.positions.clear();
                self.positions.extend(points.iter().map(|p| p.position));
                self.grid
                    .rebuild(self.positions.iter().copied(), viewport, max_distance);
                self.grid
                    .candidate_pairs(&self.positions)
                    .into_iter()
                    .map(|(i, j)| {
                        draw_link(self.positions[i], self.positions[j], max_distance, surface)
                    })
                    .sum()
            }
        }
    }
}

fn draw_link<S: Surface + ?Sized>(a: Vec2, b: Vec2, max_distance: f32, surface: &mut S) -> usize {
    match link_stroke(a.distance(b), max_distance) {
        Some(stroke) => {
            surface.stroke_line(a, b, stroke);
            1
        }
        None => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point::SpawnParams;
    use crate::surface::{DisplayList, DrawCommand};
    use nannou::rand::rngs::StdRng;
    use nannou::rand::SeedableRng;

    fn still(x: f32, y: f32) -> Point {
        Point {
            position: Vec2::new(x, y),
            velocity: Vec2::ZERO,
            base_radius: 3.0,
            radius: 3.0,
            phase: 0.0,
            hue: 200.0,
        }
    }

    #[test]
    fn no_line_at_or_beyond_threshold() {
        let mut list = DisplayList::new();
        let points = [still(0.0, 0.0), still(150.0, 0.0), still(0.0, 400.0)];
        assert_eq!(render_links(&points, 150.0, &mut list), 0);
        assert!(list.is_empty());
    }

    #[test]
    fn coincident_points_get_full_strength() {
        let stroke = link_stroke(0.0, 150.0).unwrap();
        assert!((stroke.color.alpha - 0.7).abs() < 1e-6);
        assert!((stroke.width - 3.0).abs() < 1e-6);
        assert!((stroke.glow.blur - 10.5).abs() < 1e-5);
        assert_eq!(stroke.color.hue, 190.0);
        assert_eq!(stroke.color.saturation, 1.0);
        assert_eq!(stroke.color.lightness, 0.75);
        assert_eq!(stroke.glow.color, stroke.color);
    }

    #[test]
    fn hundred_units_apart() {
        let mut list = DisplayList::new();
        let points = [still(0.0, 0.0), still(100.0, 0.0)];
        assert_eq!(render_links(&points, 150.0, &mut list), 1);
        match &list.commands()[..] {
            [DrawCommand::Line { from, to, stroke }] => {
                assert_eq!(*from, Vec2::new(0.0, 0.0));
                assert_eq!(*to, Vec2::new(100.0, 0.0));
                assert!((stroke.color.alpha - 0.2333).abs() < 1e-3);
                assert!((stroke.width - 1.6667).abs() < 1e-3);
            }
            other => panic!("unexpected commands: {other:?}"),
        }
    }

    #[test]
    fn nan_distance_draws_nothing() {
        assert!(link_stroke(f32::NAN, 150.0).is_none());
    }

    #[test]
    fn grid_matches_all_pairs() {
        let viewport = Viewport::new(900.0, 700.0, 1.0);
        let mut rng = StdRng::seed_from_u64(2024);
        let points: Vec<Point> = (0..300)
            .map(|_| Point::spawn(&mut rng, &viewport, &SpawnParams::default()))
            .collect();

        let mut brute = DisplayList::new();
        let mut gridded = DisplayList::new();
        let n_brute =
            LinkRenderer::new(LinkStrategy::AllPairs).render(&points, 150.0, &viewport, &mut brute);
        let n_grid =
            LinkRenderer::new(LinkStrategy::Grid).render(&points, 150.0, &viewport, &mut gridded);

        assert!(n_brute > 0);
        assert_eq!(n_brute, n_grid);
        assert_eq!(brute.commands(), gridded.commands());
    }
}
