//! Replays a recorded frame onto a nannou `Draw`.
//!
//! nannou has neither shadow blur nor radial gradients, so both are built
//! from stacked translucent shapes: a glow becomes a few widening, fading
//! halo passes underneath the shape and a gradient disc becomes concentric
//! discs sampled along the gradient.

use nannou::prelude::*;

use crate::color::Tint;
use crate::surface::{DisplayList, DrawCommand, Glow, Paint, Stroke};
use crate::viewport::Viewport;

const HALO_PASSES: usize = 3;
/// Opacity of the innermost halo pass relative to the glow color.
const HALO_OPACITY: f32 = 0.35;
const GRADIENT_RINGS: usize = 6;

pub fn replay(draw: &Draw, list: &DisplayList, viewport: &Viewport, background: [f32; 3]) {
    for command in list.commands() {
        match command {
            DrawCommand::Clear { .. } => {
                let [r, g, b] = background;
                draw.background().rgb(r, g, b);
            }
            DrawCommand::Line { from, to, stroke } => {
                line(draw, viewport.to_window(*from), viewport.to_window(*to), stroke);
            }
            DrawCommand::Disc {
                center,
                radius,
                paint,
                glow,
            } => disc(draw, viewport.to_window(*center), *radius, paint, glow),
        }
    }
}

/// `(extra size, opacity)` for each halo pass, widest first.
pub fn halo_passes(glow: &Glow) -> Vec<(f32, f32)> {
    let visible = glow.blur > 0.0 && glow.color.alpha > 0.0;
    if !visible {
        return Vec::new();
    }
    (1..=HALO_PASSES)
        .rev()
        .map(|k| {
            let spread = glow.blur * k as f32 / HALO_PASSES as f32;
            let opacity = glow.color.alpha * HALO_OPACITY / k as f32;
            (spread, opacity)
        })
        .collect()
}

/// `(radius, color)` rings approximating `paint` over a disc, outermost first.
pub fn gradient_rings(radius: f32, paint: &Paint) -> Vec<(f32, Tint)> {
    if radius.is_nan() || radius <= 0.0 {
        return Vec::new();
    }
    match paint {
        Paint::Solid(color) => vec![(radius, *color)],
        Paint::RadialGradient { .. } => (1..=GRADIENT_RINGS)
            .rev()
            .map(|k| {
                let r = radius * k as f32 / GRADIENT_RINGS as f32;
                (r, paint.sample(r))
            })
            .collect(),
    }
}

fn line(draw: &Draw, from: Point2, to: Point2, stroke: &Stroke) {
    let glow = stroke.glow.color;
    for (spread, opacity) in halo_passes(&stroke.glow) {
        draw.line()
            .start(from)
            .end(to)
            .weight(stroke.width + spread)
            .caps_round()
            .hsla(glow.hue_turns(), glow.saturation, glow.lightness, opacity);
    }
    let c = stroke.color;
    draw.line()
        .start(from)
        .end(to)
        .weight(stroke.width)
        .caps_round()
        .hsla(c.hue_turns(), c.saturation, c.lightness, c.alpha);
}

fn disc(draw: &Draw, center: Point2, radius: f32, paint: &Paint, glow: &Glow) {
    // zero-radius markers sit exactly on the glow boundary
    if radius.is_nan() || radius <= 0.0 {
        return;
    }
    let g = glow.color;
    for (spread, opacity) in halo_passes(glow) {
        draw.ellipse()
            .xy(center)
            .radius(radius + spread)
            .hsla(g.hue_turns(), g.saturation, g.lightness, opacity);
    }
    for (r, c) in gradient_rings(radius, paint) {
        draw.ellipse()
            .xy(center)
            .radius(r)
            .hsla(c.hue_turns(), c.saturation, c.lightness, c.alpha);
    }
}
