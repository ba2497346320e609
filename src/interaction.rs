//! Pointer effects: lines from nearby points to the pointer and a glow
//! marker on the pointer itself.

use crate::color::Tint;
use crate::point::Point;
use crate::pointer::Pointer;
use crate::surface::{Glow, Paint, Stroke, Surface};

const POINTER_HUE: f32 = 190.0;
const LINE_LIGHTNESS: f32 = 0.85;
const MARKER_LIGHTNESS: f32 = 0.9;
const LINE_GLOW_PER_ALPHA: f32 = 25.0;
const MARKER_GLOW_PER_ALPHA: f32 = 20.0;
const MARKER_MAX_RADIUS: f32 = 6.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerParams {
    /// Points closer than this get a line to the pointer.
    pub line_distance: f32,
    /// Points closer than this light up the marker.
    pub glow_distance: f32,
}

impl Default for PointerParams {
    fn default() -> Self {
        Self {
            line_distance: 150.0,
            glow_distance: 80.0,
        }
    }
}

/// Draw the pointer effects for every point. Nothing is drawn while the
/// pointer is absent. Each point within the glow distance draws its own
/// marker, so markers stack when several points are close.
///
/// Returns the number of commands issued.
pub fn render_pointer_effects<S: Surface + ?Sized>(
    points: &[Point],
    pointer: &Pointer,
    params: &PointerParams,
    surface: &mut S,
) -> usize {
    let Some(target) = pointer.position() else {
        return 0;
    };

    let mut issued = 0;
    for point in points {
        let distance = point.position.distance(target);

        if distance < params.line_distance {
            let alpha = 1.0 - distance / params.line_distance;
            let color = Tint::hsla(POINTER_HUE, 1.0, LINE_LIGHTNESS, alpha);
            surface.stroke_line(
                point.position,
                target,
                Stroke {
                    color,
                    width: 1.0 + alpha * 2.0,
                    glow: Glow::new(color, LINE_GLOW_PER_ALPHA * alpha),
                },
            );
            issued += 1;
        }

        if distance < params.glow_distance {
            let alpha = 1.0 - distance / params.glow_distance;
            let color = Tint::hsla(POINTER_HUE, 1.0, MARKER_LIGHTNESS, alpha);
            surface.fill_disc(
                target,
                MARKER_MAX_RADIUS * alpha,
                Paint::Solid(color),
                Glow::new(color, MARKER_GLOW_PER_ALPHA * alpha),
            );
            issued += 1;
        }
    }
    issued
}
