//! The immediate-mode drawing interface the renderers talk to.
//!
//! Renderers never touch nannou directly: they issue commands against a
//! [`Surface`]. The running app records a frame into a [`DisplayList`] and the
//! window's view replays it, tests inspect the recorded commands.

use nannou::prelude::Vec2;

use crate::color::Tint;
use crate::viewport::Viewport;

/// Soft luminous halo around a shape. `blur == 0.0` means no halo.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Glow {
    pub color: Tint,
    pub blur: f32,
}

impl Glow {
    pub const fn new(color: Tint, blur: f32) -> Self {
        Self { color, blur }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    pub color: Tint,
    pub width: f32,
    pub glow: Glow,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Paint {
    Solid(Tint),
    /// Gradient centred on the shape, `inner` at the centre fading to `outer`
    /// at distance `extent`. Only the part inside the shape is painted.
    RadialGradient { inner: Tint, outer: Tint, extent: f32 },
}

impl Paint {
    /// Color of the paint at `distance` from the centre.
    pub fn sample(&self, distance: f32) -> Tint {
        match *self {
            Paint::Solid(color) => color,
            Paint::RadialGradient {
                inner,
                outer,
                extent,
            } => {
                if extent <= 0.0 {
                    outer
                } else {
                    inner.lerp(outer, distance / extent)
                }
            }
        }
    }
}

pub trait Surface {
    /// Wipe the whole viewport.
    fn clear(&mut self, viewport: &Viewport);

    fn stroke_line(&mut self, from: Vec2, to: Vec2, stroke: Stroke);

    fn fill_disc(&mut self, center: Vec2, radius: f32, paint: Paint, glow: Glow);
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Clear {
        width: f32,
        height: f32,
    },
    Line {
        from: Vec2,
        to: Vec2,
        stroke: Stroke,
    },
    Disc {
        center: Vec2,
        radius: f32,
        paint: Paint,
        glow: Glow,
    },
}

/// A recorded frame.
#[derive(Clone, Debug, Default)]
pub struct DisplayList {
    commands: Vec<DrawCommand>,
}

impl DisplayList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            commands: Vec::with_capacity(capacity),
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Empty the list, keeping its allocation for the next frame.
    pub fn reset(&mut self) {
        self.commands.clear();
    }

    pub fn lines(&self) -> impl Iterator<Item = (&Vec2, &Vec2, &Stroke)> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Line { from, to, stroke } => Some((from, to, stroke)),
            _ => None,
        })
    }

    pub fn discs(&self) -> impl Iterator<Item = (&Vec2, &f32, &Paint, &Glow)> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Disc {
                center,
                radius,
                paint,
                glow,
            } => Some((center, radius, paint, glow)),
            _ => None,
        })
    }
}

impl Surface for DisplayList {
    fn clear(&mut self, viewport: &Viewport) {
        self.commands.push(DrawCommand::Clear {
            width: viewport.width(),
            height: viewport.height(),
        });
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, stroke: Stroke) {
        self.commands.push(DrawCommand::Line { from, to, stroke });
    }

    fn fill_disc(&mut self, center: Vec2, radius: f32, paint: Paint, glow: Glow) {
        self.commands.push(DrawCommand::Disc {
            center,
            radius,
            paint,
            glow,
        });
    }
}
