//! Drawable-surface dimensions.
//!
//! Everything in the simulation works in logical units with the origin at the
//! top-left corner and y growing downwards. nannou draws in window points
//! centred on the window with y growing upwards, and takes care of scaling
//! points to physical pixels; the viewport converts between the two spaces
//! and remembers the device scale factor.

use nannou::prelude::{pt2, Point2, Vec2};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    width: f32,
    height: f32,
    scale_factor: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32, scale_factor: f32) -> Self {
        let mut viewport = Self {
            width: 0.0,
            height: 0.0,
            scale_factor: 1.0,
        };
        viewport.resize(width, height, scale_factor);
        viewport
    }

    /// Apply a resize notification. Returns the physical pixel size of the
    /// backing surface.
    pub fn resize(&mut self, width: f32, height: f32, scale_factor: f32) -> (u32, u32) {
        self.width = sanitize_extent(width);
        self.height = sanitize_extent(height);
        self.scale_factor = if scale_factor.is_finite() && scale_factor > 0.0 {
            scale_factor
        } else {
            1.0
        };
        self.physical_size()
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn scale_factor(&self) -> f32 {
        self.scale_factor
    }

    pub fn physical_size(&self) -> (u32, u32) {
        (
            (self.width * self.scale_factor).round() as u32,
            (self.height * self.scale_factor).round() as u32,
        )
    }

    /// Logical (top-left, y down) to nannou window space (centred, y up).
    pub fn to_window(&self, p: Vec2) -> Point2 {
        pt2(p.x - self.width / 2.0, self.height / 2.0 - p.y)
    }

    /// nannou window space back to logical coordinates.
    pub fn from_window(&self, p: Point2) -> Vec2 {
        Vec2::new(p.x + self.width / 2.0, self.height / 2.0 - p.y)
    }
}

fn sanitize_extent(v: f32) -> f32 {
    if v.is_finite() && v > 0.0 {
        v
    } else {
        0.0
    }
}
