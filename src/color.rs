/// HSLA color as the drawing commands carry it.
///
/// `hue` is in degrees, the other three channels in `0.0..=1.0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tint {
    pub hue: f32,
    pub saturation: f32,
    pub lightness: f32,
    pub alpha: f32,
}

impl Tint {
    pub const fn hsla(hue: f32, saturation: f32, lightness: f32, alpha: f32) -> Self {
        Self {
            hue,
            saturation,
            lightness,
            alpha,
        }
    }

    /// Hue as a fraction of a full turn, which is what nannou's `hsla` expects.
    pub fn hue_turns(&self) -> f32 {
        self.hue.rem_euclid(360.0) / 360.0
    }

    /// Linear interpolation of every channel.
    pub fn lerp(self, other: Tint, t: f32) -> Tint {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: f32, b: f32| a + (b - a) * t;
        Tint {
            hue: mix(self.hue, other.hue),
            saturation: mix(self.saturation, other.saturation),
            lightness: mix(self.lightness, other.lightness),
            alpha: mix(self.alpha, other.alpha),
        }
    }
}
