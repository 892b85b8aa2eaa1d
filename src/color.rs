//! This module defines the RGB color that every other color in this crate converts to and from. It
//! is deliberately thin: an imaging library already owns pixel storage, so all that's needed here is
//! a place to put three channel samples together with the knowledge of what depth they were sampled
//! at. The depth is carried in the type parameter, so an `RGBColor<u8>` can never be mistaken for a
//! 16-bit color.

use quantum::Quantum;

/// A color with red, green, and blue channels stored as samples of type `Q`. The channels are in
/// `Q`'s native range: 0 to 255 for `u8`, 0 to 65535 for `u16`, and 0 to 1 for the float types.
/// # Example
/// ```
/// # use quantum_hsl::prelude::*;
/// let orange: RGBColor<u8> = RGBColor::from_normalized(1.0, 0.5, 0.0);
/// assert_eq!(orange, RGBColor::new(255, 128, 0));
/// let (r, g, b) = orange.to_normalized();
/// assert_eq!((r, b), (1.0, 0.0));
/// assert!((g - 128. / 255.).abs() <= 1e-12);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct RGBColor<Q> {
    /// The red channel.
    pub r: Q,
    /// The green channel.
    pub g: Q,
    /// The blue channel.
    pub b: Q,
}

impl<Q: Quantum> RGBColor<Q> {
    /// Creates a new color from three samples, taken as-is.
    pub fn new(r: Q, g: Q, b: Q) -> RGBColor<Q> {
        RGBColor { r, g, b }
    }

    /// The largest sample value this color's channels can hold.
    pub fn quantum_max() -> f64 {
        Q::DEPTH.max()
    }

    /// The three channels as `f64`s, still in sample units.
    pub fn channels(&self) -> (f64, f64, f64) {
        (self.r.as_f64(), self.g.as_f64(), self.b.as_f64())
    }

    /// The three channels divided by the quantum maximum, so that full intensity is 1.
    pub fn to_normalized(&self) -> (f64, f64, f64) {
        let (r, g, b) = self.channels();
        let depth = Q::DEPTH;
        (
            depth.scale_from_quantum(r),
            depth.scale_from_quantum(g),
            depth.scale_from_quantum(b),
        )
    }

    /// Builds a color from normalized channels. Each channel is rescaled to `Q`'s range, saturating
    /// at 0 and the maximum, and rounded if `Q` is an integer type.
    pub fn from_normalized(r: f64, g: f64, b: f64) -> RGBColor<Q> {
        RGBColor {
            r: Q::from_normalized(r),
            g: Q::from_normalized(g),
            b: Q::from_normalized(b),
        }
    }
}
