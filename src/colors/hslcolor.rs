//! This file implements HSL: a cylindrical rearrangement of RGB into hue, saturation, and
//! lightness. Hue is the angle around the color wheel, saturation is how far a color is from the gray
//! of the same lightness, and lightness runs from black through fully saturated colors in the middle
//! to white at the top. Like HSV it is a "bi-hexcone": the RGB cube is tilted onto its black-white
//! diagonal and projected onto a hexagon, and the hexagon is then treated as if it were a circle. No
//! trig is involved, which keeps the math cheap and exactly invertible.
//!
//! Unlike many HSL implementations, all three components here are normalized to `[0, 1]`. Hue in
//! particular is a *fraction of a turn*: 0 is red, 1/3 is green, 2/3 is blue, and 1 wraps back
//! around to red.
//!
//! Colors come in and go out as quantized channel samples. The conversion functions take the quantum
//! maximum explicitly, so they work with any depth; `HSLColor` wraps them for typed `RGBColor`s and
//! for runtime `QuantumDepth`s.

use color::RGBColor;
use quantum::{clamp_to_quantum, Quantum, QuantumDepth};

/// Converts three channel samples in `[0, quantum_max]` to `(hue, saturation, lightness)`, each in
/// `[0, 1]`. Gray (including black and white) has a hue and saturation of 0.
///
/// Which channel is largest is decided by exact comparison, and ties go to red, then green: this
/// never matters for the result because tied channels give the same hue from either branch.
pub fn rgb_to_hsl(red: f64, green: f64, blue: f64, quantum_max: f64) -> (f64, f64, f64) {
    let scale = 1.0 / quantum_max;
    let r = red * scale;
    let g = green * scale;
    let b = blue * scale;

    let max = r.max(g.max(b));
    let min = r.min(g.min(b));
    let chroma = max - min;
    let lightness = (max + min) / 2.0;

    // gray: hue is undefined and saturation would divide by zero, so both are 0
    if chroma <= 0.0 {
        return (0.0, 0.0, lightness);
    }

    // position along the hexagon, in sixths of a turn
    let sector_pos = if r == max {
        let h = (g - b) / chroma;
        if g < b {
            h + 6.0
        } else {
            h
        }
    } else if g == max {
        2.0 + (b - r) / chroma
    } else {
        4.0 + (r - g) / chroma
    };
    let hue = sector_pos * (60.0 / 360.0);

    // saturation is chroma relative to the largest chroma possible at this lightness
    let saturation = if lightness <= 0.5 {
        chroma / (2.0 * lightness)
    } else {
        chroma / (2.0 - 2.0 * lightness)
    };

    (hue, saturation, lightness)
}

/// Converts `(hue, saturation, lightness)` back to three channel values in `[0, quantum_max]`. Hue
/// can be any number: it wraps around the color wheel. Saturation and lightness aren't checked, but
/// whatever comes out is saturated to the quantum range. No rounding is applied; that depends on the
/// sample type and is left to `Quantum::from_scaled` or `QuantumDepth::saturate`.
pub fn hsl_to_rgb(hue: f64, saturation: f64, lightness: f64, quantum_max: f64) -> (f64, f64, f64) {
    let mut h = hue * 360.0;
    let chroma = if lightness <= 0.5 {
        2.0 * lightness * saturation
    } else {
        (2.0 - 2.0 * lightness) * saturation
    };
    let min = lightness - 0.5 * chroma;

    // wrap to [0, 360) and then work in sixths of a turn
    if !(0.0..360.0).contains(&h) {
        trace!(hue = hue, "wrapping hue onto the color wheel");
    }
    h -= 360.0 * (h / 360.0).floor();
    h /= 60.0;

    // the middle channel: rises through even sectors and falls through odd ones
    let x = chroma * (1.0 - (h - 2.0 * (h / 2.0).floor() - 1.0).abs());

    // anything that isn't 1 through 5 (including NaN and a wrapped hue of exactly 6) is red's sector
    let (r, g, b) = match h.floor() as i64 {
        1 => (min + x, min + chroma, min),
        2 => (min, min + chroma, min + x),
        3 => (min, min + x, min + chroma),
        4 => (min + x, min, min + chroma),
        5 => (min + chroma, min, min + x),
        _ => (min + chroma, min + x, min),
    };

    (
        clamp_to_quantum(r * quantum_max, quantum_max),
        clamp_to_quantum(g * quantum_max, quantum_max),
        clamp_to_quantum(b * quantum_max, quantum_max),
    )
}

/// A color in HSL, with every component normalized to `[0, 1]`. The fields can be set freely: no
/// clamping happens until the color is turned back into RGB, and every conversion reads the current
/// fields, so there is no stale RGB copy to worry about.
/// # Example
/// Pure red is at hue 0, fully saturated, halfway up the lightness axis. A third of a turn around
/// the wheel gets you to green.
///
/// ```
/// # use quantum_hsl::prelude::*;
/// let red = HSLColor::from_rgb(&RGBColor::<u8>::new(255, 0, 0));
/// assert_eq!(red, HSLColor::new(0., 1., 0.5));
/// let mut green = red;
/// green.hue = 1. / 3.;
/// assert_eq!(green.to_rgb::<u8>(), RGBColor::new(0, 255, 0));
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct HSLColor {
    /// The hue, as a fraction of a full turn around the color wheel: 0 is red, 1/3 green, 2/3 blue.
    /// Values outside `[0, 1)` are allowed and wrap around when converting.
    pub hue: f64,
    /// The saturation, from 0 (gray) to 1 (the most colorful color at this lightness).
    pub saturation: f64,
    /// The lightness, from 0 (black) to 1 (white). Defined as the average of the largest and smallest
    /// RGB channels.
    pub lightness: f64,
}

impl HSLColor {
    /// Creates a color from the three components exactly as given. Nothing is validated.
    pub fn new(hue: f64, saturation: f64, lightness: f64) -> HSLColor {
        HSLColor {
            hue,
            saturation,
            lightness,
        }
    }

    /// Converts an RGB color sampled at any depth.
    pub fn from_rgb<Q: Quantum>(rgb: &RGBColor<Q>) -> HSLColor {
        let (r, g, b) = rgb.channels();
        HSLColor::from_quantum(r, g, b, Q::DEPTH)
    }

    /// Like `from_rgb`, but for a color that might not be there: no color in means no color out.
    /// # Example
    /// ```
    /// # use quantum_hsl::prelude::*;
    /// let missing: Option<&RGBColor<u16>> = None;
    /// assert_eq!(HSLColor::from_rgb_opt(missing), None);
    /// let white = RGBColor::<u16>::new(65535, 65535, 65535);
    /// assert_eq!(HSLColor::from_rgb_opt(Some(&white)), Some(HSLColor::new(0., 0., 1.)));
    /// ```
    pub fn from_rgb_opt<Q: Quantum>(rgb: Option<&RGBColor<Q>>) -> Option<HSLColor> {
        match rgb {
            Some(rgb) => Some(HSLColor::from_rgb(rgb)),
            None => {
                trace!("no source color, skipping HSL conversion");
                None
            }
        }
    }

    /// Converts three untyped samples taken at the given depth.
    pub fn from_quantum(red: f64, green: f64, blue: f64, depth: QuantumDepth) -> HSLColor {
        let (hue, saturation, lightness) = rgb_to_hsl(red, green, blue, depth.max());
        HSLColor {
            hue,
            saturation,
            lightness,
        }
    }

    /// Regenerates the RGB channels as untyped samples at the given depth, saturated and, for
    /// integer depths, rounded.
    pub fn to_quantum(&self, depth: QuantumDepth) -> (f64, f64, f64) {
        let (r, g, b) = hsl_to_rgb(self.hue, self.saturation, self.lightness, depth.max());
        (depth.saturate(r), depth.saturate(g), depth.saturate(b))
    }

    /// Regenerates a typed RGB color from the current components.
    pub fn to_rgb<Q: Quantum>(&self) -> RGBColor<Q> {
        let (r, g, b) = hsl_to_rgb(self.hue, self.saturation, self.lightness, Q::DEPTH.max());
        RGBColor {
            r: Q::from_scaled(r),
            g: Q::from_scaled(g),
            b: Q::from_scaled(b),
        }
    }

    /// Rotates the hue by the given number of degrees, positive or negative, keeping the result in
    /// `[0, 1)`. Saturation and lightness are left alone.
    /// # Example
    /// ```
    /// # use quantum_hsl::prelude::*;
    /// let mut color = HSLColor::new(0.5, 0.4, 0.3);
    /// color.hue_shift(-270.);
    /// assert!((color.hue - 0.75).abs() <= 1e-12);
    /// ```
    pub fn hue_shift(&mut self, degrees: f64) {
        let hue = self.hue + degrees / 360.0;
        let wrapped = hue - hue.floor();
        // a tiny negative hue can round up to exactly one full turn
        self.hue = if wrapped >= 1.0 { 0.0 } else { wrapped };
    }

    /// Returns true if each component is within `1e-10` of the other color's. Hues a whole number of
    /// turns apart count as equal.
    pub fn approx_equal(&self, other: &HSLColor) -> bool {
        let eps = 1e-10;
        let hue_diff = self.hue - other.hue;
        (hue_diff - hue_diff.round()).abs() <= eps
            && (self.saturation - other.saturation).abs() <= eps
            && (self.lightness - other.lightness).abs() <= eps
    }
}

impl<Q: Quantum> From<RGBColor<Q>> for HSLColor {
    fn from(rgb: RGBColor<Q>) -> HSLColor {
        HSLColor::from_rgb(&rgb)
    }
}

impl<'a, Q: Quantum> From<&'a RGBColor<Q>> for HSLColor {
    fn from(rgb: &'a RGBColor<Q>) -> HSLColor {
        HSLColor::from_rgb(rgb)
    }
}

impl<Q: Quantum> From<HSLColor> for RGBColor<Q> {
    fn from(hsl: HSLColor) -> RGBColor<Q> {
        hsl.to_rgb()
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;
    use float_cmp::ApproxEqUlps;

    #[test]
    fn test_gray_has_no_hue_or_saturation() {
        for &k in &[0u8, 1, 77, 128, 254, 255] {
            let hsl = HSLColor::from_rgb(&RGBColor::new(k, k, k));
            assert_eq!(hsl.hue, 0.);
            assert_eq!(hsl.saturation, 0.);
            assert!((hsl.lightness - k as f64 / 255.).abs() <= 1e-12);
        }
        let (h, s, l) = rgb_to_hsl(0.25, 0.25, 0.25, 1.0);
        assert_eq!((h, s, l), (0., 0., 0.25));
        let (h, s, l) = rgb_to_hsl(40000., 40000., 40000., 65535.);
        assert_eq!((h, s), (0., 0.));
        assert!(l.approx_eq_ulps(&(40000. / 65535.), 2));
    }

    #[test]
    fn test_primaries_and_secondaries() {
        let cases: [((u8, u8, u8), f64); 6] = [
            ((255, 0, 0), 0.),
            ((255, 255, 0), 1. / 6.),
            ((0, 255, 0), 2. / 6.),
            ((0, 255, 255), 3. / 6.),
            ((0, 0, 255), 4. / 6.),
            ((255, 0, 255), 5. / 6.),
        ];
        for &((r, g, b), hue) in cases.iter() {
            let hsl = HSLColor::from_rgb(&RGBColor::new(r, g, b));
            println!("{:?} -> {:?}", (r, g, b), hsl);
            assert!((hsl.hue - hue).abs() <= 1e-12);
            assert!(hsl.saturation.approx_eq_ulps(&1.0, 2));
            assert!(hsl.lightness.approx_eq_ulps(&0.5, 2));
        }
    }

    #[test]
    fn test_red_sector_wraps_below_zero() {
        // red is largest but blue beats green: hue sits just under a full turn
        let (h, s, l) = rgb_to_hsl(1.0, 0.0, 0.5, 1.0);
        assert!((h - 11. / 12.).abs() <= 1e-12);
        assert_eq!(s, 1.0);
        assert_eq!(l, 0.5);
    }

    #[test]
    fn test_minimum_is_smallest_channel() {
        // green is the smallest channel here, not the larger of green and blue
        let (_, s, l) = rgb_to_hsl(200., 20., 100., 255.);
        assert!((l - 110. / 255.).abs() <= 1e-12);
        assert!((s - 180. / 220.).abs() <= 1e-12);
    }

    #[test]
    fn test_saturation_branches_on_lightness() {
        // dark: l = 0.25, chroma = 0.5
        let (_, s, l) = rgb_to_hsl(0.5, 0.0, 0.0, 1.0);
        assert_eq!(l, 0.25);
        assert_eq!(s, 1.0);
        // light: l = 0.75, chroma = 0.5
        let (_, s, l) = rgb_to_hsl(1.0, 0.5, 0.5, 1.0);
        assert_eq!(l, 0.75);
        assert_eq!(s, 1.0);
        let (_, s, _) = rgb_to_hsl(0.9, 0.7, 0.7, 1.0);
        assert!((s - 0.5).abs() <= 1e-12);
    }

    #[test]
    fn test_literal_8_bit_scenario() {
        let red = HSLColor::from_rgb(&RGBColor::<u8>::new(255, 0, 0));
        assert_eq!(red.hue, 0.);
        assert_eq!(red.saturation, 1.);
        assert_eq!(red.lightness, 0.5);
        let green = HSLColor::new(1. / 3., 1., 0.5);
        assert_eq!(green.to_rgb::<u8>(), RGBColor::new(0, 255, 0));
        assert_eq!(green.to_quantum(QuantumDepth::Q8), (0., 255., 0.));
    }

    #[test]
    fn test_round_trip_8_bit() {
        for r in (0..=255u32).step_by(15) {
            for g in (0..=255u32).step_by(17) {
                for b in (0..=255u32).step_by(51) {
                    let rgb = RGBColor::new(r as u8, g as u8, b as u8);
                    let back: RGBColor<u8> = HSLColor::from_rgb(&rgb).to_rgb();
                    assert_eq!(rgb, back);
                }
            }
        }
    }

    #[test]
    fn test_round_trip_16_bit_and_hdri() {
        let samples = [0u16, 1, 257, 4369, 30000, 32768, 65000, 65534, 65535];
        for &r in samples.iter() {
            for &g in samples.iter() {
                for &b in samples.iter() {
                    let rgb = RGBColor::new(r, g, b);
                    let back: RGBColor<u16> = HSLColor::from_rgb(&rgb).to_rgb();
                    assert_eq!(rgb, back);
                }
            }
        }
        let floats = [0.0, 0.1, 0.333, 0.5, 0.87, 1.0];
        for &r in floats.iter() {
            for &g in floats.iter() {
                for &b in floats.iter() {
                    let hsl = HSLColor::from_quantum(r, g, b, QuantumDepth::Hdri);
                    let (r2, g2, b2) = hsl.to_quantum(QuantumDepth::Hdri);
                    assert!((r - r2).abs() <= 1e-9);
                    assert!((g - g2).abs() <= 1e-9);
                    assert!((b - b2).abs() <= 1e-9);
                }
            }
        }
    }

    #[test]
    fn test_color_wheel_landmarks() {
        let wheel = [
            (0., (1., 0., 0.)),
            (1. / 6., (1., 1., 0.)),
            (2. / 6., (0., 1., 0.)),
            (3. / 6., (0., 1., 1.)),
            (4. / 6., (0., 0., 1.)),
            (5. / 6., (1., 0., 1.)),
            (1., (1., 0., 0.)),
        ];
        for &(hue, (r, g, b)) in wheel.iter() {
            let (r2, g2, b2) = hsl_to_rgb(hue, 1., 0.5, 1.);
            assert!((r - r2).abs() <= 1e-9);
            assert!((g - g2).abs() <= 1e-9);
            assert!((b - b2).abs() <= 1e-9);
        }
    }

    #[test]
    fn test_sector_boundaries_are_continuous() {
        let steps = 3600;
        let step = 1. / steps as f64;
        let mut prev = hsl_to_rgb(0., 1., 0.5, 1.);
        for i in 1..=steps {
            let cur = hsl_to_rgb(i as f64 * step, 1., 0.5, 1.);
            // each channel moves at most six times as fast as hue
            let limit = 6. * step + 1e-9;
            assert!((cur.0 - prev.0).abs() <= limit);
            assert!((cur.1 - prev.1).abs() <= limit);
            assert!((cur.2 - prev.2).abs() <= limit);
            prev = cur;
        }
    }

    #[test]
    fn test_output_stays_in_quantum_range() {
        let levels = [0., 0.05, 0.3, 0.5, 0.51, 0.8, 1.];
        let hues = [-2.5, -0.1, 0., 0.2, 0.49, 0.99, 1., 3.7];
        for &hue in hues.iter() {
            for &s in levels.iter() {
                for &l in levels.iter() {
                    let (r, g, b) = hsl_to_rgb(hue, s, l, 65535.);
                    for &c in &[r, g, b] {
                        assert!(c >= 0. && c <= 65535.);
                    }
                }
            }
        }
        // out-of-range components are saturated rather than wrapped
        assert_eq!(HSLColor::new(0., 3., 0.9).to_rgb::<u8>().r, 255);
        assert_eq!(HSLColor::new(0.5, 1., -0.4).to_rgb::<u8>(), RGBColor::new(0, 0, 0));
    }

    #[test]
    fn test_hue_wraps_around() {
        let a = HSLColor::new(0.25, 0.6, 0.4).to_rgb::<u16>();
        let b = HSLColor::new(1.25, 0.6, 0.4).to_rgb::<u16>();
        let c = HSLColor::new(-0.75, 0.6, 0.4).to_rgb::<u16>();
        assert_eq!(a, b);
        assert_eq!(a, c);
    }

    #[test]
    fn test_nan_does_not_panic() {
        let (r, g, b) = hsl_to_rgb(f64::NAN, 1., 0.5, 255.);
        assert!(r >= 0. && g >= 0. && b >= 0.);
        // not detected, just carried through
        let (h, _, _) = rgb_to_hsl(f64::NAN, f64::NAN, f64::NAN, 255.);
        assert!(h.is_nan());
    }

    #[test]
    fn test_absent_source() {
        assert_eq!(HSLColor::from_rgb_opt::<u8>(None), None);
        let rgb = RGBColor::<u8>::new(10, 20, 30);
        assert_eq!(HSLColor::from_rgb_opt(Some(&rgb)), Some(HSLColor::from_rgb(&rgb)));
    }

    #[test]
    fn test_conversion_traits() {
        let rgb = RGBColor::<u8>::new(12, 200, 99);
        let hsl: HSLColor = rgb.into();
        assert_eq!(hsl, HSLColor::from(&rgb));
        let back: RGBColor<u8> = hsl.into();
        assert_eq!(back, rgb);
    }

    #[test]
    fn test_fields_are_read_on_every_conversion() {
        let mut hsl = HSLColor::from_rgb(&RGBColor::<u8>::new(255, 0, 0));
        assert_eq!(hsl.to_rgb::<u8>(), RGBColor::new(255, 0, 0));
        hsl.lightness = 1.;
        assert_eq!(hsl.to_rgb::<u8>(), RGBColor::new(255, 255, 255));
        hsl.lightness = 0.5;
        hsl.saturation = 0.;
        assert_eq!(hsl.to_rgb::<u8>(), RGBColor::new(128, 128, 128));
    }

    #[test]
    fn test_hue_shift() {
        let mut hsl = HSLColor::new(0.9, 0.5, 0.5);
        hsl.hue_shift(72.);
        assert!((hsl.hue - 0.1).abs() <= 1e-12);
        assert_eq!((hsl.saturation, hsl.lightness), (0.5, 0.5));
        hsl.hue_shift(-36.);
        assert!(hsl.hue.abs() <= 1e-12 || (hsl.hue - 1.).abs() <= 1e-12);
        assert!(hsl.hue < 1.);
        let mut red = HSLColor::new(0., 1., 0.5);
        red.hue_shift(120.);
        assert_eq!(red.to_rgb::<u8>(), RGBColor::new(0, 255, 0));
        red.hue_shift(720.);
        assert_eq!(red.to_rgb::<u8>(), RGBColor::new(0, 255, 0));
    }

    #[test]
    fn test_approx_equal() {
        let a = HSLColor::new(0.2, 0.3, 0.4);
        assert!(a.approx_equal(&HSLColor::new(1.2, 0.3, 0.4 + 1e-12)));
        assert!(a.approx_equal(&HSLColor::new(-0.8, 0.3, 0.4)));
        assert!(!a.approx_equal(&HSLColor::new(0.2, 0.31, 0.4)));
        assert!(!a.approx_equal(&HSLColor::new(0.7, 0.3, 0.4)));
    }
}
