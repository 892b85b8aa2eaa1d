//! This module describes the *quantum*: the per-channel sample unit of a raster image. Imaging
//! libraries are usually built for one channel depth, and every pixel value they hand out lives in
//! the range from 0 to that depth's maximum. Three depths are supported: 8-bit and 16-bit integer
//! samples, and HDRI, where samples are floats and the maximum is simply 1. Colors coming in from the
//! library are divided by the maximum to get normalized values, and colors going back out are
//! multiplied by it and then *saturated*: anything below 0 becomes 0, anything above the maximum
//! becomes the maximum, and integer depths round to the nearest sample.

use std::error::Error;
use std::fmt;
use std::str::FromStr;

use num::{NumCast, ToPrimitive, Zero};

/// The channel depth a host imaging library was configured with. This is meant to be read from a
/// configuration file or a command-line flag, so it (de)serializes as the lowercase strings `"q8"`,
/// `"q16"`, and `"hdri"`, and also parses from text with `FromStr`.
/// # Example
/// ```
/// # use quantum_hsl::quantum::QuantumDepth;
/// let depth: QuantumDepth = "Q8".parse().unwrap();
/// assert_eq!(depth.max(), 255.);
/// assert_eq!(depth.scale_to_quantum(0.5), 128.);
/// assert_eq!(depth.scale_to_quantum(1.7), 255.);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuantumDepth {
    /// 8 bits per channel, with samples from 0 to 255.
    Q8,
    /// 16 bits per channel, with samples from 0 to 65535.
    Q16,
    /// Floating-point samples, normalized so that 1 is full intensity.
    Hdri,
}

impl Default for QuantumDepth {
    /// Q16 is the depth most imaging libraries ship with by default.
    fn default() -> QuantumDepth {
        QuantumDepth::Q16
    }
}

impl QuantumDepth {
    /// The largest sample value at this depth.
    pub fn max(self) -> f64 {
        match self {
            QuantumDepth::Q8 => 255.0,
            QuantumDepth::Q16 => 65535.0,
            QuantumDepth::Hdri => 1.0,
        }
    }

    /// Whether samples at this depth are whole numbers.
    pub fn is_integral(self) -> bool {
        self != QuantumDepth::Hdri
    }

    /// Takes a value already in sample units and saturates it to `[0, max]`, rounding to the nearest
    /// integer for integer depths. NaN saturates to 0.
    pub fn saturate(self, value: f64) -> f64 {
        let clamped = clamp_to_quantum(value, self.max());
        if self.is_integral() {
            clamped.round()
        } else {
            clamped
        }
    }

    /// Rescales a normalized value in `[0, 1]` to a sample at this depth. Out-of-range values are
    /// saturated at the bounds rather than wrapped.
    pub fn scale_to_quantum(self, normalized: f64) -> f64 {
        self.saturate(normalized * self.max())
    }

    /// The inverse of `scale_to_quantum`, minus the rounding: divides a sample by the maximum.
    pub fn scale_from_quantum(self, value: f64) -> f64 {
        value / self.max()
    }
}

/// Clamps `value` to `[0, quantum_max]`. Written with comparisons so that NaN falls through to 0.
pub(crate) fn clamp_to_quantum(value: f64, quantum_max: f64) -> f64 {
    if value >= quantum_max {
        quantum_max
    } else if value > 0.0 {
        value
    } else {
        0.0
    }
}

/// An error in parsing a `QuantumDepth` from text.
#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq)]
pub enum QuantumDepthParseError {
    /// The text didn't name any known depth.
    UnknownDepth,
}

impl fmt::Display for QuantumDepthParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            QuantumDepthParseError::UnknownDepth => {
                write!(f, "unknown quantum depth, expected one of q8, q16, hdri")
            }
        }
    }
}

impl Error for QuantumDepthParseError {}

impl FromStr for QuantumDepth {
    type Err = QuantumDepthParseError;

    /// Accepts "q8" or "8", "q16" or "16", and "hdri" or "float", ignoring case and surrounding
    /// whitespace.
    fn from_str(s: &str) -> Result<QuantumDepth, QuantumDepthParseError> {
        match s.trim().to_ascii_lowercase().as_str() {
            "q8" | "8" => Ok(QuantumDepth::Q8),
            "q16" | "16" => Ok(QuantumDepth::Q16),
            "hdri" | "float" => Ok(QuantumDepth::Hdri),
            _ => Err(QuantumDepthParseError::UnknownDepth),
        }
    }
}

impl fmt::Display for QuantumDepth {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match *self {
            QuantumDepth::Q8 => "q8",
            QuantumDepth::Q16 => "q16",
            QuantumDepth::Hdri => "hdri",
        };
        write!(f, "{}", name)
    }
}

/// A numeric type that can hold one channel sample. Each implementor is tied to exactly one
/// `QuantumDepth`: `u8` to Q8, `u16` to Q16, and both float types to HDRI.
pub trait Quantum: NumCast + Zero + Copy {
    /// The depth whose samples this type stores.
    const DEPTH: QuantumDepth;

    /// The sample as an `f64`, still in sample units.
    fn as_f64(self) -> f64 {
        ToPrimitive::to_f64(&self).unwrap_or(0.0)
    }

    /// Builds a sample from a value in sample units, applying the depth's saturation and rounding.
    fn from_scaled(value: f64) -> Self {
        <Self as NumCast>::from(Self::DEPTH.saturate(value)).unwrap_or_else(Self::zero)
    }

    /// Builds a sample from a normalized value in `[0, 1]`.
    fn from_normalized(value: f64) -> Self {
        Self::from_scaled(value * Self::DEPTH.max())
    }
}

impl Quantum for u8 {
    const DEPTH: QuantumDepth = QuantumDepth::Q8;
}

impl Quantum for u16 {
    const DEPTH: QuantumDepth = QuantumDepth::Q16;
}

impl Quantum for f32 {
    const DEPTH: QuantumDepth = QuantumDepth::Hdri;
}

impl Quantum for f64 {
    const DEPTH: QuantumDepth = QuantumDepth::Hdri;
}
