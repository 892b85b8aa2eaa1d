//! quantum-hsl converts colors between the RGB samples an imaging library hands out and the HSL
//! color model. Image pixels are *quantized*: each channel is a sample between 0 and some maximum
//! that depends on how the library was built (255 for 8-bit, 65535 for 16-bit, 1 for floating-point
//! HDRI). HSL is much easier to reason about when adjusting color (rotate the hue, desaturate, lighten)
//! but it lives in normalized `[0, 1]` space, so every conversion is also a rescaling between the two.
//!
//! The main type is [`HSLColor`](colors/hslcolor/struct.HSLColor.html). The raw conversion functions
//! that take an explicit quantum maximum are in the same module, for callers that don't want to go
//! through a typed [`RGBColor`](color/struct.RGBColor.html).

#![doc(html_root_url = "https://docs.rs/quantum-hsl/0.1.0")]
// we don't mess around with documentation
#![deny(missing_docs)]

extern crate num;
extern crate serde;
#[macro_use]
extern crate serde_derive;
#[macro_use]
extern crate tracing;

#[cfg(test)]
extern crate float_cmp;
#[cfg(test)]
extern crate serde_json;

pub mod color;
pub mod colors;
pub mod prelude;
pub mod quantum;
