//! This module contains the color types that convert to and from [`RGBColor`]. For convenience,
//! each main type is imported into this module's namespace directly.
//!
//! [`RGBColor`]: ../color/struct.RGBColor.html
pub mod hslcolor;

// for convenience, use this namespace for the color objects
pub use self::hslcolor::HSLColor;
