//! This module simply brings the most common functionality under a single namespace, to prevent
//! excessive imports: the two color types, the `Quantum` sample trait, and the `QuantumDepth`
//! configuration.

pub use color::RGBColor;
pub use colors::HSLColor;
pub use quantum::{Quantum, QuantumDepth};
