//! Theme Module - Card presentation profiles
//!
//! A card picks one of a fixed set of variants; each variant bundles the
//! motion tuning (spring stiffness/damping) with the surface color and
//! shadow tint the derived visual output uses.

mod variant;

pub use variant::*;
