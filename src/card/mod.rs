//! Card Module - The pointer-reactive tilt card
//!
//! - **Pose** - Target-pose math: pointer + surface rect -> clamped tilt
//! - **Overlays** - Per-frame visual output derived from the displayed pose
//! - **Component** - `TiltCard`: per-instance state, springs, lifecycle

mod component;
mod overlays;
mod pose;

pub use component::*;
pub use overlays::*;
pub use pose::*;
