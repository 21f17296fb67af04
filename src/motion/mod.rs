//! Motion Module - Damped springs and frame clocks
//!
//! The pieces that move a card's displayed pose toward its target:
//!
//! - **Spring** - Fixed-timestep damped-spring integrator
//! - **Clock** - Shared per-FPS frame counters that pace `advance` calls

mod clock;
mod spring;

pub use clock::*;
pub use spring::*;
