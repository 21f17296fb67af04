//! State Module - Pointer input
//!
//! Engine-native pointer events plus the crossterm bridge that produces them.
//! Routing is per-instance: hosts hand events to `TiltCard::handle_event`
//! rather than registering handlers in a global dispatch table.

mod pointer;

pub use pointer::*;
