//! # tiltcard
//!
//! Pointer-reactive tilt card engine and log catalog for terminal UIs.
//!
//! Built on [spark-signals](https://github.com/RLabs-Inc/spark-signals) for
//! fine-grained reactivity.
//!
//! ## Architecture
//!
//! Two independent components, no shared state between them:
//!
//! ```text
//! pointer events → target pose → springs → displayed pose → CardFrame
//! loaded records → Catalog → list()/find(slug) → RendererMap → text
//! ```
//!
//! Each [`card::TiltCard`] owns its pose exclusively. Pointer events only
//! move the *target*; the displayed pose chases it through damped springs
//! advanced on the host's animation clock, and every visual layer (shadow,
//! spotlight, depth highlight, icon parallax) derives from the displayed
//! pose. The [`catalog::Catalog`] is a pure accessor over records the
//! authoring toolchain produced: stable newest-first listing and slug lookup.
//!
//! ## Modules
//!
//! - [`types`] - Core types (Rgba, Rect)
//! - [`card`] - Pose math, overlays, the TiltCard component
//! - [`catalog`] - Records, renderer overrides, list/find accessor
//! - [`motion`] - Damped springs and shared frame clocks
//! - [`theme`] - Card variants and presentation profiles
//! - [`state`] - Pointer events and the crossterm bridge

pub mod card;
pub mod catalog;
pub mod error;
pub mod logging;
pub mod motion;
pub mod state;
pub mod theme;
pub mod types;

// Re-export commonly used items
pub use types::*;

pub use error::{Error, Result};

pub use card::{
    CardFrame, CardLayers, CardProps, CardState, DepthHighlight, IconPose, MAX_TILT_DEG,
    PointerSample, ShadowSpec, SpotlightOverlay, TiltCard, compose_frame, target_pose,
};

pub use catalog::{
    Body, Catalog, DocumentRecord, Element, ElementKind, RenderFn, RendererMap,
};

pub use motion::{
    Spring, frame_count, frame_dt, is_clock_running, reset_frame_clocks, subscribe_to_frames,
    subscriber_count,
};

pub use state::{
    Modifiers, PointerAction, PointerButton, PointerEvent,
    convert_mouse_event, disable_mouse, enable_mouse, poll_event, read_event,
};

pub use theme::{CardVariant, VariantProfile, get_variant_profile};

pub use logging::{default_log_level, init_logging, logging_status};
