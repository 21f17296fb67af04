//! Crate error types.
//!
//! Only two things can go wrong for a consumer of this engine: a catalog
//! lookup can miss, and a body element can fail to render. Everything else
//! (malformed records, missing fields) is a defect in the upstream authoring
//! toolchain and is assumed away here.

use thiserror::Error;

/// Errors surfaced to the presentation host.
#[derive(Debug, Error)]
pub enum Error {
    /// No catalog record carries the requested slug.
    ///
    /// The host surfaces this as a not-found page. It is a routine outcome,
    /// not a system fault.
    #[error("no log entry found for slug `{0}`")]
    NotFound(String),

    /// A body element failed to render.
    ///
    /// Caught at the render boundary and replaced with an inline placeholder;
    /// it never takes down the surrounding page.
    #[error("failed to render {element} element: {reason}")]
    RenderFailure {
        /// The element kind that failed (e.g. "code", "link").
        element: String,
        /// Renderer-reported reason.
        reason: String,
    },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
