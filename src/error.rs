//! Error types for canvas mutations.

use thiserror::Error;

/// Errors surfaced by [`CanvasState`](crate::canvas::CanvasState) setters.
///
/// The taxonomy is deliberately small: the canvas has no I/O or parsing, so
/// the only rejectable input is an out-of-domain attribute value. Malformed
/// event orderings (a release without a press, clearing an empty canvas) are
/// defined as no-ops, not errors, to keep the state machine total.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CanvasError {
    /// A negative stroke width was passed to the width setter. Width 0 is
    /// valid and means "do not render".
    #[error("stroke width must be non-negative, got {0}")]
    InvalidStrokeWidth(i32),
}
