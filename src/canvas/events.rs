//! Outbound notifications from the canvas to the presentation layer.

use super::tool::ToolKind;

/// Notification emitted by [`CanvasState`](super::CanvasState) mutations.
///
/// The presentation layer drains these after each call into the canvas and
/// updates its own widgets; the core never touches UI objects directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CanvasEvent {
    /// The active tool was replaced. Drives fill-control enablement (see
    /// [`ToolKind::supports_fill`]) and toolbar/menu selection sync.
    ToolChanged {
        /// The newly active tool
        tool: ToolKind,
    },
    /// A shape was committed at pointer release. Drives the clear-affordance
    /// enablement.
    ShapeCommitted {
        /// Committed shape count after the append
        total: usize,
    },
}
