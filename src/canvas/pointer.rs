//! Pointer event handling: the press/drag/release lifecycle.

use log::debug;

use crate::draw::DrawnShape;

use super::core::CanvasState;
use super::events::CanvasEvent;

impl CanvasState {
    /// Processes a pointer press at the given canvas coordinates.
    ///
    /// Forwards the point as both the tool's start and end anchor, so a
    /// click with no drag still produces a zero-size shape at that point
    /// (and a single-point trail for Pencil).
    pub fn on_pointer_down(&mut self, x: i32, y: i32) {
        self.tool.set_start(x, y);
        self.tool.set_end(x, y);
        self.mark_redraw();
    }

    /// Processes pointer motion while the button is held.
    ///
    /// Updates the tool's end anchor only; for Pencil every drag event
    /// appends a new point to the trail.
    pub fn on_pointer_drag(&mut self, x: i32, y: i32) {
        self.tool.set_end(x, y);
        self.mark_redraw();
    }

    /// Processes pointer release: commits the in-progress shape.
    ///
    /// Snapshots the tool's current geometry together with the current
    /// paint attributes into an immutable record appended to the frame, and
    /// emits [`CanvasEvent::ShapeCommitted`].
    ///
    /// Total over all event orderings: with no prior press the tool still
    /// holds its sentinel anchors, so this commits a degenerate off-canvas
    /// record rather than faulting.
    pub fn on_pointer_up(&mut self) {
        let record = DrawnShape::new(
            self.tool.shape(),
            self.stroke_color,
            self.fill_color,
            self.fill_enabled,
            self.stroke_width,
        );
        self.frame.add_shape(record);

        let total = self.frame.len();
        self.push_event(CanvasEvent::ShapeCommitted { total });
        self.mark_redraw();
        debug!("Committed {} shape ({total} total)", self.tool.name());
    }
}
