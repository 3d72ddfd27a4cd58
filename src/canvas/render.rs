//! Repaint pass: committed shapes first, live preview on top.

use crate::draw::{Surface, render_records};
use crate::util::Rect;

use super::core::CanvasState;

impl CanvasState {
    /// Renders the whole canvas to the given surface.
    ///
    /// Committed records are drawn in insertion order (earlier shapes are
    /// overdrawn by later ones), then the live tool's current shape is drawn
    /// with the *current* attributes as a preview. The preview is never
    /// persisted; it becomes a record only at pointer release.
    ///
    /// A current width of 0 suppresses the preview, just as width-0 records
    /// are skipped.
    pub fn render(&self, surface: &mut dyn Surface) {
        render_records(surface, &self.frame.shapes);

        if self.stroke_width > 0 {
            let shape = self.tool.shape();
            surface.stroke_shape(&shape, self.stroke_color, self.stroke_width as f64);
            if self.fill_enabled && shape.is_closed() {
                surface.fill_shape(&shape, self.fill_color);
            }
        }
    }

    /// Damage rectangle of the live preview at the current stroke width.
    ///
    /// The presentation layer can union this across drag events to repaint
    /// only the region the in-progress shape touches. `None` when the
    /// preview has no drawable area or is suppressed by width 0.
    pub fn preview_bounds(&self) -> Option<Rect> {
        if self.stroke_width <= 0 {
            return None;
        }
        self.tool.bounding_box(self.stroke_width as f64)
    }
}
