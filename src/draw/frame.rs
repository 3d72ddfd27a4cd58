//! Committed shape records and the frame container that owns them.

use super::color::Color;
use super::shape::Shape;

/// An immutable snapshot of a finished shape plus its paint attributes.
///
/// Created exactly once, at pointer release, from the live tool's current
/// shape and the canvas's attribute values at that instant. Attribute changes
/// after the commit never affect an already-committed record, which is why
/// the fields are private and exposed through accessors only.
#[derive(Clone, Debug)]
pub struct DrawnShape {
    /// The resolved geometry, not the live tool
    shape: Shape,
    /// Outline color
    stroke: Color,
    /// Fill color (only visible when `filled` is set and the shape is closed)
    fill: Color,
    /// Whether the shape is filled
    filled: bool,
    /// Stroke width in pixels; 0 means the record renders nothing
    width: i32,
}

impl DrawnShape {
    /// Snapshots a shape with the paint attributes in effect at commit time.
    pub fn new(shape: Shape, stroke: Color, fill: Color, filled: bool, width: i32) -> Self {
        Self {
            shape,
            stroke,
            fill,
            filled,
            width,
        }
    }

    /// The committed geometry.
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Outline color captured at commit time.
    pub fn stroke(&self) -> Color {
        self.stroke
    }

    /// Fill color captured at commit time.
    pub fn fill(&self) -> Color {
        self.fill
    }

    /// Whether the fill flag was set at commit time.
    pub fn is_filled(&self) -> bool {
        self.filled
    }

    /// Stroke width captured at commit time.
    pub fn width(&self) -> i32 {
        self.width
    }
}

/// Container for all committed shapes in the current drawing session.
///
/// Shapes accumulate in draw order (first = bottom layer, last = top layer)
/// until [`Frame::clear`] empties the sequence.
#[derive(Debug, Clone, Default)]
pub struct Frame {
    /// Committed records in draw order
    pub shapes: Vec<DrawnShape>,
}

impl Frame {
    /// Creates a new empty frame with no shapes.
    pub fn new() -> Self {
        Self { shapes: Vec::new() }
    }

    /// Appends a committed record (drawn on top of existing shapes).
    pub fn add_shape(&mut self, shape: DrawnShape) {
        self.shapes.push(shape);
    }

    /// Removes all committed records, emptying the canvas.
    pub fn clear(&mut self) {
        self.shapes.clear();
    }

    /// Number of committed records.
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Returns true when no shape has been committed.
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::{BLACK, RED};

    fn line_record(width: i32) -> DrawnShape {
        DrawnShape::new(
            Shape::Line {
                x1: 0,
                y1: 0,
                x2: 1,
                y2: 1,
            },
            RED,
            BLACK,
            false,
            width,
        )
    }

    #[test]
    fn frame_accumulates_in_insertion_order() {
        let mut frame = Frame::new();
        assert!(frame.is_empty());

        frame.add_shape(line_record(2));
        frame.add_shape(line_record(4));

        assert_eq!(frame.len(), 2);
        assert_eq!(frame.shapes[0].width(), 2);
        assert_eq!(frame.shapes[1].width(), 4);
    }

    #[test]
    fn clear_empties_the_frame() {
        let mut frame = Frame::new();
        frame.add_shape(line_record(3));
        frame.clear();
        assert!(frame.is_empty());
    }

    #[test]
    fn record_keeps_attributes_captured_at_commit() {
        let record = line_record(0);
        assert_eq!(record.stroke(), RED);
        assert_eq!(record.fill(), BLACK);
        assert!(!record.is_filled());
        assert_eq!(record.width(), 0);
    }
}
