//! Shape rendering over an abstract drawing surface.
//!
//! The core never calls a concrete rendering API. The presentation layer
//! implements [`Surface`] for whatever backend it draws with (Cairo, egui,
//! a raster buffer in tests) and the functions here walk committed records
//! in draw order, deciding what to stroke and what to fill.

use super::color::Color;
use super::frame::DrawnShape;
use super::shape::Shape;

/// Drawing capability the presentation layer provides to the core.
///
/// Implementations interpret each [`Shape`] variant however their backend
/// requires; the core only decides *what* is drawn and in which order.
pub trait Surface {
    /// Draws the outline of a shape with the given color and stroke width.
    ///
    /// The width is always positive when called through the render path;
    /// width-0 records are skipped before reaching the surface.
    fn stroke_shape(&mut self, shape: &Shape, color: Color, width: f64);

    /// Fills the interior of a closed shape with the given color.
    fn fill_shape(&mut self, shape: &Shape, color: Color);
}

/// Renders all committed records in draw order (first = bottom layer).
pub fn render_records(surface: &mut dyn Surface, records: &[DrawnShape]) {
    for record in records {
        render_record(surface, record);
    }
}

/// Renders a single committed record.
///
/// A width of 0 means "do not render": the record is skipped entirely,
/// outline and fill both. Otherwise the outline is stroked first and the
/// fill painted on top when the record's fill flag is set; open shapes
/// never receive a fill pass.
pub fn render_record(surface: &mut dyn Surface, record: &DrawnShape) {
    if record.width() <= 0 {
        return;
    }

    surface.stroke_shape(record.shape(), record.stroke(), record.width() as f64);

    if record.is_filled() && record.shape().is_closed() {
        surface.fill_shape(record.shape(), record.fill());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::{BLACK, BLUE, RED};

    /// Records every surface call so tests can assert on draw order.
    #[derive(Default)]
    struct RecordingSurface {
        ops: Vec<Op>,
    }

    #[derive(Debug, PartialEq)]
    enum Op {
        Stroke(Shape, Color, f64),
        Fill(Shape, Color),
    }

    impl Surface for RecordingSurface {
        fn stroke_shape(&mut self, shape: &Shape, color: Color, width: f64) {
            self.ops.push(Op::Stroke(shape.clone(), color, width));
        }

        fn fill_shape(&mut self, shape: &Shape, color: Color) {
            self.ops.push(Op::Fill(shape.clone(), color));
        }
    }

    fn rect(x: i32) -> Shape {
        Shape::Rect { x, y: 0, w: 5, h: 5 }
    }

    #[test]
    fn filled_record_strokes_then_fills() {
        let mut surface = RecordingSurface::default();
        let record = DrawnShape::new(rect(0), RED, BLUE, true, 2);

        render_record(&mut surface, &record);

        assert_eq!(
            surface.ops,
            vec![
                Op::Stroke(rect(0), RED, 2.0),
                Op::Fill(rect(0), BLUE),
            ]
        );
    }

    #[test]
    fn width_zero_record_renders_nothing() {
        let mut surface = RecordingSurface::default();
        let record = DrawnShape::new(rect(0), RED, BLUE, true, 0);

        render_record(&mut surface, &record);

        assert!(surface.ops.is_empty());
    }

    #[test]
    fn open_shapes_are_never_filled() {
        let mut surface = RecordingSurface::default();
        let line = Shape::Line {
            x1: 0,
            y1: 0,
            x2: 9,
            y2: 9,
        };
        let record = DrawnShape::new(line.clone(), BLACK, BLUE, true, 3);

        render_record(&mut surface, &record);

        assert_eq!(surface.ops, vec![Op::Stroke(line, BLACK, 3.0)]);
    }

    #[test]
    fn records_render_in_insertion_order() {
        let mut surface = RecordingSurface::default();
        let records = vec![
            DrawnShape::new(rect(0), RED, BLUE, false, 1),
            DrawnShape::new(rect(10), BLACK, BLUE, false, 1),
        ];

        render_records(&mut surface, &records);

        assert_eq!(
            surface.ops,
            vec![
                Op::Stroke(rect(0), RED, 1.0),
                Op::Stroke(rect(10), BLACK, 1.0),
            ]
        );
    }
}
