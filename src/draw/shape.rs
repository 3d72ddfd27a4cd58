//! Geometric primitives produced by the drawing tools.

use crate::util::Rect;

/// A resolved geometric primitive, independent of any paint attributes.
///
/// Shapes are pure geometry: the outline color, fill color, and stroke width
/// a shape is drawn with live on the committed record, not here. `Rect` and
/// `Ellipse` are always stored normalized (non-negative width and height,
/// anchor at the top-left of the spanned box).
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    /// Straight segment between two points
    Line {
        /// Starting X coordinate
        x1: i32,
        /// Starting Y coordinate
        y1: i32,
        /// Ending X coordinate
        x2: i32,
        /// Ending Y coordinate
        y2: i32,
    },
    /// Axis-aligned rectangle
    Rect {
        /// Top-left X coordinate
        x: i32,
        /// Top-left Y coordinate
        y: i32,
        /// Width in pixels (non-negative)
        w: i32,
        /// Height in pixels (non-negative)
        h: i32,
    },
    /// Ellipse inscribed in its axis-aligned bounding box
    Ellipse {
        /// Bounding box top-left X coordinate
        x: i32,
        /// Bounding box top-left Y coordinate
        y: i32,
        /// Bounding box width in pixels (non-negative)
        w: i32,
        /// Bounding box height in pixels (non-negative)
        h: i32,
    },
    /// Freehand polyline connecting pointer drag points, in draw order
    Path {
        /// Sequence of (x, y) coordinates traced by the pointer
        points: Vec<(i32, i32)>,
    },
}

impl Shape {
    /// Returns whether the shape encloses an area that can sensibly be filled.
    ///
    /// Open curves (lines and freehand paths) never produce visible fill
    /// output, so rendering skips the fill pass for them even when the
    /// committed record carries the fill flag.
    pub fn is_closed(&self) -> bool {
        matches!(self, Shape::Rect { .. } | Shape::Ellipse { .. })
    }

    /// Returns the axis-aligned bounding box for this shape at a given stroke
    /// width, expanded to cover the stroke.
    ///
    /// The returned rectangle is suitable for damage hints when the
    /// presentation layer repaints incrementally. Returns `None` only when
    /// the shape has no drawable area (an empty path).
    pub fn bounding_box(&self, thick: f64) -> Option<Rect> {
        match self {
            Shape::Line { x1, y1, x2, y2 } => bounding_box_for_line(*x1, *y1, *x2, *y2, thick),
            Shape::Rect { x, y, w, h } | Shape::Ellipse { x, y, w, h } => {
                bounding_box_for_box(*x, *y, *w, *h, thick)
            }
            Shape::Path { points } => bounding_box_for_points(points, thick),
        }
    }
}

fn stroke_padding(thick: f64) -> i32 {
    let padding = (thick / 2.0).ceil() as i32;
    padding.max(1)
}

pub(crate) fn bounding_box_for_points(points: &[(i32, i32)], thick: f64) -> Option<Rect> {
    if points.is_empty() {
        return None;
    }
    let mut min_x = points[0].0;
    let mut max_x = points[0].0;
    let mut min_y = points[0].1;
    let mut max_y = points[0].1;

    for &(x, y) in &points[1..] {
        min_x = min_x.min(x);
        max_x = max_x.max(x);
        min_y = min_y.min(y);
        max_y = max_y.max(y);
    }

    let padding = stroke_padding(thick);
    min_x -= padding;
    max_x += padding;
    min_y -= padding;
    max_y += padding;

    ensure_positive_rect(min_x, min_y, max_x, max_y)
}

pub(crate) fn bounding_box_for_line(
    x1: i32,
    y1: i32,
    x2: i32,
    y2: i32,
    thick: f64,
) -> Option<Rect> {
    let padding = stroke_padding(thick);

    let min_x = x1.min(x2) - padding;
    let max_x = x1.max(x2) + padding;
    let min_y = y1.min(y2) - padding;
    let max_y = y1.max(y2) + padding;

    ensure_positive_rect(min_x, min_y, max_x, max_y)
}

/// Shared by rectangles and ellipses: both are anchored to the same box.
pub(crate) fn bounding_box_for_box(x: i32, y: i32, w: i32, h: i32, thick: f64) -> Option<Rect> {
    let padding = stroke_padding(thick);

    let min_x = x - padding;
    let max_x = x + w.max(0) + padding;
    let min_y = y - padding;
    let max_y = y + h.max(0) + padding;

    ensure_positive_rect(min_x, min_y, max_x, max_y)
}

fn ensure_positive_rect(min_x: i32, min_y: i32, max_x: i32, max_y: i32) -> Option<Rect> {
    let (min_x, max_x) = if min_x == max_x {
        (min_x, max_x + 1)
    } else {
        (min_x, max_x)
    };
    let (min_y, max_y) = if min_y == max_y {
        (min_y, max_y + 1)
    } else {
        (min_y, max_y)
    };
    Rect::from_min_max(min_x, min_y, max_x, max_y)
}
