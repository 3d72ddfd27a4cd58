//! Geometry tools that turn pointer input into provisional shapes.

use crate::draw::Shape;
use crate::draw::shape::{bounding_box_for_box, bounding_box_for_line, bounding_box_for_points};
use crate::util::{Rect, box_from_corners};

/// Off-canvas coordinate used as the "unset" value for tool anchors.
///
/// Every tool starts with its anchors here, so a shape queried before any
/// pointer interaction renders fully outside the visible canvas.
pub const UNASSIGNED: (i32, i32) = (-100, -100);

/// Identifies a drawing tool selection.
///
/// The active tool determines what shape is produced when the user drags
/// across the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolKind {
    /// Straight line between press and release points
    Line,
    /// Rectangle spanned corner to corner
    Rect,
    /// Ellipse inscribed in the spanned corner-to-corner box
    Ellipse,
    /// Freehand path following the pointer
    Pencil,
}

impl ToolKind {
    /// Stable display name, used by the presentation layer for toolbar and
    /// menu sync.
    pub fn name(self) -> &'static str {
        match self {
            ToolKind::Line => "Line",
            ToolKind::Rect => "Rectangle",
            ToolKind::Ellipse => "Ellipse",
            ToolKind::Pencil => "Pencil",
        }
    }

    /// Whether the fill control is meaningful for this tool.
    ///
    /// Fill is a closed-shape concept: it applies to rectangles and ellipses
    /// only. This is advisory UI state; the canvas accepts the fill flag for
    /// any tool, but open shapes never produce visible fill.
    pub fn supports_fill(self) -> bool {
        matches!(self, ToolKind::Rect | ToolKind::Ellipse)
    }

    /// Parses a tool name from the configuration file.
    ///
    /// Accepts the display names and their common short forms,
    /// case-insensitively. Returns `None` for unrecognized names.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "line" => Some(ToolKind::Line),
            "rect" | "rectangle" => Some(ToolKind::Rect),
            "ellipse" => Some(ToolKind::Ellipse),
            "pencil" | "freehand" => Some(ToolKind::Pencil),
            _ => None,
        }
    }
}

/// The live, mutable tool state: the anchors or point trail the user has put
/// down so far.
///
/// Line, Rect, and Ellipse hold a start and end anchor. Pencil holds the
/// whole point trail: setting the end point *appends* (every drag event adds
/// a segment) and setting the start point *begins a new trail*, so attribute
/// changes between strokes never retroactively alter a finished stroke.
#[derive(Debug, Clone)]
pub enum ActiveTool {
    /// Line tool anchors
    Line {
        start: (i32, i32),
        end: (i32, i32),
    },
    /// Rectangle tool anchors
    Rect {
        start: (i32, i32),
        end: (i32, i32),
    },
    /// Ellipse tool anchors
    Ellipse {
        start: (i32, i32),
        end: (i32, i32),
    },
    /// Pencil point trail, in draw order
    Pencil { points: Vec<(i32, i32)> },
}

impl ActiveTool {
    /// Creates a fresh tool of the given kind with sentinel anchors.
    pub fn new(kind: ToolKind) -> Self {
        match kind {
            ToolKind::Line => ActiveTool::Line {
                start: UNASSIGNED,
                end: UNASSIGNED,
            },
            ToolKind::Rect => ActiveTool::Rect {
                start: UNASSIGNED,
                end: UNASSIGNED,
            },
            ToolKind::Ellipse => ActiveTool::Ellipse {
                start: UNASSIGNED,
                end: UNASSIGNED,
            },
            ToolKind::Pencil => ActiveTool::Pencil {
                points: vec![UNASSIGNED],
            },
        }
    }

    /// The kind of tool this is.
    pub fn kind(&self) -> ToolKind {
        match self {
            ActiveTool::Line { .. } => ToolKind::Line,
            ActiveTool::Rect { .. } => ToolKind::Rect,
            ActiveTool::Ellipse { .. } => ToolKind::Ellipse,
            ActiveTool::Pencil { .. } => ToolKind::Pencil,
        }
    }

    /// Stable display name of this tool.
    pub fn name(&self) -> &'static str {
        self.kind().name()
    }

    /// Records the anchor point where a drag begins.
    ///
    /// For Pencil this discards the previous trail and begins a new one
    /// containing only the given point.
    pub fn set_start(&mut self, x: i32, y: i32) {
        match self {
            ActiveTool::Line { start, .. }
            | ActiveTool::Rect { start, .. }
            | ActiveTool::Ellipse { start, .. } => *start = (x, y),
            ActiveTool::Pencil { points } => {
                points.clear();
                points.push((x, y));
            }
        }
    }

    /// Records the current pointer location.
    ///
    /// For Pencil this appends to the trail; earlier segments are never
    /// reconstructed or lost.
    pub fn set_end(&mut self, x: i32, y: i32) {
        match self {
            ActiveTool::Line { end, .. }
            | ActiveTool::Rect { end, .. }
            | ActiveTool::Ellipse { end, .. } => *end = (x, y),
            ActiveTool::Pencil { points } => points.push((x, y)),
        }
    }

    /// Resolves the current geometry from the stored points.
    ///
    /// Callable at any time; before any pointer interaction this returns the
    /// degenerate sentinel-positioned shape. Rect and Ellipse are normalized
    /// so the primitive is valid regardless of drag direction.
    pub fn shape(&self) -> Shape {
        match self {
            ActiveTool::Line {
                start: (x1, y1),
                end: (x2, y2),
            } => Shape::Line {
                x1: *x1,
                y1: *y1,
                x2: *x2,
                y2: *y2,
            },
            ActiveTool::Rect {
                start: (x1, y1),
                end: (x2, y2),
            } => {
                let (x, y, w, h) = box_from_corners(*x1, *y1, *x2, *y2);
                Shape::Rect { x, y, w, h }
            }
            ActiveTool::Ellipse {
                start: (x1, y1),
                end: (x2, y2),
            } => {
                let (x, y, w, h) = box_from_corners(*x1, *y1, *x2, *y2);
                Shape::Ellipse { x, y, w, h }
            }
            ActiveTool::Pencil { points } => Shape::Path {
                points: points.clone(),
            },
        }
    }

    /// Bounding box of the current provisional geometry at a stroke width.
    ///
    /// Borrows the pencil trail instead of materializing a [`Shape`], so the
    /// presentation layer can compute damage hints every drag event without
    /// cloning a long stroke.
    pub fn bounding_box(&self, thick: f64) -> Option<Rect> {
        match self {
            ActiveTool::Line {
                start: (x1, y1),
                end: (x2, y2),
            } => bounding_box_for_line(*x1, *y1, *x2, *y2, thick),
            ActiveTool::Rect {
                start: (x1, y1),
                end: (x2, y2),
            }
            | ActiveTool::Ellipse {
                start: (x1, y1),
                end: (x2, y2),
            } => {
                let (x, y, w, h) = box_from_corners(*x1, *y1, *x2, *y2);
                bounding_box_for_box(x, y, w, h, thick)
            }
            ActiveTool::Pencil { points } => bounding_box_for_points(points, thick),
        }
    }

    /// Resets the tool to its sentinel state, as if freshly selected.
    pub fn reset(&mut self) {
        *self = Self::new(self.kind());
    }
}
