//! Canvas state: committed shapes, the live tool, and current paint attributes.

use std::collections::VecDeque;

use log::debug;

use crate::config::Config;
use crate::draw::{Color, Frame, color::BLACK};
use crate::error::CanvasError;

use super::events::CanvasEvent;
use super::tool::{ActiveTool, ToolKind};

/// Default stroke width prior to any user-prompted width change.
const DEFAULT_WIDTH: i32 = 3;

/// Single-owner state for one drawing session.
///
/// Owns the ordered sequence of committed shapes, the live geometry tool, and
/// the paint attributes the next commit will capture. All mutation happens on
/// one logical UI thread in response to serialized pointer/UI events; no
/// operation blocks or suspends.
///
/// The presentation layer drives this from pointer events and drains
/// [`CanvasEvent`]s after each mutating call:
///
/// ```
/// use inkboard::canvas::{CanvasEvent, CanvasState, ToolKind};
///
/// let mut canvas = CanvasState::new();
/// canvas.set_active_tool(ToolKind::Rect);
/// canvas.on_pointer_down(10, 10);
/// canvas.on_pointer_drag(40, 30);
/// canvas.on_pointer_up();
///
/// assert_eq!(
///     canvas.drain_events(),
///     vec![
///         CanvasEvent::ToolChanged { tool: ToolKind::Rect },
///         CanvasEvent::ShapeCommitted { total: 1 },
///     ]
/// );
/// ```
pub struct CanvasState {
    /// Committed shapes in draw order
    pub(super) frame: Frame,
    /// The live geometry tool; replaced wholesale on tool selection
    pub(super) tool: ActiveTool,
    /// Current outline color for the next commit
    pub(super) stroke_color: Color,
    /// Current fill color for the next commit
    pub(super) fill_color: Color,
    /// Whether the next commit is filled
    pub(super) fill_enabled: bool,
    /// Current stroke width; 0 means "do not render"
    pub(super) stroke_width: i32,
    /// Set by every mutation that changes visible output
    needs_redraw: bool,
    /// Outbound notifications awaiting the presentation layer
    events: VecDeque<CanvasEvent>,
}

impl CanvasState {
    /// Creates a canvas session with explicit initial attributes.
    ///
    /// `stroke_width` is expected to be non-negative; values come from the
    /// validated configuration or from [`CanvasState::new`]. Runtime width
    /// changes go through [`CanvasState::set_stroke_width`], which rejects
    /// negatives.
    pub fn with_defaults(
        stroke_color: Color,
        fill_color: Color,
        fill_enabled: bool,
        stroke_width: i32,
        tool: ToolKind,
    ) -> Self {
        Self {
            frame: Frame::new(),
            tool: ActiveTool::new(tool),
            stroke_color,
            fill_color,
            fill_enabled,
            stroke_width: stroke_width.max(0),
            needs_redraw: true,
            events: VecDeque::new(),
        }
    }

    /// Creates a canvas session from validated configuration values.
    pub fn from_config(config: &Config) -> Self {
        Self::with_defaults(
            config.drawing.stroke_color.to_color(),
            config.drawing.fill_color.to_color(),
            config.drawing.fill_enabled,
            config.drawing.stroke_width,
            ToolKind::from_name(&config.drawing.default_tool).unwrap_or(ToolKind::Line),
        )
    }

    /// Creates a canvas session with built-in defaults: black stroke and
    /// fill, fill disabled, width 3, Line tool.
    pub fn new() -> Self {
        Self::with_defaults(BLACK, BLACK, false, DEFAULT_WIDTH, ToolKind::Line)
    }

    /// Replaces the active tool with a fresh, sentinel-initialized instance.
    ///
    /// Committed shapes are not cleared or altered by a tool switch. Emits
    /// [`CanvasEvent::ToolChanged`] so the presentation layer can update
    /// fill-control enablement and toolbar selection.
    pub fn set_active_tool(&mut self, kind: ToolKind) {
        self.tool = ActiveTool::new(kind);
        self.events.push_back(CanvasEvent::ToolChanged { tool: kind });
        self.needs_redraw = true;
        debug!("Active tool set to {}", kind.name());
    }

    /// The currently selected tool kind.
    pub fn active_tool(&self) -> ToolKind {
        self.tool.kind()
    }

    /// Whether the fill control should be enabled for the active tool.
    ///
    /// Advisory only: the fill flag is accepted regardless, but open shapes
    /// never render a fill.
    pub fn fill_eligible(&self) -> bool {
        self.tool.kind().supports_fill()
    }

    /// Sets the outline color for subsequent commits.
    pub fn set_stroke_color(&mut self, color: Color) {
        self.stroke_color = color;
    }

    /// Sets the fill color for subsequent commits.
    pub fn set_fill_color(&mut self, color: Color) {
        self.fill_color = color;
    }

    /// Sets whether subsequent commits are filled.
    pub fn set_fill_enabled(&mut self, enabled: bool) {
        self.fill_enabled = enabled;
    }

    /// Sets the stroke width for subsequent commits.
    ///
    /// A width of 0 is an implicit no-draw state: records committed at
    /// width 0 render nothing but still count toward the committed sequence.
    ///
    /// # Errors
    /// Returns [`CanvasError::InvalidStrokeWidth`] for negative widths,
    /// leaving the current width unchanged. Callers clamp or validate first.
    pub fn set_stroke_width(&mut self, width: i32) -> Result<(), CanvasError> {
        if width < 0 {
            return Err(CanvasError::InvalidStrokeWidth(width));
        }
        self.stroke_width = width;
        Ok(())
    }

    /// Current stroke width.
    pub fn stroke_width(&self) -> i32 {
        self.stroke_width
    }

    /// The committed shapes in draw order.
    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    /// Number of committed shapes.
    pub fn shape_count(&self) -> usize {
        self.frame.len()
    }

    /// Empties the committed sequence and resets the live tool to its
    /// sentinel state.
    ///
    /// Calling this with nothing committed is a no-op, not an error; the
    /// live tool is reset either way so a cleared canvas shows no stale
    /// preview.
    pub fn clear(&mut self) {
        self.tool.reset();
        if self.frame.is_empty() {
            return;
        }
        let discarded = self.frame.len();
        self.frame.clear();
        self.needs_redraw = true;
        debug!("Cleared {discarded} committed shapes");
    }

    /// Drains pending outbound notifications, oldest first.
    pub fn drain_events(&mut self) -> Vec<CanvasEvent> {
        self.events.drain(..).collect()
    }

    /// Claims the redraw flag, clearing it.
    ///
    /// Lets the presentation layer's event loop coalesce repaints: returns
    /// true once per batch of mutations that changed visible output.
    pub fn take_needs_redraw(&mut self) -> bool {
        std::mem::take(&mut self.needs_redraw)
    }

    pub(super) fn push_event(&mut self, event: CanvasEvent) {
        self.events.push_back(event);
    }

    pub(super) fn mark_redraw(&mut self) {
        self.needs_redraw = true;
    }
}

impl Default for CanvasState {
    fn default() -> Self {
        Self::new()
    }
}
