//! Drawing core for an interactive vector canvas.
//!
//! The crate models the state behind a vector-drawing surface: the user
//! selects a tool (line, rectangle, ellipse, freehand pencil), drags across
//! the canvas, and releases to commit a shape with the current outline
//! color, fill color/status, and stroke width. Committed shapes persist and
//! redraw in order on every repaint.
//!
//! The presentation layer (windowing, toolbars, actual rasterization) stays
//! outside: it forwards pointer events into [`canvas::CanvasState`], drains
//! [`canvas::CanvasEvent`]s to keep its widgets in sync, and implements
//! [`draw::Surface`] for whatever rendering backend it uses.

pub mod canvas;
pub mod config;
pub mod draw;
pub mod error;
pub mod util;

pub use canvas::{CanvasEvent, CanvasState, ToolKind};
pub use config::Config;
pub use error::CanvasError;
