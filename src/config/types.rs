//! Configuration type definitions.

use super::enums::ColorSpec;
use serde::{Deserialize, Serialize};

/// Drawing-related settings.
///
/// Controls the attributes a canvas session starts with. Users change these
/// at runtime through the presentation layer's color pickers, fill checkbox,
/// width selector, and tool buttons.
#[derive(Debug, Serialize, Deserialize)]
pub struct DrawingConfig {
    /// Initial outline color - either a named color (red, green, blue,
    /// yellow, orange, pink, white, black) or an RGB array like `[255, 0, 0]`
    #[serde(default = "default_stroke_color")]
    pub stroke_color: ColorSpec,

    /// Initial fill color - same formats as `stroke_color`
    #[serde(default = "default_fill_color")]
    pub fill_color: ColorSpec,

    /// Whether new shapes start out filled
    #[serde(default = "default_fill_enabled")]
    pub fill_enabled: bool,

    /// Initial stroke width in pixels (valid range: 0 - 48; 0 draws nothing)
    #[serde(default = "default_stroke_width")]
    pub stroke_width: i32,

    /// Tool selected when the session opens (line, rectangle, ellipse, pencil)
    #[serde(default = "default_tool")]
    pub default_tool: String,
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            stroke_color: default_stroke_color(),
            fill_color: default_fill_color(),
            fill_enabled: default_fill_enabled(),
            stroke_width: default_stroke_width(),
            default_tool: default_tool(),
        }
    }
}

fn default_stroke_color() -> ColorSpec {
    ColorSpec::Name("black".to_string())
}

fn default_fill_color() -> ColorSpec {
    ColorSpec::Name("black".to_string())
}

fn default_fill_enabled() -> bool {
    false
}

fn default_stroke_width() -> i32 {
    3
}

fn default_tool() -> String {
    "line".to_string()
}
