use super::*;
use crate::config::Config;
use crate::draw::{BLACK, BLUE, Color, GREEN, RED, Shape, Surface, WHITE};
use crate::error::CanvasError;

/// Test double capturing every surface call in order.
#[derive(Default)]
struct RecordingSurface {
    ops: Vec<SurfaceOp>,
}

#[derive(Debug, PartialEq)]
enum SurfaceOp {
    Stroke {
        shape: Shape,
        color: Color,
        width: f64,
    },
    Fill {
        shape: Shape,
        color: Color,
    },
}

impl Surface for RecordingSurface {
    fn stroke_shape(&mut self, shape: &Shape, color: Color, width: f64) {
        self.ops.push(SurfaceOp::Stroke {
            shape: shape.clone(),
            color,
            width,
        });
    }

    fn fill_shape(&mut self, shape: &Shape, color: Color) {
        self.ops.push(SurfaceOp::Fill {
            shape: shape.clone(),
            color,
        });
    }
}

fn rendered_ops(canvas: &CanvasState) -> Vec<SurfaceOp> {
    let mut surface = RecordingSurface::default();
    canvas.render(&mut surface);
    surface.ops
}

#[test]
fn new_session_has_original_defaults() {
    let canvas = CanvasState::new();
    assert_eq!(canvas.active_tool(), ToolKind::Line);
    assert_eq!(canvas.stroke_width(), 3);
    assert_eq!(canvas.shape_count(), 0);
    assert!(!canvas.fill_eligible());
}

#[test]
fn rect_drag_up_left_commits_normalized_record() {
    let mut canvas = CanvasState::new();
    canvas.set_active_tool(ToolKind::Rect);

    canvas.on_pointer_down(10, 10);
    canvas.on_pointer_drag(5, 5);
    canvas.on_pointer_up();

    assert_eq!(canvas.shape_count(), 1);
    assert_eq!(
        *canvas.frame().shapes[0].shape(),
        Shape::Rect {
            x: 5,
            y: 5,
            w: 5,
            h: 5
        }
    );
}

#[test]
fn line_click_without_drag_commits_zero_length_segment() {
    let mut canvas = CanvasState::new();

    canvas.on_pointer_down(0, 0);
    canvas.on_pointer_up();

    assert_eq!(
        *canvas.frame().shapes[0].shape(),
        Shape::Line {
            x1: 0,
            y1: 0,
            x2: 0,
            y2: 0
        }
    );
}

#[test]
fn pencil_strokes_are_independent() {
    let mut canvas = CanvasState::new();
    canvas.set_active_tool(ToolKind::Pencil);

    canvas.on_pointer_down(0, 0);
    canvas.on_pointer_drag(1, 1);
    canvas.on_pointer_drag(2, 2);
    canvas.on_pointer_up();

    assert_eq!(
        *canvas.frame().shapes[0].shape(),
        Shape::Path {
            points: vec![(0, 0), (1, 1), (2, 2)]
        }
    );

    // A second stroke begins a new trail; the committed record keeps the
    // first one.
    canvas.on_pointer_down(50, 50);
    canvas.on_pointer_drag(51, 51);
    canvas.on_pointer_up();

    assert_eq!(
        *canvas.frame().shapes[0].shape(),
        Shape::Path {
            points: vec![(0, 0), (1, 1), (2, 2)]
        }
    );
    assert_eq!(
        *canvas.frame().shapes[1].shape(),
        Shape::Path {
            points: vec![(50, 50), (50, 50), (51, 51)]
        }
    );
}

#[test]
fn committed_records_survive_attribute_changes() {
    let mut canvas = CanvasState::new();
    canvas.set_stroke_color(RED);
    canvas.set_fill_color(BLUE);
    canvas.set_fill_enabled(true);
    canvas.set_stroke_width(5).unwrap();
    canvas.set_active_tool(ToolKind::Rect);

    canvas.on_pointer_down(0, 0);
    canvas.on_pointer_drag(10, 10);
    canvas.on_pointer_up();

    // Mutate everything after the commit.
    canvas.set_stroke_color(GREEN);
    canvas.set_fill_color(WHITE);
    canvas.set_fill_enabled(false);
    canvas.set_stroke_width(1).unwrap();

    let record = &canvas.frame().shapes[0];
    assert_eq!(record.stroke(), RED);
    assert_eq!(record.fill(), BLUE);
    assert!(record.is_filled());
    assert_eq!(record.width(), 5);
}

#[test]
fn draw_order_matches_insertion_order() {
    let mut canvas = CanvasState::new();
    canvas.set_active_tool(ToolKind::Rect);
    canvas.set_stroke_color(RED);

    canvas.on_pointer_down(0, 0);
    canvas.on_pointer_drag(10, 10);
    canvas.on_pointer_up();

    canvas.set_stroke_color(BLUE);
    canvas.on_pointer_down(5, 5);
    canvas.on_pointer_drag(15, 15);
    canvas.on_pointer_up();

    let ops = rendered_ops(&canvas);
    // Two committed records then the live preview, in that order; the
    // overlapping second record overdraws the first.
    assert_eq!(ops.len(), 3);
    assert!(matches!(&ops[0], SurfaceOp::Stroke { color, .. } if *color == RED));
    assert!(matches!(&ops[1], SurfaceOp::Stroke { color, .. } if *color == BLUE));
}

#[test]
fn width_zero_records_are_counted_but_not_rendered() {
    let mut canvas = CanvasState::new();
    canvas.set_stroke_width(0).unwrap();

    canvas.on_pointer_down(0, 0);
    canvas.on_pointer_drag(10, 10);
    canvas.on_pointer_up();

    assert_eq!(canvas.shape_count(), 1);
    // Width 0 also suppresses the live preview, so nothing reaches the
    // surface at all.
    assert!(rendered_ops(&canvas).is_empty());
}

#[test]
fn render_draws_live_preview_with_current_attributes() {
    let mut canvas = CanvasState::new();
    canvas.set_active_tool(ToolKind::Ellipse);
    canvas.set_stroke_color(GREEN);
    canvas.set_fill_color(BLUE);
    canvas.set_fill_enabled(true);

    canvas.on_pointer_down(0, 0);
    canvas.on_pointer_drag(20, 10);

    let shape = Shape::Ellipse {
        x: 0,
        y: 0,
        w: 20,
        h: 10,
    };
    assert_eq!(
        rendered_ops(&canvas),
        vec![
            SurfaceOp::Stroke {
                shape: shape.clone(),
                color: GREEN,
                width: 3.0,
            },
            SurfaceOp::Fill {
                shape,
                color: BLUE,
            },
        ]
    );

    // Nothing was committed yet.
    assert_eq!(canvas.shape_count(), 0);
}

#[test]
fn preview_of_open_shape_ignores_fill_flag() {
    let mut canvas = CanvasState::new();
    canvas.set_active_tool(ToolKind::Pencil);
    canvas.set_fill_enabled(true);

    canvas.on_pointer_down(1, 1);
    canvas.on_pointer_drag(2, 2);

    let ops = rendered_ops(&canvas);
    assert_eq!(ops.len(), 1);
    assert!(matches!(ops[0], SurfaceOp::Stroke { .. }));
}

#[test]
fn clear_discards_shapes_and_stale_preview() {
    let mut canvas = CanvasState::new();
    canvas.on_pointer_down(0, 0);
    canvas.on_pointer_drag(10, 10);
    canvas.on_pointer_up();
    assert_eq!(canvas.shape_count(), 1);

    canvas.clear();

    assert_eq!(canvas.shape_count(), 0);
    // The live tool is back at its sentinel anchors: the only render output
    // is the off-canvas preview line.
    let ops = rendered_ops(&canvas);
    assert_eq!(
        ops,
        vec![SurfaceOp::Stroke {
            shape: Shape::Line {
                x1: -100,
                y1: -100,
                x2: -100,
                y2: -100,
            },
            color: BLACK,
            width: 3.0,
        }]
    );
}

#[test]
fn clear_on_empty_canvas_is_a_no_op() {
    let mut canvas = CanvasState::new();
    canvas.take_needs_redraw();

    canvas.clear();

    assert_eq!(canvas.shape_count(), 0);
    assert!(!canvas.take_needs_redraw());
    assert!(canvas.drain_events().is_empty());
}

#[test]
fn pointer_up_without_press_commits_degenerate_record() {
    let mut canvas = CanvasState::new();

    canvas.on_pointer_up();

    assert_eq!(canvas.shape_count(), 1);
    assert_eq!(
        *canvas.frame().shapes[0].shape(),
        Shape::Line {
            x1: -100,
            y1: -100,
            x2: -100,
            y2: -100
        }
    );
}

#[test]
fn negative_width_is_rejected_without_state_change() {
    let mut canvas = CanvasState::new();
    canvas.set_stroke_width(7).unwrap();

    assert_eq!(
        canvas.set_stroke_width(-1),
        Err(CanvasError::InvalidStrokeWidth(-1))
    );
    assert_eq!(canvas.stroke_width(), 7);
}

#[test]
fn tool_switch_emits_event_and_keeps_committed_shapes() {
    let mut canvas = CanvasState::new();
    canvas.on_pointer_down(0, 0);
    canvas.on_pointer_up();
    canvas.drain_events();

    canvas.set_active_tool(ToolKind::Ellipse);

    assert_eq!(canvas.shape_count(), 1);
    assert!(canvas.fill_eligible());
    assert_eq!(
        canvas.drain_events(),
        vec![CanvasEvent::ToolChanged {
            tool: ToolKind::Ellipse
        }]
    );
}

#[test]
fn events_drain_in_emission_order() {
    let mut canvas = CanvasState::new();
    canvas.set_active_tool(ToolKind::Rect);
    canvas.on_pointer_down(0, 0);
    canvas.on_pointer_up();

    assert_eq!(
        canvas.drain_events(),
        vec![
            CanvasEvent::ToolChanged {
                tool: ToolKind::Rect
            },
            CanvasEvent::ShapeCommitted { total: 1 },
        ]
    );
    assert!(canvas.drain_events().is_empty());
}

#[test]
fn redraw_flag_is_claimed_once_per_batch() {
    let mut canvas = CanvasState::new();
    assert!(canvas.take_needs_redraw());
    assert!(!canvas.take_needs_redraw());

    canvas.on_pointer_down(1, 1);
    canvas.on_pointer_drag(2, 2);
    assert!(canvas.take_needs_redraw());
    assert!(!canvas.take_needs_redraw());
}

#[test]
fn preview_bounds_follow_the_drag() {
    let mut canvas = CanvasState::new();
    canvas.set_active_tool(ToolKind::Rect);
    canvas.on_pointer_down(10, 10);
    canvas.on_pointer_drag(30, 20);

    let bounds = canvas.preview_bounds().expect("drag should have bounds");
    // Covers the dragged box plus stroke padding.
    assert!(bounds.x <= 10 && bounds.y <= 10);
    assert!(bounds.x + bounds.width >= 30);
    assert!(bounds.y + bounds.height >= 20);

    canvas.set_stroke_width(0).unwrap();
    assert!(canvas.preview_bounds().is_none());
}

#[test]
fn session_starts_from_config_values() {
    let raw = r#"
        [drawing]
        stroke_color = "red"
        fill_color = [0, 0, 255]
        fill_enabled = true
        stroke_width = 6
        default_tool = "ellipse"
    "#;
    let config: Config = toml::from_str(raw).unwrap();
    let canvas = CanvasState::from_config(&config);

    assert_eq!(canvas.active_tool(), ToolKind::Ellipse);
    assert_eq!(canvas.stroke_width(), 6);

    canvas_commits_with(canvas, RED, BLUE, true);
}

fn canvas_commits_with(mut canvas: CanvasState, stroke: Color, fill: Color, filled: bool) {
    canvas.on_pointer_down(0, 0);
    canvas.on_pointer_up();
    let record = &canvas.frame().shapes[0];
    assert_eq!(record.stroke(), stroke);
    assert_eq!(record.fill(), fill);
    assert_eq!(record.is_filled(), filled);
}
