use keypadkit_core::Color;
use keypadkit_designer::{
    render_keypad, ButtonOverride, Grid, GridSpec, KeypadDesign, OuterFrameSpec, Paint,
    Primitive, RenderOptions,
};

fn border_fill(design: &KeypadDesign, row: usize, col: usize) -> Paint {
    let drawing = render_keypad(design, &RenderOptions::default());
    let button = drawing
        .buttons
        .iter()
        .find(|b| b.row == row && b.col == col)
        .expect("button rendered");
    match button.drawing.border {
        Primitive::Rect { fill, .. } => fill,
        ref other => panic!("unexpected border {:?}", other),
    }
}

#[test]
fn test_null_override_uses_grid_color() {
    let mut design = KeypadDesign::new();
    design.set_default_button_color(Color::rgb(0xee, 0xee, 0xee));
    assert_eq!(border_fill(&design, 1, 1), Paint::Color(Color::rgb(0xee, 0xee, 0xee)));
}

#[test]
fn test_explicit_override_wins() {
    let mut design = KeypadDesign::new();
    design
        .set_button_color(1, 1, Some(Color::rgb(0xff, 0, 0)))
        .unwrap();
    design.set_default_button_color(Color::rgb(0, 0, 0xff));
    assert_eq!(border_fill(&design, 1, 1), Paint::Color(Color::rgb(0xff, 0, 0)));
}

#[test]
fn test_mismatched_grid_under_renders() {
    let spec = GridSpec {
        rows: 3,
        cols: 3,
        ..GridSpec::default()
    };
    let grid = Grid::from_rows(vec![
        vec![ButtonOverride::labeled("a"), ButtonOverride::labeled("b")],
        vec![ButtonOverride::labeled("c")],
    ]);
    let design = KeypadDesign::from_parts(spec, OuterFrameSpec::default(), grid);
    let drawing = render_keypad(&design, &RenderOptions::default());
    let cells: Vec<_> = drawing.buttons.iter().map(|b| (b.row, b.col)).collect();
    assert_eq!(cells, vec![(0, 0), (0, 1), (1, 0)]);
}

#[test]
fn test_frame_rect_matches_container() {
    let mut design = KeypadDesign::new();
    design.set_outer_border_width(2.0);
    design.set_outer_corner_radius(4.0);
    let drawing = render_keypad(&design, &RenderOptions::default());
    match drawing.frame {
        Primitive::Rect {
            rect,
            corner_radius,
            stroke,
            ..
        } => {
            assert_eq!(rect.origin.x, 2.0);
            assert_eq!(corner_radius, 4.0);
            assert_eq!(stroke.unwrap().width, 2.0);
            // Centred stroke stays on the canvas
            assert!(rect.right() + 1.0 <= drawing.canvas.width);
            assert!(rect.origin.y - 1.0 >= 0.0);
        }
        other => panic!("unexpected frame {:?}", other),
    }
}
