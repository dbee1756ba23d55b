use keypadkit_designer::{
    render_border, render_keypad, ButtonOverride, GridSpec, KeypadDesign, Layout,
    OuterFrameSpec, Padding, RenderOptions,
};
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_button_count_matches_dimensions(rows in 1usize..=8, cols in 1usize..=8) {
        let mut design = KeypadDesign::new();
        design.set_dimensions(rows, cols);
        let drawing = render_keypad(&design, &RenderOptions::default());
        prop_assert_eq!(drawing.buttons.len(), rows * cols);
    }

    #[test]
    fn prop_x_increases_with_col_and_ignores_row(
        rows in 1usize..=8,
        cols in 2usize..=8,
        size in 5.0f64..50.0,
        spacing in 0.0f64..20.0,
        left in 0.0f64..50.0,
        top in 0.0f64..50.0,
    ) {
        let spec = GridSpec { rows, cols, button_size: size, spacing, ..GridSpec::default() };
        let frame = OuterFrameSpec {
            padding: Padding { top, left, ..Padding::default() },
            ..OuterFrameSpec::default()
        };
        let layout = Layout::compute(&spec, &frame);
        for i in 0..rows {
            for j in 1..cols {
                let prev = layout.cell_origin(i, j - 1);
                let here = layout.cell_origin(i, j);
                prop_assert!(here.x > prev.x);
                prop_assert_eq!(here.x, layout.cell_origin(0, j).x);
                prop_assert_eq!(here.y, prev.y);
            }
        }
    }

    #[test]
    fn prop_y_increases_with_row_and_ignores_col(
        rows in 2usize..=8,
        cols in 1usize..=8,
        size in 5.0f64..50.0,
        spacing in 0.0f64..20.0,
    ) {
        let spec = GridSpec { rows, cols, button_size: size, spacing, ..GridSpec::default() };
        let layout = Layout::compute(&spec, &OuterFrameSpec::default());
        for j in 0..cols {
            for i in 1..rows {
                prop_assert!(layout.cell_origin(i, j).y > layout.cell_origin(i - 1, j).y);
                prop_assert_eq!(layout.cell_origin(i, j).y, layout.cell_origin(i, 0).y);
            }
        }
    }

    #[test]
    fn prop_border_footprint_is_button_size(size in 5.0f64..50.0, frac in 0.0f64..1.0) {
        let border_width = size * frac;
        let spec = GridSpec { button_size: size, border_width, ..GridSpec::default() };
        let border = render_border(&spec, &ButtonOverride::default().resolve(&spec));
        let bounds = border.stroked_bounds().unwrap();
        prop_assert!(bounds.origin.x.abs() < 1e-9);
        prop_assert!(bounds.origin.y.abs() < 1e-9);
        prop_assert!((bounds.size.width - size).abs() < 1e-9);
        prop_assert!((bounds.size.height - size).abs() < 1e-9);
    }

    #[test]
    fn prop_canvas_contains_frame_stroke(
        border in 0.0f64..10.0,
        pad in 0.0f64..50.0,
    ) {
        let frame = OuterFrameSpec {
            border_width: border,
            padding: Padding::uniform(pad),
            ..OuterFrameSpec::default()
        };
        let layout = Layout::compute(&GridSpec::default(), &frame);
        prop_assert!(layout.container.origin.x - border / 2.0 >= 0.0);
        prop_assert!(layout.container.right() + border / 2.0 <= layout.canvas.width + 1e-9);
        prop_assert!(layout.container.bottom() + border / 2.0 <= layout.canvas.height + 1e-9);
    }
}
