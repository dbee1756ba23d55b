use keypadkit_core::{Point, Size};
use keypadkit_designer::{GridSpec, Layout, OuterFrameSpec, Padding, ANTI_CLIP_INSET};

fn keypad_spec() -> GridSpec {
    GridSpec {
        rows: 2,
        cols: 2,
        button_size: 15.0,
        spacing: 2.0,
        ..GridSpec::default()
    }
}

#[test]
fn test_reference_scenario_container_and_canvas() {
    let frame = OuterFrameSpec {
        border_width: 0.0,
        padding: Padding::uniform(5.0),
        ..OuterFrameSpec::default()
    };
    let layout = Layout::compute(&keypad_spec(), &frame);
    // 2×15 + 1×2 + 2×0.5 + 5 + 5
    assert_eq!(layout.container.size.width, 43.0);
    assert_eq!(layout.canvas.width, 43.0);
    assert_eq!(layout.canvas.height, 43.0);
}

#[test]
fn test_first_cell_offset() {
    let frame = OuterFrameSpec {
        border_width: 2.0,
        padding: Padding {
            top: 4.0,
            bottom: 0.0,
            left: 6.0,
            right: 0.0,
        },
        ..OuterFrameSpec::default()
    };
    let layout = Layout::compute(&keypad_spec(), &frame);
    assert_eq!(
        layout.cell_origin(0, 0),
        Point::new(2.0 + 6.0 + ANTI_CLIP_INSET, 2.0 + 4.0 + ANTI_CLIP_INSET)
    );
}

#[test]
fn test_cell_pitch_is_button_plus_spacing() {
    let layout = Layout::compute(&keypad_spec(), &OuterFrameSpec::default());
    let a = layout.cell_origin(0, 0);
    let b = layout.cell_origin(0, 1);
    let c = layout.cell_origin(1, 0);
    assert_eq!(b.x - a.x, 17.0);
    assert_eq!(c.y - a.y, 17.0);
    assert_eq!(b.y, a.y);
    assert_eq!(c.x, a.x);
}

#[test]
fn test_last_cell_ends_inside_container() {
    let frame = OuterFrameSpec {
        border_width: 1.0,
        ..OuterFrameSpec::default()
    };
    let layout = Layout::compute(&keypad_spec(), &frame);
    let last = layout.cell_rect(1, 1);
    let slack_right = layout.container.right() - last.right();
    let slack_bottom = layout.container.bottom() - last.bottom();
    assert!((slack_right - (frame.padding.right + ANTI_CLIP_INSET)).abs() < 1e-9);
    assert!((slack_bottom - (frame.padding.bottom + ANTI_CLIP_INSET)).abs() < 1e-9);
}

#[test]
fn test_unvalidated_negative_spacing_is_plain_arithmetic() {
    let spec = GridSpec {
        spacing: -1.0,
        ..keypad_spec()
    };
    let layout = Layout::compute(&spec, &OuterFrameSpec::default());
    assert_eq!(layout.content, Size::new(29.0, 29.0));
}
