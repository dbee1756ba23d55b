use keypadkit_core::Color;
use keypadkit_designer::{ContentType, KeypadDesign};

#[test]
fn test_resize_round_trip_restores_defaults_not_history() {
    let mut design = KeypadDesign::new();
    design.set_button_text(0, 0, "A").unwrap();
    design.set_button_text(3, 0, "Dropped").unwrap();

    design.set_dimensions(2, 6);
    assert_eq!(design.button(0, 0).unwrap().text, "A");
    assert!(design.button(3, 0).is_none());

    design.set_dimensions(4, 4);
    assert_eq!(design.button(0, 0).unwrap().text, "A");
    assert_eq!(design.button(3, 0).unwrap().text, "13");
}

#[test]
fn test_global_default_change_affects_unoverridden_cells() {
    let mut design = KeypadDesign::new();
    design
        .set_button_text_color(0, 1, Some(Color::rgb(0, 0, 255)))
        .unwrap();
    design.set_default_text_color(Color::rgb(0, 128, 0));

    let spec = design.spec();
    assert_eq!(design.button(0, 0).unwrap().resolve(spec).symbol, Color::rgb(0, 128, 0));
    assert_eq!(design.button(0, 1).unwrap().resolve(spec).symbol, Color::rgb(0, 0, 255));
}

#[test]
fn test_content_type_setter() {
    let mut design = KeypadDesign::new();
    design.set_button_content_type(2, 3, ContentType::Play).unwrap();
    assert_eq!(design.button(2, 3).unwrap().content_type, ContentType::Play);
    // The label survives so switching back to text restores it
    assert_eq!(design.button(2, 3).unwrap().text, "12");
}

#[test]
fn test_padding_setters_are_independent() {
    let mut design = KeypadDesign::new();
    design.set_padding_top(1.0);
    design.set_padding_right(9.0);
    let padding = design.frame().padding;
    assert_eq!(padding.top, 1.0);
    assert_eq!(padding.bottom, 5.0);
    assert_eq!(padding.left, 5.0);
    assert_eq!(padding.right, 9.0);
}
