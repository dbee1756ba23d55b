use keypadkit_core::Color;
use keypadkit_designer::{ContentType, KeypadDesign, Padding};
use keypadkit_settings::{load, parse, serialize, to_json, CodecError, CURRENT_VERSION};
use serde_json::json;

/// A document as written by the first release, with one shared padding.
const LEGACY_DOCUMENT: &str = r##"{
  "version": "1.0",
  "settings": {
    "rows": 2,
    "cols": 2,
    "buttonSize": 18,
    "spacing": 3,
    "cornerRadius": 2,
    "fontSize": 6,
    "borderWidth": 0.5,
    "buttonColor": "#ffffff",
    "borderColor": "#000000",
    "textColor": "#000000",
    "outerBorderWidth": 1,
    "outerBorderColor": "#333333",
    "outerBorderRadius": 3,
    "outerBorderPadding": 7,
    "outerBackgroundColor": "#eeeeee"
  },
  "buttons": [
    [
      { "text": "Zero|Probe", "contentType": "text", "fontSize": 4, "buttonColor": null, "borderColor": null, "textColor": null },
      { "text": "2", "contentType": "play", "fontSize": null, "buttonColor": "#00ff00", "borderColor": null, "textColor": null }
    ],
    [
      { "text": "3", "contentType": "stop", "fontSize": null, "buttonColor": null, "borderColor": "#ff0000", "textColor": null },
      { "text": "4", "contentType": "circle", "fontSize": null, "buttonColor": null, "borderColor": null, "textColor": "#0000ff" }
    ]
  ]
}"##;

#[test]
fn test_legacy_padding_applies_to_all_sides() {
    let loaded = load(LEGACY_DOCUMENT).unwrap();
    assert_eq!(loaded.design.frame().padding, Padding::uniform(7.0));
    assert_eq!(loaded.migration.source_version.as_deref(), Some("1.0"));
    assert_eq!(loaded.migration.applied, vec!["legacy-uniform-padding"]);
}

#[test]
fn test_legacy_padding_replaces_mixed_per_side_keys() {
    let design = parse(
        r#"{"settings":{"rows":1,"cols":1,"outerBorderPadding":7,"outerBorderPaddingTop":1},"buttons":[[{"text":"a"}]]}"#,
    )
    .unwrap();
    assert_eq!(design.frame().padding, Padding::uniform(7.0));
}

#[test]
fn test_legacy_document_fields() {
    let design = parse(LEGACY_DOCUMENT).unwrap();
    let spec = design.spec();
    assert_eq!((spec.rows, spec.cols), (2, 2));
    assert_eq!(spec.button_size, 18.0);
    assert_eq!(design.frame().border_color, Color::rgb(0x33, 0x33, 0x33));
    assert_eq!(design.frame().background_color, Color::rgb(0xee, 0xee, 0xee));

    let cell = design.button(0, 0).unwrap();
    assert_eq!(cell.text, "Zero|Probe");
    assert_eq!(cell.font_size, Some(4.0));
    assert_eq!(design.button(0, 1).unwrap().content_type, ContentType::Play);
    assert_eq!(
        design.button(1, 0).unwrap().border_color,
        Some(Color::rgb(0xff, 0, 0))
    );
}

#[test]
fn test_resave_writes_current_schema() {
    let design = parse(LEGACY_DOCUMENT).unwrap();
    let value = serde_json::to_value(serialize(&design)).unwrap();
    assert_eq!(value["version"], json!(CURRENT_VERSION));
    assert!(value["settings"].get("outerBorderPadding").is_none());
    assert_eq!(value["settings"]["outerBorderPaddingRight"], json!(7.0));
}

#[test]
fn test_round_trip_preserves_overrides_and_nulls() {
    let mut design = KeypadDesign::new();
    design.set_dimensions(3, 5);
    design.set_button_text(0, 0, "F1").unwrap();
    design.set_button_content_type(1, 4, ContentType::Gear).unwrap();
    design.set_button_font_size(2, 2, Some(4.5)).unwrap();
    design
        .set_button_text_color(2, 3, Some(Color::rgb(1, 2, 3)))
        .unwrap();
    design.set_padding(Padding {
        top: 1.0,
        bottom: 2.0,
        left: 3.25,
        right: 4.0,
    });
    design.set_outer_border_width(0.8);
    design.set_spacing(1.7);

    for pretty in [false, true] {
        let json = to_json(&design, pretty).unwrap();
        assert_eq!(parse(&json).unwrap(), design);
    }
}

#[test]
fn test_missing_settings_is_structural_error() {
    let err = parse(r#"{"version":"1.1","buttons":[[]]}"#).unwrap_err();
    assert!(matches!(err, CodecError::MissingSection("settings")));
    assert!(err.to_string().contains("missing 'settings'"));
}

#[test]
fn test_wrong_field_type_is_json_error() {
    let err = parse(r#"{"settings":{"buttonColor":"red"},"buttons":[]}"#).unwrap_err();
    assert!(matches!(err, CodecError::Json(_)));
}

#[test]
fn test_unknown_settings_are_ignored() {
    let design = parse(
        r#"{"settings":{"rows":1,"cols":1,"theme":"dark"},"buttons":[[{"text":"x"}]]}"#,
    )
    .unwrap();
    assert_eq!(design.grid().dimensions(), (1, 1));
}
