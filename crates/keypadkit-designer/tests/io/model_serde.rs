use keypadkit_core::Color;
use keypadkit_designer::{ButtonOverride, ContentType, Grid};
use serde_json::json;

#[test]
fn test_button_override_field_names() {
    let cell = ButtonOverride {
        content_type: ContentType::Menu,
        button_color: Some(Color::rgb(0x11, 0x22, 0x33)),
        ..ButtonOverride::labeled("Menu")
    };
    let value = serde_json::to_value(&cell).unwrap();
    assert_eq!(
        value,
        json!({
            "text": "Menu",
            "contentType": "menu",
            "fontSize": null,
            "buttonColor": "#112233",
            "borderColor": null,
            "textColor": null
        })
    );
}

#[test]
fn test_button_override_missing_fields_default() {
    let cell: ButtonOverride = serde_json::from_value(json!({ "text": "7" })).unwrap();
    assert_eq!(cell, ButtonOverride::labeled("7"));
}

#[test]
fn test_unknown_content_type_falls_back_to_text() {
    let cell: ButtonOverride =
        serde_json::from_value(json!({ "text": "?", "contentType": "hexagon" })).unwrap();
    assert_eq!(cell.content_type, ContentType::Text);
}

#[test]
fn test_grid_is_nested_array() {
    let grid = Grid::new(1, 2);
    let value = serde_json::to_value(&grid).unwrap();
    assert_eq!(value.as_array().unwrap().len(), 1);
    assert_eq!(value[0][1]["text"], "2");
    let back: Grid = serde_json::from_value(value).unwrap();
    assert_eq!(back, grid);
}
