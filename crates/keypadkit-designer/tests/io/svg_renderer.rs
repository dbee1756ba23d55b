use keypadkit_core::Color;
use keypadkit_designer::svg_renderer::render_document;
use keypadkit_designer::{render_keypad, ContentType, KeypadDesign, RenderOptions};

fn svg_for(design: &KeypadDesign) -> String {
    render_document(&render_keypad(design, &RenderOptions::default()))
}

#[test]
fn test_root_sized_in_device_units_with_mm_view_box() {
    let mut design = KeypadDesign::new();
    design.set_dimensions(2, 2);
    let svg = svg_for(&design);
    assert!(svg.starts_with("<?xml"));
    assert!(svg.contains(r#"viewBox="0 0 43 43""#));
    assert!(svg.contains(r#"width="162.5197""#));
    assert!(svg.contains(r#"height="162.5197""#));
}

#[test]
fn test_one_group_per_button() {
    let mut design = KeypadDesign::new();
    design.set_dimensions(3, 2);
    let svg = svg_for(&design);
    assert_eq!(svg.matches("<g ").count(), 6);
    assert!(svg.contains(r#"<g data-row="0" data-col="0" transform="translate(5.5, 5.5)">"#));
    assert!(svg.contains(r#"<g data-row="2" data-col="1" transform="translate(22.5, 39.5)">"#));
}

#[test]
fn test_multi_line_label_uses_tspans() {
    let mut design = KeypadDesign::new();
    design.set_button_text(0, 0, "Zero|Probe").unwrap();
    let svg = svg_for(&design);
    assert!(svg.contains(r#"<tspan x="7.5" y="2.7" dominant-baseline="central">Zero</tspan>"#));
    assert!(svg.contains(r#"<tspan x="7.5" y="12.3" dominant-baseline="central">Probe</tspan>"#));
}

#[test]
fn test_single_line_label_centered() {
    let svg = svg_for(&KeypadDesign::new());
    assert!(svg.contains(r#"y="7.5" dominant-baseline="central">5</text>"#));
    assert!(svg.contains(r#"text-anchor="middle""#));
    assert!(svg.contains(r#"font-family="Arial, sans-serif""#));
}

#[test]
fn test_labels_are_escaped() {
    let mut design = KeypadDesign::new();
    design.set_button_text(0, 0, "<F&1>").unwrap();
    let svg = svg_for(&design);
    assert!(svg.contains("&lt;F&amp;1&gt;"));
    assert!(!svg.contains("<F&1>"));
}

#[test]
fn test_symbols_in_document() {
    let mut design = KeypadDesign::new();
    let kinds = [
        ContentType::Circle,
        ContentType::Triangle,
        ContentType::Square,
        ContentType::Play,
        ContentType::Stop,
        ContentType::Menu,
        ContentType::Gear,
    ];
    for (i, kind) in kinds.iter().enumerate() {
        design.set_button_content_type(i / 4, i % 4, *kind).unwrap();
    }
    let svg = svg_for(&design);
    assert!(svg.contains("<circle"));
    assert_eq!(svg.matches("<polygon").count(), 2);
    assert_eq!(svg.matches("<line").count(), 3);
    assert!(svg.contains(r#"stroke-linecap="round""#));
    assert!(svg.contains(r#"fill-rule="evenodd""#));
    assert!(svg.contains("scale(0.25)"));
}

#[test]
fn test_override_color_in_output() {
    let mut design = KeypadDesign::new();
    design
        .set_button_color(0, 0, Some(Color::rgb(0xff, 0, 0)))
        .unwrap();
    let svg = svg_for(&design);
    assert!(svg.contains(r##"fill="#ff0000""##));
}
