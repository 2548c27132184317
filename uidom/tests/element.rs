use uidom::{
    count_elements, find_element, Align, Border, Color, Content, DefaultTheme, Direction,
    EmptyTheme, Element, Justify, Rgb, Role, Style,
};

#[test]
fn test_generated_ids_are_unique() {
    let a = Element::box_();
    let b = Element::box_();
    assert_ne!(a.id, b.id);
    assert!(a.id.starts_with("box-"));
}

#[test]
fn test_row_and_pressable_defaults() {
    let row = Element::row();
    assert_eq!(row.direction, Direction::Row);
    assert!(!row.clickable);

    let pressable = Element::pressable();
    assert!(pressable.clickable);
    assert!(pressable.focusable);
    assert!(!pressable.disabled);
}

#[test]
fn test_child_appends() {
    let el = Element::col()
        .child(Element::text("a"))
        .children([Element::text("b"), Element::text("c")]);
    assert_eq!(el.child_elements().len(), 3);
    assert_eq!(count_elements(&el), 4);
}

#[test]
fn test_text_has_no_children() {
    let el = Element::text("hello");
    assert!(el.child_elements().is_empty());
    assert_eq!(el.content, Content::Text("hello".into()));
}

#[test]
fn test_find_element_nested() {
    let tree = Element::col().id("root").child(
        Element::row()
            .id("row")
            .child(Element::text("x").id("leaf")),
    );
    assert!(find_element(&tree, "leaf").is_some());
    assert!(find_element(&tree, "missing").is_none());
}

#[test]
fn test_semantic_builders() {
    let el = Element::pressable()
        .native_id("n1")
        .role(Role::Button)
        .aria_expanded(true)
        .aria_labelled_by("n0")
        .justify(Justify::SpaceBetween)
        .align(Align::Center);
    assert_eq!(el.native_id.as_deref(), Some("n1"));
    assert_eq!(el.role, Some(Role::Button));
    assert_eq!(el.aria.expanded, Some(true));
    assert_eq!(el.aria.labelled_by.as_deref(), Some("n0"));
}

#[test]
fn test_dump_is_indented_and_includes_semantics() {
    let tree = Element::col()
        .id("root")
        .role(Role::Presentation)
        .data("testID", "faq")
        .child(
            Element::pressable()
                .id("trigger")
                .native_id("n1")
                .aria_expanded(false)
                .disabled(true),
        )
        .child(Element::text("hi").id("label"));

    let dump = tree.dump();
    let lines: Vec<&str> = dump.lines().collect();
    assert_eq!(lines[0], "<root role=presentation testID=\"faq\">");
    assert_eq!(lines[1], "  <trigger nativeID=n1 aria-expanded=false disabled>");
    assert_eq!(lines[2], "  <label> \"hi\"");
}

#[test]
fn test_dump_prints_generated_ids() {
    let a = Element::col().id("root").child(Element::text("hi"));
    let b = Element::col().id("root").child(Element::text("hi"));
    assert_ne!(a.dump(), b.dump());
    assert!(a.dump().lines().nth(1).unwrap().starts_with("  <text-"));
}

#[test]
fn test_style_merge_overrides_win() {
    let base = Style::new()
        .background(Color::var("background"))
        .border(Border::Hairline, Color::var("input"))
        .radius(6);
    let extra = Style::new().background(Color::var("accent")).opacity(0.5);

    let merged = base.merge(&extra);
    assert_eq!(merged.background, Some(Color::var("accent")));
    assert_eq!(merged.border, Some(Border::Hairline));
    assert_eq!(merged.radius, Some(6));
    assert_eq!(merged.opacity, Some(0.5));
}

#[test]
fn test_opacity_clamped() {
    assert_eq!(Style::new().opacity(2.0).opacity, Some(1.0));
}

#[test]
fn test_color_resolution() {
    let theme = DefaultTheme::new();
    assert_eq!(Color::rgb(1, 2, 3).to_rgb(&theme), Rgb::new(1, 2, 3));
    let white = Color::var("background").to_rgb(&theme);
    assert!(white.r >= 254 && white.g >= 254 && white.b >= 254);
    assert_eq!(Color::var("missing").to_rgb(&theme), Rgb::default());
    assert_eq!(Color::var("background").to_rgb(&EmptyTheme), Rgb::default());
}

#[test]
fn test_color_dsl() {
    assert_eq!(Color::rgb(1, 2, 3).to_dsl(), "rgb(1, 2, 3)");
    assert_eq!(Color::var("border").to_dsl(), "border");
    assert_eq!(Color::oklcha(0.5, 0.1, 20.0, 0.5).to_dsl(), "oklch(0.5, 0.1, 20, 0.5)");
}
