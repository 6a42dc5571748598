//! End-to-end tests: options in, box text out.

use boxen_protocol::{
    Alignment, BoxOptions, BoxRequest, BoxenError, Insets, SizeRole, SizeSpec, resolve_size,
};
use boxen_render::{Boxen, RenderError, TerminalRenderer};
use serde_json::json;

fn boxen() -> Boxen {
    Boxen::new(TerminalRenderer::new(80, false))
}

#[test]
fn padded_rounded_box() {
    let options = BoxOptions::new().with_style("rounded").with_padding(1u16);
    let rendered = boxen().render(["hello"], &options).unwrap();

    let lines: Vec<&str> = rendered.lines().collect();
    assert_eq!(lines.len(), 5);
    assert!(lines[0].starts_with('╭') && lines[0].ends_with('╮'));
    assert!(lines[4].starts_with('╰') && lines[4].ends_with('╯'));
    assert_eq!(lines[1], "│           │");
    assert_eq!(lines[2], "│   hello   │");
    assert_eq!(lines[3], "│           │");
}

#[test]
fn centered_title_in_top_border() {
    let options = BoxOptions {
        title_alignment: "center".to_string(),
        ..BoxOptions::new().with_title("T")
    };
    let rendered = boxen().render(["x"], &options).unwrap();
    assert_eq!(rendered, "╭ T ╮\n│ x │\n╰───╯\n");
}

#[test]
fn rendering_is_idempotent() {
    let options = BoxOptions::new()
        .with_style("double")
        .with_padding((1, 2))
        .with_margin(1u16)
        .with_title("Same")
        .with_subtitle("Again");
    let boxen = Boxen::new(TerminalRenderer::new(40, true));
    assert_eq!(
        boxen.render(["a", "bb\nccc"], &options).unwrap(),
        boxen.render(["a", "bb\nccc"], &options).unwrap()
    );
}

#[test]
fn defaults_validate() {
    let options = BoxOptions::default();
    assert!(options.validate().is_ok());
    assert_eq!(options.text_align().unwrap(), Alignment::Center);
    assert_eq!(options.box_align().unwrap(), Alignment::Left);
}

#[test]
fn unknown_style_lists_valid_keys() {
    let err = boxen()
        .render(["x"], &BoxOptions::new().with_style("not_a_style"))
        .unwrap_err();
    let RenderError::Invalid(BoxenError::InvalidStyle { valid, .. }) = &err else {
        panic!("unexpected error: {err}");
    };
    for key in ["ascii", "ascii2", "rounded", "heavy", "double", "horizontals"] {
        assert!(valid.contains(key), "{key} missing from {valid}");
    }
}

#[test]
fn unknown_text_alignment_is_rejected() {
    let options = BoxOptions {
        text_alignment: "up".to_string(),
        ..Default::default()
    };
    let err = boxen().render(["x"], &options).unwrap_err();
    assert!(matches!(
        err,
        RenderError::Invalid(BoxenError::InvalidAlignment { .. })
    ));
}

#[test]
fn mistyped_fullwidth_is_rejected() {
    let err = BoxOptions::from_value(&json!({ "fullwidth": "yes" })).unwrap_err();
    assert!(matches!(err, BoxenError::InvalidType { ref field, .. } if field == "fullwidth"));
}

#[test]
fn unknown_option_is_rejected() {
    let err = BoxOptions::from_value(&json!({ "shadow": true })).unwrap_err();
    assert_eq!(err, BoxenError::UnknownOption("shadow".to_string()));
}

#[test]
fn untyped_options_render() {
    let options = BoxOptions::from_value(&json!({
        "style": "ascii",
        "padding": [0, 1],
        "title": null,
    }))
    .unwrap();
    assert_eq!(boxen().render(["ok"], &options).unwrap(), "+----+\n| ok |\n+----+\n");
}

#[test]
fn size_resolution() {
    assert_eq!(
        resolve_size(&SizeSpec::Uniform(2), SizeRole::Padding).unwrap(),
        Insets::new(2, 6, 2, 6)
    );
    assert_eq!(
        resolve_size(&SizeSpec::from((1, 2)), SizeRole::Margin).unwrap(),
        Insets::new(1, 2, 1, 2)
    );
    for len in [1, 3, 5] {
        let err = resolve_size(&SizeSpec::Tuple(vec![0; len]), SizeRole::Margin).unwrap_err();
        assert_eq!(err, BoxenError::InvalidSize { role: "margin", len });
    }
    assert!(matches!(
        SizeSpec::from_value(&json!("text"), SizeRole::Padding),
        Err(BoxenError::InvalidType { .. })
    ));
}

#[test]
fn request_can_be_rendered_directly() {
    use boxen_render::Renderer;

    let request = BoxRequest::new(["direct"], &BoxOptions::new().with_style("square")).unwrap();
    let rendered = TerminalRenderer::new(30, false).render(&request).unwrap();
    assert_eq!(rendered, "┌──────┐\n│direct│\n└──────┘\n");
}
