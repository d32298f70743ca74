use bar_chart_rs::ChartError;
use bar_chart_rs::core::Color;

#[test]
fn parses_css_color_forms() {
    assert_eq!(
        "rgb(255, 0, 0)".parse::<Color>().expect("rgb"),
        Color::rgb(255, 0, 0)
    );
    assert_eq!(
        "rgba(0,0,0,0.1)".parse::<Color>().expect("rgba"),
        Color::rgba(0, 0, 0, 0.1)
    );
    assert_eq!(
        " #00FF7f ".parse::<Color>().expect("hex"),
        Color::rgb(0, 255, 127)
    );
}

#[test]
fn rejects_malformed_colors() {
    for input in ["hsl(0, 0%, 0%)", "rgb(300, 0, 0)", "rgba(0, 0, 0, 2)", "rgb(1, 2)", "#12"] {
        let err = input.parse::<Color>().expect_err(input);
        assert!(matches!(err, ChartError::InvalidColor(_)), "{input}");
    }
}

#[test]
fn formats_like_css() {
    assert_eq!(Color::rgb(9, 9, 9).to_string(), "rgb(9, 9, 9)");
    assert_eq!(Color::rgba(1, 2, 3, 0.5).to_string(), "rgba(1, 2, 3, 0.5)");
}

#[test]
fn hover_variant_of_primaries_matches_reference_values() {
    let red = Color::rgb(255, 0, 0).saturate(0.5).darken(0.1);
    let blue = Color::rgb(0, 0, 255).saturate(0.5).darken(0.1);
    assert_eq!(red, Color::rgb(230, 0, 0));
    assert_eq!(blue, Color::rgb(0, 0, 230));
}

#[test]
fn darken_keeps_alpha() {
    let color = Color::rgba(200, 100, 50, 0.25).darken(0.5);
    assert_eq!(color.alpha, 0.25);
    assert!(color.red < 200);
}

#[test]
fn mix_blends_channels_and_alpha() {
    let mixed = Color::rgb(0, 0, 0).mix(Color::rgba(255, 255, 255, 0.0), 0.5);
    assert_eq!(mixed, Color::rgba(128, 128, 128, 0.5));
}

#[test]
fn serializes_as_css_string() {
    let json = serde_json::to_string(&Color::rgb(1, 2, 3)).expect("serialize");
    assert_eq!(json, "\"rgb(1, 2, 3)\"");

    let parsed: Color = serde_json::from_str("\"#010203\"").expect("deserialize");
    assert_eq!(parsed, Color::rgb(1, 2, 3));

    assert!(serde_json::from_str::<Color>("\"nope\"").is_err());
}
