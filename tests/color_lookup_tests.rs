use chartjs_rs::core::{NAMED_COLORS, Rgb, color_names, color_rgb, color_rgb_value};
use chartjs_rs::error::ChartError;
use serde_json::json;

#[test]
fn color_lookup_is_case_insensitive() {
    assert_eq!(
        color_rgb("RED", 1.0).expect("red"),
        "rgb(255, 0, 0, 1.000000)"
    );
    assert_eq!(
        color_rgb("CornflowerBlue", 0.5).expect("cornflowerblue"),
        "rgb(100, 149, 237, 0.500000)"
    );
}

#[test]
fn unknown_color_name_is_unknown_key() {
    let err = color_rgb("notacolor", 1.0).expect_err("unknown");
    assert!(matches!(err, ChartError::UnknownKey(_)));
}

#[test]
fn non_string_color_name_is_invalid_type() {
    let err = color_rgb_value(&json!(123), 1.0).expect_err("number");
    assert!(matches!(err, ChartError::InvalidType(_)));

    let err = color_rgb_value(&json!(null), 1.0).expect_err("null");
    assert!(matches!(err, ChartError::InvalidType(_)));
}

#[test]
fn string_json_value_resolves_like_str() {
    assert_eq!(
        color_rgb_value(&json!("Teal"), 0.0).expect("teal"),
        "rgb(0, 128, 128, 0.000000)"
    );
}

#[test]
fn opacity_outside_unit_range_is_rejected() {
    for opacity in [-0.1, 1.5, f64::NAN, f64::INFINITY] {
        let err = color_rgb("red", opacity).expect_err("opacity");
        assert!(matches!(err, ChartError::InvalidArgument(_)), "{opacity}");
    }
}

#[test]
fn table_holds_all_css_names() {
    assert_eq!(NAMED_COLORS.len(), 148);
    assert_eq!(color_names().count(), 148);
    assert!(color_names().any(|name| name == "rebeccapurple"));
}

#[test]
fn every_table_name_round_trips_through_lookup() {
    for (name, rgb) in NAMED_COLORS {
        let expected = format!("rgb({}, {}, {}, 1.000000)", rgb.red, rgb.green, rgb.blue);
        assert_eq!(color_rgb(&name.to_uppercase(), 1.0).expect(name), expected);
    }
}

#[test]
fn spot_check_table_values() {
    let lookup = |name: &str| {
        NAMED_COLORS
            .iter()
            .find(|(candidate, _)| *candidate == name)
            .map(|(_, rgb)| *rgb)
            .expect(name)
    };
    assert_eq!(lookup("aliceblue"), Rgb::new(240, 248, 255));
    assert_eq!(lookup("rebeccapurple"), Rgb::new(102, 51, 153));
    assert_eq!(lookup("yellowgreen"), Rgb::new(154, 205, 50));
}
