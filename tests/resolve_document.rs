//! End-to-end resolution of TOML documents.

use shapes_config::color::Rgb;
use shapes_config::config::{parse_config, resolve, ConfigError, MsaaLevel, RawConfig};
use shapes_config::config::schema::ColorsConfig;

mod common;

use common::{doc_with, doc_without, MINIMAL_DOC};

#[test]
fn test_minimal_document_resolves() {
    let config = parse_config(MINIMAL_DOC).unwrap();

    assert_eq!(config.window.width, 1024.0);
    assert_eq!(config.window.height, 768.0);
    assert_eq!(config.window.title, "Flow Editor");
    assert_eq!(config.window.msaa_level, MsaaLevel::Four);
    assert_eq!(config.window.ui_scale_factor, 1.0);
    assert_eq!(config.shape.corner_radius, 12.0);
    assert_eq!(config.shape.base_color_rgb, Rgb::new(80, 150, 220));
    assert_eq!(config.colors, ColorsConfig::default());
}

#[test]
fn test_msaa_level() {
    let config = parse_config(&doc_with("window", "msaa_level = 2")).unwrap();
    assert_eq!(config.window.msaa_level.samples(), 4);

    let config = parse_config(&doc_with("window", "msaa_level = 1")).unwrap();
    assert_eq!(config.window.msaa_level.samples(), 1);

    let config = parse_config(&doc_with("window", "msaa_level = \"four\"")).unwrap();
    assert_eq!(config.window.msaa_level.samples(), 4);
}

#[test]
fn test_ui_scale_factor() {
    let config = parse_config(&doc_with("window", "ui_scale_factor = 2.0")).unwrap();
    assert_eq!(config.window.ui_scale_factor, 2.0);

    let config = parse_config(&doc_with("window", "ui_scale_factor = -1.5")).unwrap();
    assert_eq!(config.window.ui_scale_factor, 1.0);
}

#[test]
fn test_optional_colors() {
    let doc = doc_with(
        "colors",
        "connector_line_rgb = [10, 20, 30]\ndefault_port_rgb = [1, 2]\nselected_connector_port_rgb = [0, 0, 256]",
    );
    let config = parse_config(&doc).unwrap();

    assert_eq!(config.colors.connector_line_rgb, Rgb::new(10, 20, 30));
    assert_eq!(config.colors.default_port_rgb, ColorsConfig::default().default_port_rgb);
    assert_eq!(
        config.colors.selected_connector_port_rgb,
        ColorsConfig::default().selected_connector_port_rgb
    );
}

#[test]
fn test_selection_outline() {
    let doc = doc_with(
        "shape",
        "selection_outline_color_rgb = [0, 128, 255]\nselection_outline_width = 3.5",
    );
    let config = parse_config(&doc).unwrap();
    assert_eq!(config.shape.selection_outline_color_rgb, Rgb::new(0, 128, 255));
    assert_eq!(config.shape.selection_outline_width, 3.5);

    let config = parse_config(&doc_with("shape", "selection_outline_width = -1.0")).unwrap();
    assert_eq!(config.shape.selection_outline_width, 2.0);
}

#[test]
fn test_missing_window_width() {
    let err = parse_config(&doc_without("width = 1024.0")).unwrap_err();
    assert!(matches!(&err, ConfigError::MissingField(path) if path == "window.width"));
}

#[test]
fn test_missing_section() {
    let doc = MINIMAL_DOC.split("[shape]").next().unwrap();
    let err = parse_config(doc).unwrap_err();
    assert!(matches!(&err, ConfigError::MissingField(path) if path == "shape.width"));
}

#[test]
fn test_wrong_type_title() {
    let doc = MINIMAL_DOC.replace("title = \"Flow Editor\"", "title = 7");
    let err = parse_config(&doc).unwrap_err();
    assert!(matches!(&err, ConfigError::InvalidType { path, found: "integer" } if path == "window.title"));
}

#[test]
fn test_base_color_out_of_range() {
    let doc = MINIMAL_DOC.replace("[80, 150, 220]", "[300, 0, 0]");
    let err = parse_config(&doc).unwrap_err();
    assert!(matches!(&err, ConfigError::InvalidColor { path, .. } if path == "shape.base_color_rgb"));
}

#[test]
fn test_base_color_wrong_arity() {
    let doc = MINIMAL_DOC.replace("[80, 150, 220]", "[80, 150, 220, 255]");
    let err = parse_config(&doc).unwrap_err();
    assert_eq!(err.path(), Some("shape.base_color_rgb"));
    assert!(err.to_string().contains("expected 3 components, got 4"));
}

#[test]
fn test_corner_radius_clamped_to_shape() {
    let doc = MINIMAL_DOC.replace("corner_radius = 12.0", "corner_radius = 60.0");
    let config = parse_config(&doc).unwrap();
    assert_eq!(config.shape.corner_radius, 40.0);
    assert_eq!(config.shape.corner_radius, config.shape.max_corner_radius());
}

#[test]
fn test_unknown_keys_ignored() {
    let doc = doc_with("window", "vsync = true");
    let doc = format!("{}\n[theme]\nname = \"dark\"\n", doc);
    assert!(parse_config(&doc).is_ok());
}

#[test]
fn test_resolution_is_idempotent() {
    let doc = doc_with("window", "msaa_level = 1\nui_scale_factor = 1.25");
    let config = parse_config(&doc).unwrap();

    let again = resolve(RawConfig::from(&config)).unwrap();
    assert_eq!(again, config);

    let text = config.to_toml_string().unwrap();
    assert_eq!(parse_config(&text).unwrap(), config);
}

#[test]
fn test_out_of_range_document_never_resolves() {
    let doc = r#"
[window]
width = -5.0
height = 0.0
title = ""
ui_scale_factor = -3.0

[shape]
width = 10.0
height = 10.0
corner_radius = 500.0
base_color_rgb = [1, 2, 3]
selection_outline_width = -1.0
"#;
    let err = parse_config(doc).unwrap_err();
    assert!(matches!(&err, ConfigError::InvalidValue { path, .. } if path == "window.width"));

    let doc = doc
        .replace("width = -5.0", "width = 5.0")
        .replace("height = 0.0", "height = 4.0")
        .replace("title = \"\"", "title = \"t\"");
    let config = parse_config(&doc).unwrap();
    assert_eq!(config.window.ui_scale_factor, 1.0);
    assert_eq!(config.shape.corner_radius, 5.0);
    assert_eq!(config.shape.selection_outline_width, 2.0);
}

#[test]
fn test_float_beyond_f32_range() {
    let doc = MINIMAL_DOC.replace("width = 1024.0", "width = 1e39");
    let err = parse_config(&doc).unwrap_err();
    assert_eq!(err.path(), Some("window.width"));
    assert!(err.to_string().contains("out of f32 range"));
    assert!(!err.to_string().contains("inf"));

    let config = parse_config(&doc_with("window", "ui_scale_factor = 1e300")).unwrap();
    assert_eq!(config.window.ui_scale_factor, 1.0);
}

#[test]
fn test_title_only_needs_to_be_non_empty() {
    let doc = MINIMAL_DOC.replace("title = \"Flow Editor\"", "title = \" \"");
    assert_eq!(parse_config(&doc).unwrap().window.title, " ");

    let doc = MINIMAL_DOC.replace("title = \"Flow Editor\"", "title = \"\"");
    let err = parse_config(&doc).unwrap_err();
    assert!(matches!(&err, ConfigError::InvalidValue { path, .. } if path == "window.title"));
}
