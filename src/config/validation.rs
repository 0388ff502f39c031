//! Configuration resolution.
//!
//! # Responsibilities
//! - Collapse each [`Field`] of a [`RawConfig`] into a concrete value
//! - Reject absent or mistyped required fields
//! - Replace absent or invalid optional fields with their defaults
//! - Clamp the corner radius to the shape's size
//!
//! # Design Decisions
//! - Resolution is a pure function: RawConfig → Result<ResolvedConfig, ConfigError>
//! - Required fields fail fast with the key path of the first offender
//! - Optional fields never fail; each is described by a [`Fallback`]

use std::fmt::Debug;

use crate::color::Rgb;
use crate::config::loader::ConfigError;
use crate::config::raw::{Field, RawColors, RawConfig, RawShape, RawWindow};
use crate::config::schema::{
    ColorsConfig, MsaaLevel, ResolvedConfig, ShapeConfig, WindowConfig,
    DEFAULT_SELECTION_OUTLINE_COLOR, DEFAULT_SELECTION_OUTLINE_WIDTH, DEFAULT_UI_SCALE_FACTOR,
};

/// An optional field: its key path, default, and validity predicate.
#[derive(Debug, Clone)]
pub struct Fallback<T> {
    pub path: &'static str,
    pub default: T,
    pub is_valid: fn(&T) -> bool,
}

impl<T: Clone + Debug> Fallback<T> {
    pub const fn new(path: &'static str, default: T, is_valid: fn(&T) -> bool) -> Self {
        Self { path, default, is_valid }
    }

    /// Take the field's value if it is present and valid, else the default.
    pub fn apply(&self, field: Field<T>) -> T {
        match field {
            Field::Present(value) if (self.is_valid)(&value) => value,
            Field::Absent => {
                tracing::debug!(path = self.path, default = ?self.default, "Field omitted, using default");
                self.default.clone()
            }
            Field::Present(value) => {
                tracing::warn!(
                    path = self.path,
                    value = ?value,
                    default = ?self.default,
                    "Value out of range, using default"
                );
                self.default.clone()
            }
            Field::WrongType { found } => {
                tracing::warn!(path = self.path, found, default = ?self.default, "Wrong type, using default");
                self.default.clone()
            }
            Field::Malformed(reason) => {
                tracing::warn!(path = self.path, %reason, default = ?self.default, "Invalid value, using default");
                self.default.clone()
            }
        }
    }
}

fn positive(value: &f32) -> bool {
    value.is_finite() && *value > 0.0
}

fn non_negative(value: &f32) -> bool {
    value.is_finite() && *value >= 0.0
}

fn any<T>(_: &T) -> bool {
    true
}

const MSAA_LEVEL: Fallback<MsaaLevel> = Fallback::new("window.msaa_level", MsaaLevel::Four, any);
const UI_SCALE_FACTOR: Fallback<f32> =
    Fallback::new("window.ui_scale_factor", DEFAULT_UI_SCALE_FACTOR, positive);
const SELECTION_OUTLINE_COLOR: Fallback<Rgb> = Fallback::new(
    "shape.selection_outline_color_rgb",
    DEFAULT_SELECTION_OUTLINE_COLOR,
    any,
);
const SELECTION_OUTLINE_WIDTH: Fallback<f32> = Fallback::new(
    "shape.selection_outline_width",
    DEFAULT_SELECTION_OUTLINE_WIDTH,
    non_negative,
);

/// Turn a raw document into a fully populated config.
///
/// Fails only on required fields; nothing is returned on failure.
pub fn resolve(raw: RawConfig) -> Result<ResolvedConfig, ConfigError> {
    let RawConfig { window, shape, colors } = raw;

    Ok(ResolvedConfig {
        window: resolve_window(window)?,
        shape: resolve_shape(shape)?,
        colors: resolve_colors(colors),
    })
}

fn resolve_window(raw: RawWindow) -> Result<WindowConfig, ConfigError> {
    let width = required_positive("window.width", raw.width)?;
    let height = required_positive("window.height", raw.height)?;

    let title = required("window.title", raw.title)?;
    if title.is_empty() {
        return Err(ConfigError::InvalidValue {
            path: "window.title".to_string(),
            reason: "must not be empty".to_string(),
        });
    }

    let msaa_level = MSAA_LEVEL.apply(raw.msaa_level.try_map(|samples| {
        MsaaLevel::from_samples(samples)
            .ok_or_else(|| format!("{} is not a supported sample count (valid: 1, 4)", samples))
    }));

    Ok(WindowConfig {
        width,
        height,
        title,
        msaa_level,
        ui_scale_factor: UI_SCALE_FACTOR.apply(raw.ui_scale_factor),
    })
}

fn resolve_shape(raw: RawShape) -> Result<ShapeConfig, ConfigError> {
    let width = required_positive("shape.width", raw.width)?;
    let height = required_positive("shape.height", raw.height)?;

    let corner_radius = required("shape.corner_radius", raw.corner_radius)?;
    if !corner_radius.is_finite() {
        return Err(ConfigError::InvalidValue {
            path: "shape.corner_radius".to_string(),
            reason: format!("must be a finite number, got {}", corner_radius),
        });
    }

    let base_color_rgb = required_color("shape.base_color_rgb", raw.base_color_rgb)?;

    Ok(ShapeConfig {
        width,
        height,
        corner_radius: clamp_corner_radius(corner_radius, width, height),
        base_color_rgb,
        selection_outline_color_rgb: SELECTION_OUTLINE_COLOR.apply(raw.selection_outline_color_rgb),
        selection_outline_width: SELECTION_OUTLINE_WIDTH.apply(raw.selection_outline_width),
    })
}

fn resolve_colors(raw: RawColors) -> ColorsConfig {
    let defaults = ColorsConfig::default();
    let color = |path: &'static str, default: Rgb| Fallback::new(path, default, any);

    ColorsConfig {
        connector_line_rgb: color("colors.connector_line_rgb", defaults.connector_line_rgb)
            .apply(raw.connector_line_rgb),
        selected_connector_line_rgb: color(
            "colors.selected_connector_line_rgb",
            defaults.selected_connector_line_rgb,
        )
        .apply(raw.selected_connector_line_rgb),
        preview_connector_line_rgb: color(
            "colors.preview_connector_line_rgb",
            defaults.preview_connector_line_rgb,
        )
        .apply(raw.preview_connector_line_rgb),
        default_port_rgb: color("colors.default_port_rgb", defaults.default_port_rgb)
            .apply(raw.default_port_rgb),
        selected_connector_port_rgb: color(
            "colors.selected_connector_port_rgb",
            defaults.selected_connector_port_rgb,
        )
        .apply(raw.selected_connector_port_rgb),
        active_new_line_start_port_rgb: color(
            "colors.active_new_line_start_port_rgb",
            defaults.active_new_line_start_port_rgb,
        )
        .apply(raw.active_new_line_start_port_rgb),
    }
}

/// Clamp a radius into `[0, min(width, height) / 2]`.
fn clamp_corner_radius(radius: f32, width: f32, height: f32) -> f32 {
    let max = width.min(height) / 2.0;
    let clamped = radius.clamp(0.0, max);
    if clamped != radius {
        tracing::warn!(
            path = "shape.corner_radius",
            value = radius,
            clamped,
            "Corner radius out of range, clamping"
        );
    }
    clamped
}

fn required<T>(path: &str, field: Field<T>) -> Result<T, ConfigError> {
    match field {
        Field::Present(value) => Ok(value),
        Field::Absent => Err(ConfigError::MissingField(path.to_string())),
        Field::WrongType { found } => Err(ConfigError::InvalidType {
            path: path.to_string(),
            found,
        }),
        Field::Malformed(reason) => Err(ConfigError::InvalidValue {
            path: path.to_string(),
            reason,
        }),
    }
}

fn required_positive(path: &str, field: Field<f32>) -> Result<f32, ConfigError> {
    let value = required(path, field)?;
    if !positive(&value) {
        return Err(ConfigError::InvalidValue {
            path: path.to_string(),
            reason: format!("must be greater than 0, got {}", value),
        });
    }
    Ok(value)
}

fn required_color(path: &str, field: Field<Rgb>) -> Result<Rgb, ConfigError> {
    match field {
        Field::Malformed(reason) => Err(ConfigError::InvalidColor {
            path: path.to_string(),
            reason,
        }),
        other => required(path, other),
    }
}
