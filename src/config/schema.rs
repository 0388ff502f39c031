//! Resolved configuration schema.
//!
//! These types are the output of resolution: every field is populated and every
//! invariant already holds. They serialize back to the same TOML layout the
//! document uses, so a resolved config can be written out and read again.

use std::sync::Arc;

use serde::Serialize;

use crate::color::Rgb;

/// Read-only handle the host keeps for the lifetime of the process.
pub type SharedConfig = Arc<ResolvedConfig>;

pub const DEFAULT_UI_SCALE_FACTOR: f32 = 1.0;
pub const DEFAULT_SELECTION_OUTLINE_COLOR: Rgb = Rgb::new(255, 255, 0);
pub const DEFAULT_SELECTION_OUTLINE_WIDTH: f32 = 2.0;

/// Fully resolved settings for the shape editor.
///
/// Only [`crate::config::resolve`] builds one from a document. Serialize-only:
/// reading a document back always goes through resolution.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct ResolvedConfig {
    /// Window setup.
    pub window: WindowConfig,

    /// Defaults for newly placed shapes.
    pub shape: ShapeConfig,

    /// Connector and port colors.
    pub colors: ColorsConfig,
}

impl ResolvedConfig {
    /// Wrap in an `Arc` for sharing with the renderer and UI layer.
    pub fn into_shared(self) -> SharedConfig {
        Arc::new(self)
    }

    /// Render in the document layout, suitable for feeding back into the loader.
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

/// Multisample anti-aliasing sample count accepted by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
#[serde(into = "u8")]
pub enum MsaaLevel {
    One,
    #[default]
    Four,
}

impl MsaaLevel {
    pub fn samples(self) -> u8 {
        match self {
            MsaaLevel::One => 1,
            MsaaLevel::Four => 4,
        }
    }

    /// Map a raw sample count to a supported level.
    pub fn from_samples(samples: i64) -> Option<Self> {
        match samples {
            1 => Some(MsaaLevel::One),
            4 => Some(MsaaLevel::Four),
            _ => None,
        }
    }
}

impl From<MsaaLevel> for u8 {
    fn from(level: MsaaLevel) -> Self {
        level.samples()
    }
}

/// `[window]` section.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WindowConfig {
    /// Initial window width in logical pixels.
    pub width: f32,

    /// Initial window height in logical pixels.
    pub height: f32,

    /// Window title.
    pub title: String,

    pub msaa_level: MsaaLevel,

    /// Multiplier for UI element sizes.
    pub ui_scale_factor: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            title: "Shapes".to_string(),
            msaa_level: MsaaLevel::default(),
            ui_scale_factor: DEFAULT_UI_SCALE_FACTOR,
        }
    }
}

/// `[shape]` section.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShapeConfig {
    pub width: f32,
    pub height: f32,

    /// Never exceeds half the shorter side.
    pub corner_radius: f32,

    /// Fill color.
    pub base_color_rgb: Rgb,

    /// Outline drawn around the selected shape.
    pub selection_outline_color_rgb: Rgb,

    pub selection_outline_width: f32,
}

impl ShapeConfig {
    /// Largest corner radius that still fits the shape.
    pub fn max_corner_radius(&self) -> f32 {
        self.width.min(self.height) / 2.0
    }
}

impl Default for ShapeConfig {
    fn default() -> Self {
        Self {
            width: 120.0,
            height: 70.0,
            corner_radius: 10.0,
            base_color_rgb: Rgb::new(100, 200, 255),
            selection_outline_color_rgb: DEFAULT_SELECTION_OUTLINE_COLOR,
            selection_outline_width: DEFAULT_SELECTION_OUTLINE_WIDTH,
        }
    }
}

/// `[colors]` section.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorsConfig {
    pub connector_line_rgb: Rgb,
    pub selected_connector_line_rgb: Rgb,

    /// Line shown while dragging a new connection. Drawn translucent, see
    /// [`crate::color::PREVIEW_CONNECTOR_ALPHA`].
    pub preview_connector_line_rgb: Rgb,

    pub default_port_rgb: Rgb,
    pub selected_connector_port_rgb: Rgb,

    /// Port a new line is being dragged from.
    pub active_new_line_start_port_rgb: Rgb,
}

impl Default for ColorsConfig {
    fn default() -> Self {
        Self {
            connector_line_rgb: Rgb::WHITE,
            selected_connector_line_rgb: Rgb::new(255, 255, 0),
            preview_connector_line_rgb: Rgb::new(200, 200, 200),
            default_port_rgb: Rgb::WHITE,
            selected_connector_port_rgb: Rgb::new(255, 165, 0),
            active_new_line_start_port_rgb: Rgb::new(0, 255, 0),
        }
    }
}
