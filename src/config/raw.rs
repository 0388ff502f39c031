//! As-parsed configuration document.
//!
//! Every field is captured as a [`Field`], recording whether it was absent,
//! well-typed, or present in a shape that cannot be used. No policy is applied
//! here: deciding what an invalid value means is the resolver's job.

use toml::{Table, Value};

use crate::color::Rgb;
use crate::config::schema::ResolvedConfig;

/// A single document field before resolution.
#[derive(Debug, Clone, PartialEq)]
pub enum Field<T> {
    /// Key not present in the document.
    Absent,
    /// Key present with a usable value.
    Present(T),
    /// Key present but holding the wrong TOML type.
    WrongType { found: &'static str },
    /// Key present with the right type but malformed contents (e.g. a bad RGB triple).
    Malformed(String),
}

impl<T> Field<T> {
    pub fn is_absent(&self) -> bool {
        matches!(self, Field::Absent)
    }

    /// Convert a present value, turning conversion failures into `Malformed`.
    pub fn try_map<U>(self, f: impl FnOnce(T) -> Result<U, String>) -> Field<U> {
        match self {
            Field::Present(value) => match f(value) {
                Ok(converted) => Field::Present(converted),
                Err(reason) => Field::Malformed(reason),
            },
            Field::Absent => Field::Absent,
            Field::WrongType { found } => Field::WrongType { found },
            Field::Malformed(reason) => Field::Malformed(reason),
        }
    }
}

impl<T> Default for Field<T> {
    fn default() -> Self {
        Field::Absent
    }
}

impl<T> From<T> for Field<T> {
    fn from(value: T) -> Self {
        Field::Present(value)
    }
}

/// `[window]` section.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawWindow {
    pub width: Field<f32>,
    pub height: Field<f32>,
    pub title: Field<String>,
    pub msaa_level: Field<i64>,
    pub ui_scale_factor: Field<f32>,
}

/// `[shape]` section.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawShape {
    pub width: Field<f32>,
    pub height: Field<f32>,
    pub corner_radius: Field<f32>,
    pub base_color_rgb: Field<Rgb>,
    pub selection_outline_color_rgb: Field<Rgb>,
    pub selection_outline_width: Field<f32>,
}

/// `[colors]` section.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawColors {
    pub connector_line_rgb: Field<Rgb>,
    pub selected_connector_line_rgb: Field<Rgb>,
    pub preview_connector_line_rgb: Field<Rgb>,
    pub default_port_rgb: Field<Rgb>,
    pub selected_connector_port_rgb: Field<Rgb>,
    pub active_new_line_start_port_rgb: Field<Rgb>,
}

/// The whole document, one [`Field`] per key.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawConfig {
    pub window: RawWindow,
    pub shape: RawShape,
    pub colors: RawColors,
}

const WINDOW_KEYS: &[&str] = &["width", "height", "title", "msaa_level", "ui_scale_factor"];
const SHAPE_KEYS: &[&str] = &[
    "width",
    "height",
    "corner_radius",
    "base_color_rgb",
    "selection_outline_color_rgb",
    "selection_outline_width",
];
const COLOR_KEYS: &[&str] = &[
    "connector_line_rgb",
    "selected_connector_line_rgb",
    "preview_connector_line_rgb",
    "default_port_rgb",
    "selected_connector_port_rgb",
    "active_new_line_start_port_rgb",
];

/// View of one top-level section of the document.
enum Section<'a> {
    Missing,
    Table(&'a Table),
    NotATable(&'static str),
}

impl<'a> Section<'a> {
    fn open(doc: &'a Table, name: &str, known_keys: &[&str]) -> Self {
        match doc.get(name) {
            None => Section::Missing,
            Some(Value::Table(table)) => {
                for key in table.keys().filter(|k| !known_keys.contains(&k.as_str())) {
                    tracing::warn!(path = %format!("{}.{}", name, key), "Unknown config key ignored");
                }
                Section::Table(table)
            }
            Some(other) => Section::NotATable(other.type_str()),
        }
    }

    fn field<T>(&self, key: &str, extract: fn(&Value) -> Field<T>) -> Field<T> {
        match self {
            Section::Missing => Field::Absent,
            Section::NotATable(found) => Field::WrongType { found: *found },
            Section::Table(table) => table.get(key).map_or(Field::Absent, extract),
        }
    }
}

fn float(value: &Value) -> Field<f32> {
    match value {
        Value::Float(f) => {
            let narrowed = *f as f32;
            if f.is_finite() && !narrowed.is_finite() {
                Field::Malformed(format!("{} is out of f32 range", f))
            } else {
                Field::Present(narrowed)
            }
        }
        Value::Integer(i) => Field::Present(*i as f32),
        other => Field::WrongType { found: other.type_str() },
    }
}

fn integer(value: &Value) -> Field<i64> {
    match value {
        Value::Integer(i) => Field::Present(*i),
        other => Field::WrongType { found: other.type_str() },
    }
}

fn string(value: &Value) -> Field<String> {
    match value {
        Value::String(s) => Field::Present(s.clone()),
        other => Field::WrongType { found: other.type_str() },
    }
}

fn color(value: &Value) -> Field<Rgb> {
    let Value::Array(items) = value else {
        return Field::WrongType { found: value.type_str() };
    };

    let components: Vec<Option<i64>> = items.iter().map(Value::as_integer).collect();
    match Rgb::from_components(&components) {
        Ok(rgb) => Field::Present(rgb),
        Err(e) => Field::Malformed(e.to_string()),
    }
}

impl RawConfig {
    /// Parse TOML text into a raw document. Only syntax errors fail here.
    pub fn from_toml_str(text: &str) -> Result<Self, toml::de::Error> {
        let doc: Table = toml::from_str(text)?;
        Ok(Self::from_table(&doc))
    }

    /// Classify every known key of an already-parsed TOML table.
    pub fn from_table(doc: &Table) -> Self {
        for key in doc.keys().filter(|k| !["window", "shape", "colors"].contains(&k.as_str())) {
            tracing::warn!(path = %key, "Unknown config section ignored");
        }

        let window = Section::open(doc, "window", WINDOW_KEYS);
        let shape = Section::open(doc, "shape", SHAPE_KEYS);
        let colors = Section::open(doc, "colors", COLOR_KEYS);

        Self {
            window: RawWindow {
                width: window.field("width", float),
                height: window.field("height", float),
                title: window.field("title", string),
                msaa_level: window.field("msaa_level", integer),
                ui_scale_factor: window.field("ui_scale_factor", float),
            },
            shape: RawShape {
                width: shape.field("width", float),
                height: shape.field("height", float),
                corner_radius: shape.field("corner_radius", float),
                base_color_rgb: shape.field("base_color_rgb", color),
                selection_outline_color_rgb: shape.field("selection_outline_color_rgb", color),
                selection_outline_width: shape.field("selection_outline_width", float),
            },
            colors: RawColors {
                connector_line_rgb: colors.field("connector_line_rgb", color),
                selected_connector_line_rgb: colors.field("selected_connector_line_rgb", color),
                preview_connector_line_rgb: colors.field("preview_connector_line_rgb", color),
                default_port_rgb: colors.field("default_port_rgb", color),
                selected_connector_port_rgb: colors.field("selected_connector_port_rgb", color),
                active_new_line_start_port_rgb: colors
                    .field("active_new_line_start_port_rgb", color),
            },
        }
    }
}

/// A resolved config read back as a fully specified document.
impl From<&ResolvedConfig> for RawConfig {
    fn from(config: &ResolvedConfig) -> Self {
        let window = &config.window;
        let shape = &config.shape;
        let colors = &config.colors;

        Self {
            window: RawWindow {
                width: window.width.into(),
                height: window.height.into(),
                title: window.title.clone().into(),
                msaa_level: i64::from(window.msaa_level.samples()).into(),
                ui_scale_factor: window.ui_scale_factor.into(),
            },
            shape: RawShape {
                width: shape.width.into(),
                height: shape.height.into(),
                corner_radius: shape.corner_radius.into(),
                base_color_rgb: shape.base_color_rgb.into(),
                selection_outline_color_rgb: shape.selection_outline_color_rgb.into(),
                selection_outline_width: shape.selection_outline_width.into(),
            },
            colors: RawColors {
                connector_line_rgb: colors.connector_line_rgb.into(),
                selected_connector_line_rgb: colors.selected_connector_line_rgb.into(),
                preview_connector_line_rgb: colors.preview_connector_line_rgb.into(),
                default_port_rgb: colors.default_port_rgb.into(),
                selected_connector_port_rgb: colors.selected_connector_port_rgb.into(),
                active_new_line_start_port_rgb: colors.active_new_line_start_port_rgb.into(),
            },
        }
    }
}
