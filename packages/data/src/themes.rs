//! Theme registry, loaded from an embedded TOML config.
//!
//! `themes/themes.toml` is baked into the binary at compile time via
//! [`include_str!`]. It lists the files of every canonical theme (merged in
//! order) and of the flat static layers.

use resolve_map_survey_models::{LayerId, Theme};
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// TOML config embedded at compile time.
const THEMES_TOML: &str = include_str!("../themes/themes.toml");

/// Geometry kind of a layer.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum LayerKind {
    /// Point features
    Point,
    /// Polygon features
    Polygon,
}

/// One canonical bilingual theme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeDefinition {
    /// The theme.
    pub theme: Theme,
    /// Presentation colour.
    pub color: String,
    /// Source files, merged in order.
    pub files: Vec<String>,
}

impl ThemeDefinition {
    /// The map layer this theme backs.
    #[must_use]
    pub const fn layer(&self) -> LayerId {
        self.theme.layer_id()
    }

    /// Cache key of one of this theme's files.
    #[must_use]
    pub fn cache_key(&self, file: &str) -> String {
        format!("{}_{file}", self.theme)
    }
}

/// One flat, language-unaware layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaticLayerDefinition {
    /// Short name (`fire`, `preservations`, `predictions`).
    pub key: String,
    /// The map layer this file backs.
    pub layer: LayerId,
    /// Geometry kind.
    pub kind: LayerKind,
    /// Presentation colour.
    pub color: String,
    /// Source file.
    pub file: String,
}

impl StaticLayerDefinition {
    /// Cache key of this layer's file.
    #[must_use]
    pub fn cache_key(&self) -> String {
        format!("static_{}", self.key)
    }
}

/// Every configured theme and static layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registry {
    /// Canonical themes.
    pub themes: Vec<ThemeDefinition>,
    /// Flat layers.
    pub static_layers: Vec<StaticLayerDefinition>,
}

impl Registry {
    /// Definition of `theme`, if configured.
    #[must_use]
    pub fn theme(&self, theme: Theme) -> Option<&ThemeDefinition> {
        self.themes.iter().find(|def| def.theme == theme)
    }

    /// Definition of the static layer backing `layer`, if configured.
    #[must_use]
    pub fn static_layer(&self, layer: LayerId) -> Option<&StaticLayerDefinition> {
        self.static_layers.iter().find(|def| def.layer == layer)
    }

    /// Total number of files across themes and static layers.
    #[must_use]
    pub fn file_count(&self) -> usize {
        self.themes.iter().map(|def| def.files.len()).sum::<usize>() + self.static_layers.len()
    }
}

/// Parses a registry from TOML text.
///
/// # Errors
///
/// Returns [`toml::de::Error`] if the text is not a valid registry.
pub fn parse_registry(text: &str) -> Result<Registry, toml::de::Error> {
    toml::from_str(text)
}

/// Returns the embedded registry.
///
/// # Panics
///
/// Panics if the embedded TOML is malformed. It is a compile-time constant,
/// so a failure here is a development error caught by the tests below.
#[must_use]
pub fn registry() -> Registry {
    parse_registry(THEMES_TOML).unwrap_or_else(|e| panic!("Failed to parse themes.toml: {e}"))
}
