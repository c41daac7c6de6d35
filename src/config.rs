//! Runtime configuration: built-in defaults, the optional JSON5 config
//! file, and the merge between the two.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::theme::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum LayoutVariant {
    Compact,
    #[default]
    Wide,
    Bento,
    Tall,
}

#[derive(Debug, Clone)]
pub struct LayoutConfig {
    pub variant: LayoutVariant,
    /// Overrides the variant's built-in language cap when set.
    pub max_languages: Option<usize>,
    pub sparkline_samples: usize,
    pub sparkline_step: f32,
    pub sparkline_margin: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            variant: LayoutVariant::Wide,
            max_languages: None,
            sparkline_samples: 40,
            sparkline_step: 9.0,
            sparkline_margin: 8.0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RenderConfig {
    pub png_scale: f32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self { png_scale: 1.0 }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub theme: Theme,
    pub layout: LayoutConfig,
    pub render: RenderConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: Theme::midnight(),
            layout: LayoutConfig::default(),
            render: RenderConfig::default(),
        }
    }
}

/// Shape of the on-disk config file. Every field is optional; absent
/// fields keep their built-in defaults.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConfigFile {
    pub theme: Option<String>,
    pub theme_overrides: Option<ThemeOverrides>,
    pub variant: Option<LayoutVariant>,
    pub max_languages: Option<usize>,
    pub sparkline_samples: Option<usize>,
    pub sparkline_step: Option<f32>,
    pub sparkline_margin: Option<f32>,
    pub png_scale: Option<f32>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ThemeOverrides {
    pub font_family: Option<String>,
    pub background: Option<String>,
    pub card_background: Option<String>,
    pub card_border: Option<String>,
    pub text_color: Option<String>,
    pub dim_text_color: Option<String>,
    pub accent_color: Option<String>,
    pub bar_track_color: Option<String>,
    pub others_color: Option<String>,
    pub palette: Option<Vec<String>>,
}

pub fn load_config(path: Option<&Path>) -> Result<Config> {
    let mut config = Config::default();
    if let Some(path) = path {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        let file: ConfigFile = json5::from_str(&raw)
            .with_context(|| format!("parsing config file {}", path.display()))?;
        merge_config_file(&mut config, file);
    }
    Ok(config)
}

pub fn merge_config_file(config: &mut Config, file: ConfigFile) {
    if let Some(name) = file.theme {
        match name.as_str() {
            "midnight" | "dark" | "default" => config.theme = Theme::midnight(),
            "paper" | "light" => config.theme = Theme::paper(),
            other => tracing::warn!(theme = other, "unknown theme name, keeping current theme"),
        }
    }
    if let Some(overrides) = file.theme_overrides {
        apply_theme_overrides(&mut config.theme, overrides);
    }
    if let Some(variant) = file.variant {
        config.layout.variant = variant;
    }
    if file.max_languages.is_some() {
        config.layout.max_languages = file.max_languages;
    }
    if let Some(samples) = file.sparkline_samples {
        config.layout.sparkline_samples = samples;
    }
    if let Some(step) = file.sparkline_step {
        config.layout.sparkline_step = step;
    }
    if let Some(margin) = file.sparkline_margin {
        config.layout.sparkline_margin = margin;
    }
    if let Some(scale) = file.png_scale {
        config.render.png_scale = scale;
    }
}

fn apply_theme_overrides(theme: &mut Theme, overrides: ThemeOverrides) {
    if let Some(font_family) = overrides.font_family {
        theme.font_family = font_family;
    }
    if let Some(background) = overrides.background {
        theme.background = background;
    }
    if let Some(card_background) = overrides.card_background {
        theme.card_background = card_background;
    }
    if let Some(card_border) = overrides.card_border {
        theme.card_border = card_border;
    }
    if let Some(text_color) = overrides.text_color {
        theme.text_color = text_color;
    }
    if let Some(dim_text_color) = overrides.dim_text_color {
        theme.dim_text_color = dim_text_color;
    }
    if let Some(accent_color) = overrides.accent_color {
        theme.accent_color = accent_color;
    }
    if let Some(bar_track_color) = overrides.bar_track_color {
        theme.bar_track_color = bar_track_color;
    }
    if let Some(others_color) = overrides.others_color {
        theme.others_color = others_color;
    }
    if let Some(palette) = overrides.palette {
        theme.palette = palette;
    }
}
