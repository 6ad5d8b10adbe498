//! Container configuration loaded from TOML.
//!
//! ```toml
//! frame_thickness = 5
//! list_line_height_pct = 200
//! button_array_line_height = 15
//! caret_blink_interval = 0.5
//!
//! [theme]
//! selection = [0.2, 0.4, 0.8, 0.6]
//! std_fg = "menu_text"
//! std_bg = "transparent"
//! ```
//!
//! Unknown top-level keys are ignored. Unknown theme roles and color names
//! are errors.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use kestrel_engine::paint::{Color, HostColor};
use serde::Deserialize;

use crate::theme::{Theme, ThemeColor};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed configuration: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("unknown theme role `{0}`")]
    UnknownRole(String),

    #[error("unknown color name `{0}`")]
    UnknownColor(String),

    #[error("invalid value for `{key}`: {reason}")]
    Invalid { key: &'static str, reason: String },
}

// ── file format ───────────────────────────────────────────────────────────

#[derive(Debug, Deserialize, Clone)]
#[serde(untagged)]
enum ColorSpec {
    Rgba([f32; 4]),
    Rgb([f32; 3]),
    Named(String),
}

impl ColorSpec {
    fn resolve(&self) -> Result<Color, ConfigError> {
        match self {
            ColorSpec::Rgba([r, g, b, a]) => Ok(Color::rgba(*r, *g, *b, *a)),
            ColorSpec::Rgb([r, g, b]) => Ok(Color::rgb(*r, *g, *b)),
            ColorSpec::Named(name) if name == "transparent" => Ok(Color::Transparent),
            ColorSpec::Named(name) => name
                .parse::<HostColor>()
                .map(Color::Host)
                .map_err(|_| ConfigError::UnknownColor(name.clone())),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
struct ConfigFile {
    #[serde(default = "UiConfig::default_frame_thickness")]
    frame_thickness: i32,
    #[serde(default = "UiConfig::default_list_line_height_pct")]
    list_line_height_pct: u32,
    #[serde(default = "UiConfig::default_button_array_line_height")]
    button_array_line_height: i32,
    #[serde(default = "UiConfig::default_caret_blink_interval")]
    caret_blink_interval: f32,
    #[serde(default)]
    theme: BTreeMap<String, ColorSpec>,
}

// ── UiConfig ──────────────────────────────────────────────────────────────

/// Settings one container is built with.
#[derive(Debug, Clone, PartialEq)]
pub struct UiConfig {
    /// Inset between the container edge and the usable layout area.
    pub frame_thickness: i32,
    /// List row height as a percentage of the font line height.
    pub list_line_height_pct: u32,
    /// Height of one button array element.
    pub button_array_line_height: i32,
    /// Seconds between caret blink toggles.
    pub caret_blink_interval: f32,
    pub theme: Theme,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            frame_thickness:          Self::default_frame_thickness(),
            list_line_height_pct:     Self::default_list_line_height_pct(),
            button_array_line_height: Self::default_button_array_line_height(),
            caret_blink_interval:     Self::default_caret_blink_interval(),
            theme:                    Theme::default(),
        }
    }
}

impl UiConfig {
    fn default_frame_thickness() -> i32 {
        5
    }
    fn default_list_line_height_pct() -> u32 {
        200
    }
    fn default_button_array_line_height() -> i32 {
        15
    }
    fn default_caret_blink_interval() -> f32 {
        0.5
    }

    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile = toml::from_str(s)?;
        Self::from_file(file)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .map_err(|source| ConfigError::Io { path: path.to_path_buf(), source })?;
        let cfg = Self::from_toml_str(&text)?;
        log::info!("loaded ui config from {}", path.display());
        Ok(cfg)
    }

    fn from_file(file: ConfigFile) -> Result<Self, ConfigError> {
        if file.frame_thickness < 0 {
            return Err(ConfigError::Invalid {
                key: "frame_thickness",
                reason: format!("{} is negative", file.frame_thickness),
            });
        }
        if file.list_line_height_pct == 0 {
            return Err(ConfigError::Invalid { key: "list_line_height_pct", reason: "must be positive".into() });
        }
        if file.button_array_line_height <= 0 {
            return Err(ConfigError::Invalid {
                key: "button_array_line_height",
                reason: format!("{} is not positive", file.button_array_line_height),
            });
        }

        let mut theme = Theme::default();
        for (key, spec) in &file.theme {
            let role = ThemeColor::from_name(key).ok_or_else(|| ConfigError::UnknownRole(key.clone()))?;
            theme.set(role, spec.resolve()?);
        }

        Ok(Self {
            frame_thickness: file.frame_thickness,
            list_line_height_pct: file.list_line_height_pct,
            button_array_line_height: file.button_array_line_height,
            caret_blink_interval: file.caret_blink_interval,
            theme,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let cfg = UiConfig::from_toml_str("").unwrap();
        assert_eq!(cfg, UiConfig::default());
        assert_eq!(cfg.frame_thickness, 5);
        assert_eq!(cfg.list_line_height_pct, 200);
        assert_eq!(cfg.button_array_line_height, 15);
    }

    #[test]
    fn theme_accepts_arrays_and_host_names() {
        let cfg = UiConfig::from_toml_str(
            r#"
            frame_thickness = 8
            [theme]
            selection = [0.2, 0.4, 0.8, 0.6]
            line = [1.0, 0.0, 0.0]
            std_fg = "list_text"
            std_bg = "transparent"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.frame_thickness, 8);
        assert_eq!(cfg.theme.color(ThemeColor::Selection), Color::rgba(0.2, 0.4, 0.8, 0.6));
        assert_eq!(cfg.theme.color(ThemeColor::Line), Color::RED);
        assert_eq!(cfg.theme.color(ThemeColor::StdFg), Color::Host(HostColor::ListText));
        assert_eq!(cfg.theme.color(ThemeColor::StdBg), Color::Transparent);
    }

    #[test]
    fn unknown_names_are_rejected() {
        let role = UiConfig::from_toml_str("[theme]\nbogus = \"menu_text\"");
        assert!(matches!(role, Err(ConfigError::UnknownRole(r)) if r == "bogus"));

        let color = UiConfig::from_toml_str("[theme]\nline = \"chartreuse\"");
        assert!(matches!(color, Err(ConfigError::UnknownColor(c)) if c == "chartreuse"));
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        assert!(matches!(UiConfig::from_toml_str("frame_thickness = ="), Err(ConfigError::Parse(_))));
        assert!(matches!(
            UiConfig::from_toml_str("frame_thickness = -1"),
            Err(ConfigError::Invalid { key: "frame_thickness", .. })
        ));
    }

    #[test]
    fn load_reports_missing_file() {
        let err = UiConfig::load("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
