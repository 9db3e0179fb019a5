//! Theme system for the editor
//!
//! Provides YAML-based theming with compile-time embedded themes
//! and user-defined themes from the config directory.
//!
//! Theme loading priority:
//! 1. User config: `~/.config/linepad/themes/{id}.yaml`
//! 2. Embedded: Built-in themes compiled into binary

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use crate::syntax::Highlight;

// Embed theme YAML files at compile time
pub const DEFAULT_DARK_YAML: &str = include_str!("../themes/default-dark.yaml");
pub const CLASSIC_YAML: &str = include_str!("../themes/classic.yaml");

/// A built-in theme entry
pub struct BuiltinTheme {
    /// Stable identifier for config (e.g. "default-dark", "classic")
    pub id: &'static str,
    /// Embedded YAML content
    pub yaml: &'static str,
}

/// Registry of all built-in themes
pub const BUILTIN_THEMES: &[BuiltinTheme] = &[
    BuiltinTheme {
        id: "default-dark",
        yaml: DEFAULT_DARK_YAML,
    },
    BuiltinTheme {
        id: "classic",
        yaml: CLASSIC_YAML,
    },
];

/// Load a theme from a YAML file
pub fn from_file(path: &Path) -> Result<Theme, String> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read theme file {}: {}", path.display(), e))?;
    Theme::from_yaml(&content)
}

/// Load theme by id with priority: user → builtin
pub fn load_theme(id: &str) -> Result<Theme, String> {
    if let Some(user_path) = crate::config_paths::user_theme_file(id) {
        tracing::info!("Loading user theme from {}", user_path.display());
        return from_file(&user_path);
    }

    tracing::info!("Loading builtin theme: {}", id);
    Theme::from_builtin(id)
}

/// RGB color (0-255 per channel)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(0xFF, 0xFF, 0xFF);
    pub const BLACK: Color = Color::rgb(0x00, 0x00, 0x00);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse from "#RRGGBB" hex string
    pub fn from_hex(s: &str) -> Result<Self, String> {
        let s = s.trim_start_matches('#');
        if s.len() != 6 || !s.is_ascii() {
            return Err(format!("Invalid color format: {}", s));
        }
        Ok(Color {
            r: u8::from_str_radix(&s[0..2], 16).map_err(|e| e.to_string())?,
            g: u8::from_str_radix(&s[2..4], 16).map_err(|e| e.to_string())?,
            b: u8::from_str_radix(&s[4..6], 16).map_err(|e| e.to_string())?,
        })
    }
}

/// Raw theme data as parsed from YAML
#[derive(Debug, Clone, Deserialize)]
pub struct ThemeData {
    pub version: u32,
    pub name: String,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub ui: UiThemeData,
    /// Highlight category name to hex color
    #[serde(default)]
    pub syntax: HashMap<String, String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UiThemeData {
    #[serde(default)]
    pub editor: EditorThemeData,
    #[serde(default)]
    pub status_bar: StatusBarThemeData,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EditorThemeData {
    pub background: Option<String>,
    pub foreground: Option<String>,
    /// Color of the `~` filler rows
    pub tilde: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StatusBarThemeData {
    pub background: Option<String>,
    pub foreground: Option<String>,
}

/// Resolved theme with parsed colors
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub name: String,
    pub editor: EditorTheme,
    pub status_bar: StatusBarTheme,
    pub syntax: SyntaxTheme,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorTheme {
    pub background: Color,
    pub foreground: Color,
    pub tilde: Color,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusBarTheme {
    pub background: Color,
    pub foreground: Color,
}

/// One color per highlight category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxTheme {
    pub normal: Color,
    pub comment: Color,
    pub block_comment: Color,
    pub keyword: Color,
    pub keyword_secondary: Color,
    pub string: Color,
    pub number: Color,
    pub search_match: Color,
}

impl SyntaxTheme {
    pub fn get(&self, highlight: Highlight) -> Color {
        match highlight {
            Highlight::Normal => self.normal,
            Highlight::Comment => self.comment,
            Highlight::BlockComment => self.block_comment,
            Highlight::Keyword => self.keyword,
            Highlight::KeywordSecondary => self.keyword_secondary,
            Highlight::String => self.string,
            Highlight::Number => self.number,
            Highlight::Match => self.search_match,
        }
    }

    fn slot_mut(&mut self, highlight: Highlight) -> &mut Color {
        match highlight {
            Highlight::Normal => &mut self.normal,
            Highlight::Comment => &mut self.comment,
            Highlight::BlockComment => &mut self.block_comment,
            Highlight::Keyword => &mut self.keyword,
            Highlight::KeywordSecondary => &mut self.keyword_secondary,
            Highlight::String => &mut self.string,
            Highlight::Number => &mut self.number,
            Highlight::Match => &mut self.search_match,
        }
    }
}

fn resolve(value: Option<&String>, fallback: Color) -> Result<Color, String> {
    value
        .map(|s| Color::from_hex(s))
        .transpose()
        .map(|c| c.unwrap_or(fallback))
}

impl Theme {
    /// Color used to draw a character of the given category
    pub fn color(&self, highlight: Highlight) -> Color {
        self.syntax.get(highlight)
    }

    pub fn from_builtin(id: &str) -> Result<Self, String> {
        BUILTIN_THEMES
            .iter()
            .find(|t| t.id == id)
            .ok_or_else(|| format!("Unknown builtin theme: {}", id))
            .and_then(|t| Theme::from_yaml(t.yaml))
    }

    /// Parse a theme, filling missing entries from the default dark palette
    pub fn from_yaml(yaml: &str) -> Result<Self, String> {
        let data: ThemeData =
            serde_yaml::from_str(yaml).map_err(|e| format!("Invalid theme YAML: {}", e))?;
        let base = Theme::fallback();

        let editor = EditorTheme {
            background: resolve(data.ui.editor.background.as_ref(), base.editor.background)?,
            foreground: resolve(data.ui.editor.foreground.as_ref(), base.editor.foreground)?,
            tilde: resolve(data.ui.editor.tilde.as_ref(), base.editor.tilde)?,
        };
        let status_bar = StatusBarTheme {
            background: resolve(
                data.ui.status_bar.background.as_ref(),
                base.status_bar.background,
            )?,
            foreground: resolve(
                data.ui.status_bar.foreground.as_ref(),
                base.status_bar.foreground,
            )?,
        };

        let mut syntax = base.syntax;
        syntax.normal = editor.foreground;
        for (name, hex) in &data.syntax {
            match Highlight::from_name(name) {
                Some(highlight) => *syntax.slot_mut(highlight) = Color::from_hex(hex)?,
                None => tracing::warn!("Ignoring unknown syntax category in theme: {}", name),
            }
        }

        Ok(Theme {
            name: data.name,
            editor,
            status_bar,
            syntax,
        })
    }

    /// Default dark theme (YAML-backed with Rust fallback)
    pub fn default_dark() -> Self {
        Theme::from_yaml(DEFAULT_DARK_YAML).unwrap_or_else(|_| Theme::fallback())
    }

    fn fallback() -> Self {
        Theme {
            name: "Default Dark".to_string(),
            editor: EditorTheme {
                background: Color::rgb(0x1E, 0x1E, 0x1E),
                foreground: Color::rgb(0xD4, 0xD4, 0xD4),
                tilde: Color::rgb(0x5A, 0x5A, 0x5A),
            },
            status_bar: StatusBarTheme {
                background: Color::rgb(0x00, 0x7A, 0xCC),
                foreground: Color::WHITE,
            },
            syntax: SyntaxTheme {
                normal: Color::rgb(0xD4, 0xD4, 0xD4),
                comment: Color::rgb(0x6A, 0x99, 0x55),
                block_comment: Color::rgb(0x6A, 0x99, 0x55),
                keyword: Color::rgb(0x56, 0x9C, 0xD6),
                keyword_secondary: Color::rgb(0x4E, 0xC9, 0xB0),
                string: Color::rgb(0xCE, 0x91, 0x78),
                number: Color::rgb(0xB5, 0xCE, 0xA8),
                search_match: Color::rgb(0x26, 0x4F, 0x78),
            },
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_dark()
    }
}
