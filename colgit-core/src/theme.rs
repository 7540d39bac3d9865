//! Colour themes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ColGitError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn name(&self) -> &'static str {
        match self {
            Theme::Light => "Light",
            Theme::Dark => "Dark",
        }
    }

    pub fn palette(&self) -> &'static Palette {
        match self {
            Theme::Light => &LIGHT,
            Theme::Dark => &DARK,
        }
    }
}

impl FromStr for Theme {
    type Err = ColGitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            _ => Err(ColGitError::InvalidArgument(format!(
                "Unknown theme '{s}' (expected Light or Dark)"
            ))),
        }
    }
}

impl TryFrom<String> for Theme {
    type Error = ColGitError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Theme> for String {
    fn from(theme: Theme) -> Self {
        theme.name().to_string()
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Fixed set of colours a front end paints with.
#[derive(Debug, PartialEq, Eq)]
pub struct Palette {
    pub background: &'static str,
    pub background_gradient: &'static str,
    pub surface: &'static str,
    pub primary: &'static str,
    pub secondary: &'static str,
    pub text: &'static str,
    pub text_secondary: &'static str,
    pub border: &'static str,
    pub error: &'static str,
    pub success: &'static str,
    pub warning: &'static str,
}

impl Palette {
    /// Field name and value pairs, in declaration order.
    pub fn entries(&self) -> [(&'static str, &'static str); 11] {
        [
            ("background", self.background),
            ("background_gradient", self.background_gradient),
            ("surface", self.surface),
            ("primary", self.primary),
            ("secondary", self.secondary),
            ("text", self.text),
            ("text_secondary", self.text_secondary),
            ("border", self.border),
            ("error", self.error),
            ("success", self.success),
            ("warning", self.warning),
        ]
    }
}

pub static LIGHT: Palette = Palette {
    background: "#ffffff",
    background_gradient: "linear-gradient(45deg, #f5f5f5, #e3f2fd, #e1bee7)",
    surface: "#ffffff",
    primary: "#6200ea",
    secondary: "#0091ea",
    text: "#000000",
    text_secondary: "#666666",
    border: "#e0e0e0",
    error: "#b00020",
    success: "#4caf50",
    warning: "#ff9800",
};

pub static DARK: Palette = Palette {
    background: "#000000",
    background_gradient: "linear-gradient(45deg, #000000, #1a237e, #4a148c)",
    surface: "#121212",
    primary: "#6200ea",
    secondary: "#0091ea",
    text: "#ffffff",
    text_secondary: "#b3b3b3",
    border: "#333333",
    error: "#cf6679",
    success: "#4caf50",
    warning: "#ff9800",
};

/// Palette for a theme name. Anything that isn't "dark" gets the light palette.
pub fn get_theme_colors(name: &str) -> &'static Palette {
    name.parse::<Theme>().unwrap_or_default().palette()
}
