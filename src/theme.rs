//! Theme state for the playground. The core only tracks the Light/Dark
//! toggle; the palette maps it to ANSI color tokens for the terminal
//! presentation layer.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    /// The other theme. Toggling is orthogonal to selection state.
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn palette(self) -> Palette {
        match self {
            Theme::Dark => Palette {
                heading: "\x1b[1;97m",
                accent: "\x1b[96m",
                dimmed: "\x1b[90m",
                reset: "\x1b[0m",
            },
            Theme::Light => Palette {
                heading: "\x1b[1;30m",
                accent: "\x1b[34m",
                dimmed: "\x1b[37m",
                reset: "\x1b[0m",
            },
        }
    }
}

/// ANSI color tokens used by the REPL renderer.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub heading: &'static str,
    pub accent: &'static str,
    pub dimmed: &'static str,
    pub reset: &'static str,
}
