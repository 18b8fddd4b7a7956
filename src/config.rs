//! Configuration handling for the TUI

use anyhow::Result;
use directories::ProjectDirs;
use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TuiConfig {
    /// Simulated submission latency in milliseconds
    pub submit_delay_ms: Option<u64>,
    /// Upper bound of the experience range
    pub experience_max: Option<u32>,
    /// Neutral border / empty meter color
    pub border_color: Option<String>,
    /// Error marker and weak password color
    pub error_color: Option<String>,
    /// Medium password color
    pub warning_color: Option<String>,
    /// Strong password and success panel color
    pub success_color: Option<String>,
}

impl TuiConfig {
    const DEFAULT_SUBMIT_DELAY: Duration = Duration::from_millis(1500);
    const DEFAULT_EXPERIENCE_MAX: u32 = 20;

    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "signup", "signup-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: TuiConfig = serde_json::from_str(&content)?;
                tracing::debug!("Loaded config from {}", path.display());
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    pub fn submit_delay(&self) -> Duration {
        self.submit_delay_ms
            .map(Duration::from_millis)
            .unwrap_or(Self::DEFAULT_SUBMIT_DELAY)
    }

    pub fn experience_max(&self) -> u32 {
        self.experience_max
            .unwrap_or(Self::DEFAULT_EXPERIENCE_MAX)
            .max(1)
    }

    pub fn theme(&self) -> Theme {
        let defaults = Theme::default();
        Theme {
            border_color: parse_color("border_color", &self.border_color, defaults.border_color),
            error_color: parse_color("error_color", &self.error_color, defaults.error_color),
            warning_color: parse_color("warning_color", &self.warning_color, defaults.warning_color),
            success_color: parse_color("success_color", &self.success_color, defaults.success_color),
        }
    }
}

/// Named colors shared by the validator and the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub border_color: Color,
    pub error_color: Color,
    pub warning_color: Color,
    pub success_color: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            border_color: Color::DarkGray,
            error_color: Color::Red,
            warning_color: Color::Yellow,
            success_color: Color::Green,
        }
    }
}

fn parse_color(name: &str, value: &Option<String>, default: Color) -> Color {
    match value {
        Some(raw) => Color::from_str(raw).unwrap_or_else(|_| {
            tracing::warn!("Ignoring invalid {name} {raw:?} in config");
            default
        }),
        None => default,
    }
}
