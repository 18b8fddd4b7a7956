//! Password strength scoring and the strength meter

use crate::config::Theme;
use ratatui::style::Color;
use std::time::{Duration, Instant};

/// Strength tier of a password
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrengthLevel {
    Weak,
    Medium,
    Strong,
}

/// Result of scoring a password
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordStrength {
    pub level: StrengthLevel,
    /// 0..=6
    pub score: u8,
}

/// Score a password: one point each for length >= 8, length >= 12, a
/// lowercase letter, an uppercase letter, a digit and any other character.
pub fn calculate_password_strength(password: &str) -> PasswordStrength {
    let length = password.chars().count();
    let criteria = [
        length >= 8,
        length >= 12,
        password.chars().any(|c| c.is_ascii_lowercase()),
        password.chars().any(|c| c.is_ascii_uppercase()),
        password.chars().any(|c| c.is_ascii_digit()),
        password.chars().any(|c| !c.is_ascii_alphanumeric()),
    ];
    let score = criteria.iter().filter(|met| **met).count() as u8;

    let level = match score {
        0..=2 => StrengthLevel::Weak,
        3..=4 => StrengthLevel::Medium,
        _ => StrengthLevel::Strong,
    };
    PasswordStrength { level, score }
}

/// Rendered state of the meter (bar width, bar color, caption)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrengthTier {
    pub width_percent: u16,
    pub color: Color,
    pub label: &'static str,
}

impl StrengthTier {
    pub fn neutral(theme: &Theme) -> Self {
        Self {
            width_percent: 0,
            color: theme.border_color,
            label: "Password strength",
        }
    }

    pub fn for_level(level: StrengthLevel, theme: &Theme) -> Self {
        match level {
            StrengthLevel::Weak => Self {
                width_percent: 33,
                color: theme.error_color,
                label: "Weak password",
            },
            StrengthLevel::Medium => Self {
                width_percent: 66,
                color: theme.warning_color,
                label: "Medium password",
            },
            StrengthLevel::Strong => Self {
                width_percent: 100,
                color: theme.success_color,
                label: "Strong password",
            },
        }
    }
}

/// Strength meter with an eased width transition between tiers
#[derive(Debug, Clone)]
pub struct StrengthMeter {
    pub tier: StrengthTier,
    from_percent: u16,
    changed_at: Instant,
}

impl StrengthMeter {
    /// Duration of the bar width transition
    const TRANSITION: Duration = Duration::from_millis(300);

    pub fn new(theme: &Theme) -> Self {
        Self {
            tier: StrengthTier::neutral(theme),
            from_percent: 0,
            changed_at: Instant::now(),
        }
    }

    /// Switch to a new tier, starting the transition from the width shown now
    pub fn set_tier(&mut self, tier: StrengthTier) {
        if tier == self.tier {
            return;
        }
        let now = Instant::now();
        self.from_percent = self.displayed_percent(now);
        self.changed_at = now;
        self.tier = tier;
    }

    /// Width to draw at `now`
    pub fn displayed_percent(&self, now: Instant) -> u16 {
        let elapsed = now.saturating_duration_since(self.changed_at);
        if elapsed >= Self::TRANSITION {
            return self.tier.width_percent;
        }
        let progress = elapsed.as_secs_f32() / Self::TRANSITION.as_secs_f32();
        let eased = simple_easing::cubic_out(progress);
        let from = self.from_percent as f32;
        let to = self.tier.width_percent as f32;
        (from + (to - from) * eased).round() as u16
    }

    /// Whether the bar is still moving
    pub fn is_animating(&self) -> bool {
        self.changed_at.elapsed() < Self::TRANSITION
    }
}
