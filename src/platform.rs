//! Platform-specific configuration

/// Submit shortcut display for form help text
pub const SUBMIT_SHORTCUT: &str = "Ctrl+S";

/// Reset shortcut display for form help text
pub const RESET_SHORTCUT: &str = "Ctrl+R";

/// Quit hint (double Ctrl+C)
pub const QUIT_SHORTCUT: &str = "^C^C";
