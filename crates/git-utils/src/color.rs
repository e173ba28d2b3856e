//! ANSI coloring for status output, honoring `NO_COLOR`.

use std::io::IsTerminal;

/// Color configuration mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect based on terminal and the `NO_COLOR` env var.
    #[default]
    Auto,
    /// Always emit ANSI color codes.
    Always,
    /// Never emit ANSI color codes.
    Never,
}

impl std::str::FromStr for ColorMode {
    type Err = std::convert::Infallible;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(parse_color_mode(s))
    }
}

/// Colors used when reporting a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Normal,
    Red,
    Green,
    Bold,
    Reset,
}

impl Color {
    /// Get the ANSI escape sequence for this color.
    pub fn ansi_code(self) -> &'static str {
        match self {
            Color::Normal => "",
            Color::Red => "\x1b[31m",
            Color::Green => "\x1b[32m",
            Color::Bold => "\x1b[1m",
            Color::Reset => "\x1b[0m",
        }
    }
}

/// Check if color should be used for the given mode and stream.
///
/// In `Auto` mode color is disabled when `NO_COLOR` or `GIT_NO_COLOR` is
/// set, or when the stream is not a terminal.
pub fn use_color(mode: ColorMode, is_terminal: bool) -> bool {
    let env_disabled =
        std::env::var_os("NO_COLOR").is_some() || std::env::var_os("GIT_NO_COLOR").is_some();
    resolve(mode, is_terminal, env_disabled)
}

/// Check if stdout should use color.
pub fn use_color_stdout(mode: ColorMode) -> bool {
    use_color(mode, std::io::stdout().is_terminal())
}

fn resolve(mode: ColorMode, is_terminal: bool, env_disabled: bool) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => is_terminal && !env_disabled,
    }
}

/// Wrap `text` in the escape sequence for `color` when `enabled`.
pub fn colorize(text: &str, color: Color, enabled: bool) -> String {
    if !enabled || color == Color::Normal {
        return text.to_string();
    }
    format!("{}{}{}", color.ansi_code(), text, Color::Reset.ansi_code())
}

/// Parse a color mode string into a `ColorMode`.
///
/// Recognized values (case-insensitive):
/// - `"always"`, `"true"`, `"yes"` -> `ColorMode::Always`
/// - `"never"`, `"false"`, `"no"` -> `ColorMode::Never`
/// - anything else -> `ColorMode::Auto`
pub fn parse_color_mode(s: &str) -> ColorMode {
    match s.trim().to_ascii_lowercase().as_str() {
        "always" | "true" | "yes" => ColorMode::Always,
        "never" | "false" | "no" => ColorMode::Never,
        _ => ColorMode::Auto,
    }
}
