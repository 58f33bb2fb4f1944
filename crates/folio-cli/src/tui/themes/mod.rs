//! Color palettes for the hero renderer
//!
//! The site's own colors (white page, blue to purple accents, gray track)
//! make the light palette. Dark terminals get an inverted variant.

mod palette;

use clap::ValueEnum;
use ratatui::style::Color;

/// Environment variable some terminals set to `"<fg>;<bg>"` color indices
pub const COLORFGBG_ENV: &str = "COLORFGBG";

/// Colors used by the renderer
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: &'static str,
    pub bg_color: Color,
    /// Active hero line
    pub text_color: Color,
    /// Inactive hero lines and secondary text
    pub dim_color: Color,
    pub accent_color: Color,
    /// Emoji of the active line once their emphasis starts
    pub emoji_color: Color,
    pub progress_color: Color,
    pub progress_track_color: Color,
    pub nav_bg_color: Color,
    /// Navigation bar once the page is scrolled
    pub nav_scrolled_bg_color: Color,
    pub status_bar_bg_color: Color,
    pub scrollbar_bg_color: Color,
}

/// Which palette to render with
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ThemeMode {
    /// Follow the terminal background
    #[default]
    Auto,
    Light,
    Dark,
}

impl ThemeMode {
    /// Parse a config value, case-insensitively
    pub fn from_name(name: &str) -> Option<Self> {
        <Self as ValueEnum>::from_str(name.trim(), true).ok()
    }

    /// Pick the palette. `colorfgbg` is the terminal's `COLORFGBG` value,
    /// consulted only in auto mode; light wins when it is missing or unreadable.
    pub fn resolve(self, colorfgbg: Option<&str>) -> Theme {
        let dark = match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::Auto => colorfgbg.and_then(background_is_dark).unwrap_or(false),
        };
        if dark {
            Theme::dark()
        } else {
            Theme::light()
        }
    }
}

/// Read the background from a `COLORFGBG` value such as `"15;0"` or
/// `"0;default;15"`. The last field is the background index; 0-6 and 8 are
/// the dark ANSI colors.
pub fn background_is_dark(colorfgbg: &str) -> Option<bool> {
    let bg: u8 = colorfgbg.rsplit(';').next()?.trim().parse().ok()?;
    Some(matches!(bg, 0..=6 | 8))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_background_is_dark() {
        assert_eq!(background_is_dark("15;0"), Some(true));
        assert_eq!(background_is_dark("0;15"), Some(false));
        assert_eq!(background_is_dark("0;default;8"), Some(true));
        assert_eq!(background_is_dark("12;7"), Some(false));
        assert_eq!(background_is_dark("15;default"), None);
        assert_eq!(background_is_dark(""), None);
    }

    #[test]
    fn test_auto_follows_terminal() {
        assert_eq!(ThemeMode::Auto.resolve(Some("15;0")).name, "dark");
        assert_eq!(ThemeMode::Auto.resolve(Some("0;15")).name, "light");
        assert_eq!(ThemeMode::Auto.resolve(None).name, "light");
        assert_eq!(ThemeMode::Auto.resolve(Some("garbage")).name, "light");
    }

    #[test]
    fn test_explicit_mode_ignores_terminal() {
        assert_eq!(ThemeMode::Light.resolve(Some("15;0")).name, "light");
        assert_eq!(ThemeMode::Dark.resolve(Some("0;15")).name, "dark");
    }

    #[test]
    fn test_from_name() {
        assert_eq!(ThemeMode::from_name("dark"), Some(ThemeMode::Dark));
        assert_eq!(ThemeMode::from_name(" Light "), Some(ThemeMode::Light));
        assert_eq!(ThemeMode::from_name("auto"), Some(ThemeMode::Auto));
        assert_eq!(ThemeMode::from_name("midnight"), None);
    }
}
