//! Theme and styling configuration.
//!
//! The active theme is resolved once at startup from the config file (with an
//! optional CLI override) and exposed through [`theme`]. Components read
//! colors from it instead of hard-coding them.

use std::sync::OnceLock;

use ratatui::style::Color;

use crate::config::ThemePreference;

/// Color theme for the application.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Primary foreground color.
    pub fg: Color,
    /// Border color for unfocused elements.
    pub border: Color,
    /// Border color for the focused element.
    pub border_focused: Color,
    /// Accent color for highlights and selected entries.
    pub accent: Color,
    /// Placeholder text color.
    pub placeholder: Color,
    /// Chip background color.
    pub chip_bg: Color,
    /// Chip text color.
    pub chip_fg: Color,
    /// Background color for the focused chip.
    pub chip_focused_bg: Color,
    /// Text color for the focused chip.
    pub chip_focused_fg: Color,
    /// Dim text color for hints and empty states.
    pub dim: Color,
    /// Popover background color.
    pub popover_bg: Color,
}

impl Theme {
    /// The dark palette.
    pub fn dark() -> Self {
        Self {
            fg: Color::White,
            border: Color::DarkGray,
            border_focused: Color::Yellow,
            accent: Color::Cyan,
            placeholder: Color::DarkGray,
            chip_bg: Color::Blue,
            chip_fg: Color::White,
            chip_focused_bg: Color::Yellow,
            chip_focused_fg: Color::Black,
            dim: Color::DarkGray,
            popover_bg: Color::Black,
        }
    }

    /// The light palette.
    pub fn light() -> Self {
        Self {
            fg: Color::Black,
            border: Color::Gray,
            border_focused: Color::Blue,
            accent: Color::Blue,
            placeholder: Color::Gray,
            chip_bg: Color::LightBlue,
            chip_fg: Color::Black,
            chip_focused_bg: Color::Blue,
            chip_focused_fg: Color::White,
            dim: Color::Gray,
            popover_bg: Color::White,
        }
    }

    /// Resolve a theme from a persisted preference.
    ///
    /// An absent preference means "system", which resolves to dark.
    pub fn from_preference(preference: Option<ThemePreference>) -> Self {
        match preference {
            Some(ThemePreference::Light) => Self::light(),
            Some(ThemePreference::Dark) | None => Self::dark(),
        }
    }
}

static THEME: OnceLock<Theme> = OnceLock::new();

/// Install the process-wide theme. Later calls are ignored.
pub fn init_theme(theme: Theme) {
    let _ = THEME.set(theme);
}

/// Get the active theme, defaulting to dark if none was installed.
pub fn theme() -> &'static Theme {
    THEME.get_or_init(Theme::dark)
}

#[cfg(test)]
mod tests {
    use serial_test::serial;

    use super::*;

    #[test]
    fn test_from_preference_light() {
        let t = Theme::from_preference(Some(ThemePreference::Light));
        assert_eq!(t.fg, Color::Black);
    }

    #[test]
    fn test_from_preference_absent_is_dark() {
        let t = Theme::from_preference(None);
        assert_eq!(t.fg, Color::White);
    }

    #[test]
    #[serial]
    fn test_theme_accessor_has_default() {
        // Touches the process-wide slot; whatever was installed first, the
        // accessor never panics and both palettes keep these distinct.
        let t = theme();
        assert_ne!(t.border, t.border_focused);
    }

    #[test]
    #[serial]
    fn test_init_theme_first_wins() {
        init_theme(Theme::dark());
        let first = theme().fg;
        init_theme(Theme::light());
        assert_eq!(theme().fg, first);
    }
}
