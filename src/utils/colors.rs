//! Color palette and styles for the menu
//!
//! Styles are `console::Style` values. The plain theme carries no attributes
//! at all, so it renders text byte-for-byte regardless of terminal support.

use console::Style;

/// Heading color - Golden yellow (#E8C547)
pub const HEADING_ANSI: u8 = 214;

/// Menu code color - Steel blue (#5C80BC)
pub const CODE_ANSI: u8 = 67;

/// Hint color - Light gray (#CDD1C4)
pub const HINT_ANSI: u8 = 251;

/// Styles applied to each kind of text the menu writes
#[derive(Debug, Clone)]
pub struct MenuTheme {
    pub heading: Style,
    pub code: Style,
    pub prompt: Style,
    pub hint: Style,
    pub success: Style,
    pub error: Style,
}

impl MenuTheme {
    /// No styling; output is exactly the menu text
    pub fn plain() -> Self {
        Self {
            heading: Style::new(),
            code: Style::new(),
            prompt: Style::new(),
            hint: Style::new(),
            success: Style::new(),
            error: Style::new(),
        }
    }

    /// Palette for interactive terminals
    pub fn colored() -> Self {
        Self {
            heading: Style::new().color256(HEADING_ANSI).bold(),
            code: Style::new().color256(CODE_ANSI).bold(),
            prompt: Style::new().bold(),
            hint: Style::new().color256(HINT_ANSI).dim(),
            success: Style::new().green(),
            error: Style::new().red().bold(),
        }
    }

    /// Colored when stdout is an interactive terminal, plain otherwise
    pub fn for_stdout() -> Self {
        if console::Term::stdout().is_term() && console::colors_enabled() {
            Self::colored()
        } else {
            Self::plain()
        }
    }
}

impl Default for MenuTheme {
    fn default() -> Self {
        Self::plain()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_theme_leaves_text_untouched() {
        let theme = MenuTheme::plain();
        for style in [
            &theme.heading,
            &theme.code,
            &theme.prompt,
            &theme.hint,
            &theme.success,
            &theme.error,
        ] {
            assert_eq!(style.apply_to("Go Fishing").to_string(), "Go Fishing");
        }
    }

    #[test]
    fn test_colored_theme_emits_escapes_when_forced() {
        let theme = MenuTheme::colored();
        let styled = theme
            .heading
            .clone()
            .force_styling(true)
            .apply_to("Please choose an action:")
            .to_string();
        assert!(styled.starts_with('\u{1b}'));
        assert!(styled.contains("Please choose an action:"));
    }
}
