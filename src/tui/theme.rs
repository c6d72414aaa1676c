//! Color theme and styling for the form TUI.

use ratatui::style::{Color, Modifier, Style};

/// Minimalist color scheme for the riskform TUI.
pub struct Theme {
    /// Primary accent color (cyan for the focused widget)
    pub primary: Color,
    /// Success color (green for healthy results)
    pub success: Color,
    /// Muted color (dark gray for labels and hints)
    pub muted: Color,
    /// Text color (white for field values)
    pub text: Color,
}

impl Theme {
    pub fn default_theme() -> Self {
        Self {
            primary: Color::Cyan,
            success: Color::Green,
            muted: Color::DarkGray,
            text: Color::White,
        }
    }

    /// Accent color (alias for primary)
    pub fn accent(&self) -> Color {
        self.primary
    }

    pub fn warning(&self) -> Color {
        Color::Yellow
    }

    pub fn danger(&self) -> Color {
        Color::Red
    }

    /// Border style for form cells, highlighted when focused.
    pub fn cell_border_style(&self, focused: bool) -> Style {
        if focused {
            Style::default()
                .fg(self.primary)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.muted)
        }
    }

    /// Style for field values.
    pub fn value_style(&self, focused: bool) -> Style {
        if focused {
            Style::default()
                .fg(self.primary)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.text)
        }
    }

    /// Style for the application title.
    pub fn title_style(&self) -> Style {
        Style::default()
            .fg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for key hints in the footer.
    pub fn hint_style(&self) -> Style {
        Style::default().fg(self.muted)
    }

    /// Style for result lines.
    pub fn result_style(&self) -> Style {
        Style::default().fg(self.text)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_theme()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_creation() {
        let theme = Theme::default_theme();
        assert_eq!(theme.primary, Color::Cyan);
        assert_eq!(theme.muted, Color::DarkGray);
    }

    #[test]
    fn test_focus_styles_are_distinct() {
        let theme = Theme::default_theme();
        assert_ne!(
            theme.cell_border_style(true).fg,
            theme.cell_border_style(false).fg
        );
    }
}
