use ratatui::style::{Color, Modifier, Style};

/// Colors and styles for the TUI. Built once at startup and passed to the
/// renderer; nothing reads styles from global state.
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub dim: Color,
    /// Pane borders
    pub border: Color,
    /// Border of the input field that holds focus
    pub border_focused: Color,
    /// Title field text
    pub title: Color,
    /// Note body text
    pub content: Color,
    /// Help line text
    pub help: Color,
    /// Selected list row: title and description
    pub selection_title: Color,
    pub selection_desc: Color,
    pub filter_prompt: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            background: Color::Reset,
            text: Color::Rgb(0xDD, 0xDD, 0xDD),
            dim: Color::Rgb(0x77, 0x77, 0x77),
            border: Color::Indexed(63),
            border_focused: Color::Indexed(205),
            title: Color::Indexed(205),
            content: Color::Indexed(230),
            help: Color::Indexed(241),
            selection_title: Color::Rgb(0xEE, 0x6F, 0xF8),
            selection_desc: Color::Rgb(0xAD, 0x58, 0xB4),
            filter_prompt: Color::Rgb(0x44, 0xDD, 0xFF),
        }
    }
}

impl Theme {
    /// Border style for a pane or input field
    pub fn border_style(&self, focused: bool) -> Style {
        let fg = if focused {
            self.border_focused
        } else {
            self.border
        };
        Style::default().fg(fg).bg(self.background)
    }

    /// Style of the title field's text
    pub fn title_style(&self) -> Style {
        Style::default()
            .fg(self.title)
            .bg(self.background)
            .add_modifier(Modifier::BOLD)
    }

    pub fn content_style(&self) -> Style {
        Style::default().fg(self.content).bg(self.background)
    }

    /// Cursor of a focused input field (reversed cell)
    pub fn cursor_style(&self) -> Style {
        Style::default().add_modifier(Modifier::REVERSED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_border_style_tracks_focus() {
        let theme = Theme::default();
        assert_eq!(theme.border_style(true).fg, Some(theme.border_focused));
        assert_eq!(theme.border_style(false).fg, Some(theme.border));
    }

    #[test]
    fn test_title_style_is_bold() {
        let theme = Theme::default();
        let style = theme.title_style();
        assert_eq!(style.fg, Some(Color::Indexed(205)));
        assert!(style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn test_default_palette() {
        let theme = Theme::default();
        assert_eq!(theme.border, Color::Indexed(63));
        assert_eq!(theme.help, Color::Indexed(241));
        assert_eq!(theme.content, Color::Indexed(230));
    }
}
