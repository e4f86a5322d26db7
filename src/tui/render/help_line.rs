use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::App;

/// Static key hints shown under both panes
pub const HELP_TEXT: &str = "↑/↓:Navigate | enter:View | esc:Back | ctrl+n:New | ctrl+s:Save | ctrl+e:Edit | ctrl+d:Delete | tab:Next field | /:Filter | ctrl+u:Refresh | ctrl+c:Quit";

/// Render the help line (bottom of screen)
pub fn render_help_line(frame: &mut Frame, app: &App, area: Rect) {
    let style = Style::default().fg(app.theme.help).bg(app.theme.background);
    let line = Line::from(Span::styled(HELP_TEXT, style));
    frame.render_widget(Paragraph::new(line).style(style), area);
}
