pub mod content_pane;
pub mod help_line;
pub mod list_pane;

#[cfg(test)]
pub mod test_helpers;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Margin, Rect};
use ratatui::style::Style;
use ratatui::widgets::Block;

use super::app::App;

/// Screen regions for one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaneLayout {
    pub list: Rect,
    pub content: Rect,
    pub help: Rect,
}

/// Split the terminal area into list, content and help regions.
/// Pure: the same area always gives the same layout.
pub fn pane_layout(area: Rect) -> PaneLayout {
    let inner = area.inner(Margin {
        horizontal: 2,
        vertical: 1,
    });

    // main panes | blank separator | help line
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
        .split(rows[0]);

    PaneLayout {
        list: columns[0],
        content: columns[1],
        help: rows[2],
    }
}

/// Main render function: dispatches to the pane renderers. Reads `app`
/// only.
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    let layout = pane_layout(area);
    list_pane::render_list_pane(frame, app, layout.list);
    content_pane::render_content_pane(frame, app, layout.content);
    help_line::render_help_line(frame, app, layout.help);
}
