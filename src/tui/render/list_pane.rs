use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, List, ListItem, ListState, Paragraph};

use crate::model::ListEntry;
use crate::tui::app::App;
use crate::util::unicode;

/// Render the note list: one two-line row per visible note, the cursor row
/// marked with a bar, and a filter prompt when a filter is active.
pub fn render_list_pane(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let block = Block::default()
        .title(Span::styled(
            " Notes ",
            Style::default()
                .fg(app.theme.title)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(app.theme.border_style(false))
        .style(Style::default().bg(bg));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let show_filter = app.list.is_filtering() || !app.list.filter().is_empty();
    let (filter_area, rows_area) = if show_filter {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Min(0)])
            .split(inner);
        (Some(chunks[0]), chunks[1])
    } else {
        (None, inner)
    };

    if let Some(filter_area) = filter_area {
        let mut spans = vec![Span::styled(
            format!("Filter: {}", app.list.filter()),
            Style::default().fg(app.theme.filter_prompt).bg(bg),
        )];
        if app.list.is_filtering() {
            spans.push(Span::styled(
                "\u{258C}",
                Style::default().fg(app.theme.filter_prompt).bg(bg),
            ));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), filter_area);
    }

    if app.list.visible().is_empty() {
        let message = if app.notes.is_empty() {
            "No notes."
        } else {
            "Nothing matched."
        };
        frame.render_widget(
            Paragraph::new(Span::styled(message, Style::default().fg(app.theme.dim).bg(bg))),
            rows_area,
        );
        return;
    }

    // Room for the 2-cell row marker
    let text_width = (rows_area.width as usize).saturating_sub(2);
    let items: Vec<ListItem> = app
        .list
        .visible()
        .iter()
        .enumerate()
        .filter_map(|(pos, &index)| {
            let note = app.notes.get(index)?;
            let is_cursor = pos == app.list.cursor();
            Some(list_row(app, note, is_cursor, text_width))
        })
        .collect();

    let mut state = ListState::default().with_selected(Some(app.list.cursor()));
    frame.render_stateful_widget(List::new(items), rows_area, &mut state);
}

fn list_row<'a>(app: &App, note: &impl ListEntry, is_cursor: bool, width: usize) -> ListItem<'a> {
    let bg = app.theme.background;
    let (marker, title_fg, desc_fg) = if is_cursor {
        (
            "\u{2502} ",
            app.theme.selection_title,
            app.theme.selection_desc,
        )
    } else {
        ("  ", app.theme.text, app.theme.dim)
    };
    let marker_style = Style::default().fg(app.theme.selection_title).bg(bg);

    let title = Line::from(vec![
        Span::styled(marker, marker_style),
        Span::styled(
            unicode::truncate_to_width(note.title(), width),
            Style::default().fg(title_fg).bg(bg),
        ),
    ]);
    let description = Line::from(vec![
        Span::styled(marker, marker_style),
        Span::styled(
            unicode::truncate_to_width(&note.description(), width),
            Style::default().fg(desc_fg).bg(bg),
        ),
    ]);
    ListItem::new(vec![title, description])
}
