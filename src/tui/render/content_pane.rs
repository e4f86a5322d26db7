use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};

use crate::tui::app::{App, Focus, Mode};

/// Height of the title field including its border
const TITLE_FIELD_HEIGHT: u16 = 3;

/// Render the right-hand pane: the two input fields while composing or
/// editing, otherwise the selected note's content.
pub fn render_content_pane(frame: &mut Frame, app: &App, area: Rect) {
    match app.mode {
        Mode::List => render_preview(frame, app, area),
        Mode::New | Mode::Edit => render_editor(frame, app, area),
    }
}

fn pane_block<'a>(app: &App, title: &'a str, focused: bool) -> Block<'a> {
    Block::default()
        .title(Span::styled(
            title,
            Style::default()
                .fg(app.theme.title)
                .bg(app.theme.background)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(app.theme.border_style(focused))
        .style(Style::default().bg(app.theme.background))
}

fn render_preview(frame: &mut Frame, app: &App, area: Rect) {
    let heading = match app.selected_note() {
        Some(note) => format!(" {} ", note.title),
        None => String::new(),
    };
    let block = pane_block(app, &heading, false);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if app.selected.is_none() {
        let hint = if app.notes.is_empty() {
            "No notes yet. Press ctrl+n to create one."
        } else {
            "Select a note with \u{2191}/\u{2193} or enter."
        };
        frame.render_widget(
            Paragraph::new(Span::styled(
                hint,
                Style::default().fg(app.theme.dim).bg(app.theme.background),
            )),
            inner,
        );
        return;
    }

    let paragraph = Paragraph::new(app.content_value())
        .style(app.theme.content_style())
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, inner);
}

/// Split the editor pane into the title field and the content field
pub fn editor_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(TITLE_FIELD_HEIGHT), Constraint::Min(1)])
        .split(area);
    (chunks[0], chunks[1])
}

fn render_editor(frame: &mut Frame, app: &App, area: Rect) {
    let heading = match app.mode {
        Mode::Edit => " Edit note ",
        _ => " New note ",
    };
    let outer = pane_block(app, heading, false);
    let inner = outer.inner(area);
    frame.render_widget(outer, area);

    let (title_area, content_area) = editor_layout(inner);

    let title_block = pane_block(app, " Title ", app.focus == Focus::Title);
    let title_inner = title_block.inner(title_area);
    frame.render_widget(title_block, title_area);
    frame.render_widget(&app.title_input, title_inner);

    let content_block = pane_block(app, " Content ", app.focus == Focus::Content);
    let content_inner = content_block.inner(content_area);
    frame.render_widget(content_block, content_area);
    frame.render_widget(&app.content_input, content_inner);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::*;

    fn render(app: &App) -> String {
        render_to_string(60, 14, |frame, area| render_content_pane(frame, app, area))
    }

    #[test]
    fn preview_shows_selected_note() {
        let (_tmp, app) = app_with_notes(&[("100-Groceries.md", "milk, eggs\nbread")]);
        let output = render(&app);
        assert!(output.contains("Groceries"));
        assert!(output.contains("milk, eggs"));
        assert!(output.contains("bread"));
    }

    #[test]
    fn preview_without_notes_shows_hint() {
        let (_tmp, app) = app_with_notes(&[]);
        assert!(render(&app).contains("No notes yet."));
    }

    #[test]
    fn preview_without_selection_shows_hint() {
        let (_tmp, mut app) = app_with_notes(&[("100-a.md", "secret")]);
        app.back_to_list();
        let output = render(&app);
        assert!(output.contains("Select a note"));
        assert!(!output.contains("secret"));
    }

    #[test]
    fn new_mode_shows_both_fields() {
        let (_tmp, mut app) = app_with_notes(&[]);
        app.start_new();
        let output = render(&app);
        assert!(output.contains("New note"));
        assert!(output.contains("Title"));
        assert!(output.contains("Content"));
    }

    #[test]
    fn edit_mode_shows_prefilled_fields() {
        let (_tmp, mut app) = app_with_notes(&[("100-Groceries.md", "milk")]);
        app.start_edit();
        let output = render(&app);
        assert!(output.contains("Edit note"));
        assert!(output.contains("Groceries"));
        assert!(output.contains("milk"));
    }

    #[test]
    fn editor_layout_gives_title_three_rows() {
        let (title, content) = editor_layout(Rect::new(0, 0, 40, 20));
        assert_eq!(title.height, 3);
        assert_eq!(content.y, 3);
        assert_eq!(content.height, 17);
    }
}
