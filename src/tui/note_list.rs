use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use regex::Regex;

/// Cursor and type-to-filter state for the note list.
///
/// The list only knows each row's filter key; rows are identified by their
/// index into the caller's collection, so the caller keeps ownership of the
/// items themselves.
#[derive(Debug, Clone, Default)]
pub struct NoteList {
    keys: Vec<String>,
    /// Indices into `keys` that pass the filter, in display order
    visible: Vec<usize>,
    /// Cursor position within `visible`
    cursor: usize,
    filter: String,
    /// Filter prompt is open and receiving keystrokes
    filtering: bool,
}

impl NoteList {
    /// Replace the rows. The filter is kept and re-applied.
    pub fn set_items<'a>(&mut self, keys: impl IntoIterator<Item = &'a str>) {
        self.keys = keys.into_iter().map(str::to_string).collect();
        self.refilter();
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Visible row indices in display order
    pub fn visible(&self) -> &[usize] {
        &self.visible
    }

    /// Cursor position among the visible rows
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Item index under the cursor
    pub fn highlighted(&self) -> Option<usize> {
        self.visible.get(self.cursor).copied()
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    pub fn is_filtering(&self) -> bool {
        self.filtering
    }

    /// Whether item `index` passes the current filter
    pub fn is_visible(&self, index: usize) -> bool {
        self.visible.contains(&index)
    }

    /// Put the cursor on item `index`. If the filter hides it, the filter is
    /// cleared first.
    pub fn select(&mut self, index: usize) {
        if index >= self.keys.len() {
            return;
        }
        if !self.visible.contains(&index) {
            self.clear_filter();
        }
        if let Some(pos) = self.visible.iter().position(|&i| i == index) {
            self.cursor = pos;
        }
    }

    pub fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        if self.cursor + 1 < self.visible.len() {
            self.cursor += 1;
        }
    }

    /// Feed a key to the filter. Returns true if the key was used.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if self.filtering {
            match key.code {
                KeyCode::Esc => self.clear_filter(),
                KeyCode::Enter => self.filtering = false,
                KeyCode::Backspace => {
                    self.filter.pop();
                    self.refilter();
                }
                KeyCode::Char(c)
                    if !key
                        .modifiers
                        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
                {
                    self.filter.push(c);
                    self.refilter();
                }
                _ => return false,
            }
            return true;
        }

        match key.code {
            KeyCode::Char('/') if key.modifiers.difference(KeyModifiers::SHIFT).is_empty() => {
                self.filtering = true;
                true
            }
            KeyCode::Esc if !self.filter.is_empty() => {
                self.clear_filter();
                true
            }
            _ => false,
        }
    }

    fn clear_filter(&mut self) {
        self.filter.clear();
        self.filtering = false;
        self.refilter();
    }

    fn refilter(&mut self) {
        let re = filter_regex(&self.filter);
        self.visible = self
            .keys
            .iter()
            .enumerate()
            .filter(|(_, key)| re.as_ref().is_none_or(|re| re.is_match(key)))
            .map(|(i, _)| i)
            .collect();
        if self.cursor >= self.visible.len() {
            self.cursor = self.visible.len().saturating_sub(1);
        }
    }
}

/// Case-insensitive matcher for a filter string. The filter is tried as a
/// regex first and falls back to a literal match. `None` matches everything.
fn filter_regex(filter: &str) -> Option<Regex> {
    if filter.is_empty() {
        return None;
    }
    Regex::new(&format!("(?i){}", filter))
        .or_else(|_| Regex::new(&format!("(?i){}", regex::escape(filter))))
        .ok()
}
