//! Keyboard helpers: cursor movement, digit shortcuts, and the name form.

use crossterm::event::KeyCode;
use strictly_tris::Position;

/// Moves the cursor one cell in the arrow's direction, stopping at the edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, column) = (cursor.row(), cursor.column());

    let target = match key {
        KeyCode::Up => row.checked_sub(1).map(|r| (r, column)),
        KeyCode::Down => Some((row + 1, column)),
        KeyCode::Left => column.checked_sub(1).map(|c| (row, c)),
        KeyCode::Right => Some((row, column + 1)),
        _ => None,
    };

    target
        .and_then(|(r, c)| Position::from_row_column(r, c))
        .unwrap_or(cursor)
}

/// Maps the keys `1`-`9` to board indices 0-8.
pub fn digit_to_index(c: char) -> Option<usize> {
    match c.to_digit(10)? {
        0 => None,
        d => Some(d as usize - 1),
    }
}

/// Which name field has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Field {
    /// Player 1 (X).
    #[default]
    First,
    /// Player 2 (O).
    Second,
}

impl Field {
    /// Returns the other field.
    pub fn toggle(self) -> Self {
        match self {
            Field::First => Field::Second,
            Field::Second => Field::First,
        }
    }

    fn slot(self) -> usize {
        match self {
            Field::First => 0,
            Field::Second => 1,
        }
    }
}

/// Longest name the form accepts.
pub const MAX_NAME_LEN: usize = 24;

/// The two text inputs shown before a match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameForm {
    names: [String; 2],
    focus: Field,
}

impl NameForm {
    /// Creates a form pre-filled with the given names.
    pub fn new(player1: Option<String>, player2: Option<String>) -> Self {
        Self {
            names: [player1.unwrap_or_default(), player2.unwrap_or_default()],
            focus: Field::First,
        }
    }

    /// The raw text of a field.
    pub fn name(&self, field: Field) -> &str {
        &self.names[field.slot()]
    }

    /// The field with focus.
    pub fn focus(&self) -> Field {
        self.focus
    }

    /// Moves focus to the other field.
    pub fn toggle_focus(&mut self) {
        self.focus = self.focus.toggle();
    }

    /// Appends a printable character to the focused field.
    pub fn push(&mut self, c: char) {
        let name = &mut self.names[self.focus.slot()];
        if !c.is_control() && name.chars().count() < MAX_NAME_LEN {
            name.push(c);
        }
    }

    /// Deletes the last character of the focused field.
    pub fn pop(&mut self) {
        self.names[self.focus.slot()].pop();
    }

    /// Both names with surrounding whitespace removed.
    pub fn trimmed(&self) -> (&str, &str) {
        (self.names[0].trim(), self.names[1].trim())
    }
}
