//! Application state and key handling.

use super::input::{NameForm, digit_to_index, move_cursor};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use derive_getters::Getters;
use std::sync::mpsc::{self, Receiver, Sender};
use strictly_tris::{Announcement, Board, Game, GameEvent, Position};
use tracing::{debug, info, instrument};

/// Which screen is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Collecting player names.
    NameEntry,
    /// A match is on the board.
    Playing,
}

/// Main application state.
///
/// Owns the engine and the receiving end of its event channel. The board
/// shown on screen is the snapshot carried by the last render event.
#[derive(Debug, Getters)]
pub struct App {
    #[getter(skip)]
    game: Game<Sender<GameEvent>>,
    #[getter(skip)]
    events: Receiver<GameEvent>,
    screen: Screen,
    form: NameForm,
    status: String,
    view: Board,
    cursor: Position,
    should_quit: bool,
}

impl App {
    /// Creates the app on the name-entry screen.
    #[instrument]
    pub fn new(player1: Option<String>, player2: Option<String>) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            game: Game::new(tx),
            events: rx,
            screen: Screen::NameEntry,
            form: NameForm::new(player1, player2),
            status: Announcement::Prompt.to_string(),
            view: Board::new(),
            cursor: Position::Center,
            should_quit: false,
        }
    }

    /// Read access to the engine.
    pub fn game(&self) -> &Game<Sender<GameEvent>> {
        &self.game
    }

    /// Handles a key press.
    #[instrument(skip(self), fields(screen = ?self.screen))]
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if key.kind != KeyEventKind::Press {
            return Ok(());
        }

        match self.screen {
            Screen::NameEntry => self.handle_form_key(key.code),
            Screen::Playing => self.handle_board_key(key.code),
        }
    }

    fn handle_form_key(&mut self, code: KeyCode) -> Result<()> {
        match code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Enter => self.start_match()?,
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
                self.form.toggle_focus()
            }
            KeyCode::Backspace => self.form.pop(),
            KeyCode::Char(c) => self.form.push(c),
            _ => {}
        }
        Ok(())
    }

    fn handle_board_key(&mut self, code: KeyCode) -> Result<()> {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('r') => self.reset(),
            KeyCode::Enter | KeyCode::Char(' ') => self.play(self.cursor.to_index())?,
            KeyCode::Char(c) => {
                if let Some(index) = digit_to_index(c) {
                    self.cursor = Position::from_index(index).unwrap_or(self.cursor);
                    self.play(index)?;
                }
            }
            arrow => self.cursor = move_cursor(self.cursor, arrow),
        }
        Ok(())
    }

    /// Seats the names from the form and starts a match.
    #[instrument(skip(self))]
    pub fn start_match(&mut self) -> Result<()> {
        let (name0, name1) = self.form.trimmed();
        self.game.set_players(name0, name1);
        self.game.reset_game();

        let first = self.game.current_player()?;
        self.status = Announcement::turn(first).to_string();
        self.view = *self.game.board();
        self.cursor = Position::Center;
        self.screen = Screen::Playing;
        self.drain_events();

        info!(status = %self.status, "Match started");
        Ok(())
    }

    /// Clears the match and returns to the name form.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.game.reset_game();
        self.drain_events();
        self.view = *self.game.board();
        self.status = Announcement::Prompt.to_string();
        self.screen = Screen::NameEntry;
        info!("Match reset");
    }

    /// Plays the current player's marker at `index`.
    ///
    /// Ignored once the match is over or when the cell is taken.
    #[instrument(skip(self))]
    pub fn play(&mut self, index: usize) -> Result<()> {
        if self.game.is_game_over() {
            debug!("Match over, ignoring move");
            return Ok(());
        }

        if !self.game.play_turn(index)? {
            debug!(index, "Move rejected");
        }
        self.drain_events();
        Ok(())
    }

    fn drain_events(&mut self) {
        while let Ok(event) = self.events.try_recv() {
            debug!(?event, "Handling game event");
            match event {
                GameEvent::Result(announcement) => self.status = announcement.to_string(),
                GameEvent::Render(board) => self.view = board,
            }
        }
    }
}
