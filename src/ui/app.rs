use crate::config::AppConfig;
use crate::error::{BoardError, DropError};
use crate::game::{GameEngine, GameStatus, PlayerId};
use crossterm::event::{self, Event, KeyCode, KeyEvent};
use ratatui::{backend::Backend, Terminal};
use std::io;

use super::theme::Theme;

// Seat ids are fixed; the config only decides how each seat is displayed.
const SEAT_ONE: PlayerId = PlayerId::new(0);
const SEAT_TWO: PlayerId = PlayerId::new(1);

pub struct App {
    engine: GameEngine,
    theme: Theme,
    selected_column: usize,
    last_drop: Option<(usize, usize)>,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(config: &AppConfig) -> Result<Self, BoardError> {
        let engine = GameEngine::new(config.board.rows, config.board.cols, SEAT_ONE, SEAT_TWO)?;
        let selected_column = engine.cols() / 2;
        Ok(App {
            engine,
            theme: Theme::from_config(&config.players, SEAT_ONE, SEAT_TWO),
            selected_column,
            last_drop: None,
            should_quit: false,
            message: None,
        })
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }
        Ok(())
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                if self.selected_column > 0 {
                    self.selected_column -= 1;
                }
            }
            KeyCode::Right => {
                if self.selected_column + 1 < self.engine.cols() {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece();
            }
            KeyCode::Char('r') => {
                self.engine.reset(SEAT_ONE, SEAT_TWO);
                self.selected_column = self.engine.cols() / 2;
                self.last_drop = None;
                self.message = Some("New game started!".to_string());
            }
            _ => {}
        }
    }

    /// Drop a piece in the selected column
    fn drop_piece(&mut self) {
        match self.engine.drop_piece(self.selected_column) {
            Ok(outcome) => {
                self.last_drop = Some((outcome.row, outcome.column));
                self.message = match outcome.status {
                    GameStatus::InProgress => None,
                    GameStatus::Won(winner) => {
                        Some(format!("{} wins!", self.theme.style(winner).name))
                    }
                    GameStatus::Draw => Some("It's a draw!".to_string()),
                };
            }
            Err(DropError::ColumnFull { .. }) => {
                self.message = Some("Column is full!".to_string());
            }
            Err(DropError::InvalidColumn { .. }) => {
                self.message = Some("Invalid column!".to_string());
            }
            Err(DropError::GameAlreadyOver) => {
                self.message = Some("Game over! Press 'r' to restart.".to_string());
            }
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(
            frame,
            &self.engine,
            &self.theme,
            self.selected_column,
            self.last_drop,
            &self.message,
        );
    }
}
