use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{backend::Backend, Terminal};
use tracing::{debug, error, warn};

use super::theme::Theme;
use crate::ai::Agent;
use crate::config::{AppConfig, ThemeKind};
use crate::error::EngineError;
use crate::game::{GameState, GameStatus, Side, COLS};

/// Longest wait for input when nothing is scheduled.
const IDLE_POLL: Duration = Duration::from_millis(100);

/// A disc falling toward its landing row. The move is only applied to the
/// game once the disc arrives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropAnimation {
    pub col: usize,
    pub target_row: usize,
    pub side: Side,
    /// Row the disc is drawn in; `None` while it is still above the board.
    pub ghost_row: Option<usize>,
    next_frame: Instant,
}

pub struct App {
    game_state: GameState,
    opponent: Box<dyn Agent>,
    selected_column: usize,
    theme: ThemeKind,
    animation: Option<DropAnimation>,
    ai_deadline: Option<Instant>,
    ai_delay: Duration,
    frame_interval: Duration,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(config: &AppConfig) -> Self {
        Self::with_opponent(config, config.game.opponent.build())
    }

    pub fn with_opponent(config: &AppConfig, opponent: Box<dyn Agent>) -> Self {
        let mut app = App {
            game_state: GameState::with_ai(config.game.ai_config()),
            opponent,
            selected_column: COLS / 2, // Start in middle
            theme: config.ui.theme,
            animation: None,
            ai_deadline: None,
            ai_delay: Duration::from_millis(config.ui.ai_delay_ms),
            frame_interval: Duration::from_millis(config.ui.drop_frame_ms),
            should_quit: false,
            message: None,
        };
        // The computer opens when it plays first
        app.schedule_ai(Instant::now());
        app
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()>
    where
        B::Error: Into<io::Error>,
    {
        loop {
            terminal
                .draw(|f| self.render(f))
                .map_err(Into::<io::Error>::into)?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
            self.tick(Instant::now());
        }
        Ok(())
    }

    pub fn game_state(&self) -> &GameState {
        &self.game_state
    }

    pub fn selected_column(&self) -> usize {
        self.selected_column
    }

    pub fn animation(&self) -> Option<&DropAnimation> {
        self.animation.as_ref()
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn theme(&self) -> Theme {
        Theme::for_kind(self.theme)
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// True while a computer move is waiting for its delay to pass.
    pub fn ai_pending(&self) -> bool {
        self.ai_deadline.is_some()
    }

    /// Handle keyboard events, waking early for the next animation frame or
    /// computer move.
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(self.poll_timeout(Instant::now()))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key, Instant::now());
                }
            }
        }
        Ok(())
    }

    fn poll_timeout(&self, now: Instant) -> Duration {
        [self.animation.map(|anim| anim.next_frame), self.ai_deadline]
            .into_iter()
            .flatten()
            .map(|deadline| deadline.saturating_duration_since(now))
            .min()
            .map_or(IDLE_POLL, |wait| wait.min(IDLE_POLL))
    }

    /// Handle key press
    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        // Clear message on any key press
        self.message = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('z') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.undo(now);
            }
            KeyCode::Char('u') => self.undo(now),
            KeyCode::Left => {
                self.selected_column = self.selected_column.saturating_sub(1);
            }
            KeyCode::Right => {
                if self.selected_column + 1 < COLS {
                    self.selected_column += 1;
                }
            }
            KeyCode::Char(c) if column_key(c).is_some() => {
                if let Some(col) = column_key(c) {
                    self.selected_column = col;
                    self.request_drop(now);
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.request_drop(now),
            KeyCode::Char('n') | KeyCode::Char('r') => self.new_game(now),
            KeyCode::Char('c') => self.toggle_vs_computer(now),
            KeyCode::Char('s') => self.switch_ai_side(now),
            KeyCode::Char('t') => {
                self.theme = match self.theme {
                    ThemeKind::Light => ThemeKind::Dark,
                    ThemeKind::Dark => ThemeKind::Light,
                };
            }
            _ => {}
        }
    }

    /// Advance the drop animation and fire a due computer move.
    pub fn tick(&mut self, now: Instant) {
        self.advance_animation(now);

        if self.animation.is_none() {
            if let Some(deadline) = self.ai_deadline {
                if now >= deadline {
                    self.ai_deadline = None;
                    self.play_ai_move(now);
                }
            }
        }
    }

    /// Human drop in the selected column
    fn request_drop(&mut self, now: Instant) {
        if self.animation.is_some() {
            return;
        }
        if self.game_state.is_terminal() {
            self.message = Some("Game over! Press 'n' to start a new game.".to_string());
            return;
        }
        if self.game_state.is_ai_turn() {
            self.message = Some("Wait for the computer's move.".to_string());
            return;
        }
        self.start_drop(self.selected_column, now);
    }

    fn start_drop(&mut self, col: usize, now: Instant) {
        match self.game_state.board().landing_row(col) {
            Ok(target_row) => {
                self.animation = Some(DropAnimation {
                    col,
                    target_row,
                    side: self.game_state.side_to_move(),
                    ghost_row: None,
                    next_frame: now + self.frame_interval,
                });
            }
            Err(err) => {
                warn!(%err, col, "drop rejected");
                self.message = Some(describe(err).to_string());
            }
        }
    }

    fn advance_animation(&mut self, now: Instant) {
        let interval = self.frame_interval;
        while let Some(anim) = self.animation.as_mut() {
            if now < anim.next_frame {
                return;
            }
            match anim.ghost_row {
                Some(row) if row >= anim.target_row => {
                    let col = anim.col;
                    self.animation = None;
                    self.commit(col, now);
                }
                Some(row) => {
                    anim.ghost_row = Some(row + 1);
                    anim.next_frame += interval;
                }
                None => {
                    anim.ghost_row = Some(0);
                    anim.next_frame += interval;
                }
            }
        }
    }

    /// Apply a landed disc to the game
    fn commit(&mut self, col: usize, now: Instant) {
        match self.game_state.apply_move(col) {
            Ok(outcome) => {
                if outcome.status.is_terminal() {
                    self.message = Some(outcome_message(outcome.status));
                }
                self.schedule_ai(now);
            }
            Err(err) => {
                warn!(%err, col, "move rejected");
                self.message = Some(describe(err).to_string());
            }
        }
    }

    fn schedule_ai(&mut self, now: Instant) {
        self.ai_deadline = self
            .game_state
            .is_ai_turn()
            .then(|| now + self.ai_delay);
    }

    fn play_ai_move(&mut self, now: Instant) {
        if !self.game_state.is_ai_turn() {
            return;
        }
        match self.opponent.select_action(&self.game_state) {
            Ok(col) => {
                debug!(col, agent = self.opponent.name(), "computer move");
                self.start_drop(col, now);
            }
            Err(err) => {
                // Only reachable if the game missed a draw
                error!(%err, "computer opponent has no move");
                self.message = Some(describe(err).to_string());
            }
        }
    }

    fn undo(&mut self, now: Instant) {
        // A disc still falling never reached the game; dropping it is enough
        self.animation = None;
        self.ai_deadline = None;

        match self.game_state.undo() {
            Ok(outcome) => {
                self.message = Some(match outcome.reverted.len() {
                    1 => "Undid 1 move.".to_string(),
                    n => format!("Undid {n} moves."),
                });
            }
            Err(err) => self.message = Some(describe(err).to_string()),
        }
        self.schedule_ai(now);
    }

    fn new_game(&mut self, now: Instant) {
        self.animation = None;
        self.game_state.reset();
        self.selected_column = COLS / 2;
        self.message = Some("New game started!".to_string());
        self.schedule_ai(now);
    }

    fn toggle_vs_computer(&mut self, now: Instant) {
        self.animation = None;
        let enabled = !self.game_state.is_ai_enabled();
        self.game_state.set_ai_enabled(enabled);
        self.message = Some(if enabled {
            format!("Playing against the computer ({}).", self.opponent.name())
        } else {
            "Two-player mode.".to_string()
        });
        self.schedule_ai(now);
    }

    fn switch_ai_side(&mut self, now: Instant) {
        self.animation = None;
        self.game_state.switch_ai_side();
        self.message = Some(format!(
            "Computer now plays {}.",
            super::game_view::side_name(self.game_state.ai_side())
        ));
        self.schedule_ai(now);
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(frame, self);
    }
}

/// Column for a digit key, `'1'` being the leftmost.
fn column_key(c: char) -> Option<usize> {
    let digit = c.to_digit(10)? as usize;
    (1..=COLS).contains(&digit).then(|| digit - 1)
}

fn describe(err: EngineError) -> &'static str {
    match err {
        EngineError::ColumnFull { .. } => "Column is full! Try another column.",
        EngineError::InvalidColumn { .. } => "Invalid column!",
        EngineError::GameOver => "Game is over!",
        EngineError::NothingToUndo => "Nothing to undo.",
        EngineError::NoLegalMove => "No legal move left.",
    }
}

fn outcome_message(status: GameStatus) -> String {
    match status {
        GameStatus::Won(side) => format!("{} wins!", super::game_view::side_name(side)),
        GameStatus::Drawn => "It's a draw!".to_string(),
        GameStatus::InProgress => String::new(),
    }
}
