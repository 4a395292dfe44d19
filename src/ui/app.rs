use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use ratatui::{backend::Backend, Terminal};

use crate::ai::{Agent, MinimaxAgent};
use crate::config::{AppConfig, Difficulty};
use crate::game::{GameOutcome, GameState, MoveError, Player};

/// The human always plays Red; the computer plays Yellow.
const HUMAN: Player = Player::Red;
const AI: Player = Player::Yellow;

/// Which screen currently owns input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Screen {
    StartMenu,
    Playing,
    Paused,
    GameOver,
}

pub struct App {
    config: AppConfig,
    screen: Screen,
    difficulty: Difficulty,
    game: GameState,
    agent: MinimaxAgent,
    selected_column: usize,
    message: Option<String>,
    winner_text: Option<String>,
    /// Armed while the computer is "thinking": the engine runs once this
    /// deadline passes. Cleared on pause and on game end, re-armed on resume.
    ai_deadline: Option<Instant>,
    rng: StdRng,
    should_quit: bool,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        let difficulty = config.game.difficulty;
        let depth = config.search.depth_for(difficulty);
        App {
            screen: Screen::StartMenu,
            difficulty,
            game: GameState::new(HUMAN),
            agent: MinimaxAgent::new(AI, depth),
            selected_column: 3, // Start in middle
            message: None,
            winner_text: None,
            ai_deadline: None,
            rng: StdRng::from_os_rng(),
            should_quit: false,
            config,
        }
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
            self.step_ai();
        }
        Ok(())
    }

    /// Handle keyboard events. The short poll keeps the AI deadline
    /// responsive while the terminal is idle.
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }
        Ok(())
    }

    fn handle_key(&mut self, key: KeyEvent) {
        match self.screen {
            Screen::StartMenu => self.handle_menu_key(key),
            Screen::Playing => self.handle_game_key(key),
            Screen::Paused => self.handle_pause_key(key),
            Screen::GameOver => self.handle_game_over_key(key),
        }
    }

    fn handle_menu_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left | KeyCode::Up => {
                self.difficulty = cycle_difficulty(self.difficulty, -1);
            }
            KeyCode::Right | KeyCode::Down => {
                self.difficulty = cycle_difficulty(self.difficulty, 1);
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.start_game();
            }
            _ => {}
        }
    }

    fn handle_game_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        match key.code {
            KeyCode::Char('q') => {
                self.should_quit = true;
            }
            KeyCode::Char('p') | KeyCode::Esc => {
                self.pause();
            }
            KeyCode::Left => {
                if self.selected_column > 0 {
                    self.selected_column -= 1;
                }
            }
            KeyCode::Right => {
                if self.selected_column < 6 {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece();
            }
            KeyCode::Char('r') => {
                self.start_game();
            }
            _ => {}
        }
    }

    fn handle_pause_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => {
                self.should_quit = true;
            }
            KeyCode::Char('p') | KeyCode::Enter | KeyCode::Esc => {
                // Resume; step_ai re-arms the deadline if the computer is to move
                self.screen = Screen::Playing;
            }
            KeyCode::Char('r') => {
                self.start_game();
            }
            KeyCode::Char('m') => {
                self.screen = Screen::StartMenu;
            }
            _ => {}
        }
    }

    fn handle_game_over_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => {
                self.should_quit = true;
            }
            KeyCode::Char('r') | KeyCode::Enter => {
                self.start_game();
            }
            KeyCode::Char('m') | KeyCode::Esc => {
                self.screen = Screen::StartMenu;
            }
            _ => {}
        }
    }

    /// Begin a fresh game at the currently selected difficulty. Either side
    /// may open; the coin flip matches the original game's behavior.
    fn start_game(&mut self) {
        let depth = self.config.search.depth_for(self.difficulty);
        let starting = if self.rng.random_bool(0.5) { AI } else { HUMAN };

        self.game = GameState::new(starting);
        self.agent = MinimaxAgent::new(AI, depth);
        self.selected_column = 3;
        self.message = None;
        self.winner_text = None;
        self.ai_deadline = None;
        self.screen = Screen::Playing;
    }

    fn pause(&mut self) {
        self.screen = Screen::Paused;
        // Cancel the pending computer move; resume re-arms it
        self.ai_deadline = None;
    }

    /// Drop the human's piece in the selected column.
    fn drop_piece(&mut self) {
        if self.game.is_terminal() || self.game.current_player() != HUMAN {
            return;
        }

        match self.game.apply_move_mut(self.selected_column) {
            Ok(()) => self.after_move(),
            Err(MoveError::ColumnFull) => {
                self.message = Some("Column is full!".to_string());
            }
            Err(MoveError::InvalidColumn) => {
                self.message = Some("Invalid column!".to_string());
            }
            Err(MoveError::GameOver) => {
                self.message = Some("Game is over!".to_string());
            }
        }
    }

    /// Run the computer's move once its presentation delay has elapsed. The
    /// engine call is synchronous and no input is processed while it runs,
    /// so exactly one side ever mutates the live board.
    fn step_ai(&mut self) {
        if self.screen != Screen::Playing
            || self.game.is_terminal()
            || self.game.current_player() != AI
        {
            return;
        }

        match self.ai_deadline {
            None => self.arm_ai_deadline(),
            Some(deadline) if Instant::now() >= deadline => {
                self.ai_deadline = None;
                let col = self.agent.select_action(&self.game);
                match self.game.apply_move_mut(col) {
                    Ok(()) => self.after_move(),
                    Err(err) => {
                        self.message = Some(format!("AI move failed: {err:?}"));
                    }
                }
            }
            Some(_) => {}
        }
    }

    fn arm_ai_deadline(&mut self) {
        let delay = Duration::from_millis(self.config.game.ai_move_delay_ms);
        self.ai_deadline = Some(Instant::now() + delay);
    }

    /// Check for game end after either side's move.
    fn after_move(&mut self) {
        if let Some(outcome) = self.game.outcome() {
            self.winner_text = Some(match outcome {
                GameOutcome::Winner(player) if player == HUMAN => "You Win!".to_string(),
                GameOutcome::Winner(_) => "AI Wins!".to_string(),
                GameOutcome::Draw => "It's a draw!".to_string(),
            });
            self.ai_deadline = None;
            self.screen = Screen::GameOver;
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        match self.screen {
            Screen::StartMenu => {
                super::menu::render_start(frame, self.difficulty);
            }
            Screen::Playing => {
                self.render_game(frame);
            }
            Screen::Paused => {
                self.render_game(frame);
                super::menu::render_pause(frame);
            }
            Screen::GameOver => {
                self.render_game(frame);
                let text = self.winner_text.as_deref().unwrap_or("Game Over");
                super::menu::render_game_over(frame, text);
            }
        }
    }

    fn render_game(&self, frame: &mut ratatui::Frame) {
        let show_selector =
            !self.game.is_terminal() && self.game.current_player() == HUMAN;
        super::game_view::render(
            frame,
            &self.game,
            self.selected_column,
            show_selector,
            self.ai_deadline.is_some(),
            &self.message,
            self.difficulty,
        );
    }
}

fn cycle_difficulty(current: Difficulty, step: isize) -> Difficulty {
    let all = Difficulty::ALL;
    let idx = all.iter().position(|&d| d == current).unwrap_or(1) as isize;
    let next = (idx + step).rem_euclid(all.len() as isize) as usize;
    all[next]
}
