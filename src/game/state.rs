use super::board::{self, Board, WinLine, COLS};
use super::Player;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Player),
    Draw,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    ColumnFull,
    InvalidColumn,
    GameOver,
}

/// The authoritative live position: board, side to move, and how the game
/// ended, if it has. Whoever won also gets the four cells that won it, for
/// highlighting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    current_player: Player,
    outcome: Option<GameOutcome>,
    win_line: Option<WinLine>,
}

impl GameState {
    /// Create a game with the given side to open. Either side may start;
    /// the session controller flips a coin per game.
    pub fn new(starting: Player) -> Self {
        GameState {
            board: Board::new(),
            current_player: starting,
            outcome: None,
            win_line: None,
        }
    }

    /// Create initial game state with Red to open.
    pub fn initial() -> Self {
        Self::new(Player::Red)
    }

    /// Get current player
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Get game outcome if game is over
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// The four cells of the winning line, once a win ended the game.
    pub fn win_line(&self) -> Option<WinLine> {
        self.win_line
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    /// Get list of legal columns (not full)
    pub fn legal_actions(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }

        (0..COLS)
            .filter(|&col| self.board.is_valid_location(col))
            .collect()
    }

    /// Apply a move for the side to play, mutating in place.
    pub fn apply_move_mut(&mut self, column: usize) -> Result<(), MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }

        let mover = self.current_player;
        self.board
            .drop_in_column(column, mover.to_cell())
            .map_err(|e| match e {
                board::MoveError::ColumnFull => MoveError::ColumnFull,
                board::MoveError::InvalidColumn => MoveError::InvalidColumn,
            })?;

        if let Some(line) = self.board.winning_line(mover.to_cell()) {
            self.outcome = Some(GameOutcome::Winner(mover));
            self.win_line = Some(line);
        } else if self.board.is_full() {
            self.outcome = Some(GameOutcome::Draw);
        }

        self.current_player = mover.other();
        Ok(())
    }

    /// Apply a move and return the successor state, leaving `self` untouched.
    pub fn apply_move(&self, column: usize) -> Result<GameState, MoveError> {
        let mut next = *self;
        next.apply_move_mut(column)?;
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::super::Cell;
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = GameState::initial();
        assert_eq!(state.current_player(), Player::Red);
        assert!(!state.is_terminal());
        assert_eq!(state.legal_actions(), vec![0, 1, 2, 3, 4, 5, 6]);
        assert_eq!(state.win_line(), None);
    }

    #[test]
    fn test_either_side_may_open() {
        let state = GameState::new(Player::Yellow);
        assert_eq!(state.current_player(), Player::Yellow);
    }

    #[test]
    fn test_apply_move() {
        let state = GameState::initial();
        let next = state.apply_move(3).unwrap();

        assert_eq!(next.current_player(), Player::Yellow);
        assert_eq!(next.board().get(5, 3), Cell::Red);
        // The original state is unchanged
        assert_eq!(state.board().get(5, 3), Cell::Empty);
    }

    #[test]
    fn test_win_records_outcome_and_line() {
        let mut state = GameState::initial();

        // Red builds the bottom row 0..=3, Yellow stacks above
        for col in 0..3 {
            state.apply_move_mut(col).unwrap(); // Red
            state.apply_move_mut(col).unwrap(); // Yellow
        }
        state.apply_move_mut(3).unwrap(); // Red completes the line

        assert!(state.is_terminal());
        assert_eq!(state.outcome(), Some(GameOutcome::Winner(Player::Red)));
        assert_eq!(state.win_line(), Some([(5, 0), (5, 1), (5, 2), (5, 3)]));
        assert!(state.legal_actions().is_empty());
    }

    #[test]
    fn test_move_after_game_over_fails() {
        let mut state = GameState::initial();
        for col in 0..3 {
            state.apply_move_mut(col).unwrap();
            state.apply_move_mut(col).unwrap();
        }
        state.apply_move_mut(3).unwrap();

        assert_eq!(state.apply_move_mut(4), Err(MoveError::GameOver));
    }

    #[test]
    fn test_full_column_rejected() {
        let mut state = GameState::initial();
        for _ in 0..6 {
            state.apply_move_mut(0).unwrap();
        }
        assert_eq!(state.apply_move_mut(0), Err(MoveError::ColumnFull));
        assert_eq!(state.apply_move_mut(9), Err(MoveError::InvalidColumn));
    }

    #[test]
    fn test_draw() {
        // A filled board with no four-in-a-row anywhere: columns 0,1,3,4,6
        // alternate starting Red at the bottom, columns 2 and 5 alternate
        // starting Yellow. Pairing same-stack columns keeps the strict
        // move alternation intact.
        let mut sequence = vec![0; 6];
        sequence.extend_from_slice(&[1; 6]);
        sequence.extend_from_slice(&[3, 2, 2, 3, 3, 2, 2, 3, 3, 2, 2, 3]);
        sequence.extend_from_slice(&[4, 5, 5, 4, 4, 5, 5, 4, 4, 5, 5, 4]);
        sequence.extend_from_slice(&[6; 6]);

        let mut state = GameState::initial();
        for &col in &sequence {
            assert!(!state.is_terminal(), "game ended early at column {col}");
            state.apply_move_mut(col).unwrap();
        }

        assert!(state.board().is_full());
        assert_eq!(state.outcome(), Some(GameOutcome::Draw));
        assert_eq!(state.win_line(), None);
    }
}
