use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::game::{Board, GameState, Player, COLS, ROWS};

use super::agent::Agent;

/// Terminal sentinel returned for a decided position. Strictly dominates any
/// score the window heuristic can produce, so a forced win or loss always
/// outranks heuristic differences.
pub const WIN_SCORE: f64 = 1e14;

/// Trait for evaluating a board position from a player's perspective.
pub trait Heuristic: Send {
    fn evaluate(&self, board: &Board, player: Player) -> i32;
}

/// Fixed hand-tuned heuristic over all 4-cell windows, plus a center-column
/// bonus. The constants are load-bearing for move-choice parity: 100 for a
/// completed window, 5 for three own with one gap, 2 for two own with two
/// gaps, -4 for three opposing with one gap, 0 otherwise.
pub struct WindowHeuristic;

impl WindowHeuristic {
    fn score_window(own: usize, opp: usize, empty: usize) -> i32 {
        let mut score = 0;
        if own == 4 {
            score += 100;
        } else if own == 3 && empty == 1 {
            score += 5;
        } else if own == 2 && empty == 2 {
            score += 2;
        }
        if opp == 3 && empty == 1 {
            score -= 4;
        }
        score
    }
}

impl Heuristic for WindowHeuristic {
    fn evaluate(&self, board: &Board, player: Player) -> i32 {
        let own_cell = player.to_cell();
        let opp_cell = player.other().to_cell();
        let mut score = 0;

        // Center column bonus: own pieces only
        let center = COLS / 2;
        for row in 0..ROWS {
            if board.get(row, center) == own_cell {
                score += 3;
            }
        }

        // Scan all 4-cell windows

        // Horizontal
        for row in 0..ROWS {
            for col in 0..=COLS - 4 {
                let mut own = 0;
                let mut opp = 0;
                let mut empty = 0;
                for i in 0..4 {
                    match board.get(row, col + i) {
                        c if c == own_cell => own += 1,
                        c if c == opp_cell => opp += 1,
                        _ => empty += 1,
                    }
                }
                score += Self::score_window(own, opp, empty);
            }
        }

        // Vertical
        for col in 0..COLS {
            for row in 0..=ROWS - 4 {
                let mut own = 0;
                let mut opp = 0;
                let mut empty = 0;
                for i in 0..4 {
                    match board.get(row + i, col) {
                        c if c == own_cell => own += 1,
                        c if c == opp_cell => opp += 1,
                        _ => empty += 1,
                    }
                }
                score += Self::score_window(own, opp, empty);
            }
        }

        // Diagonal (top-left to bottom-right)
        for row in 0..=ROWS - 4 {
            for col in 0..=COLS - 4 {
                let mut own = 0;
                let mut opp = 0;
                let mut empty = 0;
                for i in 0..4 {
                    match board.get(row + i, col + i) {
                        c if c == own_cell => own += 1,
                        c if c == opp_cell => opp += 1,
                        _ => empty += 1,
                    }
                }
                score += Self::score_window(own, opp, empty);
            }
        }

        // Diagonal (bottom-left to top-right)
        for row in 3..ROWS {
            for col in 0..=COLS - 4 {
                let mut own = 0;
                let mut opp = 0;
                let mut empty = 0;
                for i in 0..4 {
                    match board.get(row - i, col + i) {
                        c if c == own_cell => own += 1,
                        c if c == opp_cell => opp += 1,
                        _ => empty += 1,
                    }
                }
                score += Self::score_window(own, opp, empty);
            }
        }

        score
    }
}

/// Depth-bounded minimax with alpha-beta pruning, maximizing for `side`.
pub struct MinimaxAgent {
    side: Player,
    depth: usize,
    heuristic: Box<dyn Heuristic>,
    rng: StdRng,
}

impl MinimaxAgent {
    pub fn new(side: Player, depth: usize) -> Self {
        Self::with_heuristic(side, depth, Box::new(WindowHeuristic))
    }

    /// Seeded variant for reproducible tie-breaking under test.
    pub fn with_seed(side: Player, depth: usize, seed: u64) -> Self {
        let mut agent = Self::new(side, depth);
        agent.rng = StdRng::seed_from_u64(seed);
        agent
    }

    pub fn with_heuristic(side: Player, depth: usize, heuristic: Box<dyn Heuristic>) -> Self {
        assert!(depth >= 1, "search depth must be at least 1");
        MinimaxAgent {
            side,
            depth,
            heuristic,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Search `board` to the given remaining depth and return the chosen
    /// column with its value. The maximizing mover places this agent's piece,
    /// the minimizing mover the opponent's.
    ///
    /// Base cases return no column: a position the agent has won is
    /// `+WIN_SCORE`, one the opponent has won `-WIN_SCORE`, a full board with
    /// no winner 0, and an exhausted depth the heuristic score. Each child is
    /// searched on its own board copy, so the caller's board is never touched.
    pub fn minimax(
        &mut self,
        board: &Board,
        depth: usize,
        mut alpha: f64,
        mut beta: f64,
        maximizing: bool,
    ) -> (Option<usize>, f64) {
        let own = self.side.to_cell();
        let opp = self.side.other().to_cell();
        let valid = board.valid_locations();
        let terminal = board.winning_line(own).is_some()
            || board.winning_line(opp).is_some()
            || valid.is_empty();

        if depth == 0 || terminal {
            if terminal {
                if board.winning_line(own).is_some() {
                    return (None, WIN_SCORE);
                } else if board.winning_line(opp).is_some() {
                    return (None, -WIN_SCORE);
                }
                return (None, 0.0); // full board, no winner
            }
            return (None, f64::from(self.heuristic.evaluate(board, self.side)));
        }

        // Fallback candidate when no child strictly improves the running
        // best: a uniformly random open column.
        let mut column = valid[self.rng.random_range(0..valid.len())];

        if maximizing {
            let mut value = f64::NEG_INFINITY;
            for &col in &valid {
                let row = board.next_open_row(col).unwrap();
                let mut child = *board;
                child.drop_piece(row, col, own);
                let (_, score) = self.minimax(&child, depth - 1, alpha, beta, false);
                if score > value {
                    value = score;
                    column = col;
                }
                alpha = alpha.max(value);
                if alpha >= beta {
                    break;
                }
            }
            (Some(column), value)
        } else {
            let mut value = f64::INFINITY;
            for &col in &valid {
                let row = board.next_open_row(col).unwrap();
                let mut child = *board;
                child.drop_piece(row, col, opp);
                let (_, score) = self.minimax(&child, depth - 1, alpha, beta, true);
                if score < value {
                    value = score;
                    column = col;
                }
                beta = beta.min(value);
                if alpha >= beta {
                    break;
                }
            }
            (Some(column), value)
        }
    }
}

impl Agent for MinimaxAgent {
    fn select_action(&mut self, state: &GameState) -> usize {
        assert!(
            !state.legal_actions().is_empty(),
            "No legal actions available"
        );
        let depth = self.depth;
        let (column, _) = self.minimax(
            state.board(),
            depth,
            f64::NEG_INFINITY,
            f64::INFINITY,
            true,
        );
        column.expect("a live position searched at depth >= 1 yields a column")
    }

    fn name(&self) -> &str {
        "Minimax"
    }
}
