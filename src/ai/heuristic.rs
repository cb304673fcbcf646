//! Positional scoring: every window of `connect_length` cells on the board is
//! scored from one player's point of view and the scores are summed, together
//! with a bonus for pieces in the center column.

use crate::game::{Board, Cell, Player};

/// Trait for evaluating a board position from a player's perspective.
pub trait Heuristic: Send {
    fn evaluate(&self, board: &Board, player: Player) -> i64;
}

/// Weight of each of the player's pieces in the center column.
pub const CENTER_WEIGHT: i64 = 6;

/// Default heuristic that scans all windows and scores threats.
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowHeuristic;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct WindowCounts {
    own: usize,
    opp: usize,
    empty: usize,
}

impl WindowCounts {
    fn tally(window: &[Cell], player: Player) -> Self {
        let own_cell = player.to_cell();
        let opp_cell = player.other().to_cell();
        let mut counts = WindowCounts::default();
        for &cell in window {
            match cell {
                c if c == own_cell => counts.own += 1,
                c if c == opp_cell => counts.opp += 1,
                _ => counts.empty += 1,
            }
        }
        counts
    }
}

/// `count == n - gap` without underflowing for short connect lengths.
fn short_by(count: usize, n: usize, gap: usize) -> bool {
    count + gap == n
}

impl WindowHeuristic {
    /// Reward for the player's own pieces in a window.
    pub fn own_score(own: usize, empty: usize, n: usize) -> i64 {
        if own == n {
            1000
        } else if short_by(own, n, 1) && empty == 1 {
            40
        } else if short_by(own, n, 2) && empty == 2 {
            10
        } else {
            1
        }
    }

    /// Penalty for the opponent's pieces in a window.
    pub fn opponent_score(opp: usize, empty: usize, n: usize) -> i64 {
        if short_by(opp, n, 1) && empty == 1 {
            -800
        } else if short_by(opp, n, 2) && empty == 2 {
            -400
        } else if short_by(opp, n, 3) && empty == 3 {
            -10
        } else {
            -1
        }
    }

    /// Score one window for `player`.
    ///
    /// # Panics
    ///
    /// If `window.len() != connect_length`.
    pub fn score_window(window: &[Cell], player: Player, connect_length: usize) -> i64 {
        assert_eq!(
            window.len(),
            connect_length,
            "window length must equal the connect length"
        );
        let counts = WindowCounts::tally(window, player);
        Self::own_score(counts.own, counts.empty, connect_length)
            + Self::opponent_score(counts.opp, counts.empty, connect_length)
    }

    pub fn center_bonus(board: &Board, player: Player) -> i64 {
        let center = board.config().center_column();
        board.count_in_column(center, player.to_cell()) as i64 * CENTER_WEIGHT
    }
}

impl Heuristic for WindowHeuristic {
    fn evaluate(&self, board: &Board, player: Player) -> i64 {
        let n = board.connect_length();
        let windows: i64 = board
            .windows()
            .map(|window| Self::score_window(&window, player, n))
            .sum();
        windows + Self::center_bonus(board, player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::{Agent, RandomAgent};
    use crate::config::BoardConfig;
    use crate::game::GameState;

    use Cell::{Empty as E, Red as R, Yellow as Y};

    fn config(side: usize, connect: usize) -> BoardConfig {
        BoardConfig::new(side, connect).unwrap()
    }

    #[test]
    fn window_table_own_pieces() {
        assert_eq!(WindowHeuristic::own_score(4, 0, 4), 1000);
        assert_eq!(WindowHeuristic::own_score(3, 1, 4), 40);
        assert_eq!(WindowHeuristic::own_score(2, 2, 4), 10);
        assert_eq!(WindowHeuristic::own_score(3, 0, 4), 1);
        assert_eq!(WindowHeuristic::own_score(0, 4, 4), 1);
    }

    #[test]
    fn window_table_opponent_pieces() {
        assert_eq!(WindowHeuristic::opponent_score(3, 1, 4), -800);
        assert_eq!(WindowHeuristic::opponent_score(2, 2, 4), -400);
        assert_eq!(WindowHeuristic::opponent_score(1, 3, 4), -10);
        assert_eq!(WindowHeuristic::opponent_score(0, 4, 4), -1);
        assert_eq!(WindowHeuristic::opponent_score(4, 0, 4), -1);
    }

    #[test]
    fn window_table_short_connect_lengths() {
        // N - 3 does not exist for N = 2
        assert_eq!(WindowHeuristic::opponent_score(0, 2, 2), -400);
        assert_eq!(WindowHeuristic::opponent_score(1, 1, 2), -800);
        assert_eq!(WindowHeuristic::own_score(2, 0, 2), 1000);
    }

    #[test]
    fn full_own_window_earns_win_reward() {
        let score = WindowHeuristic::score_window(&[R, R, R, R], Player::Red, 4);
        assert_eq!(score, 1000 - 1);
        let score = WindowHeuristic::score_window(&[Y, Y, Y, Y], Player::Yellow, 4);
        assert_eq!(score, 1000 - 1);
    }

    #[test]
    fn mixed_windows() {
        assert_eq!(WindowHeuristic::score_window(&[R, R, R, E], Player::Red, 4), 40 - 1);
        assert_eq!(WindowHeuristic::score_window(&[R, R, R, E], Player::Yellow, 4), 1 - 800);
        assert_eq!(WindowHeuristic::score_window(&[R, E, Y, E], Player::Red, 4), 1 - 1);
        assert_eq!(WindowHeuristic::score_window(&[E, E, E, E], Player::Red, 4), 0);
    }

    #[test]
    #[should_panic(expected = "window length must equal the connect length")]
    fn malformed_window_fails_fast() {
        WindowHeuristic::score_window(&[R, R, R], Player::Red, 4);
    }

    #[test]
    fn heuristic_empty_board_is_zero() {
        let board = Board::default();
        let h = WindowHeuristic;
        assert_eq!(h.evaluate(&board, Player::Red), 0);
        assert_eq!(h.evaluate(&board, Player::Yellow), 0);
    }

    #[test]
    fn heuristic_center_preference() {
        let h = WindowHeuristic;
        let mut board_center = Board::default();
        board_center.drop_piece(3, Cell::Red).unwrap();
        let mut board_edge = Board::default();
        board_edge.drop_piece(0, Cell::Red).unwrap();

        let score_center = h.evaluate(&board_center, Player::Red);
        let score_edge = h.evaluate(&board_edge, Player::Red);
        assert_eq!(score_center - score_edge, CENTER_WEIGHT);
    }

    #[test]
    fn center_bonus_counts_only_queried_player() {
        let mut board = Board::default();
        board.drop_piece(3, Cell::Red).unwrap();
        board.drop_piece(3, Cell::Yellow).unwrap();
        board.drop_piece(3, Cell::Red).unwrap();
        assert_eq!(WindowHeuristic::center_bonus(&board, Player::Red), 12);
        assert_eq!(WindowHeuristic::center_bonus(&board, Player::Yellow), 6);
    }

    #[test]
    fn heuristic_three_in_a_row_scores_high() {
        let h = WindowHeuristic;
        let mut board = Board::default();
        board.drop_piece(0, Cell::Red).unwrap();
        board.drop_piece(1, Cell::Red).unwrap();
        board.drop_piece(2, Cell::Red).unwrap();
        let score = h.evaluate(&board, Player::Red);
        assert!(score > 40, "3-in-a-row should score high, got {score}");
        let score = h.evaluate(&board, Player::Yellow);
        assert!(score <= -800, "facing 3-in-a-row should score low, got {score}");
    }

    #[test]
    fn completed_line_outweighs_open_three() {
        let h = WindowHeuristic;
        let open_three = Board::from_rows(
            config(5, 4),
            &[".....", ".....", ".....", "YYY..", "RRR.."],
        );
        let connected = Board::from_rows(
            config(5, 4),
            &[".....", ".....", ".....", "YYY..", "RRRR."],
        );
        let gain = h.evaluate(&connected, Player::Red) - h.evaluate(&open_three, Player::Red);
        assert!(gain > 900, "completing the line should gain ~1000, got {gain}");
    }

    #[test]
    fn swapping_colors_and_player_preserves_score() {
        let h = WindowHeuristic;
        for seed in 0..20 {
            let mut state = GameState::default();
            let mut red = RandomAgent::with_seed(seed);
            let mut yellow = RandomAgent::with_seed(seed + 100);
            for turn in 0..(seed as usize + 5) {
                if state.is_terminal() {
                    break;
                }
                let agent: &mut dyn Agent = if turn % 2 == 0 { &mut red } else { &mut yellow };
                state.play_agent_move(agent).unwrap();
            }

            let board = state.board();
            let swapped = board.with_players_swapped();
            assert_eq!(
                h.evaluate(board, Player::Red),
                h.evaluate(&swapped, Player::Yellow),
                "seed {seed}"
            );
            assert_eq!(
                h.evaluate(board, Player::Yellow),
                h.evaluate(&swapped, Player::Red),
                "seed {seed}"
            );
        }
    }

    #[test]
    fn small_board_window_sum() {
        // 3x3, N=3: 8 windows. Red's lone corner piece sits in 3 of them.
        let board = Board::from_rows(config(3, 3), &["...", "...", "R.."]);
        let h = WindowHeuristic;
        // Empty windows: own +1, opp -10 (0 == N-3 with 3 empty).
        // Row 2, column 0 and the `/` diagonal hold the piece: own +10, opp -1.
        let expected = 5 * (1 - 10) + 3 * (10 - 1);
        assert_eq!(h.evaluate(&board, Player::Red), expected);
    }
}
