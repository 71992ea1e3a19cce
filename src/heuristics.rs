//! Admissible cost estimators for the 8-puzzle.
//!
//! Both heuristics share the signature `fn(&Board, &Board) -> u32` so the
//! solver can take either as a plain function pointer. Both are admissible
//! and consistent for the 8-puzzle, which is what lets the solver mark
//! states visited at generation time without ever re-relaxing a cost.
//! The blank never contributes to either estimate.

use crate::engine::{Board, BLANK, CELL_COUNT, GRID_SIZE};
use clap::ValueEnum;

/// Sum over all non-blank tiles of the row plus column distance between
/// the tile's position in `state` and its position in `goal`.
///
/// Goal coordinates are looked up through a value-indexed table built
/// once per call instead of re-scanning the goal grid per tile; the
/// result is identical either way.
///
/// # Examples
/// ```
/// use eight_puzzle_solver::engine::Board;
/// use eight_puzzle_solver::heuristics::manhattan_distance;
///
/// let goal = Board::from_grid([[1, 2, 3], [4, 5, 6], [7, 8, 0]]);
/// assert_eq!(manhattan_distance(&goal, &goal), 0);
///
/// // The 8 tile is one column away from home.
/// let state = Board::from_grid([[1, 2, 3], [4, 5, 6], [7, 0, 8]]);
/// assert_eq!(manhattan_distance(&state, &goal), 1);
/// ```
pub fn manhattan_distance(state: &Board, goal: &Board) -> u32 {
    // goal_pos[v] = (row, col) of value v in the goal board.
    let mut goal_pos = [(0usize, 0usize); CELL_COUNT];
    for r in 0..GRID_SIZE {
        for c in 0..GRID_SIZE {
            goal_pos[goal.get_tile(r, c) as usize] = (r, c);
        }
    }

    let mut distance = 0u32;
    for r in 0..GRID_SIZE {
        for c in 0..GRID_SIZE {
            let val = state.get_tile(r, c);
            if val != BLANK {
                let (gr, gc) = goal_pos[val as usize];
                distance += r.abs_diff(gr) as u32 + c.abs_diff(gc) as u32;
            }
        }
    }
    distance
}

/// Counts the non-blank tiles of `state` whose value differs from the
/// tile at the same cell of `goal`.
pub fn misplaced_tiles(state: &Board, goal: &Board) -> u32 {
    let mut wrong = 0u32;
    for r in 0..GRID_SIZE {
        for c in 0..GRID_SIZE {
            let val = state.get_tile(r, c);
            if val != BLANK && val != goal.get_tile(r, c) {
                wrong += 1;
            }
        }
    }
    wrong
}

/// Selector for the two heuristics, chosen on the command line via
/// `--heuristic` and dispatched to the matching estimator function.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Heuristic {
    /// Manhattan distance of every tile from its goal cell.
    Manhattan,
    /// Count of tiles not on their goal cell.
    MisplacedTiles,
}

impl Heuristic {
    /// Returns the estimator function this selector stands for.
    pub fn function(self) -> fn(&Board, &Board) -> u32 {
        match self {
            Heuristic::Manhattan => manhattan_distance,
            Heuristic::MisplacedTiles => misplaced_tiles,
        }
    }

    /// Evaluates the selected heuristic for a state against a goal.
    pub fn evaluate(self, state: &Board, goal: &Board) -> u32 {
        (self.function())(state, goal)
    }

    /// Human-readable name used in solver reports.
    pub fn name(self) -> &'static str {
        match self {
            Heuristic::Manhattan => "manhattan",
            Heuristic::MisplacedTiles => "misplaced-tiles",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn goal() -> Board {
        Board::from_grid([[1, 2, 3], [4, 5, 6], [7, 8, 0]])
    }

    #[test]
    fn test_heuristics_are_zero_for_identical_states() {
        let g = goal();
        assert_eq!(manhattan_distance(&g, &g), 0);
        assert_eq!(misplaced_tiles(&g, &g), 0);

        let scrambled = Board::from_grid([[8, 6, 7], [2, 5, 4], [3, 0, 1]]);
        assert_eq!(manhattan_distance(&scrambled, &scrambled), 0);
        assert_eq!(misplaced_tiles(&scrambled, &scrambled), 0);
    }

    #[test]
    fn test_manhattan_single_move() {
        let state = Board::from_grid([[1, 2, 3], [4, 5, 6], [7, 0, 8]]);
        assert_eq!(manhattan_distance(&state, &goal()), 1);
    }

    #[test]
    fn test_manhattan_ignores_blank() {
        // Blank is three moves from its goal corner but must not count.
        // Tile 1 is 2 rows + 1 col from home, tile 8 one col from home.
        let state = Board::from_grid([[0, 2, 3], [4, 5, 6], [7, 1, 8]]);
        assert_eq!(manhattan_distance(&state, &goal()), 4);
    }

    #[test]
    fn test_manhattan_against_nonstandard_goal() {
        let state = Board::from_grid([[1, 2, 3], [4, 5, 6], [7, 8, 0]]);
        let other_goal = Board::from_grid([[0, 1, 2], [3, 4, 5], [6, 7, 8]]);
        // Every tile v must travel from its position in `state` to its
        // position in `other_goal`; the sum is 12.
        assert_eq!(manhattan_distance(&state, &other_goal), 12);
    }

    #[test]
    fn test_misplaced_counts_wrong_cells_only() {
        let state = Board::from_grid([[2, 1, 3], [4, 5, 6], [7, 8, 0]]);
        assert_eq!(misplaced_tiles(&state, &goal()), 2);
    }

    #[test]
    fn test_misplaced_ignores_blank() {
        // Blank moved; tile 8 displaced with it.
        let state = Board::from_grid([[1, 2, 3], [4, 5, 6], [7, 0, 8]]);
        assert_eq!(misplaced_tiles(&state, &goal()), 1);
    }

    #[test]
    fn test_misplaced_never_exceeds_manhattan() {
        // Manhattan dominates misplaced-tiles: every misplaced tile is at
        // least one move from home.
        let states = [
            Board::from_grid([[1, 2, 3], [4, 5, 6], [0, 7, 8]]),
            Board::from_grid([[8, 6, 7], [2, 5, 4], [3, 0, 1]]),
            Board::from_grid([[1, 0, 3], [4, 2, 6], [7, 5, 8]]),
        ];
        for state in &states {
            assert!(misplaced_tiles(state, &goal()) <= manhattan_distance(state, &goal()));
        }
    }

    #[test]
    fn test_selector_dispatch() {
        let state = Board::from_grid([[8, 6, 7], [2, 5, 4], [3, 0, 1]]);
        let g = goal();
        assert_eq!(
            Heuristic::Manhattan.evaluate(&state, &g),
            manhattan_distance(&state, &g)
        );
        assert_eq!(
            Heuristic::MisplacedTiles.evaluate(&state, &g),
            misplaced_tiles(&state, &g)
        );
        assert_eq!(Heuristic::Manhattan.name(), "manhattan");
    }
}
