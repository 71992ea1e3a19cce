//! A* best-first search over 8-puzzle configurations.
//!
//! `solve_astar` drives a min-priority frontier with
//! `f(state) = step_cost(state) + heuristic(state, goal)`, recording
//! child-parent links for path reconstruction and step costs per state.
//! States are marked visited the moment they are generated, so no state
//! is ever enqueued twice and no cost is ever relaxed. That shortcut is
//! sound only because both supplied heuristics are consistent: a state
//! is never first generated at worse than its optimal cost. An
//! inconsistent heuristic would need a proper open/closed-list split
//! with decrease-key instead.

use crate::engine::Board;
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};

/// Counters describing how much work one search invocation performed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchStats {
    /// States pushed onto the frontier at least once, the start included.
    pub generated: usize,
    /// States popped off the frontier, the goal test included.
    pub expanded: usize,
}

/// A successful search: the ordered path plus the work counters.
#[derive(Clone, Debug)]
pub struct Solution {
    /// States from start to goal inclusive; empty when start == goal.
    pub path: Vec<Board>,
    /// Work counters for the invocation that found this path.
    pub stats: SearchStats,
}

/// Outcome of one `solve_astar` invocation.
///
/// The two cases are tagged explicitly so a caller can never confuse
/// "solved with a path" with "frontier exhausted"; the counters are
/// available either way.
#[derive(Clone, Debug)]
pub enum SearchResult {
    /// The goal was popped; the optimal-length path was reconstructed.
    Solved(Solution),
    /// The reachable component was exhausted without meeting the goal.
    Exhausted(SearchStats),
}

impl SearchResult {
    /// Returns the work counters regardless of outcome.
    pub fn stats(&self) -> SearchStats {
        match self {
            SearchResult::Solved(solution) => solution.stats,
            SearchResult::Exhausted(stats) => *stats,
        }
    }

    /// Returns the solution path, or `None` if the search exhausted.
    pub fn path(&self) -> Option<&[Board]> {
        match self {
            SearchResult::Solved(solution) => Some(&solution.path),
            SearchResult::Exhausted(_) => None,
        }
    }
}

// Frontier entry. `BinaryHeap` is a max-heap, so `Ord` is inverted to
// pop the lowest priority first; ties break toward the lexicographically
// smaller flattened board, giving one explicit total order and therefore
// reproducible generated/expanded counts across runs.
#[derive(PartialEq, Eq)]
struct FrontierNode {
    priority: u32,
    board: Board,
}

impl Ord for FrontierNode {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.board.flatten().cmp(&self.board.flatten()))
    }
}

impl PartialOrd for FrontierNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Runs A* from `start` to `goal` under the given heuristic.
///
/// The heuristic must be admissible and consistent (both functions in
/// [`crate::heuristics`] are), which makes the first pop of the goal
/// optimal by step count. When `start == goal` the search still pops
/// the start once, so it reports an empty path with
/// `generated == expanded == 1`.
///
/// An unreachable goal is not detected up front: the search runs the
/// reachable component dry (at most 9!/2 = 181 440 configurations) and
/// returns [`SearchResult::Exhausted`] with the counters. All
/// bookkeeping is owned by the invocation and dropped on return.
///
/// # Examples
/// ```
/// use eight_puzzle_solver::engine::Board;
/// use eight_puzzle_solver::heuristics::manhattan_distance;
/// use eight_puzzle_solver::solver::{solve_astar, SearchResult};
///
/// let start = Board::from_grid([[1, 2, 3], [4, 5, 6], [0, 7, 8]]);
/// let goal = Board::from_grid([[1, 2, 3], [4, 5, 6], [7, 8, 0]]);
///
/// match solve_astar(start, goal, manhattan_distance) {
///     SearchResult::Solved(solution) => assert_eq!(solution.path.len(), 3),
///     SearchResult::Exhausted(_) => unreachable!("two slides from the goal"),
/// }
/// ```
pub fn solve_astar(
    start: Board,
    goal: Board,
    heuristic: fn(&Board, &Board) -> u32,
) -> SearchResult {
    let mut visited: HashSet<Board> = HashSet::new();
    let mut frontier: BinaryHeap<FrontierNode> = BinaryHeap::new();
    // Child-parent links, written once per state at generation time.
    let mut parents: HashMap<Board, Board> = HashMap::new();
    // Moves from start per state; first writer wins, never relaxed.
    let mut step_cost: HashMap<Board, u32> = HashMap::new();
    let mut generated = 1usize;
    let mut expanded = 0usize;

    visited.insert(start);
    step_cost.insert(start, 0);
    frontier.push(FrontierNode {
        priority: 0,
        board: start,
    });

    while let Some(FrontierNode { board, .. }) = frontier.pop() {
        expanded += 1;

        if board == goal {
            let path = reconstruct_path(board, start, &parents);
            return SearchResult::Solved(Solution {
                path,
                stats: SearchStats { generated, expanded },
            });
        }

        let cost = step_cost[&board];
        for next in board.successors() {
            if visited.contains(&next) {
                continue;
            }

            let next_cost = cost + 1;
            step_cost.insert(next, next_cost);
            let priority = next_cost + heuristic(&next, &goal);

            visited.insert(next);
            frontier.push(FrontierNode {
                priority,
                board: next,
            });
            parents.insert(next, board);
            generated += 1;
        }
    }

    SearchResult::Exhausted(SearchStats { generated, expanded })
}

/// Rebuilds the start-to-goal path by walking the child-parent links
/// backwards from the goal and reversing the collected sequence.
///
/// Returns the empty sequence when start equals goal; the single-state
/// path is suppressed by convention. Every state the engine generates
/// (except the start) received a parent entry when it was generated, so
/// the walk always terminates at the start.
fn reconstruct_path(goal: Board, start: Board, parents: &HashMap<Board, Board>) -> Vec<Board> {
    if goal == start {
        return Vec::new();
    }

    let mut path = vec![goal];
    let mut current = goal;

    while current != start {
        let parent = *parents
            .get(&current)
            .expect("every generated state has a parent entry");
        path.push(parent);
        current = parent;
    }

    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::GRID_SIZE;
    use crate::heuristics::{manhattan_distance, misplaced_tiles};

    const HEURISTICS: [fn(&Board, &Board) -> u32; 2] = [manhattan_distance, misplaced_tiles];

    fn solved() -> Board {
        Board::from_grid([[1, 2, 3], [4, 5, 6], [7, 8, 0]])
    }

    // Consecutive path states must differ by exactly one tile-blank swap.
    fn assert_single_slide(a: &Board, b: &Board) {
        let differing = (0..GRID_SIZE)
            .flat_map(|r| (0..GRID_SIZE).map(move |c| (r, c)))
            .filter(|&(r, c)| a.get_tile(r, c) != b.get_tile(r, c))
            .count();
        assert_eq!(differing, 2, "states differ by more than one slide");
        assert_ne!(a.blank_position(), b.blank_position());
    }

    fn assert_valid_path(path: &[Board], start: Board, goal: Board) {
        assert_eq!(*path.first().unwrap(), start);
        assert_eq!(*path.last().unwrap(), goal);
        for pair in path.windows(2) {
            assert_single_slide(&pair[0], &pair[1]);
        }
    }

    #[test]
    fn test_start_equals_goal() {
        for h in HEURISTICS {
            match solve_astar(solved(), solved(), h) {
                SearchResult::Solved(solution) => {
                    assert!(solution.path.is_empty());
                    assert_eq!(solution.stats.generated, 1);
                    assert_eq!(solution.stats.expanded, 1);
                }
                SearchResult::Exhausted(_) => panic!("identical start and goal must solve"),
            }
        }
    }

    #[test]
    fn test_one_move_from_goal() {
        // 123456078: the blank one slide from its home corner.
        let start = Board::from_grid([[1, 2, 3], [4, 5, 6], [0, 7, 8]]);
        let one_away = Board::from_grid([[1, 2, 3], [4, 5, 6], [7, 0, 8]]);

        for h in HEURISTICS {
            match solve_astar(one_away, solved(), h) {
                SearchResult::Solved(solution) => {
                    assert_eq!(solution.path.len(), 2);
                    assert_valid_path(&solution.path, one_away, solved());
                }
                SearchResult::Exhausted(_) => panic!("one slide from the goal"),
            }
        }

        // Two slides away takes a three-state path.
        for h in HEURISTICS {
            let result = solve_astar(start, solved(), h);
            let path = result.path().expect("two slides from the goal");
            assert_eq!(path.len(), 3);
            assert_valid_path(path, start, solved());
        }
    }

    #[test]
    fn test_heuristics_agree_on_optimal_length() {
        let starts = [
            Board::from_grid([[1, 2, 3], [4, 5, 6], [0, 7, 8]]),
            Board::from_grid([[1, 0, 3], [4, 2, 6], [7, 5, 8]]),
            Board::from_grid([[4, 1, 3], [7, 2, 5], [0, 8, 6]]),
            Board::from_grid([[8, 6, 7], [2, 5, 4], [3, 0, 1]]),
        ];

        for start in starts {
            let by_manhattan = solve_astar(start, solved(), manhattan_distance);
            let by_misplaced = solve_astar(start, solved(), misplaced_tiles);

            let path_a = by_manhattan.path().expect("solvable instance");
            let path_b = by_misplaced.path().expect("solvable instance");

            // Both heuristics are admissible: identical optimal length.
            assert_eq!(path_a.len(), path_b.len());
            assert_valid_path(path_a, start, solved());
            assert_valid_path(path_b, start, solved());
        }
    }

    #[test]
    fn test_generated_never_below_expanded() {
        let starts = [
            solved(),
            Board::from_grid([[1, 2, 3], [4, 5, 6], [0, 7, 8]]),
            Board::from_grid([[8, 6, 7], [2, 5, 4], [3, 0, 1]]),
        ];

        for start in starts {
            for h in HEURISTICS {
                let stats = solve_astar(start, solved(), h).stats();
                assert!(stats.generated >= stats.expanded);
            }
        }
    }

    #[test]
    fn test_counters_are_reproducible() {
        let start = Board::from_grid([[4, 1, 3], [7, 2, 5], [0, 8, 6]]);
        for h in HEURISTICS {
            let first = solve_astar(start, solved(), h).stats();
            let second = solve_astar(start, solved(), h).stats();
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_unreachable_goal_exhausts_reachable_component() {
        // Swapping one adjacent non-blank pair flips permutation parity,
        // so this goal lies in the other half of the state space.
        let goal = Board::from_grid([[2, 1, 3], [4, 5, 6], [7, 8, 0]]);
        assert!(!solved().shares_parity_with(&goal));

        for h in HEURISTICS {
            match solve_astar(solved(), goal, h) {
                SearchResult::Exhausted(stats) => {
                    // Every reachable state is generated exactly once and
                    // then expanded exactly once: 9!/2 configurations.
                    assert_eq!(stats.generated, 181_440);
                    assert_eq!(stats.expanded, 181_440);
                }
                SearchResult::Solved(_) => panic!("opposite parity class cannot be reached"),
            }
        }
    }

    #[test]
    fn test_result_accessors() {
        let result = solve_astar(solved(), solved(), manhattan_distance);
        assert!(result.path().is_some());
        assert_eq!(result.stats().generated, 1);

        let unreachable = Board::from_grid([[2, 1, 3], [4, 5, 6], [7, 8, 0]]);
        let result = solve_astar(unreachable, solved(), misplaced_tiles);
        assert!(result.path().is_none());
    }
}
