//! # 8-Puzzle A* Solver Library
//!
//! This library solves the 8-puzzle (3x3 sliding tile puzzle) with A*
//! best-first search and compares two admissible heuristics: Manhattan
//! distance and misplaced-tile count.
//!
//! It is used by two binaries:
//! - `solve`: Takes start and goal boards as 9-digit strings and prints
//!   the optimal solution path with generated/expanded counters, for
//!   one heuristic or both.
//! - `scramble`: Emits a random board guaranteed solvable towards a
//!   given goal, optionally from a fixed seed.
//!
//! ## Modules
//! - `engine`: The board representation (`Board`), move generation, and
//!   the inversion-parity reachability test.
//! - `heuristics`: The two cost estimators and the `Heuristic` selector.
//! - `solver`: The `solve_astar` search loop, its `SearchResult` /
//!   `Solution` / `SearchStats` types, and path reconstruction.
//! - `utils`: Parsing and validation of the 9-digit board encoding.

pub mod engine;
pub mod heuristics;
pub mod solver;
pub mod utils;

// Items from sub-modules are accessed via their full path, e.g.
// `eight_puzzle_solver::solver::solve_astar`. This keeps the top-level
// library namespace cleaner.
