//! Core board representation for the 8-puzzle.
//!
//! This module defines the puzzle's fundamental components:
//! - `Board`: a 3x3 arrangement of the tiles 1..=8 plus the blank,
//!   with value semantics (`Copy`, derived `Hash`/`Eq`) so it can be
//!   used directly as a key in maps and sets.
//! - Move generation: `Board::successors` yields every configuration
//!   reachable by sliding one adjacent tile into the blank.
//! - Reachability: `Board::shares_parity_with` tests whether two
//!   configurations lie in the same half of the permutation space.
use std::fmt;

/// Width and height of the puzzle grid. The board is always square.
pub const GRID_SIZE: usize = 3;

/// Total number of cells on the board (`GRID_SIZE` squared).
pub const CELL_COUNT: usize = GRID_SIZE * GRID_SIZE;

/// The value that marks the blank cell.
pub const BLANK: u8 = 0;

// Blank movement offsets in (row, column) form: up, left, right, down.
// The order is fixed so successor iteration, and with it the solver's
// generated/expanded counters, is reproducible.
const DIRECTIONS: [(isize, isize); 4] = [(-1, 0), (0, -1), (0, 1), (1, 0)];

/// A single 8-puzzle configuration.
///
/// The grid holds each of the values `0..=8` exactly once, with
/// [`BLANK`] (0) marking the empty cell. That exactly-once invariant is
/// established by the input parser ([`crate::utils::board_from_digits`])
/// and is a precondition everywhere else; the board itself never
/// re-validates it.
///
/// Two boards are equal iff their grids are equal, and the derived
/// `Hash` matches, so a `Board` is its own canonical key; no string
/// encoding is needed for storage in hash maps.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    grid: [[u8; GRID_SIZE]; GRID_SIZE],
}

impl Board {
    /// Creates a board from a predefined grid configuration.
    ///
    /// This is useful for testing or setting up specific puzzle
    /// instances. The caller must supply a grid containing each of
    /// `0..=8` exactly once.
    ///
    /// # Examples
    /// ```
    /// use eight_puzzle_solver::engine::Board;
    /// let solved = Board::from_grid([[1, 2, 3], [4, 5, 6], [7, 8, 0]]);
    /// assert_eq!(solved.get_tile(2, 2), 0);
    /// ```
    pub fn from_grid(grid: [[u8; GRID_SIZE]; GRID_SIZE]) -> Self {
        Board { grid }
    }

    /// Returns the tile value at row `r`, column `c` (0-based).
    ///
    /// # Panics
    /// Panics if `r` or `c` are outside the board dimensions.
    pub fn get_tile(&self, r: usize, c: usize) -> u8 {
        self.grid[r][c]
    }

    /// Returns the (row, column) of the blank cell.
    ///
    /// # Panics
    /// Panics if the board holds no blank, which violates the
    /// exactly-once precondition.
    pub fn blank_position(&self) -> (usize, usize) {
        for r in 0..GRID_SIZE {
            for c in 0..GRID_SIZE {
                if self.grid[r][c] == BLANK {
                    return (r, c);
                }
            }
        }
        unreachable!("board has no blank cell")
    }

    /// Returns the board's cells flattened row-major into a fixed array.
    ///
    /// The flattened form is the board's total-order key: the solver
    /// breaks frontier priority ties by comparing it lexicographically,
    /// and the digit-string rendering is derived from it.
    pub fn flatten(&self) -> [u8; CELL_COUNT] {
        let mut cells = [0u8; CELL_COUNT];
        for r in 0..GRID_SIZE {
            for c in 0..GRID_SIZE {
                cells[r * GRID_SIZE + c] = self.grid[r][c];
            }
        }
        cells
    }

    /// Renders the board as its 9-digit row-major encoding.
    ///
    /// # Examples
    /// ```
    /// use eight_puzzle_solver::engine::Board;
    /// let solved = Board::from_grid([[1, 2, 3], [4, 5, 6], [7, 8, 0]]);
    /// assert_eq!(solved.to_digits(), "123456780");
    /// ```
    pub fn to_digits(&self) -> String {
        self.flatten()
            .iter()
            .map(|&v| char::from(b'0' + v))
            .collect()
    }

    /// Returns every board reachable from this one in a single move.
    ///
    /// A move slides one tile orthogonally adjacent to the blank into
    /// the blank's cell, i.e. swaps the blank with that neighbour.
    /// Successors are produced in the fixed direction order up, left,
    /// right, down, skipping directions that would leave the grid, so
    /// the result holds 2 boards when the blank is in a corner, 3 on an
    /// edge, and 4 in the centre. The receiver is never mutated; each
    /// successor is an independent copy.
    pub fn successors(&self) -> Vec<Board> {
        let (blank_r, blank_c) = self.blank_position();
        let mut moves = Vec::with_capacity(DIRECTIONS.len());

        for (dr, dc) in DIRECTIONS {
            let nr = blank_r as isize + dr;
            let nc = blank_c as isize + dc;

            if nr >= 0 && nr < GRID_SIZE as isize && nc >= 0 && nc < GRID_SIZE as isize {
                let mut next = *self;
                next.grid[blank_r][blank_c] = next.grid[nr as usize][nc as usize];
                next.grid[nr as usize][nc as usize] = BLANK;
                moves.push(next);
            }
        }

        moves
    }

    /// Tests whether `other` is reachable from this board.
    ///
    /// Sliding a tile never changes the parity of the permutation's
    /// inversion count (the blank excluded) on an odd-width board, and
    /// every configuration of matching parity is reachable, so exactly
    /// half of the 9! arrangements can be reached from any start. The
    /// solver deliberately does not consult this: an unreachable goal
    /// is reported by exhausting the frontier, keeping its counters
    /// meaningful. This test exists for instance generation and tests.
    pub fn shares_parity_with(&self, other: &Board) -> bool {
        inversion_count(&self.flatten()) % 2 == inversion_count(&other.flatten()) % 2
    }
}

/// Counts inversions among the non-blank values of a flattened board:
/// pairs appearing in the opposite order to their numeric order.
fn inversion_count(cells: &[u8; CELL_COUNT]) -> usize {
    cells
        .iter()
        .enumerate()
        .filter(|&(_, &val)| val != BLANK)
        .map(|(i, &val)| {
            cells[i + 1..]
                .iter()
                .filter(|&&later| later != BLANK && later < val)
                .count()
        })
        .sum()
}

impl fmt::Display for Board {
    /// Formats the board as three rows of digits, the blank shown as `.`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.grid.iter().enumerate() {
            for (c, &val) in row.iter().enumerate() {
                if c > 0 {
                    write!(f, " ")?;
                }
                if val == BLANK {
                    write!(f, ".")?;
                } else {
                    write!(f, "{}", val)?;
                }
            }
            if r < GRID_SIZE - 1 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
