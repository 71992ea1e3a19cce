//! Parsing of the 9-digit board encoding.
//!
//! This is the validation boundary the search core relies on: anything
//! that is not a permutation of the digits 0-8 is rejected here with a
//! descriptive error, and the core never re-checks.

use crate::engine::{Board, CELL_COUNT, GRID_SIZE};

/// Parses a row-major 9-digit string into a `Board`.
///
/// The string must contain exactly [`CELL_COUNT`] characters, each a
/// digit in `0..=8`, and each digit exactly once; `0` marks the blank.
/// Rows are read left to right, top to bottom.
///
/// # Arguments
/// * `s`: The digit string, e.g. `"123456780"` for the solved board.
///
/// # Returns
/// * `Ok(Board)` if `s` is a valid permutation encoding.
/// * `Err(String)` describing the first problem found: wrong length, a
///   character outside `0..=8`, or a repeated digit.
///
/// # Examples
/// ```
/// use eight_puzzle_solver::utils::board_from_digits;
///
/// let board = board_from_digits("123456780").unwrap();
/// assert_eq!(board.get_tile(0, 0), 1);
/// assert_eq!(board.get_tile(2, 2), 0);
///
/// assert!(board_from_digits("12345678").is_err()); // too short
/// assert!(board_from_digits("123456789").is_err()); // 9 is no tile
/// assert!(board_from_digits("112345678").is_err()); // duplicate 1
/// ```
pub fn board_from_digits(s: &str) -> Result<Board, String> {
    let chars: Vec<char> = s.chars().collect();
    if chars.len() != CELL_COUNT {
        return Err(format!(
            "Invalid board '{}': expected {} digits, found {}",
            s,
            CELL_COUNT,
            chars.len()
        ));
    }

    let mut grid = [[0u8; GRID_SIZE]; GRID_SIZE];
    let mut seen = [false; CELL_COUNT];

    for (i, ch) in chars.iter().enumerate() {
        let val = match ch.to_digit(10) {
            Some(d) if (d as usize) < CELL_COUNT => d as u8,
            _ => {
                return Err(format!(
                    "Invalid board '{}': character '{}' is not a digit in 0..=8",
                    s, ch
                ))
            }
        };

        if seen[val as usize] {
            return Err(format!("Invalid board '{}': digit {} repeats", s, val));
        }
        seen[val as usize] = true;

        grid[i / GRID_SIZE][i % GRID_SIZE] = val;
    }

    // Nine distinct values in 0..=8 cover all of them, so nothing can be
    // missing at this point.
    Ok(Board::from_grid(grid))
}
