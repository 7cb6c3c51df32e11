//! Key layout of the 4×4 membrane keypad.
//!
//! The keypad is wired as a matrix of 4 row lines and 4 column lines. A key
//! press shorts one row to one column; the scanner drives one column low at
//! a time and looks for a row that follows it.
//!
//! ```text
//!          C0   C1   C2   C3
//!   R0  [  1    2    3    A  ]
//!   R1  [  4    5    6    B  ]
//!   R2  [  7    8    9    C  ]
//!   R3  [  *    0    #    D  ]
//! ```

/// Number of row lines (inputs, pulled up).
pub const ROWS: usize = 4;

/// Number of column lines (outputs, idle high).
pub const COLS: usize = 4;

/// Character printed on each key, indexed `KEY_MAP[row][column]`.
pub const KEY_MAP: [[char; COLS]; ROWS] = [
    ['1', '2', '3', 'A'],
    ['4', '5', '6', 'B'],
    ['7', '8', '9', 'C'],
    ['*', '0', '#', 'D'],
];

/// Key that finalises a numeric entry.
pub const TERMINATOR: char = 'D';

/// Look up the character at a matrix position.
///
/// Returns `None` when the position lies outside the 4×4 matrix.
///
/// ```
/// use keypad_driver::key_at;
///
/// assert_eq!(key_at(3, 3), Some('D'));
/// assert_eq!(key_at(3, 1), Some('0'));
/// assert_eq!(key_at(4, 0), None);
/// ```
pub fn key_at(row: usize, column: usize) -> Option<char> {
    KEY_MAP.get(row)?.get(column).copied()
}
