use std::fmt::Display;

const SIZE: usize = 9;
const EMPTY: char = '.';

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SudokuError {
    #[error("expected 9 rows, got {0}")]
    RowCount(usize),

    #[error("row {row} has {len} cells, expected 9")]
    ColumnCount { row: usize, len: usize },

    #[error("cell ({row}, {col}) holds {ch:?}, expected '1'..='9' or '.'")]
    InvalidCell { row: usize, col: usize, ch: char },
}

/// A 9x9 grid, `None` for an empty cell and `Some(1..=9)` for a digit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [[Option<u8>; SIZE]; SIZE],
}

impl Board {
    /// Parse nine rows of nine characters each.
    pub fn parse<S: AsRef<str>>(rows: &[S]) -> Result<Self, SudokuError> {
        if rows.len() != SIZE {
            return Err(SudokuError::RowCount(rows.len()));
        }

        let mut cells = [[None; SIZE]; SIZE];
        for (r, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            let len = row.chars().count();
            if len != SIZE {
                return Err(SudokuError::ColumnCount { row: r, len });
            }
            for (c, ch) in row.chars().enumerate() {
                cells[r][c] = match ch {
                    EMPTY => None,
                    '1'..='9' => Some(ch as u8 - b'0'),
                    _ => return Err(SudokuError::InvalidCell { row: r, col: c, ch }),
                };
            }
        }
        Ok(Self { cells })
    }

    /// True when no digit repeats within a row, a column or a 3x3 box.
    ///
    /// Empty cells are ignored and solvability is not checked.
    pub fn is_valid(&self) -> bool {
        // seen[unit][digit - 1]
        let mut rows = [[false; SIZE]; SIZE];
        let mut cols = [[false; SIZE]; SIZE];
        let mut boxes = [[false; SIZE]; SIZE];

        for (r, row) in self.cells.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                let Some(digit) = cell else {
                    continue;
                };
                let n = usize::from(digit - 1);
                let b = (r / 3) * 3 + c / 3;
                if rows[r][n] || cols[c][n] || boxes[b][n] {
                    log::trace!("digit {digit} at ({r}, {c}) repeats");
                    return false;
                }
                rows[r][n] = true;
                cols[c][n] = true;
                boxes[b][n] = true;
            }
        }
        true
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let rows = self
            .cells
            .iter()
            .map(|row| {
                row.iter()
                    .map(|cell| cell.map_or(EMPTY, |d| char::from(b'0' + d)))
                    .collect::<String>()
            })
            .collect::<Vec<_>>();
        write!(f, "{}", rows.join("\n"))
    }
}
