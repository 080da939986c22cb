//! Domain errors raised by the matrix and vector kernels.
//!
//! Numeric domain violations (negative square roots, zero pivots) never show
//! up here; those come back in-band as NaN or infinity.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, DomainError>;

/// A caller-visible failure that aborts the current operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("row index {row} is out of bounds for a matrix with {rows} rows")]
    RowOutOfBounds { row: usize, rows: usize },

    #[error("column index {col} is out of bounds for a matrix with {cols} columns")]
    ColumnOutOfBounds { col: usize, cols: usize },

    #[error("index {index} is out of bounds for a vector of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error(
        "cannot {operation} matrices with incompatible sizes ({}x{} and {}x{})",
        .left.0, .left.1, .right.0, .right.1
    )]
    DimensionMismatch {
        operation: &'static str,
        left: (usize, usize),
        right: (usize, usize),
    },

    #[error("cannot compute the {operation} of a non-square {rows}x{cols} matrix")]
    NotSquare {
        operation: &'static str,
        rows: usize,
        cols: usize,
    },

    #[error("{operation} requires length {expected}, got {actual}")]
    LengthMismatch {
        operation: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("a {rows}x{cols} matrix has more elements than fit in memory")]
    ShapeOverflow { rows: usize, cols: usize },

    #[error("row {row} has {actual} entries, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        actual: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::DomainError;

    #[test]
    fn messages_name_the_offending_shape() {
        let err = DomainError::DimensionMismatch {
            operation: "multiply",
            left: (2, 3),
            right: (2, 3),
        };
        assert_eq!(
            err.to_string(),
            "cannot multiply matrices with incompatible sizes (2x3 and 2x3)"
        );

        let err = DomainError::NotSquare {
            operation: "trace",
            rows: 2,
            cols: 3,
        };
        assert!(err.to_string().contains("non-square 2x3"));
    }

    #[test]
    fn row_and_column_errors_are_distinct() {
        let row = DomainError::RowOutOfBounds { row: 4, rows: 3 };
        let col = DomainError::ColumnOutOfBounds { col: 4, cols: 3 };
        assert!(row.to_string().starts_with("row index 4"));
        assert!(col.to_string().starts_with("column index 4"));
        assert_ne!(row, col);
    }
}
