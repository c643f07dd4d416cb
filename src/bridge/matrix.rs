//! Iteration-domain matrices as exchanged with the loop code generator.
//!
//! Each row encodes one constraint over `columns - 2` dimensions:
//!
//! ```text
//!   [ flag | c0 c1 ... c(n-1) | constant ]
//! ```
//!
//! `flag` is 0 for an equality and 1 for `expr >= 0`.
//!
//! The textual form is a `ROWS COLUMNS` header followed by one line per row;
//! `#` starts a comment that runs to the end of the line.

use crate::utils::errors::{BridgeResult, MatrixError, MatrixErrorKind};
use num_bigint::BigInt;
use num_traits::Zero;
use std::fmt;
use std::str::FromStr;

/// A dense matrix of exact integers in the code generator's row format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainMatrix {
    data: Vec<Vec<BigInt>>,
    columns: usize,
}

impl DomainMatrix {
    /// Allocate a zero-filled matrix.
    pub fn zeros(rows: usize, columns: usize) -> BridgeResult<Self> {
        check_columns(columns)?;
        Ok(Self {
            data: vec![vec![BigInt::zero(); columns]; rows],
            columns,
        })
    }

    /// Create a matrix from rows of machine integers.
    pub fn from_rows(rows: Vec<Vec<i64>>, columns: usize) -> BridgeResult<Self> {
        let rows = rows
            .into_iter()
            .map(|row| row.into_iter().map(BigInt::from).collect())
            .collect();
        Self::from_exact_rows(rows, columns)
    }

    /// Create a matrix from rows of exact integers.
    pub fn from_exact_rows(rows: Vec<Vec<BigInt>>, columns: usize) -> BridgeResult<Self> {
        check_columns(columns)?;
        if let Some((i, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != columns) {
            return Err(MatrixError::new(
                MatrixErrorKind::RaggedRow,
                format!("row {} has {} columns, expected {}", i, row.len(), columns),
            )
            .into());
        }
        Ok(Self { data: rows, columns })
    }

    /// Number of rows.
    pub fn nrows(&self) -> usize {
        self.data.len()
    }

    /// Number of columns, including the flag and constant columns.
    pub fn ncols(&self) -> usize {
        self.columns
    }

    /// Number of dimensions each row constrains.
    pub fn dimension(&self) -> usize {
        self.columns - 2
    }

    /// Borrow row `row`.
    pub fn row(&self, row: usize) -> BridgeResult<&[BigInt]> {
        let nrows = self.nrows();
        self.data
            .get(row)
            .map(Vec::as_slice)
            .ok_or_else(|| out_of_range(row, nrows).into())
    }

    /// Mutably borrow row `row`.
    pub fn row_mut(&mut self, row: usize) -> BridgeResult<&mut [BigInt]> {
        let nrows = self.nrows();
        self.data
            .get_mut(row)
            .map(Vec::as_mut_slice)
            .ok_or_else(|| out_of_range(row, nrows).into())
    }

    /// Iterate over the rows.
    pub fn rows(&self) -> impl Iterator<Item = &[BigInt]> + '_ {
        self.data.iter().map(Vec::as_slice)
    }

    /// Get an element.
    pub fn get(&self, row: usize, col: usize) -> Option<&BigInt> {
        self.data.get(row)?.get(col)
    }

    /// Append a row of the matrix's width.
    pub fn push_row(&mut self, row: Vec<BigInt>) -> BridgeResult<()> {
        if row.len() != self.columns {
            return Err(MatrixError::new(
                MatrixErrorKind::RaggedRow,
                format!("row has {} columns, expected {}", row.len(), self.columns),
            )
            .into());
        }
        self.data.push(row);
        Ok(())
    }

    /// Rows converted to machine integers, when every entry fits in an `i64`.
    pub fn to_i64_rows(&self) -> Option<Vec<Vec<i64>>> {
        use num_traits::ToPrimitive;
        self.data
            .iter()
            .map(|row| row.iter().map(ToPrimitive::to_i64).collect())
            .collect()
    }
}

fn check_columns(columns: usize) -> Result<(), MatrixError> {
    if columns < 2 {
        return Err(MatrixError::new(
            MatrixErrorKind::TooFewColumns,
            format!("a domain matrix needs at least 2 columns, got {}", columns),
        ));
    }
    Ok(())
}

fn out_of_range(row: usize, nrows: usize) -> MatrixError {
    MatrixError::new(
        MatrixErrorKind::RowOutOfRange,
        format!("row {} out of range for a matrix with {} rows", row, nrows),
    )
}

impl fmt::Display for DomainMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {}", self.nrows(), self.ncols())?;
        for row in &self.data {
            let cells: Vec<String> = row.iter().map(|v| format!("{:>3}", v)).collect();
            writeln!(f, "{}", cells.join(" "))?;
        }
        Ok(())
    }
}

impl FromStr for DomainMatrix {
    type Err = MatrixError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut lines = s
            .lines()
            .enumerate()
            .map(|(i, line)| (i + 1, line.split('#').next().unwrap_or("").trim()))
            .filter(|(_, line)| !line.is_empty());

        let (header_line, header) = lines.next().ok_or_else(|| {
            MatrixError::new(MatrixErrorKind::Syntax, "missing `ROWS COLUMNS` header")
        })?;
        let header = parse_integers(header, header_line)?;
        let (rows, columns) = match header.as_slice() {
            [rows, columns] => (to_count(rows, header_line)?, to_count(columns, header_line)?),
            _ => {
                return Err(MatrixError::new(
                    MatrixErrorKind::Syntax,
                    "header must hold exactly two integers",
                )
                .at_line(header_line))
            }
        };
        check_columns(columns).map_err(|e| e.at_line(header_line))?;

        // The header is untrusted: grow with the rows actually present.
        let mut data = Vec::new();
        for (line_no, line) in lines {
            let row = parse_integers(line, line_no)?;
            if row.len() != columns {
                return Err(MatrixError::new(
                    MatrixErrorKind::RaggedRow,
                    format!("row has {} columns, expected {}", row.len(), columns),
                )
                .at_line(line_no));
            }
            data.push(row);
        }

        if data.len() != rows {
            return Err(MatrixError::new(
                MatrixErrorKind::Syntax,
                format!("header announces {} rows, found {}", rows, data.len()),
            ));
        }
        Ok(Self { data, columns })
    }
}

fn parse_integers(line: &str, line_no: usize) -> Result<Vec<BigInt>, MatrixError> {
    line.split_whitespace()
        .map(|tok| {
            tok.parse::<BigInt>().map_err(|_| {
                MatrixError::new(MatrixErrorKind::Syntax, format!("`{}` is not an integer", tok))
                    .at_line(line_no)
            })
        })
        .collect()
}

fn to_count(value: &BigInt, line_no: usize) -> Result<usize, MatrixError> {
    use num_traits::ToPrimitive;
    value.to_usize().ok_or_else(|| {
        MatrixError::new(MatrixErrorKind::Syntax, format!("`{}` is not a valid size", value))
            .at_line(line_no)
    })
}
