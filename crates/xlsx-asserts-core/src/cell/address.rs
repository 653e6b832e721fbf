//! Cell address and range types

use crate::error::{Error, Result};
use crate::{MAX_COLS, MAX_ROWS};
use std::fmt;
use std::str::FromStr;

/// A cell address (e.g., "A1", "$B$2")
///
/// Cell addresses in Excel use a combination of column letters (A-XFD) and row numbers (1-1048576).
/// The optional `$` prefix makes a reference absolute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellAddress {
    /// Row index (0-based internally, 1-based in display)
    pub row: u32,
    /// Column index (0-based, A=0, B=1, ..., XFD=16383)
    pub col: u16,
    /// Whether the row reference is absolute ($)
    pub row_absolute: bool,
    /// Whether the column reference is absolute ($)
    pub col_absolute: bool,
}

impl CellAddress {
    /// Create a new cell address with relative references
    pub fn new(row: u32, col: u16) -> Self {
        Self {
            row,
            col,
            row_absolute: false,
            col_absolute: false,
        }
    }

    /// Parse a cell address from A1-style notation
    ///
    /// # Examples
    /// ```
    /// use xlsx_asserts_core::CellAddress;
    ///
    /// let addr = CellAddress::parse("A1").unwrap();
    /// assert_eq!(addr.row, 0);
    /// assert_eq!(addr.col, 0);
    ///
    /// let addr = CellAddress::parse("$B$2").unwrap();
    /// assert_eq!(addr.row, 1);
    /// assert_eq!(addr.col, 1);
    /// assert!(addr.row_absolute && addr.col_absolute);
    /// ```
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(Error::InvalidAddress("empty address".into()));
        }

        let (col_absolute, rest) = strip_dollar(s);
        let letters_end = rest
            .find(|c: char| !c.is_ascii_alphabetic())
            .unwrap_or(rest.len());
        let (letters, rest) = rest.split_at(letters_end);
        if letters.is_empty() {
            return Err(Error::InvalidAddress(format!(
                "no column letters in '{}'",
                s
            )));
        }
        let col = Self::letters_to_column(letters)?;

        let (row_absolute, digits) = strip_dollar(rest);
        if digits.is_empty() {
            return Err(Error::InvalidAddress(format!("no row number in '{}'", s)));
        }
        if !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::InvalidAddress(format!(
                "invalid row number in '{}'",
                s
            )));
        }

        let row: u32 = digits
            .parse()
            .map_err(|_| Error::RowOutOfBounds(u32::MAX, MAX_ROWS))?;
        match row {
            0 => Err(Error::InvalidAddress(format!(
                "row number must be >= 1 in '{}'",
                s
            ))),
            r if r > MAX_ROWS => Err(Error::RowOutOfBounds(r, MAX_ROWS)),
            r => Ok(Self {
                row: r - 1,
                col,
                row_absolute,
                col_absolute,
            }),
        }
    }

    /// Convert column index to letters (0 = A, 25 = Z, 26 = AA, etc.)
    pub fn column_to_letters(col: u16) -> String {
        let mut n = col as u32 + 1;
        let mut letters = Vec::with_capacity(3);
        while n > 0 {
            let rem = (n - 1) % 26;
            letters.push(b'A' + rem as u8);
            n = (n - 1) / 26;
        }
        letters.iter().rev().map(|&b| b as char).collect()
    }

    /// Convert column letters to index (A = 0, Z = 25, AA = 26, etc.)
    pub fn letters_to_column(letters: &str) -> Result<u16> {
        if letters.is_empty() {
            return Err(Error::InvalidAddress("empty column letters".into()));
        }

        let number = letters.chars().try_fold(0u32, |acc, c| {
            if !c.is_ascii_alphabetic() {
                return Err(Error::InvalidAddress(format!(
                    "invalid column letter '{}'",
                    c
                )));
            }
            let next = acc * 26 + (c.to_ascii_uppercase() as u32 - 'A' as u32 + 1);
            if next > MAX_COLS as u32 {
                Err(Error::ColumnOutOfBounds(next, MAX_COLS - 1))
            } else {
                Ok(next)
            }
        })?;

        Ok((number - 1) as u16)
    }

    /// Format as A1-style string, keeping any `$` markers
    pub fn to_a1_string(&self) -> String {
        let marker = |absolute: bool| if absolute { "$" } else { "" };
        format!(
            "{}{}{}{}",
            marker(self.col_absolute),
            Self::column_to_letters(self.col),
            marker(self.row_absolute),
            self.row + 1
        )
    }
}

/// Split a leading `$` off a reference part
fn strip_dollar(s: &str) -> (bool, &str) {
    match s.strip_prefix('$') {
        Some(rest) => (true, rest),
        None => (false, s),
    }
}

impl fmt::Display for CellAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_a1_string())
    }
}

impl FromStr for CellAddress {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// A range of cells (e.g., "A1:B10")
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellRange {
    /// Start address (top-left)
    pub start: CellAddress,
    /// End address (bottom-right)
    pub end: CellAddress,
}

impl CellRange {
    /// Create a new cell range, normalized so start is top-left
    pub fn new(start: CellAddress, end: CellAddress) -> Self {
        Self {
            start: CellAddress::new(start.row.min(end.row), start.col.min(end.col)),
            end: CellAddress::new(start.row.max(end.row), start.col.max(end.col)),
        }
    }

    /// Create a single-cell range
    pub fn single(addr: CellAddress) -> Self {
        Self::new(addr, addr)
    }

    /// Parse a range from A1:B10 notation
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();

        let mut parts = s.split(':');
        let first = parts.next().unwrap_or_default();
        let second = parts.next();
        if parts.next().is_some() {
            return Err(Error::InvalidRange(format!("too many ':' in '{}'", s)));
        }

        let start = CellAddress::parse(first)
            .map_err(|e| Error::InvalidRange(format!("'{}': {}", s, e)))?;
        match second {
            Some(end) => {
                let end = CellAddress::parse(end)
                    .map_err(|e| Error::InvalidRange(format!("'{}': {}", s, e)))?;
                Ok(Self::new(start, end))
            }
            None => Ok(Self::single(start)),
        }
    }

    /// Check if a cell is within this range
    pub fn contains(&self, addr: &CellAddress) -> bool {
        (self.start.row..=self.end.row).contains(&addr.row)
            && (self.start.col..=self.end.col).contains(&addr.col)
    }

    /// Iterate over every address in the range, row by row
    pub fn cells(&self) -> impl Iterator<Item = CellAddress> + '_ {
        (self.start.row..=self.end.row).flat_map(move |row| {
            (self.start.col..=self.end.col).map(move |col| CellAddress::new(row, col))
        })
    }

    /// Check if this range shares at least one cell with another
    pub fn overlaps(&self, other: &CellRange) -> bool {
        let rows_apart = other.end.row < self.start.row || other.start.row > self.end.row;
        let cols_apart = other.end.col < self.start.col || other.start.col > self.end.col;
        !(rows_apart || cols_apart)
    }

    /// Format as A1:B10 string
    pub fn to_a1_string(&self) -> String {
        if self.start == self.end {
            self.start.to_a1_string()
        } else {
            format!("{}:{}", self.start.to_a1_string(), self.end.to_a1_string())
        }
    }
}

impl fmt::Display for CellRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_a1_string())
    }
}

impl FromStr for CellRange {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Inclusive 1-based bounds of a range as `((start_col, start_row), (end_col, end_row))`.
///
/// ```
/// use xlsx_asserts_core::range_boundaries;
///
/// assert_eq!(range_boundaries("B2:D5").unwrap(), ((2, 2), (4, 5)));
/// assert_eq!(range_boundaries("C3").unwrap(), ((3, 3), (3, 3)));
/// ```
pub fn range_boundaries(range: &str) -> Result<((u32, u32), (u32, u32))> {
    let range = CellRange::parse(range)?;
    Ok((
        (range.start.col as u32 + 1, range.start.row + 1),
        (range.end.col as u32 + 1, range.end.row + 1),
    ))
}

/// Render a 1-based column index as letters (1 = A, 27 = AA).
pub fn column_string_from_index(index: u32) -> Result<String> {
    if index == 0 || index > MAX_COLS as u32 {
        return Err(Error::ColumnOutOfBounds(index, MAX_COLS));
    }
    Ok(CellAddress::column_to_letters((index - 1) as u16))
}
