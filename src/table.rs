//! Delimited-text table loading
//!
//! Parses delimiter-separated text (CSV and friends) into a column-major
//! string table and infers a primitive type per column by sampling values.
//! The parser handles quoted fields, doubled-quote escapes, and both `\n`
//! and `\r\n` record endings in a single pass.
//!
//! This module is independent of the tensor core; it produces rows and
//! columns of text fields plus inferred [`ColumnType`] tags, and callers
//! decide what to build from them.

use crate::error::{Error, Result};
use std::path::Path;

/// Rows sampled per column during type inference
const SAMPLE_ROWS: usize = 1000;

/// Primitive type inferred for a table column
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ColumnType {
    /// Every sampled value parses as a signed integer
    Int,
    /// Every sampled value parses as a floating point number
    Float,
    /// Every sampled value is true/false/1/0 (case-insensitive)
    Bool,
    /// Fallback: values kept as text
    Str,
}

/// Column-major table of text fields with inferred column types
///
/// # Example
///
/// ```
/// use tensr::table::{ColumnType, Table};
///
/// let t = Table::parse("name,score\nalice,9.5\nbob,7.0", ',', true).unwrap();
/// assert_eq!(t.n_rows(), 2);
/// assert_eq!(t.column_names(), ["name", "score"]);
/// assert_eq!(t.column_types(), [ColumnType::Str, ColumnType::Float]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Table {
    column_names: Vec<String>,
    columns: Vec<Vec<String>>,
    column_types: Vec<ColumnType>,
}

impl Table {
    /// Load a table from a file
    pub fn from_path(path: impl AsRef<Path>, delimiter: char, has_header: bool) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content, delimiter, has_header)
    }

    /// Parse a table from in-memory text
    ///
    /// With `has_header` the first record supplies the column names;
    /// otherwise names are generated as `col0..colN-1`. Records shorter than
    /// the column count are padded with empty fields, longer ones truncated.
    /// Empty input yields an empty table.
    pub fn parse(content: &str, delimiter: char, has_header: bool) -> Result<Self> {
        let mut records = split_records(content, delimiter)?;
        if records.is_empty() {
            return Ok(Self::default());
        }

        let (column_names, body) = if has_header {
            let names = records.remove(0);
            (names, records)
        } else {
            let ncols = records[0].len();
            let names = (0..ncols).map(|i| format!("col{i}")).collect();
            (names, records)
        };

        let ncols = column_names.len();
        let mut columns: Vec<Vec<String>> = vec![Vec::with_capacity(body.len()); ncols];
        for mut record in body {
            record.resize(ncols, String::new());
            for (col, field) in columns.iter_mut().zip(record) {
                col.push(field);
            }
        }

        let column_types = infer_types(&columns);
        Ok(Self {
            column_names,
            columns,
            column_types,
        })
    }

    /// Number of data rows
    pub fn n_rows(&self) -> usize {
        self.columns.first().map_or(0, Vec::len)
    }

    /// Number of columns
    pub fn n_cols(&self) -> usize {
        self.columns.len()
    }

    /// Collect row `r` across all columns, or `None` when out of range
    pub fn row(&self, r: usize) -> Option<Vec<&str>> {
        if r >= self.n_rows() {
            return None;
        }
        Some(self.columns.iter().map(|col| col[r].as_str()).collect())
    }

    /// Fields of column `c`, or `None` when out of range
    pub fn column(&self, c: usize) -> Option<&[String]> {
        self.columns.get(c).map(Vec::as_slice)
    }

    /// Column names, header-supplied or generated
    pub fn column_names(&self) -> &[String] {
        &self.column_names
    }

    /// Inferred type per column
    pub fn column_types(&self) -> &[ColumnType] {
        &self.column_types
    }
}

/// Single-pass field scanner
///
/// `"` toggles quoting; a doubled `""` inside quotes is a literal quote.
/// Delimiters and newlines only terminate fields/records outside quotes.
/// A quote still open at end of input is an error.
fn split_records(content: &str, delimiter: char) -> Result<Vec<Vec<String>>> {
    let mut records = Vec::new();
    let mut record = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut quote_start = 0usize;

    let mut chars = content.char_indices().peekable();
    while let Some((i, c)) = chars.next() {
        if c == '"' {
            if in_quotes && matches!(chars.peek(), Some(&(_, '"'))) {
                field.push('"');
                chars.next();
            } else {
                if !in_quotes {
                    quote_start = i;
                }
                in_quotes = !in_quotes;
            }
        } else if c == delimiter && !in_quotes {
            record.push(std::mem::take(&mut field));
        } else if (c == '\n' || c == '\r') && !in_quotes {
            if c == '\r' && matches!(chars.peek(), Some(&(_, '\n'))) {
                chars.next();
            }
            record.push(std::mem::take(&mut field));
            records.push(std::mem::take(&mut record));
        } else {
            field.push(c);
        }
    }

    if in_quotes {
        return Err(Error::UnterminatedQuote {
            offset: quote_start,
        });
    }

    // Flush a final record not closed by a newline
    if !field.is_empty() || !record.is_empty() {
        record.push(field);
        records.push(record);
    }

    Ok(records)
}

/// Infer a type per column by sampling leading non-empty values
///
/// Precedence when several classifiers hold for the whole sample:
/// integer, then float, then bool, then string.
fn infer_types(columns: &[Vec<String>]) -> Vec<ColumnType> {
    columns
        .iter()
        .map(|col| {
            let mut all_int = true;
            let mut all_float = true;
            let mut all_bool = true;
            for value in col.iter().take(SAMPLE_ROWS) {
                if value.is_empty() {
                    continue;
                }
                if all_int && !looks_like_int(value) {
                    all_int = false;
                }
                if all_float && !looks_like_float(value) {
                    all_float = false;
                }
                if all_bool && !looks_like_bool(value) {
                    all_bool = false;
                }
            }
            if all_int {
                ColumnType::Int
            } else if all_float {
                ColumnType::Float
            } else if all_bool {
                ColumnType::Bool
            } else {
                ColumnType::Str
            }
        })
        .collect()
}

fn looks_like_int(s: &str) -> bool {
    let digits = s.strip_prefix(['+', '-']).unwrap_or(s);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

fn looks_like_float(s: &str) -> bool {
    s.parse::<f64>().is_ok()
}

fn looks_like_bool(s: &str) -> bool {
    s.eq_ignore_ascii_case("true") || s.eq_ignore_ascii_case("false") || s == "1" || s == "0"
}
