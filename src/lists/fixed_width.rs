//! Pipe-delimited fixed-width tables.
//!
//! ```text
//! # comment
//! |  ion|      wave| NIST|
//! |  ArI| 4159.7620|    1|
//! ```
//!
//! Tables without a `|` in the header row are split on whitespace instead.

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::input::open_maybe_gz;
use crate::lists::ListError;

#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    /// 1-based line number in the source file.
    pub line_no: usize,
    pub cells: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub path: PathBuf,
    pub columns: Vec<String>,
    pub rows: Vec<Row>,
}

impl Table {
    pub fn read(path: &Path) -> Result<Self, ListError> {
        let reader = open_maybe_gz(path)?;
        Self::parse(reader, path)
    }

    pub fn parse(reader: impl BufRead, path: &Path) -> Result<Self, ListError> {
        let mut columns: Option<Vec<String>> = None;
        let mut piped = false;
        let mut rows = Vec::new();

        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            if columns.is_none() {
                piped = trimmed.contains('|');
                columns = Some(split_cells(trimmed, piped));
                continue;
            }
            let expected = columns.as_ref().map_or(0, Vec::len);
            let cells = split_cells(trimmed, piped);
            if cells.len() != expected {
                return Err(ListError::Parse {
                    path: path.to_path_buf(),
                    line: idx + 1,
                    msg: format!("expected {expected} columns, found {}", cells.len()),
                });
            }
            rows.push(Row {
                line_no: idx + 1,
                cells,
            });
        }

        Ok(Self {
            path: path.to_path_buf(),
            columns: columns.unwrap_or_default(),
            rows,
        })
    }

    pub fn column(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    pub fn require_column(&self, name: &str) -> Result<usize, ListError> {
        self.column(name).ok_or_else(|| ListError::MissingColumn {
            column: name.to_string(),
            path: self.path.clone(),
        })
    }

    pub fn parse_cell<T>(&self, row: &Row, col: usize) -> Result<T, ListError>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        let raw = row.cells[col].as_str();
        raw.parse::<T>().map_err(|e| ListError::Parse {
            path: self.path.clone(),
            line: row.line_no,
            msg: format!("{}={raw:?}: {e}", self.columns[col]),
        })
    }

    /// Parse an optional column; blank cells and absent columns give `default`.
    pub fn parse_or<T>(&self, row: &Row, col: Option<usize>, default: T) -> Result<T, ListError>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        match col {
            Some(c) if !row.cells[c].is_empty() => self.parse_cell(row, c),
            _ => Ok(default),
        }
    }
}

fn split_cells(line: &str, piped: bool) -> Vec<String> {
    if piped {
        let inner = line.strip_prefix('|').unwrap_or(line);
        let inner = inner.strip_suffix('|').unwrap_or(inner);
        inner.split('|').map(|c| c.trim().to_string()).collect()
    } else {
        line.split_whitespace().map(str::to_string).collect()
    }
}

/// Write a pipe-delimited table with right-aligned cells.
pub fn write_table<W: Write>(
    out: &mut W,
    columns: &[&str],
    rows: &[Vec<String>],
) -> std::io::Result<()> {
    let mut widths: Vec<usize> = columns.iter().map(|c| c.len()).collect();
    for row in rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.len());
        }
    }

    write_row(out, columns, &widths)?;
    for row in rows {
        let cells: Vec<&str> = row.iter().map(String::as_str).collect();
        write_row(out, &cells, &widths)?;
    }
    Ok(())
}

fn write_row<W: Write>(out: &mut W, cells: &[&str], widths: &[usize]) -> std::io::Result<()> {
    let mut line = String::from("|");
    for (cell, &w) in cells.iter().zip(widths) {
        line.push_str(&format!(" {cell:>w$}|"));
    }
    writeln!(out, "{line}")
}
