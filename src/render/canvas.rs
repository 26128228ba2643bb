//! The character grid both layouts draw into.

use std::fmt;

/// One slot of a [`Canvas`]. A slot holds either nothing, a single connector
/// glyph, or a whole key label. Labels are wider than one column when printed,
/// which pushes the rest of their row to the right.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    /// Printed as a single space.
    Blank,
    /// A connector such as `/` or `\`.
    Glyph(char),
    /// A formatted key.
    Label(String),
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Blank => f.write_str(" "),
            Self::Glyph(c) => write!(f, "{c}"),
            Self::Label(s) => f.write_str(s),
        }
    }
}

/// A rectangular grid of [`Cell`]s that the layouts draw into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    rows: Vec<Vec<Cell>>,
    width: usize,
}

impl Canvas {
    /// A canvas of `height` rows by `width` columns, all blank.
    pub fn new(height: usize, width: usize) -> Self {
        Self {
            rows: vec![vec![Cell::Blank; width]; height],
            width,
        }
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Borrows the cell at `row`, `col`.
    pub fn get(&self, row: usize, col: usize) -> Option<&Cell> {
        self.rows.get(row).and_then(|r| r.get(col))
    }

    /// Writes `cell` at `row`, `col`. Coordinates off the canvas are ignored so
    /// layouts can use signed span arithmetic without bounds checks of their own.
    pub fn put(&mut self, row: i64, col: i64, cell: Cell) {
        let (Ok(row), Ok(col)) = (usize::try_from(row), usize::try_from(col)) else {
            return;
        };
        if let Some(slot) = self.rows.get_mut(row).and_then(|r| r.get_mut(col)) {
            *slot = cell;
        }
    }

    /// The printed form of every row, without a trailing newline.
    pub fn lines(&self) -> Vec<String> {
        self.rows
            .iter()
            .map(|row| row.iter().map(ToString::to_string).collect())
            .collect()
    }
}

impl fmt::Display for Canvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.lines() {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
