use rustc_hash::FxHashMap;

use crate::error::{ModelError, Result};

/// A plan grid of named construction lines.
///
/// Rows are lines of constant y (labelled `"A"`, `"B"`, ...), columns are
/// lines of constant x (labelled `"1"`, `"2"`, ...). Coordinates are in the
/// storey's local frame. A node is written `"<row>:<column>"`, so `"B:2"`
/// lies on row `B` and column `2`.
#[derive(Debug, Clone, Default)]
pub struct Grid {
    columns: FxHashMap<String, f64>,
    rows: FxHashMap<String, f64>,
}

impl Grid {
    /// Creates an empty grid.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or moves) a column at `x`.
    pub fn add_column(&mut self, label: &str, x: f64) -> &mut Self {
        self.columns.insert(label.to_owned(), x);
        self
    }

    /// Adds a column `distance` past an existing column.
    ///
    /// # Errors
    ///
    /// Returns `ModelError::GridLineNotFound` if `previous` is unknown.
    pub fn add_column_after(
        &mut self,
        label: &str,
        previous: &str,
        distance: f64,
    ) -> Result<&mut Self> {
        let x = self.column(previous)? + distance;
        Ok(self.add_column(label, x))
    }

    /// Adds (or moves) a row at `y`.
    pub fn add_row(&mut self, label: &str, y: f64) -> &mut Self {
        self.rows.insert(label.to_owned(), y);
        self
    }

    /// Adds a row `distance` past an existing row.
    ///
    /// # Errors
    ///
    /// Returns `ModelError::GridLineNotFound` if `previous` is unknown.
    pub fn add_row_after(
        &mut self,
        label: &str,
        previous: &str,
        distance: f64,
    ) -> Result<&mut Self> {
        let y = self.row(previous)? + distance;
        Ok(self.add_row(label, y))
    }

    /// The x coordinate of a column.
    ///
    /// # Errors
    ///
    /// Returns `ModelError::GridLineNotFound` if the column is unknown.
    pub fn column(&self, label: &str) -> Result<f64> {
        lookup(&self.columns, label)
    }

    /// The y coordinate of a row.
    ///
    /// # Errors
    ///
    /// Returns `ModelError::GridLineNotFound` if the row is unknown.
    pub fn row(&self, label: &str) -> Result<f64> {
        lookup(&self.rows, label)
    }

    /// Resolves a `"<row>:<column>"` node to its `(x, y)` coordinates.
    ///
    /// # Errors
    ///
    /// Returns `ModelError::InvalidGridNode` if the node is malformed, or
    /// `ModelError::GridLineNotFound` if a line is unknown.
    pub fn node(&self, node: &str) -> Result<(f64, f64)> {
        let Some((row, column)) = node.split_once(':') else {
            return Err(ModelError::InvalidGridNode(node.to_owned()).into());
        };
        let y = self.row(row.trim())?;
        Ok((self.column(column.trim())?, y))
    }
}

fn lookup(lines: &FxHashMap<String, f64>, label: &str) -> Result<f64> {
    lines.get(label).copied().ok_or_else(|| {
        ModelError::GridLineNotFound {
            label: label.to_owned(),
        }
        .into()
    })
}
