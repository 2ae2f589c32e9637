use crate::error::{GeovizError, Result};
use ahash::AHashMap;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::hash::{Hash, Hasher};

/// One value in a [`Table`].
#[derive(Debug, Clone, Default)]
pub enum Cell {
    Number(f64),
    Text(String),
    #[default]
    Empty,
}

impl Cell {
    /// Numeric view of the cell. Text is accepted when it parses as `f64`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Cell::Number(n) => Some(*n),
            Cell::Text(s) => s.trim().parse::<f64>().ok(),
            Cell::Empty => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Number(n) => write!(f, "{}", n),
            Cell::Text(s) => f.write_str(s),
            Cell::Empty => Ok(()),
        }
    }
}

// Numbers compare by bit pattern so cells can key a hash map.
impl PartialEq for Cell {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Cell::Number(a), Cell::Number(b)) => a.to_bits() == b.to_bits(),
            (Cell::Text(a), Cell::Text(b)) => a == b,
            (Cell::Empty, Cell::Empty) => true,
            _ => false,
        }
    }
}

impl Eq for Cell {}

impl Hash for Cell {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Cell::Number(n) => {
                0u8.hash(state);
                n.to_bits().hash(state);
            }
            Cell::Text(s) => {
                1u8.hash(state);
                s.hash(state);
            }
            Cell::Empty => 2u8.hash(state),
        }
    }
}

impl From<f64> for Cell {
    fn from(v: f64) -> Self {
        Cell::Number(v)
    }
}

impl From<&str> for Cell {
    fn from(v: &str) -> Self {
        Cell::Text(v.to_string())
    }
}

impl From<String> for Cell {
    fn from(v: String) -> Self {
        Cell::Text(v)
    }
}

impl Serialize for Cell {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Cell::Number(n) => serializer.serialize_f64(*n),
            Cell::Text(s) => serializer.serialize_str(s),
            Cell::Empty => serializer.serialize_none(),
        }
    }
}

/// Accept JSON numbers, strings, booleans and null.
impl<'de> Deserialize<'de> for Cell {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::{self, Visitor};
        struct CellVisitor;

        impl<'de> Visitor<'de> for CellVisitor {
            type Value = Cell;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                write!(f, "a number, string, boolean or null")
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> std::result::Result<Cell, E> {
                Ok(Cell::Number(v))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> std::result::Result<Cell, E> {
                Ok(Cell::Number(v as f64))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> std::result::Result<Cell, E> {
                Ok(Cell::Number(v as f64))
            }

            fn visit_bool<E: de::Error>(self, v: bool) -> std::result::Result<Cell, E> {
                Ok(Cell::Text(v.to_string()))
            }

            fn visit_str<E: de::Error>(self, s: &str) -> std::result::Result<Cell, E> {
                Ok(Cell::Text(s.to_string()))
            }

            fn visit_string<E: de::Error>(self, s: String) -> std::result::Result<Cell, E> {
                Ok(Cell::Text(s))
            }

            fn visit_none<E: de::Error>(self) -> std::result::Result<Cell, E> {
                Ok(Cell::Empty)
            }

            fn visit_unit<E: de::Error>(self) -> std::result::Result<Cell, E> {
                Ok(Cell::Empty)
            }
        }

        deserializer.deserialize_any(CellVisitor)
    }
}

/// Tabular input: named columns, positional rows.
///
/// Rows may be shorter than the header (ragged CSV input); reading past the end of a
/// row reports [`GeovizError::MissingCell`] instead of inventing a value.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

impl Table {
    pub fn new<S: Into<String>>(headers: impl IntoIterator<Item = S>) -> Self {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    pub fn from_rows<S: Into<String>>(
        headers: impl IntoIterator<Item = S>,
        rows: Vec<Vec<Cell>>,
    ) -> Self {
        let mut table = Self::new(headers);
        table.rows = rows;
        table
    }

    pub fn push_row(&mut self, row: Vec<Cell>) {
        self.rows.push(row);
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.headers.iter().any(|h| h == name)
    }

    pub fn column_index(&self, name: &str) -> Result<usize> {
        self.headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| GeovizError::column_not_found(name))
    }

    /// Fail with `ColumnNotFound` for the first name that is not a column.
    pub fn require_columns(&self, names: &[&str]) -> Result<()> {
        for name in names {
            self.column_index(name)?;
        }
        Ok(())
    }

    pub fn cell(&self, row: usize, column: &str) -> Result<&Cell> {
        let idx = self.column_index(column)?;
        self.cell_at(row, idx)
    }

    fn cell_at(&self, row: usize, idx: usize) -> Result<&Cell> {
        self.rows
            .get(row)
            .and_then(|r| r.get(idx))
            .ok_or_else(|| GeovizError::MissingCell {
                column: self.headers[idx].clone(),
                row,
            })
    }

    /// Read a cell as a number.
    pub fn number(&self, row: usize, column: &str) -> Result<f64> {
        let idx = self.column_index(column)?;
        self.number_at(row, idx)
    }

    /// Read a cell as a number, addressing the column by position.
    pub fn number_at(&self, row: usize, idx: usize) -> Result<f64> {
        if idx >= self.headers.len() {
            return Err(GeovizError::column_not_found(&format!("#{}", idx)));
        }
        let cell = self.cell_at(row, idx)?;
        cell.as_f64().ok_or_else(|| GeovizError::InvalidNumber {
            column: self.headers[idx].clone(),
            row,
            value: cell.to_string(),
        })
    }

    /// All values of one column, top to bottom.
    pub fn column(&self, name: &str) -> Result<Vec<&Cell>> {
        let idx = self.column_index(name)?;
        (0..self.rows.len()).map(|r| self.cell_at(r, idx)).collect()
    }

    /// Distinct values of a column in order of first appearance.
    pub fn distinct(&self, name: &str) -> Result<Vec<Cell>> {
        let mut seen = ahash::AHashSet::new();
        let mut out = Vec::new();
        for cell in self.column(name)? {
            if seen.insert(cell) {
                out.push(cell.clone());
            }
        }
        Ok(out)
    }

    /// New table with only the named columns, in the given order.
    pub fn select(&self, names: &[&str]) -> Result<Table> {
        let idxs = names
            .iter()
            .map(|n| self.column_index(n))
            .collect::<Result<Vec<_>>>()?;
        let rows = (0..self.rows.len())
            .map(|r| {
                idxs.iter()
                    .map(|&i| self.cell_at(r, i).cloned())
                    .collect::<Result<Vec<_>>>()
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Table::from_rows(names.iter().copied(), rows))
    }

    /// Inner equality-join on `on`, which must exist in both tables.
    ///
    /// Output columns are this table's columns followed by the right table's columns
    /// minus its key. Rows come out in this table's order; a left row matching several
    /// right rows is repeated once per match. Short left rows are padded with
    /// [`Cell::Empty`].
    pub fn join(&self, right: &Table, on: &str) -> Result<Table> {
        let left_key = self.column_index(on)?;
        let right_key = right.column_index(on)?;

        let mut index: AHashMap<&Cell, Vec<usize>> = AHashMap::new();
        for r in 0..right.len() {
            index.entry(right.cell_at(r, right_key)?).or_default().push(r);
        }

        let right_cols: Vec<usize> = (0..right.headers.len())
            .filter(|&i| i != right_key)
            .collect();
        let mut headers = self.headers.clone();
        headers.extend(right_cols.iter().map(|&i| right.headers[i].clone()));

        let mut rows = Vec::new();
        for (r, row) in self.rows.iter().enumerate() {
            let key = self.cell_at(r, left_key)?;
            let Some(matches) = index.get(key) else {
                continue;
            };
            for &m in matches {
                let mut joined = row.clone();
                joined.resize(self.headers.len(), Cell::Empty);
                for &i in &right_cols {
                    joined.push(right.rows[m].get(i).cloned().unwrap_or_default());
                }
                rows.push(joined);
            }
        }
        Ok(Table { headers, rows })
    }
}
