//! Loading tables and saving chart documents.

use crate::error::{GeovizError, Result};
use crate::geo::ChartDocument;
use crate::models::{Cell, Table};
use csv::ReaderBuilder;
use serde_json::Value;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

/// Read a CSV file with a header row into a [`Table`].
pub fn load_csv<P: AsRef<Path>>(path: P) -> Result<Table> {
    let file = File::open(path)?;
    read_csv(file)
}

/// Read CSV from any reader. Cells stay text; empty fields become [`Cell::Empty`].
/// Rows with fewer fields than the header are kept as-is.
pub fn read_csv<R: Read>(reader: R) -> Result<Table> {
    let mut rdr = ReaderBuilder::new().flexible(true).from_reader(reader);
    let headers: Vec<String> = rdr.headers()?.iter().map(|h| h.trim().to_string()).collect();
    let mut table = Table::new(headers);
    for record in rdr.records() {
        let record = record?;
        table.push_row(
            record
                .iter()
                .map(|field| {
                    if field.is_empty() {
                        Cell::Empty
                    } else {
                        Cell::Text(field.to_string())
                    }
                })
                .collect(),
        );
    }
    log::debug!("read {} CSV rows", table.len());
    Ok(table)
}

/// Build a [`Table`] from a JSON array of objects.
///
/// Columns are the keys of the first object; later objects missing a key get an
/// empty cell.
pub fn table_from_json(value: &Value) -> Result<Table> {
    let array = value
        .as_array()
        .ok_or_else(|| invalid_json("input must be a JSON array of objects"))?;
    let Some(first) = array.first() else {
        return Ok(Table::default());
    };
    let headers: Vec<String> = first
        .as_object()
        .ok_or_else(|| invalid_json("items in array must be objects"))?
        .keys()
        .cloned()
        .collect();

    let mut table = Table::new(headers.clone());
    for item in array {
        let obj = item
            .as_object()
            .ok_or_else(|| invalid_json("items in array must be objects"))?;
        let row = headers
            .iter()
            .map(|h| match obj.get(h) {
                Some(v) => serde_json::from_value::<Cell>(v.clone()),
                None => Ok(Cell::Empty),
            })
            .collect::<std::result::Result<Vec<_>, _>>()?;
        table.push_row(row);
    }
    Ok(table)
}

/// Read a JSON file holding an array of objects.
pub fn load_json<P: AsRef<Path>>(path: P) -> Result<Table> {
    let file = File::open(path)?;
    let value: Value = serde_json::from_reader(file)?;
    table_from_json(&value)
}

/// Save a document's figure (points and edges) as pretty JSON.
pub fn save_document_json<P: AsRef<Path>>(document: &ChartDocument, path: P) -> Result<()> {
    let mut f = File::create(path)?;
    let s = serde_json::to_string_pretty(&document.to_figure(true))?;
    f.write_all(s.as_bytes())?;
    Ok(())
}

fn invalid_json(msg: &str) -> GeovizError {
    GeovizError::Json(<serde_json::Error as serde::de::Error>::custom(msg))
}
