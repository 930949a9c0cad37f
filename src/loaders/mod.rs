//! Dataset loaders for the learning catalog.
//!
//! CSV and XLSX sources produce the same in-memory [`Dataset`]: the raw
//! cells as stored (for the data preview) plus a typed per-row [`Item`]
//! view resolved once at load time. Loading happens exactly once at
//! startup; a failure here is fatal and the process must not serve.

use std::fs::File;
use std::path::Path;

use calamine::{open_workbook, Data, Reader, Xlsx};

use crate::models::dataset::{Cell, Dataset, Item};

pub const COL_LEVEL: &str = "Level";
pub const COL_TYPE: &str = "Type";
pub const COL_DURATION: &str = "duration_in_minutes";
pub const COL_POPULARITY: &str = "Popularity";
pub const COL_CERTIFIED: &str = "Certified";
pub const COL_TECHNOLOGY: &str = "Technology";
pub const COL_SUBJECT: &str = "Subject";

/// Startup-fatal dataset loading failures.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to open dataset file `{path}`: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV parse error: {0}")]
    Csv(#[from] csv::Error),

    #[error("XLSX parse error: {0}")]
    Xlsx(#[from] calamine::XlsxError),

    #[error("unsupported dataset format `{0}` (expected .csv or .xlsx)")]
    UnsupportedFormat(String),

    #[error("required column `{0}` is missing")]
    MissingColumn(&'static str),

    #[error("dataset contains no rows")]
    Empty,

    #[error("row {row}: column `{column}` must be numeric")]
    InvalidCell { row: usize, column: &'static str },
}

/// Load the catalog from `path`, dispatching on the file extension.
pub fn load_dataset(path: impl AsRef<Path>) -> Result<Dataset, LoadError> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    let (columns, rows) = match extension.as_str() {
        "csv" => read_csv(path)?,
        "xlsx" => read_xlsx(path)?,
        other => return Err(LoadError::UnsupportedFormat(other.to_string())),
    };

    build_dataset(columns, rows)
}

/// Read a header-first CSV file into raw columns and cells.
fn read_csv(path: &Path) -> Result<(Vec<String>, Vec<Vec<Cell>>), LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })?;

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(file);

    let columns: Vec<String> = reader
        .headers()?
        .iter()
        .map(|header| header.trim().to_string())
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(parse_scalar).collect());
    }

    Ok((columns, rows))
}

/// Infer the cell type of a CSV field: empty, integer, float, or text.
fn parse_scalar(field: &str) -> Cell {
    if field.is_empty() {
        return Cell::Null;
    }
    if let Ok(int) = field.parse::<i64>() {
        return Cell::Int(int);
    }
    if let Ok(float) = field.parse::<f64>() {
        return Cell::Float(float);
    }
    Cell::Str(field.to_string())
}

/// Read the first worksheet of an XLSX workbook.
fn read_xlsx(path: &Path) -> Result<(Vec<String>, Vec<Vec<Cell>>), LoadError> {
    let mut workbook: Xlsx<_> = open_workbook(path)?;
    let range = workbook.worksheet_range_at(0).ok_or(LoadError::Empty)??;

    let mut row_iter = range.rows();
    let columns: Vec<String> = row_iter
        .next()
        .ok_or(LoadError::Empty)?
        .iter()
        .map(|cell| cell.to_string().trim().to_string())
        .collect();

    let rows = row_iter
        .map(|row| row.iter().map(convert_xlsx_cell).collect())
        .collect();

    Ok((columns, rows))
}

fn convert_xlsx_cell(cell: &Data) -> Cell {
    match cell {
        Data::Empty => Cell::Null,
        Data::Int(v) => Cell::Int(*v),
        // Whole floats come back as e.g. 60.0 for integer spreadsheet cells.
        Data::Float(v) if v.fract() == 0.0 && v.abs() < i64::MAX as f64 => Cell::Int(*v as i64),
        Data::Float(v) => Cell::Float(*v),
        Data::String(s) => Cell::Str(s.clone()),
        Data::Bool(b) => Cell::Int(i64::from(*b)),
        Data::DateTime(dt) => Cell::Float(dt.as_f64()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => Cell::Str(s.clone()),
        Data::Error(_) => Cell::Null,
    }
}

/// Resolve column indices once and build the typed item view.
fn build_dataset(columns: Vec<String>, rows: Vec<Vec<Cell>>) -> Result<Dataset, LoadError> {
    if rows.is_empty() {
        return Err(LoadError::Empty);
    }

    let level_idx = require_column(&columns, COL_LEVEL)?;
    let type_idx = require_column(&columns, COL_TYPE)?;
    let duration_idx = require_column(&columns, COL_DURATION)?;
    let popularity_idx = require_column(&columns, COL_POPULARITY)?;
    let certified_idx = find_column(&columns, COL_CERTIFIED);
    let technology_idx = find_column(&columns, COL_TECHNOLOGY);
    let subject_idx = find_column(&columns, COL_SUBJECT);

    static NULL_CELL: Cell = Cell::Null;

    let mut items = Vec::with_capacity(rows.len());
    for (row_idx, row) in rows.iter().enumerate() {
        let cell = |idx: usize| row.get(idx).unwrap_or(&NULL_CELL);

        items.push(Item {
            level: cell(level_idx).to_text(),
            item_type: cell(type_idx).to_text(),
            duration_minutes: numeric_cell(cell(duration_idx), row_idx, COL_DURATION)?,
            popularity: numeric_cell(cell(popularity_idx), row_idx, COL_POPULARITY)?,
            certified: certified_idx.and_then(|idx| match cell(idx) {
                Cell::Null => None,
                value => Some(value.as_f64() == Some(1.0)),
            }),
            technology: technology_idx.and_then(|idx| tag_field(cell(idx))),
            subject: subject_idx.and_then(|idx| tag_field(cell(idx))),
        });
    }

    Ok(Dataset {
        columns,
        rows,
        items,
    })
}

fn require_column(columns: &[String], name: &'static str) -> Result<usize, LoadError> {
    find_column(columns, name).ok_or(LoadError::MissingColumn(name))
}

fn find_column(columns: &[String], name: &str) -> Option<usize> {
    columns.iter().position(|column| column == name)
}

fn numeric_cell(cell: &Cell, row: usize, column: &'static str) -> Result<f64, LoadError> {
    cell.as_f64().ok_or(LoadError::InvalidCell { row, column })
}

/// Tag columns hold comma-separated text; anything else counts as absent.
fn tag_field(cell: &Cell) -> Option<String> {
    match cell {
        Cell::Str(s) if !s.trim().is_empty() => Some(s.clone()),
        _ => None,
    }
}
