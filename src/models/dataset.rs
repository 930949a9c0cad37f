//! In-memory catalog model: raw tabular cells plus a typed per-row view.

use serde_json::{Map, Number, Value as JsonValue};

/// A single cell of the source table, preserving the stored type.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Null,
    Int(i64),
    Float(f64),
    Str(String),
}

impl Cell {
    /// Numeric view of the cell, if it holds a number.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Int(v) => Some(*v as f64),
            Self::Float(v) => Some(*v),
            _ => None,
        }
    }

    /// Text rendering used for categorical columns. Null renders empty.
    pub fn to_text(&self) -> String {
        match self {
            Self::Null => String::new(),
            Self::Int(v) => v.to_string(),
            Self::Float(v) => v.to_string(),
            Self::Str(s) => s.clone(),
        }
    }

    /// JSON value for the data preview.
    pub fn to_json(&self) -> JsonValue {
        match self {
            Self::Null => JsonValue::Null,
            Self::Int(v) => JsonValue::Number(Number::from(*v)),
            Self::Float(v) => Number::from_f64(*v)
                .map(JsonValue::Number)
                .unwrap_or(JsonValue::Null),
            Self::Str(s) => JsonValue::String(s.clone()),
        }
    }
}

/// Typed view of one catalog row, resolved from the raw cells at load time.
#[derive(Debug, Clone)]
pub struct Item {
    pub level: String,
    pub item_type: String,
    pub duration_minutes: f64,
    pub popularity: f64,
    /// None when the `Certified` column is absent or the cell is null.
    pub certified: Option<bool>,
    /// Comma-separated tag string; None when absent, null, or blank.
    pub technology: Option<String>,
    /// Comma-separated tag string; None when absent, null, or blank.
    pub subject: Option<String>,
}

/// The learning catalog, loaded once at startup and immutable afterwards.
///
/// `rows` keeps the source cells for the data preview; `items` is the typed
/// view the analytics engine works on. Both share the source row order.
#[derive(Debug)]
pub struct Dataset {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
    pub items: Vec<Item>,
}

impl Dataset {
    /// Number of rows in the catalog.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Materialize row `index` as a column-name to value mapping.
    pub fn record(&self, index: usize) -> Map<String, JsonValue> {
        let mut record = Map::new();
        for (pos, column) in self.columns.iter().enumerate() {
            let value = self.rows[index]
                .get(pos)
                .map(Cell::to_json)
                .unwrap_or(JsonValue::Null);
            record.insert(column.clone(), value);
        }
        record
    }
}
