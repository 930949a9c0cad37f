//! Chart payload types consumed by the dashboard's plotting front end.
//!
//! Charts are built as typed structures and serialized once at the HTTP
//! boundary, never as string-encoded JSON blobs. Each spec carries a single
//! trace plus a layout with the title and, for bar charts, axis titles.

use serde::Serialize;
use serde_json::Number;

/// Chart kind tag emitted in the trace (`"bar"` / `"pie"`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Bar,
    Pie,
}

/// A single data series.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Trace {
    Bar {
        x: Vec<String>,
        y: Vec<Number>,
        #[serde(rename = "type")]
        kind: ChartKind,
        name: String,
    },
    Pie {
        labels: Vec<String>,
        values: Vec<Number>,
        #[serde(rename = "type")]
        kind: ChartKind,
        name: String,
    },
}

/// Axis metadata.
#[derive(Debug, Clone, Serialize)]
pub struct Axis {
    pub title: String,
}

/// Chart layout: title plus axis titles for bar charts.
#[derive(Debug, Clone, Serialize)]
pub struct Layout {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xaxis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yaxis: Option<Axis>,
}

/// A self-describing chart payload: one trace plus layout.
#[derive(Debug, Clone, Serialize)]
pub struct ChartSpec {
    pub data: Vec<Trace>,
    pub layout: Layout,
}

impl ChartSpec {
    /// Bar chart over integer counts (frequency charts).
    pub fn count_bar(title: &str, x_title: &str, y_title: &str, entries: &[(String, u64)]) -> Self {
        let y = entries.iter().map(|(_, n)| Number::from(*n)).collect();
        Self::bar(title, x_title, y_title, labels(entries), y)
    }

    /// Bar chart over float values (means and sums).
    pub fn value_bar(title: &str, x_title: &str, y_title: &str, entries: &[(String, f64)]) -> Self {
        let y = entries
            .iter()
            .map(|(_, v)| Number::from_f64(*v).unwrap_or_else(|| Number::from(0)))
            .collect();
        Self::bar(title, x_title, y_title, labels(entries), y)
    }

    /// Pie chart over integer counts.
    pub fn pie(title: &str, entries: &[(String, u64)]) -> Self {
        let values = entries.iter().map(|(_, n)| Number::from(*n)).collect();
        Self {
            data: vec![Trace::Pie {
                labels: labels(entries),
                values,
                kind: ChartKind::Pie,
                name: title.to_string(),
            }],
            layout: Layout {
                title: title.to_string(),
                xaxis: None,
                yaxis: None,
            },
        }
    }

    fn bar(title: &str, x_title: &str, y_title: &str, x: Vec<String>, y: Vec<Number>) -> Self {
        Self {
            data: vec![Trace::Bar {
                x,
                y,
                kind: ChartKind::Bar,
                name: title.to_string(),
            }],
            layout: Layout {
                title: title.to_string(),
                xaxis: Some(Axis {
                    title: x_title.to_string(),
                }),
                yaxis: Some(Axis {
                    title: y_title.to_string(),
                }),
            },
        }
    }
}

fn labels<T>(entries: &[(String, T)]) -> Vec<String> {
    entries.iter().map(|(label, _)| label.clone()).collect()
}
