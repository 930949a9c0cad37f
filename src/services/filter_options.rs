//! Filter domain discovery: the selectable values for the dashboard filters.

use serde::Serialize;

use crate::models::dataset::Dataset;

/// Distinct filter values present in the full, unfiltered catalog.
#[derive(Debug, Serialize)]
pub struct FilterOptions {
    pub levels: Vec<String>,
    pub types: Vec<String>,
}

/// Collect distinct `Level` and `Type` values in first-encountered order.
pub fn distinct(dataset: &Dataset) -> FilterOptions {
    FilterOptions {
        levels: distinct_values(dataset.items.iter().map(|item| item.level.as_str())),
        types: distinct_values(dataset.items.iter().map(|item| item.item_type.as_str())),
    }
}

fn distinct_values<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut distinct: Vec<String> = Vec::new();
    for value in values {
        if !distinct.iter().any(|existing| existing == value) {
            distinct.push(value.to_string());
        }
    }
    distinct
}
