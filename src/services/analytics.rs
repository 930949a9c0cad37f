//! Filtering and aggregation engine behind the recommendations endpoint.
//!
//! Pure computation over the immutable catalog: no shared mutable state,
//! linear in row count, identical inputs produce identical bundles. The six
//! charts are each derived from the same filtered view.

use serde::Serialize;
use serde_json::{Map, Value as JsonValue};

use crate::models::chart::ChartSpec;
use crate::models::criteria::FilterCriteria;
use crate::models::dataset::Dataset;

/// Rows emitted in the data preview.
const PREVIEW_ROWS: usize = 5;

/// Entries kept by the tag frequency charts.
const TOP_TAGS: usize = 10;

/// Key indicators over the filtered set.
#[derive(Debug, Serialize)]
pub struct Kpis {
    pub total_items: usize,
    pub total_duration_hours: f64,
    /// Mean popularity; null when the filtered set is empty.
    pub avg_popularity: Option<f64>,
    pub certified_percentage: f64,
}

/// The six chart payloads rendered by the dashboard.
#[derive(Debug, Serialize)]
pub struct Charts {
    pub chart1: ChartSpec,
    pub chart2: ChartSpec,
    pub chart3: ChartSpec,
    pub chart4: ChartSpec,
    pub chart5: ChartSpec,
    pub chart6: ChartSpec,
}

/// Full response for a recommendations request.
#[derive(Debug, Serialize)]
pub struct AnalyticsBundle {
    pub kpis: Kpis,
    pub charts: Charts,
    pub data_preview: Vec<Map<String, JsonValue>>,
}

/// Compute KPIs, charts, and preview for the rows matching `criteria`.
///
/// Filter values absent from the catalog simply match nothing; an empty
/// result is a valid bundle with zeroed KPIs and empty series.
pub fn compute(dataset: &Dataset, criteria: &FilterCriteria) -> AnalyticsBundle {
    let selected: Vec<usize> = dataset
        .items
        .iter()
        .enumerate()
        .filter(|(_, item)| criteria.matches(item))
        .map(|(index, _)| index)
        .collect();

    AnalyticsBundle {
        kpis: compute_kpis(dataset, &selected),
        charts: compute_charts(dataset, &selected),
        data_preview: selected
            .iter()
            .take(PREVIEW_ROWS)
            .map(|&index| dataset.record(index))
            .collect(),
    }
}

fn compute_kpis(dataset: &Dataset, selected: &[usize]) -> Kpis {
    let total_items = selected.len();
    let total_minutes: f64 = selected
        .iter()
        .map(|&index| dataset.items[index].duration_minutes)
        .sum();

    let avg_popularity = if total_items == 0 {
        None
    } else {
        let sum: f64 = selected
            .iter()
            .map(|&index| dataset.items[index].popularity)
            .sum();
        Some(round2(sum / total_items as f64))
    };

    let certified_percentage = if total_items == 0 {
        0.0
    } else {
        let certified = selected
            .iter()
            .filter(|&&index| dataset.items[index].certified == Some(true))
            .count();
        round2(certified as f64 * 100.0 / total_items as f64)
    };

    Kpis {
        total_items,
        total_duration_hours: round2(total_minutes / 60.0),
        avg_popularity,
        certified_percentage,
    }
}

fn compute_charts(dataset: &Dataset, selected: &[usize]) -> Charts {
    let item = |&index: &usize| &dataset.items[index];

    let level_counts = sort_by_count_desc(count_by(selected.iter().map(|i| item(i).level.as_str())));
    let type_counts =
        sort_by_count_desc(count_by(selected.iter().map(|i| item(i).item_type.as_str())));
    let popularity_by_type = mean_by(
        selected
            .iter()
            .map(|i| (item(i).item_type.as_str(), item(i).popularity)),
    );
    let duration_by_level = sum_by(
        selected
            .iter()
            .map(|i| (item(i).level.as_str(), item(i).duration_minutes)),
    );
    let top_technologies = top_tags(selected.iter().filter_map(|i| item(i).technology.as_deref()));
    let top_subjects = top_tags(selected.iter().filter_map(|i| item(i).subject.as_deref()));

    Charts {
        chart1: ChartSpec::count_bar("Répartition par niveau", "Levels", "Count", &level_counts),
        chart2: ChartSpec::pie("Répartition par type", &type_counts),
        chart3: ChartSpec::value_bar(
            "Popularité moyenne par type",
            "Type",
            "Popularity",
            &popularity_by_type,
        ),
        chart4: ChartSpec::value_bar(
            "Durée totale (min) par niveau",
            "Levels",
            "duration_in_minutes",
            &duration_by_level,
        ),
        chart5: ChartSpec::count_bar(
            "Top technologies (occurrences)",
            "Technology",
            "Count",
            &top_technologies,
        ),
        chart6: ChartSpec::count_bar(
            "Top sujets (occurrences)",
            "Subject",
            "Count",
            &top_subjects,
        ),
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Count occurrences, keys in first-encountered order.
fn count_by<'a>(keys: impl Iterator<Item = &'a str>) -> Vec<(String, u64)> {
    let mut counts: Vec<(String, u64)> = Vec::new();
    for key in keys {
        match counts.iter_mut().find(|(existing, _)| existing == key) {
            Some((_, count)) => *count += 1,
            None => counts.push((key.to_string(), 1)),
        }
    }
    counts
}

/// Descending by count; the stable sort keeps first-encountered order on ties.
fn sort_by_count_desc(mut counts: Vec<(String, u64)>) -> Vec<(String, u64)> {
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

/// Group means, ascending alphabetical by key.
fn mean_by<'a>(pairs: impl Iterator<Item = (&'a str, f64)>) -> Vec<(String, f64)> {
    let mut groups: Vec<(String, f64, u64)> = Vec::new();
    for (key, value) in pairs {
        match groups.iter_mut().find(|(existing, _, _)| existing == key) {
            Some((_, sum, count)) => {
                *sum += value;
                *count += 1;
            }
            None => groups.push((key.to_string(), value, 1)),
        }
    }
    groups.sort_by(|a, b| a.0.cmp(&b.0));
    groups
        .into_iter()
        .map(|(key, sum, count)| (key, sum / count as f64))
        .collect()
}

/// Group sums, ascending alphabetical by key.
fn sum_by<'a>(pairs: impl Iterator<Item = (&'a str, f64)>) -> Vec<(String, f64)> {
    let mut groups: Vec<(String, f64)> = Vec::new();
    for (key, value) in pairs {
        match groups.iter_mut().find(|(existing, _)| existing == key) {
            Some((_, sum)) => *sum += value,
            None => groups.push((key.to_string(), value)),
        }
    }
    groups.sort_by(|a, b| a.0.cmp(&b.0));
    groups
}

/// Split comma-separated tag fields, count occurrences, keep the top 10.
fn top_tags<'a>(fields: impl Iterator<Item = &'a str>) -> Vec<(String, u64)> {
    let mut counts: Vec<(String, u64)> = Vec::new();
    for field in fields {
        for tag in field.split(',') {
            let tag = tag.trim();
            if tag.is_empty() {
                continue;
            }
            match counts.iter_mut().find(|(existing, _)| existing == tag) {
                Some((_, count)) => *count += 1,
                None => counts.push((tag.to_string(), 1)),
            }
        }
    }
    let mut counts = sort_by_count_desc(counts);
    counts.truncate(TOP_TAGS);
    counts
}
