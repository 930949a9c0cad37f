//! Filter criteria selected by the dashboard user.

use serde::Deserialize;
use serde_json::Value as JsonValue;

use crate::errors::AppError;
use crate::models::dataset::Item;

/// Level and type selections for a recommendations request.
///
/// An empty vector on a dimension means no restriction on that dimension.
/// Deserializes from repeated query parameters (`levels_filter=a&levels_filter=b`)
/// via `axum_extra::extract::Query`; JSON bodies go through [`Self::from_body`]
/// so that malformed shapes surface as a client error instead of a rejection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FilterCriteria {
    #[serde(default, rename = "levels_filter")]
    pub levels: Vec<String>,
    #[serde(default, rename = "types_filter")]
    pub types: Vec<String>,
}

impl FilterCriteria {
    /// Validate and extract criteria from a JSON request body.
    ///
    /// Both keys are optional; a missing or null key means no restriction.
    pub fn from_body(body: &JsonValue) -> Result<Self, AppError> {
        let object = body.as_object().ok_or_else(|| {
            AppError::InvalidFilter("request body must be a JSON object".into())
        })?;

        Ok(Self {
            levels: string_list(object, "levels_filter")?,
            types: string_list(object, "types_filter")?,
        })
    }

    /// Conjunctive membership test: both selected dimensions must match.
    pub fn matches(&self, item: &Item) -> bool {
        (self.levels.is_empty() || self.levels.contains(&item.level))
            && (self.types.is_empty() || self.types.contains(&item.item_type))
    }

    pub fn is_unrestricted(&self) -> bool {
        self.levels.is_empty() && self.types.is_empty()
    }
}

/// Read an optional array-of-strings key from the body.
fn string_list(
    object: &serde_json::Map<String, JsonValue>,
    key: &str,
) -> Result<Vec<String>, AppError> {
    match object.get(key) {
        None | Some(JsonValue::Null) => Ok(Vec::new()),
        Some(JsonValue::Array(values)) => values
            .iter()
            .map(|value| {
                value.as_str().map(str::to_owned).ok_or_else(|| {
                    AppError::InvalidFilter(format!("`{key}` must contain only strings"))
                })
            })
            .collect(),
        Some(_) => Err(AppError::InvalidFilter(format!(
            "`{key}` must be an array of strings"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn item(level: &str, item_type: &str) -> Item {
        Item {
            level: level.into(),
            item_type: item_type.into(),
            duration_minutes: 0.0,
            popularity: 0.0,
            certified: None,
            technology: None,
            subject: None,
        }
    }

    #[test]
    fn from_body_full_shape() {
        let criteria = FilterCriteria::from_body(&json!({
            "levels_filter": ["Beginner", "Advanced"],
            "types_filter": ["Course"]
        }))
        .unwrap();
        assert_eq!(criteria.levels, vec!["Beginner", "Advanced"]);
        assert_eq!(criteria.types, vec!["Course"]);
    }

    #[test]
    fn from_body_missing_keys_mean_unrestricted() {
        let criteria = FilterCriteria::from_body(&json!({})).unwrap();
        assert!(criteria.is_unrestricted());

        let criteria = FilterCriteria::from_body(&json!({ "levels_filter": null })).unwrap();
        assert!(criteria.levels.is_empty());
    }

    #[test]
    fn from_body_rejects_non_object() {
        assert!(FilterCriteria::from_body(&json!(["Beginner"])).is_err());
        assert!(FilterCriteria::from_body(&json!("Beginner")).is_err());
    }

    #[test]
    fn from_body_rejects_wrong_value_shapes() {
        assert!(FilterCriteria::from_body(&json!({ "levels_filter": "Beginner" })).is_err());
        assert!(FilterCriteria::from_body(&json!({ "types_filter": [1, 2] })).is_err());
    }

    #[test]
    fn matches_is_conjunctive() {
        let criteria = FilterCriteria {
            levels: vec!["Beginner".into()],
            types: vec!["Course".into()],
        };
        assert!(criteria.matches(&item("Beginner", "Course")));
        assert!(!criteria.matches(&item("Beginner", "Project")));
        assert!(!criteria.matches(&item("Advanced", "Course")));
    }

    #[test]
    fn empty_dimension_does_not_exclude() {
        let criteria = FilterCriteria {
            levels: vec!["Beginner".into()],
            types: vec![],
        };
        assert!(criteria.matches(&item("Beginner", "Project")));
    }
}
