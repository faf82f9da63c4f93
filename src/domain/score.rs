//! Score domain entity, metric metadata and submission parsing.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

use crate::config::{MAX_STRING_COLUMN_LENGTH, RESULT_KEY_COMMENT, RESULT_KEY_USER_PRIMARY_KEY};
use crate::errors::{AppError, AppResult};

/// Evaluation metrics recorded for every submission.
///
/// Declaration order is display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    Ndcg,
    F1,
}

impl Metric {
    /// All metrics in declaration order
    pub const ALL: [Metric; 2] = [Metric::Ndcg, Metric::F1];

    /// Field name in storage and in submission result maps
    pub fn name(self) -> &'static str {
        match self {
            Metric::Ndcg => "ndcg",
            Metric::F1 => "f1",
        }
    }

    /// Human-readable label
    pub fn label(self) -> &'static str {
        match self {
            Metric::Ndcg => "nDCG@5",
            Metric::F1 => "F値",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.name() == name)
    }

    /// Metadata for every metric, flagging the sort key
    pub fn definitions() -> Vec<MetricDefinition> {
        Self::ALL
            .into_iter()
            .map(|metric| MetricDefinition {
                name: metric.name().to_string(),
                label: metric.label().to_string(),
                sort_key: metric == Score::SORT_KEY,
            })
            .collect()
    }
}

impl std::fmt::Display for Metric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Metric metadata exposed to clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct MetricDefinition {
    #[schema(example = "ndcg")]
    pub name: String,
    #[schema(example = "nDCG@5")]
    pub label: String,
    /// Whether this metric ranks the leaderboard
    pub sort_key: bool,
}

/// One evaluated submission. Created once, never updated.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Score {
    pub id: i32,
    /// Assigned by storage at insert
    pub created_at: DateTime<Utc>,
    /// Owning user's surrogate key
    pub user_primary_key: i32,
    pub comment: Option<String>,
    #[schema(example = 0.81)]
    pub ndcg: f64,
    #[schema(example = 0.64)]
    pub f1: f64,
}

impl Score {
    /// Metric that ranks leaderboard entries
    pub const SORT_KEY: Metric = Metric::Ndcg;

    pub fn metric(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Ndcg => self.ndcg,
            Metric::F1 => self.f1,
        }
    }

    /// Value of the sort key metric
    pub fn sort_value(&self) -> f64 {
        self.metric(Self::SORT_KEY)
    }
}

/// Validated input for a new [`Score`] row.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreSubmission {
    pub user_primary_key: i32,
    pub comment: Option<String>,
    pub ndcg: f64,
    pub f1: f64,
}

impl ScoreSubmission {
    /// Build a submission from an evaluation result map.
    ///
    /// The map must hold `user_primary_key`, `comment` (string or null) and
    /// one entry per metric, keyed by [`Metric::name`].
    ///
    /// # Errors
    /// [`AppError::MissingField`] when a required key is absent,
    /// [`AppError::Validation`] when a value has the wrong type, a metric
    /// is not finite, or the comment is too long.
    pub fn from_result_map(result: &Map<String, Value>) -> AppResult<Self> {
        let user_primary_key = lookup(result, RESULT_KEY_USER_PRIMARY_KEY)?
            .as_i64()
            .and_then(|v| i32::try_from(v).ok())
            .ok_or_else(|| {
                AppError::validation(format!("`{}` must be an integer", RESULT_KEY_USER_PRIMARY_KEY))
            })?;

        let comment = match lookup(result, RESULT_KEY_COMMENT)? {
            Value::Null => None,
            Value::String(s) => Some(s.clone()),
            _ => {
                return Err(AppError::validation(format!(
                    "`{}` must be a string or null",
                    RESULT_KEY_COMMENT
                )))
            }
        };

        let mut submission = Self {
            user_primary_key,
            comment,
            ndcg: 0.0,
            f1: 0.0,
        };
        for metric in Metric::ALL {
            let value = lookup(result, metric.name())?
                .as_f64()
                .ok_or_else(|| AppError::validation(format!("`{}` must be a number", metric)))?;
            submission.set_metric(metric, value);
        }

        submission.validate()?;
        Ok(submission)
    }

    /// Parse a JSON object and build a submission from it.
    pub fn from_json(raw: &str) -> AppResult<Self> {
        let value: Value = serde_json::from_str(raw)
            .map_err(|e| AppError::validation(format!("Invalid submission JSON: {}", e)))?;
        match value {
            Value::Object(map) => Self::from_result_map(&map),
            _ => Err(AppError::validation("Submission must be a JSON object")),
        }
    }

    pub fn metric(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Ndcg => self.ndcg,
            Metric::F1 => self.f1,
        }
    }

    pub fn set_metric(&mut self, metric: Metric, value: f64) {
        match metric {
            Metric::Ndcg => self.ndcg = value,
            Metric::F1 => self.f1 = value,
        }
    }

    /// Check value constraints that storage cannot express.
    pub fn validate(&self) -> AppResult<()> {
        for metric in Metric::ALL {
            if !self.metric(metric).is_finite() {
                return Err(AppError::validation(format!("`{}` must be finite", metric)));
            }
        }
        if let Some(comment) = &self.comment {
            if comment.chars().count() > MAX_STRING_COLUMN_LENGTH {
                return Err(AppError::validation(format!(
                    "`{}` must be at most {} characters",
                    RESULT_KEY_COMMENT, MAX_STRING_COLUMN_LENGTH
                )));
            }
        }
        Ok(())
    }
}

fn lookup<'a>(result: &'a Map<String, Value>, key: &str) -> AppResult<&'a Value> {
    result.get(key).ok_or_else(|| AppError::missing_field(key))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn as_map(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn test_metric_metadata() {
        assert_eq!(Metric::Ndcg.label(), "nDCG@5");
        assert_eq!(Metric::F1.label(), "F値");
        assert_eq!(Score::SORT_KEY.name(), "ndcg");
        assert_eq!(Metric::from_name("f1"), Some(Metric::F1));
        assert_eq!(Metric::from_name("var_name"), None);
    }

    #[test]
    fn test_definitions_flag_sort_key() {
        let defs = Metric::definitions();
        assert_eq!(defs.len(), 2);
        assert_eq!(defs[0].name, "ndcg");
        assert!(defs[0].sort_key);
        assert!(!defs[1].sort_key);
    }

    #[test]
    fn test_each_metric_read_from_its_own_key() {
        let map = as_map(json!({
            "user_primary_key": 1,
            "comment": "x",
            "ndcg": 0.9,
            "f1": 0.5
        }));

        let submission = ScoreSubmission::from_result_map(&map).unwrap();

        assert_eq!(submission.user_primary_key, 1);
        assert_eq!(submission.comment.as_deref(), Some("x"));
        assert_eq!(submission.ndcg, 0.9);
        assert_eq!(submission.f1, 0.5);
    }

    #[test]
    fn test_literal_var_name_key_is_not_used() {
        let map = as_map(json!({
            "user_primary_key": 1,
            "comment": null,
            "var_name": 0.3
        }));

        let err = ScoreSubmission::from_result_map(&map).unwrap_err();
        assert!(matches!(err, AppError::MissingField(ref key) if key == "ndcg"));
    }

    #[test]
    fn test_missing_metric_is_lookup_failure() {
        let map = as_map(json!({"user_primary_key": 1, "comment": "x", "ndcg": 0.9}));

        let err = ScoreSubmission::from_result_map(&map).unwrap_err();
        assert!(matches!(err, AppError::MissingField(ref key) if key == "f1"));
    }

    #[test]
    fn test_comment_key_required_but_nullable() {
        let map = as_map(json!({"user_primary_key": 1, "ndcg": 0.9, "f1": 0.5}));
        assert!(matches!(
            ScoreSubmission::from_result_map(&map),
            Err(AppError::MissingField(_))
        ));

        let map = as_map(json!({"user_primary_key": 1, "comment": null, "ndcg": 0.9, "f1": 0.5}));
        assert_eq!(ScoreSubmission::from_result_map(&map).unwrap().comment, None);
    }

    #[test]
    fn test_wrong_types_rejected() {
        let map = as_map(json!({"user_primary_key": "1", "comment": "x", "ndcg": 0.9, "f1": 0.5}));
        assert!(matches!(
            ScoreSubmission::from_result_map(&map),
            Err(AppError::Validation(_))
        ));

        let map = as_map(json!({"user_primary_key": 1, "comment": "x", "ndcg": "high", "f1": 0.5}));
        assert!(matches!(
            ScoreSubmission::from_result_map(&map),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_integer_metric_accepted() {
        let map = as_map(json!({"user_primary_key": 2, "comment": "", "ndcg": 1, "f1": 0}));
        let submission = ScoreSubmission::from_result_map(&map).unwrap();
        assert_eq!(submission.ndcg, 1.0);
        assert_eq!(submission.f1, 0.0);
    }

    #[test]
    fn test_non_finite_metric_rejected() {
        let submission = ScoreSubmission {
            user_primary_key: 1,
            comment: None,
            ndcg: f64::NAN,
            f1: 0.1,
        };
        assert!(submission.validate().is_err());
    }

    #[test]
    fn test_overlong_comment_rejected() {
        let map = as_map(json!({
            "user_primary_key": 1,
            "comment": "c".repeat(MAX_STRING_COLUMN_LENGTH + 1),
            "ndcg": 0.1,
            "f1": 0.1
        }));
        assert!(matches!(
            ScoreSubmission::from_result_map(&map),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_from_json() {
        let submission =
            ScoreSubmission::from_json(r#"{"user_primary_key": 3, "comment": "run 2", "ndcg": 0.7, "f1": 0.6}"#)
                .unwrap();
        assert_eq!(submission.metric(Metric::F1), 0.6);

        assert!(ScoreSubmission::from_json("[1, 2]").is_err());
        assert!(ScoreSubmission::from_json("{").is_err());
    }
}
