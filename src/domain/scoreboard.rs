//! Scoreboard normalization.
//!
//! Scoreboards arrive over the wire in one of two shapes: an ordered list
//! of `{name, score}` entries or a name→score mapping. Everything past
//! this module only ever sees the canonical ordered-list form; this is
//! the single conversion point.

use serde::Deserialize;
use serde_json::{Map, Value};

use super::entity::ScoreEntry;

/// The accepted wire shapes of a scoreboard, modeled as a sum type at the
/// deserialization boundary.
///
/// `Other` absorbs anything that is neither a list of entries nor a
/// mapping (null, scalars, malformed lists) and normalizes to empty.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ScoreboardPayload {
    Entries(Vec<RawScoreEntry>),
    Keyed(Map<String, Value>),
    Other(Value),
}

/// One unvalidated list entry as received from a client.
///
/// `name` passes through unchanged; there is no check that it is
/// non-empty. `score` may be any JSON value and is coerced.
#[derive(Debug, Clone, Deserialize)]
pub struct RawScoreEntry {
    pub name: String,
    #[serde(default)]
    pub score: Value,
}

/// Convert any accepted wire shape into the canonical ordered list.
///
/// Pure and idempotent: normalizing an already-canonical list returns an
/// equivalent list. List order and mapping insertion order are preserved.
pub fn normalize_scoreboard(payload: ScoreboardPayload) -> Vec<ScoreEntry> {
    match payload {
        ScoreboardPayload::Entries(entries) => entries
            .into_iter()
            .map(|e| ScoreEntry::new(e.name, coerce_score(&e.score)))
            .collect(),
        ScoreboardPayload::Keyed(map) => map
            .into_iter()
            .map(|(name, score)| ScoreEntry::new(name, coerce_score(&score)))
            .collect(),
        ScoreboardPayload::Other(_) => Vec::new(),
    }
}

/// Coerce a JSON value to a score, defaulting missing/falsy/unparseable
/// values to 0 (the `Number(x || 0)` rule of the original platform).
fn coerce_score(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::Bool(b) => {
            if *b {
                1.0
            } else {
                0.0
            }
        }
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return 0.0;
            }
            match trimmed.parse::<f64>() {
                Ok(v) if v.is_finite() => v,
                _ => 0.0,
            }
        }
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload(value: Value) -> ScoreboardPayload {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_list_input_preserves_order_and_names() {
        // given:
        let input = payload(json!([
            {"name": "charlie", "score": 3},
            {"name": "alice", "score": 1},
            {"name": "bob", "score": 2}
        ]));

        // when:
        let result = normalize_scoreboard(input);

        // then:
        assert_eq!(
            result,
            vec![
                ScoreEntry::new("charlie".to_string(), 3.0),
                ScoreEntry::new("alice".to_string(), 1.0),
                ScoreEntry::new("bob".to_string(), 2.0),
            ]
        );
    }

    #[test]
    fn test_mapping_input_preserves_insertion_order() {
        // given:
        let input = payload(json!({"zoe": 4, "alice": 1}));

        // when:
        let result = normalize_scoreboard(input);

        // then: wire order, not alphabetical
        assert_eq!(
            result,
            vec![
                ScoreEntry::new("zoe".to_string(), 4.0),
                ScoreEntry::new("alice".to_string(), 1.0),
            ]
        );
    }

    #[test]
    fn test_list_and_mapping_inputs_are_equivalent() {
        // given:
        let from_map = normalize_scoreboard(payload(json!({"a": 1, "b": 2})));
        let from_list = normalize_scoreboard(payload(json!([
            {"name": "a", "score": 1},
            {"name": "b", "score": 2}
        ])));

        // then: same entries (order agrees here because inputs agree)
        assert_eq!(from_map, from_list);
    }

    #[test]
    fn test_normalization_is_idempotent() {
        // given:
        let once = normalize_scoreboard(payload(json!({"alice": 1, "bob": 0})));
        let as_wire: Vec<Value> = once
            .iter()
            .map(|e| json!({"name": e.name, "score": e.score}))
            .collect();

        // when:
        let twice = normalize_scoreboard(payload(Value::Array(as_wire)));

        // then:
        assert_eq!(once, twice);
    }

    #[test]
    fn test_missing_score_defaults_to_zero() {
        // given:
        let input = payload(json!([{"name": "x"}]));

        // when:
        let result = normalize_scoreboard(input);

        // then:
        assert_eq!(result, vec![ScoreEntry::new("x".to_string(), 0.0)]);
    }

    #[test]
    fn test_null_and_scalar_inputs_normalize_to_empty() {
        // then:
        assert!(normalize_scoreboard(payload(json!(null))).is_empty());
        assert!(normalize_scoreboard(payload(json!(42))).is_empty());
        assert!(normalize_scoreboard(payload(json!("scoreboard"))).is_empty());
    }

    #[test]
    fn test_falsy_and_unparseable_scores_coerce_to_zero() {
        // given:
        let input = payload(json!([
            {"name": "a", "score": null},
            {"name": "b", "score": false},
            {"name": "c", "score": ""},
            {"name": "d", "score": "oops"},
            {"name": "e", "score": []}
        ]));

        // when:
        let result = normalize_scoreboard(input);

        // then:
        assert!(result.iter().all(|e| e.score == 0.0));
        assert_eq!(result.len(), 5);
    }

    #[test]
    fn test_truthy_coercions_follow_number_semantics() {
        // given:
        let input = payload(json!([
            {"name": "a", "score": true},
            {"name": "b", "score": "12.5"},
            {"name": "c", "score": -3}
        ]));

        // when:
        let result = normalize_scoreboard(input);

        // then:
        assert_eq!(result[0].score, 1.0);
        assert_eq!(result[1].score, 12.5);
        assert_eq!(result[2].score, -3.0);
    }

    #[test]
    fn test_empty_list_and_empty_mapping_normalize_to_empty() {
        // then:
        assert!(normalize_scoreboard(payload(json!([]))).is_empty());
        assert!(normalize_scoreboard(payload(json!({}))).is_empty());
    }

    #[test]
    fn test_list_with_entry_missing_name_falls_back_to_empty() {
        // given: a list whose entries do not all carry a name does not
        // match the entries shape and is treated as malformed
        let input = payload(json!([{"score": 3}]));

        // when:
        let result = normalize_scoreboard(input);

        // then:
        assert!(result.is_empty());
    }
}
