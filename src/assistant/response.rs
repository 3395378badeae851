use super::{Difficulty, PriorityIssue, Suggestions};
use serde_json::{Map, Value};

const DEFAULT_ASSESSMENT: &str = "Analysis completed successfully.";

/// Removes a leading ```json / ``` fence and a trailing ``` fence.
pub fn strip_code_fence(text: &str) -> &str {
    let mut cleaned = text.trim();
    if let Some(rest) = cleaned.strip_prefix("```json") {
        cleaned = rest;
    } else if let Some(rest) = cleaned.strip_prefix("```") {
        cleaned = rest;
    }
    if let Some(rest) = cleaned.strip_suffix("```") {
        cleaned = rest;
    }
    cleaned.trim()
}

fn field_text(object: &Map<String, Value>, key: &str) -> String {
    match object.get(key) {
        Some(Value::String(s)) => s.clone(),
        None | Some(Value::Null) => String::new(),
        Some(other) => other.to_string(),
    }
}

fn priority_issue(value: &Value) -> Option<PriorityIssue> {
    let object = value.as_object()?;
    Some(PriorityIssue {
        issue: field_text(object, "issue"),
        recommendation: field_text(object, "recommendation"),
        impact: field_text(object, "impact"),
        difficulty: object
            .get("difficulty")
            .and_then(Value::as_str)
            .map_or(Difficulty::Medium, Difficulty::parse_lenient),
    })
}

impl Suggestions {
    /// Interprets raw model output. Invalid or missing parts are normalized rather than rejected.
    pub fn from_model_text(text: &str) -> Self {
        match serde_json::from_str::<Value>(strip_code_fence(text)) {
            Ok(Value::Object(object)) => Self::from_json_object(&object),
            _ => Self::from_plain_text(text),
        }
    }

    fn from_json_object(object: &Map<String, Value>) -> Self {
        let priority_issues = object
            .get("priority_issues")
            .and_then(Value::as_array)
            .map(|items| items.iter().filter_map(priority_issue).collect())
            .unwrap_or_default();

        let quick_wins = object
            .get("quick_wins")
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter_map(|item| item.as_str().map(str::to_string))
                    .collect()
            })
            .unwrap_or_default();

        let overall_assessment = object
            .get("overall_assessment")
            .and_then(Value::as_str)
            .unwrap_or(DEFAULT_ASSESSMENT)
            .to_string();

        Suggestions {
            error: None,
            priority_issues,
            quick_wins,
            overall_assessment,
        }
    }
}
