//! Display formatting for map- and condition-valued fields

use crate::{NodeCondition, PLACEHOLDER};
use std::collections::BTreeMap;

/// Substitute the placeholder for absent or empty text. The one place
/// missing display values become [`PLACEHOLDER`].
pub fn text_or_placeholder(value: Option<&str>) -> String {
    match value {
        Some(text) if !text.is_empty() => text.to_string(),
        _ => PLACEHOLDER.to_string(),
    }
}

/// Substitute the placeholder for an absent count; zero is a real value
pub fn count_or_placeholder(value: Option<i32>) -> String {
    match value {
        Some(count) => count.to_string(),
        None => PLACEHOLDER.to_string(),
    }
}

/// Format a label-style map as `key: value` pairs joined by `", "`, in key
/// order. Absent or empty maps format as the empty string.
pub fn format_map(map: Option<&BTreeMap<String, String>>) -> String {
    match map {
        Some(map) if !map.is_empty() => map
            .iter()
            .map(|(key, value)| format!("{}: {}", key, value))
            .collect::<Vec<_>>()
            .join(", "),
        _ => String::new(),
    }
}

/// Format node conditions as `type: status (reason)` entries joined by
/// `"; "`, preserving input order. The parenthetical is dropped when the
/// condition carries no reason.
pub fn format_conditions(conditions: Option<&[NodeCondition]>) -> String {
    match conditions {
        Some(conditions) => conditions
            .iter()
            .map(format_condition)
            .collect::<Vec<_>>()
            .join("; "),
        None => String::new(),
    }
}

fn format_condition(condition: &NodeCondition) -> String {
    let kind = condition.condition_type.as_deref().unwrap_or("");
    let status = condition.status.as_deref().unwrap_or("");
    match condition.reason.as_deref() {
        Some(reason) if !reason.is_empty() => format!("{}: {} ({})", kind, status, reason),
        _ => format!("{}: {}", kind, status),
    }
}
