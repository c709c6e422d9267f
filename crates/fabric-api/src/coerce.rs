// ── Field coercion helpers ──
//
// Normalize optional request fields into the concrete defaults the domain
// model stores. None of these can fail.

use crate::rest_model::Tags;

/// Absent string -> `""`.
pub fn string_or_empty(value: Option<String>) -> String {
    value.unwrap_or_default()
}

/// Absent bool -> `false`.
pub fn bool_or_default(value: Option<bool>) -> bool {
    value.unwrap_or_default()
}

/// Absent integer -> `0`.
pub fn int64_or_default(value: Option<i64>) -> i64 {
    value.unwrap_or_default()
}

/// Absent tags -> empty tag map.
pub fn tags_or_default(value: Option<Tags>) -> Tags {
    value.unwrap_or_default()
}
