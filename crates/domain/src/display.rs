//! API → display projection.
//!
//! Resources returned by the places API carry a fixed set of reserved keys
//! plus arbitrary extension attributes. Only the extension attributes are
//! listed as generic display fields; reserved keys get dedicated inputs.

use serde::Serialize;
use serde_json::{Map, Value};

/// Set of keys a resource type handles explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReservedKeys(&'static [&'static str]);

impl ReservedKeys {
    /// Reserved keys of a place resource.
    pub const PLACE: Self = Self(&[
        "id",
        "location",
        "submitter_name",
        "name",
        "visible",
        "created_datetime",
        "updated_datetime",
        "url",
        "submissions",
    ]);

    /// Reserved keys of a submission resource.
    pub const SUBMISSION: Self = Self(&[
        "id",
        "submitter_name",
        "url",
        "created_datetime",
        "updated_datetime",
    ]);

    #[must_use]
    pub fn contains(self, key: &str) -> bool {
        self.0.contains(&key)
    }
}

/// One extension attribute prepared for rendering.
///
/// Ordering is by label, then key, then value.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct DisplayField {
    pub label: String,
    pub key: String,
    pub value: String,
}

/// Project every non-reserved key of `resource` into a sorted list of
/// display fields.
#[must_use]
pub fn project(resource: &Map<String, Value>, reserved: ReservedKeys) -> Vec<DisplayField> {
    let mut fields: Vec<DisplayField> = resource
        .iter()
        .filter(|(key, _)| !reserved.contains(key))
        .map(|(key, value)| DisplayField {
            label: humanize(key),
            key: key.clone(),
            value: display_value(value),
        })
        .collect();
    fields.sort();
    fields
}

/// `phone_number` → `Phone Number`.
///
/// Underscores become spaces, then every letter that follows a non-letter is
/// upper-cased and every other letter lower-cased (`drive-thru` → `Drive-Thru`,
/// `phase2b` → `Phase2B`).
#[must_use]
pub fn humanize(key: &str) -> String {
    let mut label = String::with_capacity(key.len());
    let mut after_letter = false;
    for c in key.chars() {
        if c == '_' {
            label.push(' ');
            after_letter = false;
        } else if c.is_alphabetic() {
            if after_letter {
                label.extend(c.to_lowercase());
            } else {
                label.extend(c.to_uppercase());
            }
            after_letter = true;
        } else {
            label.push(c);
            after_letter = false;
        }
    }
    label
}

/// Strings render unquoted, everything else as JSON text.
#[must_use]
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
