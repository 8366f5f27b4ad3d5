//! Submissions: user contributions grouped by type under a place.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::display::{self, DisplayField, ReservedKeys};
use crate::id::SubmissionType;

/// A single submission resource as returned by the places API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Submission(Map<String, Value>);

impl Submission {
    #[must_use]
    pub fn new(attributes: Map<String, Value>) -> Self {
        Self(attributes)
    }

    /// Identifier rendered as text (empty when absent).
    #[must_use]
    pub fn id(&self) -> String {
        self.0
            .get("id")
            .map(display::display_value)
            .unwrap_or_default()
    }

    #[must_use]
    pub fn submitter_name(&self) -> Option<&str> {
        self.0.get("submitter_name").and_then(Value::as_str)
    }

    #[must_use]
    pub fn created_datetime(&self) -> Option<&str> {
        self.0.get("created_datetime").and_then(Value::as_str)
    }

    /// Extension attributes, sorted for rendering.
    #[must_use]
    pub fn display_fields(&self) -> Vec<DisplayField> {
        display::project(&self.0, ReservedKeys::SUBMISSION)
    }
}

/// All submissions of one type attached to a place.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionSet {
    pub kind: SubmissionType,
    /// Human-readable name derived from `kind`.
    pub label: String,
    pub submissions: Vec<Submission>,
}

impl SubmissionSet {
    #[must_use]
    pub fn new(kind: SubmissionType, submissions: Vec<Submission>) -> Self {
        let label = display::humanize(kind.as_str());
        Self {
            kind,
            label,
            submissions,
        }
    }
}
