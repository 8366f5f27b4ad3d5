//! Place: the top-level resource managed through the places API.
//!
//! A place is kept as the raw JSON object the API returned. Reserved keys are
//! exposed through typed accessors; everything else is an extension
//! attribute surfaced through [`Place::display_fields`].

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::display::{self, DisplayField, ReservedKeys};
use crate::id::{PlaceId, SubmissionType};

/// A place resource as returned by the places API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Place(Map<String, Value>);

impl Place {
    /// Wrap a JSON object.
    #[must_use]
    pub fn new(attributes: Map<String, Value>) -> Self {
        Self(attributes)
    }

    /// Identifier assigned by the API, if present and well-formed.
    #[must_use]
    pub fn id(&self) -> Option<PlaceId> {
        self.0.get("id").and_then(|v| PlaceId::try_from(v).ok())
    }

    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.str_field("name")
    }

    #[must_use]
    pub fn submitter_name(&self) -> Option<&str> {
        self.str_field("submitter_name")
    }

    #[must_use]
    pub fn url(&self) -> Option<&str> {
        self.str_field("url")
    }

    #[must_use]
    pub fn created_datetime(&self) -> Option<&str> {
        self.str_field("created_datetime")
    }

    #[must_use]
    pub fn updated_datetime(&self) -> Option<&str> {
        self.str_field("updated_datetime")
    }

    /// Whether the place is shown publicly. Missing means hidden.
    #[must_use]
    pub fn visible(&self) -> bool {
        self.0
            .get("visible")
            .and_then(Value::as_bool)
            .unwrap_or(false)
    }

    /// Latitude and longitude rendered as text, whether the API sent
    /// numbers or strings.
    #[must_use]
    pub fn coordinates(&self) -> Option<(String, String)> {
        let location = self.0.get("location")?.as_object()?;
        let lat = location.get("lat")?;
        let lng = location.get("lng")?;
        Some((display::display_value(lat), display::display_value(lng)))
    }

    /// Summaries of the submission sets attached to this place.
    ///
    /// # Errors
    ///
    /// Returns a [`serde_json::Error`] when the `submissions` key does not
    /// hold a list of `{"type": ...}` objects.
    pub fn submission_sets(&self) -> Result<Vec<SubmissionSetSummary>, serde_json::Error> {
        match self.0.get("submissions") {
            None | Some(Value::Null) => Ok(Vec::new()),
            Some(value) => Vec::<SubmissionSetSummary>::deserialize(value),
        }
    }

    /// Extension attributes, sorted for rendering.
    #[must_use]
    pub fn display_fields(&self) -> Vec<DisplayField> {
        display::project(&self.0, ReservedKeys::PLACE)
    }

    /// The full JSON object.
    #[must_use]
    pub fn attributes(&self) -> &Map<String, Value> {
        &self.0
    }

    fn str_field(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }
}

/// Entry of a place's `submissions` list.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SubmissionSetSummary {
    #[serde(rename = "type")]
    pub kind: SubmissionType,
    #[serde(default)]
    pub length: Option<u64>,
    #[serde(default)]
    pub url: Option<String>,
}
