//! Validated identifier newtypes.
//!
//! Identifiers are interpolated into API paths, so they are restricted to
//! ASCII alphanumerics, `-` and `_`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ValidationError;

fn validate_slug(s: &str) -> Result<(), ValidationError> {
    if s.is_empty() {
        return Err(ValidationError::EmptyIdentifier);
    }
    if !s
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(ValidationError::InvalidIdentifier(s.to_string()));
    }
    Ok(())
}

macro_rules! define_id {
    ($(#[doc = $doc:expr])* $name:ident) => {
        $(#[doc = $doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Borrow the identifier as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }

        impl FromStr for $name {
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                validate_slug(s)?;
                Ok(Self(s.to_string()))
            }
        }

        impl TryFrom<&serde_json::Value> for $name {
            type Error = ValidationError;

            /// Accept both JSON strings and integers, since APIs differ in
            /// how they serialize keys.
            fn try_from(value: &serde_json::Value) -> Result<Self, Self::Error> {
                match value {
                    serde_json::Value::String(s) => s.parse(),
                    serde_json::Value::Number(n) => n.to_string().parse(),
                    other => Err(ValidationError::InvalidIdentifier(other.to_string())),
                }
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let value = serde_json::Value::deserialize(deserializer)?;
                Self::try_from(&value).map_err(serde::de::Error::custom)
            }
        }
    };
}

define_id!(
    /// Identifier of a [`Place`](crate::place::Place) as assigned by the API.
    PlaceId
);

define_id!(
    /// Name of a submission set under a place (e.g. `comments`, `support`).
    SubmissionType
);

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn should_parse_numeric_place_id() {
        let id: PlaceId = "42".parse().unwrap();
        assert_eq!(id.as_str(), "42");
        assert_eq!(id.to_string(), "42");
    }

    #[test]
    fn should_reject_empty_identifier() {
        let result = PlaceId::from_str("");
        assert_eq!(result, Err(ValidationError::EmptyIdentifier));
    }

    #[test]
    fn should_reject_identifier_with_path_separator() {
        let result = SubmissionType::from_str("comments/../secret");
        assert!(matches!(result, Err(ValidationError::InvalidIdentifier(_))));
    }

    #[test]
    fn should_accept_integer_json_value() {
        let id = PlaceId::try_from(&json!(17)).unwrap();
        assert_eq!(id.as_str(), "17");
    }

    #[test]
    fn should_reject_boolean_json_value() {
        assert!(PlaceId::try_from(&json!(true)).is_err());
    }

    #[test]
    fn should_deserialize_from_json_number_and_serialize_as_string() {
        let id: PlaceId = serde_json::from_str("7").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"7\"");
    }

    #[test]
    fn should_accept_snake_case_submission_type() {
        let kind: SubmissionType = "support_votes".parse().unwrap();
        assert_eq!(kind.as_str(), "support_votes");
    }
}
