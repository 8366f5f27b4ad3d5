//! Form → API normalization.
//!
//! HTML forms submit a flat mapping of strings. The places API expects a JSON
//! object with a nested `location`, a boolean `visible`, no empty fields, and
//! any extra attributes the operator typed into the dynamic key/value inputs.

use indexmap::IndexMap;
use serde_json::{Map, Value};

use crate::error::ValidationError;

/// Flat form submission, in the order the browser sent it.
pub type FormSubmission = IndexMap<String, String>;

/// JSON object sent to the places API on create and update.
pub type PlacePayload = Map<String, Value>;

/// Keys that only drive the form round-trip and never reach the API.
const CONTROL_KEYS: [&str; 2] = ["csrfmiddlewaretoken", "action"];

/// Prefix of a dynamic attribute's name placeholder (`_new_key{N}`).
pub const NEW_KEY_PREFIX: &str = "_new_key";
/// Prefix of a dynamic attribute's value placeholder (`_new_val{N}`).
pub const NEW_VAL_PREFIX: &str = "_new_val";

/// Build a form submission from decoded `(name, value)` pairs.
///
/// A repeated name keeps its first position and its last value.
pub fn collect<I>(pairs: I) -> FormSubmission
where
    I: IntoIterator<Item = (String, String)>,
{
    pairs.into_iter().collect()
}

/// Turn a place form submission into the payload the places API accepts.
///
/// Dynamic attributes are applied last so they overwrite any colliding key.
///
/// # Errors
///
/// Returns [`ValidationError::MissingCoordinate`] when `lat` or `lng` is
/// absent or blank.
pub fn normalize_place_form(mut form: FormSubmission) -> Result<PlacePayload, ValidationError> {
    for key in CONTROL_KEYS {
        form.shift_remove(key);
    }

    let lat = take_coordinate(&mut form, "lat")?;
    let lng = take_coordinate(&mut form, "lng")?;
    let visible = form.shift_remove("visible").is_some();

    let mut payload = PlacePayload::new();
    let mut location = Map::new();
    location.insert("lat".to_string(), Value::String(lat));
    location.insert("lng".to_string(), Value::String(lng));
    payload.insert("location".to_string(), Value::Object(location));
    payload.insert("visible".to_string(), Value::Bool(visible));

    let mut dynamic = Vec::new();
    for (key, value) in &form {
        if let Some(suffix) = key.strip_prefix(NEW_KEY_PREFIX) {
            let name = value.trim();
            let new_value = form
                .get(&format!("{NEW_VAL_PREFIX}{suffix}"))
                .map_or("", String::as_str);
            if !name.is_empty() && !new_value.is_empty() {
                dynamic.push((name.to_string(), new_value.to_string()));
            }
            continue;
        }
        if key.starts_with(NEW_VAL_PREFIX) || value.is_empty() {
            continue;
        }
        payload.insert(key.clone(), Value::String(value.clone()));
    }

    for (key, value) in dynamic {
        payload.insert(key, Value::String(value));
    }

    Ok(payload)
}

fn take_coordinate(
    form: &mut FormSubmission,
    key: &'static str,
) -> Result<String, ValidationError> {
    match form.shift_remove(key) {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ValidationError::MissingCoordinate(key)),
    }
}
