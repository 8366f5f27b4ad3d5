//! Flat view models handed to the templates.

use placeadmin_domain::display::DisplayField;
use placeadmin_domain::place::Place;
use placeadmin_domain::submission::{Submission, SubmissionSet};
use placeadmin_domain::time;

/// Number of empty key/value input pairs offered for new attributes.
pub const NEW_ATTRIBUTE_SLOTS: u32 = 3;

/// One row of the place list.
#[derive(Debug, Clone)]
pub struct PlaceRow {
    pub id: String,
    pub name: String,
    pub submitter_name: String,
    pub visible: bool,
}

impl From<&Place> for PlaceRow {
    fn from(place: &Place) -> Self {
        Self {
            id: place.id().map(|id| id.to_string()).unwrap_or_default(),
            name: place.name().unwrap_or_default().to_string(),
            submitter_name: place.submitter_name().unwrap_or_default().to_string(),
            visible: place.visible(),
        }
    }
}

/// Everything the place form shows about a place.
#[derive(Debug, Clone, Default)]
pub struct PlaceView {
    pub id: String,
    pub name: String,
    pub submitter_name: String,
    pub lat: String,
    pub lng: String,
    pub visible: bool,
    pub created: String,
    pub updated: String,
    pub url: String,
    pub fields: Vec<DisplayField>,
}

impl From<&Place> for PlaceView {
    fn from(place: &Place) -> Self {
        let (lat, lng) = place.coordinates().unwrap_or_default();
        Self {
            id: place.id().map(|id| id.to_string()).unwrap_or_default(),
            name: place.name().unwrap_or_default().to_string(),
            submitter_name: place.submitter_name().unwrap_or_default().to_string(),
            lat,
            lng,
            visible: place.visible(),
            created: place.created_datetime().map(time::display).unwrap_or_default(),
            updated: place.updated_datetime().map(time::display).unwrap_or_default(),
            url: place.url().unwrap_or_default().to_string(),
            fields: place.display_fields(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SubmissionView {
    pub id: String,
    pub submitter_name: String,
    pub created: String,
    pub fields: Vec<DisplayField>,
}

impl From<&Submission> for SubmissionView {
    fn from(submission: &Submission) -> Self {
        Self {
            id: submission.id(),
            submitter_name: submission.submitter_name().unwrap_or_default().to_string(),
            created: submission
                .created_datetime()
                .map(time::display)
                .unwrap_or_default(),
            fields: submission.display_fields(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SubmissionSetView {
    pub kind: String,
    pub label: String,
    pub submissions: Vec<SubmissionView>,
}

impl From<&SubmissionSet> for SubmissionSetView {
    fn from(set: &SubmissionSet) -> Self {
        Self {
            kind: set.kind.to_string(),
            label: set.label.clone(),
            submissions: set.submissions.iter().map(SubmissionView::from).collect(),
        }
    }
}
