//! # placeadmin-domain
//!
//! Pure domain model for the placeadmin manager front-end.
//!
//! ## Responsibilities
//! - Foundational types: validated identifiers, error conventions, timestamps
//! - Define **Places** (API resources with reserved keys plus open-ended
//!   extension attributes)
//! - Define **Submissions** and **Submission sets** nested under a place
//! - Normalize flat HTML form submissions into the JSON payload the places
//!   API expects
//! - Project API resources into sorted display fields for rendering
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! The API boundary is expressed as a trait in the `app` crate (port).

pub mod error;
pub mod id;
pub mod time;

pub mod display;
pub mod form;
pub mod place;
pub mod submission;
