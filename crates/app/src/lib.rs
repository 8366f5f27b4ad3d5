//! # placeadmin-app
//!
//! Application layer: use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the **port trait** the outbound adapter must implement:
//!   - `PlacesApi`: CRUD for places, listing of submissions per type
//! - Define **driving/inbound ports** as use-case structs:
//!   - `PlaceService`: normalize form data, call the API, assemble
//!     submission sets
//! - Orchestrate domain objects without knowing *how* the API is reached
//!
//! ## Dependency rule
//! Depends on `placeadmin-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
