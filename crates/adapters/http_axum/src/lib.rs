//! # placeadmin-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve a **server-side-rendered HTML manager** for places and their
//!   submissions that works with **zero JavaScript**, pure HTML forms
//! - Map form submissions into application service calls (driving adapter)
//! - Map application results into HTML pages or redirects
//!
//! ## No-JS approach
//! - Every page is rendered server-side as complete HTML.
//! - Forms POST back to the server and redirect (PRG pattern).
//! - The outcome of a POST travels to the next page as a one-shot flash
//!   cookie, cleared once shown.
//!
//! ## Dependency rule
//! Depends on `placeadmin-app` (for the port trait and services) and
//! `placeadmin-domain` (for domain types used in request/response mapping).
//! Never leaks axum types into the domain.

pub mod dashboard;
pub mod error;
pub mod flash;
pub mod router;
pub mod state;
