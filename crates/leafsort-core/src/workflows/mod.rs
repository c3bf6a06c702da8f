//! # Workflows Module
//!
//! High-level entry points of `leafsort`.
//!
//! ## Overview
//!
//! A workflow ties the [`crate::core`] models and the [`crate::engine`] components together
//! into a complete procedure. Callers supply a `groan_rs` system with any index groups
//! read into it and a configuration; the workflow resolves the selections, runs the
//! classification and returns the resulting groups or the first fatal error.
//!
//! - **Leaflet Classification** ([`classify`]) - Assigns membrane lipids to the upper or lower
//!   leaflet and groups them by residue name.

pub mod classify;
