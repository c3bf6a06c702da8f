//! # Core Module
//!
//! This module provides the stateless building blocks of `leafsort`: the representation
//! of a simulation snapshot, periodic geometry, file formats and the atom selection language.
//!
//! ## Architecture
//!
//! - **Molecular Representation** ([`models`]) - Atoms, the simulation box, systems and selections
//! - **Geometry** ([`utils::geometry`]) - Minimum-image distances and periodic centers of geometry
//! - **File I/O** ([`io`]) - Reading structures and index groups through `groan_rs`, writing NDX groups
//! - **Atom Selection** ([`select`]) - Evaluating `groan_rs` selection queries into selections
//!
//! Nothing in this module knows about leaflets; the classification itself lives in
//! [`crate::engine`] and is driven by [`crate::workflows`].

pub mod io;
pub mod models;
pub mod select;
pub mod utils;
