//! Provides input/output functionality for the file formats `leafsort` works with.
//!
//! Reading is delegated to `groan_rs`; this module adapts its results to the
//! models of `leafsort` and writes the output groups.
//!
//! - [`structure`] - Reading structure files and converting them into a [`MolecularSystem`](crate::core::models::system::MolecularSystem)
//! - [`ndx`] - Loading NDX index groups and writing output groups

pub mod ndx;
pub mod structure;
