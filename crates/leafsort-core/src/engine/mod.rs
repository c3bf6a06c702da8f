//! # Engine Module
//!
//! Stateful pieces of a leaflet classification pass.
//!
//! ## Overview
//!
//! A membrane selection is split into residues ([`segment`]), every residue is assigned to
//! a leaflet from the position of its head atom relative to the membrane center
//! ([`classifier`]) and its atoms are collected into one group per residue name and
//! leaflet ([`groups`]). The residue names own fixed group slots through a [`registry`].
//!
//! - **Configuration** ([`config`]) - Queries, membrane normal and output options
//! - **Progress Monitoring** ([`progress`]) - Callback based progress events
//! - **Error Handling** ([`error`]) - Fatal classification errors

pub mod classifier;
pub mod config;
pub mod error;
pub mod groups;
pub mod progress;
pub mod registry;
pub mod segment;
