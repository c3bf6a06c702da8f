//! # Core Models Module
//!
//! This module contains the data structures used to represent a single simulation
//! snapshot of a membrane system.
//!
//! ## Key Components
//!
//! - [`atom`] - Individual atom with its identifier, residue membership and position
//! - [`simbox`] - Rectangular periodic simulation box
//! - [`system`] - Complete molecular system owning all atoms and the box
//! - [`builder`] - Incremental construction of a [`system::MolecularSystem`]
//! - [`selection`] - Ordered references to atoms of a system
//! - [`ids`] - Stable identifier type for atoms
//!
//! ## Usage
//!
//! ```ignore
//! use leafsort::core::models::builder::MolecularSystemBuilder;
//! use leafsort::core::models::simbox::SimBox;
//! use nalgebra::Point3;
//!
//! let mut builder = MolecularSystemBuilder::new();
//! builder
//!     .simbox(SimBox::new(10.0, 10.0, 10.0)?)
//!     .add_atom("PO4", "POPC", 1, Point3::new(1.0, 1.0, 7.0));
//! let system = builder.build();
//! assert_eq!(system.atom_count(), 1);
//! ```
//!
//! Systems read from files are converted from `groan_rs` through
//! [`crate::core::io::structure`].

pub mod atom;
pub mod builder;
pub mod ids;
pub mod selection;
pub mod simbox;
pub mod system;
