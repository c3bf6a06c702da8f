//! # leafsort Core Library
//!
//! Assigns the lipids of a planar membrane to its upper and lower leaflet and groups them
//! by lipid type into index groups named `<RESNAME>_lower` and `<RESNAME>_upper`.
//!
//! ## Architecture
//!
//! - **[`core`]: The Foundation.** Stateless data models (`MolecularSystem`, `Selection`,
//!   `SimBox`), periodic geometry, and adapters over `groan_rs` for reading structures,
//!   index files and evaluating selection queries.
//!
//! - **[`engine`]: The Logic Core.** Residue segmentation, per-residue leaflet classification,
//!   the residue name registry and the accumulation of output groups.
//!
//! - **[`workflows`]: The Public API.** Runs a complete classification pass from a loaded
//!   system and a configuration.
//!
//! ```no_run
//! use leafsort::core::io::{ndx, structure};
//! use leafsort::engine::config::ClassificationConfigBuilder;
//! use leafsort::engine::progress::ProgressReporter;
//! use leafsort::workflows::classify;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut system = structure::read_structure("membrane.gro")?;
//! ndx::read_index(&mut system, "index.ndx")?;
//! let config = ClassificationConfigBuilder::new()
//!     .membrane_query("Membrane")
//!     .heads_query("name PO4")
//!     .build()?;
//! let groups = classify::run(&mut system, &config, &ProgressReporter::new())?;
//! for group in groups.emitted(false) {
//!     println!("{}: {} atoms", group.name, group.atoms.len());
//! }
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod engine;
pub mod workflows;
