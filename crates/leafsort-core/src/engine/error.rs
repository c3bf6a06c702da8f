use thiserror::Error;

use crate::core::io::structure::StructureError;
use crate::core::select::{GroupError, SelectError};

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Selection '{0}' contains no atoms")]
    EmptySelection(String),

    #[error("No head atom detected for lipid {residue_name} (resid {residue_number})")]
    MissingHead {
        residue_name: String,
        residue_number: isize,
    },

    #[error(
        "Multiple head atoms ({count}) detected for lipid {residue_name} (resid {residue_number})"
    )]
    AmbiguousHead {
        residue_name: String,
        residue_number: isize,
        count: usize,
    },

    #[error(
        "Internal error: residue name '{residue_name}' is not registered. This should never happen."
    )]
    InternalInconsistency { residue_name: String },

    #[error("Invalid selection query '{query}': {source}")]
    InvalidQuery {
        query: String,
        #[source]
        source: SelectError,
    },

    #[error("Could not evaluate selection query '{query}': {source}")]
    Group {
        query: String,
        #[source]
        source: GroupError,
    },

    #[error(transparent)]
    Structure(#[from] StructureError),

    #[error("System has no simulation box; periodic boundary conditions cannot be applied")]
    UndefinedBox,
}
