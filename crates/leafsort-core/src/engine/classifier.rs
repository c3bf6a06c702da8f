use super::error::EngineError;
use crate::core::models::ids::AtomId;
use crate::core::models::selection::Selection;
use crate::core::models::simbox::SimBox;
use crate::core::models::system::MolecularSystem;
use crate::core::utils::geometry::{Axis, signed_axis_distance};
use nalgebra::Point3;
use std::collections::HashSet;
use std::fmt;

/// One of the two monolayers of a bilayer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Leaflet {
    Lower = 0,
    Upper = 1,
}

impl Leaflet {
    /// Position of the leaflet within the pair of groups of a residue name.
    #[inline]
    pub fn offset(self) -> usize {
        self as usize
    }

    pub fn suffix(self) -> &'static str {
        match self {
            Leaflet::Lower => "lower",
            Leaflet::Upper => "upper",
        }
    }
}

impl fmt::Display for Leaflet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}

/// Head atoms indexed for membership queries by atom identity.
pub struct HeadSet {
    ids: HashSet<AtomId>,
}

impl HeadSet {
    pub fn new(heads: &Selection) -> Self {
        Self {
            ids: heads.iter().copied().collect(),
        }
    }

    #[inline]
    pub fn contains(&self, id: AtomId) -> bool {
        self.ids.contains(&id)
    }
}

/// Assigns a residue to a leaflet using the position of its single head atom.
///
/// The residue is in the upper leaflet if its head lies strictly above `center` along
/// `axis` (minimum image); a head exactly at the center belongs to the lower leaflet.
///
/// # Errors
///
/// Returns [`EngineError::MissingHead`] if the residue has no atom in `heads` and
/// [`EngineError::AmbiguousHead`] if it has more than one.
pub fn classify_residue(
    system: &MolecularSystem,
    residue: &Selection,
    heads: &HeadSet,
    center: &Point3<f64>,
    simbox: &SimBox,
    axis: Axis,
) -> Result<Leaflet, EngineError> {
    let mut matched = residue.iter().filter(|&&id| heads.contains(id));
    let first = matched.next();
    let extra = matched.count();

    let (residue_name, residue_number) = residue
        .first()
        .and_then(|id| system.atom(id))
        .map(|atom| (atom.res_name.clone(), atom.res_number))
        .unwrap_or_default();

    let head = match (first, extra) {
        (None, _) => {
            return Err(EngineError::MissingHead {
                residue_name,
                residue_number,
            });
        }
        (Some(_), n) if n > 0 => {
            return Err(EngineError::AmbiguousHead {
                residue_name,
                residue_number,
                count: n + 1,
            });
        }
        (Some(&id), _) => system.atom(id).ok_or_else(|| EngineError::MissingHead {
            residue_name: residue_name.clone(),
            residue_number,
        })?,
    };

    let distance = signed_axis_distance(&head.position, center, axis, simbox);
    Ok(if distance > 0.0 {
        Leaflet::Upper
    } else {
        Leaflet::Lower
    })
}
