use crate::core::models::selection::Selection;
use crate::core::models::simbox::SimBox;
use crate::core::models::system::MolecularSystem;
use crate::core::select::{GroupError, select};
use crate::core::utils::geometry::{Axis, center_of_geometry};
use crate::engine::classifier::{HeadSet, classify_residue};
use crate::engine::config::ClassificationConfig;
use crate::engine::error::EngineError;
use crate::engine::groups::{GroupAccumulator, LeafletGroups};
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::registry::NameRegistry;
use crate::engine::segment::split_by_residue;
use groan_rs::system::System;
use nalgebra::Point3;
use tracing::{debug, info, instrument};

/// Classifies every residue of `membrane` into a leaflet and groups the residues
/// by residue name and leaflet.
///
/// The membrane center is the periodic center of geometry of all membrane atoms.
/// Residues are processed in the order in which they first appear in `membrane`.
/// The first fatal error aborts the pass and no groups are returned.
///
/// # Errors
///
/// Returns [`EngineError::EmptySelection`] for an empty membrane, [`EngineError::MissingHead`]
/// or [`EngineError::AmbiguousHead`] for a residue without exactly one atom in `heads`, and
/// [`EngineError::InternalInconsistency`] if `registry` does not know a membrane residue name.
#[instrument(skip_all, name = "classification")]
pub fn classify(
    system: &MolecularSystem,
    membrane: &Selection,
    heads: &Selection,
    registry: &NameRegistry,
    simbox: &SimBox,
    axis: Axis,
    reporter: &ProgressReporter,
) -> Result<LeafletGroups, EngineError> {
    let residues = split_by_residue(system, membrane)?;
    info!(
        "Membrane consists of {} atoms in {} residues.",
        membrane.len(),
        residues.len()
    );

    let positions: Vec<Point3<f64>> = system.atoms_of(membrane).map(|a| a.position).collect();
    let center = center_of_geometry(&positions, simbox)
        .ok_or_else(|| EngineError::EmptySelection("membrane".to_string()))?;
    debug!(
        "Membrane center: ({:.3}, {:.3}, {:.3}), normal along {}.",
        center.x, center.y, center.z, axis
    );

    let head_set = HeadSet::new(heads);
    let mut accumulator = GroupAccumulator::new(registry.len());

    reporter.report(Progress::PhaseStart {
        name: "Classifying lipids",
    });
    reporter.report(Progress::TaskStart {
        total_steps: residues.len() as u64,
    });

    for residue in &residues {
        let leaflet = classify_residue(system, residue, &head_set, &center, simbox, axis)?;

        let residue_name = residue
            .first()
            .and_then(|id| system.atom(id))
            .map(|atom| atom.res_name.as_str())
            .unwrap_or_default();
        let slot = registry.index_of(residue_name).ok_or_else(|| {
            EngineError::InternalInconsistency {
                residue_name: residue_name.to_string(),
            }
        })?;

        accumulator.append(slot, leaflet, residue);
        reporter.report(Progress::TaskIncrement);
    }

    reporter.report(Progress::TaskFinish);
    reporter.report(Progress::PhaseFinish);

    let groups = accumulator.finish(system, registry);
    for group in groups.iter() {
        debug!(
            "Group '{}': {} residues, {} atoms.",
            group.name,
            group.residue_count,
            group.atoms.len()
        );
    }
    reporter.message(|| format!("Classified {} lipids.", residues.len()));
    Ok(groups)
}

fn resolve(
    source: &mut System,
    system: &MolecularSystem,
    query: &str,
) -> Result<Selection, EngineError> {
    let selection = select(source, system, query).map_err(|e| match e {
        GroupError::InvalidQuery(source) => EngineError::InvalidQuery {
            query: query.to_string(),
            source,
        },
        other => EngineError::Group {
            query: query.to_string(),
            source: other,
        },
    })?;

    if selection.is_empty() {
        return Err(EngineError::EmptySelection(query.to_string()));
    }
    debug!("Query '{}' selected {} atoms.", query, selection.len());
    Ok(selection)
}

/// Resolves the membrane and head queries of `config` and classifies the membrane.
///
/// Named groups in the queries are looked up among the groups of `source`, so index
/// files should be read into it beforehand.
#[instrument(skip_all, name = "classification_workflow")]
pub fn run(
    source: &mut System,
    config: &ClassificationConfig,
    reporter: &ProgressReporter,
) -> Result<LeafletGroups, EngineError> {
    let system = MolecularSystem::try_from(&*source)?;

    reporter.report(Progress::PhaseStart {
        name: "Resolving selections",
    });
    let membrane = resolve(source, &system, &config.membrane_query)?;
    let heads = resolve(source, &system, &config.heads_query)?;
    reporter.report(Progress::PhaseFinish);

    let simbox = system.simbox().ok_or(EngineError::UndefinedBox)?;
    let registry = NameRegistry::build(&system, &membrane);
    info!(
        "Found {} lipid type(s): {}.",
        registry.len(),
        registry.names().collect::<Vec<_>>().join(", ")
    );

    let groups = classify(
        &system,
        &membrane,
        &heads,
        &registry,
        simbox,
        config.normal,
        reporter,
    )?;

    info!(
        "Classification complete. {} of {} groups contain atoms.",
        groups.emitted(false).count(),
        groups.len()
    );
    Ok(groups)
}
