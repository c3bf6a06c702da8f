use crate::config::AppConfig;
use crate::error::{CliError, Result};
use crate::utils::progress::CliProgressHandler;
use groan_rs::system::System;
use leafsort::{
    core::io::{ndx, structure},
    engine::{groups::LeafletGroups, progress::ProgressReporter},
    workflows,
};
use std::fs::OpenOptions;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use tracing::{info, warn};

pub fn run(config: &AppConfig, show_progress: bool) -> Result<()> {
    info!("Loading input structure from {:?}", &config.structure_path);
    let mut system =
        structure::read_structure(&config.structure_path).map_err(|e| CliError::FileParsing {
            path: config.structure_path.clone(),
            source: e.into(),
        })?;
    info!("Loaded {} atoms.", system.get_n_atoms());

    load_index(&mut system, &config.index_path);

    let progress_handler = CliProgressHandler::new(show_progress);
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    info!("Invoking the leaflet classification workflow...");
    let groups = workflows::classify::run(&mut system, &config.core_config, &reporter)?;

    let emit_empty = config.core_config.emit_empty;
    match &config.output_path {
        Some(path) => {
            info!("Writing groups to {:?}", path);
            // Existing files are extended, not replaced.
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            let mut writer = BufWriter::new(file);
            write_groups(&mut writer, &groups, emit_empty)?;
            writer.flush()?;
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            write_groups(&mut writer, &groups, emit_empty)?;
            writer.flush()?;
        }
    }

    Ok(())
}

/// Reads the index file into `system`, warning and continuing without it if it is unusable.
fn load_index(system: &mut System, path: &Path) -> bool {
    match ndx::read_index(system, path) {
        Ok(n_groups) => {
            info!("Read {} group(s) from {:?}.", n_groups, path);
            true
        }
        Err(e) => {
            warn!(
                "Could not read index file {:?} ({}). Continuing without named groups.",
                path, e
            );
            false
        }
    }
}

fn write_groups(writer: &mut impl Write, groups: &LeafletGroups, emit_empty: bool) -> Result<()> {
    for group in groups.emitted(emit_empty) {
        ndx::write_group(writer, &group.name, &group.atoms)?;
    }
    Ok(())
}
