use groan_rs::errors::ParseNdxError;
use groan_rs::system::System;
use std::collections::HashSet;
use std::io::{self, Write};
use std::path::Path;
use tracing::warn;

/// Number of atom serials written per line of an NDX group.
const SERIALS_PER_LINE: usize = 15;

/// Number of groups every `groan_rs` system defines on its own (`all` and `All`).
const DEFAULT_GROUPS: usize = 2;

fn join_names(names: &HashSet<String>) -> String {
    let mut names: Vec<&str> = names.iter().map(String::as_str).collect();
    names.sort_unstable();
    names.join(", ")
}

/// Reads the groups of an NDX file into `system`.
///
/// Duplicate groups and groups with names unusable in selection queries are
/// reported as warnings; the remaining groups are still loaded.
///
/// # Return
///
/// The number of groups the system holds in addition to its default ones.
pub fn read_index(system: &mut System, path: impl AsRef<Path>) -> Result<usize, ParseNdxError> {
    let path = path.as_ref();
    match system.read_ndx(path) {
        Ok(_) => (),
        Err(ParseNdxError::DuplicateGroupsWarning(names)) => warn!(
            "Duplicate group(s) detected in the index file {:?}: {}",
            path,
            join_names(&names)
        ),
        Err(ParseNdxError::InvalidNamesWarning(names)) => warn!(
            "Group(s) with invalid name(s) detected in the index file {:?}: {}",
            path,
            join_names(&names)
        ),
        Err(e) => return Err(e),
    }

    Ok(system.get_n_groups().saturating_sub(DEFAULT_GROUPS))
}

/// Writes a single group: the `[ name ]` header followed by the serials, 15 per line.
///
/// An empty group is written as a bare header.
pub fn write_group(writer: &mut impl Write, name: &str, serials: &[usize]) -> io::Result<()> {
    writeln!(writer, "[ {} ]", name)?;
    for chunk in serials.chunks(SERIALS_PER_LINE) {
        for serial in chunk {
            write!(writer, "{:4} ", serial)?;
        }
        writeln!(writer)?;
    }
    Ok(())
}
