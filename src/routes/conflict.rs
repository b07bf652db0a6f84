//! Output path conflict detection.

use rustc_hash::FxHashMap;

use super::RouteEntry;
use crate::log;
use crate::utils::plural_s;

/// An output path written by more than one input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputConflict {
    pub output_path: String,
    /// Inputs claiming this path, in entry order.
    pub sources: Vec<String>,
}

/// Find output paths claimed by several entries.
///
/// Output paths are compared without their leading `/`, the same way the
/// file writer joins them onto the output directory. Entries that are not
/// written to disk are ignored. Conflicts are sorted by output path.
pub fn detect_output_conflicts<'a>(
    entries: impl IntoIterator<Item = &'a RouteEntry>,
) -> Vec<OutputConflict> {
    let mut sources: FxHashMap<String, Vec<String>> = FxHashMap::default();

    for entry in entries {
        if !entry.permalink.write_to_file_system() {
            continue;
        }
        if let Some(output) = entry.permalink.to_path_from_root() {
            sources
                .entry(output.trim_start_matches('/').to_string())
                .or_default()
                .push(entry.input_path.clone());
        }
    }

    let mut conflicts: Vec<_> = sources
        .into_iter()
        .filter(|(_, sources)| sources.len() > 1)
        .map(|(output_path, sources)| OutputConflict {
            output_path,
            sources,
        })
        .collect();
    conflicts.sort_by(|a, b| a.output_path.cmp(&b.output_path));
    conflicts
}

/// Print conflicts using the standard log format.
///
/// Output format:
/// ```text
/// [error] output conflicts (1 path, 2 sources)
/// [path] post/index.html (2 sources)
///   - a.md
///   - b.md
/// ```
pub fn print_output_conflicts(conflicts: &[OutputConflict]) {
    if conflicts.is_empty() {
        return;
    }

    let total_sources: usize = conflicts.iter().map(|c| c.sources.len()).sum();
    log!("error"; "output conflicts ({} path{}, {} source{})",
        conflicts.len(), plural_s(conflicts.len()),
        total_sources, plural_s(total_sources));

    for conflict in conflicts {
        log!("path"; "{} ({} source{})", conflict.output_path, conflict.sources.len(), plural_s(conflict.sources.len()));
        for source in &conflict.sources {
            eprintln!("  - {}", source);
        }
    }
}
