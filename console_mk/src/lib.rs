//! Run driver of the `console-mk` preprocessor.
//!
//! One run processes the expanded input files strictly in order, one at a
//! time: read, rewrite marker literals, write back only when the content
//! actually changed, then generate the help/hash tables next to the first
//! input file. A duplicate command anywhere in the run aborts it before
//! the tables are written; files rewritten earlier in the run are not
//! rolled back (known limitation, the invoking build system owns
//! retry/cleanup policy).

pub mod inputs;

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use console_core::emitter;
use console_core::registry::Registry;
use console_core::rewriter::rewrite;

/// Counters and paths reported by one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Files whose content changed and were written back.
    pub updated: usize,
    /// Files left untouched.
    pub skipped: usize,
    /// Distinct commands registered across the whole run.
    pub commands: usize,
    /// Where the generated tables were written.
    pub table_path: PathBuf,
}

/// Processes all files matching `patterns` and writes the generated
/// table include.
///
/// Prints the per-file updated/skipped diagnostic to stderr; everything
/// else is reported through the returned [`RunSummary`].
pub fn run(patterns: &[String]) -> Result<RunSummary> {
    let files = inputs::expand_patterns(patterns)?;
    if files.is_empty() {
        bail!("no input files matched the given patterns");
    }

    let mut registry = Registry::new();
    let mut updated = 0usize;
    let mut skipped = 0usize;

    for path in &files {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let rw = rewrite(&text, &mut registry)
            .with_context(|| format!("while processing {}", path.display()))?;
        log::debug!("{}: {} marker(s)", path.display(), rw.markers);
        if rw.changed {
            fs::write(path, &rw.text)
                .with_context(|| format!("failed to write {}", path.display()))?;
            eprintln!("Updated file {}.", path.display());
            updated += 1;
        } else {
            eprintln!("Skipped file {} as unchanged.", path.display());
            skipped += 1;
        }
    }

    // The tables land next to the first input file, fully regenerated.
    let table_dir = match files[0].parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
        _ => PathBuf::from("."),
    };
    let table_path = table_dir.join(emitter::TABLE_FILENAME);
    fs::write(&table_path, emitter::emit(&registry))
        .with_context(|| format!("failed to write {}", table_path.display()))?;
    log::info!(
        "wrote {} with {} command(s)",
        table_path.display(),
        registry.len()
    );

    Ok(RunSummary {
        updated,
        skipped,
        commands: registry.len(),
        table_path,
    })
}
