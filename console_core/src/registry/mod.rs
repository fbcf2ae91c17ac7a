//! Per-run collection of discovered commands, keyed by hash.
//!
//! The runtime dispatches on the 16-bit hash alone, so the hash is the
//! command's sole identity. Any repeated hash key within one run, whether
//! from the same command text appearing twice or from two different
//! commands colliding, would make commands indistinguishable at runtime
//! and is therefore a fatal input error.
//!
//! A `Registry` is created empty at the start of a run, threaded through
//! scanning and rewriting of every file, consumed once by the table
//! emitter, then discarded. Nothing persists between runs; idempotence of
//! re-runs rests entirely on the hash being a pure function of the
//! command text.

use indexmap::IndexMap;
use thiserror::Error;

use crate::hash::hash;

/// One registered command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandEntry {
    /// 16-bit table key.
    pub hash: u16,
    /// Canonical (upper-cased) command name.
    pub command: String,
    /// Help text, possibly empty.
    pub help: String,
}

/// Registration failures.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// Two commands mapped to the same hash key. The texts are equal for a
    /// genuine duplicate and differ for a true hash collision; both are
    /// fatal for the same reason.
    #[error(
        "duplicate command: '{incoming}' hashes to 0X{hash:04X}, already taken by '{existing}'"
    )]
    DuplicateCommand {
        /// Command that owned the hash first.
        existing: String,
        /// Command whose registration failed.
        incoming: String,
        /// The contested hash value.
        hash: u16,
    },
}

/// Insertion-ordered mapping of hash to command entry.
///
/// Iteration order is the order of first registration across all files of
/// a run, which in turn fixes the emitted table order. That order is part
/// of the tool's observable contract.
#[derive(Debug, Default)]
pub struct Registry {
    entries: IndexMap<u16, CommandEntry>,
}

impl Registry {
    /// Creates an empty registry for one run.
    pub fn new() -> Self {
        Self::default()
    }

    /// Hashes `command`, upper-cases it for storage and records the entry.
    ///
    /// Returns the computed hash, or [`RegistryError::DuplicateCommand`]
    /// if the hash key is already taken.
    pub fn register(&mut self, command: &str, help: &str) -> Result<u16, RegistryError> {
        let canonical = command.to_ascii_uppercase();
        let h = hash(&canonical);
        if let Some(existing) = self.entries.get(&h) {
            return Err(RegistryError::DuplicateCommand {
                existing: existing.command.clone(),
                incoming: canonical,
                hash: h,
            });
        }
        log::debug!("registered '{canonical}' as 0X{h:04X}");
        self.entries.insert(
            h,
            CommandEntry {
                hash: h,
                command: canonical,
                help: help.to_string(),
            },
        );
        Ok(h)
    }

    /// Entries in first-registration order.
    pub fn entries(&self) -> impl Iterator<Item = &CommandEntry> {
        self.entries.values()
    }

    /// Number of registered commands.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if nothing has been registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ================= TESTS ==========================
