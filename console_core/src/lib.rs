//! Core logic of the console command-table preprocessor.
//!
//! Firmware sources annotate their command dispatch code with marker
//! comments pairing a command name (and optional help text) with a 16-bit
//! hash literal:
//!
//! ```c
//! case /** DEPTH ( - u) Push stack depth. **/ 0XB508: ...
//! ```
//!
//! This crate contains everything that is pure text-in/text-out:
//! - [`hash`]: the 16-bit command name hash,
//! - [`scanner`]: marker recognition over a source buffer,
//! - [`registry`]: the per-run collection of commands keyed by hash,
//! - [`rewriter`]: literal correction inside a source buffer,
//! - [`emitter`]: generation of the runtime help/hash tables.
//!
//! File discovery, I/O and the command line live in the `console_mk`
//! binary crate.

pub mod emitter;
pub mod hash;
pub mod registry;
pub mod rewriter;
pub mod scanner;

pub use registry::{CommandEntry, Registry, RegistryError};
pub use rewriter::{Rewrite, rewrite};
pub use scanner::{Marker, markers};
