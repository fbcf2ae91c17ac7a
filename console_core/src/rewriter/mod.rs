//! In-buffer correction of marker hash literals.
//!
//! The transform is pure: read a buffer, scan its markers, register each
//! command, and splice the canonical marker form back in. Callers compare
//! the result against the input to decide whether the file needs writing.
//! Because the literal is fully determined by the command text, running
//! the rewriter on its own output never changes it again.

use crate::registry::{Registry, RegistryError};
use crate::scanner::markers;

/// Result of rewriting one buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite {
    /// The rewritten buffer.
    pub text: String,
    /// Whether `text` differs byte-for-byte from the input.
    pub changed: bool,
    /// Number of markers found and registered.
    pub markers: usize,
}

/// Rewrites every marker literal in `text` to `0X` plus the command's
/// hash as four upper-case hex digits, registering each command as it
/// goes.
///
/// Markers are rendered in canonical form, `/** CMD **/ 0X1234` or
/// `/** CMD help text **/ 0X1234`, with the command's original casing and
/// the help text preserved exactly as captured. Text outside marker spans
/// is untouched.
///
/// Fails fast on the first duplicate registration; the caller must then
/// discard the partial result.
pub fn rewrite(text: &str, registry: &mut Registry) -> Result<Rewrite, RegistryError> {
    let mut out = String::with_capacity(text.len());
    let mut last = 0usize;
    let mut count = 0usize;

    for marker in markers(text) {
        let h = registry.register(marker.command, marker.help)?;
        out.push_str(&text[last..marker.span.start]);
        out.push_str("/** ");
        out.push_str(marker.command);
        if !marker.help.is_empty() {
            out.push(' ');
            out.push_str(marker.help);
        }
        out.push_str(" **/ ");
        out.push_str(&format!("0X{h:04X}"));
        last = marker.span.end;
        count += 1;
    }
    out.push_str(&text[last..]);

    let changed = out != text;
    Ok(Rewrite {
        text: out,
        changed,
        markers: count,
    })
}

// ================= TESTS ==========================
