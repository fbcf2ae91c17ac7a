//! 16-bit hash of console command names.
//!
//! The firmware stores command names as 16-bit hashes and dispatches typed
//! input with a `switch` over them, so the build tool and the compiled
//! firmware must agree on every bit. The algorithm is DJB2-style with an
//! XOR fold per character, truncated to 16 bits; the constants have no
//! deeper basis than that collisions between real command sets are rare.
//! Do not change them: existing firmware images embed the resulting values
//! as `case` labels.

/// Initial accumulator value. Hash of the empty string.
pub const HASH_START: u16 = 5381;

/// Per-character multiplier.
pub const HASH_MULT: u16 = 33;

/// Hashes a command name to its 16-bit table key.
///
/// Letter case is normalised to upper case before hashing, so `"depth"`,
/// `"Depth"` and `"DEPTH"` all produce the same value. Every character of
/// the string is hashed. Total over any input; no error conditions.
pub fn hash(command: &str) -> u16 {
    let mut h = HASH_START;
    for c in command.chars() {
        let c = c.to_ascii_uppercase();
        h = h.wrapping_mul(HASH_MULT) ^ c as u16;
    }
    h
}

// ================= TESTS ==========================
