//! Marker recognition over source text.
//!
//! A marker pairs a command name (and optional help text) with the hash
//! literal the dispatch code uses as a `case` label:
//!
//! ```c
//! case /** CLEAR ( ... - <empty>) Remove all items from stack. **/ 0X9F9C: ...
//! ```
//!
//! Grammar: `/**` WS* COMMAND (WS+ HELP)? WS* `**/` WS* (`0x`|`0X`)?
//! HEXDIGITS*, where COMMAND is one or more non-whitespace characters,
//! HELP is free text up to (not including) the closing `**/`, and
//! HEXDIGITS may be empty. The `0x` prefix is matched case-insensitively;
//! COMMAND is captured with its original casing.
//!
//! Scanning is deliberately permissive: it runs over arbitrary source
//! text, and text that does not match the grammar is simply not a marker.
//! No match is a valid outcome, never an error.

use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;

/// The marker grammar. Group 1 is the command token, group 2 the raw help
/// text (may span lines), group 3 the literal's `0x` prefix, group 4 its
/// hex digits. Help, when present, must start with whitespace so the
/// command stays the first whitespace-delimited token after `/**`.
static MARKER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"/\*\*\s*(\S+?)((?s:\s.*?)?)\*\*/\s*(0[xX])?([0-9a-fA-F]*)")
        .expect("static regex must compile")
});

/// One recognised marker in a source buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Marker<'a> {
    /// Byte range of the whole match, literal included.
    pub span: Range<usize>,
    /// Command token, original casing as written in the source.
    pub command: &'a str,
    /// Help text with leading/trailing whitespace trimmed; empty if the
    /// marker carries none.
    pub help: &'a str,
    /// Existing literal value, if one was present and parsed as 16-bit hex.
    pub literal: Option<u16>,
    /// Whether any literal text (`0x` prefix and/or hex digits) followed
    /// the closing delimiter.
    pub literal_present: bool,
}

/// Returns a lazy iterator over all non-overlapping markers in `text`,
/// in left-to-right order. Holds no state across calls; scanning is
/// restartable per buffer.
pub fn markers(text: &str) -> impl Iterator<Item = Marker<'_>> {
    MARKER_RE.captures_iter(text).map(|caps| {
        let whole = caps.get(0).expect("group 0 always present");
        let command = caps.get(1).expect("command group always present").as_str();
        let help = caps.get(2).map_or("", |m| m.as_str()).trim();
        let prefix = caps.get(3).is_some();
        let digits = caps.get(4).map_or("", |m| m.as_str());
        let literal = if digits.is_empty() {
            None
        } else {
            u16::from_str_radix(digits, 16).ok()
        };
        log::debug!(
            "marker '{}' at {}..{}, literal {:?}",
            command,
            whole.start(),
            whole.end(),
            literal
        );
        Marker {
            span: whole.range(),
            command,
            help,
            literal,
            literal_present: prefix || !digits.is_empty(),
        }
    })
}

// ================= TESTS ==========================

#[cfg(test)]
mod tests {
    use super::*;

    fn scan_all(text: &str) -> Vec<Marker<'_>> {
        markers(text).collect()
    }

    #[test]
    fn test_marker_with_literal() {
        let found = scan_all("case /** DEPTH **/ 0xb508: push(depth()); break;");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].command, "DEPTH");
        assert_eq!(found[0].help, "");
        assert_eq!(found[0].literal, Some(0xB508));
        assert!(found[0].literal_present);
    }

    #[test]
    fn test_marker_with_help_text() {
        let found = scan_all("case /** DEPTH ( - u) Push stack depth. **/ 0xb508: break;");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].command, "DEPTH");
        assert_eq!(found[0].help, "( - u) Push stack depth.");
        assert_eq!(found[0].literal, Some(0xB508));
    }

    #[test]
    fn test_marker_without_literal() {
        let found = scan_all("case /** DROP **/: pop(); break;");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].command, "DROP");
        assert_eq!(found[0].literal, None);
        assert!(!found[0].literal_present);
    }

    #[test]
    fn test_marker_with_bare_prefix() {
        let found = scan_all("case /** DROP **/ 0x: pop(); break;");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].literal, None);
        assert!(found[0].literal_present);
    }

    #[test]
    fn test_command_casing_is_preserved() {
        let found = scan_all("/** Led **/ 0xdc88");
        assert_eq!(found[0].command, "Led");
    }

    #[test]
    fn test_no_whitespace_around_command() {
        let found = scan_all("case /**CLEAR**/0x9f9c: clear(); break;");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].command, "CLEAR");
        assert_eq!(found[0].help, "");
        assert_eq!(found[0].literal, Some(0x9F9C));
    }

    #[test]
    fn test_uppercase_hex_prefix() {
        let found = scan_all("/** . **/ 0XB58B");
        assert_eq!(found[0].literal, Some(0xB58B));
    }

    #[test]
    fn test_punctuation_commands() {
        let found = scan_all("case /** . **/ 0xb58b: break;\ncase /** .\" **/ 0x66c9: break;");
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].command, ".");
        assert_eq!(found[1].command, ".\"");
    }

    #[test]
    fn test_multiple_markers_in_order() {
        let text = "case /** + **/ 0xb58e: break;\n\
                    case /** - **/ 0xb588: break;\n\
                    case /** NEGATE **/ 0x7a79: break;";
        let cmds: Vec<&str> = scan_all(text).iter().map(|m| m.command).collect();
        assert_eq!(cmds, ["+", "-", "NEGATE"]);
    }

    #[test]
    fn test_adjacent_markers_do_not_merge() {
        // The first command must not extend through its own closing
        // delimiter towards the second marker's one.
        let found = scan_all("/**A**/ x; /**B**/ y;");
        let cmds: Vec<&str> = found.iter().map(|m| m.command).collect();
        assert_eq!(cmds, ["A", "B"]);
        assert_eq!(found[0].help, "");
    }

    #[test]
    fn test_asterisk_command() {
        let found = scan_all("case /** * **/ 0x0: binop(*); break;");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].command, "*");
    }

    #[test]
    fn test_unterminated_marker_is_not_matched() {
        assert!(scan_all("case /** DROP 0x5c2c: pop(); break;").is_empty());
    }

    #[test]
    fn test_plain_comment_is_not_matched() {
        assert!(scan_all("/* just a comment */ int x = 0;").is_empty());
    }

    #[test]
    fn test_empty_marker_is_not_matched() {
        // No command token before the closing delimiter.
        assert!(scan_all("/** **/ 0x1234").is_empty());
    }

    #[test]
    fn test_overlong_literal_has_no_value() {
        let found = scan_all("/** FOO **/ 0xdeadbeef");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].literal, None);
        assert!(found[0].literal_present);
    }

    #[test]
    fn test_span_covers_whole_marker() {
        let text = "abc /** FOO **/ 0x0000 xyz";
        let found = scan_all(text);
        assert_eq!(&text[found[0].span.clone()], "/** FOO **/ 0x0000");
    }
}
