//! Generation of the runtime help/hash tables.
//!
//! The firmware includes the generated file under `CONSOLE_WANT_HELP` and
//! walks two parallel arrays: `help_cmds` (one string per command, the
//! command name first so list output can truncate at the first space) and
//! `help_hashes` (the matching 16-bit keys, for help lookup by command).
//!
//! The file is regenerated from scratch on every run, purely from the
//! registry contents; nothing is merged from a previous version.

use crate::registry::Registry;

/// Fixed name of the generated include, as referenced by the firmware's
/// `#include` directive.
pub const TABLE_FILENAME: &str = "console_help.autogen.inc";

/// Renders the full text of the generated include from the registry, in
/// registry insertion order.
///
/// For each command this emits one `help_cmd_<i>` string constant holding
/// `"<COMMAND> <help>"`, a reference to it in `help_cmds[]`, and its hash
/// in `help_hashes[]`.
pub fn emit(registry: &Registry) -> String {
    let mut out = String::new();

    out.push_str("// Console help tables. Autogenerated, do not edit.\n");
    out.push_str(&format!("// {} commands.\n\n", registry.len()));

    for (i, entry) in registry.entries().enumerate() {
        let mut combined = entry.command.clone();
        if !entry.help.is_empty() {
            combined.push(' ');
            combined.push_str(&entry.help);
        }
        out.push_str(&format!(
            "static const char help_cmd_{}[] = \"{}\";\n",
            i,
            escape_c(&combined)
        ));
    }

    out.push_str("\nstatic const char* const help_cmds[] = {\n");
    for (i, _) in registry.entries().enumerate() {
        out.push_str(&format!("\thelp_cmd_{},\n", i));
    }
    out.push_str("};\n");

    out.push_str("\nstatic const uint16_t help_hashes[] = {\n");
    for entry in registry.entries() {
        out.push_str(&format!("\t0X{:04X},\n", entry.hash));
    }
    out.push_str("};\n");

    out
}

/// Escapes a string for use inside a C string literal.
fn escape_c(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            _ => out.push(c),
        }
    }
    out
}

// ================= TESTS ==========================
