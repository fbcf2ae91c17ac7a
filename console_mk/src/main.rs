use clap::Parser;

/// Console command-table preprocessor.
///
/// Scans firmware sources for `/** COMMAND help **/ 0X....` markers,
/// rewrites each hash literal to match the command text, and generates
/// the console help/hash tables next to the first input file.
#[derive(Parser)]
#[command(name = "console-mk", version)]
struct Cli {
    /// Input files or glob patterns, e.g. `src/**/*.cpp`.
    #[arg(required = true, value_name = "PATTERN")]
    patterns: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    let _ = tracing_subscriber::fmt::try_init();
    let cli = Cli::parse();

    let summary = console_mk::run(&cli.patterns)?;
    eprintln!(
        "Generated {} with {} command(s).",
        summary.table_path.display(),
        summary.commands
    );
    Ok(())
}
