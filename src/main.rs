//! gostack-digest CLI
//!
//! Reads a goroutine dump and prints each distinct stack once,
//! with how many goroutines share it.

use anyhow::Result;
use clap::Parser;
use env_logger::Env;
use std::path::PathBuf;

use gostack_digest::commands::{execute_summarize, validate_args, SummarizeArgs};
use gostack_digest::output::{GroupOrder, ReportFormat};
use gostack_digest::parser::{GrammarOptions, OffsetRadix};
use gostack_digest::utils::config::DEFAULT_ENTRY_POINT;

/// Group goroutine stack dumps by call pattern
#[derive(Parser, Debug)]
#[command(name = "gostack-digest")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Dump file to read (defaults to stdin)
    input: Option<PathBuf>,

    /// Print the number of blocks that failed to parse
    #[arg(short = 'e', long = "errors")]
    print_errors: bool,

    /// Remove stacks with count less than this
    #[arg(short = 'c', long, default_value = "0")]
    min_count: usize,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    format: ReportFormat,

    /// Group ordering
    #[arg(long, value_enum, default_value = "key")]
    order: GroupOrder,

    /// How frame offsets are written
    #[arg(long, value_enum, default_value = "hex")]
    offset_radix: OffsetRadix,

    /// Created-by line that marks the entry point goroutine
    #[arg(long, default_value = DEFAULT_ENTRY_POINT, env = "GOSTACK_ENTRY_POINT")]
    entry_point: String,

    /// Only accept `created by ...` lines
    #[arg(long, conflicts_with = "entry_point")]
    no_entry_point: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    let args = SummarizeArgs {
        input: cli.input,
        min_count: cli.min_count,
        print_errors: cli.print_errors,
        format: cli.format,
        order: cli.order,
        grammar: GrammarOptions {
            offset_radix: cli.offset_radix,
            entry_point: (!cli.no_entry_point).then_some(cli.entry_point),
        },
    };

    // Validate args first
    validate_args(&args)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    execute_summarize(&args, &mut out)?;

    Ok(())
}
