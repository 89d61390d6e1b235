use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use tracing::info;

use crate::cli::{DEFAULT_INPUT, DEFAULT_OUTPUT};
use crate::core::config::{GenerateConfig, OutputTarget};
use crate::parsing::diagnostics::TracingReporter;
use crate::pipeline;

#[derive(Args)]
pub struct GenerateArgs {
    /// Input file (IEEE MA-L registry CSV)
    #[arg(short, long, default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    /// Output properties file. '-' means standard output
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,
}

/// Execute generate subcommand
///
/// # Errors
///
/// Returns an error if the input cannot be read or the output cannot be written.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: GenerateArgs, verbose: u8) -> anyhow::Result<()> {
    let config = GenerateConfig::new(args.input, OutputTarget::from_arg(&args.output))
        .with_verbosity(verbose);
    let mut reporter = TracingReporter::new(verbose);

    let summary = pipeline::generate(&config, &mut reporter).with_context(|| {
        format!(
            "Failed to generate {} from {}",
            config.output,
            config.input.display()
        )
    })?;

    if verbose > 0 {
        info!(
            "Wrote {} entries ({} lines skipped), digest {}",
            summary.entries, summary.skipped_lines, summary.digest
        );
    }

    Ok(())
}
