//! One end-to-end generation run: CSV in, properties out.

use chrono::{DateTime, Utc};
use thiserror::Error;
use tracing::info;

use crate::core::config::GenerateConfig;
use crate::core::registry::Snapshot;
use crate::output::writer::{compute_digest, write_to_target, WriteError};
use crate::parsing::csv::{parse_csv_file, ParseError};
use crate::parsing::diagnostics::LineReporter;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Failed to read input: {0}")]
    Parse(#[from] ParseError),

    #[error("Failed to write output: {0}")]
    Write(#[from] WriteError),
}

/// What a generation run produced
#[derive(Debug, Clone)]
pub struct GenerateSummary {
    pub entries: usize,
    pub digest: String,
    pub skipped_lines: usize,
    pub generated_at: DateTime<Utc>,
}

/// Parse `config.input` and write the sorted registry to `config.output`
///
/// # Errors
///
/// Returns `PipelineError::Parse` if the input cannot be opened or read, or
/// `PipelineError::Write` if the output cannot be written. Unmatched lines go
/// to the reporter and do not fail the run.
pub fn generate(
    config: &GenerateConfig,
    reporter: &mut dyn LineReporter,
) -> Result<GenerateSummary, PipelineError> {
    if config.verbosity > 0 {
        info!("Input file  = {}", config.input.display());
        info!("Output file = {}", config.output);
    }

    let outcome = parse_csv_file(&config.input, reporter)?;
    let snapshot = outcome.registry.into_snapshot();
    let generated_at = Utc::now();

    write_to_target(&snapshot, &config.output, generated_at)?;

    Ok(summarize(&snapshot, outcome.skipped_lines, generated_at))
}

fn summarize(
    snapshot: &Snapshot,
    skipped_lines: usize,
    generated_at: DateTime<Utc>,
) -> GenerateSummary {
    GenerateSummary {
        entries: snapshot.len(),
        digest: compute_digest(snapshot),
        skipped_lines,
        generated_at,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::OutputTarget;
    use crate::parsing::diagnostics::RecordingReporter;
    use crate::parsing::properties::parse_properties_file;

    const SAMPLE_CSV: &str = "Registry,Assignment,Organization Name,Organization Address
MA-L,AABBCC,\"Example, Inc.\",1 Main St
MA-L,001122,Plain Co,2 Side St
MA-L,000B38,Knürr GmbH,Beuthener Str. 43 Nürnberg DE 90471
not a record
";

    #[test]
    fn test_generate_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("oui.csv");
        std::fs::write(&input, SAMPLE_CSV).unwrap();
        let output = dir.path().join("resources/oui.properties");

        let config = GenerateConfig::new(&input, OutputTarget::File(output.clone()));
        let mut reporter = RecordingReporter::default();
        let summary = generate(&config, &mut reporter).unwrap();

        assert_eq!(summary.entries, 3);
        assert_eq!(summary.skipped_lines, 1);
        assert_eq!(reporter.unmatched, vec![(5, "not a record".to_string())]);

        let written = std::fs::read_to_string(&output).unwrap();
        let body: Vec<&str> = written.lines().skip(4).collect();
        assert_eq!(
            body,
            vec![
                "000B38 = Kn\\u00FCrr GmbH",
                "001122 = Plain Co",
                "AABBCC = Example, Inc.",
            ]
        );
        assert!(written.contains(&format!("# Data digest:  {}\n", summary.digest)));

        // Reading the output back gives the same data and digest
        let reread = parse_properties_file(&output).unwrap();
        assert_eq!(compute_digest(&reread.into_snapshot()), summary.digest);
    }

    #[test]
    fn test_generate_reordered_input_same_digest() {
        let dir = tempfile::tempdir().unwrap();
        let forward = dir.path().join("forward.csv");
        let reversed = dir.path().join("reversed.csv");
        std::fs::write(&forward, "h\nMA-L,001122,Plain Co\nMA-L,AABBCC,Other\n").unwrap();
        std::fs::write(&reversed, "h\nMA-L,AABBCC,Other\nMA-L,001122,Plain Co\n").unwrap();

        let run = |input: &std::path::Path| {
            let out = dir.path().join(format!(
                "{}.properties",
                input.file_stem().unwrap().to_string_lossy()
            ));
            let config = GenerateConfig::new(input, OutputTarget::File(out));
            generate(&config, &mut RecordingReporter::default()).unwrap()
        };

        assert_eq!(run(&forward).digest, run(&reversed).digest);
    }

    #[test]
    fn test_generate_missing_input_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("oui.properties");
        let config = GenerateConfig::new(
            dir.path().join("missing.csv"),
            OutputTarget::File(output.clone()),
        );

        let result = generate(&config, &mut RecordingReporter::default());
        assert!(matches!(result, Err(PipelineError::Parse(ParseError::Io(_)))));
        assert!(!output.exists());
    }
}
