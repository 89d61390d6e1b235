//! Parser for the IEEE MA-L registry CSV (`oui.csv`).
//!
//! Only single-line records are supported. The name column may be wrapped in
//! double quotes, with `""` standing for a literal quote.

use std::io::{BufRead, BufReader};
use std::path::Path;
use thiserror::Error;

use crate::core::registry::Registry;
use crate::core::types::{RegistryEntry, IDENTIFIER_LEN, RECORD_TAG};
use crate::parsing::diagnostics::LineReporter;
use crate::utils::validation::{is_valid_oui, trim_name};

const DOUBLE_QUOTE: char = '"';
const COMMA: char = ',';

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid format: {0}")]
    InvalidFormat(String),
}

/// Registry built from one input plus the number of lines that were skipped
#[derive(Debug, Default)]
pub struct ParseOutcome {
    pub registry: Registry,
    /// Unmatched lines, not counting line 1
    pub skipped_lines: usize,
}

impl ParseOutcome {
    fn accept(&mut self, line_number: usize, line: &str, reporter: &mut dyn LineReporter) {
        match parse_line(line_number, line, reporter) {
            Some(entry) => self.registry.put(entry.identifier.0, entry.name),
            None if line_number != 1 => self.skipped_lines += 1,
            None => {}
        }
    }
}

/// Parse an `oui.csv` file
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be opened or read. Lines that
/// do not match the record shape are reported, not returned as errors.
pub fn parse_csv_file(
    path: &Path,
    reporter: &mut dyn LineReporter,
) -> Result<ParseOutcome, ParseError> {
    let reader = std::fs::File::open(path).map(BufReader::new)?;
    parse_csv_reader(reader, reporter)
}

/// Parse CSV records from any buffered reader
///
/// # Errors
///
/// Returns `ParseError::Io` on read failures, including invalid UTF-8.
pub fn parse_csv_reader<R: BufRead>(
    reader: R,
    reporter: &mut dyn LineReporter,
) -> Result<ParseOutcome, ParseError> {
    let mut outcome = ParseOutcome::default();

    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        // Line numbers are 1-based; line 1 is the column header
        outcome.accept(i + 1, &line, reporter);
    }

    Ok(outcome)
}

/// Parse CSV records from an in-memory string
#[must_use]
pub fn parse_csv_text(text: &str, reporter: &mut dyn LineReporter) -> ParseOutcome {
    let mut outcome = ParseOutcome::default();

    for (i, line) in text.lines().enumerate() {
        outcome.accept(i + 1, line, reporter);
    }

    outcome
}

/// Parse one line, telling the reporter about the result.
///
/// A non-matching line 1 is assumed to be the header and is skipped silently.
pub fn parse_line(
    line_number: usize,
    line: &str,
    reporter: &mut dyn LineReporter,
) -> Option<RegistryEntry> {
    let Some(entry) = match_record(line) else {
        if line_number != 1 {
            reporter.unmatched_line(line_number, line);
        }
        return None;
    };

    reporter.parsed_line(line_number, &entry);
    Some(entry)
}

/// Match `MA-L,<6 hex>,<rest>` and decode the name from `<rest>`
#[must_use]
pub fn match_record(line: &str) -> Option<RegistryEntry> {
    let rest = line.strip_prefix(RECORD_TAG)?.strip_prefix(COMMA)?;

    let identifier = rest.get(..IDENTIFIER_LEN)?;
    if !is_valid_oui(identifier) {
        return None;
    }

    let field = rest[IDENTIFIER_LEN..].strip_prefix(COMMA)?;
    if field.is_empty() {
        return None;
    }

    let name = trim_name(&extract_field(field)).to_string();
    Some(RegistryEntry::new(identifier, name))
}

/// Decode one possibly-quoted field.
///
/// The field counts as quoted only when it starts with an odd number of
/// double quotes; `""abc` is therefore unquoted and decodes to `"abc`. Inside
/// the field `""` is a literal quote, a lone quote ends it, and an unquoted
/// field also ends at a comma. Unterminated quoting keeps whatever was read.
#[must_use]
pub fn extract_field(input: &str) -> String {
    let quoted = count_leading_char(input, DOUBLE_QUOTE) % 2 == 1;
    let mut chars = input.chars().peekable();
    if quoted {
        chars.next();
    }

    let mut output = String::with_capacity(input.len());

    while let Some(ch) = chars.next() {
        if ch == DOUBLE_QUOTE {
            if chars.next_if_eq(&DOUBLE_QUOTE).is_some() {
                output.push(DOUBLE_QUOTE);
                continue;
            }
            break;
        }

        if ch == COMMA && !quoted {
            break;
        }

        output.push(ch);
    }

    output
}

fn count_leading_char(input: &str, target: char) -> usize {
    input.chars().take_while(|&c| c == target).count()
}
