use chrono::{DateTime, Utc};
use sha1::{Digest, Sha1};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::core::config::OutputTarget;
use crate::core::registry::Snapshot;
use crate::output::escape::to_property_value;
use crate::utils::validation::trim_name;

/// Timestamp layout used in the generated header
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";

#[derive(Error, Debug)]
pub enum WriteError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to create directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to open {} for writing: {source}", path.display())]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// SHA-1 over every identifier and raw name, in snapshot order.
///
/// Computed before escaping so the digest tracks the data, not its encoding.
#[must_use]
pub fn compute_digest(snapshot: &Snapshot) -> String {
    let mut hasher = Sha1::new();
    for entry in snapshot.iter() {
        hasher.update(entry.identifier.as_str().as_bytes());
        hasher.update(entry.name.as_bytes());
    }
    format!("{:x}", hasher.finalize())
}

/// Write the header block and one `identifier = value` line per entry
///
/// # Errors
///
/// Returns any error raised by the underlying writer.
pub fn write_properties<W: Write>(
    snapshot: &Snapshot,
    out: &mut W,
    generated_at: DateTime<Utc>,
) -> std::io::Result<()> {
    writeln!(out, "# Generated on: {}", generated_at.format(TIMESTAMP_FORMAT))?;
    writeln!(out, "# Entry count:  {}", snapshot.len())?;
    writeln!(out, "# Data digest:  {}", compute_digest(snapshot))?;
    writeln!(out)?;

    for entry in snapshot.iter() {
        let value = to_property_value(&entry.name);
        writeln!(out, "{} = {}", entry.identifier, trim_name(&value))?;
    }

    Ok(())
}

/// Write a snapshot to stdout or to a file, creating parent directories as needed.
///
/// An existing file is truncated.
///
/// # Errors
///
/// Returns `WriteError::CreateDir` or `WriteError::Open` if the destination
/// cannot be prepared, or `WriteError::Io` if writing fails.
pub fn write_to_target(
    snapshot: &Snapshot,
    target: &OutputTarget,
    generated_at: DateTime<Utc>,
) -> Result<(), WriteError> {
    match target {
        OutputTarget::Stdout => {
            let stdout = std::io::stdout();
            let mut out = BufWriter::new(stdout.lock());
            write_properties(snapshot, &mut out, generated_at)?;
            out.flush()?;
        }
        OutputTarget::File(path) => {
            ensure_parent_dir(path)?;
            let file = File::create(path).map_err(|source| WriteError::Open {
                path: path.clone(),
                source,
            })?;
            let mut out = BufWriter::new(file);
            write_properties(snapshot, &mut out, generated_at)?;
            out.flush()?;
        }
    }

    Ok(())
}

fn ensure_parent_dir(path: &Path) -> Result<(), WriteError> {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() && !dir.is_dir() => {
            std::fs::create_dir_all(dir).map_err(|source| WriteError::CreateDir {
                path: dir.to_path_buf(),
                source,
            })
        }
        _ => Ok(()),
    }
}
