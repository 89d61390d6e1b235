use std::path::{Path, PathBuf};

/// Where generated properties are written
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    Stdout,
    File(PathBuf),
}

impl OutputTarget {
    /// Interpret a command-line path; `-` means standard output
    pub fn from_arg(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if path.as_os_str() == "-" {
            Self::Stdout
        } else {
            Self::File(path.to_path_buf())
        }
    }
}

impl std::fmt::Display for OutputTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Stdout => write!(f, "-"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Settings for one generation run
#[derive(Debug, Clone)]
pub struct GenerateConfig {
    pub input: PathBuf,
    pub output: OutputTarget,
    /// 0 = unmatched lines only, 1 = also resolved paths, 2+ = also every parsed line
    pub verbosity: u8,
}

impl GenerateConfig {
    pub fn new(input: impl Into<PathBuf>, output: OutputTarget) -> Self {
        Self {
            input: input.into(),
            output,
            verbosity: 0,
        }
    }

    #[must_use]
    pub fn with_verbosity(mut self, verbosity: u8) -> Self {
        self.verbosity = verbosity;
        self
    }
}
