//! Dataset loading errors.

use std::path::PathBuf;

/// Errors that can occur while loading the network dataset.
///
/// Any of these leaves the session without a usable network.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The dataset file could not be opened or read
    #[error("could not read dataset at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A record could not be parsed
    #[error("malformed dataset{}: {message}", at_line(.line))]
    Csv { line: Option<u64>, message: String },

    /// A required column is absent from the header row
    #[error("dataset is missing required column '{0}'")]
    MissingColumn(&'static str),

    /// The dataset has no usable rows
    #[error("dataset is empty")]
    Empty,
}

fn at_line(line: &Option<u64>) -> String {
    line.map(|l| format!(" at line {l}")).unwrap_or_default()
}

impl From<csv::Error> for LoadError {
    fn from(err: csv::Error) -> Self {
        LoadError::Csv {
            line: err.position().map(|p| p.line()),
            message: err.to_string(),
        }
    }
}
