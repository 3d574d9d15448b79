use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, GenError>;

#[derive(Debug, thiserror::Error)]
pub enum GenError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse source document {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("invalid source document: {0}")]
    InvalidDocument(String),

    /// A section (or host) lacks a field the merge cannot do without.
    #[error("section `{section}` is missing required field `{field}`")]
    MissingField { section: String, field: String },

    #[error("section `{section}`: field `{field}` must be a string, number or boolean")]
    InvalidValue { section: String, field: String },

    #[error(
        "sentinel `{sentinel}` occurs {count} times in {path} (expected 0 or 2); refusing to rewrite"
    )]
    SentinelCorrupted {
        path: PathBuf,
        sentinel: String,
        count: usize,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl GenError {
    pub(crate) fn missing(section: &str, field: &str) -> Self {
        Self::MissingField {
            section: section.to_string(),
            field: field.to_string(),
        }
    }
}
