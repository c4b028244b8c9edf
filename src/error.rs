//! Error taxonomy for generation, privacy transforms and export.

use crate::privacy::PiiField;
use std::path::PathBuf;

/// Errors surfaced by the library. The CLI turns any of these into exit code 1.
#[derive(Debug, thiserror::Error)]
pub enum GenError {
    /// Orders were requested before users and products exist.
    #[error(
        "generate users and products before orders (have {users} users, {products} products)"
    )]
    Precondition { users: usize, products: usize },

    /// A unique value source (email, SKU) ran out of fresh candidates.
    #[error("could not produce a unique {kind} after {attempts} attempts")]
    UniquenessExhausted { kind: &'static str, attempts: usize },

    /// More unique values were requested than the source can ever produce.
    #[error("cannot produce {requested} more unique {kind} values: at most {available} remain")]
    UniqueSpaceExceeded {
        kind: &'static str,
        requested: usize,
        available: u64,
    },

    /// A PII value does not have the shape its masking rule needs.
    /// The value itself is left out so it never reaches logs.
    #[error("cannot mask {field}: {reason}")]
    Unmaskable {
        field: PiiField,
        reason: &'static str,
    },

    /// Plan weights rejected by the weighted sampler.
    #[error("invalid plan weights: {0}")]
    InvalidWeights(String),

    #[error("failed to write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to read config {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {}: {source}", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_yaml_ng::Error,
    },
}

pub type Result<T> = std::result::Result<T, GenError>;
