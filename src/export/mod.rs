//! Export of a generated dataset to JSON or SQL.
//!
//! Rendering is pure (dataset in, text out). Writing is a single scoped,
//! buffered file write.

mod json;
mod sql;

pub use json::{render_json, ExportDocument};
pub use sql::{escape_sql_string, render_sql, SqlValue};

use crate::error::{GenError, Result};
use crate::model::Dataset;
use crate::progress::ProgressWriter;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

pub const WRITER_BUFFER_SIZE: usize = 256 * 1024;

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    #[default]
    Json,
    Sql,
}

impl std::str::FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(Format::Json),
            "sql" => Ok(Format::Sql),
            _ => Err(format!("Unknown format: {}. Use json or sql", s)),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Json => write!(f, "json"),
            Format::Sql => write!(f, "sql"),
        }
    }
}

/// Path the export is written to. SQL output swaps a trailing `.json` for `.sql`.
pub fn output_path(format: Format, path: &Path) -> PathBuf {
    match format {
        Format::Json => path.to_path_buf(),
        Format::Sql => {
            let raw = path.to_string_lossy();
            match raw.strip_suffix(".json") {
                Some(stem) => PathBuf::from(format!("{}.sql", stem)),
                None => path.to_path_buf(),
            }
        }
    }
}

/// Render the dataset in the given format.
pub fn render(dataset: &Dataset, format: Format, generated_at: &str) -> Result<String> {
    match format {
        Format::Json => render_json(dataset, generated_at),
        Format::Sql => Ok(render_sql(dataset)),
    }
}

/// Write `contents` to `path`, reporting bytes written to `progress`.
/// Returns the total number of bytes written.
///
/// The file handle is dropped (closed) on every return path.
pub fn write_export<F>(path: &Path, contents: &str, progress: F) -> Result<u64>
where
    F: Fn(u64) + 'static,
{
    let io_err = |source| GenError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(io_err)?;
    let mut writer = ProgressWriter::new(BufWriter::with_capacity(WRITER_BUFFER_SIZE, file), progress);
    writer.write_all(contents.as_bytes()).map_err(io_err)?;
    writer.flush().map_err(io_err)?;
    Ok(writer.bytes_written())
}

/// Render and write in one step. Returns the path actually written.
pub fn export(dataset: &Dataset, format: Format, path: &Path, generated_at: &str) -> Result<PathBuf> {
    let target = output_path(format, path);
    let contents = render(dataset, format, generated_at)?;
    write_export(&target, &contents, |_| {})?;
    Ok(target)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_str() {
        assert_eq!("json".parse::<Format>().unwrap(), Format::Json);
        assert_eq!("SQL".parse::<Format>().unwrap(), Format::Sql);
        assert!("csv".parse::<Format>().is_err());
    }

    #[test]
    fn test_output_path() {
        assert_eq!(
            output_path(Format::Sql, Path::new("out/test-data.json")),
            PathBuf::from("out/test-data.sql")
        );
        assert_eq!(
            output_path(Format::Sql, Path::new("dump.txt")),
            PathBuf::from("dump.txt")
        );
        assert_eq!(
            output_path(Format::Json, Path::new("test-data.json")),
            PathBuf::from("test-data.json")
        );
        // Only the suffix is replaced
        assert_eq!(
            output_path(Format::Sql, Path::new("a.json.d/data.json")),
            PathBuf::from("a.json.d/data.sql")
        );
    }
}
