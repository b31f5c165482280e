//! JSON output of the record array.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::core::record::Record;

/// Output file written in the current directory when no path is given.
pub const DEFAULT_OUTPUT: &str = "truth_or_dare_questions_simple_MY.json";

/// Error writing or reading a record file.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl ExportError {
    fn io(path: &Path, source: std::io::Error) -> Self {
        ExportError::Io {
            path: path.display().to_string(),
            source,
        }
    }
}

/// Pretty-printed JSON (2-space indent, raw UTF-8, no trailing newline).
pub fn to_json(records: &[Record]) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(records)?)
}

/// Write `records` to `path`, replacing any existing file.
///
/// The file is written in place: a failure part-way can leave it truncated.
pub fn write_records(path: &Path, records: &[Record]) -> Result<(), ExportError> {
    let json = to_json(records)?;
    let file = File::create(path).map_err(|e| ExportError::io(path, e))?;
    let mut out = BufWriter::new(file);
    out.write_all(json.as_bytes())
        .and_then(|_| out.flush())
        .map_err(|e| ExportError::io(path, e))?;
    log::info!("wrote {} records to {}", records.len(), path.display());
    Ok(())
}

/// Read a record file back.
pub fn read_records(path: &Path) -> Result<Vec<Record>, ExportError> {
    let data = fs::read_to_string(path).map_err(|e| ExportError::io(path, e))?;
    Ok(serde_json::from_str(&data)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::builder::{BuildOptions, build_records};

    const EXPECTED: &str = r#"[
  {
    "id": "1601",
    "type": "TRUTH",
    "difficulty": "SIMPLE",
    "language": "MY",
    "content": "你有没有做过什么事至今都不敢告诉任何人？"
  },
  {
    "id": "1602",
    "type": "DARE",
    "difficulty": "SIMPLE",
    "language": "MY",
    "content": "嗑药"
  }
]"#;

    fn scenario() -> Vec<Record> {
        build_records(
            &["你有没有做过什么事至今都不敢告诉任何人？"],
            &["嗑药"],
            &BuildOptions::default(),
        )
        .unwrap()
    }

    #[test]
    fn to_json_matches_expected_layout() {
        assert_eq!(to_json(&scenario()).unwrap(), EXPECTED);
    }

    #[test]
    fn empty_list_is_empty_array() {
        assert_eq!(to_json(&[]).unwrap(), "[]");
    }

    #[test]
    fn write_then_read_round_trips() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join(DEFAULT_OUTPUT);
        let records = scenario();

        write_records(&path, &records).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), EXPECTED);
        assert_eq!(read_records(&path).unwrap(), records);
    }

    #[test]
    fn write_overwrites_existing_file() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("out.json");
        fs::write(&path, "stale content that is longer than the new output").unwrap();

        write_records(&path, &[]).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "[]");
    }

    #[test]
    fn repeated_writes_are_byte_identical() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("out.json");
        write_records(&path, &scenario()).unwrap();
        let first = fs::read(&path).unwrap();
        write_records(&path, &scenario()).unwrap();
        assert_eq!(fs::read(&path).unwrap(), first);
    }

    #[test]
    fn write_into_missing_directory_fails() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("missing").join("out.json");
        let err = write_records(&path, &scenario()).unwrap_err();
        assert!(matches!(err, ExportError::Io { .. }));
        assert!(err.to_string().contains("out.json"));
    }

    #[test]
    fn read_rejects_non_array() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("bad.json");
        fs::write(&path, r#"{"id":"1"}"#).unwrap();
        assert!(matches!(read_records(&path), Err(ExportError::Json(_))));
    }
}
