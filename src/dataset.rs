//! Dataset loading and saving.
//!
//! A dataset is a JSON array of question objects, loaded whole into memory
//! and written back whole. Records keep their original order; keys the
//! pipeline does not recognize pass through untouched.

use serde_json::Value;
use std::fs;
use std::path::Path;

use crate::error::{DatasetError, DatasetResult};

/// The question fields subject to cleanup. Everything else on a record is
/// copied verbatim.
pub const TEXT_FIELDS: &[&str] = &[
    "question_text",
    "option_a",
    "option_b",
    "option_c",
    "explanation_a",
    "explanation_b",
    "explanation_c",
];

/// Load a dataset from a JSON file whose root is an array of records.
pub fn load_dataset(path: &Path) -> DatasetResult<Vec<Value>> {
    let content = fs::read_to_string(path)?;
    let root: Value = serde_json::from_str(&content)?;
    match root {
        Value::Array(records) => Ok(records),
        _ => Err(DatasetError::NotAnArray),
    }
}

/// Serialize records with two-space indentation, non-ASCII kept unescaped.
pub fn to_pretty_json(records: &[Value]) -> DatasetResult<String> {
    Ok(serde_json::to_string_pretty(records)?)
}

/// Write a dataset back to disk.
pub fn save_dataset(path: &Path, records: &[Value]) -> DatasetResult<()> {
    let json = to_pretty_json(records)?;
    fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;

    #[test]
    fn test_load_save_round_trip() {
        let records = vec![
            json!({"question_text": "What is duration?", "points": 1, "option_a": null}),
            json!({"question_text": "Définir le taux d'intérêt"}),
        ];

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("questions.json");
        save_dataset(&path, &records).unwrap();

        let loaded = load_dataset(&path).unwrap();
        assert_eq!(loaded, records);

        // non-ASCII stays unescaped on disk
        let raw = fs::read_to_string(&path).unwrap();
        assert!(raw.contains("Définir"));
        assert!(raw.contains("  \"question_text\""));
    }

    #[test]
    fn test_load_rejects_non_array_root() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{\"not\": \"an array\"}}").unwrap();
        let err = load_dataset(file.path()).unwrap_err();
        assert!(matches!(err, DatasetError::NotAnArray));
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = load_dataset(Path::new("/nonexistent/questions.json")).unwrap_err();
        assert!(matches!(err, DatasetError::Io(_)));
    }

    #[test]
    fn test_text_fields_cover_options_and_explanations() {
        assert_eq!(TEXT_FIELDS.len(), 7);
        assert!(TEXT_FIELDS.contains(&"question_text"));
        assert!(TEXT_FIELDS.contains(&"explanation_c"));
    }
}
