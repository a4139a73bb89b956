//! Batch drivers for the clean and fixup passes.
//!
//! A driver walks the dataset in original order, rewrites the recognized
//! text fields of each record, and reports what changed. Records are
//! independent of one another; only the stage order within one field's
//! text matters.

use serde::Serialize;
use serde_json::Value;

use crate::clean::{clean_text, unpaired_lines};
use crate::dataset::TEXT_FIELDS;
use crate::fixup::fix_dollar_signs;
use crate::logs::{log_info, log_warning};

/// A text field left with an odd delimiter count after repair.
#[derive(Debug, Clone, Serialize)]
pub struct ImbalanceWarning {
    /// Index of the record in the dataset
    pub record: usize,
    /// Field name on that record
    pub field: String,
    /// Lines still holding an odd unescaped-delimiter count
    pub lines: usize,
}

/// Result of a pass over the dataset.
#[derive(Debug, Clone, Serialize)]
pub struct CleanReport {
    /// Records processed
    pub records: usize,
    /// Text fields whose value changed
    pub fields_changed: usize,
    /// Fields with unresolved delimiter imbalance (best-effort gap)
    pub warnings: Vec<ImbalanceWarning>,
}

impl CleanReport {
    fn new() -> Self {
        Self { records: 0, fields_changed: 0, warnings: Vec::new() }
    }

    /// Summary line for console output.
    pub fn summary(&self) -> String {
        format!(
            "{} records, {} fields changed, {} unresolved delimiter warnings",
            self.records,
            self.fields_changed,
            self.warnings.len()
        )
    }
}

/// Rewrite the recognized text fields of one record in place. Returns the
/// fields whose value changed. Non-object values and null fields pass
/// through untouched.
fn apply_to_record<F>(record: &mut Value, transform: &F) -> Vec<String>
where
    F: Fn(&str) -> String,
{
    let mut changed = Vec::new();

    let Some(map) = record.as_object_mut() else {
        return changed;
    };

    for field in TEXT_FIELDS {
        let current = match map.get(*field) {
            Some(Value::String(text)) => text.clone(),
            _ => continue,
        };
        let rewritten = transform(&current);
        if rewritten != current {
            changed.push((*field).to_string());
            map.insert((*field).to_string(), Value::String(rewritten));
        }
    }

    changed
}

fn run_pass<F>(records: &mut [Value], transform: F) -> CleanReport
where
    F: Fn(&str) -> String,
{
    let mut report = CleanReport::new();
    let total = records.len();

    for (i, record) in records.iter_mut().enumerate() {
        if (i + 1) % 10 == 0 {
            log_info(format!("Processed {}/{} questions...", i + 1, total));
        }

        let changed = apply_to_record(record, &transform);
        report.fields_changed += changed.len();

        // surface what the delimiter repair could not resolve
        if let Some(map) = record.as_object() {
            for field in TEXT_FIELDS {
                if let Some(Value::String(text)) = map.get(*field) {
                    let lines = unpaired_lines(text);
                    if lines > 0 {
                        report.warnings.push(ImbalanceWarning {
                            record: i,
                            field: (*field).to_string(),
                            lines,
                        });
                    }
                }
            }
        }

        report.records += 1;
    }

    if !report.warnings.is_empty() {
        log_warning(format!(
            "{} field(s) left with unbalanced math delimiters",
            report.warnings.len()
        ));
    }

    report
}

/// Run the nine-stage clean pipeline over every record.
pub fn clean_records(records: &mut [Value]) -> CleanReport {
    run_pass(records, clean_text)
}

/// Run the second-pass targeted repairs over every record.
pub fn fixup_records(records: &mut [Value]) -> CleanReport {
    run_pass(records, fix_dollar_signs)
}
