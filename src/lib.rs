//! # Texmend - math notation repair for exam question datasets
//!
//! Texmend post-processes JSON datasets of exam questions to repair
//! malformed LaTeX notation and currency formatting left behind by an
//! upstream text extraction.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  JSON File  │────▶│   Loader    │────▶│   Rewrite   │────▶│  JSON File  │
//! │  (records)  │     │  (array)    │     │  (9 stages) │     │  (cleaned)  │
//! └─────────────┘     └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use texmend::{clean_records, load_dataset, save_dataset};
//! use std::path::Path;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut records = load_dataset(Path::new("questions.json"))?;
//!     let report = clean_records(&mut records);
//!     println!("{}", report.summary());
//!     save_dataset(Path::new("questions_cleaned.json"), &records)?;
//!     Ok(())
//! }
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Error types
//! - [`dataset`] - Dataset loading and saving
//! - [`clean`] - The nine-stage transform pipeline
//! - [`fixup`] - Second-pass targeted repairs
//! - [`pipeline`] - Batch drivers and reports
//! - [`vocab`] - Closed vocabulary lists
//! - [`logs`] - Console logging

// Core modules
pub mod error;
pub mod logs;
pub mod vocab;

// Dataset I/O
pub mod dataset;

// Rewriting
pub mod clean;
pub mod fixup;

// Drivers
pub mod pipeline;

// =============================================================================
// Re-exports - Errors
// =============================================================================

pub use error::{DatasetError, DatasetResult};

// =============================================================================
// Re-exports - Dataset
// =============================================================================

pub use dataset::{load_dataset, save_dataset, to_pretty_json, TEXT_FIELDS};

// =============================================================================
// Re-exports - Clean pipeline
// =============================================================================

pub use clean::{clean_text, stages_description, unpaired_lines, Stage};

// =============================================================================
// Re-exports - Fixup pass
// =============================================================================

pub use fixup::fix_dollar_signs;

// =============================================================================
// Re-exports - Drivers
// =============================================================================

pub use pipeline::{clean_records, fixup_records, CleanReport, ImbalanceWarning};
