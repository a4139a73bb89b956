//! Spacing repair for word/number concatenation boundaries.
//!
//! The extractor drops spaces at predictable places: after connective words
//! when the next sentence starts with a capital, between a number and its
//! magnitude word, and after the financial vocabulary in
//! [`crate::vocab::FINANCIAL_TERMS`]. A lowercase word running straight into
//! an uppercase letter is assumed to be a missing sentence boundary.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::vocab;

static THEREFORE_CAP: Lazy<Regex> = Lazy::new(|| Regex::new(r"therefore([A-Z])").unwrap());
static HOWEVER_CAP: Lazy<Regex> = Lazy::new(|| Regex::new(r"however([A-Z])").unwrap());
static MILLION_CAP: Lazy<Regex> = Lazy::new(|| Regex::new(r"million([A-Z])").unwrap());

// a word glued to a percentage is an implied multiplication
static WORD_PERCENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"([a-z]+)(\d+%)").unwrap());

static NUMBER_MAGNITUDE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(\d+)(million|billion)").unwrap());

static DIGIT_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d)([a-z]{4,})").unwrap());

static MAGNITUDE_SPLITS: Lazy<Vec<Regex>> = Lazy::new(|| {
    ["million", "billion"]
        .iter()
        .map(|m| Regex::new(&format!(r"(?i)(\w)({m})([A-Z])")).unwrap())
        .collect()
});

static YEAR_CAP: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)(year)([A-Z])").unwrap());

static TERM_SPLITS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vocab::FINANCIAL_TERMS
        .iter()
        .map(|term| Regex::new(&format!(r"(?i)({term})([a-z]{{3,}})")).unwrap())
        .collect()
});

static FUNCTION_WORD_SPLITS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vocab::FUNCTION_WORDS
        .iter()
        .map(|word| Regex::new(&format!(r"({word})([A-Z])")).unwrap())
        .collect()
});

/// Insert spaces at detected concatenation boundaries.
pub fn fix_missing_spaces(text: &str) -> String {
    let text = THEREFORE_CAP.replace_all(text, "Therefore ${1}");
    let text = HOWEVER_CAP.replace_all(&text, "However ${1}");
    let text = MILLION_CAP.replace_all(&text, "million ${1}");

    let text = WORD_PERCENT.replace_all(&text, "${1} × ${2}");
    let text = NUMBER_MAGNITUDE.replace_all(&text, "${1} ${2}");
    let mut text = DIGIT_WORD.replace_all(&text, "${1} ${2}").into_owned();

    for re in MAGNITUDE_SPLITS.iter() {
        text = re.replace_all(&text, "${1} ${2} ${3}").into_owned();
    }
    text = YEAR_CAP.replace_all(&text, "${1} ${2}").into_owned();
    for re in TERM_SPLITS.iter() {
        text = re.replace_all(&text, "${1} ${2}").into_owned();
    }

    for re in FUNCTION_WORD_SPLITS.iter() {
        text = re.replace_all(&text, "${1} ${2}").into_owned();
    }

    text
}
