//! Numeric-artifact cleanup.
//!
//! Fixes OCR-style digit confusions (letter `O` for zero), repairs the
//! zero-padded decimal patterns the extractor produces (`Z=00.0882` is
//! really `Z=0.00882`), collapses decimal points doubled by earlier
//! repairs, and finally applies the broken-word dictionary.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::vocab;

static O_BEFORE_DIGIT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\s|^)O(\d)").unwrap());
static O_AFTER_DIGIT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d)O(\s|$|,|\.)").unwrap());

// `0176` missed its decimal point; runs already behind a decimal point are
// fractional digits and must be left alone
static ZERO_PADDED_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"(^|[^\d.])0(\d{3,})\b").unwrap());

static EQ_DOUBLE_ZERO_TENTH: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\{?\w*\}?)=00\.0(\d+)").unwrap());
static EQ_DOUBLE_ZERO: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\{?\w*\}?)=00\.(\d{1,2}\d+)").unwrap());
static SPACE_DOUBLE_ZERO_TENTH: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s00\.0(\d+)").unwrap());
static SPACE_DOUBLE_ZERO: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s00\.(\d{1,2}\d+)").unwrap());
static AFTER_DOUBLE_ZERO_TENTH: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([^\d])00\.0(\d+)").unwrap());
static AFTER_DOUBLE_ZERO: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([^\d])00\.(\d{1,2}\d+)").unwrap());
static VAR_EQ_DOUBLE_ZERO_TENTH: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([A-Za-z_])=00\.0").unwrap());
static VAR_EQ_DOUBLE_ZERO: Lazy<Regex> = Lazy::new(|| Regex::new(r"([A-Za-z_])=00\.").unwrap());
static WORD_EQ_DOUBLE_ZERO_TENTH: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\w+)=00\.0(\d+)").unwrap());
static WORD_EQ_DOUBLE_ZERO: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\w+)=00\.(\d+)").unwrap());

static BARE_DOUBLE_ZERO: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b00\.").unwrap());
static DOUBLED_DECIMAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d+)(\.0\.)").unwrap());
static TEN_MISSING_POINT: Lazy<Regex> = Lazy::new(|| Regex::new(r"=10\.(\d{3})").unwrap());

static MULTI_SPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"  +").unwrap());
static SPACE_BEFORE_PUNCT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+([,\.\;\:!])").unwrap());

/// Repair numeric artifacts and known broken word splits.
pub fn fix_numeric_artifacts(text: &str) -> String {
    let text = O_BEFORE_DIGIT.replace_all(text, "${1}0${2}");
    let text = O_AFTER_DIGIT.replace_all(&text, "${1}0${2}");

    // the `=00.` family first: a zero-padded value behind `=` keeps its
    // magnitude when the leading digit moves into the fraction
    let text = EQ_DOUBLE_ZERO_TENTH.replace_all(&text, "${1}=0.00${2}");
    let text = EQ_DOUBLE_ZERO.replace_all(&text, "${1}=0.0${2}");
    let text = SPACE_DOUBLE_ZERO_TENTH.replace_all(&text, " 0.00${1}");
    let text = SPACE_DOUBLE_ZERO.replace_all(&text, " 0.0${1}");
    let text = AFTER_DOUBLE_ZERO_TENTH.replace_all(&text, "${1}0.00${2}");
    let text = AFTER_DOUBLE_ZERO.replace_all(&text, "${1}0.0${2}");
    let text = VAR_EQ_DOUBLE_ZERO_TENTH.replace_all(&text, "${1}=0.00");
    let text = VAR_EQ_DOUBLE_ZERO.replace_all(&text, "${1}=0.0");
    let text = WORD_EQ_DOUBLE_ZERO_TENTH.replace_all(&text, "${1}=0.00${2}");
    let text = WORD_EQ_DOUBLE_ZERO.replace_all(&text, "${1}=0.0${2}");

    let text = ZERO_PADDED_RUN.replace_all(&text, "${1}0.${2}");
    let mut text = BARE_DOUBLE_ZERO.replace_all(&text, "0.0").into_owned();

    // doubled decimal points from overlapping repairs
    while DOUBLED_DECIMAL.is_match(&text) {
        text = DOUBLED_DECIMAL.replace_all(&text, "${1}0.").into_owned();
    }

    let text = TEN_MISSING_POINT.replace_all(&text, "=1.0${1}");

    let text = MULTI_SPACE.replace_all(&text, " ");
    let mut text = SPACE_BEFORE_PUNCT.replace_all(&text, "${1}").into_owned();

    for (broken, fixed) in vocab::BROKEN_WORDS {
        text = text.replace(broken, fixed);
    }

    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_padded_equation() {
        assert_eq!(fix_numeric_artifacts("Z=00.0882"), "Z=0.00882");
    }

    #[test]
    fn test_subscripted_zero_padded_equation() {
        assert_eq!(fix_numeric_artifacts("Z_{12}=00.0882"), "Z_{12}=0.00882");
    }

    #[test]
    fn test_letter_o_for_zero() {
        assert_eq!(fix_numeric_artifacts("about O5 units"), "about 05 units");
        assert_eq!(fix_numeric_artifacts("roughly 5O units"), "roughly 50 units");
    }

    #[test]
    fn test_missing_decimal_point() {
        assert_eq!(fix_numeric_artifacts("a factor of 0176"), "a factor of 0.176");
    }

    #[test]
    fn test_fraction_digits_not_split() {
        assert_eq!(fix_numeric_artifacts("r equals 0.0882 exactly"), "r equals 0.0882 exactly");
    }

    #[test]
    fn test_ten_missing_point() {
        assert_eq!(fix_numeric_artifacts("grows by x=10.267"), "grows by x=1.0267");
    }

    #[test]
    fn test_space_before_punctuation() {
        assert_eq!(fix_numeric_artifacts("the value , as shown"), "the value, as shown");
    }

    #[test]
    fn test_broken_words() {
        assert_eq!(fix_numeric_artifacts("the re is a for mula"), "there is a formula");
    }

    #[test]
    fn test_idempotent() {
        let once = fix_numeric_artifacts("Z=00.0882 and the re is O5");
        assert_eq!(fix_numeric_artifacts(&once), once);
    }
}
