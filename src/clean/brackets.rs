//! Bracket normalization around currency and number literals.
//!
//! The upstream extraction wraps amounts in stray square brackets:
//! `$[25]`, `[$3 million]`, `[125]`.

use once_cell::sync::Lazy;
use regex::Regex;

static DOLLAR_BRACKETS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\$\[(\d+(?:\.\d+)?)\]").unwrap());

static BRACKETED_AMOUNT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[(\$\d+(?:\.\d+)?)\s*(million|billion|thousand)?\]").unwrap());

static BRACKETED_NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[(\$?\d+(?:\.\d+)?)\]").unwrap());

/// Remove stray brackets from currency and number literals.
pub fn fix_dollar_brackets(text: &str) -> String {
    let text = DOLLAR_BRACKETS.replace_all(text, "$$${1}");
    let text = BRACKETED_AMOUNT.replace_all(&text, "${1} ${2}");
    BRACKETED_NUMBER.replace_all(&text, "${1}").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brackets_after_dollar() {
        assert_eq!(fix_dollar_brackets("$[25]"), "$25");
        assert_eq!(fix_dollar_brackets("$[3.50]"), "$3.50");
    }

    #[test]
    fn test_brackets_around_amount() {
        assert_eq!(fix_dollar_brackets("[$3 million]"), "$3 million");
    }

    #[test]
    fn test_standalone_bracketed_number() {
        assert_eq!(fix_dollar_brackets("choose [125] units"), "choose 125 units");
    }

    #[test]
    fn test_plain_text_untouched() {
        assert_eq!(fix_dollar_brackets("a [note] in brackets"), "a [note] in brackets");
    }

    #[test]
    fn test_idempotent() {
        let once = fix_dollar_brackets("$[25] and [$3 million]");
        assert_eq!(fix_dollar_brackets(&once), once);
    }
}
