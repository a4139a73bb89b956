//! Currency protection: the two-phase protect/restore contract.
//!
//! A `$` directly followed by a digit is a currency amount, not a math
//! delimiter. Before math wrapping runs, every such `$` is swapped for an
//! internal sentinel so the wrapping stage cannot mistake it for a
//! delimiter; after wrapping the sentinel becomes an escaped `\\$`.
//!
//! `Year $1` is the exception: the `$` is an extraction artifact and the
//! text means `Year 1`, so the sign is dropped outright.

use once_cell::sync::Lazy;
use regex::Regex;

/// Placeholder substituted for a currency `$` between the protect and
/// restore phases. Never appears in the final output.
pub const SENTINEL: &str = "<<<DOLLAR>>>";

static YEAR_DOLLAR_UPPER: Lazy<Regex> = Lazy::new(|| Regex::new(r"Year \$(\d+)").unwrap());
static YEAR_DOLLAR_LOWER: Lazy<Regex> = Lazy::new(|| Regex::new(r"year \$(\d+)").unwrap());
static CURRENCY_DIGIT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\$(\d)").unwrap());

/// Replace currency dollar signs with the sentinel. Runs before math
/// wrapping.
pub fn protect_currency(text: &str) -> String {
    // "Year $1" means "Year 1", not one dollar
    let text = YEAR_DOLLAR_UPPER.replace_all(text, "Year ${1}");
    let text = YEAR_DOLLAR_LOWER.replace_all(&text, "year ${1}");

    let text = CURRENCY_DIGIT
        .replace_all(&text, format!("{SENTINEL}${{1}}").as_str())
        .into_owned();

    // `$` used as a unit marker ("amounts in $ thousands")
    let text = text.replace("in $ ", &format!("in {SENTINEL} "));
    let text = text.replace("(in $ ", &format!("(in {SENTINEL} "));
    let text = text.replace("in$ ", &format!("in{SENTINEL} "));
    text.replace("(in$ ", &format!("(in{SENTINEL} "))
}

/// Convert the sentinel back to an escaped currency delimiter. Runs after
/// math wrapping.
pub fn restore_currency(text: &str) -> String {
    text.replace(SENTINEL, "\\\\$")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_dollar_is_not_currency() {
        assert_eq!(protect_currency("Year $1"), "Year 1");
        assert_eq!(protect_currency("in year $3 the cash flow"), "in year 3 the cash flow");
    }

    #[test]
    fn test_currency_becomes_sentinel() {
        assert_eq!(protect_currency("$50 fee"), format!("{SENTINEL}50 fee"));
        assert_eq!(protect_currency("costs $1,250"), format!("costs {SENTINEL}1,250"));
    }

    #[test]
    fn test_unit_marker_contexts() {
        assert_eq!(
            protect_currency("amounts in $ thousands"),
            format!("amounts in {SENTINEL} thousands")
        );
    }

    #[test]
    fn test_math_delimiters_left_alone() {
        assert_eq!(protect_currency("$x$ is unknown"), "$x$ is unknown");
    }

    #[test]
    fn test_restore_escapes_dollar() {
        let protected = protect_currency("$50 fee");
        assert_eq!(restore_currency(&protected), "\\\\$50 fee");
    }

    #[test]
    fn test_restore_is_idempotent() {
        let restored = restore_currency(&protect_currency("pay $9 now"));
        assert_eq!(restore_currency(&restored), restored);
    }
}
