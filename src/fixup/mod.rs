//! Second-pass targeted repairs.
//!
//! After the general pipeline ran over the corpus, a residue of specific
//! defects remained: formulas split across delimiters, digits glued to
//! year labels, misplaced delimiters inside decimal fractions. Each rule
//! here patches one observed defect; the order matches the order the
//! defects compound in.

use once_cell::sync::Lazy;
use regex::Regex;

static EQUATION_INTRO: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\$\(equation also shown as \$(\d+)=").unwrap());

static SHOWN_AS_MISSING_EQ: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"shown as (\d+) \$(\d+)/\(1\+r\)\^\{(\d+)\}\.\$").unwrap());

static RUN_ON_FORMULAS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\$\d+=.+?\^\{\d+\})\s+(\d+/.+=.+?\^\{\d+\}\$)").unwrap());

static SPLIT_SUPERSCRIPT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\$(\d+)=(\d+)/\(1\+r\)\$\^\{(\d+)\}\$").unwrap());

static EQ_DOUBLE_ZERO: Lazy<Regex> = Lazy::new(|| Regex::new(r"([A-Z])=00\.0(\d+)").unwrap());
static SUB_EQ_DOUBLE_ZERO_TENTH: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([A-Z]_\{\d+\})=00\.0(\d+)").unwrap());
static SUB_EQ_DOUBLE_ZERO: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([A-Z]_\{\d+\})=00\.(\d+)").unwrap());

static TRAILING_PERIOD: Lazy<Regex> = Lazy::new(|| Regex::new(r"([A-Z]=0\.\d+)\.").unwrap());

static YEAR_GLUED_AMOUNT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Year \$(\d)(\d{3})\$").unwrap());

static MILLION_PERCENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"million (\d+%)").unwrap());
static BILLION_PERCENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"billion (\d+%)").unwrap());

static SPLIT_FRACTION_EQ: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\$\(([0-9.+-]+)\)\$=(\d+)\.\$(\d+)/(\d+)\$\.(\d+)").unwrap());

static FORWARD_PAYOFF: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[X-F\$\(T\)/\(1\+r\)\$\]").unwrap());

static SPLIT_DECIMAL_FRACTION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+)\.\$(\d+)/(\d+)\$\.(\d+)").unwrap());

static OVER_ESCAPED_CURRENCY: Lazy<Regex> = Lazy::new(|| Regex::new(r"\\\\\\\\\$").unwrap());

static PERIOD_BEFORE_CLOSE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\.\$").unwrap());

/// Apply the targeted dollar-sign repairs to one text value.
pub fn fix_dollar_signs(text: &str) -> String {
    // prose that got wrapped as math
    let text = text.replace("$profit/loss$", "profit/loss");

    let text = EQUATION_INTRO.replace_all(&text, "(equation also shown as $$${1}=");
    let text = SHOWN_AS_MISSING_EQ.replace_all(&text, "shown as $$${1}=${2}/(1+r)^{${3}}$$)");
    let text = RUN_ON_FORMULAS.replace_all(&text, "${1}$$, $$${2}");
    let text = SPLIT_SUPERSCRIPT.replace_all(&text, "$$${1}=${2}/(1+r)^{${3}}$$)");

    let text = EQ_DOUBLE_ZERO.replace_all(&text, "${1}=0.00${2}");
    let text = SUB_EQ_DOUBLE_ZERO_TENTH.replace_all(&text, "${1}=0.00${2}");
    let text = SUB_EQ_DOUBLE_ZERO.replace_all(&text, "${1}=0.0${2}");

    let text = TRAILING_PERIOD.replace_all(&text, "${1}");

    let text = YEAR_GLUED_AMOUNT.replace_all(&text, "Year ${1}: $$${2}");

    let text = MILLION_PERCENT.replace_all(&text, "million × ${1}");
    let text = BILLION_PERCENT.replace_all(&text, "billion × ${1}");

    let text = SPLIT_FRACTION_EQ.replace_all(&text, "$$(${1})=${2}.${3}/${4}.${5}$$");
    let text = FORWARD_PAYOFF.replace_all(&text, "$$[X-F(T)/(1+r)]$$");

    let text = text.replace(
        "$(cash equivalents and short-term investments)$",
        "(cash equivalents and short-term investments)",
    );

    let text = SPLIT_DECIMAL_FRACTION.replace_all(&text, "${1}.${2}/${3}.${4}");

    let text = OVER_ESCAPED_CURRENCY.replace_all(&text, "\\\\$$");

    PERIOD_BEFORE_CLOSE.replace_all(&text, "$$").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prose_unwrapped() {
        assert_eq!(
            fix_dollar_signs("the $profit/loss$ on the trade"),
            "the profit/loss on the trade"
        );
    }

    #[test]
    fn test_year_glued_amount() {
        assert_eq!(fix_dollar_signs("Year $1125$"), "Year 1: $125");
    }

    #[test]
    fn test_zero_padded_value() {
        assert_eq!(fix_dollar_signs("Z=00.0882"), "Z=0.00882");
        assert_eq!(fix_dollar_signs("Z_{12}=00.0882"), "Z_{12}=0.00882");
    }

    #[test]
    fn test_trailing_period_in_formula() {
        assert_eq!(fix_dollar_signs("so Z=0.00882. follows"), "so Z=0.00882 follows");
    }

    #[test]
    fn test_magnitude_times_percent() {
        assert_eq!(fix_dollar_signs("-$10 million 20% of that"), "-$10 million × 20% of that");
    }

    #[test]
    fn test_split_decimal_fraction() {
        assert_eq!(fix_dollar_signs("gives 0.$11/0$.08 overall"), "gives 0.11/0.08 overall");
    }

    #[test]
    fn test_period_before_closing_delimiter() {
        assert_eq!(
            fix_dollar_signs("$90=100/(1+Z_{12})^{12}.$"),
            "$90=100/(1+Z_{12})^{12}$"
        );
    }

    #[test]
    fn test_over_escaped_currency_collapses() {
        assert_eq!(fix_dollar_signs("costs \\\\\\\\$43 per share"), "costs \\\\$43 per share");
    }

    #[test]
    fn test_plain_text_untouched() {
        let text = "no residual defects in this sentence";
        assert_eq!(fix_dollar_signs(text), text);
    }
}
