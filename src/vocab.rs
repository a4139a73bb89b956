//! Closed vocabulary lists driving the repair stages.
//!
//! Every list here was collected empirically against the exam corpus. They
//! are kept as plain data so a newly observed defect can be patched by
//! extending a list instead of touching stage logic.

/// Financial terms that show up concatenated with the word that follows them
/// (`profitmargin`, `couponrate`). A term is split from a trailing run of
/// three or more lowercase letters, case-insensitively.
pub const FINANCIAL_TERMS: &[&str] = &[
    "profit",
    "loss",
    "price",
    "rate",
    "value",
    "market",
    "bond",
    "fund",
    "asset",
    "stock",
    "company",
    "investment",
    "return",
    "capital",
    "risk",
    "portfolio",
    "dividend",
    "coupon",
    "maturity",
    "option",
    "forward",
    "swap",
    "derivative",
    "security",
    "equity",
    "interest",
    "yield",
    "duration",
];

/// Common function words that lose the space before the next sentence
/// (`theAnswer`, `andThe`). Matched case-sensitively against a lowercase word
/// immediately followed by an uppercase letter.
pub const FUNCTION_WORDS: &[&str] = &[
    "the",
    "and",
    "for",
    "with",
    "from",
    "that",
    "this",
    "therefore",
    "because",
    "between",
];

/// LaTeX command names known to appear in the corpus, with or without their
/// escape marker. Anything outside this list is left alone.
pub const LATEX_COMMANDS: &[&str] = &[
    "times", "div", "frac", "sqrt", "sum", "prod", "int",
    "alpha", "beta", "gamma", "delta", "epsilon", "theta", "lambda", "mu", "sigma", "pi",
    "leq", "geq", "neq", "approx", "sim", "equiv",
    "infty", "partial", "nabla", "cdot",
    "left", "right", "big", "Big",
];

/// Literal find/replace pairs for word splits the spacing repairs get wrong,
/// plus a few splits already present in the source text.
pub const BROKEN_WORDS: &[(&str, &str)] = &[
    ("the re ", "there "),
    ("the refore", "therefore"),
    ("the ir ", "their "),
    ("the se ", "these "),
    ("with in ", "within "),
    ("with out ", "without "),
    ("for ward ", "forward "),
    ("for mula", "formula"),
    ("for egone", "foregone"),
    ("in correct", "incorrect"),
    ("share holder", "shareholder"),
    ("market place", "marketplace"),
    ("strate gy", "strategy"),
    ("othe rwise", "otherwise"),
    ("initial ly", "initially"),
    ("gathe rs", "gathers"),
    ("infor mation", "information"),
    ("theresult", "the result"),
    ("therecord", "the record"),
    ("thesecond", "the second"),
    ("thefirst", "the first"),
    ("thethird", "the third"),
    ("thelast", "the last"),
    ("Year s", "Years"),
    ("year s", "years"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lists_are_nonempty() {
        assert!(!FINANCIAL_TERMS.is_empty());
        assert!(!FUNCTION_WORDS.is_empty());
        assert!(!LATEX_COMMANDS.is_empty());
        assert!(!BROKEN_WORDS.is_empty());
    }

    #[test]
    fn test_latex_commands_are_bare_names() {
        for cmd in LATEX_COMMANDS {
            assert!(!cmd.starts_with('\\'), "command {} carries its escape", cmd);
            assert!(cmd.chars().all(|c| c.is_ascii_alphabetic()));
        }
    }
}
