//! Math-expression wrapping.
//!
//! Scans for un-delimited mathematical substrings (assignment equations,
//! sub/superscripted variables, escaped commands, fraction-like
//! expressions) and wraps each in `$...$`. Matches are processed in reverse
//! source-position order within each pattern so insertions never shift the
//! offsets of matches that are still pending.

use once_cell::sync::Lazy;
use regex::Regex;

use super::currency::SENTINEL;

static WRAP_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        // equations with = and a braced variable: Z_{12}=0.00882
        r"([A-Za-z_]\{[^}]+\}\s*=\s*[0-9\.\-]+)",
        // variables with subscripts: X_{12}
        r"([A-Za-z]+_\{[^}]+\})",
        // superscripts on parentheses: (1+r)^{20}
        r"(\([^\)]+\)\^\{[^}]+\})",
        // standalone superscripts
        r"([A-Za-z0-9]+\^\{[^}]+\})",
        // escaped commands: \times, \alpha, \frac{...}
        r"(\\[a-z]+(?:\{[^}]*\})?)",
        // fractions: (X+Y)/(1+Z)
        r"(\([^)]+\)/\([^)]+\))",
        r"([A-Za-z_0-9\{\}]+/[A-Za-z_0-9\{\}]+)",
        // whole assignment fractions: PV=(PMT+FV)/(1+Z)
        r"([A-Za-z]+\s*=\s*\([^)]+\)/\([^)]+\))",
        r"([A-Za-z]+\s*=\s*[A-Za-z0-9_\{\}\(\)]+/[A-Za-z0-9_\{\}\(\)]+)",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

static DOUBLED_DELIMITERS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\$\$+").unwrap());
static WHITESPACE_PAIR: Lazy<Regex> = Lazy::new(|| Regex::new(r"\$\s+\$").unwrap());

/// True when `pos` falls inside an open `$...$` span. Sentinels and escaped
/// currency dollars are excluded from the parity count.
fn in_math_mode(text: &str, pos: usize) -> bool {
    let before = &text[..pos];
    let stripped = before.replace(SENTINEL, "").replace("\\\\$", "");
    stripped.matches('$').count() % 2 == 1
}

/// Wrap un-delimited math expressions in `$...$`.
pub fn wrap_math_expressions(text: &str) -> String {
    let mut result = text.to_string();

    for re in WRAP_PATTERNS.iter() {
        let spans: Vec<(usize, usize)> =
            re.find_iter(&result).map(|m| (m.start(), m.end())).collect();

        for &(start, end) in spans.iter().rev() {
            if in_math_mode(&result, start) {
                continue;
            }
            let matched = &result[start..end];
            // URLs and protected currency are not math
            if matched.contains("://") || matched.contains(SENTINEL) {
                continue;
            }
            // already delimiter-adjacent
            if start > 0 && result.as_bytes()[start - 1] == b'$' {
                continue;
            }
            if end < result.len() && result.as_bytes()[end] == b'$' {
                continue;
            }

            let mut wrapped = String::with_capacity(result.len() + 2);
            wrapped.push_str(&result[..start]);
            wrapped.push('$');
            wrapped.push_str(&result[start..end]);
            wrapped.push('$');
            wrapped.push_str(&result[end..]);
            result = wrapped;
        }
    }

    // collapse accidental doubled delimiters, drop pairs wrapping whitespace
    let result = DOUBLED_DELIMITERS.replace_all(&result, "$$");
    WHITESPACE_PAIR.replace_all(&result, " ").into_owned()
}
