//! Approximation symbol normalization.
//!
//! Tilde and the various mangled `\sim` spellings all mean "approximately"
//! in this corpus; they are rewritten to a canonical `\approx`. A literal
//! `\gamma` is an extraction artifact and is dropped.

use once_cell::sync::Lazy;
use regex::Regex;

static SIM_VARIANTS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\^?\{?\\sim\}?").unwrap());
static GAMMA_ARTIFACT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\\gamma").unwrap());

/// Rewrite tilde and `\sim` markers to ` \approx `, drop spurious `\gamma`.
pub fn fix_tilde_and_approx(text: &str) -> String {
    let text = SIM_VARIANTS.replace_all(text, " \\approx ");
    let text = text.replace('~', " \\approx ");
    GAMMA_ARTIFACT.replace_all(&text, " ").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tilde_becomes_approx() {
        let fixed = fix_tilde_and_approx("x ~ 2.7%");
        assert!(fixed.contains("\\approx"));
        assert!(!fixed.contains('~'));
    }

    #[test]
    fn test_sim_variants() {
        assert!(fix_tilde_and_approx("y \\sim 5").contains("\\approx"));
        assert!(fix_tilde_and_approx("y ^{\\sim} 5").contains("\\approx"));
    }

    #[test]
    fn test_gamma_dropped() {
        assert_eq!(fix_tilde_and_approx("a \\gamma b"), "a   b");
    }

    #[test]
    fn test_idempotent() {
        let once = fix_tilde_and_approx("x ~ 2.7%");
        assert_eq!(fix_tilde_and_approx(&once), once);
    }
}
