//! LaTeX command escape repair.
//!
//! Known command names (see [`crate::vocab::LATEX_COMMANDS`]) must carry a
//! single leading backslash to render. The corpus has both bare commands
//! (`times 1.5`) and over-escaped ones (`\\\\times`); both are normalized.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::vocab;

// `\\\\cmd` (doubled escape) collapses to `\\cmd`
static OVER_ESCAPED: Lazy<Vec<(Regex, String)>> = Lazy::new(|| {
    vocab::LATEX_COMMANDS
        .iter()
        .map(|cmd| {
            (
                Regex::new(&format!(r"\\\\\\\\{cmd}")).unwrap(),
                format!("\\\\{cmd}"),
            )
        })
        .collect()
});

// a bare command gets its escape; the leading capture keeps the preceding
// character, which must not be a backslash or part of a longer word
static BARE_COMMANDS: Lazy<Vec<(Regex, String)>> = Lazy::new(|| {
    vocab::LATEX_COMMANDS
        .iter()
        .map(|cmd| {
            (
                Regex::new(&format!(r"(^|[^\w\\])({cmd})\b")).unwrap(),
                format!("${{1}}\\{cmd}"),
            )
        })
        .collect()
});

/// Normalize escape markers on the closed list of known math commands.
pub fn fix_latex_commands(text: &str) -> String {
    let mut text = text.to_string();
    for (re, repl) in OVER_ESCAPED.iter() {
        text = re.replace_all(&text, repl.as_str()).into_owned();
    }
    for (re, repl) in BARE_COMMANDS.iter() {
        text = re.replace_all(&text, repl.as_str()).into_owned();
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_command_gets_escape() {
        assert_eq!(fix_latex_commands("2 times 3"), "2 \\times 3");
        assert_eq!(fix_latex_commands("times 3"), "\\times 3");
    }

    #[test]
    fn test_escaped_command_untouched() {
        assert_eq!(fix_latex_commands("2 \\times 3"), "2 \\times 3");
    }

    #[test]
    fn test_over_escaped_collapses() {
        assert_eq!(fix_latex_commands("2 \\\\\\\\times 3"), "2 \\\\times 3");
    }

    #[test]
    fn test_command_inside_word_untouched() {
        assert_eq!(fix_latex_commands("maritime shipping"), "maritime shipping");
        assert_eq!(fix_latex_commands("the internal rate"), "the internal rate");
    }

    #[test]
    fn test_several_commands() {
        assert_eq!(fix_latex_commands("alpha leq beta"), "\\alpha \\leq \\beta");
    }
}
