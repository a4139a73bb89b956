//! Unpaired math-delimiter detection and best-effort repair.
//!
//! Math mode must open and close in balanced pairs within a physical line.
//! An odd count of unescaped `$` on a line is a correctness violation; a
//! small set of known-safe repairs is attempted, and anything still odd is
//! left as-is for the caller to surface. Detection never guarantees
//! resolution, and repairs never touch a balanced line.

/// True when the `$` at byte `i` is escaped (preceded by a double
/// backslash).
fn is_escaped(bytes: &[u8], i: usize) -> bool {
    i >= 2 && bytes[i - 1] == b'\\' && bytes[i - 2] == b'\\'
}

/// Count unescaped `$` characters on a single line.
fn unescaped_dollars(line: &str) -> usize {
    let bytes = line.as_bytes();
    (0..bytes.len())
        .filter(|&i| bytes[i] == b'$' && !is_escaped(bytes, i))
        .count()
}

/// Number of lines whose unescaped delimiter count is odd.
pub fn unpaired_lines(text: &str) -> usize {
    text.split('\n')
        .filter(|line| unescaped_dollars(line) % 2 == 1)
        .count()
}

fn repair_line(line: &str) -> String {
    if unescaped_dollars(line) % 2 == 0 {
        return line.to_string();
    }

    let bytes = line.as_bytes();

    // a `$` directly followed by a digit is currency the protection stage
    // missed; escaping the first one restores even parity
    for i in 0..bytes.len() {
        if bytes[i] == b'$'
            && !is_escaped(bytes, i)
            && i + 1 < bytes.len()
            && bytes[i + 1].is_ascii_digit()
        {
            let mut fixed = String::with_capacity(line.len() + 2);
            fixed.push_str(&line[..i]);
            fixed.push_str("\\\\");
            fixed.push_str(&line[i..]);
            return fixed;
        }
    }

    // a dangling `$` after whitespace at end of line opens nothing
    if line.ends_with('$') && !is_escaped(bytes, bytes.len() - 1) {
        let head = &line[..line.len() - 1];
        if head.chars().last().is_some_and(|c| c.is_whitespace()) {
            return format!("{head}\\\\$");
        }
    }

    line.to_string()
}

/// Attempt known-safe repairs on lines with an odd unescaped-delimiter
/// count. Lines that stay odd are returned unchanged; use
/// [`unpaired_lines`] afterwards to count them.
pub fn repair_unpaired_dollars(text: &str) -> String {
    text.split('\n')
        .map(repair_line)
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_balanced_line_untouched() {
        let line = "the value $x_{1}$ is given";
        assert_eq!(repair_unpaired_dollars(line), line);
        assert_eq!(unpaired_lines(line), 0);
    }

    #[test]
    fn test_missed_currency_escaped() {
        let line = "pay $5 toward $x_{1}$";
        let fixed = repair_unpaired_dollars(line);
        assert_eq!(fixed, "pay \\\\$5 toward $x_{1}$");
        assert_eq!(unpaired_lines(&fixed), 0);
    }

    #[test]
    fn test_dangling_delimiter_at_end_of_line() {
        let fixed = repair_unpaired_dollars("a stray sign $");
        assert_eq!(fixed, "a stray sign \\\\$");
        assert_eq!(unpaired_lines(&fixed), 0);
    }

    #[test]
    fn test_unresolvable_line_left_alone() {
        let line = "an odd $ sits here";
        assert_eq!(repair_unpaired_dollars(line), line);
        assert_eq!(unpaired_lines(line), 1);
    }

    #[test]
    fn test_repair_never_breaks_even_lines() {
        let balanced = "one $a$ and $b$ pair\nand $5 here";
        let fixed = repair_unpaired_dollars(balanced);
        // first line was even and must stay even
        assert_eq!(unescaped_dollars(fixed.split('\n').next().unwrap()) % 2, 0);
    }

    #[test]
    fn test_escaped_dollars_not_counted() {
        assert_eq!(unpaired_lines("costs \\\\$50 in total"), 0);
    }

    #[test]
    fn test_multiline_counts_per_line() {
        let text = "fine $x$ line\nbad $ line\nanother bad $";
        assert_eq!(unpaired_lines(text), 2);
    }
}
