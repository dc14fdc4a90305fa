//! Line splitter and value decoder for the netlist format.

/// One significant line of netlist text, split into tokens.
#[derive(Debug, Clone, PartialEq)]
pub struct Line<'a> {
    /// Line number (1-indexed)
    pub number: usize,
    /// Whitespace-separated tokens
    pub tokens: Vec<&'a str>,
}

/// Check if a trimmed line carries no device.
fn is_comment(line: &str) -> bool {
    line.is_empty() || line.starts_with('#')
}

/// Check if a raw line terminates the netlist.
/// Only an exact `.end` counts; surrounding whitespace disqualifies it.
fn is_end(line: &str) -> bool {
    line == ".end"
}

/// Split netlist text into significant lines.
///
/// Blank lines and `#` comments are skipped. Everything from a line that
/// is exactly `.end` onwards is ignored.
pub fn split_lines(input: &str) -> Vec<Line<'_>> {
    let mut lines = Vec::new();
    for (idx, raw) in input.lines().enumerate() {
        if is_end(raw) {
            break;
        }
        let line = raw.trim();
        if is_comment(line) {
            continue;
        }
        lines.push(Line {
            number: idx + 1,
            tokens: line.split_whitespace().collect(),
        });
    }
    lines
}

/// SI magnitude for a single-letter suffix (case-insensitive).
fn suffix_multiplier(suffix: char) -> Option<f64> {
    match suffix.to_ascii_lowercase() {
        't' => Some(1e12),
        'g' => Some(1e9),
        'x' => Some(1e6),
        'k' => Some(1e3),
        'm' => Some(1e-3),
        'u' => Some(1e-6),
        'n' => Some(1e-9),
        'p' => Some(1e-12),
        'f' => Some(1e-15),
        _ => None,
    }
}

/// Parse a number string with optional unit suffix.
///
/// `m` and `M` both mean milli; mega is `x`. Values that decode to
/// infinity or NaN are rejected.
pub fn parse_value(text: &str) -> Option<f64> {
    let text = text.trim();
    let last = text.chars().last()?;

    let (num_str, multiplier) = match suffix_multiplier(last) {
        Some(mult) => (&text[..text.len() - last.len_utf8()], mult),
        None => (text, 1.0),
    };

    num_str
        .parse::<f64>()
        .ok()
        .map(|v| v * multiplier)
        .filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: Option<f64>, b: Option<f64>) -> bool {
        match (a, b) {
            (Some(x), Some(y)) => (x - y).abs() < x.abs() * 1e-10 + 1e-15,
            (None, None) => true,
            _ => false,
        }
    }

    #[test]
    fn test_parse_value_exact() {
        assert_eq!(parse_value("12"), Some(12.0));
        assert_eq!(parse_value("1.2"), Some(1.2));
        assert_eq!(parse_value("1.2K"), Some(1200.0));
        assert_eq!(parse_value("1.2F"), Some(1.2e-15));
    }

    #[test]
    fn test_parse_value_suffixes() {
        assert!(approx_eq(parse_value("10k"), Some(10_000.0)));
        assert!(approx_eq(parse_value("100n"), Some(100e-9)));
        assert!(approx_eq(parse_value("4.7u"), Some(4.7e-6)));
        assert!(approx_eq(parse_value("1x"), Some(1_000_000.0)));
        assert!(approx_eq(parse_value("1M"), Some(1e-3)));
        assert!(approx_eq(parse_value("2g"), Some(2e9)));
        assert!(approx_eq(parse_value("3T"), Some(3e12)));
        assert!(approx_eq(parse_value("5p"), Some(5e-12)));
        assert!(approx_eq(parse_value("1e-9"), Some(1e-9)));
        assert!(approx_eq(parse_value("-2.5m"), Some(-2.5e-3)));
    }

    #[test]
    fn test_parse_value_rejects_garbage() {
        assert_eq!(parse_value(""), None);
        assert_eq!(parse_value("k"), None);
        assert_eq!(parse_value("12q"), None);
        assert_eq!(parse_value("1.2.3"), None);
        assert_eq!(parse_value("infinity"), None);
        assert_eq!(parse_value("-inf"), None);
        assert_eq!(parse_value("NaN"), None);
        assert_eq!(parse_value("1e308k"), None);
    }

    #[test]
    fn test_split_lines() {
        let input = "# divider\n\nV1 1 0 10\n  R1 1 2 1k  \n.end\nR2 2 0 1k\n";
        let lines = split_lines(input);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].number, 3);
        assert_eq!(lines[0].tokens, vec!["V1", "1", "0", "10"]);
        assert_eq!(lines[1].number, 4);
        assert_eq!(lines[1].tokens, vec!["R1", "1", "2", "1k"]);
    }

    #[test]
    fn test_end_must_match_exactly() {
        let input = "R1 1 0 1k\n  .end \nR2 2 0 1k\n.END\nR3 3 0 1k\n.end\nR4 4 0 1k\n";
        let lines = split_lines(input);
        let tags: Vec<&str> = lines.iter().map(|l| l.tokens[0]).collect();
        assert_eq!(tags, vec!["R1", ".end", "R2", ".END", "R3"]);
    }
}
