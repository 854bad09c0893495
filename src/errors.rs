use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};

/// Errors raised while parsing lane operands, byte specs, ranges and op names.
///
/// The lane primitives themselves are total; only text input can fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Not 16 hex digits (after an optional `0x` and `_` separators)
    InvalidLane { input: String, reason: String },
    /// Not a single ASCII character, `0xNN` or a decimal 0-255
    InvalidByte { input: String },
    /// Not of the form `LO-HI`
    InvalidRange { input: String, reason: String },
    /// No operation with this name
    UnknownOp {
        name: String,
        suggestion: Option<String>,
    },
    /// Operation called with the wrong number of lane operands
    WrongArity {
        op: String,
        expected: usize,
        actual: usize,
    },
}

impl ParseError {
    /// Create an InvalidLane error
    pub fn invalid_lane(input: &str, reason: impl Into<String>) -> Self {
        ParseError::InvalidLane {
            input: input.to_string(),
            reason: reason.into(),
        }
    }

    /// Create an InvalidRange error
    pub fn invalid_range(input: &str, reason: impl Into<String>) -> Self {
        ParseError::InvalidRange {
            input: input.to_string(),
            reason: reason.into(),
        }
    }

    /// Create an UnknownOp error, suggesting the closest known name
    pub fn unknown_op(name: &str, known: &[&str]) -> Self {
        ParseError::UnknownOp {
            name: name.to_string(),
            suggestion: find_closest_name(name, known),
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let use_color = should_use_color();
        if use_color {
            write!(f, "\x1b[1;31merror:\x1b[0m ")?;
        } else {
            write!(f, "error: ")?;
        }

        match self {
            ParseError::InvalidLane { input, reason } => {
                writeln!(f, "invalid lane '{}': {}", input, reason)?;
                write_hint(f, use_color, "lanes are 16 hex digits, e.g. 0x4142_4344_4546_4748")
            }
            ParseError::InvalidByte { input } => {
                writeln!(f, "invalid byte '{}'", input)?;
                write_hint(f, use_color, "use a single ASCII character, 0xNN, or a number 0-255")
            }
            ParseError::InvalidRange { input, reason } => {
                writeln!(f, "invalid byte range '{}': {}", input, reason)?;
                write_hint(f, use_color, "ranges look like A-Z or 0x30-0x39")
            }
            ParseError::UnknownOp { name, suggestion } => {
                writeln!(f, "unknown operation '{}'", name)?;
                match suggestion {
                    Some(s) => write_hint(f, use_color, &format!("did you mean '{}'?", s)),
                    None => write_hint(f, use_color, "run `swar op --help` to list operations"),
                }
            }
            ParseError::WrongArity {
                op,
                expected,
                actual,
            } => {
                let plural = if *expected == 1 { "" } else { "s" };
                write!(
                    f,
                    "'{}' takes {} lane operand{}, got {}",
                    op, expected, plural, actual
                )
            }
        }
    }
}

impl std::error::Error for ParseError {}

fn write_hint(f: &mut fmt::Formatter<'_>, use_color: bool, hint: &str) -> fmt::Result {
    if use_color {
        write!(f, "\x1b[1;36mhint:\x1b[0m {}", hint)
    } else {
        write!(f, "hint: {}", hint)
    }
}

static COLOR_DISABLED: AtomicBool = AtomicBool::new(false);

/// Turn off ANSI colour in error messages for the rest of the process.
pub fn disable_color() {
    COLOR_DISABLED.store(true, Ordering::Relaxed);
}

/// Check if colored output should be used
fn should_use_color() -> bool {
    if COLOR_DISABLED.load(Ordering::Relaxed) {
        return false;
    }

    // Respect NO_COLOR environment variable
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    use std::io::IsTerminal;
    std::io::stderr().is_terminal()
}

/// Calculate Levenshtein distance between two strings
fn levenshtein_distance(s1: &str, s2: &str) -> usize {
    let len2 = s2.chars().count();
    if s1.is_empty() {
        return len2;
    }

    let mut prev_row: Vec<usize> = (0..=len2).collect();
    let mut curr_row = vec![0; len2 + 1];

    for (i, c1) in s1.chars().enumerate() {
        curr_row[0] = i + 1;
        for (j, c2) in s2.chars().enumerate() {
            let cost = usize::from(c1 != c2);
            curr_row[j + 1] = (curr_row[j] + 1)
                .min(prev_row[j + 1] + 1)
                .min(prev_row[j] + cost);
        }
        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[len2]
}

/// Find the closest known name within a small edit distance
pub fn find_closest_name(name: &str, known: &[&str]) -> Option<String> {
    // 1-2 character typos for short names, up to 3 for longer names
    let threshold = if name.chars().count() < 5 { 2 } else { 3 };

    known
        .iter()
        .map(|candidate| (levenshtein_distance(name, candidate), candidate))
        .filter(|(distance, _)| *distance <= threshold)
        .min_by_key(|(distance, _)| *distance)
        .map(|(_, candidate)| candidate.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levenshtein_distance() {
        assert_eq!(levenshtein_distance("less", "less"), 0);
        assert_eq!(levenshtein_distance("min", "max"), 2);
        assert_eq!(levenshtein_distance("add-sta", "add-sat"), 2);
        assert_eq!(levenshtein_distance("", "equal"), 5);
    }

    #[test]
    fn test_find_closest_name() {
        let known = ["equal", "less", "greater", "add-wrap", "add-sat"];
        assert_eq!(find_closest_name("equl", &known), Some("equal".to_string()));
        assert_eq!(find_closest_name("add-wrp", &known), Some("add-wrap".to_string()));
        assert_eq!(find_closest_name("popcount-per-nibble", &known), None);
    }

    #[test]
    fn test_find_closest_name_counts_chars() {
        // Three chars but six bytes: the short-name threshold of 2 applies.
        assert_eq!(levenshtein_distance("\u{e9}\u{e9}\u{e9}", "min"), 3);
        assert_eq!(find_closest_name("\u{e9}\u{e9}\u{e9}", &["min"]), None);
        assert_eq!(find_closest_name("m\u{ed}n", &["min"]), Some("min".to_string()));
    }

    #[test]
    fn test_disable_color_strips_escapes() {
        disable_color();
        let err = ParseError::unknown_op("ad-sat", &["add-sat"]);
        let text = err.to_string();
        assert!(!text.contains('\x1b'), "{text:?}");
        assert!(text.starts_with("error: unknown operation 'ad-sat'"));
        assert!(text.ends_with("hint: did you mean 'add-sat'?"));
    }

    #[test]
    fn test_display_messages() {
        let err = ParseError::WrongArity {
            op: "select".to_string(),
            expected: 3,
            actual: 2,
        };
        assert!(err.to_string().ends_with("'select' takes 3 lane operands, got 2"));

        let err = ParseError::unknown_op("mni", &["min", "max"]);
        let shown = err.to_string();
        assert!(shown.contains("unknown operation 'mni'"));
        assert!(shown.contains("did you mean 'min'?"));
    }
}
