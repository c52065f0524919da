//! Color canonicalization for the formatting variables.

use crate::language::diagnostics::Diagnostics;

macro_rules! regex {
    ($pattern:expr) => {{
        use std::sync::OnceLock;
        static REGEX: OnceLock<regex::Regex> = OnceLock::new();
        REGEX.get_or_init(|| regex::Regex::new($pattern).unwrap_or_else(|e| panic!("{}", e)))
    }};
}

/// The fallback for unusable color input: loud magenta, impossible to miss.
pub const FALLBACK: &str = "FF00FF";

/// Normalize any color-ish string to 6 or 8 uppercase hex digits. Short
/// forms expand: one digit greys, two digits are grey plus alpha, three and
/// four digit forms double each digit. Unusable input falls back to magenta;
/// this function reports but never fails.
pub fn normalize_color(input: &str, diagnostics: &mut Diagnostics) -> String {
    let re = regex!(r"[^0-9A-Fa-f]");
    let hex = re
        .replace_all(input, "")
        .to_uppercase();

    let digits: Vec<char> = hex
        .chars()
        .collect();

    match digits.len() {
        1 => hex.repeat(6),
        2 => {
            let mut output = digits[0]
                .to_string()
                .repeat(6);
            output.push_str(
                &digits[1]
                    .to_string()
                    .repeat(2),
            );
            output
        }
        3 | 4 => digits
            .iter()
            .map(|digit| {
                digit
                    .to_string()
                    .repeat(2)
            })
            .collect(),
        6 | 8 => hex,
        _ => {
            diagnostics.warning(&format!("unusable color value '{}'", input));
            FALLBACK.to_string()
        }
    }
}

#[cfg(test)]
mod verify {
    use super::*;

    fn normalize(input: &str) -> String {
        let mut diagnostics = Diagnostics::new();
        normalize_color(input, &mut diagnostics)
    }

    #[test]
    fn six_and_eight_digit_forms_pass_through() {
        assert_eq!(normalize("ff8000"), "FF8000");
        assert_eq!(normalize("FF800080"), "FF800080");
    }

    #[test]
    fn short_forms_expand() {
        assert_eq!(normalize("f"), "FFFFFF");
        assert_eq!(normalize("a8"), "AAAAAA88");
        assert_eq!(normalize("f00"), "FF0000");
        assert_eq!(normalize("f008"), "FF000088");
    }

    #[test]
    fn decoration_is_scrubbed() {
        assert_eq!(normalize("#F00"), "FF0000");
        assert_eq!(normalize(" ff 80 00 "), "FF8000");
    }

    #[test]
    fn garbage_falls_back_to_magenta() {
        let mut diagnostics = Diagnostics::new();
        assert_eq!(normalize_color("", &mut diagnostics), FALLBACK);
        assert_eq!(normalize_color("fffff", &mut diagnostics), FALLBACK);
        assert_eq!(normalize_color("xyz", &mut diagnostics), FALLBACK);
        assert_eq!(diagnostics.warnings(), 3);
    }
}
