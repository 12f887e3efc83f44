/// Keeps only the ASCII digits of `input`. This is the canonical form of the
/// phone field; the display text is always derived from it.
pub fn digits_of(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).collect()
}

/// Formats raw phone input into the Brazilian national pattern, growing with
/// the number of digits typed:
///
/// - up to 2 digits: left as-is
/// - up to 6: `(31) 9999`
/// - up to 10: `(31) 9999-9999`
/// - 11 or more: `(31) 99999-9999`, extra digits dropped
///
/// Re-running the formatter on its own output is a no-op, which is what lets
/// the entry widget write the result back without looping.
pub fn format_phone(input: &str) -> String {
    let digits = digits_of(input);
    match digits.len() {
        0..=2 => digits,
        3..=6 => format!("({}) {}", &digits[..2], &digits[2..]),
        7..=10 => format!("({}) {}-{}", &digits[..2], &digits[2..6], &digits[6..]),
        _ => format!("({}) {}-{}", &digits[..2], &digits[2..7], &digits[7..11]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_inputs_stay_bare() {
        assert_eq!(format_phone(""), "");
        assert_eq!(format_phone("3"), "3");
        assert_eq!(format_phone("31"), "31");
    }

    #[test]
    fn area_code_gets_parenthesized_from_the_third_digit() {
        assert_eq!(format_phone("319"), "(31) 9");
        assert_eq!(format_phone("319999"), "(31) 9999");
    }

    #[test]
    fn hyphen_appears_from_the_seventh_digit() {
        assert_eq!(format_phone("3199999"), "(31) 9999-9");
        assert_eq!(format_phone("3199999999"), "(31) 9999-9999");
    }

    #[test]
    fn eleven_digit_mobile_number() {
        assert_eq!(format_phone("31999999999"), "(31) 99999-9999");
    }

    #[test]
    fn digits_past_the_eleventh_are_dropped() {
        assert_eq!(format_phone("3199999999912345"), "(31) 99999-9999");
    }

    #[test]
    fn non_digits_are_stripped_before_formatting() {
        assert_eq!(format_phone("31-99999-9999"), format_phone("31999999999"));
        assert_eq!(format_phone("(31) 99999-9999"), "(31) 99999-9999");
        assert_eq!(format_phone("3a1b 99x99./9-9999"), "(31) 99999-9999");
    }

    #[test]
    fn formatting_is_idempotent() {
        for input in ["", "3", "31", "319", "319999", "3199999", "3199999999", "31999999999"] {
            let once = format_phone(input);
            assert_eq!(format_phone(&once), once);
        }
    }

    #[test]
    fn digits_of_keeps_only_ascii_digits() {
        assert_eq!(digits_of("+55 (31) 99999-9999"), "5531999999999");
        assert_eq!(digits_of("no digits here"), "");
    }
}
