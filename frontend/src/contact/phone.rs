/// Re-render raw phone input as `(DDD) DDD-DDDD`, progressively as digits
/// accumulate. Everything that isn't an ASCII digit is dropped and digits
/// past the tenth are truncated, so the result is stable when fed back in.
pub fn format_phone_number(raw: &str) -> String {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).take(10).collect();

    match digits.len() {
        0..=2 => digits,
        3..=5 => format!("({}) {}", &digits[..3], &digits[3..]),
        _ => format!("({}) {}-{}", &digits[..3], &digits[3..6], &digits[6..]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_ten_digits() {
        assert_eq!(format_phone_number("1234567890"), "(123) 456-7890");
        assert_eq!(format_phone_number("123.456.7890"), "(123) 456-7890");
    }

    #[test]
    fn formats_progressively() {
        assert_eq!(format_phone_number(""), "");
        assert_eq!(format_phone_number("1"), "1");
        assert_eq!(format_phone_number("12"), "12");
        assert_eq!(format_phone_number("123"), "(123) ");
        assert_eq!(format_phone_number("12345"), "(123) 45");
        assert_eq!(format_phone_number("123456"), "(123) 456-");
        assert_eq!(format_phone_number("1234567"), "(123) 456-7");
    }

    #[test]
    fn drops_digits_past_the_tenth() {
        assert_eq!(format_phone_number("+1 (555) 123-45678"), "(155) 512-3456");
        assert_eq!(format_phone_number("(123) 456-78901"), "(123) 456-7890");
    }

    #[test]
    fn ignores_non_digit_input() {
        assert_eq!(format_phone_number("abc-def"), "");
        assert_eq!(format_phone_number("٣٤٥"), "");
    }

    #[test]
    fn is_idempotent() {
        for raw in ["", "1", "12", "123", "1234", "12345", "123456", "555123456789", "(987) 654-3210"] {
            let once = format_phone_number(raw);
            assert_eq!(format_phone_number(&once), once, "{raw}");
        }
    }
}
