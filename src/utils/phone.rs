use once_cell::sync::Lazy;
use regex::Regex;

/// National mobile numbers: optional country prefix, a known operator digit,
/// then seven subscriber digits.
static MOBILE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(009665|9665|\+9665|05|5)(5|0|3|6|4|9|1|8|7)([0-9]{7})$")
        .expect("mobile pattern is a valid regex")
});

/// Membership test only. The number is not normalized.
pub fn validate_phone(phone: &str) -> bool {
    MOBILE_PATTERN.is_match(phone)
}

#[cfg(test)]
mod tests {
    use super::validate_phone;

    #[test]
    fn accepts_local_and_international_forms() {
        assert!(validate_phone("0512345678"));
        assert!(validate_phone("+966512345678"));
        assert!(validate_phone("00966551234567"));
        assert!(validate_phone("551234567"));
    }

    #[test]
    fn rejects_everything_else() {
        assert!(!validate_phone("12345"));
        assert!(!validate_phone("0522345678"));
        assert!(!validate_phone(" 0512345678"));
        assert!(!validate_phone("05123456789"));
        assert!(!validate_phone(""));
    }
}
