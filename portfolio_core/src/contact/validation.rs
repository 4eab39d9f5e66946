//! Field rules shared by the client controller and the submission endpoint.

use lazy_static::lazy_static;
use regex::Regex;
use validator::ValidationError;

lazy_static! {
    // local-part @ domain . tld, no whitespace and no second '@' in any run
    static ref EMAIL_REGEX: Regex = Regex::new(
        r"^[^\s@]+@[^\s@]+\.[^\s@]+$"
    ).unwrap();
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if email.trim().is_empty() {
        return Err(ValidationError::new("email_required"));
    }

    if !EMAIL_REGEX.is_match(email) {
        return Err(ValidationError::new("email_format"));
    }

    Ok(())
}

pub fn validate_required(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("required"));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_addresses() {
        assert!(is_valid_email("sam@example.com"));
        assert!(is_valid_email("a@b.c"));
        assert!(is_valid_email("first.last+tag@sub.domain.io"));
    }

    #[test]
    fn rejects_malformed_addresses() {
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("missing-domain@"));
        assert!(!is_valid_email("@missing-local.com"));
        assert!(!is_valid_email("no-tld@domain"));
        assert!(!is_valid_email("trailing-dot@domain."));
        assert!(!is_valid_email("spa ce@domain.com"));
        assert!(!is_valid_email("two@@signs.com"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn required_rule_trims_before_checking() {
        assert!(validate_required("Sam").is_ok());
        assert!(validate_required("  padded  ").is_ok());
        assert!(validate_required("").is_err());
        assert!(validate_required("   \t\n").is_err());
    }

    #[test]
    fn email_rule_distinguishes_empty_from_malformed() {
        assert_eq!(
            validate_email("").unwrap_err().code,
            "email_required"
        );
        assert_eq!(
            validate_email("not-an-email").unwrap_err().code,
            "email_format"
        );
        assert!(validate_email("sam@example.com").is_ok());
    }
}
