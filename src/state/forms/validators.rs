//! Pure field validators shared by all three forms

use regex::Regex;
use std::sync::LazyLock;

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"));

static NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z\s]{2,50}$").expect("valid name pattern"));

/// Minimum password length accepted by the portal
pub const PASSWORD_MIN_LENGTH: usize = 8;

/// Validity classification of a single field
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Validity {
    /// Field has not been validated yet (no visual state)
    #[default]
    Unchecked,
    Valid,
    Invalid(String),
}

impl Validity {
    pub fn is_valid(&self) -> bool {
        matches!(self, Validity::Valid)
    }

    /// User-facing error message, if any
    pub fn message(&self) -> Option<&str> {
        match self {
            Validity::Invalid(message) => Some(message),
            _ => None,
        }
    }
}

/// Validate a name field (first or last name). The label is used in the
/// error messages ("First name is required").
pub fn validate_name(label: &str, value: &str) -> Validity {
    let value = value.trim();
    if value.is_empty() {
        Validity::Invalid(format!("{label} is required"))
    } else if !NAME_PATTERN.is_match(value) {
        Validity::Invalid(format!(
            "{label} must be 2-50 characters and contain only letters"
        ))
    } else {
        Validity::Valid
    }
}

pub fn validate_email(value: &str) -> Validity {
    let value = value.trim();
    if value.is_empty() {
        Validity::Invalid("Corporate email is required".to_string())
    } else if !EMAIL_PATTERN.is_match(value) {
        Validity::Invalid("Please enter a valid corporate email address".to_string())
    } else {
        Validity::Valid
    }
}

pub fn validate_password(value: &str) -> Validity {
    if value.is_empty() {
        Validity::Invalid("Secure password is required".to_string())
    } else if value.chars().count() < PASSWORD_MIN_LENGTH {
        Validity::Invalid(format!(
            "Password must be at least {PASSWORD_MIN_LENGTH} characters"
        ))
    } else {
        Validity::Valid
    }
}

pub fn validate_confirm_password(password: &str, confirm: &str) -> Validity {
    if confirm.is_empty() {
        Validity::Invalid("Please confirm your password".to_string())
    } else if password != confirm {
        Validity::Invalid("Passwords do not match".to_string())
    } else {
        Validity::Valid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod name {
        use super::*;

        #[test]
        fn test_empty_is_required() {
            assert_eq!(
                validate_name("First name", ""),
                Validity::Invalid("First name is required".to_string())
            );
        }

        #[test]
        fn test_whitespace_only_is_required() {
            assert_eq!(
                validate_name("Last name", "   "),
                Validity::Invalid("Last name is required".to_string())
            );
        }

        #[test]
        fn test_single_char_is_invalid() {
            let result = validate_name("First name", "J");
            assert_eq!(
                result,
                Validity::Invalid(
                    "First name must be 2-50 characters and contain only letters".to_string()
                )
            );
        }

        #[test]
        fn test_two_chars_is_valid() {
            assert_eq!(validate_name("First name", "Jo"), Validity::Valid);
        }

        #[test]
        fn test_fifty_chars_is_valid() {
            let name = "a".repeat(50);
            assert_eq!(validate_name("First name", &name), Validity::Valid);
        }

        #[test]
        fn test_fifty_one_chars_is_invalid() {
            let name = "a".repeat(51);
            assert!(!validate_name("First name", &name).is_valid());
        }

        #[test]
        fn test_digits_are_invalid() {
            assert!(!validate_name("First name", "Jane3").is_valid());
        }

        #[test]
        fn test_inner_spaces_are_allowed() {
            assert_eq!(validate_name("Last name", "Van Dyke"), Validity::Valid);
        }

        #[test]
        fn test_surrounding_whitespace_is_trimmed() {
            assert_eq!(validate_name("First name", "  Jane  "), Validity::Valid);
        }
    }

    mod email {
        use super::*;

        #[test]
        fn test_empty_is_required() {
            assert_eq!(
                validate_email(""),
                Validity::Invalid("Corporate email is required".to_string())
            );
        }

        #[test]
        fn test_valid_address() {
            assert_eq!(validate_email("jane@corp.com"), Validity::Valid);
        }

        #[test]
        fn test_missing_at_is_invalid() {
            assert_eq!(
                validate_email("janecorp.com"),
                Validity::Invalid("Please enter a valid corporate email address".to_string())
            );
        }

        #[test]
        fn test_missing_domain_dot_is_invalid() {
            assert!(!validate_email("jane@corp").is_valid());
        }

        #[test]
        fn test_embedded_space_is_invalid() {
            assert!(!validate_email("jane doe@corp.com").is_valid());
        }

        #[test]
        fn test_surrounding_whitespace_is_trimmed() {
            assert_eq!(validate_email("  jane@corp.com "), Validity::Valid);
        }

        #[test]
        fn test_subdomain_is_valid() {
            assert_eq!(validate_email("jane@mail.corp.com"), Validity::Valid);
        }
    }

    mod password {
        use super::*;

        #[test]
        fn test_empty_is_required() {
            assert_eq!(
                validate_password(""),
                Validity::Invalid("Secure password is required".to_string())
            );
        }

        #[test]
        fn test_six_chars_is_too_short() {
            assert_eq!(
                validate_password("short1"),
                Validity::Invalid("Password must be at least 8 characters".to_string())
            );
        }

        #[test]
        fn test_seven_chars_is_too_short() {
            assert!(!validate_password("sevench").is_valid());
        }

        #[test]
        fn test_eight_chars_is_valid() {
            assert_eq!(validate_password("eightch8"), Validity::Valid);
        }

        #[test]
        fn test_long_password_is_valid() {
            assert_eq!(validate_password("longenough"), Validity::Valid);
        }

        #[test]
        fn test_password_is_not_trimmed() {
            // Leading/trailing whitespace is significant in passwords
            assert_eq!(validate_password("      8c"), Validity::Valid);
        }
    }

    mod confirm_password {
        use super::*;

        #[test]
        fn test_empty_confirm() {
            assert_eq!(
                validate_confirm_password("abc12345", ""),
                Validity::Invalid("Please confirm your password".to_string())
            );
        }

        #[test]
        fn test_matching_is_valid() {
            assert_eq!(
                validate_confirm_password("abc12345", "abc12345"),
                Validity::Valid
            );
        }

        #[test]
        fn test_mismatch_is_invalid() {
            assert_eq!(
                validate_confirm_password("abc12345", "abc12346"),
                Validity::Invalid("Passwords do not match".to_string())
            );
        }
    }

    mod validity {
        use super::*;

        #[test]
        fn test_default_is_unchecked() {
            assert_eq!(Validity::default(), Validity::Unchecked);
            assert!(!Validity::default().is_valid());
        }

        #[test]
        fn test_message_only_on_invalid() {
            assert!(Validity::Valid.message().is_none());
            assert!(Validity::Unchecked.message().is_none());
            assert_eq!(
                Validity::Invalid("nope".to_string()).message(),
                Some("nope")
            );
        }

        #[test]
        fn test_revalidation_is_idempotent() {
            // Re-validating an already-valid value yields the same result
            let first = validate_email("jane@corp.com");
            let second = validate_email("jane@corp.com");
            assert_eq!(first, second);
            assert!(second.message().is_none());
        }
    }
}
