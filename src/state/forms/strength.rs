//! Password strength meter (registration screen only)
//!
//! Purely advisory: the meter never blocks submission.

/// Strength classification shown next to the meter gauge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrengthLevel {
    Weak,
    Fair,
    Good,
    Strong,
}

impl StrengthLevel {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Weak => "Weak password",
            Self::Fair => "Fair password",
            Self::Good => "Good password",
            Self::Strong => "Strong password",
        }
    }

    /// Fill ratio for the meter gauge
    pub fn ratio(&self) -> f64 {
        match self {
            Self::Weak => 0.25,
            Self::Fair => 0.5,
            Self::Good => 0.75,
            Self::Strong => 1.0,
        }
    }
}

/// Score the password by counting satisfied character classes:
/// length >= 8, lowercase, uppercase, digit, symbol.
pub fn password_strength(password: &str) -> StrengthLevel {
    let mut score = 0;

    if password.chars().count() >= 8 {
        score += 1;
    }
    if password.chars().any(|c| c.is_ascii_lowercase()) {
        score += 1;
    }
    if password.chars().any(|c| c.is_ascii_uppercase()) {
        score += 1;
    }
    if password.chars().any(|c| c.is_ascii_digit()) {
        score += 1;
    }
    if password.chars().any(|c| !c.is_ascii_alphanumeric()) {
        score += 1;
    }

    match score {
        0..=1 => StrengthLevel::Weak,
        2 => StrengthLevel::Fair,
        3 => StrengthLevel::Good,
        _ => StrengthLevel::Strong,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_letter_is_weak() {
        assert_eq!(password_strength("a"), StrengthLevel::Weak);
    }

    #[test]
    fn test_empty_is_weak() {
        assert_eq!(password_strength(""), StrengthLevel::Weak);
    }

    #[test]
    fn test_uppercase_only_is_weak() {
        assert_eq!(password_strength("ABC"), StrengthLevel::Weak);
    }

    #[test]
    fn test_long_lowercase_is_fair() {
        // length + lowercase
        assert_eq!(password_strength("abcdefgh"), StrengthLevel::Fair);
    }

    #[test]
    fn test_three_classes_is_good() {
        // lowercase + uppercase + digit, but too short for the length class
        assert_eq!(password_strength("Abcdef1"), StrengthLevel::Good);
    }

    #[test]
    fn test_four_classes_is_strong() {
        // length + lowercase + uppercase + digit
        assert_eq!(password_strength("Abcdefg1"), StrengthLevel::Strong);
    }

    #[test]
    fn test_all_classes_is_strong() {
        assert_eq!(password_strength("Abcdefg1!"), StrengthLevel::Strong);
    }

    #[test]
    fn test_symbol_counts_toward_score() {
        // symbol + lowercase only
        assert_eq!(password_strength("ab!"), StrengthLevel::Fair);
    }

    #[test]
    fn test_labels() {
        assert_eq!(StrengthLevel::Weak.label(), "Weak password");
        assert_eq!(StrengthLevel::Strong.label(), "Strong password");
    }

    #[test]
    fn test_ratio_is_monotonic() {
        assert!(StrengthLevel::Weak.ratio() < StrengthLevel::Fair.ratio());
        assert!(StrengthLevel::Fair.ratio() < StrengthLevel::Good.ratio());
        assert!(StrengthLevel::Good.ratio() < StrengthLevel::Strong.ratio());
    }
}
