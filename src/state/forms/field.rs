//! Form field value objects

use super::validators::Validity;

/// A single text input with its label, editing state, and validity
#[derive(Debug, Clone, Default)]
pub struct FormField {
    pub name: String,
    pub label: String,
    value: String,
    /// Entry is masked on screen (password fields)
    pub masked: bool,
    /// Visibility toggle overriding the mask
    pub revealed: bool,
    pub validity: Validity,
}

impl FormField {
    /// Create a new plain text field
    pub fn text(name: &str, label: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            ..Self::default()
        }
    }

    /// Create a new plain text field with initial value
    pub fn text_with_value(name: &str, label: &str, value: String) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            value,
            ..Self::default()
        }
    }

    /// Create a new masked field (password entry)
    pub fn secret(name: &str, label: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            masked: true,
            ..Self::default()
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Value with surrounding whitespace removed, as sent to the gateway
    pub fn trimmed(&self) -> &str {
        self.value.trim()
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    pub fn push_char(&mut self, c: char) {
        self.value.push(c);
    }

    pub fn pop_char(&mut self) {
        self.value.pop();
    }

    /// Clear the value and reset validity to unchecked
    pub fn clear(&mut self) {
        self.value.clear();
        self.validity = Validity::Unchecked;
    }

    pub fn set_validity(&mut self, validity: Validity) {
        self.validity = validity;
    }

    pub fn is_valid(&self) -> bool {
        self.validity.is_valid()
    }

    /// Get the display value for rendering. Masked fields render one dot
    /// per character unless revealed.
    pub fn display_value(&self) -> String {
        if self.masked && !self.revealed {
            "•".repeat(self.value.chars().count())
        } else {
            self.value.clone()
        }
    }

    /// Toggle visibility of a masked field; no-op on plain fields
    pub fn toggle_reveal(&mut self) {
        if self.masked {
            self.revealed = !self.revealed;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_field_defaults() {
        let field = FormField::text("email", "Corporate Email");
        assert_eq!(field.name, "email");
        assert_eq!(field.label, "Corporate Email");
        assert!(field.is_empty());
        assert!(!field.masked);
        assert_eq!(field.validity, Validity::Unchecked);
    }

    #[test]
    fn test_push_and_pop_char() {
        let mut field = FormField::text("email", "Email");
        field.push_char('a');
        field.push_char('b');
        assert_eq!(field.value(), "ab");
        field.pop_char();
        assert_eq!(field.value(), "a");
    }

    #[test]
    fn test_pop_on_empty_is_noop() {
        let mut field = FormField::text("email", "Email");
        field.pop_char();
        assert_eq!(field.value(), "");
    }

    #[test]
    fn test_clear_resets_validity() {
        let mut field = FormField::text("email", "Email");
        field.push_char('x');
        field.set_validity(Validity::Invalid("bad".to_string()));
        field.clear();
        assert!(field.is_empty());
        assert_eq!(field.validity, Validity::Unchecked);
    }

    #[test]
    fn test_trimmed_strips_whitespace() {
        let field = FormField::text_with_value("email", "Email", "  jane@corp.com ".to_string());
        assert_eq!(field.trimmed(), "jane@corp.com");
        assert_eq!(field.value(), "  jane@corp.com ");
    }

    #[test]
    fn test_secret_field_masks_display() {
        let mut field = FormField::secret("password", "Password");
        field.push_char('h');
        field.push_char('u');
        field.push_char('s');
        field.push_char('h');
        assert_eq!(field.display_value(), "••••");
        assert_eq!(field.value(), "hush");
    }

    #[test]
    fn test_reveal_toggle_unmasks() {
        let mut field = FormField::secret("password", "Password");
        field.push_char('x');
        field.toggle_reveal();
        assert_eq!(field.display_value(), "x");
        field.toggle_reveal();
        assert_eq!(field.display_value(), "•");
    }

    #[test]
    fn test_reveal_is_noop_on_plain_field() {
        let mut field = FormField::text("email", "Email");
        field.toggle_reveal();
        assert!(!field.revealed);
    }
}
