//! Form state management and form structs

use super::field::FormField;
use super::validators::{
    validate_confirm_password, validate_email, validate_name, validate_password, Validity,
};
use crate::state::{LoginRequest, RegistrationRequest, ResetRequest};

/// Trait for common form operations. Rows beyond the text fields
/// (checkbox row, submit button row) are focusable but have no
/// `FormField`; `get_field` returns `None` for them.
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    fn get_active_field_mut(&mut self) -> &mut FormField;
    fn get_field(&self, index: usize) -> Option<&FormField>;

    /// Validate the field at `index`, storing the result on it.
    /// No-op for non-field rows.
    fn validate_field(&mut self, index: usize);

    /// Validate every text field; true when all are valid
    fn validate_all(&mut self) -> bool;

    /// True when the active row is a checkbox
    fn is_checkbox_row(&self) -> bool {
        false
    }

    /// Toggle the checkbox on the active row, if there is one
    fn toggle_checkbox(&mut self) {}
}

// Registration form

#[derive(Debug, Clone)]
pub struct RegisterForm {
    pub first_name: FormField,
    pub last_name: FormField,
    pub email: FormField,
    pub password: FormField,
    pub confirm_password: FormField,
    pub agree_terms: bool,
    pub active_field_index: usize,
}

impl RegisterForm {
    /// Row index of the email field (refocused on "account exists")
    pub const EMAIL_ROW: usize = 2;
    /// Row index of the terms agreement checkbox
    pub const AGREEMENT_ROW: usize = 5;
    /// Row index of the submit button
    pub const SUBMIT_ROW: usize = 6;

    pub fn new() -> Self {
        Self {
            first_name: FormField::text("first_name", "First Name"),
            last_name: FormField::text("last_name", "Last Name"),
            email: FormField::text("email", "Corporate Email"),
            password: FormField::secret("password", "Secure Password"),
            confirm_password: FormField::secret("confirm_password", "Confirm Password"),
            agree_terms: false,
            active_field_index: 0,
        }
    }

    /// Build the submission snapshot. Only constructed when every field
    /// is currently valid; the agreement precondition is checked
    /// separately by the submit handler.
    pub fn request(&self) -> Option<RegistrationRequest> {
        let fields = [
            &self.first_name,
            &self.last_name,
            &self.email,
            &self.password,
            &self.confirm_password,
        ];
        if !fields.iter().all(|f| f.is_valid()) {
            return None;
        }
        Some(RegistrationRequest {
            first_name: self.first_name.trimmed().to_string(),
            last_name: self.last_name.trimmed().to_string(),
            email: self.email.trimmed().to_string(),
            password: self.password.value().to_string(),
            agree_terms: self.agree_terms,
        })
    }

    /// Mark the email field rejected by the gateway and refocus it
    pub fn reject_email(&mut self, message: &str) {
        self.email.set_validity(Validity::Invalid(message.to_string()));
        self.active_field_index = Self::EMAIL_ROW;
    }

    /// Reset the whole form after a successful registration
    pub fn clear(&mut self) {
        *self = Self::new();
    }
}

impl Default for RegisterForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for RegisterForm {
    fn field_count(&self) -> usize {
        7 // 5 fields + agreement checkbox + submit button
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(Self::SUBMIT_ROW);
    }
    fn get_active_field_mut(&mut self) -> &mut FormField {
        match self.active_field_index {
            0 => &mut self.first_name,
            1 => &mut self.last_name,
            2 => &mut self.email,
            3 => &mut self.password,
            // Checkbox and button rows return confirm as a dummy
            // (callers check get_field first before text input)
            _ => &mut self.confirm_password,
        }
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        match index {
            0 => Some(&self.first_name),
            1 => Some(&self.last_name),
            2 => Some(&self.email),
            3 => Some(&self.password),
            4 => Some(&self.confirm_password),
            _ => None,
        }
    }
    fn validate_field(&mut self, index: usize) {
        match index {
            0 => {
                let validity = validate_name("First name", self.first_name.value());
                self.first_name.set_validity(validity);
            }
            1 => {
                let validity = validate_name("Last name", self.last_name.value());
                self.last_name.set_validity(validity);
            }
            2 => {
                let validity = validate_email(self.email.value());
                self.email.set_validity(validity);
            }
            3 => {
                let validity = validate_password(self.password.value());
                self.password.set_validity(validity);
            }
            4 => {
                let validity =
                    validate_confirm_password(self.password.value(), self.confirm_password.value());
                self.confirm_password.set_validity(validity);
            }
            _ => {}
        }
    }
    fn validate_all(&mut self) -> bool {
        for index in 0..=4 {
            self.validate_field(index);
        }
        [
            &self.first_name,
            &self.last_name,
            &self.email,
            &self.password,
            &self.confirm_password,
        ]
        .iter()
        .all(|f| f.is_valid())
    }
    fn is_checkbox_row(&self) -> bool {
        self.active_field_index == Self::AGREEMENT_ROW
    }
    fn toggle_checkbox(&mut self) {
        if self.is_checkbox_row() {
            self.agree_terms = !self.agree_terms;
        }
    }
}

// Login form

#[derive(Debug, Clone)]
pub struct LoginForm {
    pub email: FormField,
    pub password: FormField,
    pub remember_me: bool,
    pub active_field_index: usize,
}

impl LoginForm {
    /// Row index of the password field (refocused on bad credentials)
    pub const PASSWORD_ROW: usize = 1;
    /// Row index of the remember-me checkbox
    pub const REMEMBER_ROW: usize = 2;
    /// Row index of the submit button
    pub const SUBMIT_ROW: usize = 3;

    pub fn new() -> Self {
        Self {
            email: FormField::text("email", "Corporate Email"),
            password: FormField::secret("password", "Secure Password"),
            remember_me: false,
            active_field_index: 0,
        }
    }

    /// Pre-fill from a remembered email; focus lands on the password
    pub fn from_remembered(email: &str) -> Self {
        Self {
            email: FormField::text_with_value("email", "Corporate Email", email.to_string()),
            password: FormField::secret("password", "Secure Password"),
            remember_me: true,
            active_field_index: Self::PASSWORD_ROW,
        }
    }

    pub fn request(&self) -> Option<LoginRequest> {
        if !(self.email.is_valid() && self.password.is_valid()) {
            return None;
        }
        Some(LoginRequest {
            email: self.email.trimmed().to_string(),
            password: self.password.value().to_string(),
            remember_me: self.remember_me,
        })
    }

    /// Gateway rejected the credentials: clear the password, surface the
    /// message on it, and refocus it
    pub fn reject_credentials(&mut self, message: &str) {
        self.password.clear();
        self.password
            .set_validity(Validity::Invalid(message.to_string()));
        self.active_field_index = Self::PASSWORD_ROW;
    }
}

impl Default for LoginForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for LoginForm {
    fn field_count(&self) -> usize {
        4 // email, password, remember checkbox, submit button
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(Self::SUBMIT_ROW);
    }
    fn get_active_field_mut(&mut self) -> &mut FormField {
        match self.active_field_index {
            0 => &mut self.email,
            _ => &mut self.password,
        }
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        match index {
            0 => Some(&self.email),
            1 => Some(&self.password),
            _ => None,
        }
    }
    fn validate_field(&mut self, index: usize) {
        match index {
            0 => {
                let validity = validate_email(self.email.value());
                self.email.set_validity(validity);
            }
            1 => {
                let validity = validate_password(self.password.value());
                self.password.set_validity(validity);
            }
            _ => {}
        }
    }
    fn validate_all(&mut self) -> bool {
        self.validate_field(0);
        self.validate_field(1);
        self.email.is_valid() && self.password.is_valid()
    }
    fn is_checkbox_row(&self) -> bool {
        self.active_field_index == Self::REMEMBER_ROW
    }
    fn toggle_checkbox(&mut self) {
        if self.is_checkbox_row() {
            self.remember_me = !self.remember_me;
        }
    }
}

// Password reset form

#[derive(Debug, Clone)]
pub struct ResetForm {
    pub email: FormField,
    pub active_field_index: usize,
}

impl ResetForm {
    /// Row index of the submit button
    pub const SUBMIT_ROW: usize = 1;

    pub fn new() -> Self {
        Self {
            email: FormField::text("email", "Corporate Email"),
            active_field_index: 0,
        }
    }

    pub fn request(&self) -> Option<ResetRequest> {
        if !self.email.is_valid() {
            return None;
        }
        Some(ResetRequest {
            email: self.email.trimmed().to_string(),
        })
    }

    /// Gateway did not find the address: surface the message on the field
    pub fn reject_email(&mut self, message: &str) {
        self.email.set_validity(Validity::Invalid(message.to_string()));
        self.active_field_index = 0;
    }

    pub fn clear(&mut self) {
        *self = Self::new();
    }
}

impl Default for ResetForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for ResetForm {
    fn field_count(&self) -> usize {
        2 // email, submit button
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(Self::SUBMIT_ROW);
    }
    fn get_active_field_mut(&mut self) -> &mut FormField {
        &mut self.email
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        match index {
            0 => Some(&self.email),
            _ => None,
        }
    }
    fn validate_field(&mut self, index: usize) {
        if index == 0 {
            let validity = validate_email(self.email.value());
            self.email.set_validity(validity);
        }
    }
    fn validate_all(&mut self) -> bool {
        self.validate_field(0);
        self.email.is_valid()
    }
}
