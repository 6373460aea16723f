//! Form state management and form structs
//!
//! Each form owns its field values, the rule lists declared at construction,
//! and the submit latch. Validation re-runs on every change and on blur;
//! fields whose rules depend on a sibling are re-validated eagerly when that
//! sibling changes.

use super::field::FormField;
use super::rules::{first_error, FieldRule};
use crate::state::{CreateAccountInput, LoginInput};

/// Trait for common form operations
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
}

// Login Form
#[derive(Debug, Clone)]
pub struct LoginForm {
    pub email: FormField,
    pub password: FormField,
    pub active_field_index: usize,
    /// Set while a submit is in flight; rejects re-entry until released
    pub submitting: bool,
    /// Top-level alert slot for application/transport failures
    pub form_error: Option<String>,
    rules: Vec<(&'static str, Vec<FieldRule>)>,
}

impl LoginForm {
    pub fn new() -> Self {
        Self {
            email: FormField::text("email", "E-mail"),
            password: FormField::password("password", "Password"),
            active_field_index: 0,
            submitting: false,
            form_error: None,
            rules: vec![
                (
                    "email",
                    vec![FieldRule::required("Email"), FieldRule::email("Email")],
                ),
                (
                    "password",
                    vec![
                        FieldRule::required("Password"),
                        FieldRule::min_length("Password", 10),
                    ],
                ),
            ],
        }
    }

    fn field(&self, name: &str) -> Option<&FormField> {
        [&self.email, &self.password]
            .into_iter()
            .find(|f| f.name == name)
    }

    fn field_mut(&mut self, name: &str) -> Option<&mut FormField> {
        [&mut self.email, &mut self.password]
            .into_iter()
            .find(|f| f.name == name)
    }

    fn value_of(&self, name: &str) -> Option<String> {
        self.field(name).map(|f| f.as_text().to_string())
    }

    /// Re-validate one field. Untouched fields never carry a visible error.
    fn validate_field(&mut self, name: &str) {
        let error = {
            let Some(field) = self.field(name) else { return };
            if !field.touched {
                None
            } else {
                let value = field.as_text().to_string();
                let rules = self
                    .rules
                    .iter()
                    .find(|(n, _)| *n == name)
                    .map(|(_, r)| r.as_slice())
                    .unwrap_or_default();
                let sibling = |n: &str| self.value_of(n);
                first_error(&value, rules, &sibling)
            }
        };
        if let Some(field) = self.field_mut(name) {
            field.error = error;
        }
    }

    /// Replace a field's value wholesale, marking it touched
    #[allow(dead_code)]
    pub fn set_value(&mut self, name: &str, value: String) {
        if let Some(field) = self.field_mut(name) {
            field.touched = true;
            field.set_text(value);
        }
        self.validate_field(name);
    }

    /// Type a character into the active field and re-validate it
    pub fn input_char(&mut self, c: char) {
        let name = self.get_active_field_mut().name;
        self.get_active_field_mut().push_char(c);
        self.validate_field(name);
    }

    /// Delete from the active field and re-validate it
    pub fn backspace(&mut self) {
        let name = self.get_active_field_mut().name;
        self.get_active_field_mut().pop_char();
        self.validate_field(name);
    }

    /// Clear the active field entirely and re-validate it
    pub fn clear_active(&mut self) {
        let field = self.get_active_field_mut();
        let name = field.name;
        field.touched = true;
        field.clear();
        self.validate_field(name);
    }

    /// Mark a field touched and validate it (blur semantics)
    pub fn touch(&mut self, name: &str) {
        if let Some(field) = self.field_mut(name) {
            field.touched = true;
        }
        self.validate_field(name);
    }

    /// Move focus to the next field, blurring the current one
    pub fn focus_next(&mut self) {
        let name = self.get_active_field_mut().name;
        self.touch(name);
        self.next_field();
    }

    /// Move focus to the previous field, blurring the current one
    pub fn focus_prev(&mut self) {
        let name = self.get_active_field_mut().name;
        self.touch(name);
        self.prev_field();
    }

    /// Mark every field touched and validate the whole form
    pub fn validate_all(&mut self) -> bool {
        for name in ["email", "password"] {
            self.touch(name);
        }
        self.is_valid()
    }

    pub fn is_valid(&self) -> bool {
        self.email.error.is_none() && self.password.error.is_none()
    }

    /// Validate and, if the form is clean and idle, latch the submitting
    /// state and capture the snapshot to send. Returns `None` when a submit
    /// is already in flight or validation failed (errors stay exposed on
    /// the fields).
    pub fn begin_submit(&mut self) -> Option<LoginInput> {
        if self.submitting {
            return None;
        }
        self.form_error = None;
        if !self.validate_all() {
            return None;
        }
        self.submitting = true;
        Some(LoginInput {
            email: self.email.as_text().to_string(),
            password: self.password.as_text().to_string(),
        })
    }

    /// Release the submit latch. Must run on every outcome.
    pub fn finish_submit(&mut self) {
        self.submitting = false;
    }

    pub fn set_form_error(&mut self, message: impl Into<String>) {
        self.form_error = Some(message.into());
    }
}

impl Default for LoginForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for LoginForm {
    fn field_count(&self) -> usize {
        2
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(1);
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
}

// Create Account Form
#[derive(Debug, Clone)]
pub struct CreateAccountForm {
    pub email: FormField,
    pub password: FormField,
    pub confirm: FormField,
    pub role: FormField,
    pub active_field_index: usize,
    pub submitting: bool,
    pub form_error: Option<String>,
    rules: Vec<(&'static str, Vec<FieldRule>)>,
    /// Dependency edges: when the left field changes, re-validate the right
    dependents: Vec<(&'static str, Vec<&'static str>)>,
}

impl CreateAccountForm {
    pub fn new() -> Self {
        Self {
            email: FormField::text("email", "E-mail"),
            password: FormField::password("password", "Password"),
            confirm: FormField::password("confirm", "Confirm"),
            role: FormField::role("role", "Role"),
            active_field_index: 0,
            submitting: false,
            form_error: None,
            rules: vec![
                (
                    "email",
                    vec![FieldRule::required("Email"), FieldRule::email("Email")],
                ),
                (
                    "password",
                    vec![
                        FieldRule::required("Password"),
                        FieldRule::min_length("Password", 10),
                    ],
                ),
                (
                    "confirm",
                    vec![
                        FieldRule::required("Password"),
                        FieldRule::matches("password", "Password"),
                    ],
                ),
            ],
            dependents: vec![("password", vec!["confirm"])],
        }
    }

    fn field(&self, name: &str) -> Option<&FormField> {
        [&self.email, &self.password, &self.confirm, &self.role]
            .into_iter()
            .find(|f| f.name == name)
    }

    fn field_mut(&mut self, name: &str) -> Option<&mut FormField> {
        [
            &mut self.email,
            &mut self.password,
            &mut self.confirm,
            &mut self.role,
        ]
        .into_iter()
        .find(|f| f.name == name)
    }

    fn value_of(&self, name: &str) -> Option<String> {
        self.field(name).map(|f| f.as_text().to_string())
    }

    fn validate_field(&mut self, name: &str) {
        let error = {
            let Some(field) = self.field(name) else { return };
            if !field.touched {
                None
            } else {
                let value = field.as_text().to_string();
                let rules = self
                    .rules
                    .iter()
                    .find(|(n, _)| *n == name)
                    .map(|(_, r)| r.as_slice())
                    .unwrap_or_default();
                let sibling = |n: &str| self.value_of(n);
                first_error(&value, rules, &sibling)
            }
        };
        if let Some(field) = self.field_mut(name) {
            field.error = error;
        }
    }

    /// Validate a field plus everything that depends on it, so a stale
    /// "not matched" clears as soon as the password catches up
    fn validate_with_dependents(&mut self, name: &str) {
        self.validate_field(name);
        let dependents: Vec<&'static str> = self
            .dependents
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, d)| d.clone())
            .unwrap_or_default();
        for dependent in dependents {
            self.validate_field(dependent);
        }
    }

    /// Replace a field's value wholesale, marking it touched
    #[allow(dead_code)]
    pub fn set_value(&mut self, name: &str, value: String) {
        if let Some(field) = self.field_mut(name) {
            field.touched = true;
            field.set_text(value);
        }
        self.validate_with_dependents(name);
    }

    pub fn input_char(&mut self, c: char) {
        let name = self.get_active_field_mut().name;
        self.get_active_field_mut().push_char(c);
        self.validate_with_dependents(name);
    }

    pub fn backspace(&mut self) {
        let name = self.get_active_field_mut().name;
        self.get_active_field_mut().pop_char();
        self.validate_with_dependents(name);
    }

    /// Clear the active field entirely and re-validate it with dependents
    pub fn clear_active(&mut self) {
        let field = self.get_active_field_mut();
        let name = field.name;
        field.touched = true;
        field.clear();
        self.validate_with_dependents(name);
    }

    /// Cycle the role selector when it has focus
    pub fn cycle_role(&mut self) {
        self.get_active_field_mut().cycle_role();
    }

    pub fn touch(&mut self, name: &str) {
        if let Some(field) = self.field_mut(name) {
            field.touched = true;
        }
        self.validate_field(name);
    }

    pub fn focus_next(&mut self) {
        let name = self.get_active_field_mut().name;
        self.touch(name);
        self.next_field();
    }

    pub fn focus_prev(&mut self) {
        let name = self.get_active_field_mut().name;
        self.touch(name);
        self.prev_field();
    }

    pub fn validate_all(&mut self) -> bool {
        for name in ["email", "password", "confirm", "role"] {
            self.touch(name);
        }
        self.is_valid()
    }

    pub fn is_valid(&self) -> bool {
        self.email.error.is_none()
            && self.password.error.is_none()
            && self.confirm.error.is_none()
            && self.role.error.is_none()
    }

    /// See [`LoginForm::begin_submit`]. The confirmation field is part of
    /// validation only; the snapshot carries email, password, and role.
    pub fn begin_submit(&mut self) -> Option<CreateAccountInput> {
        if self.submitting {
            return None;
        }
        self.form_error = None;
        if !self.validate_all() {
            return None;
        }
        self.submitting = true;
        Some(CreateAccountInput {
            email: self.email.as_text().to_string(),
            password: self.password.as_text().to_string(),
            role: self.role.as_role(),
        })
    }

    pub fn finish_submit(&mut self) {
        self.submitting = false;
    }

    pub fn set_form_error(&mut self, message: impl Into<String>) {
        self.form_error = Some(message.into());
    }
}

impl Default for CreateAccountForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for CreateAccountForm {
    fn field_count(&self) -> usize {
        4
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(3);
    }
    fn get_active_field_mut(&mut self) -> &mut FormField {
        match self.active_field_index {
            0 => &mut self.email,
            1 => &mut self.password,
            2 => &mut self.confirm,
            _ => &mut self.role,
        }
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        match index {
            0 => Some(&self.email),
            1 => Some(&self.password),
            2 => Some(&self.confirm),
            3 => Some(&self.role),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::UserRole;

    fn type_into(form: &mut LoginForm, index: usize, text: &str) {
        form.set_active_field(index);
        for c in text.chars() {
            form.input_char(c);
        }
    }

    fn type_into_create(form: &mut CreateAccountForm, index: usize, text: &str) {
        form.set_active_field(index);
        for c in text.chars() {
            form.input_char(c);
        }
    }

    mod login_form {
        use super::*;

        #[test]
        fn test_new_has_correct_defaults() {
            let form = LoginForm::new();
            assert_eq!(form.active_field_index, 0);
            assert!(!form.submitting);
            assert!(form.form_error.is_none());
            assert_eq!(form.email.name, "email");
            assert_eq!(form.password.name, "password");
        }

        #[test]
        fn test_untouched_fields_show_no_errors() {
            let mut form = LoginForm::new();
            form.validate_field("email");
            assert!(form.email.error.is_none());
        }

        #[test]
        fn test_requires_email_after_clearing() {
            let mut form = LoginForm::new();
            type_into(&mut form, 0, "ttt@ttt.com");
            assert!(form.email.error.is_none());
            for _ in 0.."ttt@ttt.com".len() {
                form.backspace();
            }
            assert_eq!(form.email.error.as_deref(), Some("Email is required!"));
        }

        #[test]
        fn test_invalid_email_shows_pattern_error_while_typing() {
            let mut form = LoginForm::new();
            type_into(&mut form, 0, "ttt");
            assert_eq!(form.email.error.as_deref(), Some("Email address invalid"));
        }

        #[test]
        fn test_short_password_shows_length_error() {
            let mut form = LoginForm::new();
            type_into(&mut form, 1, "min_10");
            assert_eq!(
                form.password.error.as_deref(),
                Some("Password must be more than 10 characters")
            );
        }

        #[test]
        fn test_blur_surfaces_required_without_typing() {
            let mut form = LoginForm::new();
            form.focus_next();
            assert_eq!(form.email.error.as_deref(), Some("Email is required!"));
            assert_eq!(form.active_field_index, 1);
        }

        #[test]
        fn test_submit_invalid_form_aborts_and_exposes_errors() {
            let mut form = LoginForm::new();
            assert!(form.begin_submit().is_none());
            assert!(!form.submitting);
            assert_eq!(form.email.error.as_deref(), Some("Email is required!"));
            assert_eq!(form.password.error.as_deref(), Some("Password is required!"));
        }

        #[test]
        fn test_submit_valid_form_captures_snapshot() {
            let mut form = LoginForm::new();
            type_into(&mut form, 0, "ttt@ttt.com");
            type_into(&mut form, 1, "12345678901");
            let input = form.begin_submit().expect("form is valid");
            assert_eq!(input.email, "ttt@ttt.com");
            assert_eq!(input.password, "12345678901");
            assert!(form.submitting);
        }

        #[test]
        fn test_submit_latch_rejects_reentry() {
            let mut form = LoginForm::new();
            type_into(&mut form, 0, "ttt@ttt.com");
            type_into(&mut form, 1, "12345678901");
            assert!(form.begin_submit().is_some());
            assert!(form.begin_submit().is_none());
            form.finish_submit();
            assert!(form.begin_submit().is_some());
        }

        #[test]
        fn test_begin_submit_clears_previous_form_error() {
            let mut form = LoginForm::new();
            form.set_form_error("mutation error");
            type_into(&mut form, 0, "ttt@ttt.com");
            type_into(&mut form, 1, "12345678901");
            assert!(form.begin_submit().is_some());
            assert!(form.form_error.is_none());
        }

        #[test]
        fn test_clear_active_surfaces_required() {
            let mut form = LoginForm::new();
            type_into(&mut form, 0, "ttt@ttt.com");
            assert!(form.email.error.is_none());
            form.clear_active();
            assert_eq!(form.email.error.as_deref(), Some("Email is required!"));
        }

        #[test]
        fn test_set_value_replaces_and_revalidates() {
            let mut form = LoginForm::new();
            form.set_value("email", "ttt".to_string());
            assert_eq!(form.email.error.as_deref(), Some("Email address invalid"));
            form.set_value("email", "ttt@ttt.com".to_string());
            assert!(form.email.error.is_none());
        }

        #[test]
        fn test_field_cycling_wraps() {
            let mut form = LoginForm::new();
            form.next_field();
            form.next_field();
            assert_eq!(form.active_field_index, 0);
            form.prev_field();
            assert_eq!(form.active_field_index, 1);
        }
    }

    mod create_account_form {
        use super::*;

        #[test]
        fn test_new_has_correct_defaults() {
            let form = CreateAccountForm::new();
            assert_eq!(form.field_count(), 4);
            assert_eq!(form.role.as_role(), UserRole::Listener);
            assert!(!form.submitting);
        }

        #[test]
        fn test_confirm_mismatch_shows_not_matched() {
            let mut form = CreateAccountForm::new();
            type_into_create(&mut form, 1, "12345678901");
            type_into_create(&mut form, 2, "1");
            assert_eq!(form.confirm.error.as_deref(), Some("Password not matched"));
        }

        #[test]
        fn test_password_change_revalidates_confirm() {
            let mut form = CreateAccountForm::new();
            type_into_create(&mut form, 2, "12345678901x");
            type_into_create(&mut form, 1, "12345678901");
            assert_eq!(form.confirm.error.as_deref(), Some("Password not matched"));
            // typing the final character into password clears the stale error
            form.input_char('x');
            assert!(form.confirm.error.is_none());
        }

        #[test]
        fn test_cleared_password_and_confirm_both_require() {
            let mut form = CreateAccountForm::new();
            type_into_create(&mut form, 1, "12345678901");
            for _ in 0..11 {
                form.backspace();
            }
            type_into_create(&mut form, 2, "12345678901");
            for _ in 0..11 {
                form.backspace();
            }
            assert_eq!(form.password.error.as_deref(), Some("Password is required!"));
            assert_eq!(form.confirm.error.as_deref(), Some("Password is required!"));
        }

        #[test]
        fn test_role_cycles_only_on_role_field() {
            let mut form = CreateAccountForm::new();
            form.set_active_field(3);
            form.cycle_role();
            assert_eq!(form.role.as_role(), UserRole::Host);
            form.set_active_field(0);
            form.cycle_role();
            assert_eq!(form.role.as_role(), UserRole::Host);
        }

        #[test]
        fn test_submit_valid_form_captures_role() {
            let mut form = CreateAccountForm::new();
            type_into_create(&mut form, 0, "ttt@ttt.com");
            type_into_create(&mut form, 1, "12345678901");
            type_into_create(&mut form, 2, "12345678901");
            let input = form.begin_submit().expect("form is valid");
            assert_eq!(input.email, "ttt@ttt.com");
            assert_eq!(input.password, "12345678901");
            assert_eq!(input.role, UserRole::Listener);
        }

        #[test]
        fn test_submit_with_mismatched_confirm_aborts() {
            let mut form = CreateAccountForm::new();
            type_into_create(&mut form, 0, "ttt@ttt.com");
            type_into_create(&mut form, 1, "12345678901");
            type_into_create(&mut form, 2, "different");
            assert!(form.begin_submit().is_none());
            assert!(!form.submitting);
            assert_eq!(form.confirm.error.as_deref(), Some("Password not matched"));
        }

        #[test]
        fn test_set_value_revalidates_dependents() {
            let mut form = CreateAccountForm::new();
            type_into_create(&mut form, 2, "12345678901");
            assert_eq!(form.confirm.error.as_deref(), Some("Password not matched"));
            form.set_value("password", "12345678901".to_string());
            assert!(form.confirm.error.is_none());
        }

        #[test]
        fn test_values_survive_failed_submit() {
            let mut form = CreateAccountForm::new();
            type_into_create(&mut form, 0, "ttt@ttt.com");
            assert!(form.begin_submit().is_none());
            assert_eq!(form.email.as_text(), "ttt@ttt.com");
        }
    }
}
