//! Form field value objects

use crate::state::UserRole;

/// Type-safe field values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Role(UserRole),
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

/// Represents a single form field with its configuration, value, and
/// validation display state
#[derive(Debug, Clone)]
pub struct FormField {
    pub name: &'static str,
    pub label: &'static str,
    pub value: FieldValue,
    /// Whether the user has interacted with this field (first edit or first
    /// blur). Untouched fields never show validation errors.
    pub touched: bool,
    /// Current validation error, if any (first failing rule wins)
    pub error: Option<String>,
    /// Render the value as bullets (passwords)
    pub masked: bool,
}

impl FormField {
    /// Create a new text field
    pub fn text(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            value: FieldValue::Text(String::new()),
            touched: false,
            error: None,
            masked: false,
        }
    }

    /// Create a new masked text field (passwords)
    pub fn password(name: &'static str, label: &'static str) -> Self {
        Self {
            masked: true,
            ..Self::text(name, label)
        }
    }

    /// Create a new role select field
    pub fn role(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            value: FieldValue::Role(UserRole::default()),
            touched: false,
            error: None,
            masked: false,
        }
    }

    /// Get the text value (role fields yield their wire name)
    pub fn as_text(&self) -> &str {
        match &self.value {
            FieldValue::Text(s) => s,
            FieldValue::Role(r) => r.as_str(),
        }
    }

    /// Get the role value (text fields yield the default role)
    pub fn as_role(&self) -> UserRole {
        match &self.value {
            FieldValue::Role(r) => *r,
            FieldValue::Text(_) => UserRole::default(),
        }
    }

    /// Replace the text value. No-op for role fields.
    #[allow(dead_code)]
    pub fn set_text(&mut self, value: String) {
        if matches!(self.value, FieldValue::Text(_)) {
            self.value = FieldValue::Text(value);
        }
    }

    /// Push a character to the field value, marking the field touched
    pub fn push_char(&mut self, c: char) {
        self.touched = true;
        match &mut self.value {
            FieldValue::Text(s) => s.push(c),
            FieldValue::Role(_) => {}
        }
    }

    /// Remove the last character from the field value, marking the field
    /// touched
    pub fn pop_char(&mut self) {
        self.touched = true;
        match &mut self.value {
            FieldValue::Text(s) => {
                s.pop();
            }
            FieldValue::Role(_) => {}
        }
    }

    /// Cycle a role field to the next role. No-op for text fields.
    pub fn cycle_role(&mut self) {
        if let FieldValue::Role(r) = &mut self.value {
            self.touched = true;
            *r = r.next();
        }
    }

    /// Clear the field value
    pub fn clear(&mut self) {
        match &mut self.value {
            FieldValue::Text(s) => s.clear(),
            FieldValue::Role(r) => *r = UserRole::default(),
        }
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        match &self.value {
            FieldValue::Text(s) => {
                if self.masked {
                    "•".repeat(s.chars().count())
                } else {
                    s.clone()
                }
            }
            FieldValue::Role(r) => format!("◂ {} ▸", r.label()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_field_starts_empty_and_untouched() {
        let field = FormField::text("email", "Email");
        assert_eq!(field.as_text(), "");
        assert!(!field.touched);
        assert!(field.error.is_none());
        assert!(!field.masked);
    }

    #[test]
    fn test_push_char_marks_touched() {
        let mut field = FormField::text("email", "Email");
        field.push_char('a');
        assert!(field.touched);
        assert_eq!(field.as_text(), "a");
    }

    #[test]
    fn test_pop_char_marks_touched() {
        let mut field = FormField::text("email", "Email");
        field.set_text("ab".to_string());
        field.pop_char();
        assert!(field.touched);
        assert_eq!(field.as_text(), "a");
    }

    #[test]
    fn test_password_field_masks_display() {
        let mut field = FormField::password("password", "Password");
        field.push_char('s');
        field.push_char('3');
        assert_eq!(field.display_value(), "••");
        assert_eq!(field.as_text(), "s3");
    }

    #[test]
    fn test_role_field_cycles() {
        let mut field = FormField::role("role", "Role");
        assert_eq!(field.as_role(), UserRole::Listener);
        field.cycle_role();
        assert_eq!(field.as_role(), UserRole::Host);
        field.cycle_role();
        assert_eq!(field.as_role(), UserRole::Listener);
        assert!(field.touched);
    }

    #[test]
    fn test_role_field_ignores_char_input() {
        let mut field = FormField::role("role", "Role");
        field.push_char('x');
        assert_eq!(field.as_role(), UserRole::Listener);
    }

    #[test]
    fn test_clear_resets_value_only() {
        let mut field = FormField::text("email", "Email");
        field.push_char('a');
        field.clear();
        assert_eq!(field.as_text(), "");
        // touched survives clearing, so "required" surfaces immediately
        assert!(field.touched);
    }
}
