//! Declarative field validation rules
//!
//! Each field carries an ordered list of rules declared when the form is
//! built. Evaluation is synchronous: rules run top to bottom and the first
//! failing rule's message becomes the field's error.

/// Predicate kinds a rule can apply to a field value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Check {
    /// Non-empty after trimming
    Required,
    /// Shape of an email address (local@domain.tld); skipped when empty
    Email,
    /// Strictly more than `n` characters; skipped when empty
    MinLength(usize),
    /// Equal to the named sibling field's current value
    Matches(&'static str),
}

/// A single validation rule: a predicate plus the message shown when it
/// fails. Immutable once the form is defined.
#[derive(Debug, Clone)]
pub struct FieldRule {
    pub check: Check,
    pub message: String,
}

impl FieldRule {
    pub fn required(label: &str) -> Self {
        Self {
            check: Check::Required,
            message: format!("{label} is required!"),
        }
    }

    pub fn email(label: &str) -> Self {
        Self {
            check: Check::Email,
            message: format!("{label} address invalid"),
        }
    }

    pub fn min_length(label: &str, n: usize) -> Self {
        Self {
            check: Check::MinLength(n),
            message: format!("{label} must be more than {n} characters"),
        }
    }

    /// Equality to the sibling field `target`. `target_label` is the label
    /// of that sibling (the message names the field being matched against).
    pub fn matches(target: &'static str, target_label: &str) -> Self {
        Self {
            check: Check::Matches(target),
            message: format!("{target_label} not matched"),
        }
    }

    /// Evaluate this rule against `value`. `sibling` resolves cross-field
    /// lookups for [`Check::Matches`].
    pub fn passes(&self, value: &str, sibling: &dyn Fn(&str) -> Option<String>) -> bool {
        match &self.check {
            Check::Required => !value.trim().is_empty(),
            Check::Email => value.is_empty() || is_email(value),
            Check::MinLength(n) => value.is_empty() || value.chars().count() > *n,
            Check::Matches(target) => sibling(target).as_deref() == Some(value),
        }
    }
}

/// First failing rule's message, or `None` when the value is valid.
pub fn first_error(
    value: &str,
    rules: &[FieldRule],
    sibling: &dyn Fn(&str) -> Option<String>,
) -> Option<String> {
    rules
        .iter()
        .find(|rule| !rule.passes(value, sibling))
        .map(|rule| rule.message.clone())
}

/// Minimal email grammar: one `@`, non-empty local part, and a domain
/// containing a dot with non-empty segments. No whitespace anywhere.
fn is_email(value: &str) -> bool {
    if value.contains(char::is_whitespace) {
        return false;
    }
    let mut parts = value.splitn(2, '@');
    let local = parts.next().unwrap_or_default();
    let Some(domain) = parts.next() else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}
