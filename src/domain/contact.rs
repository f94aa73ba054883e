//! Contact form state and validation.
//!
//! The form has two required fields. Validation only checks that each is
//! non-empty after trimming; there is no format checking.

/// Error text shown under an empty name field.
pub const NAME_ERROR: &str = "Please enter your name.";

/// Error text shown under an empty message field.
pub const MESSAGE_ERROR: &str = "Please enter a message.";

/// Text shown once a submission passes validation.
pub const SUCCESS_MESSAGE: &str = "Thank you! Your message has been sent.";

// ============================================================================
// Fields
// ============================================================================

/// The two form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContactField {
    #[default]
    Name,
    Message,
}

impl ContactField {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Message => "Message",
        }
    }

    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::Name => Self::Message,
            Self::Message => Self::Name,
        }
    }
}

/// Per-field validation state: the visible error text and the
/// accessibility-invalid flag travel together.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldState {
    pub value: String,
    pub error: Option<&'static str>,
    pub invalid: bool,
}

impl FieldState {
    fn clear_error(&mut self) {
        self.error = None;
        self.invalid = false;
    }

    fn mark_invalid(&mut self, message: &'static str) {
        self.error = Some(message);
        self.invalid = true;
    }

    fn is_blank(&self) -> bool {
        self.value.trim().is_empty()
    }
}

// ============================================================================
// Form
// ============================================================================

/// Outcome of a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    Accepted,
    Rejected,
}

/// The contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: FieldState,
    pub message: FieldState,
    pub active: ContactField,
    pub success_visible: bool,
}

impl ContactForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn field(&self, field: ContactField) -> &FieldState {
        match field {
            ContactField::Name => &self.name,
            ContactField::Message => &self.message,
        }
    }

    fn field_mut(&mut self, field: ContactField) -> &mut FieldState {
        match field {
            ContactField::Name => &mut self.name,
            ContactField::Message => &mut self.message,
        }
    }

    pub fn focus_other(&mut self) {
        self.active = self.active.other();
    }

    pub fn push_char(&mut self, c: char) {
        let active = self.active;
        self.field_mut(active).value.push(c);
    }

    pub fn backspace(&mut self) {
        let active = self.active;
        self.field_mut(active).value.pop();
    }

    /// Validates both fields.
    ///
    /// Prior error indicators are cleared first, then each blank field gets
    /// its error and invalid flag. When both pass, the success indicator is
    /// shown and the field contents are reset. A rejected submission hides a
    /// success indicator left over from an earlier one.
    pub fn submit(&mut self) -> Submission {
        self.name.clear_error();
        self.message.clear_error();

        if self.name.is_blank() {
            self.name.mark_invalid(NAME_ERROR);
        }
        if self.message.is_blank() {
            self.message.mark_invalid(MESSAGE_ERROR);
        }

        if self.name.invalid || self.message.invalid {
            self.success_visible = false;
            tracing::debug!(
                name_invalid = self.name.invalid,
                message_invalid = self.message.invalid,
                "contact form rejected"
            );
            return Submission::Rejected;
        }

        self.name.value.clear();
        self.message.value.clear();
        self.active = ContactField::Name;
        self.success_visible = true;
        tracing::info!("contact form accepted");
        Submission::Accepted
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn filled(name: &str, message: &str) -> ContactForm {
        let mut form = ContactForm::new();
        form.name.value = name.to_string();
        form.message.value = message.to_string();
        form
    }

    #[test]
    fn test_only_message_error_when_message_empty() {
        let mut form = filled("Ada", "");
        assert_eq!(form.submit(), Submission::Rejected);

        assert_eq!(form.name.error, None);
        assert!(!form.name.invalid);
        assert_eq!(form.message.error, Some(MESSAGE_ERROR));
        assert!(form.message.invalid);
        assert!(!form.success_visible);
        assert_eq!(form.name.value, "Ada");
    }

    #[rstest]
    #[case::both_blank("", "", true, true)]
    #[case::whitespace_only("   ", "\t", true, true)]
    #[case::name_blank(" ", "hello", true, false)]
    #[case::both_present("Ada", "hello", false, false)]
    fn test_field_errors(
        #[case] name: &str,
        #[case] message: &str,
        #[case] name_invalid: bool,
        #[case] message_invalid: bool,
    ) {
        let mut form = filled(name, message);
        form.submit();
        assert_eq!(form.name.invalid, name_invalid);
        assert_eq!(form.message.invalid, message_invalid);
        assert_eq!(form.name.error.is_some(), name_invalid);
        assert_eq!(form.message.error.is_some(), message_invalid);
    }

    #[test]
    fn test_success_resets_fields() {
        let mut form = filled("Ada", "Thanks for the site");
        form.focus_other();
        assert_eq!(form.active, ContactField::Message);

        assert_eq!(form.submit(), Submission::Accepted);
        assert!(form.success_visible);
        assert!(form.name.value.is_empty());
        assert!(form.message.value.is_empty());
        assert_eq!(form.active, ContactField::Name);
    }

    #[test]
    fn test_resubmit_clears_previous_errors() {
        let mut form = filled("", "");
        form.submit();
        assert!(form.name.invalid && form.message.invalid);

        form.name.value = "Ada".into();
        form.message.value = "Hi".into();
        assert_eq!(form.submit(), Submission::Accepted);
        assert!(!form.name.invalid && !form.message.invalid);
        assert!(form.name.error.is_none() && form.message.error.is_none());
    }

    #[test]
    fn test_rejection_hides_earlier_success() {
        let mut form = filled("Ada", "Hi");
        form.submit();
        assert!(form.success_visible);

        form.submit();
        assert!(!form.success_visible);
    }

    #[test]
    fn test_typing_goes_to_active_field() {
        let mut form = ContactForm::new();
        "Bo".chars().for_each(|c| form.push_char(c));
        form.focus_other();
        "Yo!".chars().for_each(|c| form.push_char(c));
        form.backspace();

        assert_eq!(form.name.value, "Bo");
        assert_eq!(form.message.value, "Yo");
        assert_eq!(form.active, ContactField::Message);
    }
}
