//! Contact information and the message form
//!
//! The form is a stub: submitting it transmits and stores nothing and
//! always produces the same acknowledgment.

use crate::content::ContactEntry;
use tracing::info;

/// Substring that marks a value as a URL
pub const URL_SCHEME_MARKER: &str = "://";

/// Message shown after every submission
pub const SUCCESS_MESSAGE: &str = "Your message has been sent. I will get back to you soon!";

/// How a contact value is displayed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactValue {
    /// Clickable link; text and target are the same string
    Link { text: String, target: String },
    /// Plain text
    Text(String),
}

impl ContactValue {
    /// Classify a raw contact value
    pub fn classify(value: &str) -> Self {
        if value.contains(URL_SCHEME_MARKER) {
            ContactValue::Link {
                text: value.to_string(),
                target: value.to_string(),
            }
        } else {
            ContactValue::Text(value.to_string())
        }
    }

    pub fn is_link(&self) -> bool {
        matches!(self, ContactValue::Link { .. })
    }

    /// Visible text
    pub fn text(&self) -> &str {
        match self {
            ContactValue::Link { text, .. } => text,
            ContactValue::Text(text) => text,
        }
    }
}

/// A contact entry ready for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactLine {
    pub method: String,
    pub value: ContactValue,
}

impl From<&ContactEntry> for ContactLine {
    fn from(entry: &ContactEntry) -> Self {
        Self {
            method: entry.method.clone(),
            value: ContactValue::classify(&entry.value),
        }
    }
}

/// Identifies one of the form's text inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Name,
    Email,
    Subject,
    Message,
}

impl FormField {
    /// Fields in display order
    pub const ALL: [FormField; 4] = [
        FormField::Name,
        FormField::Email,
        FormField::Subject,
        FormField::Message,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FormField::Name => "Name",
            FormField::Email => "Email",
            FormField::Subject => "Subject",
            FormField::Message => "Message",
        }
    }

    /// Multi-line input
    pub fn is_text_area(&self) -> bool {
        matches!(self, FormField::Message)
    }
}

/// Transient form values, alive for one interaction
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// Result of submitting the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Acknowledgment {
    pub message: &'static str,
}

impl ContactForm {
    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Subject => &self.subject,
            FormField::Message => &self.message,
        }
    }

    pub fn set_field(&mut self, field: FormField, value: String) {
        match field {
            FormField::Name => self.name = value,
            FormField::Email => self.email = value,
            FormField::Subject => self.subject = value,
            FormField::Message => self.message = value,
        }
    }

    /// Submit the form. No validation and no transmission: the
    /// acknowledgment is the same for any field contents.
    pub fn submit(&self) -> Acknowledgment {
        info!(
            message_len = self.message.chars().count(),
            "contact form submitted (not transmitted)"
        );
        Acknowledgment {
            message: SUCCESS_MESSAGE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_value_becomes_link() {
        let value = ContactValue::classify("https://github.com/yourusername");
        assert_eq!(
            value,
            ContactValue::Link {
                text: "https://github.com/yourusername".to_string(),
                target: "https://github.com/yourusername".to_string(),
            }
        );
    }

    #[test]
    fn test_plain_value_stays_text() {
        let value = ContactValue::classify("example@snu.ac.kr");
        assert_eq!(value, ContactValue::Text("example@snu.ac.kr".to_string()));
        assert!(!value.is_link());
        assert_eq!(value.text(), "example@snu.ac.kr");
    }

    #[test]
    fn test_other_schemes_are_links() {
        assert!(ContactValue::classify("http://example.com").is_link());
        assert!(!ContactValue::classify("www.example.com").is_link());
    }

    #[test]
    fn test_empty_submission_succeeds() {
        let ack = ContactForm::default().submit();
        assert_eq!(ack.message, SUCCESS_MESSAGE);
    }

    #[test]
    fn test_submission_ignores_contents() {
        let mut form = ContactForm::default();
        form.set_field(FormField::Email, "not an email".to_string());
        form.set_field(FormField::Message, "hi".to_string());
        assert_eq!(form.field(FormField::Email), "not an email");
        assert_eq!(form.submit(), ContactForm::default().submit());
    }
}
