//! Contact form intake.
//!
//! A submission is either complete (all four fields present and non-blank)
//! or rejected as a whole. Accepted submissions go to a [`SubmissionSink`];
//! the outcome is reported to the visitor with a [`FlashMessage`].

use serde::{Deserialize, Serialize};

/// Flash shown when any required field is missing.
pub const MISSING_FIELDS_MESSAGE: &str = "Please fill in all required fields.";

/// Raw contact form as submitted. Absent fields are `None`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
}

/// A validated contact submission. Lives for one request only.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactSubmission {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub message: String,
}

/// Error returned when a contact form is rejected.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ContactError {
    /// One or more required fields were absent or blank.
    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),
}

impl ContactError {
    /// Flash message shown to the visitor.
    #[must_use]
    pub fn flash(&self) -> FlashMessage {
        match self {
            Self::MissingFields(_) => FlashMessage::error(MISSING_FIELDS_MESSAGE),
        }
    }
}

impl ContactForm {
    /// Parse an `application/x-www-form-urlencoded` body.
    ///
    /// Body data that cannot be decoded yields an empty form, which then
    /// fails validation like any other incomplete submission.
    #[must_use]
    pub fn from_urlencoded(body: &[u8]) -> Self {
        match serde_urlencoded::from_bytes::<Vec<(String, String)>>(body) {
            Ok(pairs) => Self::from_pairs(pairs),
            Err(e) => {
                tracing::debug!(error = %e, "Unreadable contact form body");
                Self::default()
            }
        }
    }

    /// Build a form from key/value pairs.
    ///
    /// Unknown keys are ignored; for a repeated key the first value wins.
    #[must_use]
    pub fn from_pairs(pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        let mut form = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "first_name" => &mut form.first_name,
                "last_name" => &mut form.last_name,
                "email" => &mut form.email,
                "message" => &mut form.message,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        form
    }

    /// Validate the form into a submission.
    ///
    /// Values are kept as entered; a field counts as missing when it is
    /// absent or contains only whitespace.
    ///
    /// # Errors
    ///
    /// Returns `ContactError::MissingFields` listing every missing field.
    pub fn validate(self) -> Result<ContactSubmission, ContactError> {
        let mut missing = Vec::new();
        let mut require = |value: Option<String>, field: &'static str| match value {
            Some(v) if !v.trim().is_empty() => v,
            _ => {
                missing.push(field);
                String::new()
            }
        };

        let submission = ContactSubmission {
            first_name: require(self.first_name, "first_name"),
            last_name: require(self.last_name, "last_name"),
            email: require(self.email, "email"),
            message: require(self.message, "message"),
        };

        if missing.is_empty() {
            Ok(submission)
        } else {
            Err(ContactError::MissingFields(missing))
        }
    }
}

impl ContactSubmission {
    /// Success flash echoing the visitor's first name and email.
    #[must_use]
    pub fn acknowledgement(&self) -> FlashMessage {
        FlashMessage::success(format!(
            "Thank you {}! Your message has been received. We will contact you soon at {}.",
            self.first_name, self.email
        ))
    }
}

/// Flash message category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlashCategory {
    Success,
    Error,
}

/// Short-lived status message shown on the next rendered page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlashMessage {
    pub category: FlashCategory,
    pub message: String,
}

impl FlashMessage {
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            category: FlashCategory::Success,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            category: FlashCategory::Error,
            message: message.into(),
        }
    }
}

/// Error type returned by a [`SubmissionSink`].
pub type SinkError = Box<dyn std::error::Error + Send + Sync>;

/// Destination for accepted contact submissions.
pub trait SubmissionSink: Send + Sync {
    /// Hand over an accepted submission.
    ///
    /// # Errors
    ///
    /// Returns an error if the submission could not be recorded.
    fn store(&self, submission: &ContactSubmission) -> Result<(), SinkError>;
}

/// Sink that records accepted submissions in the log only.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogSink;

impl SubmissionSink for LogSink {
    fn store(&self, submission: &ContactSubmission) -> Result<(), SinkError> {
        tracing::info!(
            message_len = submission.message.len(),
            "Contact submission accepted"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn parse(body: &str) -> ContactForm {
        ContactForm::from_urlencoded(body.as_bytes())
    }

    #[test]
    fn test_parse_absent_fields_are_none() {
        let form = parse("first_name=Jane&email=jane%40x.com");
        assert_eq!(form.first_name.as_deref(), Some("Jane"));
        assert_eq!(form.email.as_deref(), Some("jane@x.com"));
        assert!(form.last_name.is_none());
        assert!(form.message.is_none());
    }

    #[test]
    fn test_parse_repeated_field_keeps_first() {
        let form = parse("first_name=Jane&first_name=J&email=jane%40x.com&email=other");
        assert_eq!(form.first_name.as_deref(), Some("Jane"));
        assert_eq!(form.email.as_deref(), Some("jane@x.com"));
    }

    #[test]
    fn test_parse_ignores_unknown_keys() {
        let form = parse("first_name=Jane&newsletter=on&csrf_token=abc");
        assert_eq!(
            form,
            ContactForm {
                first_name: Some("Jane".to_owned()),
                ..ContactForm::default()
            }
        );
    }

    #[test]
    fn test_parse_empty_and_non_form_bodies() {
        assert_eq!(parse(""), ContactForm::default());
        let err = parse(r#"{"first_name":"Jane"}"#).validate().unwrap_err();
        assert_eq!(
            err,
            ContactError::MissingFields(vec!["first_name", "last_name", "email", "message"])
        );
    }

    #[test]
    fn test_validate_complete_form() {
        let submission = parse("first_name=Jane&last_name=Doe&email=jane%40x.com&message=Hi")
            .validate()
            .unwrap();
        assert_eq!(
            submission,
            ContactSubmission {
                first_name: "Jane".to_owned(),
                last_name: "Doe".to_owned(),
                email: "jane@x.com".to_owned(),
                message: "Hi".to_owned(),
            }
        );
    }

    #[test]
    fn test_validate_missing_message() {
        let err = parse("first_name=Jane&last_name=Doe&email=jane%40x.com")
            .validate()
            .unwrap_err();
        assert_eq!(err, ContactError::MissingFields(vec!["message"]));
    }

    #[test]
    fn test_validate_empty_and_blank_fields() {
        let err = parse("first_name=&last_name=%20%20&email=jane%40x.com&message=Hi")
            .validate()
            .unwrap_err();
        assert_eq!(
            err,
            ContactError::MissingFields(vec!["first_name", "last_name"])
        );
        assert!(err.to_string().contains("first_name, last_name"));
    }

    #[test]
    fn test_validate_empty_form() {
        let err = ContactForm::default().validate().unwrap_err();
        assert_eq!(
            err,
            ContactError::MissingFields(vec!["first_name", "last_name", "email", "message"])
        );
    }

    #[test]
    fn test_no_email_format_check() {
        // Any non-blank value is accepted
        let submission = parse("first_name=J&last_name=D&email=not-an-email&message=x")
            .validate()
            .unwrap();
        assert_eq!(submission.email, "not-an-email");
    }

    #[test]
    fn test_error_flash() {
        let flash = ContactError::MissingFields(vec!["email"]).flash();
        assert_eq!(flash.category, FlashCategory::Error);
        assert_eq!(flash.message, "Please fill in all required fields.");
    }

    #[test]
    fn test_acknowledgement_echoes_name_and_email() {
        let flash = parse("first_name=Jane&last_name=Doe&email=jane%40x.com&message=Hi")
            .validate()
            .unwrap()
            .acknowledgement();
        assert_eq!(flash.category, FlashCategory::Success);
        assert_eq!(
            flash.message,
            "Thank you Jane! Your message has been received. We will contact you soon at jane@x.com."
        );
    }

    #[test]
    fn test_flash_serialization() {
        let json = serde_json::to_value(FlashMessage::error("nope")).unwrap();
        assert_eq!(json, serde_json::json!({"category": "error", "message": "nope"}));

        let back: FlashMessage =
            serde_json::from_str(r#"{"category":"success","message":"ok"}"#).unwrap();
        assert_eq!(back, FlashMessage::success("ok"));
    }

    #[test]
    fn test_log_sink_accepts() {
        let submission = ContactForm {
            first_name: Some("Jane".to_owned()),
            last_name: Some("Doe".to_owned()),
            email: Some("jane@x.com".to_owned()),
            message: Some("Hi".to_owned()),
        }
        .validate()
        .unwrap();
        assert!(LogSink.store(&submission).is_ok());
    }
}
