use askama::Template;
use serde::Deserialize;

use crate::Notification;

/// Raw contact form payload as it arrives off the wire. Every field
/// is optional here; validation happens in [`Submission::parse`].
#[derive(Debug, Default, Clone, Deserialize)]
pub struct SubmitFormInput {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub message: Option<String>,
}

/// One or more required fields were absent, null or empty.
#[derive(Debug, thiserror::Error)]
#[error("Missing required fields")]
pub struct MissingFields;

/// A validated contact form submission. All four fields are present
/// and non-empty; the only way to obtain one is [`Submission::parse`].
#[derive(Debug, Clone)]
pub struct Submission {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

impl Submission {
    /// Validate a raw payload. Absent, null and empty-string fields
    /// are all rejected the same way.
    pub fn parse(input: SubmitFormInput) -> Result<Self, MissingFields> {
        let require = |field: Option<String>| field.filter(|value| !value.is_empty());

        Ok(Self {
            name: require(input.name).ok_or(MissingFields)?,
            email: require(input.email).ok_or(MissingFields)?,
            phone: require(input.phone).ok_or(MissingFields)?,
            message: require(input.message).ok_or(MissingFields)?,
        })
    }

    pub fn subject(&self) -> String {
        format!("New Contact Form Submission from {}", self.name)
    }

    /// Message body split on newlines. The template joins the lines
    /// with `<br>` after askama has escaped each one, so markup in
    /// the message never reaches the operator's mail client live.
    fn message_lines(&self) -> Vec<String> {
        self.message
            .replace("\r\n", "\n")
            .split('\n')
            .map(str::to_string)
            .collect()
    }

    /// Render the operator notification for this submission.
    pub fn notification(&self, to: impl Into<String>) -> Result<Notification, askama::Error> {
        let message_lines = self.message_lines();

        let html = ContactHtmlTemplate {
            name: &self.name,
            email: &self.email,
            phone: &self.phone,
            message_lines: &message_lines,
        }
        .render()?;

        let plain = ContactTextTemplate {
            name: &self.name,
            email: &self.email,
            phone: &self.phone,
            message: &self.message,
        }
        .render()?;

        Ok(Notification {
            to: to.into(),
            subject: self.subject(),
            html,
            plain,
        })
    }
}

#[derive(Template)]
#[template(path = "emails/contact.html")]
struct ContactHtmlTemplate<'a> {
    name: &'a str,
    email: &'a str,
    phone: &'a str,
    message_lines: &'a [String],
}

#[derive(Template)]
#[template(path = "emails/contact.txt")]
struct ContactTextTemplate<'a> {
    name: &'a str,
    email: &'a str,
    phone: &'a str,
    message: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_input() -> SubmitFormInput {
        SubmitFormInput {
            name: Some("John Doe".to_string()),
            email: Some("john@example.com".to_string()),
            phone: Some("555-0100".to_string()),
            message: Some("Hello there".to_string()),
        }
    }

    #[test]
    fn parse_accepts_full_payload() {
        let submission = Submission::parse(full_input()).unwrap();
        assert_eq!(submission.name, "John Doe");
        assert_eq!(submission.phone, "555-0100");
    }

    #[test]
    fn parse_rejects_absent_field() {
        let input = SubmitFormInput {
            phone: None,
            ..full_input()
        };
        assert!(Submission::parse(input).is_err());
    }

    #[test]
    fn parse_rejects_empty_field() {
        let input = SubmitFormInput {
            email: Some(String::new()),
            ..full_input()
        };
        assert!(Submission::parse(input).is_err());
    }

    #[test]
    fn subject_contains_submitter_name() {
        let submission = Submission::parse(full_input()).unwrap();
        assert!(submission.subject().contains("John Doe"));
    }

    #[test]
    fn newlines_become_break_markers() {
        let input = SubmitFormInput {
            message: Some("one\ntwo\nthree".to_string()),
            ..full_input()
        };
        let submission = Submission::parse(input).unwrap();
        let notification = submission.notification("ops@example.com").unwrap();

        let breaks = notification.html.matches("<br>").count();
        assert_eq!(breaks, 2, "one break marker per newline");
        assert!(notification.html.contains("one"));
        assert!(notification.html.contains("three"));
    }

    #[test]
    fn crlf_counts_as_single_newline() {
        let input = SubmitFormInput {
            message: Some("one\r\ntwo".to_string()),
            ..full_input()
        };
        let submission = Submission::parse(input).unwrap();
        let notification = submission.notification("ops@example.com").unwrap();

        assert_eq!(notification.html.matches("<br>").count(), 1);
    }

    #[test]
    fn html_body_escapes_submitted_markup() {
        let input = SubmitFormInput {
            name: Some("<script>alert(1)</script>".to_string()),
            message: Some("<b>bold</b> claim".to_string()),
            ..full_input()
        };
        let submission = Submission::parse(input).unwrap();
        let notification = submission.notification("ops@example.com").unwrap();

        assert!(!notification.html.contains("<script>"));
        assert!(notification.html.contains("&lt;script&gt;"));
        assert!(!notification.html.contains("<b>bold</b>"));
    }

    #[test]
    fn notification_addresses_fixed_recipient() {
        let submission = Submission::parse(full_input()).unwrap();
        let notification = submission.notification("ops@financeflow.app").unwrap();

        assert_eq!(notification.to, "ops@financeflow.app");
        assert!(notification.html.contains("john@example.com"));
        assert!(notification.plain.contains("john@example.com"));
        assert!(notification.plain.contains("555-0100"));
    }
}
