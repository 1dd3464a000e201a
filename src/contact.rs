use std::{fmt, future::Future, time::Duration};

use serde::Serialize;

use crate::config::EmailJsConfig;

pub const DEFAULT_STATUS_DISPLAY: Duration = Duration::from_millis(10_000);
const MISSING_FIELDS_MESSAGE: &str = "Please fill in all required fields";
const UNEXPECTED_FAILURE_MESSAGE: &str = "An unexpected error occurred. Please try again.";

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactField {
    /// Maps a form control's `name` attribute; `title` is the template's
    /// name for the subject line.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "name" => Some(Self::Name),
            "email" => Some(Self::Email),
            "subject" | "title" => Some(Self::Subject),
            "message" => Some(Self::Message),
            _ => None,
        }
    }
}

#[derive(Clone, Default, PartialEq, Debug)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn set(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Subject => self.subject = value,
            ContactField::Message => self.message = value,
        }
    }

    pub fn is_complete(&self) -> bool {
        [&self.name, &self.email, &self.subject, &self.message]
            .iter()
            .all(|value| !value.trim().is_empty())
    }
}

#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub timestamp: String,
}

#[derive(Clone, PartialEq, Debug)]
pub enum ContactError {
    MissingFields,
    Unconfigured,
    Transport(String),
    Rejected { status: u16, body: String },
}

impl ContactError {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MissingFields => "missing_fields",
            Self::Unconfigured => "unconfigured",
            Self::Transport(_) => "transport",
            Self::Rejected { .. } => "rejected",
        }
    }
}

impl fmt::Display for ContactError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingFields => f.write_str(MISSING_FIELDS_MESSAGE),
            Self::Unconfigured => f.write_str("The contact form is not configured yet. Please reach out by email."),
            Self::Transport(detail) if detail.trim().is_empty() => {
                f.write_str(UNEXPECTED_FAILURE_MESSAGE)
            }
            Self::Transport(detail) => write!(f, "Could not send your message: {detail}"),
            Self::Rejected { status, body } if body.trim().is_empty() => {
                write!(f, "The email service rejected the message (status {status}).")
            }
            Self::Rejected { status, body } => {
                write!(f, "The email service rejected the message (status {status}): {}", body.trim())
            }
        }
    }
}

impl std::error::Error for ContactError {}

/// Hosted email delivery. Implementations report any non-delivery as an
/// error; the desk turns it into a status message.
pub trait ContactTransport {
    fn send(&self, request: &ContactRequest) -> impl Future<Output = Result<(), ContactError>>;
}

#[derive(Clone, PartialEq, Debug)]
pub enum SubmitStatus {
    Idle,
    Success,
    Error(String),
}

/// Returned whenever a non-idle status is shown; hand it back to
/// [`ContactDesk::clear_status`] after `clear_after`.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct StatusTicket {
    pub clear_after: Duration,
    generation: u64,
}

#[derive(Clone, PartialEq, Debug)]
pub struct ContactDesk {
    form: ContactForm,
    is_submitting: bool,
    status: SubmitStatus,
    status_display: Duration,
    generation: u64,
}

impl Default for ContactDesk {
    fn default() -> Self {
        Self::new(DEFAULT_STATUS_DISPLAY)
    }
}

impl ContactDesk {
    pub fn new(status_display: Duration) -> Self {
        Self {
            form: ContactForm::default(),
            is_submitting: false,
            status: SubmitStatus::Idle,
            status_display,
            generation: 0,
        }
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn status(&self) -> &SubmitStatus {
        &self.status
    }

    pub fn is_submitting(&self) -> bool {
        self.is_submitting
    }

    pub fn update_field(&mut self, name: &str, value: String) {
        if let Some(field) = ContactField::from_name(name) {
            self.form.set(field, value);
        }
    }

    /// Marks the desk busy and builds the outgoing request. Any status on
    /// display is dropped along with its pending clear.
    pub fn begin_submit(&mut self, timestamp: String) -> Result<ContactRequest, ContactError> {
        self.is_submitting = true;
        self.status = SubmitStatus::Idle;
        self.generation = self.generation.wrapping_add(1);

        if !self.form.is_complete() {
            return Err(ContactError::MissingFields);
        }

        Ok(ContactRequest {
            name: self.form.name.trim().to_string(),
            email: self.form.email.trim().to_string(),
            subject: self.form.subject.trim().to_string(),
            message: self.form.message.clone(),
            timestamp,
        })
    }

    pub fn finish_submit(&mut self, outcome: Result<(), ContactError>) -> StatusTicket {
        self.is_submitting = false;
        self.generation = self.generation.wrapping_add(1);

        match outcome {
            Ok(()) => {
                self.status = SubmitStatus::Success;
                self.form = ContactForm::default();
            }
            Err(error) => {
                self.status = SubmitStatus::Error(error.to_string());
            }
        }

        StatusTicket {
            clear_after: self.status_display,
            generation: self.generation,
        }
    }

    /// Reverts to idle unless a newer status replaced the ticketed one.
    pub fn clear_status(&mut self, ticket: &StatusTicket) -> bool {
        if ticket.generation != self.generation || self.status == SubmitStatus::Idle {
            return false;
        }

        self.status = SubmitStatus::Idle;
        true
    }
}

/// Hands a request from [`ContactDesk::begin_submit`] to `transport`.
/// Validation failures pass through without a send.
pub async fn deliver(
    transport: &impl ContactTransport,
    request: Result<ContactRequest, ContactError>,
) -> Result<(), ContactError> {
    transport.send(&request?).await
}

#[derive(Serialize)]
pub struct EmailJsPayload<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: EmailJsTemplateParams<'a>,
}

#[derive(Serialize)]
struct EmailJsTemplateParams<'a> {
    title: &'a str,
    name: &'a str,
    email: &'a str,
    message: &'a str,
    time: &'a str,
}

impl<'a> EmailJsPayload<'a> {
    pub fn new(config: &'a EmailJsConfig, request: &'a ContactRequest) -> Self {
        Self {
            service_id: &config.service_id,
            template_id: &config.template_id,
            user_id: &config.public_key,
            template_params: EmailJsTemplateParams {
                title: &request.subject,
                name: &request.name,
                email: &request.email,
                message: &request.message,
                time: &request.timestamp,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct RecordingTransport {
        outcome: Result<(), ContactError>,
        sent: RefCell<Vec<ContactRequest>>,
    }

    impl RecordingTransport {
        fn new(outcome: Result<(), ContactError>) -> Self {
            Self {
                outcome,
                sent: RefCell::new(Vec::new()),
            }
        }
    }

    impl ContactTransport for RecordingTransport {
        async fn send(&self, request: &ContactRequest) -> Result<(), ContactError> {
            self.sent.borrow_mut().push(request.clone());
            self.outcome.clone()
        }
    }

    async fn submit(
        desk: &mut ContactDesk,
        transport: &RecordingTransport,
        timestamp: &str,
    ) -> StatusTicket {
        let request = desk.begin_submit(timestamp.to_string());
        assert!(desk.is_submitting());
        let outcome = deliver(transport, request).await;
        desk.finish_submit(outcome)
    }

    fn filled_desk() -> ContactDesk {
        let mut desk = ContactDesk::default();
        desk.update_field("name", "Ada".to_string());
        desk.update_field("email", "ada@example.com".to_string());
        desk.update_field("title", "Hello".to_string());
        desk.update_field("message", "Let's build something.".to_string());
        desk
    }

    #[tokio::test]
    async fn successful_submission_resets_form_and_clears_after_display_window() {
        let transport = RecordingTransport::new(Ok(()));
        let mut desk = filled_desk();

        let ticket = submit(&mut desk, &transport, "2026-10-18 09:00").await;

        assert_eq!(*desk.status(), SubmitStatus::Success);
        assert_eq!(*desk.form(), ContactForm::default());
        assert!(!desk.is_submitting());
        assert_eq!(ticket.clear_after, Duration::from_millis(10_000));

        let sent = transport.sent.borrow();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].subject, "Hello");
        assert_eq!(sent[0].timestamp, "2026-10-18 09:00");

        assert!(desk.clear_status(&ticket));
        assert_eq!(*desk.status(), SubmitStatus::Idle);
    }

    #[tokio::test]
    async fn missing_fields_never_reach_transport() {
        let transport = RecordingTransport::new(Ok(()));
        let mut desk = filled_desk();
        desk.update_field("email", "   ".to_string());

        submit(&mut desk, &transport, "now").await;

        assert!(transport.sent.borrow().is_empty());
        assert_eq!(
            *desk.status(),
            SubmitStatus::Error("Please fill in all required fields".to_string())
        );
        assert_eq!(desk.form().name, "Ada");
    }

    #[tokio::test]
    async fn transport_failure_keeps_form_for_retry() {
        let transport = RecordingTransport::new(Err(ContactError::Rejected {
            status: 400,
            body: "The public key is invalid".to_string(),
        }));
        let mut desk = filled_desk();

        submit(&mut desk, &transport, "now").await;

        match desk.status() {
            SubmitStatus::Error(message) => {
                assert!(message.contains("status 400"));
                assert!(message.contains("public key is invalid"));
            }
            other => panic!("expected error status, got {other:?}"),
        }
        assert_eq!(desk.form().subject, "Hello");
    }

    #[tokio::test]
    async fn newer_status_outlives_older_clear_ticket() {
        let failing = RecordingTransport::new(Err(ContactError::Transport(String::new())));
        let working = RecordingTransport::new(Ok(()));
        let mut desk = filled_desk();

        let stale = submit(&mut desk, &failing, "t1").await;
        let fresh = submit(&mut desk, &working, "t2").await;

        assert!(!desk.clear_status(&stale));
        assert_eq!(*desk.status(), SubmitStatus::Success);
        assert!(desk.clear_status(&fresh));
        assert!(!desk.clear_status(&fresh));
    }

    #[test]
    fn begin_submit_marks_desk_busy() {
        let mut desk = filled_desk();
        let request = desk.begin_submit("now".to_string()).expect("form complete");

        assert!(desk.is_submitting());
        assert_eq!(request.name, "Ada");
        assert_eq!(*desk.status(), SubmitStatus::Idle);
    }

    #[test]
    fn unknown_field_names_are_ignored() {
        let mut desk = ContactDesk::default();
        desk.update_field("phone", "555".to_string());
        assert_eq!(*desk.form(), ContactForm::default());
    }

    #[test]
    fn emailjs_payload_uses_template_field_names() {
        let config = EmailJsConfig {
            service_id: "service_x".to_string(),
            template_id: "template_y".to_string(),
            public_key: "pk".to_string(),
            endpoint: "https://api.emailjs.com/api/v1.0/email/send".to_string(),
        };
        let request = ContactRequest {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            subject: "Hello".to_string(),
            message: "Hi".to_string(),
            timestamp: "noon".to_string(),
        };

        let value = serde_json::to_value(EmailJsPayload::new(&config, &request)).expect("serializes");

        assert_eq!(value["user_id"], "pk");
        assert_eq!(value["template_params"]["title"], "Hello");
        assert_eq!(value["template_params"]["time"], "noon");
    }

    #[test]
    fn empty_transport_detail_falls_back_to_generic_message() {
        assert_eq!(
            ContactError::Transport(" ".to_string()).to_string(),
            "An unexpected error occurred. Please try again."
        );
    }
}
