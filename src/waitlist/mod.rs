//! Waitlist capture: email input state, validation, and submission outcome

mod client;

pub use client::{SubmitError, WaitlistClient};

use crate::constants::MSG_INVALID_EMAIL;
use regex::Regex;
use std::sync::LazyLock;
use tracing::{debug, info};

static EMAIL_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

/// Loose `local@domain.tld` shape check on the trimmed input. Not RFC 5322.
pub fn is_valid_email(text: &str) -> bool {
    EMAIL_SHAPE.is_match(text.trim())
}

/// Form state as seen by the UI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
    Idle,
    Error,
    Submitting,
    Submitted,
}

#[derive(Debug, Default)]
pub struct WaitlistForm {
    email: String,
    error: Option<String>,
    submitted: bool,
    submitting: bool,
}

impl WaitlistForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    pub fn state(&self) -> FormState {
        if self.submitted {
            FormState::Submitted
        } else if self.submitting {
            FormState::Submitting
        } else if self.error.is_some() {
            FormState::Error
        } else {
            FormState::Idle
        }
    }

    /// Replace the email text. Typing always dismisses a previous error.
    pub fn update_email(&mut self, text: impl Into<String>) {
        self.email = text.into();
        self.error = None;
    }

    /// Validate and mark the form as in flight.
    ///
    /// Returns the trimmed address to send, or `None` when nothing should go
    /// over the wire (already submitted, already in flight, or invalid input).
    pub fn begin_submit(&mut self) -> Option<String> {
        if self.submitted || self.submitting {
            return None;
        }
        self.error = None;

        if !is_valid_email(&self.email) {
            debug!("Rejected malformed email before submission");
            self.error = Some(MSG_INVALID_EMAIL.to_string());
            return None;
        }

        self.submitting = true;
        Some(self.email.trim().to_string())
    }

    /// Apply the outcome of the request started by `begin_submit`.
    pub fn finish_submit(&mut self, result: Result<(), SubmitError>) {
        self.submitting = false;
        match result {
            Ok(()) => {
                info!("Joined waitlist");
                self.submitted = true;
                self.email.clear();
                self.error = None;
            }
            Err(e) => self.error = Some(e.to_string()),
        }
    }

    /// Validate, send, and record the outcome in one step.
    ///
    /// The window splits this across frames (see `App::submit_waitlist`), so
    /// only headless callers use it.
    #[allow(dead_code)]
    pub async fn attempt_submit(&mut self, client: &WaitlistClient) {
        let Some(email) = self.begin_submit() else {
            return;
        };
        let result = client.submit(&email).await;
        self.finish_submit(result);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::MSG_NETWORK_ERROR;
    use wiremock::matchers::{body_json, method};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn stub(status: u16, body: &str) -> MockServer {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(status).set_body_string(body))
            .mount(&server)
            .await;
        server
    }

    #[test]
    fn email_shape() {
        for ok in ["a@b.com", "  a@b.com  ", "first.last@sub.example.co", "a@b.c.d"] {
            assert!(is_valid_email(ok), "{ok:?} should pass");
        }
        let bad_inputs = [
            "", "   ", "foo", "foo@bar", "@b.com", "a@.com", "a@b.", "a b@c.com", "a@@b.com",
        ];
        for bad in bad_inputs {
            assert!(!is_valid_email(bad), "{bad:?} should fail");
        }
    }

    #[test]
    fn starts_idle() {
        let form = WaitlistForm::new();
        assert_eq!(form.state(), FormState::Idle);
        assert_eq!(form.email(), "");
        assert_eq!(form.error(), None);
        assert!(!form.is_submitted());
    }

    #[tokio::test]
    async fn invalid_input_never_reaches_network() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;
        let client = WaitlistClient::new(server.uri()).unwrap();

        for text in ["", "foo", "foo@bar"] {
            let mut form = WaitlistForm::new();
            form.update_email(text);
            form.attempt_submit(&client).await;
            assert!(!form.is_submitted());
            assert_eq!(form.error(), Some(MSG_INVALID_EMAIL));
            assert_eq!(form.state(), FormState::Error);
        }
    }

    #[tokio::test]
    async fn accepted_signup_clears_form() {
        let server = stub(200, "").await;
        let client = WaitlistClient::new(server.uri()).unwrap();

        let mut form = WaitlistForm::new();
        form.update_email("a@b.com");
        form.attempt_submit(&client).await;

        assert!(form.is_submitted());
        assert_eq!(form.email(), "");
        assert_eq!(form.error(), None);
        assert_eq!(form.state(), FormState::Submitted);
    }

    #[tokio::test]
    async fn rejection_reports_status() {
        let server = stub(422, "bad request").await;
        let client = WaitlistClient::new(server.uri()).unwrap();

        let mut form = WaitlistForm::new();
        form.update_email("a@b.com");
        form.attempt_submit(&client).await;

        assert!(!form.is_submitted());
        let msg = form.error().unwrap();
        assert!(msg.contains("422"), "{msg}");
        assert_eq!(form.email(), "a@b.com");
    }

    #[tokio::test]
    async fn connectivity_failure_is_distinct_from_rejection() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let client = WaitlistClient::new(format!("http://{addr}")).unwrap();

        let mut form = WaitlistForm::new();
        form.update_email("a@b.com");
        form.attempt_submit(&client).await;

        assert!(!form.is_submitted());
        assert_eq!(form.error(), Some(MSG_NETWORK_ERROR));
        assert!(!form.error().unwrap().contains("HTTP"));
    }

    #[tokio::test]
    async fn trims_before_sending() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(body_json(serde_json::json!({ "email": "a@b.com" })))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;
        let client = WaitlistClient::new(server.uri()).unwrap();

        let mut form = WaitlistForm::new();
        form.update_email("  a@b.com  ");
        form.attempt_submit(&client).await;
        assert!(form.is_submitted());
    }

    #[tokio::test]
    async fn resubmit_after_failure_is_allowed() {
        let server = stub(500, "").await;
        let client = WaitlistClient::new(server.uri()).unwrap();

        let mut form = WaitlistForm::new();
        form.update_email("a@b.com");
        form.attempt_submit(&client).await;
        assert_eq!(form.state(), FormState::Error);

        server.reset().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;
        form.attempt_submit(&client).await;
        assert_eq!(form.state(), FormState::Submitted);
    }

    #[test]
    fn editing_clears_error() {
        let mut form = WaitlistForm::new();
        form.update_email("nope");
        assert!(form.begin_submit().is_none());
        assert_eq!(form.state(), FormState::Error);

        form.update_email("nope2");
        assert_eq!(form.error(), None);
        assert_eq!(form.state(), FormState::Idle);
    }

    #[test]
    fn in_flight_blocks_second_submit() {
        let mut form = WaitlistForm::new();
        form.update_email("a@b.com");
        assert_eq!(form.begin_submit().as_deref(), Some("a@b.com"));
        assert_eq!(form.state(), FormState::Submitting);
        assert!(form.begin_submit().is_none());

        form.finish_submit(Err(SubmitError::Unexpected("boom".into())));
        assert_eq!(form.state(), FormState::Error);
        assert_eq!(form.error(), Some("Submission failed: boom"));
    }

    #[test]
    fn submitted_is_terminal() {
        let mut form = WaitlistForm::new();
        form.update_email("a@b.com");
        form.begin_submit();
        form.finish_submit(Ok(()));
        assert!(form.is_submitted());

        form.update_email("other@b.com");
        assert!(form.begin_submit().is_none());
        form.update_email("");
        assert!(form.begin_submit().is_none());
        assert!(form.is_submitted());
        assert_eq!(form.state(), FormState::Submitted);
    }
}
