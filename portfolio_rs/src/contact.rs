//! Contact form state and delegation to a hosted message-delivery service.
//!
//! The form collects three fields and hands them to a [`MessageDelivery`]
//! collaborator. Success clears the fields; failure keeps them so the
//! visitor can try again. While a send is in flight a second submit is
//! refused, and the UI disables the controls.

use std::future::Future;

use serde::Serialize;
use thiserror::Error;

use crate::config::ContactSettings;

/// Notice shown after a successful send.
pub const SENT_NOTICE: &str = "Message sent successfully!";
/// Notice shown after a failed send.
pub const FAILED_NOTICE: &str = "Failed to send message. Try again later.";

/// Why a delivery attempt failed.
#[derive(Debug, Error)]
pub enum DeliveryError {
    /// The request never got a response.
    #[error("delivery request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// The service answered with a non-success status.
    #[error("delivery rejected with status {status}: {body}")]
    Rejected { status: u16, body: String },
}

/// Why a submit could not proceed.
#[derive(Debug, Error)]
pub enum ContactError {
    #[error("the {0} field is required")]
    MissingField(&'static str),
    #[error("a message is already being sent")]
    AlreadyPending,
    #[error(transparent)]
    Delivery(#[from] DeliveryError),
}

/// Lifecycle of the most recent submit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ContactStatus {
    #[default]
    Idle,
    Pending,
    Sent,
    Failed,
}

/// Payload handed to the delivery collaborator.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ContactMessage {
    pub from_name: String,
    pub reply_to: String,
    pub message: String,
}

/// Editable contact form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub reply_to: String,
    pub message: String,
    status: ContactStatus,
    in_flight: Option<ContactMessage>,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> ContactStatus {
        self.status
    }

    /// Whether the submit control should be disabled.
    pub fn is_pending(&self) -> bool {
        self.status == ContactStatus::Pending
    }

    /// Text for the visitor after a send resolved, if any.
    pub fn notice(&self) -> Option<&'static str> {
        match self.status {
            ContactStatus::Sent => Some(SENT_NOTICE),
            ContactStatus::Failed => Some(FAILED_NOTICE),
            ContactStatus::Idle | ContactStatus::Pending => None,
        }
    }

    /// Check required fields and move to `Pending`, returning the message to
    /// deliver. Nothing changes on error.
    ///
    /// A field counts as filled when it is non-empty, the same rule the
    /// browser's `required` attribute applies; whitespace is sent as typed.
    pub fn begin_submit(&mut self) -> Result<ContactMessage, ContactError> {
        if self.is_pending() {
            return Err(ContactError::AlreadyPending);
        }
        for (field, value) in [
            ("name", &self.name),
            ("email", &self.reply_to),
            ("message", &self.message),
        ] {
            if value.is_empty() {
                return Err(ContactError::MissingField(field));
            }
        }
        let message = ContactMessage {
            from_name: self.name.clone(),
            reply_to: self.reply_to.clone(),
            message: self.message.clone(),
        };
        self.status = ContactStatus::Pending;
        self.in_flight = Some(message.clone());
        Ok(message)
    }

    /// Record the outcome of a delivery started by
    /// [`begin_submit`](Self::begin_submit).
    ///
    /// On success only fields still holding the submitted value are cleared,
    /// so text edited after the submit survives.
    pub fn finish(&mut self, outcome: &Result<(), DeliveryError>) {
        let sent = self.in_flight.take();
        match outcome {
            Ok(()) => {
                if let Some(sent) = sent {
                    clear_if_unchanged(&mut self.name, &sent.from_name);
                    clear_if_unchanged(&mut self.reply_to, &sent.reply_to);
                    clear_if_unchanged(&mut self.message, &sent.message);
                }
                self.status = ContactStatus::Sent;
            }
            Err(err) => {
                tracing::warn!(error = %err, "contact message not delivered");
                self.status = ContactStatus::Failed;
            }
        }
    }

    /// Validate, deliver, and record the outcome in one go.
    pub async fn submit<D: MessageDelivery>(&mut self, delivery: &D) -> Result<(), ContactError> {
        let message = self.begin_submit()?;
        let outcome = delivery.deliver(&message).await;
        self.finish(&outcome);
        outcome.map_err(ContactError::from)
    }
}

fn clear_if_unchanged(field: &mut String, sent: &str) {
    if field == sent {
        field.clear();
    }
}

/// External collaborator that transmits a contact message.
pub trait MessageDelivery {
    fn deliver(&self, message: &ContactMessage)
    -> impl Future<Output = Result<(), DeliveryError>>;
}

/// Request body understood by the EmailJS send endpoint.
#[derive(Debug, Serialize)]
pub struct EmailJsRequest<'a> {
    pub service_id: &'a str,
    pub template_id: &'a str,
    pub user_id: &'a str,
    pub template_params: &'a ContactMessage,
}

/// Delivery through the hosted EmailJS REST endpoint.
///
/// Holds only credentials; an HTTP client is created per send so the value
/// stays cheap to clone into UI closures.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmailJsClient {
    settings: ContactSettings,
}

impl EmailJsClient {
    pub fn new(settings: ContactSettings) -> Self {
        Self { settings }
    }

    pub fn endpoint(&self) -> &str {
        &self.settings.endpoint
    }

    /// JSON body for `message`.
    pub fn request_body<'a>(&'a self, message: &'a ContactMessage) -> EmailJsRequest<'a> {
        EmailJsRequest {
            service_id: &self.settings.service_id,
            template_id: &self.settings.template_id,
            user_id: &self.settings.public_key,
            template_params: message,
        }
    }
}

impl MessageDelivery for EmailJsClient {
    async fn deliver(&self, message: &ContactMessage) -> Result<(), DeliveryError> {
        tracing::info!(endpoint = %self.settings.endpoint, "sending contact message");
        let response = reqwest::Client::new()
            .post(&self.settings.endpoint)
            .json(&self.request_body(message))
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            tracing::info!(status = status.as_u16(), "contact message delivered");
            Ok(())
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(DeliveryError::Rejected {
                status: status.as_u16(),
                body,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;

    /// Records messages and answers with a fixed outcome.
    struct FakeDelivery {
        accept: bool,
        seen: RefCell<Vec<ContactMessage>>,
    }

    impl FakeDelivery {
        fn new(accept: bool) -> Self {
            Self {
                accept,
                seen: RefCell::new(Vec::new()),
            }
        }
    }

    impl MessageDelivery for FakeDelivery {
        async fn deliver(&self, message: &ContactMessage) -> Result<(), DeliveryError> {
            self.seen.borrow_mut().push(message.clone());
            if self.accept {
                Ok(())
            } else {
                Err(DeliveryError::Rejected {
                    status: 400,
                    body: "bad template".into(),
                })
            }
        }
    }

    fn filled() -> ContactForm {
        ContactForm {
            name: "Ada".into(),
            reply_to: "ada@example.com".into(),
            message: "Hello!".into(),
            ..ContactForm::default()
        }
    }

    #[tokio::test]
    async fn successful_send_clears_fields() {
        let delivery = FakeDelivery::new(true);
        let mut form = filled();

        form.submit(&delivery).await.expect("delivered");

        assert_eq!(form.status(), ContactStatus::Sent);
        assert_eq!(form.notice(), Some(SENT_NOTICE));
        assert!(form.name.is_empty() && form.reply_to.is_empty() && form.message.is_empty());
        assert_eq!(
            delivery.seen.borrow().as_slice(),
            &[ContactMessage {
                from_name: "Ada".into(),
                reply_to: "ada@example.com".into(),
                message: "Hello!".into(),
            }]
        );
    }

    #[tokio::test]
    async fn failed_send_keeps_fields() {
        let delivery = FakeDelivery::new(false);
        let mut form = filled();

        let err = form.submit(&delivery).await.unwrap_err();

        assert!(matches!(
            err,
            ContactError::Delivery(DeliveryError::Rejected { status: 400, .. })
        ));
        assert_eq!(form.status(), ContactStatus::Failed);
        assert_eq!(form.notice(), Some(FAILED_NOTICE));
        assert_eq!(form.name, "Ada");
        assert_eq!(form.reply_to, "ada@example.com");
        assert_eq!(form.message, "Hello!");
    }

    #[tokio::test]
    async fn missing_field_never_reaches_delivery() {
        let delivery = FakeDelivery::new(true);
        let mut form = ContactForm {
            message: String::new(),
            ..filled()
        };

        let err = form.submit(&delivery).await.unwrap_err();

        assert!(matches!(err, ContactError::MissingField("message")));
        assert_eq!(form.status(), ContactStatus::Idle);
        assert!(delivery.seen.borrow().is_empty());
    }

    #[tokio::test]
    async fn whitespace_message_is_sent_as_typed() {
        let delivery = FakeDelivery::new(true);
        let mut form = ContactForm {
            message: "  ".into(),
            ..filled()
        };

        form.submit(&delivery).await.expect("delivered");

        assert_eq!(form.status(), ContactStatus::Sent);
        assert_eq!(form.notice(), Some(SENT_NOTICE));
        assert_eq!(delivery.seen.borrow()[0].message, "  ");
    }

    #[test]
    fn edits_made_while_pending_survive_success() {
        let mut form = filled();
        form.begin_submit().expect("submit");

        form.message = "Also, one more thing".into();
        form.finish(&Ok(()));

        assert_eq!(form.status(), ContactStatus::Sent);
        assert_eq!(form.name, "");
        assert_eq!(form.reply_to, "");
        assert_eq!(form.message, "Also, one more thing");
    }

    #[test]
    fn second_submit_while_pending_is_refused() {
        let mut form = filled();
        form.begin_submit().expect("first submit");
        assert!(form.is_pending());
        assert!(matches!(
            form.begin_submit(),
            Err(ContactError::AlreadyPending)
        ));

        form.finish(&Ok(()));
        assert!(!form.is_pending());
    }

    #[test]
    fn emailjs_body_shape() {
        let client = EmailJsClient::new(ContactSettings {
            service_id: "service_1".into(),
            template_id: "template_1".into(),
            public_key: "key_1".into(),
            ..ContactSettings::default()
        });
        let message = ContactMessage {
            from_name: "Ada".into(),
            reply_to: "ada@example.com".into(),
            message: "Hi".into(),
        };

        let json = serde_json::to_value(client.request_body(&message)).expect("serialize");

        assert_eq!(
            json,
            serde_json::json!({
                "service_id": "service_1",
                "template_id": "template_1",
                "user_id": "key_1",
                "template_params": {
                    "from_name": "Ada",
                    "reply_to": "ada@example.com",
                    "message": "Hi"
                }
            })
        );
        assert_eq!(client.endpoint(), crate::config::DEFAULT_EMAIL_ENDPOINT);
    }
}
