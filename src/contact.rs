//! Contact form submission.
//!
//! A submission is a single send attempt through an [`EmailSender`]. Its
//! result is folded into an [`Outcome`], which decides both the toast shown to
//! the visitor and what happens to the form fields. There is no retry and no
//! de-duplication: two submissions mean two emails.

use std::fmt;
use std::future::Future;

use serde::Serialize;

use crate::config::EmailConfig;
use crate::error::{ContactError, EmailError};
use crate::toast::{Notification, Variant};

pub const SENT_TITLE: &str = "Mensagem enviada!";
pub const SENT_DESCRIPTION: &str =
    "Obrigado por entrar em contato. Entrarei em contato com você em breve.";
pub const FAILED_TITLE: &str = "Erro ao enviar";
pub const FAILED_DESCRIPTION: &str = "Ocorreu um problema. Tente novamente.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Message];

    /// Form control name, also the template parameter name
    pub fn name(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Message => "message",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Message => self.message = value,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Same gate the browser applies to `required` and `type="email"`
    /// inputs. A form that fails it never reaches the email service.
    ///
    /// The email is checked exactly as it will be sent.
    pub fn ready(&self) -> Result<(), ContactError> {
        if let Some(field) = Field::ALL.into_iter().find(|f| self.get(*f).is_empty()) {
            return Err(ContactError::MissingField(field));
        }
        if !looks_like_email(&self.email) {
            return Err(ContactError::InvalidEmail);
        }
        Ok(())
    }
}

fn looks_like_email(email: &str) -> bool {
    let (local, domain) = match email.split_once('@') {
        Some(parts) => parts,
        None => return false,
    };
    !local.is_empty()
        && !domain.is_empty()
        && !domain.contains('@')
        && !email.chars().any(char::is_whitespace)
}

/// Delivers a contact message somewhere.
pub trait EmailSender {
    fn send(
        &self,
        config: &EmailConfig,
        form: &ContactForm,
    ) -> impl Future<Output = Result<(), EmailError>>;
}

#[derive(Debug, Serialize)]
struct EmailPayload<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a ContactForm,
}

fn email_payload<'a>(config: &'a EmailConfig, form: &'a ContactForm) -> EmailPayload<'a> {
    EmailPayload {
        service_id: &config.service_id,
        template_id: &config.template_id,
        user_id: &config.public_key,
        template_params: form,
    }
}

/// Sends through the EmailJS REST API from the visitor's browser.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmailJsSender;

impl EmailSender for EmailJsSender {
    async fn send(&self, config: &EmailConfig, form: &ContactForm) -> Result<(), EmailError> {
        let payload = email_payload(config, form);
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(config.endpoint())
                .json(&payload)
                .map_err(|e| EmailError::Encode(e.to_string()))?
                .send()
                .await
                .map_err(|e| EmailError::Transport(e.to_string()))?;
            if !resp.ok() {
                let body = resp.text().await.unwrap_or_default();
                return Err(EmailError::rejected(resp.status(), body));
            }
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = payload;
            Err(EmailError::Unavailable)
        }
    }
}

/// How a submission that reached the email service ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Delivered,
    Failed(EmailError),
}

impl Outcome {
    pub fn notification(&self) -> Notification {
        match self {
            Outcome::Delivered => Notification {
                title: SENT_TITLE,
                description: SENT_DESCRIPTION,
                variant: Variant::Default,
            },
            Outcome::Failed(_) => Notification {
                title: FAILED_TITLE,
                description: FAILED_DESCRIPTION,
                variant: Variant::Destructive,
            },
        }
    }

    /// Clears the form after a delivery; keeps it for a retry otherwise.
    pub fn apply(&self, form: &mut ContactForm) {
        if let Outcome::Delivered = self {
            form.clear();
        }
    }
}

/// Makes one send attempt for `form`.
///
/// Returns `Err` only when the form is incomplete, in which case the sender
/// is never called. Delivery failures are logged and reported as
/// [`Outcome::Failed`].
pub async fn submit<S: EmailSender>(
    sender: &S,
    config: &EmailConfig,
    form: &ContactForm,
) -> Result<Outcome, ContactError> {
    form.ready()?;
    match sender.send(config, form).await {
        Ok(()) => {
            log::info!("contact message from {} delivered", form.email);
            Ok(Outcome::Delivered)
        }
        Err(e) => {
            log::error!("couldn't deliver contact message from {}: {e}", form.email);
            Ok(Outcome::Failed(e))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::sync::{Mutex, OnceLock};

    struct CaptureLogger {
        lines: Mutex<Vec<String>>,
    }

    impl log::Log for CaptureLogger {
        fn enabled(&self, _: &log::Metadata) -> bool {
            true
        }

        fn log(&self, record: &log::Record) {
            self.lines
                .lock()
                .expect("log capture lock poisoned")
                .push(format!("{} {}", record.level(), record.args()));
        }

        fn flush(&self) {}
    }

    fn capture_logs() -> &'static CaptureLogger {
        static LOGGER: OnceLock<&'static CaptureLogger> = OnceLock::new();
        LOGGER.get_or_init(|| {
            let logger: &'static CaptureLogger = Box::leak(Box::new(CaptureLogger {
                lines: Mutex::new(Vec::new()),
            }));
            log::set_logger(logger).expect("no other logger in tests");
            log::set_max_level(log::LevelFilter::Trace);
            logger
        })
    }

    /// Records every send and answers with a fixed result.
    struct FakeSender {
        result: Result<(), EmailError>,
        sent: RefCell<Vec<ContactForm>>,
        in_flight: Cell<usize>,
        max_in_flight: Cell<usize>,
    }

    impl FakeSender {
        fn new(result: Result<(), EmailError>) -> Self {
            Self {
                result,
                sent: RefCell::new(Vec::new()),
                in_flight: Cell::new(0),
                max_in_flight: Cell::new(0),
            }
        }
    }

    impl EmailSender for FakeSender {
        async fn send(&self, _config: &EmailConfig, form: &ContactForm) -> Result<(), EmailError> {
            self.sent.borrow_mut().push(form.clone());
            self.in_flight.set(self.in_flight.get() + 1);
            self.max_in_flight
                .set(self.max_in_flight.get().max(self.in_flight.get()));
            tokio::task::yield_now().await;
            self.in_flight.set(self.in_flight.get() - 1);
            self.result.clone()
        }
    }

    fn config() -> EmailConfig {
        EmailConfig::new("service_test", "template_test", "public_test")
    }

    fn ana() -> ContactForm {
        ContactForm::new("Ana", "ana@example.com", "Olá")
    }

    #[tokio::test]
    async fn test_successful_submit_clears_form() {
        let sender = FakeSender::new(Ok(()));
        let mut form = ana();

        let outcome = submit(&sender, &config(), &form)
            .await
            .expect("form is complete");
        assert_eq!(outcome, Outcome::Delivered);
        assert_eq!(sender.sent.borrow().as_slice(), &[ana()]);

        let note = outcome.notification();
        assert_eq!(note.title, "Mensagem enviada!");
        assert_eq!(note.variant, Variant::Default);

        outcome.apply(&mut form);
        assert_eq!(form, ContactForm::default());
        assert!(form.name.is_empty() && form.email.is_empty() && form.message.is_empty());
    }

    #[tokio::test]
    async fn test_failed_submit_keeps_form_and_logs() {
        let logs = capture_logs();
        let err = EmailError::rejected(412, "template_ana_failure_marker");
        let sender = FakeSender::new(Err(err.clone()));
        let mut form = ana();

        let outcome = submit(&sender, &config(), &form)
            .await
            .expect("form is complete");
        assert_eq!(outcome, Outcome::Failed(err));

        let note = outcome.notification();
        assert_eq!(note.title, "Erro ao enviar");
        assert_eq!(note.description, "Ocorreu um problema. Tente novamente.");
        assert_eq!(note.variant, Variant::Destructive);

        outcome.apply(&mut form);
        assert_eq!(form.name, "Ana");
        assert_eq!(form.email, "ana@example.com");
        assert_eq!(form.message, "Olá");

        let lines = logs.lines.lock().expect("log capture lock poisoned");
        assert!(lines
            .iter()
            .any(|l| l.starts_with("ERROR") && l.contains("template_ana_failure_marker")));
    }

    #[tokio::test]
    async fn test_failures_share_one_message() {
        for err in [
            EmailError::Transport("network down".to_string()),
            EmailError::rejected(401, "bad key"),
            EmailError::Unavailable,
        ] {
            let sender = FakeSender::new(Err(err));
            let outcome = submit(&sender, &config(), &ana()).await.expect("complete");
            assert_eq!(outcome.notification().title, FAILED_TITLE);
        }
    }

    #[tokio::test]
    async fn test_overlapping_submits_both_send() {
        let sender = FakeSender::new(Ok(()));
        let config = config();
        let first = ana();
        let second = ContactForm::new("Bia", "bia@example.com", "Oi");

        let (a, b) = tokio::join!(
            submit(&sender, &config, &first),
            submit(&sender, &config, &second)
        );
        assert_eq!(a, Ok(Outcome::Delivered));
        assert_eq!(b, Ok(Outcome::Delivered));
        assert_eq!(sender.sent.borrow().len(), 2);
        assert_eq!(sender.max_in_flight.get(), 2);
    }

    #[tokio::test]
    async fn test_duplicate_submits_are_not_deduplicated() {
        let sender = FakeSender::new(Ok(()));
        let form = ana();
        submit(&sender, &config(), &form).await.expect("complete");
        submit(&sender, &config(), &form).await.expect("complete");
        assert_eq!(sender.sent.borrow().as_slice(), &[ana(), ana()]);
    }

    #[tokio::test]
    async fn test_missing_email_never_sends() {
        let sender = FakeSender::new(Ok(()));
        let form = ContactForm::new("Ana", "", "Olá");

        let res = submit(&sender, &config(), &form).await;
        assert_eq!(res, Err(ContactError::MissingField(Field::Email)));
        assert!(sender.sent.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_malformed_email_never_sends() {
        let sender = FakeSender::new(Ok(()));
        for email in ["ana", "ana@", "@example.com", "ana @example.com", "a@b@c"] {
            let form = ContactForm::new("Ana", email, "Olá");
            let res = submit(&sender, &config(), &form).await;
            assert_eq!(res, Err(ContactError::InvalidEmail), "{email}");
        }
        assert!(sender.sent.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_padded_email_is_rejected_not_sent() {
        let sender = FakeSender::new(Ok(()));
        for email in [" ana@example.com", "ana@example.com ", "\tana@example.com\n"] {
            let form = ContactForm::new("Ana", email, "Olá");
            let res = submit(&sender, &config(), &form).await;
            assert_eq!(res, Err(ContactError::InvalidEmail), "{email:?}");
        }
        assert!(sender.sent.borrow().is_empty());

        let form = ContactForm::new("Ana", "ana@example.com", "Olá");
        assert_eq!(submit(&sender, &config(), &form).await, Ok(Outcome::Delivered));
        assert_eq!(sender.sent.borrow()[0].email, "ana@example.com");
    }

    #[test]
    fn test_ready_reports_first_missing_field() {
        assert_eq!(
            ContactForm::default().ready(),
            Err(ContactError::MissingField(Field::Name))
        );
        assert_eq!(
            ContactForm::new("Ana", "ana@example.com", "").ready(),
            Err(ContactError::MissingField(Field::Message))
        );
        assert_eq!(ana().ready(), Ok(()));
    }

    #[test]
    fn test_set_and_get_fields() {
        let mut form = ContactForm::default();
        for field in Field::ALL {
            form.set(field, format!("{field} value"));
        }
        assert_eq!(form.get(Field::Name), "name value");
        assert_eq!(form.get(Field::Email), "email value");
        assert_eq!(form.get(Field::Message), "message value");
    }

    #[test]
    fn test_payload_shape() {
        let config = config();
        let form = ana();
        let json = serde_json::to_value(email_payload(&config, &form)).expect("serializable");
        assert_eq!(
            json,
            serde_json::json!({
                "service_id": "service_test",
                "template_id": "template_test",
                "user_id": "public_test",
                "template_params": {
                    "name": "Ana",
                    "email": "ana@example.com",
                    "message": "Olá",
                }
            })
        );
    }

    #[cfg(not(feature = "hydrate"))]
    #[tokio::test]
    async fn test_emailjs_sender_unavailable_off_browser() {
        let res = EmailJsSender.send(&config(), &ana()).await;
        assert_eq!(res, Err(EmailError::Unavailable));
    }
}
