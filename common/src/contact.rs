use std::{fmt, time::Duration};

use api::contact::ContactMessage;
use async_trait::async_trait;
use tracing::{error, info, instrument};

use crate::{
    EMAIL_MATCHER,
    runtime::{StateHandle, Timer},
    state::ToastTicket,
};

// ContactForm
//
// the raw field contents as typed.  a form only becomes a ContactMessage by passing
// validate(), and only a ContactMessage can be submitted
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FieldError {
    MissingName,
    InvalidEmail,
    MissingMessage,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldError::MissingName => write!(f, "Please enter your name"),
            FieldError::InvalidEmail => write!(f, "Please enter a valid email address"),
            FieldError::MissingMessage => write!(f, "Please enter a message"),
        }
    }
}

impl std::error::Error for FieldError {}

impl ContactForm {
    pub fn validate(&self) -> Result<ContactMessage, FieldError> {
        let name = self.name.trim();
        let email = self.email.trim();
        let message = self.message.trim();

        if name.is_empty() {
            return Err(FieldError::MissingName);
        }

        if !EMAIL_MATCHER.is_match(email) {
            return Err(FieldError::InvalidEmail);
        }

        if message.is_empty() {
            return Err(FieldError::MissingMessage);
        }

        Ok(ContactMessage {
            name: name.to_owned(),
            email: email.to_owned(),
            message: message.to_owned(),
        })
    }

    pub fn clear(&mut self) {
        *self = ContactForm::default();
    }
}

// ContactTransport
//
// whatever actually delivers the message.  the site ships with the simulated one; a real
// deployment points the config at an external service instead
#[async_trait(?Send)]
pub trait ContactTransport {
    async fn send(&self, message: &ContactMessage) -> anyhow::Result<()>;
}

// waits out a fixed delay and reports success
pub struct SimulatedTransport<T: Timer> {
    timer: T,
    delay: Duration,
}

impl<T: Timer> SimulatedTransport<T> {
    pub fn new(timer: T, delay: Duration) -> Self {
        SimulatedTransport { timer, delay }
    }
}

#[async_trait(?Send)]
impl<T: Timer> ContactTransport for SimulatedTransport<T> {
    async fn send(&self, _message: &ContactMessage) -> anyhow::Result<()> {
        self.timer.sleep(self.delay).await;
        Ok(())
    }
}

// how a submission ended; either way a toast is up and the form is usable again
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Submission {
    Delivered(ToastTicket),
    Failed(ToastTicket),
}

impl Submission {
    pub fn ticket(&self) -> ToastTicket {
        match self {
            Submission::Delivered(ticket) | Submission::Failed(ticket) => *ticket,
        }
    }

    // a failed send keeps what was typed so it can be retried
    pub fn clears_form(&self) -> bool {
        matches!(self, Submission::Delivered(_))
    }
}

// submit a validated message
//
// returns None without touching anything if a submission is already in flight.  the
// caller is responsible for clearing its fields on Delivered and for scheduling the
// toast's expiry with the returned ticket
#[instrument(skip_all)]
pub async fn submit_contact<H, T>(
    handle: &H,
    transport: &T,
    message: ContactMessage,
) -> Option<Submission>
where
    H: StateHandle,
    T: ContactTransport + ?Sized,
{
    if !handle.update(|state| state.begin_submit()) {
        info!("ignoring submit while another is in flight");
        return None;
    }

    let outcome = transport.send(&message).await;

    if let Err(err) = &outcome {
        error!("failed to deliver contact message: {err}");
    } else {
        info!("delivered contact message");
    }

    let ticket = handle.update(|state| state.finish_submit(&outcome));

    Some(match outcome {
        Ok(()) => Submission::Delivered(ticket),
        Err(_) => Submission::Failed(ticket),
    })
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::{
        catalog::tests::fixture,
        state::{Toast, ViewState},
    };

    fn form(name: &str, email: &str, message: &str) -> ContactForm {
        ContactForm {
            name: name.to_owned(),
            email: email.to_owned(),
            message: message.to_owned(),
        }
    }

    #[test]
    fn valid_form_is_trimmed() {
        let message = form(" Ada ", "ada@example.com ", "\nhello\n").validate().unwrap();

        assert_eq!(message.name, "Ada");
        assert_eq!(message.email, "ada@example.com");
        assert_eq!(message.message, "hello");
    }

    #[test]
    fn empty_name() {
        assert_eq!(
            form("  ", "ada@example.com", "hi").validate(),
            Err(FieldError::MissingName)
        );
    }

    #[test]
    fn malformed_email() {
        for email in ["", "ada", "ada@", "@example.com", "ada@example", "a da@example.com"] {
            assert_eq!(
                form("Ada", email, "hi").validate(),
                Err(FieldError::InvalidEmail),
                "{email}"
            );
        }
    }

    #[test]
    fn empty_message() {
        assert_eq!(
            form("Ada", "ada@example.com", "   ").validate(),
            Err(FieldError::MissingMessage)
        );
    }

    #[test]
    fn only_delivery_clears_the_form() {
        let mut state = ViewState::new(Arc::new(fixture()));
        let ticket = state.show_toast(Toast::success("sent"));

        assert!(Submission::Delivered(ticket).clears_form());
        assert!(!Submission::Failed(ticket).clears_form());
    }

    #[test]
    fn clear_resets_fields() {
        let mut form = form("Ada", "ada@example.com", "hi");
        form.clear();

        assert_eq!(form, ContactForm::default());
    }
}
