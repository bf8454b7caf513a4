//! Contact form with a simulated send
//!
//! Nothing leaves the process. [`ContactForm::submit`] validates the fields
//! and enters the sending state; once the configured delay has passed,
//! [`ContactForm::poll`] clears the form and raises the confirmation.

use crate::config::ContactSettings;
use thiserror::Error;
use tokio::time::Instant;
use tracing::{debug, info};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("'{0}' is not an email address")]
    InvalidEmail(String),

    #[error("A message is already being sent")]
    AlreadySending,
}

#[derive(Debug, Default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
    settings: ContactSettings,
    sending_until: Option<Instant>,
    sent_until: Option<Instant>,
}

impl ContactForm {
    pub fn new(settings: ContactSettings) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }

    /// Starts sending the current fields.
    ///
    /// # Errors
    ///
    /// A blank field, an address without a user and domain part, or a send
    /// that is still in progress.
    pub fn submit(&mut self, now: Instant) -> Result<(), ContactError> {
        if self.is_sending() {
            return Err(ContactError::AlreadySending);
        }
        self.validate()?;

        info!("Sending contact message from {}", self.email.trim());
        self.sending_until = Some(now + self.settings.submit_delay());
        self.sent_until = None;
        Ok(())
    }

    fn validate(&self) -> Result<(), ContactError> {
        for (label, value) in [
            ("Name", &self.name),
            ("Email", &self.email),
            ("Message", &self.message),
        ] {
            if value.trim().is_empty() {
                return Err(ContactError::MissingField(label));
            }
        }

        let email = self.email.trim();
        match email.split_once('@') {
            Some((user, domain)) if !user.is_empty() && !domain.is_empty() => Ok(()),
            _ => Err(ContactError::InvalidEmail(email.to_string())),
        }
    }

    /// Completes a send whose delay has passed. Returns whether one completed.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.sending_until {
            Some(until) if now >= until => {
                self.sending_until = None;
                self.name.clear();
                self.email.clear();
                self.message.clear();
                self.sent_until = Some(now + self.settings.confirmation());
                debug!("Contact message sent, form cleared");
                true
            }
            _ => false,
        }
    }

    pub fn is_sending(&self) -> bool {
        self.sending_until.is_some()
    }

    /// Whether the "message sent" confirmation is still up.
    pub fn is_sent(&self, now: Instant) -> bool {
        self.sent_until.is_some_and(|until| now < until)
    }

    pub fn button_label(&self) -> &'static str {
        if self.is_sending() {
            "Sending..."
        } else {
            "Send Message"
        }
    }
}
