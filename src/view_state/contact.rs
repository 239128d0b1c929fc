use std::{fmt, time::Duration};

use thiserror::Error;

/// How long the "message sent" banner stays up.
pub const ACK_DURATION: Duration = Duration::from_millis(4000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
        })
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("please fill in your {0}")]
    MissingField(Field),
    #[error("that email address doesn't look right")]
    InvalidEmail,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormStatus {
    #[default]
    Idle,
    Sent,
}

/// The contact form. Submitting only acknowledges locally; nothing is sent.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
    status: FormStatus,
}

impl ContactForm {
    pub fn status(&self) -> FormStatus {
        self.status
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

    fn validate(&self) -> Result<(), ContactError> {
        for field in [Field::Name, Field::Email, Field::Message] {
            if self.get(field).trim().is_empty() {
                return Err(ContactError::MissingField(field));
            }
        }
        match self.email.trim().split_once('@') {
            Some((user, domain)) if !user.is_empty() && !domain.is_empty() => Ok(()),
            _ => Err(ContactError::InvalidEmail),
        }
    }

    /// Acknowledge the message and clear the fields.
    ///
    /// Returns how long the acknowledgment should be shown. On error the fields are kept.
    pub fn submit(&mut self) -> Result<Duration, ContactError> {
        self.validate()?;
        log::debug!("contact form acknowledged for {}", self.email.trim());
        self.name.clear();
        self.email.clear();
        self.message.clear();
        self.status = FormStatus::Sent;
        Ok(ACK_DURATION)
    }

    pub fn expire_ack(&mut self) -> bool {
        if self.status == FormStatus::Sent {
            self.status = FormStatus::Idle;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        let mut form = ContactForm::default();
        form.set(Field::Name, "Ada".to_string());
        form.set(Field::Email, "ada@example.com".to_string());
        form.set(Field::Message, "Hello there".to_string());
        form
    }

    #[test]
    fn test_submit_clears_and_acknowledges() {
        let mut form = filled();
        assert_eq!(form.submit(), Ok(Duration::from_millis(4000)));
        assert_eq!(form.status(), FormStatus::Sent);
        assert!(form.name.is_empty());
        assert!(form.email.is_empty());
        assert!(form.message.is_empty());

        assert!(form.expire_ack());
        assert_eq!(form.status(), FormStatus::Idle);
        assert!(!form.expire_ack());
    }

    #[test]
    fn test_missing_fields() {
        for field in [Field::Name, Field::Email, Field::Message] {
            let mut form = filled();
            form.set(field, "   ".to_string());
            let before = form.clone();
            assert_eq!(form.submit(), Err(ContactError::MissingField(field)));
            assert_eq!(form, before);
            assert_eq!(form.status(), FormStatus::Idle);
        }
    }

    #[test]
    fn test_invalid_email() {
        for email in ["ada", "@example.com", "ada@"] {
            let mut form = filled();
            form.set(Field::Email, email.to_string());
            assert_eq!(form.submit(), Err(ContactError::InvalidEmail), "{email}");
            assert_eq!(form.get(Field::Email), email);
        }
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ContactError::MissingField(Field::Email).to_string(),
            "please fill in your email"
        );
    }
}
