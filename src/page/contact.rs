use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("contact form is not connected to any delivery service")]
    NotWired,
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("email address is not valid")]
    InvalidEmail,
}

/// Receives validated contact messages
pub trait SubmissionSink {
    fn deliver(&self, form: &ContactForm) -> Result<(), SubmitError>;
}

/// The only shipped sink: there is no backend, so every submission is refused
#[derive(Debug, Clone, Copy, Default)]
pub struct UnwiredSink;

impl SubmissionSink for UnwiredSink {
    fn deliver(&self, form: &ContactForm) -> Result<(), SubmitError> {
        log::warn!(
            "contact form from {} dropped: no submission endpoint configured",
            form.email.trim()
        );
        Err(SubmitError::NotWired)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn validate(&self) -> Result<(), SubmitError> {
        if self.name.trim().is_empty() {
            return Err(SubmitError::MissingField("name"));
        }
        if self.email.trim().is_empty() {
            return Err(SubmitError::MissingField("email"));
        }
        if self.message.trim().is_empty() {
            return Err(SubmitError::MissingField("message"));
        }

        let mut parts = self.email.trim().split('@');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(local), Some(domain), None) if !local.is_empty() && !domain.is_empty() => Ok(()),
            _ => Err(SubmitError::InvalidEmail),
        }
    }

    /// Validate, then hand off to `sink`. The form is left untouched on failure.
    pub fn submit(&self, sink: &dyn SubmissionSink) -> Result<(), SubmitError> {
        self.validate()?;
        sink.deliver(self)
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn filled() -> ContactForm {
        ContactForm {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            message: "Hello".into(),
        }
    }

    struct Counting(Cell<usize>);

    impl SubmissionSink for Counting {
        fn deliver(&self, _form: &ContactForm) -> Result<(), SubmitError> {
            self.0.set(self.0.get() + 1);
            Ok(())
        }
    }

    #[test]
    fn test_blank_fields_rejected_in_order() {
        let mut form = filled();
        form.name = "  ".into();
        assert_eq!(form.validate(), Err(SubmitError::MissingField("name")));

        let mut form = filled();
        form.message.clear();
        assert_eq!(form.validate(), Err(SubmitError::MissingField("message")));
    }

    #[test]
    fn test_email_shape() {
        for bad in ["ada", "@example.com", "ada@", "a@b@c"] {
            let form = ContactForm { email: bad.into(), ..filled() };
            assert_eq!(form.validate(), Err(SubmitError::InvalidEmail), "{bad}");
        }
        assert!(filled().validate().is_ok());
    }

    #[test]
    fn test_unwired_sink_always_refuses() {
        assert_eq!(filled().submit(&UnwiredSink), Err(SubmitError::NotWired));
    }

    #[test]
    fn test_invalid_form_never_reaches_sink() {
        let sink = Counting(Cell::new(0));
        let form = ContactForm { email: "nope".into(), ..filled() };
        assert!(form.submit(&sink).is_err());
        assert_eq!(sink.0.get(), 0);

        assert!(filled().submit(&sink).is_ok());
        assert_eq!(sink.0.get(), 1);
    }
}
