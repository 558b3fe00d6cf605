//! Contact form state. Submissions never leave the client: a valid form
//! enters a "submitting" phase for a fixed delay and is then cleared.

use crate::error::ContactError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormStatus {
    #[default]
    Idle,
    Success,
    Error,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

    /// Matches the `name` attribute of the form control.
    pub fn name(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Subject => "subject",
            Field::Message => "message",
        }
    }

    pub fn from_name(name: &str) -> Option<Field> {
        Field::ALL.into_iter().find(|f| f.name() == name)
    }

    #[inline]
    pub fn required(self) -> bool {
        !matches!(self, Field::Subject)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactFields {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Subject => &mut self.subject,
            Field::Message => &mut self.message,
        };
        *slot = value.into();
    }

    /// First required field that is empty or whitespace.
    pub fn first_missing(&self) -> Option<Field> {
        Field::ALL
            .into_iter()
            .filter(|f| f.required())
            .find(|f| self.get(*f).trim().is_empty())
    }
}

#[derive(Debug, Default)]
pub struct ContactForm {
    fields: ContactFields,
    status: FormStatus,
    submitting: bool,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn fields(&self) -> &ContactFields {
        &self.fields
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        self.fields.set(field, value);
    }

    #[inline]
    pub fn status(&self) -> FormStatus {
        self.status
    }

    #[inline]
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Validate and enter the submitting phase. On a missing field the status
    /// becomes `Error` and the values are kept; otherwise any earlier status
    /// is cleared.
    pub fn begin_submit(&mut self) -> Result<(), ContactError> {
        if self.submitting {
            return Err(ContactError::Busy);
        }
        if let Some(missing) = self.fields.first_missing() {
            self.status = FormStatus::Error;
            log::debug!("[contact] rejected: missing {}", missing.name());
            return Err(ContactError::MissingField(missing.name()));
        }
        self.status = FormStatus::Idle;
        self.submitting = true;
        Ok(())
    }

    /// The simulated delay elapsed: report success and clear the form.
    pub fn finish_submit(&mut self) {
        if !self.submitting {
            return;
        }
        self.submitting = false;
        self.status = FormStatus::Success;
        self.fields = ContactFields::default();
    }
}
