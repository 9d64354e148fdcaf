use std::collections::{BTreeMap, BTreeSet};

use log::{debug, warn};
use serde::Serialize;
use thiserror::Error;

use super::phone::format_phone_number;
use super::transport::SubmitError;
use super::validators::{
    validate_agree_to_contact, validate_email, validate_name, validate_phone,
    validate_preferred_time, validate_reason, FieldError,
};

/// Everything the visitor typed into the intake form. Serialized as the
/// submission payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormData {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub reason: String,
    pub preferred_time: String,
    pub agree_to_contact: bool,
}

impl FormData {
    pub fn validate_field(&self, field: Field) -> Result<(), FieldError> {
        match field {
            Field::Name => validate_name(&self.name),
            Field::Phone => validate_phone(&self.phone),
            Field::Email => validate_email(&self.email),
            Field::Reason => validate_reason(&self.reason),
            Field::PreferredTime => validate_preferred_time(&self.preferred_time),
            Field::AgreeToContact => validate_agree_to_contact(self.agree_to_contact),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Phone,
    Email,
    Reason,
    PreferredTime,
    AgreeToContact,
}

impl Field {
    pub const ALL: [Field; 6] = [
        Field::Name,
        Field::Phone,
        Field::Email,
        Field::Reason,
        Field::PreferredTime,
        Field::AgreeToContact,
    ];

    /// Key used in the JSON payload and as the DOM id of the input.
    pub fn key(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Phone => "phone",
            Field::Email => "email",
            Field::Reason => "reason",
            Field::PreferredTime => "preferredTime",
            Field::AgreeToContact => "agreeToContact",
        }
    }
}

/// A single edit coming from the form inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldUpdate {
    Name(String),
    Phone(String),
    Email(String),
    Reason(String),
    PreferredTime(String),
    AgreeToContact(bool),
}

impl FieldUpdate {
    pub fn field(&self) -> Field {
        match self {
            FieldUpdate::Name(_) => Field::Name,
            FieldUpdate::Phone(_) => Field::Phone,
            FieldUpdate::Email(_) => Field::Email,
            FieldUpdate::Reason(_) => Field::Reason,
            FieldUpdate::PreferredTime(_) => Field::PreferredTime,
            FieldUpdate::AgreeToContact(_) => Field::AgreeToContact,
        }
    }
}

/// Validation errors keyed by field. Only invalid fields have an entry.
///
/// Never mutated directly: it is always rebuilt from a `FormData` by running
/// the validators, so it cannot drift from the values it describes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorMap(BTreeMap<Field, FieldError>);

impl ErrorMap {
    #[cfg(test)]
    pub fn derive(data: &FormData) -> Self {
        Self::derive_for(data, Field::ALL)
    }

    fn derive_for(data: &FormData, fields: impl IntoIterator<Item = Field>) -> Self {
        Self(
            fields
                .into_iter()
                .filter_map(|field| data.validate_field(field).err().map(|err| (field, err)))
                .collect(),
        )
    }

    pub fn get(&self, field: Field) -> Option<&FieldError> {
        self.0.get(&field)
    }

    pub fn message(&self, field: Field) -> Option<String> {
        self.get(field).map(ToString::to_string)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.0.keys().copied()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lifecycle {
    Idle,
    Submitting,
    Submitted,
    Failed(SubmitError),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitRejected {
    #[error("{} field(s) need attention", .0.len())]
    Invalid(Vec<Field>),
    #[error("a submission is already in progress")]
    InFlight,
    #[error("the form has already been submitted")]
    AlreadySubmitted,
}

/// One session of the contact form: the values, which fields have been
/// validated so far, and where the submission stands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    data: FormData,
    validated: BTreeSet<Field>,
    lifecycle: Lifecycle,
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

impl FormState {
    pub fn new() -> Self {
        Self {
            data: FormData::default(),
            validated: BTreeSet::new(),
            lifecycle: Lifecycle::Idle,
        }
    }

    pub fn data(&self) -> &FormData {
        &self.data
    }

    pub fn lifecycle(&self) -> &Lifecycle {
        &self.lifecycle
    }

    /// Errors for every field that has been edited, or for all fields once a
    /// submit has been attempted. Untouched fields stay quiet.
    pub fn errors(&self) -> ErrorMap {
        ErrorMap::derive_for(&self.data, self.validated.iter().copied())
    }

    pub fn apply(&mut self, update: FieldUpdate) {
        if self.lifecycle == Lifecycle::Submitted {
            debug!("Ignoring {} edit after submission", update.field().key());
            return;
        }

        let field = update.field();
        match update {
            FieldUpdate::Name(value) => self.data.name = value,
            FieldUpdate::Phone(value) => self.data.phone = format_phone_number(&value),
            FieldUpdate::Email(value) => self.data.email = value,
            FieldUpdate::Reason(value) => self.data.reason = value,
            FieldUpdate::PreferredTime(value) => self.data.preferred_time = value,
            FieldUpdate::AgreeToContact(checked) => self.data.agree_to_contact = checked,
        }
        self.validated.insert(field);
    }

    /// Mirrors the submit button: enabled unless a visible error exists or
    /// a submission is running or finished.
    pub fn can_submit(&self) -> bool {
        matches!(self.lifecycle, Lifecycle::Idle | Lifecycle::Failed(_)) && self.errors().is_empty()
    }

    /// Validate every field and, if all pass, move to `Submitting` and hand
    /// back the payload to send.
    pub fn begin_submit(&mut self) -> Result<FormData, SubmitRejected> {
        match self.lifecycle {
            Lifecycle::Submitting => return Err(SubmitRejected::InFlight),
            Lifecycle::Submitted => return Err(SubmitRejected::AlreadySubmitted),
            Lifecycle::Idle | Lifecycle::Failed(_) => {}
        }

        // a new attempt supersedes the previous failure
        self.lifecycle = Lifecycle::Idle;
        self.validated.extend(Field::ALL);

        let errors = self.errors();
        if !errors.is_empty() {
            return Err(SubmitRejected::Invalid(errors.fields().collect()));
        }

        self.lifecycle = Lifecycle::Submitting;
        Ok(self.data.clone())
    }

    pub fn finish_submit(&mut self, outcome: Result<(), SubmitError>) {
        if self.lifecycle != Lifecycle::Submitting {
            warn!("Dropping submission outcome received in state {:?}", self.lifecycle);
            return;
        }

        self.lifecycle = match outcome {
            Ok(()) => {
                // the confirmation replaces the form, nothing left to keep
                self.data = FormData::default();
                self.validated.clear();
                Lifecycle::Submitted
            }
            Err(err) => Lifecycle::Failed(err),
        };
    }
}
