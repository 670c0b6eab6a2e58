//! Field-presence checks applied to create/update payloads before they
//! reach the store.
//!
//! `name` and `email` must be present and non-blank; `age` must be present.
//! Age range and email format are not checked.

use crate::models::{NewPatient, PatientPayload};

/// Payload failed validation. Lists every offending field.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("missing or empty field(s): {}", .fields.join(", "))]
pub struct ValidationError {
    pub fields: Vec<&'static str>,
}

impl ValidationError {
    pub fn field(name: &'static str) -> Self {
        Self { fields: vec![name] }
    }
}

/// Check a payload and return the validated field set.
pub fn validate(payload: &PatientPayload) -> Result<NewPatient, ValidationError> {
    let mut fields = Vec::new();

    let name = non_blank(payload.name.as_deref());
    if name.is_none() {
        fields.push("name");
    }
    if payload.age.is_none() {
        fields.push("age");
    }
    let email = non_blank(payload.email.as_deref());
    if email.is_none() {
        fields.push("email");
    }

    match (name, payload.age, email) {
        (Some(name), Some(age), Some(email)) => Ok(NewPatient {
            name: name.to_string(),
            age,
            email: email.to_string(),
        }),
        _ => Err(ValidationError { fields }),
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
