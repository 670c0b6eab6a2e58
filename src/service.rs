//! Patient business operations.
//!
//! `PatientService` is the only caller of the [`PatientStore`]. It runs
//! validation before any write and turns "missing id" on update/delete
//! into an explicit `NotFound`, independent of how the store reports it.

use std::sync::Arc;

use crate::db::{DatabaseError, PatientStore};
use crate::models::{Patient, PatientPayload};
use crate::validation::{self, ValidationError};

/// Errors from patient operations.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("Invalid request: {0}")]
    InvalidRequest(#[from] ValidationError),
    #[error("Patient not found: {0}")]
    NotFound(i64),
    #[error("Store error: {0}")]
    Store(#[from] DatabaseError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Patient use-case service. Cheap to clone; clones share the store.
#[derive(Clone)]
pub struct PatientService {
    store: Arc<dyn PatientStore>,
}

impl PatientService {
    pub fn new(store: Arc<dyn PatientStore>) -> Self {
        Self { store }
    }

    /// Every patient in store order. Empty when the store is empty.
    pub fn list_all(&self) -> ServiceResult<Vec<Patient>> {
        Ok(self.store.find_all()?)
    }

    /// Lookup by id. Absence is a normal outcome here, not an error.
    pub fn get_by_id(&self, id: i64) -> ServiceResult<Option<Patient>> {
        Ok(self.store.find_by_id(id)?)
    }

    /// Validate and persist a new patient. Any payload `id` is ignored.
    pub fn create(&self, payload: &PatientPayload) -> ServiceResult<Patient> {
        let new = validation::validate(payload).inspect_err(|e| {
            tracing::debug!(error = %e, "Rejected patient create");
        })?;
        let created = self.store.insert(&new)?;
        tracing::info!(patient_id = created.id, "Patient created");
        Ok(created)
    }

    /// Replace all mutable fields of the patient named by `payload.id`.
    ///
    /// The existence check runs before validation. The persisted id is
    /// the one found by the lookup.
    pub fn update(&self, payload: &PatientPayload) -> ServiceResult<Patient> {
        let id = payload
            .id
            .ok_or_else(|| ServiceError::InvalidRequest(ValidationError::field("id")))?;
        let existing = self.get_by_id(id)?.ok_or(ServiceError::NotFound(id))?;

        let new = validation::validate(payload).inspect_err(|e| {
            tracing::debug!(patient_id = id, error = %e, "Rejected patient update");
        })?;

        let updated = self
            .store
            .save(&new.with_id(existing.id))
            .map_err(|e| match e {
                DatabaseError::NotFound { .. } => ServiceError::NotFound(id),
                other => ServiceError::Store(other),
            })?;
        tracing::info!(patient_id = updated.id, "Patient updated");
        Ok(updated)
    }

    /// Remove the patient with `id`; `NotFound` if there is none.
    pub fn delete(&self, id: i64) -> ServiceResult<()> {
        if self.get_by_id(id)?.is_none() {
            return Err(ServiceError::NotFound(id));
        }
        self.store.delete_by_id(id)?;
        tracing::info!(patient_id = id, "Patient deleted");
        Ok(())
    }
}
