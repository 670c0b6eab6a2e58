//! Shared types for the patient API layer.

use crate::service::PatientService;

/// Shared context for all API routes and middleware.
#[derive(Clone)]
pub struct ApiContext {
    pub patients: PatientService,
}

impl ApiContext {
    pub fn new(patients: PatientService) -> Self {
        Self { patients }
    }
}
