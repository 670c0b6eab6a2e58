//! Patient endpoints.
//!
//! - `GET /api/patients` — list every patient
//! - `GET /api/patients/:id` — one patient, 404 if absent
//! - `POST /api/patients` — create, 400 on invalid payload
//! - `PUT /api/patients` — update (id travels in the body), 404/400
//! - `DELETE /api/patients/:id` — remove, 404 if absent
//!
//! Extractor rejections (bad JSON, non-numeric id) are folded into
//! `ApiError::BadRequest` so every failure shares one body shape.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::models::{Patient, PatientPayload};

/// `GET /api/patients`
pub async fn list(State(ctx): State<ApiContext>) -> Result<Json<Vec<Patient>>, ApiError> {
    let patients = ctx.patients.list_all()?;
    Ok(Json(patients))
}

/// `GET /api/patients/:id`
pub async fn detail(
    State(ctx): State<ApiContext>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<Patient>, ApiError> {
    let Path(id) = path?;
    let patient = ctx
        .patients
        .get_by_id(id)?
        .ok_or_else(|| ApiError::NotFound(format!("Patient {id} not found")))?;
    Ok(Json(patient))
}

/// `POST /api/patients`
pub async fn create(
    State(ctx): State<ApiContext>,
    payload: Result<Json<PatientPayload>, JsonRejection>,
) -> Result<Json<Patient>, ApiError> {
    let Json(payload) = payload?;
    let created = ctx.patients.create(&payload)?;
    Ok(Json(created))
}

/// `PUT /api/patients`
pub async fn update(
    State(ctx): State<ApiContext>,
    payload: Result<Json<PatientPayload>, JsonRejection>,
) -> Result<Json<Patient>, ApiError> {
    let Json(payload) = payload?;
    let updated = ctx.patients.update(&payload)?;
    Ok(Json(updated))
}

/// `DELETE /api/patients/:id` — 200 with an empty body.
pub async fn remove(
    State(ctx): State<ApiContext>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let Path(id) = path?;
    ctx.patients.delete(id)?;
    Ok(StatusCode::OK)
}
