use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::db::DatabaseError;
use crate::models::{NewPatient, Patient};

const PATIENT_SELECT_SQL: &str = "SELECT id, name, age, email FROM patients";

fn patient_from_row(row: &Row<'_>) -> rusqlite::Result<Patient> {
    Ok(Patient {
        id: row.get(0)?,
        name: row.get(1)?,
        age: row.get(2)?,
        email: row.get(3)?,
    })
}

/// Inserts a patient and returns it with the id SQLite assigned.
pub fn insert_patient(conn: &Connection, patient: &NewPatient) -> Result<Patient, DatabaseError> {
    conn.execute(
        "INSERT INTO patients (name, age, email) VALUES (?1, ?2, ?3)",
        params![patient.name, patient.age, patient.email],
    )?;
    let id = conn.last_insert_rowid();
    Ok(patient.clone().with_id(id))
}

pub fn get_patient(conn: &Connection, id: i64) -> Result<Option<Patient>, DatabaseError> {
    let patient = conn
        .query_row(
            &format!("{PATIENT_SELECT_SQL} WHERE id = ?1"),
            params![id],
            patient_from_row,
        )
        .optional()?;
    Ok(patient)
}

/// All patients in insertion order.
pub fn get_all_patients(conn: &Connection) -> Result<Vec<Patient>, DatabaseError> {
    let mut stmt = conn.prepare(&format!("{PATIENT_SELECT_SQL} ORDER BY id"))?;
    let rows = stmt.query_map([], patient_from_row)?;

    let mut patients = Vec::new();
    for row in rows {
        patients.push(row?);
    }
    Ok(patients)
}

/// Overwrites every mutable field of an existing patient.
pub fn update_patient(conn: &Connection, patient: &Patient) -> Result<Patient, DatabaseError> {
    let updated = conn.execute(
        "UPDATE patients SET name = ?1, age = ?2, email = ?3 WHERE id = ?4",
        params![patient.name, patient.age, patient.email, patient.id],
    )?;
    if updated == 0 {
        return Err(DatabaseError::NotFound {
            entity_type: "Patient".into(),
            id: patient.id.to_string(),
        });
    }
    Ok(patient.clone())
}

/// Removes a patient. Deleting a missing id is not an error here.
pub fn delete_patient(conn: &Connection, id: i64) -> Result<(), DatabaseError> {
    conn.execute("DELETE FROM patients WHERE id = ?1", params![id])?;
    Ok(())
}
