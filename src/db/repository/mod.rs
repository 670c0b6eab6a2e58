//! Repository layer — patient persistence.
//!
//! Free functions in [`patient`] operate on a borrowed `Connection`.
//! [`PatientStore`] is the contract the service layer consumes;
//! [`SqlitePatientStore`] implements it over a single guarded connection.

mod patient;

use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use rusqlite::Connection;

use super::DatabaseError;
use crate::models::{NewPatient, Patient};

pub use patient::*;

/// Keyed storage for patient records.
///
/// Each call is atomic with respect to other calls on the same store.
/// Multi-call sequences are not.
pub trait PatientStore: Send + Sync {
    /// Persist a new record and return it with its assigned id.
    fn insert(&self, patient: &NewPatient) -> Result<Patient, DatabaseError>;
    fn find_by_id(&self, id: i64) -> Result<Option<Patient>, DatabaseError>;
    fn find_all(&self) -> Result<Vec<Patient>, DatabaseError>;
    /// Overwrite an existing record.
    fn save(&self, patient: &Patient) -> Result<Patient, DatabaseError>;
    fn delete_by_id(&self, id: i64) -> Result<(), DatabaseError>;
}

/// SQLite-backed [`PatientStore`].
pub struct SqlitePatientStore {
    conn: Mutex<Connection>,
}

impl SqlitePatientStore {
    pub fn new(conn: Connection) -> Self {
        Self {
            conn: Mutex::new(conn),
        }
    }

    /// Open (or create) a file-backed store and run migrations.
    pub fn open(path: &Path) -> Result<Self, DatabaseError> {
        Ok(Self::new(super::open_database(path)?))
    }

    /// Fresh in-memory store (for testing).
    pub fn in_memory() -> Result<Self, DatabaseError> {
        Ok(Self::new(super::open_memory_database()?))
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>, DatabaseError> {
        self.conn.lock().map_err(|_| DatabaseError::LockPoisoned)
    }
}

impl PatientStore for SqlitePatientStore {
    fn insert(&self, patient: &NewPatient) -> Result<Patient, DatabaseError> {
        let conn = self.lock()?;
        insert_patient(&conn, patient)
    }

    fn find_by_id(&self, id: i64) -> Result<Option<Patient>, DatabaseError> {
        let conn = self.lock()?;
        get_patient(&conn, id)
    }

    fn find_all(&self) -> Result<Vec<Patient>, DatabaseError> {
        let conn = self.lock()?;
        get_all_patients(&conn)
    }

    fn save(&self, patient: &Patient) -> Result<Patient, DatabaseError> {
        let conn = self.lock()?;
        update_patient(&conn, patient)
    }

    fn delete_by_id(&self, id: i64) -> Result<(), DatabaseError> {
        let conn = self.lock()?;
        delete_patient(&conn, id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_patient() -> NewPatient {
        NewPatient {
            name: "Hugo Arévalo".into(),
            age: 21,
            email: "hugoarevalogil08@gmail.com".into(),
        }
    }

    #[test]
    fn store_round_trips_through_trait() {
        let store: Box<dyn PatientStore> = Box::new(SqlitePatientStore::in_memory().unwrap());
        let created = store.insert(&new_patient()).unwrap();
        assert_eq!(store.find_by_id(created.id).unwrap(), Some(created.clone()));
        assert_eq!(store.find_all().unwrap().len(), 1);

        store.delete_by_id(created.id).unwrap();
        assert!(store.find_by_id(created.id).unwrap().is_none());
    }

    #[test]
    fn store_save_overwrites_and_reports_missing() {
        let store = SqlitePatientStore::in_memory().unwrap();
        let created = store.insert(&new_patient()).unwrap();

        let changed = Patient {
            name: "Ramiro López".into(),
            ..created.clone()
        };
        assert_eq!(store.save(&changed).unwrap(), changed);
        assert_eq!(store.find_by_id(created.id).unwrap(), Some(changed.clone()));

        store.delete_by_id(created.id).unwrap();
        assert!(matches!(
            store.save(&changed),
            Err(DatabaseError::NotFound { .. })
        ));
    }

    #[test]
    fn file_store_reopens_with_data() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("patients.db");

        let id = {
            let store = SqlitePatientStore::open(&path).unwrap();
            store.insert(&new_patient()).unwrap().id
        };

        let store = SqlitePatientStore::open(&path).unwrap();
        assert_eq!(store.find_by_id(id).unwrap().unwrap().name, "Hugo Arévalo");
    }

    #[test]
    fn concurrent_inserts_get_unique_ids() {
        let store = std::sync::Arc::new(SqlitePatientStore::in_memory().unwrap());
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let store = store.clone();
                std::thread::spawn(move || {
                    store
                        .insert(&NewPatient {
                            name: format!("Patient {i}"),
                            age: i,
                            email: format!("p{i}@example.com"),
                        })
                        .unwrap()
                        .id
                })
            })
            .collect();

        let mut ids: Vec<i64> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 8);
    }
}
