use serde::{Deserialize, Serialize};

/// A persisted patient record. `id` is assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patient {
    pub id: i64,
    pub name: String,
    pub age: i32,
    pub email: String,
}

/// Wire payload for create/update requests.
///
/// Every field is optional so that a missing field reaches validation
/// instead of failing deserialization. `id` is ignored on create and
/// required on update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientPayload {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub age: Option<i32>,
    #[serde(default)]
    pub email: Option<String>,
}

/// Field set that passed validation. Carries no id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPatient {
    pub name: String,
    pub age: i32,
    pub email: String,
}

impl NewPatient {
    /// Attach a store-owned id.
    pub fn with_id(self, id: i64) -> Patient {
        Patient {
            id,
            name: self.name,
            age: self.age,
            email: self.email,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_tolerates_missing_fields() {
        let payload: PatientPayload = serde_json::from_str(r#"{"name":"Hugo Arévalo"}"#).unwrap();
        assert_eq!(payload.name.as_deref(), Some("Hugo Arévalo"));
        assert!(payload.id.is_none());
        assert!(payload.age.is_none());
        assert!(payload.email.is_none());
    }

    #[test]
    fn patient_serializes_wire_field_names() {
        let patient = Patient {
            id: 3,
            name: "Mario Castaño".into(),
            age: 38,
            email: "mariocasta23@gmail.com".into(),
        };
        let json = serde_json::to_value(&patient).unwrap();
        assert_eq!(json["id"], 3);
        assert_eq!(json["name"], "Mario Castaño");
        assert_eq!(json["age"], 38);
        assert_eq!(json["email"], "mariocasta23@gmail.com");
    }

    #[test]
    fn with_id_keeps_fields() {
        let new = NewPatient {
            name: "Pablo García".into(),
            age: 29,
            email: "pablog2@gmail.com".into(),
        };
        let patient = new.clone().with_id(2);
        assert_eq!(patient.id, 2);
        assert_eq!(patient.name, new.name);
        assert_eq!(patient.email, new.email);
    }
}
