//! Student profile rows

use serde::{Deserialize, Deserializer, Serialize};

use crate::core::backend::{BackendClient, BackendError};

/// Table holding one profile row per account
pub const PROFILE_TABLE: &str = "estudiantes";

/// Profile row keyed by the account id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileRow {
    pub id: String,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "correo")]
    pub email: String,
    #[serde(rename = "telefono", default, deserialize_with = "null_as_empty")]
    pub phone: String,
}

/// Phone is optional on the form and may come back as SQL NULL
fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl ProfileRow {
    pub fn to_record(&self) -> Result<serde_json::Value, BackendError> {
        Ok(serde_json::to_value(self)?)
    }
}

/// Look up the profile row of account `id`
pub async fn fetch_profile(
    backend: &dyn BackendClient,
    id: &str,
) -> Result<Option<ProfileRow>, BackendError> {
    match backend.select_row(PROFILE_TABLE, id).await? {
        Some(record) => Ok(Some(serde_json::from_value(record)?)),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_record_uses_table_column_names() {
        let row = ProfileRow {
            id: "u1".to_string(),
            name: "Ana".to_string(),
            email: "a@b.com".to_string(),
            phone: "555".to_string(),
        };

        assert_eq!(
            row.to_record().unwrap(),
            json!({"id": "u1", "nombre": "Ana", "correo": "a@b.com", "telefono": "555"})
        );
    }

    #[test]
    fn test_missing_or_null_phone_reads_as_empty() {
        let row: ProfileRow =
            serde_json::from_value(json!({"id": "u1", "nombre": "Ana", "correo": "a@b.com"}))
                .unwrap();
        assert!(row.phone.is_empty());

        let row: ProfileRow = serde_json::from_value(
            json!({"id": "u1", "nombre": "Ana", "correo": "a@b.com", "telefono": null}),
        )
        .unwrap();
        assert!(row.phone.is_empty());
    }
}
