use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::validators::{
    validate_certificate_name, validate_certificate_window, validate_keywords, validate_name,
};

/// A credential owned by exactly one user.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_certificate_window"))]
pub struct Certificate {
    /// Certificate identifier, unique within its owner's list
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "1b9d6bcd-bbfd-4b2d-9b5d-ab8dfbbd4bed")]
    pub id: Option<Uuid>,
    #[validate(
        length(max = 100, message = "Certificate name must be at most 100 characters"),
        custom(function = "validate_certificate_name")
    )]
    #[schema(example = "Golang")]
    pub name: String,
    #[serde(default)]
    #[validate(length(max = 100, message = "Certificate issuer must be at most 100 characters"))]
    #[schema(example = "Google")]
    pub issuer: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issued: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires: Option<DateTime<Utc>>,
}

/// User record as stored and returned by the API.
///
/// The same shape is accepted as a request body; a client-supplied `id` is
/// never trusted; the store assigns it on create and the query parameter
/// decides it on update.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// User's unique identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "6ba7b814-9dad-11d1-80b4-00c04fd430c8")]
    pub id: Option<Uuid>,
    #[validate(
        length(max = 100, message = "Name must be at most 100 characters"),
        custom(function = "validate_name")
    )]
    #[schema(example = "Berra")]
    pub name: String,
    #[validate(length(max = 100, message = "Role must be at most 100 characters"))]
    #[schema(example = "QA")]
    pub role: String,
    #[serde(default)]
    #[schema(example = 42)]
    pub years_experience: u32,
    #[serde(default)]
    #[validate(custom(function = "validate_keywords"))]
    #[schema(example = json!(["Pro", "Golang"]))]
    pub keywords: Vec<String>,
    #[serde(default)]
    #[validate(
        length(max = 50, message = "At most 50 certificates are allowed"),
        nested
    )]
    pub certificates: Vec<Certificate>,
}

impl User {
    /// Give the user and every certificate a freshly generated identifier.
    pub fn assign_new_ids(&mut self) {
        self.id = Some(Uuid::new_v4());
        for certificate in &mut self.certificates {
            certificate.id = Some(Uuid::new_v4());
        }
    }

    /// Keep client-supplied certificate ids that are unique within the list and
    /// generate one for every certificate that is missing or repeats an id.
    pub fn ensure_certificate_ids(&mut self) {
        let mut seen = HashSet::with_capacity(self.certificates.len());
        for certificate in &mut self.certificates {
            match certificate.id {
                Some(id) if seen.insert(id) => {}
                _ => {
                    let fresh = Uuid::new_v4();
                    seen.insert(fresh);
                    certificate.id = Some(fresh);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn certificate(id: Option<Uuid>) -> Certificate {
        Certificate {
            id,
            name: "Golang".to_string(),
            issuer: "Google".to_string(),
            issued: None,
            expires: None,
        }
    }

    fn user_with(certificates: Vec<Certificate>) -> User {
        User {
            id: None,
            name: "Berra".to_string(),
            role: "QA".to_string(),
            years_experience: 42,
            keywords: vec!["Pro".to_string(), "Golang".to_string()],
            certificates,
        }
    }

    #[test]
    fn deserializes_camel_case_fields_with_defaults() {
        let user: User = serde_json::from_value(json!({
            "name": "Berra",
            "role": "QA",
            "yearsExperience": 42,
            "certificates": [{ "name": "Golang", "issuer": "Google" }]
        }))
        .unwrap();

        assert_eq!(user.id, None);
        assert_eq!(user.years_experience, 42);
        assert!(user.keywords.is_empty());
        assert_eq!(user.certificates, vec![certificate(None)]);
    }

    #[test]
    fn negative_experience_is_rejected() {
        let result = serde_json::from_value::<User>(json!({
            "name": "Berra",
            "role": "QA",
            "yearsExperience": -1
        }));
        assert!(result.is_err());
    }

    #[test]
    fn absent_optional_fields_are_omitted_from_output() {
        let value = serde_json::to_value(user_with(vec![certificate(None)])).unwrap();
        assert!(value.get("id").is_none());
        let cert = &value["certificates"][0];
        assert!(cert.get("issued").is_none());
        assert!(cert.get("expires").is_none());
        assert_eq!(value["yearsExperience"], 42);
    }

    #[test]
    fn assign_new_ids_replaces_client_ids() {
        let client_id = Uuid::new_v4();
        let mut user = user_with(vec![certificate(Some(client_id)), certificate(None)]);
        user.id = Some(client_id);

        user.assign_new_ids();

        assert_ne!(user.id, Some(client_id));
        assert!(user.certificates.iter().all(|c| c.id.is_some()));
        assert!(user.certificates.iter().all(|c| c.id != Some(client_id)));
    }

    #[test]
    fn ensure_certificate_ids_keeps_unique_and_fixes_duplicates() {
        let kept = Uuid::new_v4();
        let mut user = user_with(vec![
            certificate(Some(kept)),
            certificate(Some(kept)),
            certificate(None),
        ]);

        user.ensure_certificate_ids();

        let ids: Vec<Uuid> = user.certificates.iter().filter_map(|c| c.id).collect();
        assert_eq!(ids.len(), 3);
        assert_eq!(ids[0], kept);
        let unique: HashSet<Uuid> = ids.iter().copied().collect();
        assert_eq!(unique.len(), 3);
    }
}
