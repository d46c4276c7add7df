//! User-related custom validators.

use validator::ValidationError;

use crate::constants::{
    ERR_CERTIFICATE_EXPIRES_BEFORE_ISSUED, ERR_CERTIFICATE_NAME_REQUIRED, ERR_KEYWORD_BLANK,
    ERR_KEYWORD_TOO_LONG, ERR_NAME_REQUIRED, ERR_TOO_MANY_KEYWORDS, MAX_KEYWORDS,
    MAX_KEYWORD_LENGTH,
};
use crate::models::Certificate;

fn error(code: &'static str, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(message.into());
    error
}

/// Custom validator for the user's name: must contain something besides whitespace.
pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(error("name_required", ERR_NAME_REQUIRED));
    }
    Ok(())
}

pub fn validate_certificate_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(error("certificate_name_required", ERR_CERTIFICATE_NAME_REQUIRED));
    }
    Ok(())
}

/// Custom validator for the keyword list.
/// Duplicates are allowed; blank or oversized entries are not.
pub fn validate_keywords(keywords: &[String]) -> Result<(), ValidationError> {
    if keywords.len() > MAX_KEYWORDS {
        return Err(error("too_many_keywords", ERR_TOO_MANY_KEYWORDS));
    }
    if keywords.iter().any(|k| k.trim().is_empty()) {
        return Err(error("keyword_blank", ERR_KEYWORD_BLANK));
    }
    if keywords.iter().any(|k| k.chars().count() > MAX_KEYWORD_LENGTH) {
        return Err(error("keyword_too_long", ERR_KEYWORD_TOO_LONG));
    }
    Ok(())
}

/// Struct-level validator: a certificate cannot expire before it was issued.
pub fn validate_certificate_window(certificate: &Certificate) -> Result<(), ValidationError> {
    match (certificate.issued, certificate.expires) {
        (Some(issued), Some(expires)) if expires < issued => Err(error(
            "certificate_window",
            ERR_CERTIFICATE_EXPIRES_BEFORE_ISSUED,
        )),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ApiError;
    use crate::models::User;
    use crate::validators::validation_errors_to_api_error;
    use chrono::{Duration, TimeZone, Utc};
    use rstest::rstest;
    use validator::Validate;

    fn certificate() -> Certificate {
        Certificate {
            id: None,
            name: "Golang".to_string(),
            issuer: "Google".to_string(),
            issued: None,
            expires: None,
        }
    }

    fn user() -> User {
        User {
            id: None,
            name: "Berra".to_string(),
            role: "QA".to_string(),
            years_experience: 42,
            keywords: vec!["Pro".to_string(), "Golang".to_string(), "Pro".to_string()],
            certificates: vec![certificate()],
        }
    }

    fn messages(user: &User) -> Vec<String> {
        match user.validate().map_err(validation_errors_to_api_error) {
            Ok(()) => Vec::new(),
            Err(ApiError::ValidationError { errors, .. }) => errors,
            Err(other) => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn valid_user_with_duplicate_keywords_passes() {
        assert!(messages(&user()).is_empty());
    }

    #[rstest]
    #[case("", ERR_NAME_REQUIRED)]
    #[case("   ", ERR_NAME_REQUIRED)]
    fn blank_name_is_rejected(#[case] name: &str, #[case] expected: &str) {
        let mut user = user();
        user.name = name.to_string();
        assert_eq!(messages(&user), vec![expected.to_string()]);
    }

    #[rstest]
    #[case::name(|u: &mut User| u.name = "x".repeat(101), "Name must be at most 100 characters")]
    #[case::role(|u: &mut User| u.role = "x".repeat(101), "Role must be at most 100 characters")]
    #[case::issuer(
        |u: &mut User| u.certificates[0].issuer = "x".repeat(101),
        "Certificate issuer must be at most 100 characters"
    )]
    #[case::certificate_name(
        |u: &mut User| u.certificates[0].name = "x".repeat(101),
        "Certificate name must be at most 100 characters"
    )]
    #[case::certificate_count(
        |u: &mut User| u.certificates = vec![certificate(); 51],
        "At most 50 certificates are allowed"
    )]
    fn text_and_count_limits_are_enforced(#[case] edit: fn(&mut User), #[case] expected: &str) {
        let mut user = user();
        edit(&mut user);
        assert_eq!(messages(&user), vec![expected.to_string()]);
    }

    #[rstest]
    #[case::name(|u: &mut User| u.name = "é".repeat(100))]
    #[case::issuer(|u: &mut User| u.certificates[0].issuer = "x".repeat(100))]
    #[case::certificate_count(|u: &mut User| u.certificates = vec![certificate(); 50])]
    fn values_at_the_limit_pass(#[case] edit: fn(&mut User)) {
        let mut user = user();
        edit(&mut user);
        assert!(messages(&user).is_empty());
    }

    #[rstest]
    #[case(vec![" ".to_string()], ERR_KEYWORD_BLANK)]
    #[case(vec!["k".repeat(51)], ERR_KEYWORD_TOO_LONG)]
    #[case(vec!["k".to_string(); 51], ERR_TOO_MANY_KEYWORDS)]
    fn bad_keywords_are_rejected(#[case] keywords: Vec<String>, #[case] expected: &str) {
        let mut user = user();
        user.keywords = keywords;
        assert_eq!(messages(&user), vec![expected.to_string()]);
    }

    #[test]
    fn nested_certificate_errors_are_reported() {
        let mut user = user();
        user.certificates[0].name = String::new();
        assert_eq!(
            messages(&user),
            vec![ERR_CERTIFICATE_NAME_REQUIRED.to_string()]
        );
    }

    #[test]
    fn certificate_expiring_before_issue_is_rejected() {
        let issued = Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap();
        let mut cert = certificate();
        cert.issued = Some(issued);
        cert.expires = Some(issued - Duration::days(1));
        assert!(validate_certificate_window(&cert).is_err());

        cert.expires = Some(issued + Duration::days(365));
        assert!(validate_certificate_window(&cert).is_ok());
    }
}
