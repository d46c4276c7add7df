//! User record handlers: fetch, create and replace by identifier.

use actix_web::{web, HttpResponse};
use log::{debug, info, warn};
use serde::Deserialize;
use utoipa::IntoParams;
use uuid::Uuid;
use validator::Validate;

use crate::constants::{
    CODE_INVALID_BODY, CODE_INVALID_USER_ID, ERR_EMPTY_BODY, ERR_INVALID_BODY,
    ERR_INVALID_USER_ID, ERR_MISSING_USER_ID,
};
use crate::errors::ApiError;
use crate::models::User;
use crate::repositories::UserRepository;
use crate::utils::mask_name;
use crate::validators::validation_errors_to_api_error;

/// Query parameters addressing a single user
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct UserIdQuery {
    /// User ID (UUID)
    #[param(example = "6ba7b814-9dad-11d1-80b4-00c04fd430c8")]
    pub id: Option<String>,
}

impl UserIdQuery {
    /// Parse the `id` parameter; a missing parameter counts as unparsable.
    pub fn user_id(&self) -> Result<Uuid, ApiError> {
        let raw = self
            .id
            .as_deref()
            .ok_or_else(|| ApiError::bad_request(CODE_INVALID_USER_ID, ERR_MISSING_USER_ID))?;

        Uuid::parse_str(raw.trim()).map_err(|e| {
            warn!("Rejected unparsable user id '{}': {}", raw, e);
            ApiError::bad_request(CODE_INVALID_USER_ID, format!("{}: {}", ERR_INVALID_USER_ID, e))
        })
    }
}

/// Deserialize and validate a user record from a raw request body.
fn parse_user_body(body: &[u8]) -> Result<User, ApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(ApiError::bad_request(CODE_INVALID_BODY, ERR_EMPTY_BODY));
    }

    let user: User = serde_json::from_slice(body).map_err(|e| {
        warn!("Rejected malformed user body: {}", e);
        ApiError::bad_request(CODE_INVALID_BODY, format!("{}: {}", ERR_INVALID_BODY, e))
    })?;

    user.validate().map_err(|e| {
        let err = validation_errors_to_api_error(e);
        warn!("Validation failed for user body: {}", err);
        err
    })?;

    Ok(user)
}

/// Get a user by ID
#[utoipa::path(
    get,
    path = "/user",
    tag = "Users",
    params(UserIdQuery),
    responses(
        (status = 200, description = "User found", body = User),
        (status = 400, description = "Missing or unparsable ID", body = crate::models::ErrorResponse),
        (status = 404, description = "User not found", body = crate::models::ErrorResponse),
        (status = 500, description = "Storage failure", body = crate::models::ErrorResponse)
    )
)]
pub async fn get_user(
    repository: web::Data<dyn UserRepository>,
    query: web::Query<UserIdQuery>,
) -> Result<HttpResponse, ApiError> {
    let user_id = query.user_id()?;
    debug!("Fetching user with id: {}", user_id);

    let user = repository.fetch(user_id).await?.ok_or_else(|| {
        warn!("User not found with id: {}", user_id);
        ApiError::user_not_found(user_id)
    })?;

    info!("Successfully fetched user: {}", user_id);
    Ok(HttpResponse::Ok().json(user))
}

/// Create a user
///
/// Any `id` in the body is ignored; the store assigns identifiers to the user
/// and to each certificate.
#[utoipa::path(
    post,
    path = "/user",
    tag = "Users",
    request_body = User,
    responses(
        (status = 201, description = "User created", body = User),
        (status = 400, description = "Malformed body or validation error", body = crate::models::ErrorResponse),
        (status = 500, description = "Storage failure", body = crate::models::ErrorResponse)
    )
)]
pub async fn create_user(
    repository: web::Data<dyn UserRepository>,
    body: web::Bytes,
) -> Result<HttpResponse, ApiError> {
    let user = parse_user_body(&body)?;
    let masked = mask_name(&user.name);

    info!("Creating user: {}", masked);
    let created = repository.create(user).await?;

    if let Some(id) = created.id {
        info!("Successfully created user {} with id: {}", masked, id);
    }
    Ok(HttpResponse::Created().json(created))
}

/// Replace a user by ID
///
/// The whole record is overwritten; the stored identifier never changes.
#[utoipa::path(
    put,
    path = "/user",
    tag = "Users",
    params(UserIdQuery),
    request_body = User,
    responses(
        (status = 200, description = "User replaced", body = User),
        (status = 400, description = "Unparsable ID, malformed body or validation error", body = crate::models::ErrorResponse),
        (status = 404, description = "User not found", body = crate::models::ErrorResponse),
        (status = 500, description = "Storage failure", body = crate::models::ErrorResponse)
    )
)]
pub async fn update_user(
    repository: web::Data<dyn UserRepository>,
    query: web::Query<UserIdQuery>,
    body: web::Bytes,
) -> Result<HttpResponse, ApiError> {
    let user_id = query.user_id()?;

    if repository.fetch(user_id).await?.is_none() {
        warn!("Update failed: User not found with id: {}", user_id);
        return Err(ApiError::user_not_found(user_id));
    }

    let replacement = parse_user_body(&body)?;

    info!("Replacing user with id: {}", user_id);
    let updated = repository
        .replace(user_id, replacement)
        .await?
        .ok_or_else(|| {
            warn!("Update failed: User {} disappeared before replace", user_id);
            ApiError::user_not_found(user_id)
        })?;

    info!("Successfully updated user: {}", user_id);
    Ok(HttpResponse::Ok().json(updated))
}
