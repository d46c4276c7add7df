use actix_web::dev::ServiceResponse;
use actix_web::http::StatusCode;
use actix_web::middleware::{ErrorHandlerResponse, ErrorHandlers};
use actix_web::{web, HttpResponse, ResponseError};
use utoipa::OpenApi;

use crate::config::CONFIG;
use crate::constants::{CODE_INVALID_QUERY, ERR_INVALID_QUERY, MSG_SERVER_RUNNING, MSG_STATUS_OK};
use crate::errors::ApiError;
use crate::handlers;
use crate::models::HealthResponse;
use crate::openapi::ApiDoc;
use crate::repositories::UserRepository;

/// Bind every route to its handler. Called once per worker at startup.
pub fn configure_routes(cfg: &mut web::ServiceConfig, repository: web::Data<dyn UserRepository>) {
    cfg.app_data(repository)
        .app_data(web::PayloadConfig::new(CONFIG.max_payload_bytes))
        .app_data(web::QueryConfig::default().error_handler(|err, _req| {
            ApiError::bad_request(CODE_INVALID_QUERY, format!("{}: {}", ERR_INVALID_QUERY, err))
                .into()
        }))
        // Health check
        .route("/health", web::get().to(health_check))
        // Generated API description
        .route("/api-docs/openapi.json", web::get().to(openapi_json))
        // User records, addressed by the `id` query parameter
        .service(
            web::resource("/user")
                .wrap(
                    ErrorHandlers::new()
                        .handler(StatusCode::PAYLOAD_TOO_LARGE, render_payload_too_large),
                )
                .route(web::get().to(handlers::get_user))
                .route(web::post().to(handlers::create_user))
                .route(web::put().to(handlers::update_user)),
        );
}

/// Body-limit rejections are raised by the extractor as plain text; rewrite
/// them into the shared JSON error shape.
fn render_payload_too_large<B>(
    res: ServiceResponse<B>,
) -> actix_web::Result<ErrorHandlerResponse<B>> {
    let (req, _) = res.into_parts();
    let response = ApiError::payload_too_large().error_response();
    let res = ServiceResponse::new(req, response).map_into_right_body();
    Ok(ErrorHandlerResponse::Response(res))
}

/// Liveness probe
#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Server is running", body = HealthResponse)
    )
)]
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        status: MSG_STATUS_OK.to_string(),
        message: MSG_SERVER_RUNNING.to_string(),
    })
}

async fn openapi_json() -> HttpResponse {
    HttpResponse::Ok().json(ApiDoc::openapi())
}
