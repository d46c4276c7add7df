use utoipa::OpenApi;

use crate::models::{Certificate, ErrorResponse, HealthResponse, User};

/// OpenAPI documentation for the user record API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "User Records API",
        version = "0.1.0",
        description = "Create, read and replace user profiles with their certificates.",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Users", description = "User record endpoints (fetch, create, replace)")
    ),
    paths(
        crate::handlers::get_user,
        crate::handlers::create_user,
        crate::handlers::update_user,
        crate::routes::health_check
    ),
    components(
        schemas(
            User,
            Certificate,
            ErrorResponse,
            HealthResponse
        )
    )
)]
pub struct ApiDoc;
