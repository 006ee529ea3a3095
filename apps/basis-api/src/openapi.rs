//! OpenAPI documentation configuration

use utoipa::OpenApi;

/// Combined OpenAPI documentation for the Basis API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Orthonormal Basis Finder API",
        version = "0.1.0",
        description = "Gram-Schmidt orthonormalization over a JSON request/response interface"
    ),
    servers(
        (url = "http://localhost:8000", description = "Local development server")
    ),
    nest(
        (path = "/api", api = domain_orthonormal::ApiDoc)
    )
)]
pub struct ApiDoc;
