//! HTTP handlers for the orthonormal domain

use axum::{Json, Router, routing::post};
use axum_helpers::{ErrorResponse, ValidatedJson};
use utoipa::OpenApi;

use crate::error::OrthonormalResult;
use crate::models::{BasisComputation, OrthonormalityReport, VectorsRequest};
use crate::service;

/// Tag under which the endpoints are grouped in the API docs
pub const TAG: &str = "orthonormal";

/// OpenAPI documentation for the orthonormal endpoints
#[derive(OpenApi)]
#[openapi(
    paths(compute_basis, check_orthonormal),
    components(schemas(VectorsRequest, BasisComputation, OrthonormalityReport, ErrorResponse)),
    tags(
        (name = TAG, description = "Gram-Schmidt orthonormalization endpoints")
    )
)]
pub struct ApiDoc;

/// Create the orthonormal router with all HTTP endpoints
pub fn router() -> Router {
    Router::new()
        .route("/orthonormal", post(compute_basis))
        .route("/check-orthonormal", post(check_orthonormal))
}

/// Find an orthonormal basis using the Gram-Schmidt process
#[utoipa::path(
    post,
    path = "/orthonormal",
    tag = TAG,
    request_body = VectorsRequest,
    responses(
        (status = 200, description = "Orthonormal basis for the span of the input vectors", body = BasisComputation),
        (status = 400, description = "Invalid or fully degenerate input", body = ErrorResponse),
        (status = 500, description = "Unexpected computational fault", body = ErrorResponse)
    )
)]
async fn compute_basis(
    ValidatedJson(input): ValidatedJson<VectorsRequest>,
) -> OrthonormalResult<Json<BasisComputation>> {
    let computation = service::orthonormalize(&input.vectors)?;

    tracing::debug!(
        input_vectors = computation.number_of_vectors,
        basis_vectors = computation.number_of_output_vectors,
        independent = computation.is_linearly_independent,
        "computed orthonormal basis"
    );

    Ok(Json(computation))
}

/// Check whether the given vectors form an orthonormal set
#[utoipa::path(
    post,
    path = "/check-orthonormal",
    tag = TAG,
    request_body = VectorsRequest,
    responses(
        (status = 200, description = "Orthonormality verdict with per-violation details", body = OrthonormalityReport),
        (status = 400, description = "Empty input or mismatched dimensions", body = ErrorResponse)
    )
)]
async fn check_orthonormal(
    ValidatedJson(input): ValidatedJson<VectorsRequest>,
) -> OrthonormalResult<Json<OrthonormalityReport>> {
    let report = service::check_orthonormality(&input.vectors)?;

    tracing::debug!(
        input_vectors = report.number_of_vectors,
        orthonormal = report.is_orthonormal,
        "checked orthonormality"
    );

    Ok(Json(report))
}
