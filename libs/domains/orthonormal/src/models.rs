use serde::{Deserialize, Serialize};
use ts_rs::TS;
use utoipa::ToSchema;
use validator::Validate;

/// Request body shared by both operations: an ordered list of real-valued
/// vectors. All vectors must have the same length within one request.
#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema, TS)]
#[ts(export)]
pub struct VectorsRequest {
    /// Ordered list of vectors, e.g. `[[1, 1, 0], [1, 0, 1], [0, 1, 1]]`
    #[validate(length(min = 1, message = "At least one vector is required"))]
    pub vectors: Vec<Vec<f64>>,
}

/// Result of running the Gram-Schmidt process over a set of input vectors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema, TS)]
#[ts(export)]
pub struct BasisComputation {
    /// Orthonormal basis for the span of the input vectors, in the order
    /// the surviving input vectors were processed
    pub orthonormal_basis: Vec<Vec<f64>>,
    /// The input vectors, echoed back unchanged
    pub original_vectors: Vec<Vec<f64>>,
    /// True when no input vector deflated to (near-)zero, i.e. the basis
    /// has as many vectors as the input
    pub is_linearly_independent: bool,
    /// Dimension of the span (equals the number of basis vectors)
    pub dimension: usize,
    /// Number of input vectors
    pub number_of_vectors: usize,
    /// Length of each input vector
    pub vector_size: usize,
    /// Number of basis vectors produced
    pub number_of_output_vectors: usize,
}

/// Diagnostic verdict on whether a set of vectors is orthonormal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema, TS)]
#[ts(export)]
pub struct OrthonormalityReport {
    /// True iff no violation was recorded
    pub is_orthonormal: bool,
    /// One string per violated constraint (unit norm first, then pairwise
    /// orthogonality), or a single success message when none was violated
    pub details: Vec<String>,
    /// Number of input vectors
    pub number_of_vectors: usize,
    /// Length of each input vector
    pub vector_size: usize,
}
