//! Orthonormal Basis Domain
//!
//! Gram-Schmidt orthonormalization behind a small request/response surface.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints, request/response mapping
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Validation, Gram-Schmidt, orthonormality check
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Request/response DTOs
//! └─────────────┘
//! ```
//!
//! The service layer is pure: no state is shared across calls, every
//! computation is a deterministic function of its input.

pub mod error;
pub mod handlers;
pub mod models;
pub mod service;

// Re-export commonly used types
pub use error::{OrthonormalError, OrthonormalResult};
pub use handlers::ApiDoc;
pub use models::{BasisComputation, OrthonormalityReport, VectorsRequest};
pub use service::{
    DEPENDENCY_TOLERANCE, ORTHONORMALITY_TOLERANCE, check_orthonormality, orthonormalize,
    validate_vectors,
};
