//! Validation, Gram-Schmidt orthonormalization and the orthonormality check.
//!
//! Everything in this module is a pure function over `f64` vectors: no state
//! survives a call, identical input yields bit-identical output.

use crate::error::{OrthonormalError, OrthonormalResult};
use crate::models::{BasisComputation, OrthonormalityReport};

/// Norm below which a deflated vector counts as linearly dependent on the
/// basis built so far.
pub const DEPENDENCY_TOLERANCE: f64 = 1e-10;

/// Tolerance for the unit-norm and pairwise-orthogonality checks. Looser
/// than [`DEPENDENCY_TOLERANCE`] since it absorbs input rounding rather
/// than detecting near-zero residuals.
pub const ORTHONORMALITY_TOLERANCE: f64 = 1e-6;

fn dot(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

fn norm(v: &[f64]) -> f64 {
    dot(v, v).sqrt()
}

/// Validate a candidate vector set for basis computation.
///
/// Fails with [`OrthonormalError::InvalidInput`] when the list is empty,
/// when the vectors have differing lengths, or when any vector is exactly
/// the all-zero vector. On success the input is used unchanged.
pub fn validate_vectors(vectors: &[Vec<f64>]) -> OrthonormalResult<()> {
    if vectors.is_empty() {
        return Err(OrthonormalError::InvalidInput(
            "At least one vector is required".to_string(),
        ));
    }

    let lengths: Vec<usize> = vectors.iter().map(Vec::len).collect();
    if lengths.iter().any(|&len| len != lengths[0]) {
        return Err(OrthonormalError::InvalidInput(format!(
            "All vectors must have the same dimension. Found dimensions: {:?}",
            lengths
        )));
    }

    for (i, v) in vectors.iter().enumerate() {
        if v.iter().all(|&x| x == 0.0) {
            return Err(OrthonormalError::InvalidInput(format!(
                "Vector at index {} is a zero vector",
                i
            )));
        }
    }

    Ok(())
}

/// Compute an orthonormal basis for the span of `vectors` via the classical
/// Gram-Schmidt process.
///
/// Vectors are processed in input order. Each one is deflated against the
/// basis built so far (iteratively, in insertion order); a residual whose
/// norm falls below [`DEPENDENCY_TOLERANCE`] is linearly dependent and
/// contributes nothing, otherwise it is normalized and appended.
///
/// The set was independent iff every input vector survived. An input whose
/// vectors ALL collapse fails with [`OrthonormalError::DegenerateInput`] -
/// no partial result is ever returned.
pub fn orthonormalize(vectors: &[Vec<f64>]) -> OrthonormalResult<BasisComputation> {
    validate_vectors(vectors)?;

    let mut basis: Vec<Vec<f64>> = Vec::with_capacity(vectors.len());

    for (i, v) in vectors.iter().enumerate() {
        let mut residual = v.clone();

        for b in &basis {
            let projection = dot(&residual, b);
            for (r, component) in residual.iter_mut().zip(b) {
                *r -= projection * component;
            }
        }

        let residual_norm = norm(&residual);
        if !residual_norm.is_finite() {
            return Err(OrthonormalError::Internal(format!(
                "non-finite norm while processing vector at index {}",
                i
            )));
        }

        if residual_norm < DEPENDENCY_TOLERANCE {
            // Linearly dependent on the basis so far
            continue;
        }

        for r in residual.iter_mut() {
            *r /= residual_norm;
        }
        basis.push(residual);
    }

    if basis.is_empty() {
        return Err(OrthonormalError::DegenerateInput(
            "All input vectors collapsed to zero during orthonormalization".to_string(),
        ));
    }

    Ok(BasisComputation {
        is_linearly_independent: basis.len() == vectors.len(),
        dimension: basis.len(),
        number_of_vectors: vectors.len(),
        vector_size: vectors[0].len(),
        number_of_output_vectors: basis.len(),
        original_vectors: vectors.to_vec(),
        orthonormal_basis: basis,
    })
}

/// Check whether `vectors` form an orthonormal set.
///
/// This is a diagnostic, not a basis-construction step: zero vectors and
/// non-unit vectors are reported, not rejected. The input must still be
/// non-empty and of uniform dimension for the dot products to be defined.
///
/// Violations are recorded in discovery order: unit-norm checks for every
/// index first, then orthogonality checks in pair order
/// `(0,1), (0,2), ..., (1,2), ...`. Zero violations yield a single success
/// message.
pub fn check_orthonormality(vectors: &[Vec<f64>]) -> OrthonormalResult<OrthonormalityReport> {
    if vectors.is_empty() {
        return Err(OrthonormalError::InvalidInput(
            "No vectors provided".to_string(),
        ));
    }

    let lengths: Vec<usize> = vectors.iter().map(Vec::len).collect();
    if lengths.iter().any(|&len| len != lengths[0]) {
        return Err(OrthonormalError::InvalidInput(format!(
            "All vectors must have the same dimension. Found dimensions: {:?}",
            lengths
        )));
    }

    let mut details = Vec::new();

    for (i, v) in vectors.iter().enumerate() {
        let v_norm = norm(v);
        if (v_norm - 1.0).abs() > ORTHONORMALITY_TOLERANCE {
            details.push(format!(
                "Vector {} is not unit length (norm = {:.6})",
                i, v_norm
            ));
        }
    }

    for i in 0..vectors.len() {
        for j in (i + 1)..vectors.len() {
            let product = dot(&vectors[i], &vectors[j]);
            if product.abs() > ORTHONORMALITY_TOLERANCE {
                details.push(format!(
                    "Vectors {} and {} are not orthogonal (dot product = {:.6})",
                    i, j, product
                ));
            }
        }
    }

    let is_orthonormal = details.is_empty();
    if is_orthonormal {
        details.push("All vectors are orthonormal!".to_string());
    }

    Ok(OrthonormalityReport {
        is_orthonormal,
        details,
        number_of_vectors: vectors.len(),
        vector_size: vectors[0].len(),
    })
}
