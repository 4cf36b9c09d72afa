use ark_bls12_381::{Fr, G1Affine};
use blob_kzg_primitives::{domain::Domain, errors::KzgError, polynomial::PolynomialEvalForm};
use rayon::iter::{IntoParallelRefIterator, ParallelIterator};

use crate::commit_key::CommitKey;

/// An opening of a committed polynomial at some point `z`.
///
/// The evaluation point itself is not part of the proof; whoever checks it
/// has to know `z` independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpeningProof {
    /// Commitment to `q(X) = (p(X) - p(z)) / (X - z)`.
    pub quotient_commitment: G1Affine,
    /// `p(z)`.
    pub claimed_value: Fr,
}

/// Commit to a single polynomial in evaluation form.
pub fn commit_to_polynomial(
    polynomial: &PolynomialEvalForm,
    commit_key: &CommitKey,
) -> Result<G1Affine, KzgError> {
    commit_key.commit(polynomial)
}

/// Commit to each polynomial independently. Work is spread over the rayon
/// thread pool and the result keeps the input order.
pub fn commit_to_polynomials(
    polynomials: &[PolynomialEvalForm],
    commit_key: &CommitKey,
) -> Result<Vec<G1Affine>, KzgError> {
    polynomials
        .par_iter()
        .map(|polynomial| commit_key.commit(polynomial))
        .collect()
}

/// Creates a KZG opening proof for `polynomial` at `z`:
///
/// 1. `y = p(z)`
/// 2. `q(X) = (p(X) - y) / (X - z)`, including the case where `z` is a root of
///    unity
/// 3. the proof is the commitment to `q`
pub fn open(
    domain: &Domain,
    polynomial: &PolynomialEvalForm,
    z: &Fr,
    commit_key: &CommitKey,
) -> Result<OpeningProof, KzgError> {
    let claimed_value = polynomial.evaluate(domain, z)?;
    let quotient = polynomial.divide(domain, z, &claimed_value)?;
    let quotient_commitment = commit_key.commit(&quotient)?;

    Ok(OpeningProof {
        quotient_commitment,
        claimed_value,
    })
}
