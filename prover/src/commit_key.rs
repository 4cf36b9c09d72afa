use ark_bls12_381::{G1Affine, G1Projective};
use ark_ec::{CurveGroup, VariableBaseMSM};
use blob_kzg_primitives::{
    consts::SIZE_OF_G1_AFFINE_COMPRESSED, domain::Domain, errors::KzgError,
    polynomial::PolynomialEvalForm, serialization,
};
use rayon::prelude::*;

/// The G1 half of the structured reference string, in Lagrange form.
///
/// Point `i` is `[L_i(tau)]G`, where `L_i` is the Lagrange polynomial that is
/// one at `domain.roots()[i]` and zero on every other root. A commitment to a
/// polynomial in evaluation form is then an inner product between its
/// evaluations and these points.
#[derive(Debug, PartialEq, Clone)]
pub struct CommitKey {
    g1_lagrange: Vec<G1Affine>,
}

impl CommitKey {
    /// Wraps points that are already known to be valid subgroup elements in
    /// Lagrange form.
    pub fn new(g1_lagrange: Vec<G1Affine>) -> Self {
        Self { g1_lagrange }
    }

    /// Decodes a concatenation of 48 byte compressed Lagrange points. Every
    /// point goes through the same subgroup-checked decoding as untrusted
    /// input; decoding runs in parallel and keeps the original order.
    pub fn from_compressed_bytes(bytes: &[u8]) -> Result<Self, KzgError> {
        if bytes.len() % SIZE_OF_G1_AFFINE_COMPRESSED != 0 {
            return Err(KzgError::InvalidEncoding(format!(
                "setup length {} is not a multiple of {}",
                bytes.len(),
                SIZE_OF_G1_AFFINE_COMPRESSED
            )));
        }

        let g1_lagrange = bytes
            .par_chunks_exact(SIZE_OF_G1_AFFINE_COMPRESSED)
            .map(serialization::deserialize_g1_point)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { g1_lagrange })
    }

    /// Converts monomial points `[tau^i]G` into the Lagrange form used by
    /// `domain`. Only the first `domain.size()` points are used.
    pub fn from_monomial(g1_monomial: &[G1Affine], domain: &Domain) -> Result<Self, KzgError> {
        if g1_monomial.len() < domain.size() {
            return Err(KzgError::CommitKeyTooShort {
                required: domain.size(),
                actual: g1_monomial.len(),
            });
        }

        let points_projective: Vec<G1Projective> = g1_monomial[..domain.size()]
            .par_iter()
            .map(|&p| G1Projective::from(p))
            .collect();
        let lagrange = domain.ifft_g1(&points_projective)?;

        Ok(Self {
            g1_lagrange: G1Projective::normalize_batch(&lagrange),
        })
    }

    pub fn points(&self) -> &[G1Affine] {
        &self.g1_lagrange
    }

    pub fn len(&self) -> usize {
        self.g1_lagrange.len()
    }

    pub fn is_empty(&self) -> bool {
        self.g1_lagrange.is_empty()
    }

    /// Keeps the first `size` points.
    pub(crate) fn truncate(&mut self, size: usize) {
        self.g1_lagrange.truncate(size);
    }

    /// Commit to a polynomial in evaluation form with a multi-scalar
    /// multiplication against the first `polynomial.len()` points.
    pub fn commit(&self, polynomial: &PolynomialEvalForm) -> Result<G1Affine, KzgError> {
        if polynomial.len() > self.len() {
            return Err(KzgError::CommitKeyTooShort {
                required: polynomial.len(),
                actual: self.len(),
            });
        }

        let bases = &self.g1_lagrange[..polynomial.len()];
        match G1Projective::msm(bases, polynomial.evaluations()) {
            Ok(res) => Ok(res.into_affine()),
            Err(len) => Err(KzgError::MsmError(format!(
                "bases and scalars differ in length ({} points)",
                len
            ))),
        }
    }
}
