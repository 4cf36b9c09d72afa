use blob_kzg_primitives::{
    consts::BYTES_PER_FIELD_ELEMENT,
    domain::Domain,
    errors::KzgError,
    helpers,
    serialization,
    types::{BlobRef, Bytes48Ref, KZGCommitment, KZGProof, SerializedScalar},
};
use tracing::{debug, instrument};

use crate::{commit_key::CommitKey, kzg};

/// Immutable setup state shared by every prover operation: the Lagrange
/// commitment key and the evaluation domain it was generated over.
///
/// A `Context` is built once and never mutated afterwards. It is `Send` and
/// `Sync`, so it can be shared between threads by reference or through an
/// `Arc`.
#[derive(Debug, Clone)]
pub struct Context {
    commit_key: CommitKey,
    domain: Domain,
}

impl Context {
    /// Bundles a commitment key with its domain. The key must hold at least
    /// one point per domain element; only the first `domain.size()` points
    /// are kept.
    pub fn new(mut commit_key: CommitKey, domain: Domain) -> Result<Self, KzgError> {
        if commit_key.len() < domain.size() {
            return Err(KzgError::CommitKeyTooShort {
                required: domain.size(),
                actual: commit_key.len(),
            });
        }
        debug!(
            domain_size = domain.size(),
            commit_key_len = commit_key.len(),
            "building KZG context"
        );
        commit_key.truncate(domain.size());

        Ok(Self { commit_key, domain })
    }

    pub fn domain(&self) -> &Domain {
        &self.domain
    }

    pub fn commit_key(&self) -> &CommitKey {
        &self.commit_key
    }

    pub fn field_elements_per_blob(&self) -> usize {
        self.domain.size()
    }

    pub fn bytes_per_blob(&self) -> usize {
        self.domain.size() * BYTES_PER_FIELD_ELEMENT
    }

    /// Computes the commitment to a blob.
    pub fn blob_to_commitment(&self, blob: BlobRef) -> Result<KZGCommitment, KzgError> {
        let polynomial = serialization::deserialize_blob(blob, self.field_elements_per_blob())
            .inspect_err(|err| debug!(%err, "rejected blob"))?;
        let commitment = kzg::commit_to_polynomial(&polynomial, &self.commit_key)?;
        Ok(serialization::serialize_g1_point(&commitment))
    }

    /// Computes the commitments to many blobs.
    ///
    /// Every blob is deserialized before any commitment is computed, so a
    /// single invalid blob fails the whole batch. Commitments are computed in
    /// parallel and returned in input order.
    #[instrument(skip_all, fields(num_blobs = blobs.len()))]
    pub fn blobs_to_commitments<B: AsRef<[u8]>>(
        &self,
        blobs: &[B],
    ) -> Result<Vec<KZGCommitment>, KzgError> {
        let polynomials = serialization::deserialize_blobs(blobs, self.field_elements_per_blob())
            .inspect_err(|err| debug!(%err, "rejected blob batch"))?;
        let commitments = kzg::commit_to_polynomials(&polynomials, &self.commit_key)?;
        Ok(serialization::serialize_g1_points(&commitments))
    }

    /// Computes a proof that the blob's polynomial evaluates to the returned
    /// value at the caller supplied point `z`.
    ///
    /// Returns the 48 byte proof and the 32 byte claimed value.
    #[instrument(skip_all)]
    pub fn compute_kzg_proof(
        &self,
        blob: BlobRef,
        z: &SerializedScalar,
    ) -> Result<(KZGProof, SerializedScalar), KzgError> {
        let polynomial = serialization::deserialize_blob(blob, self.field_elements_per_blob())
            .inspect_err(|err| debug!(%err, "rejected blob"))?;
        let z = serialization::deserialize_scalar(z)
            .inspect_err(|err| debug!(%err, "rejected evaluation point"))?;

        let proof = kzg::open(&self.domain, &polynomial, &z, &self.commit_key)?;

        Ok((
            serialization::serialize_g1_point(&proof.quotient_commitment),
            serialization::serialize_scalar(&proof.claimed_value),
        ))
    }

    /// Computes a proof for the blob at the Fiat-Shamir challenge derived from
    /// the blob and `commitment`.
    ///
    /// **This does not check that `commitment` is the commitment to `blob`.**
    /// The commitment is only deserialized to check that it is a valid
    /// subgroup element. Given a valid but unrelated commitment, a proof is
    /// still produced, at a challenge that depends on that commitment. Callers
    /// that did not compute the commitment themselves should compare it with
    /// [Context::blob_to_commitment] before relying on the proof.
    ///
    /// Returns the 48 byte proof and the 32 byte claimed value.
    #[instrument(skip_all)]
    pub fn compute_blob_kzg_proof(
        &self,
        blob: BlobRef,
        commitment: Bytes48Ref,
    ) -> Result<(KZGProof, SerializedScalar), KzgError> {
        let polynomial = serialization::deserialize_blob(blob, self.field_elements_per_blob())
            .inspect_err(|err| debug!(%err, "rejected blob"))?;
        serialization::deserialize_g1_point(commitment)
            .inspect_err(|err| debug!(%err, "rejected commitment"))?;

        let evaluation_challenge = helpers::compute_challenge(blob, commitment);

        let proof = kzg::open(&self.domain, &polynomial, &evaluation_challenge, &self.commit_key)?;

        Ok((
            serialization::serialize_g1_point(&proof.quotient_commitment),
            serialization::serialize_scalar(&proof.claimed_value),
        ))
    }
}
