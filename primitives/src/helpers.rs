use ark_bls12_381::Fr;
use ark_ff::PrimeField;
use sha2::{Digest, Sha256};

extern crate alloc;
use alloc::vec::Vec;

use crate::{
    consts::{
        BYTES_PER_DEGREE_ENCODING, BYTES_PER_FIELD_ELEMENT, FIAT_SHAMIR_PROTOCOL_DOMAIN,
        SIZE_OF_G1_AFFINE_COMPRESSED,
    },
    types::KZGCommitment,
};

/// Maps a byte slice to a field element (`Fr`) by hashing it with SHA-256 and
/// reducing the big-endian digest modulo the scalar field order.
pub fn hash_to_field_element(msg: &[u8]) -> Fr {
    let msg_digest = Sha256::digest(msg);
    Fr::from_be_bytes_mod_order(msg_digest.as_slice())
}

/// Encodes the number of field elements in a blob as a fixed width big-endian
/// integer.
pub fn degree_to_be_bytes(field_elements_per_blob: usize) -> [u8; BYTES_PER_DEGREE_ENCODING] {
    (field_elements_per_blob as u128).to_be_bytes()
}

/// Computes the Fiat-Shamir evaluation challenge for a blob and its
/// serialized commitment.
///
/// The hashed message is
/// `FIAT_SHAMIR_PROTOCOL_DOMAIN || N (16 bytes, big-endian) || blob || commitment`
/// where `N` is the number of field elements in the blob. The blob is
/// absorbed as raw bytes and is expected to have been validated already.
pub fn compute_challenge(blob: &[u8], commitment: &KZGCommitment) -> Fr {
    let field_elements_per_blob = blob.len() / BYTES_PER_FIELD_ELEMENT;

    let challenge_input_size = FIAT_SHAMIR_PROTOCOL_DOMAIN.len()
        + BYTES_PER_DEGREE_ENCODING
        + blob.len()
        + SIZE_OF_G1_AFFINE_COMPRESSED;

    let mut digest_bytes = Vec::with_capacity(challenge_input_size);
    digest_bytes.extend_from_slice(FIAT_SHAMIR_PROTOCOL_DOMAIN);
    digest_bytes.extend_from_slice(&degree_to_be_bytes(field_elements_per_blob));
    digest_bytes.extend_from_slice(blob);
    digest_bytes.extend_from_slice(commitment);
    debug_assert_eq!(digest_bytes.len(), challenge_input_size);

    hash_to_field_element(&digest_bytes)
}
