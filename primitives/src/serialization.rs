//! Canonical codecs between wire bytes and checked in-memory values.
//!
//! - scalars are 32 bytes, big-endian, and must be strictly below the scalar
//!   field modulus;
//! - G1 points use the 48 byte compressed encoding with three flag bits in
//!   the most significant byte (compressed, infinity, lexicographically
//!   largest y) and must lie in the prime-order subgroup;
//! - blobs are `N` consecutive scalars, `N` being the evaluation domain size.
//!
//! Deserialization is the only place where validation happens. Serialization
//! is total.

use ark_bls12_381::{Fq, Fr, G1Affine};
use ark_ec::AffineRepr;
use ark_ff::{BigInteger, PrimeField};
use ark_serialize::CanonicalDeserialize;

extern crate alloc;
use alloc::format;
use alloc::string::ToString;
use alloc::vec::Vec;

use crate::{
    consts::{
        BYTES_PER_FIELD_ELEMENT, G1_COMPRESSED_FLAG, G1_FLAGS_MASK, G1_INFINITY_FLAG,
        G1_SORT_FLAG, SIZE_OF_G1_AFFINE_COMPRESSED,
    },
    errors::KzgError,
    polynomial::PolynomialEvalForm,
    traits::{ReadFrFromBytes, ReadPointFromBytes},
    types::{KZGCommitment, SerializedScalar},
};

/// Deserializes a blob into a polynomial in evaluation form over a domain of
/// `field_elements_per_blob` points.
///
/// The whole blob is rejected if its length is not exactly
/// `field_elements_per_blob * 32` or if any 32 byte chunk is not a canonical
/// scalar.
pub fn deserialize_blob(
    blob: &[u8],
    field_elements_per_blob: usize,
) -> Result<PolynomialEvalForm, KzgError> {
    let expected = field_elements_per_blob * BYTES_PER_FIELD_ELEMENT;
    if blob.len() != expected {
        return Err(KzgError::InvalidBlobLength {
            expected,
            actual: blob.len(),
        });
    }

    let evaluations = blob
        .chunks_exact(BYTES_PER_FIELD_ELEMENT)
        .enumerate()
        .map(|(i, chunk)| {
            Fr::deserialize_from_bytes_be(chunk).map_err(|_| {
                KzgError::InvalidFieldElement(format!(
                    "field element at position {} is not canonical",
                    i
                ))
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(PolynomialEvalForm::new(evaluations))
}

/// Deserializes every blob, failing on the first invalid one. No partial
/// result is ever returned.
pub fn deserialize_blobs<B: AsRef<[u8]>>(
    blobs: &[B],
    field_elements_per_blob: usize,
) -> Result<Vec<PolynomialEvalForm>, KzgError> {
    blobs
        .iter()
        .map(|blob| deserialize_blob(blob.as_ref(), field_elements_per_blob))
        .collect()
}

/// Serializes the evaluations of a polynomial back into blob bytes.
pub fn serialize_polynomial(polynomial: &PolynomialEvalForm) -> Vec<u8> {
    polynomial
        .evaluations()
        .iter()
        .flat_map(serialize_scalar)
        .collect()
}

pub fn deserialize_scalar(bytes: &[u8]) -> Result<Fr, KzgError> {
    Fr::deserialize_from_bytes_be(bytes)
}

pub fn serialize_scalar(scalar: &Fr) -> SerializedScalar {
    let mut bytes = [0u8; BYTES_PER_FIELD_ELEMENT];
    bytes.copy_from_slice(&scalar.into_bigint().to_bytes_be());
    bytes
}

/// Deserializes a compressed G1 point. The subgroup check is always
/// performed.
pub fn deserialize_g1_point(bytes: &[u8]) -> Result<G1Affine, KzgError> {
    G1Affine::read_point_from_bytes_be(bytes)
}

pub fn serialize_g1_point(point: &G1Affine) -> KZGCommitment {
    let mut bytes = [0u8; SIZE_OF_G1_AFFINE_COMPRESSED];
    match point.xy() {
        None => bytes[0] = G1_COMPRESSED_FLAG | G1_INFINITY_FLAG,
        Some((x, y)) => {
            bytes.copy_from_slice(&x.into_bigint().to_bytes_be());
            bytes[0] |= G1_COMPRESSED_FLAG;
            if y > -y {
                bytes[0] |= G1_SORT_FLAG;
            }
        },
    }
    bytes
}

pub fn serialize_g1_points(points: &[G1Affine]) -> Vec<KZGCommitment> {
    points.iter().map(serialize_g1_point).collect()
}

pub(crate) fn read_g1_point_from_bytes_be(g1_bytes_be: &[u8]) -> Result<G1Affine, KzgError> {
    if g1_bytes_be.len() != SIZE_OF_G1_AFFINE_COMPRESSED {
        return Err(KzgError::InvalidEncoding(format!(
            "expected {} bytes for a g1 point, got {}",
            SIZE_OF_G1_AFFINE_COMPRESSED,
            g1_bytes_be.len()
        )));
    }

    let m_data = g1_bytes_be[0] & G1_FLAGS_MASK;
    if m_data & G1_COMPRESSED_FLAG == 0 {
        return Err(KzgError::InvalidEncoding(
            "compression flag is not set".to_string(),
        ));
    }

    if m_data & G1_INFINITY_FLAG != 0 {
        if m_data & G1_SORT_FLAG != 0
            || !is_zeroed(g1_bytes_be[0] & !G1_FLAGS_MASK, &g1_bytes_be[1..])
        {
            return Err(KzgError::InvalidEncoding(
                "point at infinity not coded properly for g1".to_string(),
            ));
        }
        return Ok(G1Affine::zero());
    }

    let mut x_bytes = [0u8; SIZE_OF_G1_AFFINE_COMPRESSED];
    x_bytes.copy_from_slice(g1_bytes_be);
    x_bytes[0] &= !G1_FLAGS_MASK;
    x_bytes.reverse();
    let x = Fq::deserialize_uncompressed(&x_bytes[..]).map_err(|_| {
        KzgError::InvalidEncoding("x coordinate is not a canonical base field element".to_string())
    })?;

    let greatest = m_data & G1_SORT_FLAG != 0;
    let point = G1Affine::get_point_from_x_unchecked(x, greatest).ok_or_else(|| {
        KzgError::InvalidEncoding("x coordinate does not lie on the curve".to_string())
    })?;

    if !point.is_in_correct_subgroup_assuming_on_curve() {
        return Err(KzgError::NotInSubgroup);
    }
    Ok(point)
}

fn is_zeroed(first_byte: u8, buf: &[u8]) -> bool {
    first_byte == 0 && buf.iter().all(|byte| *byte == 0)
}
