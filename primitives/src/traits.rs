use ark_bls12_381::{Fr, G1Affine};
use ark_ec::AffineRepr;
use ark_ff::PrimeField;
use ark_serialize::CanonicalDeserialize;

extern crate alloc;
use alloc::format;
use alloc::string::ToString;

use crate::{consts::BYTES_PER_FIELD_ELEMENT, errors::KzgError, serialization};

/// Decoding of untrusted big-endian bytes into a checked curve point.
pub trait ReadPointFromBytes: AffineRepr {
    fn read_point_from_bytes_be(bytes: &[u8]) -> Result<Self, KzgError>;
}

impl ReadPointFromBytes for G1Affine {
    fn read_point_from_bytes_be(bytes: &[u8]) -> Result<G1Affine, KzgError> {
        serialization::read_g1_point_from_bytes_be(bytes)
    }
}

/// Decoding of untrusted big-endian bytes into a canonical scalar.
pub trait ReadFrFromBytes: PrimeField {
    fn deserialize_from_bytes_be(bytes: &[u8]) -> Result<Self, KzgError>;
}

impl ReadFrFromBytes for Fr {
    fn deserialize_from_bytes_be(bytes: &[u8]) -> Result<Fr, KzgError> {
        if bytes.len() != BYTES_PER_FIELD_ELEMENT {
            return Err(KzgError::InvalidFieldElement(format!(
                "expected {} bytes, got {}",
                BYTES_PER_FIELD_ELEMENT,
                bytes.len()
            )));
        }
        let mut bytes_le = [0u8; BYTES_PER_FIELD_ELEMENT];
        bytes_le.copy_from_slice(bytes);
        bytes_le.reverse();
        // arkworks rejects any value that is not strictly below the modulus.
        Fr::deserialize_uncompressed(&bytes_le[..]).map_err(|_| {
            KzgError::InvalidFieldElement("value is not less than the field modulus".to_string())
        })
    }
}
