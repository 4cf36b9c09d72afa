use crate::consts::{BYTES_PER_FIELD_ELEMENT, SIZE_OF_G1_AFFINE_COMPRESSED};

/// `BlobRef` denotes a reference to an untrusted blob. Its length is only
/// checked when it is deserialized against a context's evaluation domain.
pub type BlobRef<'a> = &'a [u8];

/// `Bytes48Ref` denotes a reference to an untrusted 48 byte group element,
/// either a purported commitment or a purported proof.
pub type Bytes48Ref<'a> = &'a [u8; SIZE_OF_G1_AFFINE_COMPRESSED];

/// `KZGCommitment` denotes a 48 byte compressed G1 commitment to a polynomial.
pub type KZGCommitment = [u8; SIZE_OF_G1_AFFINE_COMPRESSED];

/// `KZGProof` denotes a 48 byte compressed G1 commitment to a quotient
/// polynomial.
pub type KZGProof = [u8; SIZE_OF_G1_AFFINE_COMPRESSED];

/// `SerializedScalar` denotes a 32 byte big-endian field element.
pub type SerializedScalar = [u8; BYTES_PER_FIELD_ELEMENT];
