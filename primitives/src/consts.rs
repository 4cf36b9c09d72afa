pub const BYTES_PER_FIELD_ELEMENT: usize = 32;
pub const SIZE_OF_G1_AFFINE_COMPRESSED: usize = 48; // in bytes

/// Number of field elements in a mainnet blob. This is also the size of the
/// evaluation domain a mainnet context is built over.
pub const FIELD_ELEMENTS_PER_BLOB: usize = 4096;
pub const BYTES_PER_BLOB: usize = FIELD_ELEMENTS_PER_BLOB * BYTES_PER_FIELD_ELEMENT;

pub const FIAT_SHAMIR_PROTOCOL_DOMAIN: &[u8] = b"FSBLOBVERIFY_V1_";
/// Width of the big-endian encoding of the polynomial degree bound that is
/// absorbed into the Fiat-Shamir transcript.
pub const BYTES_PER_DEGREE_ENCODING: usize = 16;

// Flag bits carried by the first byte of a compressed G1 point.
pub const G1_COMPRESSED_FLAG: u8 = 0b1000_0000;
pub const G1_INFINITY_FLAG: u8 = 0b0100_0000;
pub const G1_SORT_FLAG: u8 = 0b0010_0000;
pub const G1_FLAGS_MASK: u8 = G1_COMPRESSED_FLAG | G1_INFINITY_FLAG | G1_SORT_FLAG;
