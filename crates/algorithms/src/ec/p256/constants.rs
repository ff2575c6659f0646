//! Shared constants for P-256 operations

/// Size of a P-256 scalar in bytes (32 bytes = 256 bits)
pub const P256_SCALAR_SIZE: usize = 32;

/// Number of bits processed by the scalar-multiplication ladder
pub const P256_SCALAR_BITS: usize = 256;

/// Size of a P-256 field element in bytes (32 bytes = 256 bits)
pub const P256_FIELD_ELEMENT_SIZE: usize = 32;

/// Size of the identity encoding: a single 0x00 byte
pub const P256_POINT_IDENTITY_SIZE: usize = 1;

/// Size of an uncompressed P-256 point in bytes: format byte (0x04) + x-coordinate + y-coordinate
pub const P256_POINT_UNCOMPRESSED_SIZE: usize = 1 + 2 * P256_FIELD_ELEMENT_SIZE; // 65 bytes: 0x04 || x || y

/// Size of a compressed P-256 point in bytes: format byte (0x02/0x03) + x-coordinate
pub const P256_POINT_COMPRESSED_SIZE: usize = 1 + P256_FIELD_ELEMENT_SIZE; // 33 bytes: 0x02/0x03 || x

/// Tag byte of the identity encoding
pub(crate) const TAG_IDENTITY: u8 = 0x00;
/// Tag byte of a compressed point with even y
pub(crate) const TAG_COMPRESSED_EVEN: u8 = 0x02;
/// Tag byte of a compressed point with odd y
pub(crate) const TAG_COMPRESSED_ODD: u8 = 0x03;
/// Tag byte of an uncompressed point
pub(crate) const TAG_UNCOMPRESSED: u8 = 0x04;
