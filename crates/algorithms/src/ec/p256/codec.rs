//! SEC 1 octet encodings of P-256 points
//!
//! | form         | layout                 | length |
//! |--------------|------------------------|--------|
//! | identity     | `0x00`                 | 1      |
//! | uncompressed | `0x04 ∥ X ∥ Y`         | 65     |
//! | compressed   | `0x02/0x03 ∥ X`        | 33     |
//!
//! Coordinates are 32-byte big-endian integers that must be below p.
//! Decoding the uncompressed form does **not** check the curve equation;
//! that is [`CurveGroup::validate`]'s job, and key agreement always runs it.

use crate::ec::p256::{
    constants::{
        P256_FIELD_ELEMENT_SIZE, P256_POINT_COMPRESSED_SIZE, P256_POINT_IDENTITY_SIZE,
        P256_POINT_UNCOMPRESSED_SIZE, TAG_COMPRESSED_EVEN, TAG_COMPRESSED_ODD, TAG_IDENTITY,
        TAG_UNCOMPRESSED,
    },
    field::FieldElement,
    group::CurveGroup,
    point::Point,
};
use crate::error::{validate, Error, Result};
use subtle::{Choice, ConditionallySelectable};

/// Format of a serialized elliptic-curve point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PointFormat {
    /// Identity point: the single byte 0x00
    Identity,
    /// Uncompressed: 0x04 ∥ x ∥ y
    Uncompressed,
    /// Compressed: 0x02/0x03 ∥ x
    Compressed,
}

/// Detect the format of an encoded point from its tag and length
pub fn detect_format(bytes: &[u8]) -> Result<PointFormat> {
    let Some(&tag) = bytes.first() else {
        return Err(malformed("empty encoding"));
    };

    match (tag, bytes.len()) {
        (TAG_IDENTITY, P256_POINT_IDENTITY_SIZE) => Ok(PointFormat::Identity),
        (TAG_UNCOMPRESSED, P256_POINT_UNCOMPRESSED_SIZE) => Ok(PointFormat::Uncompressed),
        (TAG_COMPRESSED_EVEN | TAG_COMPRESSED_ODD, P256_POINT_COMPRESSED_SIZE) => {
            Ok(PointFormat::Compressed)
        }
        (TAG_IDENTITY | TAG_UNCOMPRESSED | TAG_COMPRESSED_EVEN | TAG_COMPRESSED_ODD, _) => {
            Err(malformed("unexpected length for tag"))
        }
        _ => Err(malformed("unknown tag")),
    }
}

/// Encode as `0x04 ∥ X ∥ Y`, or `0x00` for the identity
pub fn encode_uncompressed(point: &Point) -> Vec<u8> {
    if point.is_identity() {
        return vec![TAG_IDENTITY];
    }

    let mut out = Vec::with_capacity(P256_POINT_UNCOMPRESSED_SIZE);
    out.push(TAG_UNCOMPRESSED);
    out.extend_from_slice(&point.x_coordinate_bytes());
    out.extend_from_slice(&point.y_coordinate_bytes());
    out
}

/// Encode as `0x02/0x03 ∥ X` (tag carries the parity of y), or `0x00`
/// for the identity
pub fn encode_compressed(point: &Point) -> Vec<u8> {
    if point.is_identity() {
        return vec![TAG_IDENTITY];
    }

    let tag = u8::conditional_select(&TAG_COMPRESSED_EVEN, &TAG_COMPRESSED_ODD, point.y.is_odd());
    let mut out = Vec::with_capacity(P256_POINT_COMPRESSED_SIZE);
    out.push(tag);
    out.extend_from_slice(&point.x_coordinate_bytes());
    out
}

/// Encode in the requested layout
///
/// [`PointFormat::Identity`] is not a layout of its own: it selects the
/// uncompressed form. The identity point encodes as `0x00` either way.
pub fn encode(point: &Point, format: PointFormat) -> Vec<u8> {
    match format {
        PointFormat::Compressed => encode_compressed(point),
        PointFormat::Uncompressed | PointFormat::Identity => encode_uncompressed(point),
    }
}

/// Decode `0x04 ∥ X ∥ Y` or `0x00`
///
/// Only the length, the tag and the coordinate ranges are checked.
pub fn decode_uncompressed(bytes: &[u8]) -> Result<Point> {
    const CONTEXT: &str = "PointCodec::decode_uncompressed";

    if bytes == [TAG_IDENTITY] {
        return Ok(Point::identity());
    }
    validate::length(CONTEXT, bytes.len(), P256_POINT_UNCOMPRESSED_SIZE)?;
    if bytes[0] != TAG_UNCOMPRESSED {
        return Err(Error::MalformedEncoding {
            context: CONTEXT,
            reason: "unexpected tag",
        });
    }

    let (x_bytes, y_bytes) = bytes[1..].split_at(P256_FIELD_ELEMENT_SIZE);
    // Both coordinates are parsed before either failure is reported
    let x = FieldElement::from_bytes(&coordinate(x_bytes));
    let y = FieldElement::from_bytes(&coordinate(y_bytes));
    match (x, y) {
        (Ok(x), Ok(y)) => Ok(Point::from_affine(x, y)),
        _ => Err(Error::FieldElementOutOfRange { context: CONTEXT }),
    }
}

/// Decode `0x02/0x03 ∥ X` or `0x00`, recovering y from the curve equation
///
/// An x with no matching y on the curve is reported as
/// [`Error::InvalidPoint`].
pub fn decode_compressed(group: &CurveGroup, bytes: &[u8]) -> Result<Point> {
    const CONTEXT: &str = "PointCodec::decode_compressed";

    if bytes == [TAG_IDENTITY] {
        return Ok(Point::identity());
    }
    validate::length(CONTEXT, bytes.len(), P256_POINT_COMPRESSED_SIZE)?;
    let want_odd = match bytes[0] {
        TAG_COMPRESSED_EVEN => Choice::from(0),
        TAG_COMPRESSED_ODD => Choice::from(1),
        _ => {
            return Err(Error::MalformedEncoding {
                context: CONTEXT,
                reason: "unexpected tag",
            })
        }
    };

    let x = FieldElement::from_bytes(&coordinate(&bytes[1..]))
        .map_err(|_| Error::FieldElementOutOfRange { context: CONTEXT })?;
    let y = group
        .curve_rhs(&x)
        .sqrt()
        .ok_or(Error::InvalidPoint { context: CONTEXT })?;

    let flip = y.is_odd() ^ want_odd;
    let y = FieldElement::conditional_select(&y, &y.negate(), flip);
    Ok(Point::from_affine(x, y))
}

/// Decode any of the three forms
pub fn decode(group: &CurveGroup, bytes: &[u8]) -> Result<Point> {
    match detect_format(bytes)? {
        PointFormat::Identity => Ok(Point::identity()),
        PointFormat::Uncompressed => decode_uncompressed(bytes),
        PointFormat::Compressed => decode_compressed(group, bytes),
    }
}

fn coordinate(bytes: &[u8]) -> [u8; P256_FIELD_ELEMENT_SIZE] {
    let mut out = [0u8; P256_FIELD_ELEMENT_SIZE];
    out.copy_from_slice(bytes);
    out
}

fn malformed(reason: &'static str) -> Error {
    Error::MalformedEncoding {
        context: "PointCodec::detect_format",
        reason,
    }
}
