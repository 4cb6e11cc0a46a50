//! Compact polyline codec (precision 5).
//!
//! Each coordinate is scaled by 1e5, delta-encoded against the previous point,
//! zig-zag folded and emitted as 5-bit chunks offset by 63, with 0x20 marking
//! that another chunk follows. This is the format returned by common directions
//! APIs as `overview_polyline`, so decoded output must stay bit-compatible.

use thiserror::Error;

use crate::geo::GeoPoint;

const PRECISION: f64 = 1e5;
const CHUNK_OFFSET: u8 = 63;
const CHUNK_MASK: u64 = 0x1f;
const CONTINUATION_BIT: u64 = 0x20;
const MAX_CHUNK_BYTE: u8 = CHUNK_OFFSET + 0x3f;

/// Errors produced while decoding an encoded path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PolylineError {
    #[error("invalid polyline byte {byte:#04x} at position {position}")]
    InvalidCharacter { position: usize, byte: u8 },
    #[error("polyline ends inside a coordinate at position {position}")]
    Truncated { position: usize },
    #[error("polyline value overflows at position {position}")]
    Overflow { position: usize },
}

/// Decode an encoded path into its ordered points.
///
/// An empty string decodes to an empty path.
pub fn decode(encoded: &str) -> Result<Vec<GeoPoint>, PolylineError> {
    let bytes = encoded.as_bytes();
    let mut index = 0;
    let mut lat: i64 = 0;
    let mut lng: i64 = 0;
    let mut points = Vec::with_capacity(bytes.len() / 4);

    while index < bytes.len() {
        let dlat = decode_value(bytes, &mut index)?;
        let dlng = decode_value(bytes, &mut index)?;
        lat = lat
            .checked_add(dlat)
            .ok_or(PolylineError::Overflow { position: index })?;
        lng = lng
            .checked_add(dlng)
            .ok_or(PolylineError::Overflow { position: index })?;
        points.push(GeoPoint::new(lat as f64 / PRECISION, lng as f64 / PRECISION));
    }

    Ok(points)
}

/// Encode points into the compact polyline format.
///
/// Coordinates are rounded half away from zero to five decimal places.
pub fn encode(points: &[GeoPoint]) -> String {
    let mut out = String::with_capacity(points.len() * 8);
    let mut prev_lat: i64 = 0;
    let mut prev_lng: i64 = 0;

    for point in points {
        let lat = scale(point.latitude);
        let lng = scale(point.longitude);
        encode_value(lat - prev_lat, &mut out);
        encode_value(lng - prev_lng, &mut out);
        prev_lat = lat;
        prev_lng = lng;
    }

    out
}

fn scale(degrees: f64) -> i64 {
    (degrees * PRECISION).round() as i64
}

fn decode_value(bytes: &[u8], index: &mut usize) -> Result<i64, PolylineError> {
    let mut result: u64 = 0;
    let mut shift: u32 = 0;

    loop {
        let position = *index;
        let byte = *bytes
            .get(position)
            .ok_or(PolylineError::Truncated { position })?;
        if !(CHUNK_OFFSET..=MAX_CHUNK_BYTE).contains(&byte) {
            return Err(PolylineError::InvalidCharacter { position, byte });
        }
        if shift >= u64::BITS {
            return Err(PolylineError::Overflow { position });
        }

        let chunk = u64::from(byte - CHUNK_OFFSET);
        result |= (chunk & CHUNK_MASK) << shift;
        shift += 5;
        *index += 1;

        if chunk < CONTINUATION_BIT {
            break;
        }
    }

    let value = (result >> 1) as i64;
    Ok(if result & 1 == 1 { !value } else { value })
}

fn encode_value(delta: i64, out: &mut String) {
    let folded = if delta < 0 { !(delta << 1) } else { delta << 1 };
    let mut value = folded as u64;

    while value >= CONTINUATION_BIT {
        let chunk = (CONTINUATION_BIT | (value & CHUNK_MASK)) as u8;
        out.push(char::from(chunk + CHUNK_OFFSET));
        value >>= 5;
    }
    out.push(char::from(value as u8 + CHUNK_OFFSET));
}

#[cfg(test)]
mod tests {
    use super::*;

    const REFERENCE: &str = "_p~iF~ps|U_ulLnnqC_mqNvxq`@";

    fn reference_points() -> Vec<GeoPoint> {
        vec![
            GeoPoint::new(38.5, -120.2),
            GeoPoint::new(40.7, -120.95),
            GeoPoint::new(43.252, -126.453),
        ]
    }

    #[test]
    fn decodes_reference_polyline() {
        assert_eq!(decode(REFERENCE).expect("valid polyline"), reference_points());
    }

    #[test]
    fn encodes_reference_points() {
        assert_eq!(encode(&reference_points()), REFERENCE);
    }

    #[test]
    fn empty_string_decodes_to_empty_path() {
        assert!(decode("").expect("empty is valid").is_empty());
        assert_eq!(encode(&[]), "");
    }

    #[test]
    fn rejects_bytes_outside_chunk_alphabet() {
        let err = decode("_p~iF ps|U").unwrap_err();
        assert_eq!(
            err,
            PolylineError::InvalidCharacter {
                position: 5,
                byte: b' '
            }
        );
    }

    #[test]
    fn latitude_without_longitude_is_truncated() {
        assert_eq!(
            decode("_p~iF").unwrap_err(),
            PolylineError::Truncated { position: 5 }
        );
    }

    #[test]
    fn input_ending_mid_value_is_truncated() {
        assert_eq!(
            decode("_p~").unwrap_err(),
            PolylineError::Truncated { position: 3 }
        );
    }

    #[test]
    fn endless_continuation_overflows() {
        let err = decode(&"~".repeat(20)).unwrap_err();
        assert!(matches!(err, PolylineError::Overflow { .. }));
    }

    #[test]
    fn encoded_san_francisco_route_decodes_to_five_decimal_points() {
        let decoded = decode("c|peFf`ejVo}@o}@o}@o}@").expect("valid polyline");
        assert_eq!(
            decoded,
            vec![
                GeoPoint::new(37.7749, -122.4194),
                GeoPoint::new(37.7849, -122.4094),
                GeoPoint::new(37.7949, -122.3994),
            ]
        );
    }
}
