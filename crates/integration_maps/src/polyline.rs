//! Encoded polyline decoding
//!
//! Decodes the compact polyline format used by the directions endpoint
//! (signed varint deltas, 5-bit chunks offset by 63, precision 1e5).

use domain::Coordinate;

use crate::error::MapsError;

const PRECISION: f64 = 1e5;

/// Decode an encoded polyline into coordinates
///
/// # Errors
///
/// Returns `MapsError::ParseError` for truncated input, characters outside the
/// encoding alphabet, or decoded points outside the valid coordinate range.
pub fn decode_polyline(encoded: &str) -> Result<Vec<Coordinate>, MapsError> {
    let bytes = encoded.as_bytes();
    let mut points = Vec::new();
    let mut index = 0;
    let mut lat: i64 = 0;
    let mut lng: i64 = 0;

    while index < bytes.len() {
        lat += next_delta(bytes, &mut index)?;
        lng += next_delta(bytes, &mut index)?;

        #[allow(clippy::cast_precision_loss)]
        let point = Coordinate::new(lat as f64 / PRECISION, lng as f64 / PRECISION)
            .map_err(|e| MapsError::ParseError(format!("polyline point out of range: {e}")))?;
        points.push(point);
    }

    Ok(points)
}

fn next_delta(bytes: &[u8], index: &mut usize) -> Result<i64, MapsError> {
    let mut result: i64 = 0;
    let mut shift = 0;

    loop {
        let Some(&byte) = bytes.get(*index) else {
            return Err(MapsError::ParseError("truncated polyline".to_string()));
        };
        *index += 1;

        if !(63..=126).contains(&byte) || shift > 30 {
            return Err(MapsError::ParseError(format!(
                "invalid polyline byte {byte:#x} at {}",
                *index - 1
            )));
        }

        let chunk = i64::from(byte - 63);
        result |= (chunk & 0x1f) << shift;
        shift += 5;

        if chunk < 0x20 {
            break;
        }
    }

    Ok(if result & 1 == 1 { !(result >> 1) } else { result >> 1 })
}
