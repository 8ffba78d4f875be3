//! Encoded polyline decoding.
//!
//! Directions responses carry route geometry as encoded polylines: each
//! coordinate is a delta from the previous one, scaled by 1e5, zig-zag
//! mapped to an unsigned integer, split into 5-bit chunks (low chunk
//! first), and each chunk emitted as an ASCII byte offset by 63, with bit
//! 0x20 marking a continuation.

use crate::domain::GeoPoint;

/// Decode an encoded polyline into an ordered point sequence.
///
/// An empty input yields an empty sequence. The decoder does not validate
/// its input: a truncated byte sequence yields the points completed before
/// the input ran out, and bytes outside the encoding alphabet produce
/// unspecified coordinates. Callers are expected to pass strings taken
/// verbatim from a directions response.
///
/// # Examples
///
/// ```
/// use transit_server::polyline;
///
/// let points = polyline::decode("_p~iF~ps|U_ulLnnqC_mqNvxq`@");
/// assert_eq!(points.len(), 3);
/// assert!((points[0].latitude - 38.5).abs() < 1e-9);
/// assert!((points[0].longitude + 120.2).abs() < 1e-9);
/// ```
pub fn decode(encoded: &str) -> Vec<GeoPoint> {
    let bytes = encoded.as_bytes();
    let mut points = Vec::new();

    let mut index = 0;
    let mut lat: i64 = 0;
    let mut lng: i64 = 0;

    while index < bytes.len() {
        let Some(d_lat) = next_delta(bytes, &mut index) else {
            break;
        };
        let Some(d_lng) = next_delta(bytes, &mut index) else {
            break;
        };

        lat += d_lat;
        lng += d_lng;

        points.push(GeoPoint::new(lat as f64 * 1e-5, lng as f64 * 1e-5));
    }

    points
}

/// Read one variable-length, zig-zag encoded delta starting at `index`,
/// advancing it past the consumed bytes.
///
/// Returns `None` when the input ends mid-value.
fn next_delta(bytes: &[u8], index: &mut usize) -> Option<i64> {
    let mut result: u64 = 0;
    let mut shift: u32 = 0;

    loop {
        let byte = *bytes.get(*index)?;
        *index += 1;

        let chunk = byte.wrapping_sub(63);
        // Chunks past the 64-bit accumulator only occur in malformed input;
        // their payload bits are dropped but the terminator is still honoured.
        if shift < 64 {
            result |= u64::from(chunk & 0x1f) << shift;
        }
        shift += 5;

        if chunk & 0x20 == 0 {
            break;
        }
    }

    let delta = if result & 1 != 0 {
        !(result >> 1) as i64
    } else {
        (result >> 1) as i64
    };

    Some(delta)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_point(point: GeoPoint, lat: f64, lng: f64) {
        assert!(
            (point.latitude - lat).abs() < 1e-9 && (point.longitude - lng).abs() < 1e-9,
            "expected ({lat}, {lng}), got ({}, {})",
            point.latitude,
            point.longitude
        );
    }

    #[test]
    fn reference_vector() {
        let points = decode("_p~iF~ps|U_ulLnnqC_mqNvxq`@");

        assert_eq!(points.len(), 3);
        assert_point(points[0], 38.5, -120.2);
        assert_point(points[1], 40.7, -120.95);
        assert_point(points[2], 43.252, -126.453);
    }

    #[test]
    fn empty_input() {
        assert!(decode("").is_empty());
    }

    #[test]
    fn single_point() {
        // (38.5, -120.2) alone.
        let points = decode("_p~iF~ps|U");
        assert_eq!(points.len(), 1);
        assert_point(points[0], 38.5, -120.2);
    }

    #[test]
    fn small_deltas() {
        // Deltas of exactly one encoding unit: `?` is 0, `A` is +1, `@` is -1.
        let points = decode("??A@");
        assert_eq!(points.len(), 2);
        assert_point(points[0], 0.0, 0.0);
        assert_point(points[1], 0.00001, -0.00001);
    }

    #[test]
    fn truncated_input_yields_completed_prefix() {
        // Full first point, then a longitude value cut off mid-delta.
        let points = decode("_p~iF~ps|U_ulL");
        assert_eq!(points.len(), 1);
        assert_point(points[0], 38.5, -120.2);

        // Dangling continuation byte at the very start decodes nothing.
        assert!(decode("_").is_empty());
    }
}
