//! Mapping raw secure bytes onto a bounded integer.
//!
//! The mapping reads just enough bytes to cover the range and reduces them
//! with the remainder operator:
//!
//! ```text
//! range       = max - min
//! byte_length = floor(log2(range) / 8) + 1
//! result      = min + (big_endian(bytes) mod range)
//! ```
//!
//! Two properties follow and are kept on purpose:
//!
//! - `max` itself is never produced; results lie in `[min, max)`.
//! - Unless `range` divides `256^byte_length`, low residues are slightly more
//!   likely than high ones (modulo bias). No rejection sampling is done.

use crate::{ByteSource, Unavailable};

/// Number of bytes drawn for a range of width `range`.
///
/// `range` must be non-zero.
pub(crate) const fn byte_length(range: u64) -> usize {
    (range.ilog2() / 8) as usize + 1
}

/// Reduces big-endian `bytes` modulo `range` and offsets by `min`.
///
/// `bytes` holds at most eight bytes and `range` is the unsigned distance
/// `max - min`, so the result always fits between `min` and `max`.
pub(crate) fn map_bytes(min: i64, range: u64, bytes: &[u8]) -> i64 {
    let raw = bytes
        .iter()
        .fold(0u64, |acc, &b| (acc << 8) | u64::from(b));
    min.wrapping_add_unsigned(raw % range)
}

/// Draws an integer in `[min, max)` from a secure byte source.
///
/// Callers guarantee `min < max`.
pub(crate) fn draw_bytes<C>(source: &mut C, min: i64, max: i64) -> Result<i64, Unavailable>
where
    C: ByteSource + ?Sized,
{
    let range = max.abs_diff(min);
    let mut buf = [0u8; 8];
    let bytes = &mut buf[..byte_length(range)];
    source.fill_bytes(bytes)?;
    Ok(map_bytes(min, range, bytes))
}

/// Largest `f64` strictly below `1.0`.
pub(crate) const BELOW_ONE: f64 = 1.0 - f64::EPSILON / 2.0;

/// Draws a unit float from a secure byte source.
///
/// The integer path runs over `[0, i64::MAX)` and the result is divided back
/// down. Values close to `i64::MAX` round to `1.0` as `f64`, so the quotient
/// is clamped to stay below one.
pub(crate) fn draw_bytes_unit<C>(source: &mut C) -> Result<f64, Unavailable>
where
    C: ByteSource + ?Sized,
{
    let r = draw_bytes(source, 0, i64::MAX)?;
    Ok((r as f64 / i64::MAX as f64).abs().min(BELOW_ONE))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Serves bytes from a fixed script and records how many were asked for.
    struct ScriptedBytes {
        script: Vec<u8>,
        requested: Vec<usize>,
    }

    impl ScriptedBytes {
        fn new(script: &[u8]) -> Self {
            Self {
                script: script.to_vec(),
                requested: Vec::new(),
            }
        }
    }

    impl ByteSource for ScriptedBytes {
        fn is_available(&self) -> bool {
            true
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Unavailable> {
            self.requested.push(dest.len());
            for (i, slot) in dest.iter_mut().enumerate() {
                *slot = self.script[i % self.script.len()];
            }
            Ok(())
        }
    }

    #[test]
    fn byte_length_boundaries() {
        assert_eq!(byte_length(1), 1);
        assert_eq!(byte_length(255), 1);
        assert_eq!(byte_length(256), 2);
        assert_eq!(byte_length(65_535), 2);
        assert_eq!(byte_length(65_536), 3);
        assert_eq!(byte_length(i64::MAX as u64), 8);
        assert_eq!(byte_length(u64::MAX), 8);
    }

    #[test]
    fn bytes_are_big_endian() {
        assert_eq!(map_bytes(0, 1 << 20, &[0x01, 0x02]), 0x0102);
        assert_eq!(map_bytes(10, 1000, &[0x00, 0x0a]), 20);
    }

    #[test]
    fn remainder_wraps_and_max_is_excluded() {
        // 0xffff mod 256 = 255, the largest reachable value.
        assert_eq!(map_bytes(0, 256, &[0xff, 0xff]), 255);
        // 0x0100 mod 256 = 0.
        assert_eq!(map_bytes(0, 256, &[0x01, 0x00]), 0);
    }

    #[test]
    fn negative_and_extreme_bounds() {
        assert_eq!(map_bytes(-5, 10, &[13]), -2);
        assert_eq!(
            map_bytes(i64::MIN, u64::MAX, &[0xff; 8]),
            i64::MIN // u64::MAX mod u64::MAX = 0
        );

        let mut source = ScriptedBytes::new(&[0xff]);
        let v = draw_bytes(&mut source, i64::MIN, i64::MAX).unwrap();
        assert_eq!(source.requested, vec![8]);
        assert_eq!(v, i64::MIN);
    }

    #[test]
    fn draw_requests_byte_length_bytes() {
        let mut source = ScriptedBytes::new(&[0xab, 0xcd]);
        let v = draw_bytes(&mut source, 0, 256).unwrap();
        assert_eq!(source.requested, vec![2]);
        assert_eq!(v, 0xabcd % 256);
    }

    #[test]
    fn unit_is_clamped_below_one() {
        // 0x7fff_ffff_ffff_fffe mod i64::MAX sits right under i64::MAX and
        // rounds to 1.0 without the clamp.
        let mut source = ScriptedBytes::new(&[0x7f, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xfe]);
        let f = draw_bytes_unit(&mut source).unwrap();
        assert!(f < 1.0);
        assert!(f > 0.99);

        let mut zeros = ScriptedBytes::new(&[0]);
        assert_eq!(draw_bytes_unit(&mut zeros).unwrap(), 0.0);
    }
}
