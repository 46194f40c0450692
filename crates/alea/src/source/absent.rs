use crate::{ByteSource, Unavailable, WORD_MAX, WordSource};

/// A primitive that does not exist on this platform.
///
/// Plug it into [`RandomSource::from_sources`] in place of a backend you want
/// to disable. It reports itself unavailable and every draw from it fails, so
/// a caller that forces it with [`RandomSource::set_method`] gets
/// [`Error::NoBackendAvailable`] at draw time.
///
/// [`RandomSource::from_sources`]: crate::RandomSource::from_sources
/// [`RandomSource::set_method`]: crate::RandomSource::set_method
/// [`Error::NoBackendAvailable`]: crate::Error::NoBackendAvailable
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Absent;

impl WordSource for Absent {
    fn word_max(&self) -> u32 {
        WORD_MAX
    }

    fn next_word(&mut self) -> Result<u32, Unavailable> {
        Err(Unavailable)
    }

    fn next_between(&mut self, _min: i64, _max: i64) -> Result<i64, Unavailable> {
        Err(Unavailable)
    }

    fn is_available(&self) -> bool {
        false
    }
}

impl ByteSource for Absent {
    fn is_available(&self) -> bool {
        false
    }

    fn fill_bytes(&mut self, _dest: &mut [u8]) -> Result<(), Unavailable> {
        Err(Unavailable)
    }
}
