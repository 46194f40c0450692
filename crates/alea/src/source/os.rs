use rand::{TryRngCore, rngs::OsRng};

use crate::{ByteSource, Unavailable};

/// A [`ByteSource`] that reads the operating system's CSPRNG through rand's
/// [`OsRng`].
///
/// `OsRng` holds no state, so this type is a zero-sized handle and is safe to
/// use from any thread.
#[derive(Default, Clone, Copy, Debug)]
pub struct OsSource;

impl ByteSource for OsSource {
    /// Probes the OS generator with a single-byte read.
    fn is_available(&self) -> bool {
        let mut probe = [0u8; 1];
        OsRng.try_fill_bytes(&mut probe).is_ok()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Unavailable> {
        OsRng.try_fill_bytes(dest).map_err(|_| Unavailable)
    }
}
