use crate::Unavailable;

/// A weak generator that produces machine words.
///
/// This abstraction allows you to plug in a real generator or a mocked one in
/// tests.
///
/// # Example
/// ```
/// use alea::{Unavailable, WordSource};
///
/// struct FixedWords;
/// impl WordSource for FixedWords {
///     fn word_max(&self) -> u32 {
///         100
///     }
///     fn next_word(&mut self) -> Result<u32, Unavailable> {
///         Ok(50)
///     }
///     fn next_between(&mut self, min: i64, _max: i64) -> Result<i64, Unavailable> {
///         Ok(min)
///     }
/// }
///
/// let mut words = FixedWords;
/// assert_eq!(words.next_word(), Ok(50));
/// ```
pub trait WordSource {
    /// Exclusive upper bound of [`Self::next_word`]. Unit floats are computed
    /// as `next_word() / word_max()`.
    fn word_max(&self) -> u32;

    /// Returns a uniform word in `[0, word_max())`.
    fn next_word(&mut self) -> Result<u32, Unavailable>;

    /// Returns a uniform integer in `[min, max]`. Callers guarantee
    /// `min < max`.
    fn next_between(&mut self, min: i64, max: i64) -> Result<i64, Unavailable>;

    /// Whether the primitive exists on this platform. Only consulted when
    /// choosing a backend; draws from a missing primitive must return
    /// [`Unavailable`].
    fn is_available(&self) -> bool {
        true
    }
}

/// A cryptographically secure generator that fills byte buffers.
pub trait ByteSource {
    /// Whether the primitive exists on this platform. Only consulted when
    /// choosing a backend; reads from a missing primitive must return
    /// [`Unavailable`].
    fn is_available(&self) -> bool;

    /// Fills `dest` with secure random bytes.
    fn fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Unavailable>;
}
