
use core::fmt;

#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::{
    Absent, Backend, ByteSource, Error, MersenneSource, OsSource, Result, SmallSource, Unavailable,
    WordSource,
    range::{draw_bytes, draw_bytes_unit},
};

/// The value produced by [`RandomSource::draw`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Draw {
    /// A uniform float in `[0, 1)`, produced when no range was given.
    Unit(f64),
    /// An integer within the requested range.
    Int(i64),
}

impl Draw {
    pub const fn as_unit(self) -> Option<f64> {
        match self {
            Self::Unit(f) => Some(f),
            Self::Int(_) => None,
        }
    }

    pub const fn as_int(self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(v),
            Self::Unit(_) => None,
        }
    }
}

impl fmt::Display for Draw {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unit(v) => write!(f, "{v}"),
            Self::Int(v) => write!(f, "{v}"),
        }
    }
}

/// Draws random values from one of several backends.
///
/// A `RandomSource` owns one primitive per [`Backend`] and remembers an
/// *active method*: the backend used when a draw does not name one.
///
/// Selection is two-phase. Construction walks a preference list and keeps the
/// first available backend, but never fails: if nothing is available the
/// active method stays empty and the first draw reports
/// [`Error::NoBackendAvailable`]. Likewise [`Self::set_method`] accepts any
/// backend; a backend whose primitive is missing fails when it draws.
///
/// Draws take `&mut self`. There is no internal locking; use one instance per
/// thread or wrap it in a mutex.
///
/// ## Draw paths
/// - [`Backend::Small`] and [`Backend::Mersenne`] draw machine words. Unit
///   floats are `word / word_max`; ranged draws use the generator's own
///   inclusive bounded sampler.
/// - [`Backend::Crypto`] draws the fewest secure bytes that cover the range and
///   reduces them modulo the range (`min + bytes mod range`). Results lie in
///   `[min, max)` and carry modulo bias.
///
/// # Example
/// ```
/// use alea::{Backend, RandomSource};
///
/// let mut source = RandomSource::with_preferences([Backend::Mersenne, Backend::Small]);
/// assert_eq!(source.method(), Some(Backend::Mersenne));
///
/// let die = source.range(1, 6).unwrap();
/// assert!((1..=6).contains(&die));
///
/// let f = source.unit().unwrap();
/// assert!((0.0..1.0).contains(&f));
/// ```
pub struct RandomSource<A = SmallSource, B = MersenneSource, C = OsSource>
where
    A: WordSource,
    B: WordSource,
    C: ByteSource,
{
    method: Option<Backend>,
    small: A,
    mersenne: B,
    crypto: C,
}

impl RandomSource {
    /// Creates a source over the native primitives using the default
    /// preference order: crypto, then Mersenne Twister, then the small PRNG.
    pub fn new() -> Self {
        Self::with_preferences(Backend::ALL)
    }

    /// Creates a source over the native primitives, selecting the first
    /// available backend in `preferences`.
    pub fn with_preferences(preferences: impl IntoIterator<Item = Backend>) -> Self {
        Self::from_sources(
            SmallSource::new(),
            MersenneSource::new(),
            OsSource,
            preferences,
        )
    }
}

impl Default for RandomSource {
    fn default() -> Self {
        Self::new()
    }
}

impl<A, B, C> RandomSource<A, B, C>
where
    A: WordSource,
    B: WordSource,
    C: ByteSource,
{
    /// Creates a source over the given primitives and negotiates the active
    /// method from `preferences`.
    ///
    /// Pass [`Absent`] for any primitive that should count as missing.
    ///
    /// # Example
    /// ```
    /// use alea::{Absent, Backend, Error, MersenneSource, RandomSource, SmallSource};
    ///
    /// let mut source = RandomSource::from_sources(
    ///     SmallSource::new(),
    ///     MersenneSource::new(),
    ///     Absent,
    ///     [Backend::Crypto, Backend::Small],
    /// );
    /// assert_eq!(source.method(), Some(Backend::Small));
    ///
    /// source.set_method(Backend::Crypto);
    /// assert!(matches!(source.unit(), Err(Error::NoBackendAvailable { .. })));
    /// ```
    pub fn from_sources(
        small: A,
        mersenne: B,
        crypto: C,
        preferences: impl IntoIterator<Item = Backend>,
    ) -> Self {
        let mut source = Self {
            method: None,
            small,
            mersenne,
            crypto,
        };
        source.method = source.preferred(preferences);

        #[cfg(feature = "tracing")]
        {
            match source.method {
                Some(backend) => tracing::debug!(%backend, "selected random backend"),
                None => tracing::debug!("no random backend available"),
            }
        }

        source
    }

    /// Returns the first backend in `preferences` that is available, if any.
    pub fn preferred(&self, preferences: impl IntoIterator<Item = Backend>) -> Option<Backend> {
        preferences
            .into_iter()
            .find(|&backend| self.is_available(backend))
    }

    /// Whether `backend`'s primitive exists on this platform.
    pub fn is_available(&self, backend: Backend) -> bool {
        match backend {
            Backend::Small => self.small.is_available(),
            Backend::Mersenne => self.mersenne.is_available(),
            Backend::Crypto => self.crypto.is_available(),
        }
    }

    /// The active method, or `None` if negotiation found nothing.
    pub const fn method(&self) -> Option<Backend> {
        self.method
    }

    /// Makes `backend` the active method without checking availability.
    pub fn set_method(&mut self, backend: Backend) {
        #[cfg(feature = "tracing")]
        tracing::debug!(%backend, "random backend overridden");
        self.method = Some(backend);
    }

    /// Draws a value.
    ///
    /// - Neither `min` nor `max`: a float in `[0, 1)`.
    /// - Both: an integer between `min` and `max`. Weak backends include
    ///   `max`; the crypto backend never returns it.
    ///
    /// `method` overrides the active method for this call only.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidRange`] if only one bound is given, or `max <= min`.
    /// - [`Error::NoBackendAvailable`] if no method was negotiated or the
    ///   chosen backend's primitive fails to produce a value.
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self), err))]
    pub fn draw(
        &mut self,
        min: Option<i64>,
        max: Option<i64>,
        method: Option<Backend>,
    ) -> Result<Draw> {
        let bounds = match (min, max) {
            (None, None) => None,
            (Some(_), None) => return Err(Error::invalid_range("min without max")),
            (None, Some(_)) => return Err(Error::invalid_range("max without min")),
            (Some(min), Some(max)) => Some(check_bounds(min, max)?),
        };
        let backend = self.resolve(method)?;

        match bounds {
            None => self.unit_on(backend).map(Draw::Unit),
            Some((min, max)) => self.int_on(backend, min, max).map(Draw::Int),
        }
    }

    /// Draws a float in `[0, 1)` with the active method.
    ///
    /// # Errors
    ///
    /// See [`Self::draw`].
    pub fn unit(&mut self) -> Result<f64> {
        let backend = self.resolve(None)?;
        self.unit_on(backend)
    }

    /// Draws a float in `[0, 1)` with `backend`.
    ///
    /// # Errors
    ///
    /// See [`Self::draw`].
    pub fn unit_with(&mut self, backend: Backend) -> Result<f64> {
        let backend = self.resolve(Some(backend))?;
        self.unit_on(backend)
    }

    /// Draws an integer between `min` and `max` with the active method.
    ///
    /// # Errors
    ///
    /// See [`Self::draw`].
    pub fn range(&mut self, min: i64, max: i64) -> Result<i64> {
        let (min, max) = check_bounds(min, max)?;
        let backend = self.resolve(None)?;
        self.int_on(backend, min, max)
    }

    /// Draws an integer between `min` and `max` with `backend`.
    ///
    /// # Errors
    ///
    /// See [`Self::draw`].
    pub fn range_with(&mut self, min: i64, max: i64, backend: Backend) -> Result<i64> {
        let (min, max) = check_bounds(min, max)?;
        let backend = self.resolve(Some(backend))?;
        self.int_on(backend, min, max)
    }

    /// Picks the backend for a draw. A missing primitive is reported by the
    /// draw itself failing, so availability is not re-checked here.
    fn resolve(&self, method: Option<Backend>) -> Result<Backend> {
        method.or(self.method).ok_or(Error::unavailable(None))
    }

    fn unit_on(&mut self, backend: Backend) -> Result<f64> {
        let drawn = match backend {
            Backend::Small => unit_from_words(&mut self.small),
            Backend::Mersenne => unit_from_words(&mut self.mersenne),
            Backend::Crypto => draw_bytes_unit(&mut self.crypto),
        };
        drawn.map_err(|Unavailable| Error::unavailable(Some(backend)))
    }

    fn int_on(&mut self, backend: Backend, min: i64, max: i64) -> Result<i64> {
        let drawn = match backend {
            Backend::Small => self.small.next_between(min, max),
            Backend::Mersenne => self.mersenne.next_between(min, max),
            Backend::Crypto => draw_bytes(&mut self.crypto, min, max),
        };
        drawn.map_err(|Unavailable| Error::unavailable(Some(backend)))
    }
}

impl RandomSource<Absent, Absent, Absent> {
    /// A source with no primitives at all. Every draw fails.
    pub fn empty() -> Self {
        Self::from_sources(Absent, Absent, Absent, [])
    }
}

impl<A, B, C> fmt::Debug for RandomSource<A, B, C>
where
    A: WordSource,
    B: WordSource,
    C: ByteSource,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RandomSource")
            .field("method", &self.method)
            .finish_non_exhaustive()
    }
}

fn check_bounds(min: i64, max: i64) -> Result<(i64, i64)> {
    if max <= min {
        return Err(Error::invalid_range("max not greater than min"));
    }
    Ok((min, max))
}

fn unit_from_words<W: WordSource>(words: &mut W) -> core::result::Result<f64, Unavailable> {
    let word = words.next_word()?;
    Ok(f64::from(word) / f64::from(words.word_max()))
}
