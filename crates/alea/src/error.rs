//! Error types for drawing random values.
//!
//! Every failure is reported to the caller at the point of the offending call.
//! Nothing is retried internally and nothing aborts the process.
//!
//! ## Error Cases
//! - `InvalidRange`: `min`/`max` were malformed (only one given, or
//!   `max <= min`).
//! - `NoBackendAvailable`: negotiation found no usable backend, or the backend
//!   in use has no working primitive on this platform.
//! - `UnsupportedBackend`: a backend name did not match any known backend.

use crate::Backend;

pub type Result<T> = core::result::Result<T, Error>;

/// All errors that `alea` can produce.
#[derive(Clone, thiserror::Error, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// The requested range is malformed.
    #[error("Invalid range: {reason}")]
    InvalidRange { reason: &'static str },

    /// No entropy primitive could serve the draw.
    ///
    /// `backend` is `None` when negotiation never selected a backend.
    #[error("No random backend available{}", describe(.backend))]
    NoBackendAvailable { backend: Option<Backend> },

    /// The backend name is not one `alea` knows about.
    #[error("Unsupported backend: {name:?}")]
    UnsupportedBackend { name: String },
}

fn describe(backend: &Option<Backend>) -> String {
    match backend {
        Some(backend) => format!(" ({backend} is unavailable)"),
        None => String::new(),
    }
}

/// Returned by a source whose primitive cannot produce entropy.
///
/// [`RandomSource`] lifts this into [`Error::NoBackendAvailable`] for the
/// backend the draw was using.
///
/// [`RandomSource`]: crate::RandomSource
#[derive(Clone, Copy, thiserror::Error, Debug, PartialEq, Eq)]
#[error("entropy primitive unavailable")]
pub struct Unavailable;

impl Error {
    pub(crate) const fn invalid_range(reason: &'static str) -> Self {
        Self::InvalidRange { reason }
    }

    pub(crate) const fn unavailable(backend: Option<Backend>) -> Self {
        Self::NoBackendAvailable { backend }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_backend() {
        assert_eq!(
            Error::unavailable(Some(Backend::Crypto)).to_string(),
            "No random backend available (crypto is unavailable)"
        );
        assert_eq!(
            Error::unavailable(None).to_string(),
            "No random backend available"
        );
        assert_eq!(
            Error::invalid_range("min without max").to_string(),
            "Invalid range: min without max"
        );
    }
}
