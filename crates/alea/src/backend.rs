use core::{fmt, str::FromStr};

use crate::{Error, Result};

/// Identifies an entropy source.
///
/// The set is closed: every backend has a defined availability check and a
/// defined draw path. Order only matters inside preference lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Backend {
    /// A small, fast, non-cryptographic PRNG (`rand`-style).
    Small,
    /// The MT19937 Mersenne Twister (`mt_rand`-style).
    Mersenne,
    /// Cryptographically secure bytes from the operating system.
    Crypto,
}

impl Backend {
    /// Every backend, strongest first. This is also the default preference
    /// order.
    pub const ALL: [Self; 3] = [Self::Crypto, Self::Mersenne, Self::Small];

    /// Canonical lowercase name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Mersenne => "mersenne",
            Self::Crypto => "crypto",
        }
    }

    /// Parses a comma-separated list of backend names, e.g.
    /// `"crypto, mt_rand, rand"`.
    ///
    /// Empty entries are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedBackend`] for the first unknown name.
    pub fn parse_list(list: &str) -> Result<Vec<Self>> {
        list.split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::parse)
            .collect()
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Backend {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "small" | "rand" => Ok(Self::Small),
            "mersenne" | "mt" | "mt_rand" => Ok(Self::Mersenne),
            "crypto" | "os" | "openssl" => Ok(Self::Crypto),
            _ => Err(Error::UnsupportedBackend { name: s.to_owned() }),
        }
    }
}
