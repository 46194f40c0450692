mod absent;
mod interface;
mod mersenne;
mod os;
mod small;

pub use absent::*;
pub use interface::*;
pub use mersenne::*;
pub use os::*;
pub use small::*;

/// Largest value a weak generator reports, matching the classic
/// `getrandmax()` / `mt_getrandmax()` value of `2^31 - 1`.
pub const WORD_MAX: u32 = i32::MAX as u32;
