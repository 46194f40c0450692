#![doc = include_str!("../README.md")]

mod backend;
mod error;
mod noise;
mod random;
mod range;
mod source;

pub use crate::backend::*;
pub use crate::error::*;
pub use crate::noise::*;
pub use crate::random::*;
pub use crate::source::*;
