//! Single-error-correcting Hamming codes over arbitrary-width integers.

pub mod cs;
pub mod error;

pub use cs::ecc;
pub use error::{Error, Result};
