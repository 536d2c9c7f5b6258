//! Error correction code implementations.
//!
//! Codes here work on whole integer words rather than byte streams: a data
//! word goes in as a [`BigUint`] and comes out as a wider codeword that can
//! survive one flipped bit.
//!
//! - [`bits`] holds the 1-based bit-position primitives.
//! - [`hamming`] builds the single-error-correcting Hamming code on top.
//!
//! # Examples
//!
//! ```rust
//! use hamming_ecc::cs::ecc::HammingCode;
//! use num_bigint::BigUint;
//!
//! let code = HammingCode::with_data_bits(32).unwrap();
//! let data = BigUint::from(0xCAFE_F00Du32);
//! let encoded = code.encode(&data).unwrap();
//! assert_eq!(code.decode(&encoded).unwrap(), data);
//! ```

use crate::error::Error;
use num_bigint::BigUint;

/// Result type for error correction operations
pub type Result<T> = std::result::Result<T, Error>;

/// Trait for error correction code implementations
pub trait ErrorCorrection {
    /// Encode a data word into a codeword
    fn encode(&self, data: &BigUint) -> Result<BigUint>;

    /// Decode a codeword and correct errors if possible
    fn decode(&self, codeword: &BigUint) -> Result<BigUint>;
}

/// Bit-position primitives
pub mod bits;

/// Hamming error correction codes
pub mod hamming;
pub use hamming::{
    decode, decode_unchecked, encode, encode_unchecked, required_parity_bits, Decoded,
    HammingCode,
};
