//! Hamming code over arbitrary-width unsigned integers.
//!
//! A data word is spread over a wider codeword: bit positions that are powers of two (1-based,
//! counting from the least significant bit) hold parity, every other position holds data. The parity
//! values are chosen so that the XOR of the positions of all set bits is zero. After a single bit
//! flips, that XOR (the syndrome) is exactly the position of the flipped bit.
//!
//! With `p` parity bits a codeword has room for `2^p - 1` positions, so the data word may be at most
//! `2^p - p - 1` bits wide. [`HammingCode`] carries that width explicitly and rejects words that do
//! not fit; [`encode_unchecked`] and [`decode_unchecked`] skip every check and keep the classic
//! behavior of producing a malformed codeword when `p` is too small.
//!
//! Two or more flipped bits are not detected: they either produce a syndrome of zero or point at
//! the wrong bit, and the decoder silently returns wrong data. That is inherent to a
//! single-error-correcting code.
//!
//! # Examples
//!
//! ```
//! use hamming_ecc::cs::ecc::bits::flip;
//! use hamming_ecc::cs::ecc::hamming::{decode, encode};
//! use num_bigint::BigUint;
//!
//! let original = BigUint::from(0b1001101u32);
//! let encoded = encode(&original, 4).unwrap();
//! assert_eq!(encoded, BigUint::from(0b10011100101u32));
//!
//! let corrupted = flip(8, &encoded).unwrap();
//! assert_eq!(decode(&corrupted, 4).unwrap(), original);
//! ```

use crate::cs::ecc::bits::{
    check_parity_bits, flip, insert_zero, parity_positions, remove_bit, syndrome,
    MAX_PARITY_BITS,
};
use crate::cs::ecc::{ErrorCorrection, Result};
use crate::error::Error;
use log::{debug, trace, warn};
use num_bigint::BigUint;

/// Number of data bits `parity_bits` parity bits can protect: `2^p - p - 1`.
fn data_capacity(parity_bits: u32) -> u64 {
    (1u64 << parity_bits) - u64::from(parity_bits) - 1
}

/// Returns the smallest number of parity bits `p` with `2^p - 1 >= data_bits + p`.
pub fn required_parity_bits(data_bits: u64) -> Result<u32> {
    (0..=MAX_PARITY_BITS)
        .find(|&p| data_capacity(p) >= data_bits)
        .ok_or_else(|| {
            Error::invalid_input(format!(
                "{} data bits exceed what {} parity bits can protect",
                data_bits, MAX_PARITY_BITS
            ))
        })
}

/// Represents a Hamming code configuration.
///
/// The code has an explicit width: data words may be at most `data_bits` wide and codewords at
/// most `data_bits + parity_bits` wide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HammingCode {
    /// Number of parity bits per codeword
    parity_bits: u32,
    /// Maximum width of a data word
    data_bits: u64,
}

/// Result of decoding a codeword.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded {
    /// The recovered data word
    pub data: BigUint,
    /// 1-based position of the bit that was corrected, if any
    pub corrected: Option<u64>,
}

impl HammingCode {
    /// Creates a code using the full capacity of `parity_bits` parity bits.
    ///
    /// # Arguments
    ///
    /// * `parity_bits` - Number of parity bits, at most [`MAX_PARITY_BITS`]
    ///
    /// # Returns
    ///
    /// A code accepting data words of up to `2^p - p - 1` bits, or an error if
    /// `parity_bits` is too large
    pub fn new(parity_bits: u32) -> Result<Self> {
        let parity_bits = check_parity_bits(parity_bits)?;
        Ok(HammingCode {
            parity_bits,
            data_bits: data_capacity(parity_bits),
        })
    }

    /// Creates the smallest code that protects `data_bits` data bits.
    pub fn with_data_bits(data_bits: u64) -> Result<Self> {
        if data_bits == 0 {
            return Err(Error::invalid_input("Data bits must be positive"));
        }

        Ok(HammingCode {
            parity_bits: required_parity_bits(data_bits)?,
            data_bits,
        })
    }

    /// Creates a code with an explicit data width and parity-bit count.
    pub fn with_layout(data_bits: u64, parity_bits: u32) -> Result<Self> {
        let parity_bits = check_parity_bits(parity_bits)?;
        if data_bits > data_capacity(parity_bits) {
            return Err(Error::InsufficientParityBits {
                parity_bits,
                data_bits,
                required: required_parity_bits(data_bits)?,
            });
        }

        Ok(HammingCode {
            parity_bits,
            data_bits,
        })
    }

    /// Creates a standard (7,4) Hamming code
    pub fn standard_7_4() -> Self {
        HammingCode {
            parity_bits: 3,
            data_bits: 4,
        }
    }

    pub fn parity_bits(&self) -> u32 {
        self.parity_bits
    }

    pub fn data_bits(&self) -> u64 {
        self.data_bits
    }

    /// Gets the codeword width (data bits + parity bits)
    pub fn total_bits(&self) -> u64 {
        self.data_bits + u64::from(self.parity_bits)
    }

    /// 1-based positions of the parity bits inside a codeword.
    pub fn parity_positions(&self) -> Vec<u64> {
        // parity_bits is validated on construction
        parity_positions(self.parity_bits).unwrap_or_default()
    }

    /// Encodes a data word.
    ///
    /// Fails with [`Error::InsufficientParityBits`] if the word is wider than the parity bits can
    /// protect, or [`Error::DataTooWide`] if it only exceeds the configured data width.
    pub fn encode(&self, data: &BigUint) -> Result<BigUint> {
        let bits = data.bits();
        if bits > self.data_bits {
            if bits > data_capacity(self.parity_bits) {
                return Err(Error::InsufficientParityBits {
                    parity_bits: self.parity_bits,
                    data_bits: bits,
                    required: required_parity_bits(bits)?,
                });
            }
            return Err(Error::DataTooWide {
                bits,
                max: self.data_bits,
            });
        }

        encode_unchecked(data, self.parity_bits)
    }

    /// Validates a received word and returns its syndrome without correcting anything.
    pub fn check(&self, codeword: &BigUint) -> Result<u64> {
        let width = self.total_bits();
        let bits = codeword.bits();
        if bits > width {
            return Err(Error::CodewordTooWide { bits, max: width });
        }

        let syndrome = syndrome(codeword);
        if syndrome > width {
            warn!(
                "syndrome {} points outside the {}-bit codeword",
                syndrome, width
            );
            return Err(Error::UncorrectableError { syndrome, width });
        }

        Ok(syndrome)
    }

    /// Decodes a codeword, correcting a single-bit error, and reports which bit was corrected.
    pub fn decode_report(&self, codeword: &BigUint) -> Result<Decoded> {
        let syndrome = self.check(codeword)?;

        let (corrected_word, corrected) = if syndrome != 0 && self.parity_bits > 0 {
            debug!("correcting single-bit error at position {}", syndrome);
            (flip(syndrome, codeword)?, Some(syndrome))
        } else {
            (codeword.clone(), None)
        };

        Ok(Decoded {
            data: strip_parity(&corrected_word, self.parity_bits)?,
            corrected,
        })
    }

    /// Decodes a codeword, correcting a single-bit error.
    ///
    /// Two or more flipped bits are not detected and yield wrong data.
    pub fn decode(&self, codeword: &BigUint) -> Result<BigUint> {
        Ok(self.decode_report(codeword)?.data)
    }
}

impl ErrorCorrection for HammingCode {
    fn encode(&self, data: &BigUint) -> Result<BigUint> {
        HammingCode::encode(self, data)
    }

    fn decode(&self, codeword: &BigUint) -> Result<BigUint> {
        HammingCode::decode(self, codeword)
    }
}

/// Builds the codeword skeleton: a zero bit is inserted at every parity slot, in ascending slot
/// order, each insertion applied to the word produced by the previous one.
pub fn setup(data: &BigUint, parity_bits: u32) -> Result<BigUint> {
    parity_positions(parity_bits)?
        .into_iter()
        .try_fold(data.clone(), |word, slot| insert_zero(&word, slot))
}

/// Writes parity values into a skeleton: slot `i` is set when bit `i` of `bits` is set.
pub fn set_parity(bits: u64, skeleton: &BigUint, parity_bits: u32) -> Result<BigUint> {
    let mut block = skeleton.clone();
    for (i, slot) in parity_positions(parity_bits)?.into_iter().enumerate() {
        if (bits >> i) & 1 == 1 {
            block.set_bit(slot - 1, true);
        }
    }
    Ok(block)
}

/// Removes the parity slots, highest first so pending slots keep their positions.
fn strip_parity(codeword: &BigUint, parity_bits: u32) -> Result<BigUint> {
    parity_positions(parity_bits)?
        .into_iter()
        .rev()
        .try_fold(codeword.clone(), |word, slot| remove_bit(&word, slot))
}

/// Encodes `data` with `parity_bits` parity bits, rejecting data the code cannot protect.
pub fn encode(data: &BigUint, parity_bits: u32) -> Result<BigUint> {
    HammingCode::new(parity_bits)?.encode(data)
}

/// Decodes `codeword` with `parity_bits` parity bits, correcting a single-bit error.
pub fn decode(codeword: &BigUint, parity_bits: u32) -> Result<BigUint> {
    HammingCode::new(parity_bits)?.decode(codeword)
}

/// Encodes without any width check.
///
/// If `data` is wider than `parity_bits` can protect, the result is a malformed codeword that will
/// not decode reliably. Only fails if `parity_bits` exceeds [`MAX_PARITY_BITS`].
pub fn encode_unchecked(data: &BigUint, parity_bits: u32) -> Result<BigUint> {
    let skeleton = setup(data, parity_bits)?;
    let bits = syndrome(&skeleton);
    trace!("skeleton {:b}, parity {:b}", skeleton, bits);
    set_parity(bits, &skeleton, parity_bits)
}

/// Decodes without any width check.
///
/// A nonzero syndrome is always applied, even when it lies beyond the word, in which case the
/// word grows by the flipped bit. With zero parity bits no correction is attempted.
pub fn decode_unchecked(codeword: &BigUint, parity_bits: u32) -> Result<BigUint> {
    let syndrome = syndrome(codeword);
    let corrected = if syndrome != 0 && parity_bits > 0 {
        debug!("correcting single-bit error at position {}", syndrome);
        flip(syndrome, codeword)?
    } else {
        codeword.clone()
    };
    strip_parity(&corrected, parity_bits)
}
