//! Bit-position primitives shared by the Hamming encoder and decoder.
//!
//! All positions are 1-based and count from the least significant bit, so
//! position 1 is the lowest bit of a word. Words are arbitrary-precision
//! [`BigUint`] values; positions and syndromes are `u64`, matching what
//! [`BigUint::bits`] reports.

use crate::cs::ecc::Result;
use crate::error::Error;
use num_bigint::BigUint;
use num_traits::{One, Zero};
use std::ops::BitXor;

/// Largest supported number of parity bits.
///
/// With 63 parity bits the code already addresses `2^63 - 1` positions, and
/// every width the code deals with still fits in a `u64`.
pub const MAX_PARITY_BITS: u32 = 63;

/// Rejects parity-bit counts the code cannot address.
pub(crate) fn check_parity_bits(parity_bits: u32) -> Result<u32> {
    if parity_bits > MAX_PARITY_BITS {
        return Err(Error::invalid_input(format!(
            "At most {} parity bits are supported, got {}",
            MAX_PARITY_BITS, parity_bits
        )));
    }
    Ok(parity_bits)
}

/// Returns the parity-bit slots for `parity_bits` parity bits: the powers of
/// two `1, 2, 4, ..., 2^(parity_bits - 1)` in ascending order.
///
/// # Example
/// ```
/// use hamming_ecc::cs::ecc::bits::parity_positions;
///
/// assert_eq!(parity_positions(4).unwrap(), vec![1, 2, 4, 8]);
/// assert!(parity_positions(0).unwrap().is_empty());
/// ```
pub fn parity_positions(parity_bits: u32) -> Result<Vec<u64>> {
    let parity_bits = check_parity_bits(parity_bits)?;
    Ok((0..parity_bits).map(|i| 1u64 << i).collect())
}

/// XORs a sequence of values together. An empty sequence yields zero.
///
/// Works for positions (`u64`) as well as whole words (`BigUint`).
pub fn xor_reduce<T, I>(values: I) -> T
where
    I: IntoIterator<Item = T>,
    T: Zero + BitXor<Output = T>,
{
    values.into_iter().fold(T::zero(), |acc, value| acc ^ value)
}

fn check_position(pos: u64) -> Result<u64> {
    if pos == 0 {
        return Err(Error::InvalidPosition(pos));
    }
    Ok(pos)
}

/// Inserts a zero bit at 1-based position `pos`.
///
/// The low `pos - 1` bits are kept in place and every bit at or above `pos`
/// moves up by one. Inserting past the current bit length is allowed and
/// simply leaves the value unchanged.
pub fn insert_zero(num: &BigUint, pos: u64) -> Result<BigUint> {
    let shift = check_position(pos)? - 1;
    if shift >= num.bits() {
        return Ok(num.clone());
    }
    let low_mask = (BigUint::one() << shift) - 1u32;
    let low = num & &low_mask;
    let high = (num >> shift) << pos;
    Ok(high | low)
}

/// Removes the bit at 1-based position `pos`, shifting higher bits down by
/// one. The removed bit is discarded, and removing past the current bit
/// length leaves the value unchanged.
pub fn remove_bit(num: &BigUint, pos: u64) -> Result<BigUint> {
    let shift = check_position(pos)? - 1;
    if pos > num.bits() {
        return Ok(num.clone());
    }
    let low_mask = (BigUint::one() << shift) - 1u32;
    let low = num & &low_mask;
    let high = (num >> pos) << shift;
    Ok(high | low)
}

/// Returns the 1-based positions of every set bit, in ascending order.
///
/// # Example
/// ```
/// use hamming_ecc::cs::ecc::bits::set_bit_positions;
/// use num_bigint::BigUint;
///
/// assert_eq!(set_bit_positions(&BigUint::from(0b1011u32)), vec![1, 2, 4]);
/// ```
pub fn set_bit_positions(num: &BigUint) -> Vec<u64> {
    let mut positions = Vec::with_capacity(num.count_ones() as usize);
    for (index, digit) in num.iter_u64_digits().enumerate() {
        let base = index as u64 * 64;
        let mut word = digit;
        while word != 0 {
            positions.push(base + u64::from(word.trailing_zeros()) + 1);
            // clear lowest set bit
            word &= word - 1;
        }
    }
    positions
}

/// XOR of the set-bit positions of `num`. Zero means no error was detected.
pub fn syndrome(num: &BigUint) -> u64 {
    xor_reduce(set_bit_positions(num))
}

/// Inverts the bit at 1-based position `pos`.
pub fn flip(pos: u64, num: &BigUint) -> Result<BigUint> {
    let bit = check_position(pos)? - 1;
    let mut flipped = num.clone();
    flipped.set_bit(bit, !num.bit(bit));
    Ok(flipped)
}
