use hamming_ecc::cs::ecc::bits::flip;
use hamming_ecc::cs::ecc::{decode, encode};
use hamming_ecc::Result;
use num_bigint::BigUint;

fn main() -> Result<()> {
    let parity_bits = 4;
    let original = BigUint::from(0b1001101u32);
    println!("original: {:16b}", original);

    // encode original data with hamming
    let encoded = encode(&original, parity_bits)?;
    println!("encoded : {:16b}", encoded);

    // flip the bit at position 8 to simulate a transmission error
    let corrupted = flip(8, &encoded)?;
    println!("error   : {:16b}", corrupted);

    let decoded = decode(&corrupted, parity_bits)?;
    println!("decoded : {:16b}", decoded);

    Ok(())
}
