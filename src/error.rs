use thiserror::Error;

/// Errors produced by the Hamming encoder and decoder.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The data word needs more parity bits than the code provides.
    #[error(
        "{data_bits} data bits need at least {required} parity bits, but only {parity_bits} were given"
    )]
    InsufficientParityBits {
        parity_bits: u32,
        data_bits: u64,
        required: u32,
    },

    #[error("Data word is {bits} bits wide, the code accepts at most {max}")]
    DataTooWide { bits: u64, max: u64 },

    /// Bit positions are 1-based, so 0 never names a bit.
    #[error("Invalid bit position {0}, positions start at 1")]
    InvalidPosition(u64),

    #[error("Codeword is {bits} bits wide, the code produces at most {max}")]
    CodewordTooWide { bits: u64, max: u64 },

    #[error("Syndrome {syndrome} lies outside the {width}-bit codeword, error is uncorrectable")]
    UncorrectableError { syndrome: u64, width: u64 },
}

impl Error {
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        Error::InvalidInput(msg.into())
    }
}

/// Result type for Hamming operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = Error::InsufficientParityBits {
            parity_bits: 2,
            data_bits: 7,
            required: 4,
        };
        assert_eq!(
            err.to_string(),
            "7 data bits need at least 4 parity bits, but only 2 were given"
        );

        let err = Error::UncorrectableError {
            syndrome: 14,
            width: 11,
        };
        assert_eq!(
            err.to_string(),
            "Syndrome 14 lies outside the 11-bit codeword, error is uncorrectable"
        );

        assert_eq!(
            Error::invalid_input("bad").to_string(),
            "Invalid input: bad"
        );
    }
}
