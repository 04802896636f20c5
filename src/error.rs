//! Error types for number encoding and top-K collection.

use crate::number::MAX_DIGITS;

/// Errors raised while encoding numbers, building sets, or scanning input.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A fallible reservation for number, set, or lexer storage failed.
    #[error("not enough memory")]
    OutOfMemory,

    /// External storage could not be addressed by the encoded layout.
    ///
    /// Boxed storage carries a full-width pointer, so this is never produced.
    /// It stays in the taxonomy so exit statuses keep their meaning.
    #[error("digit storage has an address the encoding cannot represent")]
    InvalidAddress,

    /// The number has more than [`MAX_DIGITS`] digits, leading zeroes included.
    #[error("number has {digits} digits, the limit is {}", MAX_DIGITS)]
    TooLong {
        /// Significant digits plus leading zeroes.
        digits: usize,
    },

    /// A byte that is not an ASCII decimal digit, or a significant digit
    /// sequence starting with `'0'`.
    #[error("invalid digit byte 0x{byte:02x}")]
    InvalidDigit {
        /// The offending byte.
        byte: u8,
    },

    /// A set was requested with zero capacity.
    #[error("set capacity must be at least 1")]
    InvalidCapacity,

    /// Reading the input or writing the output failed.
    #[error("{0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Process exit status reported by the command line driver.
    pub fn exit_code(&self) -> u8 {
        match self {
            Error::Io(_) => 1,
            Error::OutOfMemory => 2,
            Error::InvalidAddress => 3,
            Error::TooLong { .. } => 4,
            Error::InvalidDigit { .. } => 5,
            Error::InvalidCapacity => 6,
        }
    }
}

impl From<std::collections::TryReserveError> for Error {
    fn from(_: std::collections::TryReserveError) -> Self {
        Error::OutOfMemory
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct() {
        let errors = [
            Error::Io(std::io::Error::other("closed")),
            Error::OutOfMemory,
            Error::InvalidAddress,
            Error::TooLong { digits: 1001 },
            Error::InvalidDigit { byte: b'x' },
            Error::InvalidCapacity,
        ];

        let mut codes: Vec<u8> = errors.iter().map(Error::exit_code).collect();
        assert!(codes.iter().all(|&c| c != 0));
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), errors.len());
    }

    #[test]
    fn too_long_message_names_limit() {
        let msg = Error::TooLong { digits: 1001 }.to_string();
        assert_eq!(msg, "number has 1001 digits, the limit is 1000");
    }
}
