//! Splits a byte stream into maximal runs of decimal digits.
//!
//! Leading zeroes of a run are counted rather than buffered, so the buffer
//! only ever holds significant digits. A run reaching [`MAX_DIGITS`] digits
//! in total is cut there: the lexer reports it ready and the rest of the run
//! starts a new number. Encoding therefore never sees an over-long number.

use crate::error::Result;
use crate::number::{EncodedNumber, MAX_DIGITS};

/// Outcome of feeding one byte to a [`DigitLexer`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Feed {
    /// The byte was consumed; no number is complete yet.
    Accepted,
    /// A number is buffered and must be taken with [`DigitLexer::flush`]
    /// before the next byte is fed.
    NumberReady,
}

/// Incremental digit-run extractor.
///
/// # Example
///
/// ```rust
/// use topdigits::{DigitLexer, Feed};
///
/// let mut lexer = DigitLexer::new().unwrap();
/// assert_eq!(lexer.feed(Some(b'0')), Feed::Accepted);
/// assert_eq!(lexer.feed(Some(b'4')), Feed::Accepted);
/// assert_eq!(lexer.feed(Some(b',')), Feed::NumberReady);
///
/// let n = lexer.flush().unwrap();
/// assert_eq!(n.to_string(), "04");
/// ```
#[derive(Debug)]
pub struct DigitLexer {
    digits: Vec<u8>,
    zeroes: usize,
}

impl DigitLexer {
    /// Create a lexer with room for one maximal number.
    ///
    /// # Errors
    ///
    /// `OutOfMemory` if the digit buffer cannot be reserved.
    pub fn new() -> Result<Self> {
        let mut digits = Vec::new();
        digits.try_reserve_exact(MAX_DIGITS)?;

        Ok(Self { digits, zeroes: 0 })
    }

    /// Feed one byte, or `None` at end of stream.
    pub fn feed(&mut self, byte: Option<u8>) -> Feed {
        match byte {
            Some(b) if b.is_ascii_digit() => self.feed_digit(b),
            _ if self.pending() == 0 => Feed::Accepted,
            _ => Feed::NumberReady,
        }
    }

    fn feed_digit(&mut self, digit: u8) -> Feed {
        if digit == b'0' && self.digits.is_empty() {
            self.zeroes += 1;
        } else {
            self.digits.push(digit);
        }

        if self.pending() >= MAX_DIGITS {
            Feed::NumberReady
        } else {
            Feed::Accepted
        }
    }

    /// Digits buffered so far, leading zeroes included.
    #[inline]
    pub fn pending(&self) -> usize {
        self.digits.len() + self.zeroes
    }

    /// Encode the buffered digits and reset the buffer.
    ///
    /// The buffer is kept on error so the caller can inspect or discard it.
    pub fn flush(&mut self) -> Result<EncodedNumber> {
        let number = EncodedNumber::encode(&self.digits, self.zeroes)?;

        self.digits.clear();
        self.zeroes = 0;

        Ok(number)
    }
}
