//! Packed decimal numbers of up to [`MAX_DIGITS`] digits.
//!
//! # Layout
//!
//! Significant digits are packed two per byte, most significant nibble
//! first. A number of odd length keeps its leading digit alone in the low
//! nibble of byte 0 so the remaining digits pair up evenly:
//!
//! - `123` ~> `0x01 0x23`
//! - `4567` ~> `0x45 0x67`
//!
//! Since the leading significant digit is never zero, an odd-length payload
//! always starts below `0x10` and an even-length one at `0x10` or above. Two
//! numbers therefore compare by digit count first and, for equal counts, by
//! their payloads as plain byte strings.
//!
//! Counts live in a 32-bit header:
//!
//! ```text
//! 0        10        20          32
//! +--------+---------+-----------+
//! | digits | zeroes  |  unused   |
//! +--------+---------+-----------+
//! ```
//!
//! Payloads of up to [`INLINE_MAX_DIGITS`] digits are stored inline; longer
//! ones get an exactly sized boxed slice. Dropping an [`EncodedNumber`]
//! releases that slice, and ownership guarantees it happens once.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::error::{Error, Result};

/// Maximum number of digits in a number, leading zeroes included.
pub const MAX_DIGITS: usize = 1000;

/// Longest significant digit count kept inline.
pub const INLINE_MAX_DIGITS: usize = 12;

const INLINE_BYTES: usize = INLINE_MAX_DIGITS / 2;

const COUNT_BITS: u32 = 10;
const COUNT_MASK: u32 = (1 << COUNT_BITS) - 1;
const DIGITS_POS: u32 = 0;
const ZEROES_POS: u32 = DIGITS_POS + COUNT_BITS;

// Both counts are bounded by MAX_DIGITS, which must fit the header fields.
const _: () = assert!(MAX_DIGITS as u32 <= COUNT_MASK);

/// Where the packed digits of a number live.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StorageMode {
    /// Digits are embedded in the value itself.
    Inline,
    /// Digits are in a separately owned allocation.
    External,
}

#[derive(Clone)]
enum Payload {
    Inline([u8; INLINE_BYTES]),
    External(Box<[u8]>),
}

/// An immutable non-negative integer of at most [`MAX_DIGITS`] digits.
///
/// Equality and ordering follow numeric magnitude. Leading zeroes are kept
/// only so the number renders back exactly as it was read: `007` and `7`
/// are equal.
///
/// # Example
///
/// ```rust
/// use topdigits::EncodedNumber;
///
/// let a: EncodedNumber = "007".parse().unwrap();
/// let b: EncodedNumber = "12".parse().unwrap();
///
/// assert!(a < b);
/// assert_eq!(a.to_string(), "007");
/// ```
#[derive(Clone)]
pub struct EncodedNumber {
    header: u32,
    payload: Payload,
}

impl EncodedNumber {
    /// Encode `digits` preceded by `leading_zeroes` zero characters.
    ///
    /// `digits` holds the significant digits only: ASCII `'0'..='9'`, not
    /// starting with `'0'`. An empty slice encodes zero.
    ///
    /// # Errors
    ///
    /// - `TooLong` if `digits.len() + leading_zeroes` exceeds [`MAX_DIGITS`].
    /// - `InvalidDigit` on a non-digit byte or a leading `'0'` in `digits`.
    /// - `OutOfMemory` if external storage cannot be reserved.
    pub fn encode(digits: &[u8], leading_zeroes: usize) -> Result<Self> {
        let total = digits.len().saturating_add(leading_zeroes);
        if total > MAX_DIGITS {
            return Err(Error::TooLong { digits: total });
        }

        if let Some(&byte) = digits.iter().find(|b| !b.is_ascii_digit()) {
            return Err(Error::InvalidDigit { byte });
        }
        if digits.first() == Some(&b'0') {
            return Err(Error::InvalidDigit { byte: b'0' });
        }

        let header = ((digits.len() as u32) << DIGITS_POS) | ((leading_zeroes as u32) << ZEROES_POS);
        let byte_len = packed_len(digits.len());

        let payload = if digits.len() <= INLINE_MAX_DIGITS {
            let mut bytes = [0u8; INLINE_BYTES];
            pack(digits, &mut bytes[..byte_len]);
            Payload::Inline(bytes)
        } else {
            let mut bytes = Vec::new();
            bytes.try_reserve_exact(byte_len)?;
            bytes.resize(byte_len, 0);
            pack(digits, &mut bytes);
            Payload::External(bytes.into_boxed_slice())
        };

        Ok(Self { header, payload })
    }

    /// Encode a textual digit string, splitting off its leading zeroes.
    pub fn parse(text: &[u8]) -> Result<Self> {
        let zeroes = text.iter().take_while(|&&b| b == b'0').count();
        Self::encode(&text[zeroes..], zeroes)
    }

    /// Number of digits excluding leading zeroes; zero for the value zero.
    #[inline]
    pub fn significant_digits(&self) -> usize {
        ((self.header >> DIGITS_POS) & COUNT_MASK) as usize
    }

    /// Number of leading zero characters in the original text.
    #[inline]
    pub fn leading_zeroes(&self) -> usize {
        ((self.header >> ZEROES_POS) & COUNT_MASK) as usize
    }

    /// Length of the rendered text.
    #[inline]
    pub fn total_digits(&self) -> usize {
        self.significant_digits() + self.leading_zeroes()
    }

    /// Whether the value is zero, whatever its padding.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.significant_digits() == 0
    }

    /// Storage mode chosen at encoding time.
    pub fn storage_mode(&self) -> StorageMode {
        match self.payload {
            Payload::Inline(_) => StorageMode::Inline,
            Payload::External(_) => StorageMode::External,
        }
    }

    /// Packed significant digits, `ceil(significant_digits / 2)` bytes.
    #[inline]
    pub fn packed_digits(&self) -> &[u8] {
        match &self.payload {
            Payload::Inline(bytes) => &bytes[..packed_len(self.significant_digits())],
            Payload::External(bytes) => bytes,
        }
    }

    /// Append the original text, leading zeroes included, to `out`.
    pub fn render(&self, out: &mut String) {
        out.reserve(self.total_digits());
        out.extend(self.chars());
    }

    fn chars(&self) -> impl Iterator<Item = char> + '_ {
        let packed = self.packed_digits();
        let (lone, pairs) = packed.split_at(self.significant_digits() & 1);

        std::iter::repeat('0')
            .take(self.leading_zeroes())
            .chain(lone.iter().map(|&b| digit_char(b)))
            .chain(pairs.iter().flat_map(|&b| [digit_char(b >> 4), digit_char(b & 0x0f)]))
    }
}

#[inline]
fn packed_len(digits: usize) -> usize {
    digits / 2 + (digits & 1)
}

#[inline]
fn digit_char(value: u8) -> char {
    char::from(b'0' + value)
}

fn pack(digits: &[u8], out: &mut [u8]) {
    let odd = digits.len() & 1;
    if odd == 1 {
        out[0] = digits[0] - b'0';
    }

    for (slot, pair) in out[odd..].iter_mut().zip(digits[odd..].chunks_exact(2)) {
        *slot = ((pair[0] - b'0') << 4) | (pair[1] - b'0');
    }
}

impl Ord for EncodedNumber {
    fn cmp(&self, other: &Self) -> Ordering {
        self.significant_digits()
            .cmp(&other.significant_digits())
            .then_with(|| self.packed_digits().cmp(other.packed_digits()))
    }
}

impl PartialOrd for EncodedNumber {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for EncodedNumber {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for EncodedNumber {}

impl Hash for EncodedNumber {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.significant_digits().hash(state);
        self.packed_digits().hash(state);
    }
}

impl FromStr for EncodedNumber {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s.as_bytes())
    }
}

impl fmt::Display for EncodedNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use fmt::Write;

        self.chars().try_for_each(|c| f.write_char(c))
    }
}

impl fmt::Debug for EncodedNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("EncodedNumber")
            .field(&format_args!("{self}"))
            .finish()
    }
}
