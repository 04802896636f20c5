//! Largest distinct numbers in a character stream.
//!
//! `topdigits` extracts every maximal run of decimal digits from a stream,
//! treats each run as a non-negative integer of up to 1000 digits, and keeps
//! the K largest distinct values in a bounded set:
//!
//! - Numbers are packed two digits per byte ([`EncodedNumber`]). Short ones
//!   live inline, long ones in one exactly sized allocation. Comparing two
//!   numbers of different length costs one integer comparison.
//! - The set ([`BoundedTopKSet`]) keeps its values in descending order, so a
//!   full set turns away small candidates with one comparison.
//! - Leading zeroes are kept for output but ignored by ordering: `007` and
//!   `7` are the same value, and the first spelling admitted is the one
//!   reported.
//!
//! # Example
//!
//! ```rust
//! use topdigits::{top_numbers, write_ascending};
//!
//! let input = b"order 5, 3 and 9; then 1, 7 and 2";
//! let set = top_numbers(&input[..], 3).unwrap();
//!
//! let mut out = Vec::new();
//! write_ascending(&set, &mut out).unwrap();
//! assert_eq!(out, b"5\n7\n9\n");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
mod error;
mod lex;
pub mod logging;
mod number;
mod scan;
mod set;
mod traits;

pub use error::{Error, Result};
pub use lex::{DigitLexer, Feed};
pub use number::{EncodedNumber, StorageMode, INLINE_MAX_DIGITS, MAX_DIGITS};
pub use scan::{scan, top_numbers, write_ascending, ScanStats};
pub use set::{BoundedTopKSet, Iter};
pub use traits::NumberSink;
