//! Trait for consumers of scanned numbers.

use crate::number::EncodedNumber;
use crate::set::BoundedTopKSet;

/// Receives every number extracted from a stream.
///
/// Implementors take ownership of each number and decide whether to keep
/// it. [`scan`](crate::scan) drives any sink, so a bounded set and a plain
/// collection of every number read are interchangeable.
pub trait NumberSink {
    /// Take ownership of `number`.
    fn accept(&mut self, number: EncodedNumber);
}

impl NumberSink for BoundedTopKSet<EncodedNumber> {
    #[inline]
    fn accept(&mut self, number: EncodedNumber) {
        self.add(number);
    }
}

impl NumberSink for Vec<EncodedNumber> {
    #[inline]
    fn accept(&mut self, number: EncodedNumber) {
        self.push(number);
    }
}

impl<S: NumberSink + ?Sized> NumberSink for &mut S {
    #[inline]
    fn accept(&mut self, number: EncodedNumber) {
        (**self).accept(number);
    }
}
