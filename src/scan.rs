//! Stream driver: reader → lexer → sink, and ascending output.

use std::io::{ErrorKind, Read, Write};

use tracing::debug;

use crate::error::Result;
use crate::lex::{DigitLexer, Feed};
use crate::number::EncodedNumber;
use crate::set::BoundedTopKSet;
use crate::traits::NumberSink;

const CHUNK_SIZE: usize = 64 * 1024;

/// Counters collected by [`scan`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScanStats {
    /// Bytes read from the input.
    pub bytes: u64,
    /// Numbers extracted and handed to the sink.
    pub numbers: u64,
}

/// Read `reader` to the end, passing every number found to `sink`.
///
/// # Errors
///
/// Propagates read failures and any encoding error from the lexer. Numbers
/// already handed over stay with the sink.
pub fn scan<R: Read, S: NumberSink>(mut reader: R, mut sink: S) -> Result<ScanStats> {
    let mut lexer = DigitLexer::new()?;
    let mut stats = ScanStats::default();
    let mut chunk = vec![0u8; CHUNK_SIZE];

    loop {
        let read = match reader.read(&mut chunk) {
            Ok(0) => break,
            Ok(read) => read,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        };
        stats.bytes += read as u64;

        for &byte in &chunk[..read] {
            if lexer.feed(Some(byte)) == Feed::NumberReady {
                sink.accept(lexer.flush()?);
                stats.numbers += 1;
            }
        }
    }

    if lexer.feed(None) == Feed::NumberReady {
        sink.accept(lexer.flush()?);
        stats.numbers += 1;
    }

    debug!(bytes = stats.bytes, numbers = stats.numbers, "scan complete");
    Ok(stats)
}

/// Collect the `capacity` largest distinct numbers in `reader`.
pub fn top_numbers<R: Read>(reader: R, capacity: usize) -> Result<BoundedTopKSet> {
    let mut set = BoundedTopKSet::new(capacity)?;
    scan(reader, &mut set)?;
    Ok(set)
}

/// Write each number of `set` on its own line, smallest first.
pub fn write_ascending<W: Write>(set: &BoundedTopKSet<EncodedNumber>, mut writer: W) -> Result<()> {
    let mut line = String::new();

    for number in set {
        line.clear();
        number.render(&mut line);
        line.push('\n');
        writer.write_all(line.as_bytes())?;
    }

    writer.flush()?;
    Ok(())
}
