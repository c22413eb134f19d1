//! The decompressing side: chunk reassembly and record expansion.

use std::collections::VecDeque;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use flate2::read::ZlibDecoder;

use crate::config::CodecConfig;
use crate::error::Error;
use crate::record::{decode_record, Assignment};
use crate::universe::Universe;
use crate::util;

/// A lazy, single-pass iterator over the assignments stored in a
/// compressed file.
///
/// The file is read in fixed-size increments and accumulated in a
/// buffer. A chunk delimiter may straddle two reads, so the whole
/// accumulated buffer, not just the latest read, is scanned for it;
/// everything before the first delimiter is a complete chunk, and
/// whatever remains at end of file is the final, delimiter-less chunk.
///
/// The iterator is finite and not restartable mid-stream; call
/// [`AssignmentCompressor`](crate::AssignmentCompressor::decompress)
/// again to start over from the top of the file. Abandoning it early is
/// always safe.
pub struct Assignments<'a> {
    universe: &'a Universe,
    config: &'a CodecConfig,
    /// The file read cursor.
    reader: File,
    /// Bytes read but not yet attributed to a complete chunk.
    buffer: Vec<u8>,
    /// Decoded assignments of the current chunk awaiting hand-out.
    pending: VecDeque<Assignment>,
    /// Set when the file is exhausted.
    eof: bool,
    /// Set when the sequence has ended or yielded an error.
    done: bool,
}

impl<'a> Assignments<'a> {
    pub(crate) fn open(
        universe: &'a Universe,
        config: &'a CodecConfig,
        location: &Path,
    ) -> Result<Self, Error> {
        let reader = File::open(location)?;
        Ok(Self {
            universe,
            config,
            reader,
            buffer: Vec::new(),
            pending: VecDeque::new(),
            eof: false,
            done: false,
        })
    }

    /// Decompresses one complete chunk, splits it back into records and
    /// queues the decoded assignments in their original order.
    fn decode_chunk(&mut self, chunk: &[u8]) -> Result<(), Error> {
        let mut joined = Vec::new();
        ZlibDecoder::new(chunk)
            .read_to_end(&mut joined)
            .map_err(Error::Decode)?;
        for record in util::split(&joined, self.config.assignment_delimiter) {
            self.pending.push_back(decode_record(
                self.universe,
                record,
                self.config,
            )?);
        }
        Ok(())
    }

    /// Pulls reads from the file until a complete chunk is buffered,
    /// decodes it, and hands out the next assignment.
    fn advance(&mut self) -> Result<Option<Assignment>, Error> {
        loop {
            if let Some(next) = self.pending.pop_front() {
                return Ok(Some(next));
            }

            // A complete chunk may already be sitting in the buffer.
            if let Some(at) =
                util::find(&self.buffer, self.config.chunk_delimiter)
            {
                let rest = self
                    .buffer
                    .split_off(at + self.config.chunk_delimiter.len());
                self.buffer.truncate(at);
                let chunk = std::mem::replace(&mut self.buffer, rest);
                self.decode_chunk(&chunk)?;
                continue;
            }

            if self.eof {
                // The last chunk carries no trailing delimiter. An
                // empty buffer means the file ended cleanly on one.
                if self.buffer.is_empty() {
                    return Ok(None);
                }
                let chunk = std::mem::take(&mut self.buffer);
                self.decode_chunk(&chunk)?;
                continue;
            }

            // Pull the next increment from the file.
            let start = self.buffer.len();
            self.buffer.resize(start + self.config.read_size, 0);
            let got = self.reader.read(&mut self.buffer[start..])?;
            self.buffer.truncate(start + got);
            if got == 0 {
                self.eof = true;
            }
        }
    }
}

impl Iterator for Assignments<'_> {
    type Item = Result<Assignment, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.advance() {
            Ok(Some(assignment)) => Some(Ok(assignment)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(err) => {
                self.done = true;
                Some(Err(err))
            }
        }
    }
}
