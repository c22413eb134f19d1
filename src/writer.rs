//! The compressing side: the window cache and the chunk writer.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use flate2::write::ZlibEncoder;

use crate::config::CodecConfig;
use crate::error::{Error, Outcome, SkipReason};
use crate::reader::Assignments;
use crate::record::{encode_record, Assignment};
use crate::universe::Universe;

/// Compresses a long sequence of partial assignments into a compact
/// append-only file, and reads them back out in the same order.
///
/// The schema imposes lexicographic order on the identifier universe
/// and matches every assignment to that ordering, assigning `-1` to
/// unassigned units. Encoded records accumulate in a cache; when the
/// cache reaches the window width (or when the compressor is closed)
/// the batch is zlib-compressed and appended to the file as one chunk.
///
/// Explicitly call [`close`](Self::close) when the last assignment has
/// been fed in; dropping the compressor also runs the final flush, but
/// a write failure there can only be logged, not returned.
pub struct AssignmentCompressor {
    /// The shared field order.
    universe: Universe,
    /// Wire-format parameters.
    config: CodecConfig,
    /// Maximum number of records cached before a flush.
    window: usize,
    /// The file the compressed chunks are appended to.
    location: PathBuf,
    /// Encoded records awaiting compression, in arrival order.
    cache: Vec<Vec<u8>>,
    /// Set once the teardown flush has run.
    closed: bool,
}

impl AssignmentCompressor {
    /// Creates a compressor over 'universe' writing to 'location'.
    /// 'window' is the cache width and must be positive.
    pub fn new<P: AsRef<Path>>(
        universe: Universe,
        window: usize,
        location: P,
    ) -> Result<Self, Error> {
        Self::with_config(universe, window, location, CodecConfig::default())
    }

    /// Same as [`new`](Self::new), with explicit wire-format parameters.
    pub fn with_config<P: AsRef<Path>>(
        universe: Universe,
        window: usize,
        location: P,
        config: CodecConfig,
    ) -> Result<Self, Error> {
        if window == 0 {
            return Err(Error::Window);
        }
        Ok(Self {
            universe,
            config,
            window,
            location: location.as_ref().to_path_buf(),
            cache: Vec::new(),
            closed: false,
        })
    }

    pub fn universe(&self) -> &Universe {
        &self.universe
    }

    pub fn location(&self) -> &Path {
        &self.location
    }

    /// Encodes one assignment into the cache, flushing a full window to
    /// file. An empty assignment, or one whose keys fall outside the
    /// universe, is skipped with a warning instead of aborting the run;
    /// the returned [`Outcome`] reports which of the two happened.
    pub fn compress(
        &mut self,
        assignment: &Assignment,
    ) -> Result<Outcome, Error> {
        if assignment.is_empty() {
            log::warn!("assignment is empty; skipping");
            return Ok(Outcome::Skipped(SkipReason::Empty));
        }
        if let Some(unknown) =
            assignment.keys().find(|id| !self.universe.contains(id))
        {
            log::warn!(
                "assignment key {:?} is not in the universe; skipping",
                unknown
            );
            return Ok(Outcome::Skipped(SkipReason::UnknownIdentifier));
        }

        self.cache
            .push(encode_record(&self.universe, assignment, &self.config));
        if self.cache.len() == self.window {
            self.flush(false)?;
        }
        Ok(Outcome::Applied)
    }

    /// Compresses a whole sequence at once: the window is widened to
    /// the sequence length so everything lands in one chunk, and the
    /// compressor is closed afterwards.
    pub fn compress_all(
        &mut self,
        assignments: &[Assignment],
    ) -> Result<(), Error> {
        self.window = assignments.len().max(1);
        for assignment in assignments {
            self.compress(assignment)?;
        }
        self.close()
    }

    /// Runs the teardown flush. Idempotent. A cache already emptied by
    /// a window flush writes nothing, so the file never ends in an
    /// empty chunk that would decode as a spurious null assignment.
    pub fn close(&mut self) -> Result<(), Error> {
        if self.closed {
            return Ok(());
        }
        self.closed = true;
        if self.cache.is_empty() {
            return Ok(());
        }
        self.flush(true)
    }

    /// Compresses the cached records into one chunk and appends it to
    /// the file, then clears the cache. The chunk delimiter follows the
    /// chunk except after the final forced flush.
    fn flush(&mut self, force: bool) -> Result<(), Error> {
        let mut encoder = ZlibEncoder::new(Vec::new(), self.config.level);
        for (at, record) in self.cache.iter().enumerate() {
            if at > 0 {
                encoder.write_all(self.config.assignment_delimiter)?;
            }
            encoder.write_all(record)?;
        }
        let compressed = encoder.finish()?;

        // Open in append mode once per flush instead of holding the
        // file open for the producer's whole lifetime; the window
        // batches enough records to amortize the open.
        let mut writer = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.location)?;
        writer.write_all(&compressed)?;
        if !force {
            writer.write_all(self.config.chunk_delimiter)?;
        }

        self.cache.clear();
        Ok(())
    }

    /// Reads the compressed file back from the start as a lazy sequence
    /// of assignments in their original order. Every yielded assignment
    /// carries all the universe's identifiers, with `-1` for units that
    /// were unassigned.
    pub fn decompress(&self) -> Result<Assignments<'_>, Error> {
        Assignments::open(&self.universe, &self.config, &self.location)
    }
}

impl Drop for AssignmentCompressor {
    fn drop(&mut self) {
        if let Err(err) = self.close() {
            log::error!(
                "teardown flush of {} failed: {}",
                self.location.display(),
                err
            );
        }
    }
}
