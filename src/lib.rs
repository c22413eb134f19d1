//! A streaming codec for compressing and decompressing lots of
//! district assignments very quickly.
//!
//! An assignment maps a subset of a fixed universe of geographic
//! identifiers (commonly Census block GEOIDs) to district labels. The
//! codec sorts the universe lexicographically once, matches every
//! assignment to that ordering with `-1` filled in for unassigned
//! units, batches the encoded records in a window-sized cache, and
//! appends each zlib-compressed batch to an append-only file framed by
//! a chunk delimiter. Decompression streams the file back in fixed-size
//! reads and yields the assignments lazily, in their original order,
//! with keys drawn from the same sorted universe.
//!
//! ```no_run
//! use assignpack::{AssignmentCompressor, Universe};
//!
//! # fn main() -> Result<(), assignpack::Error> {
//! # let samples: Vec<assignpack::Assignment> = Vec::new();
//! let universe = Universe::new(["001", "002", "003"]);
//! let mut ac = AssignmentCompressor::new(universe, 10, "plans.ac")?;
//!
//! for assignment in &samples {
//!     ac.compress(assignment)?;
//! }
//! ac.close()?;
//!
//! for assignment in ac.decompress()? {
//!     let assignment = assignment?;
//!     // Every identifier is present; unassigned units read "-1".
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod reader;
pub mod record;
pub mod universe;
pub mod util;
pub mod writer;

pub use config::CodecConfig;
pub use error::{Error, Outcome, SkipReason};
pub use reader::Assignments;
pub use record::Assignment;
pub use universe::Universe;
pub use writer::AssignmentCompressor;
