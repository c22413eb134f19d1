//! The wire-format parameters of the compressed assignment file.

use flate2::Compression;

/// The default extension for compressed assignment files.
pub const FILE_EXTENSION: &str = ".ac";

/// The literal value recorded for identifiers absent from an assignment.
pub const UNASSIGNED: &str = "-1";

/// The byte-exact parameters of the on-disk format.
///
/// None of the three delimiters may occur inside an identifier or a
/// district label; this is a precondition on the caller, not checked by
/// the codec. A file must be read back with the same delimiters it was
/// written with.
#[derive(Clone, Debug)]
pub struct CodecConfig {
    /// Separates district values within a single record.
    pub field_delimiter: &'static [u8],
    /// Separates records within a chunk, before compression.
    pub assignment_delimiter: &'static [u8],
    /// Separates compressed chunks from each other in the file.
    pub chunk_delimiter: &'static [u8],
    /// Number of bytes pulled from the file per read when decompressing.
    /// A performance knob only: any positive value decodes identically.
    pub read_size: usize,
    /// The zlib compression level applied to each chunk.
    pub level: Compression,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            field_delimiter: b",",
            assignment_delimiter: b"<<<*>>>",
            chunk_delimiter: b"(((*)))",
            read_size: 16384,
            level: Compression::default(),
        }
    }
}
