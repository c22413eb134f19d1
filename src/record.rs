//! Encoding and decoding of single fixed-field-order records.

use std::collections::HashMap;

use crate::config::{CodecConfig, UNASSIGNED};
use crate::error::Error;
use crate::universe::Universe;
use crate::util;

/// A partial mapping from geographic identifiers to district labels,
/// covering one districting plan sample.
pub type Assignment = HashMap<String, String>;

/// Completes 'assignment' against the universe and serializes it as one
/// record: one value per identifier in sorted order, absent identifiers
/// as the `-1` sentinel, joined by the field delimiter.
///
/// The caller has already checked that the assignment's keys are a
/// subset of the universe.
pub fn encode_record(
    universe: &Universe,
    assignment: &Assignment,
    config: &CodecConfig,
) -> Vec<u8> {
    let mut record = Vec::new();
    for (at, id) in universe.order().iter().enumerate() {
        if at > 0 {
            record.extend_from_slice(config.field_delimiter);
        }
        let label =
            assignment.get(id).map(String::as_str).unwrap_or(UNASSIGNED);
        record.extend_from_slice(label.as_bytes());
    }
    record
}

/// Splits a record on the field delimiter and zips the values with the
/// universe's sorted order to rebuild the full assignment. Every
/// identifier is present in the result; unassigned units carry `-1`.
pub fn decode_record(
    universe: &Universe,
    record: &[u8],
    config: &CodecConfig,
) -> Result<Assignment, Error> {
    let values = util::split(record, config.field_delimiter);
    let mut assignment = Assignment::with_capacity(universe.len());
    for (id, value) in universe.order().iter().zip(values) {
        assignment.insert(id.clone(), String::from_utf8(value.to_vec())?);
    }
    Ok(assignment)
}
