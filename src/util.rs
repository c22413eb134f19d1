//! Byte-scanning helpers shared by the record and chunk decoders.

/// Finds the first occurrence of 'needle' in 'haystack'.
pub fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.is_empty() || haystack.len() < needle.len() {
        return None;
    }
    haystack.windows(needle.len()).position(|w| w == needle)
}

/// Splits 'input' on every occurrence of 'delimiter'. An input without
/// the delimiter yields one part; delimiters at the ends yield empty
/// parts, like the split of a byte string.
pub fn split<'a>(input: &'a [u8], delimiter: &[u8]) -> Vec<&'a [u8]> {
    let mut parts = Vec::new();
    let mut rest = input;
    while let Some(at) = find(rest, delimiter) {
        parts.push(&rest[..at]);
        rest = &rest[at + delimiter.len()..];
    }
    parts.push(rest);
    parts
}
