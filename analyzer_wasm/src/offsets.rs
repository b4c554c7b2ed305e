/// Converts a byte offset into `source` to a UTF-16 code unit offset.
///
/// Offsets past the end clamp to the source length.
pub fn byte_offset_to_utf16_offset(source: &str, byte: usize) -> usize {
    let byte = byte.min(source.len());
    source
        .char_indices()
        .take_while(|&(idx, _)| idx < byte)
        .map(|(_, ch)| ch.len_utf16())
        .sum()
}
