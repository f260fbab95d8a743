pub mod result_ext;

/// Longest byte run rendered in full by [`hex_preview`]
pub const HEX_PREVIEW_LIMIT: usize = 32;

/// Hex encode bytes for log lines, long inputs are cut off and suffixed with the total length
pub fn hex_preview(bytes: &[u8]) -> String {
    if bytes.len() <= HEX_PREVIEW_LIMIT {
        return hex::encode(bytes);
    }

    let head = hex::encode(&bytes[..HEX_PREVIEW_LIMIT]);
    format!("{head}.. ({} bytes)", bytes.len())
}
