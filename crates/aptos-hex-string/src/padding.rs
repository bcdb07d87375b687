//! Byte padding helpers.

/// Left-pads `bytes` with zeros up to `len` bytes.
///
/// Input that is already `len` bytes or longer is returned unchanged.
pub fn zero_pad_bytes(bytes: &[u8], len: usize) -> Vec<u8> {
    if bytes.len() >= len {
        return bytes.to_vec();
    }
    let mut padded = vec![0u8; len - bytes.len()];
    padded.extend_from_slice(bytes);
    padded
}
