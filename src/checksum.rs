use crc32fast::Hasher;

/// Compute the CRC-32 of the given bytes.
///
/// This is the standard zlib polynomial, so the result matches what the
/// consuming side computes for the same UTF-8 encoded name.
pub fn calculate(data: &[u8]) -> u32 {
    let mut hasher = Hasher::new();
    hasher.update(data);
    hasher.finalize()
}
