use rand::Rng;

/// Returns `ceil(bit_count / 8)` bytes filled from the thread-local CSPRNG.
pub fn random_bytes(bit_count: usize) -> Vec<u8> {
    random_bytes_with_rng(&mut rand::rng(), bit_count)
}

/// Same as [`random_bytes`], drawing from the provided generator.
pub fn random_bytes_with_rng(rng: &mut impl Rng, bit_count: usize) -> Vec<u8> {
    let mut bytes = vec![0u8; bit_count.div_ceil(8)];
    rng.fill(&mut bytes[..]);
    bytes
}
