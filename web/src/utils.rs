/// Helper function to use JavaScript's Math.random
pub(crate) fn js_random_seed() -> u64 {
    use js_sys::Math::random;
    let mut bytes = [0u8; 8];
    for byte in &mut bytes {
        *byte = (256. * random()) as u8;
    }
    u64::from_be_bytes(bytes)
}

/// Seeds are derived from a forced base seed when one is given, so a session can be replayed.
pub(crate) fn round_seed(forced: Option<u64>, round: u64) -> u64 {
    match forced {
        Some(seed) => splitmix64(seed.wrapping_add(round)),
        None => js_random_seed(),
    }
}

/// One step of SplitMix64, spreads nearby seeds apart.
const fn splitmix64(state: u64) -> u64 {
    let mut z = state.wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}
