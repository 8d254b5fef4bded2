use rand::Rng;

/// Returns `true` with probability `(1/2)^(chance + 1)`.
///
/// `chance + 1` independent fair coins are flipped and the draw is `true`
/// only when every flip comes up tails: chance 3 yields 1/16, chance 4
/// yields 1/32, chance 5 yields 1/64.
pub fn random_bool(chance: u32) -> bool {
    random_bool_with_rng(&mut rand::rng(), chance)
}

/// Same as [`random_bool`], drawing from the provided generator.
pub fn random_bool_with_rng(rng: &mut impl Rng, chance: u32) -> bool {
    (0..=chance).all(|_| !rng.random::<bool>())
}
