use rand::Rng;
use rand::distr::Alphanumeric;

const BASE_UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const NUMBERS: &str = "1234567890";
const SPECIALS: &str = "!@#$%^&*";

/// Fixed 70-character pool for the toggle-free generator.
const PASSWORD_POOL: &str =
    "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ!@#$%&()0123456789";

/// Generates a password of `length` characters drawn uniformly from a
/// composable alphabet.
///
/// The 26 uppercase base letters are always present; the toggles append the
/// lowercase letters, the digits and the `!@#$%^&*` special set. Categories
/// are concatenated in a fixed order so seeded runs reproduce.
pub fn generate_password(
    length: usize,
    use_lowercase: bool,
    use_numbers: bool,
    use_special_chars: bool,
) -> String {
    generate_password_with_rng(
        &mut rand::rng(),
        length,
        use_lowercase,
        use_numbers,
        use_special_chars,
    )
}

/// Same as [`generate_password`], drawing from the provided generator.
pub fn generate_password_with_rng(
    rng: &mut impl Rng,
    length: usize,
    use_lowercase: bool,
    use_numbers: bool,
    use_special_chars: bool,
) -> String {
    let mut letters = String::from(BASE_UPPERCASE);
    if use_lowercase {
        letters.push_str(LOWERCASE);
    }
    if use_numbers {
        letters.push_str(NUMBERS);
    }
    if use_special_chars {
        letters.push_str(SPECIALS);
    }
    draw_from(rng, &letters, length)
}

/// Generates a password of `length` characters from the fixed 70-character
/// pool, no category toggles.
pub fn random_password(length: usize) -> String {
    random_password_with_rng(&mut rand::rng(), length)
}

/// Same as [`random_password`], drawing from the provided generator.
pub fn random_password_with_rng(rng: &mut impl Rng, length: usize) -> String {
    draw_from(rng, PASSWORD_POOL, length)
}

/// Generates a string of `length` characters from the 62 alphanumerics.
pub fn random_alphanumeric(length: usize) -> String {
    random_alphanumeric_with_rng(&mut rand::rng(), length)
}

/// Same as [`random_alphanumeric`], drawing from the provided generator.
pub fn random_alphanumeric_with_rng(rng: &mut impl Rng, length: usize) -> String {
    (0..length).map(|_| rng.sample(Alphanumeric) as char).collect()
}

fn draw_from(rng: &mut impl Rng, pool: &str, length: usize) -> String {
    let characters: Vec<char> = pool.chars().collect();
    (0..length)
        .map(|_| characters[rng.random_range(0..characters.len())])
        .collect()
}
