use rand::Rng;
use rand::seq::IndexedRandom;

const STREET_NAMES: [&str; 10] = [
    "Main",
    "High",
    "Maple",
    "Oak",
    "Pine",
    "Cedar",
    "Elm",
    "Washington",
    "Lake",
    "Hill",
];

const STREET_TYPES: [&str; 6] = ["St", "Ave", "Blvd", "Rd", "Ln", "Way"];

const CITIES: [&str; 5] = ["New York", "Los Angeles", "Chicago", "Houston", "Phoenix"];

const STATES: [&str; 5] = ["NY", "CA", "IL", "TX", "AZ"];

const ZIP_CODES: [&str; 5] = ["10001", "90001", "60601", "77001", "85001"];

/// Produces a street address like `123 Maple Ave, Chicago, IL 60601`.
pub fn random_address() -> String {
    random_address_with_rng(&mut rand::rng())
}

/// Same as [`random_address`], drawing from the provided generator.
pub fn random_address_with_rng(rng: &mut impl Rng) -> String {
    let number = rng.random_range(1..=9999);
    let street = STREET_NAMES.choose(rng).copied().unwrap_or("Main");
    let street_type = STREET_TYPES.choose(rng).copied().unwrap_or("St");
    let city = CITIES.choose(rng).copied().unwrap_or("New York");
    let state = STATES.choose(rng).copied().unwrap_or("NY");
    let zip = ZIP_CODES.choose(rng).copied().unwrap_or("10001");
    format!("{number} {street} {street_type}, {city}, {state} {zip}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn address_has_three_comma_separated_parts() {
        let address = random_address();
        let parts: Vec<&str> = address.split(", ").collect();
        assert_eq!(parts.len(), 3, "got {address}");
    }

    #[test]
    fn address_components_come_from_the_pools() {
        let address = random_address();
        let parts: Vec<&str> = address.split(", ").collect();

        let street_words: Vec<&str> = parts[0].split(' ').collect();
        assert_eq!(street_words.len(), 3);
        let number: u32 = street_words[0].parse().expect("leading street number");
        assert!((1..=9999).contains(&number));
        assert!(STREET_NAMES.contains(&street_words[1]));
        assert!(STREET_TYPES.contains(&street_words[2]));

        assert!(CITIES.contains(&parts[1]));

        let (state, zip) = parts[2].rsplit_once(' ').expect("state and zip");
        assert!(STATES.contains(&state));
        assert!(ZIP_CODES.contains(&zip));
    }
}
