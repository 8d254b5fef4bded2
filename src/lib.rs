//! Debug-only mock data generation for unit tests and UI previews.
//!
//! Produces randomized strings (names, banks, addresses, passwords, secrets,
//! OTP URIs) and probability-weighted booleans. Values come from bundled
//! flat-file datasets or are synthesized from fixed character sets and a
//! cryptographically strong generator. Outputs carry no security guarantee;
//! this is test tooling.
//!
//! Dataset-backed accessors return `Option` and degrade to `None` when the
//! backing data is missing or malformed; nothing in this crate panics on bad
//! data. Every generator has a `*_with_rng` form accepting a seeded generator
//! for reproducible tests.
//!
//! # Example
//!
//! ```
//! use mockgen::MockGen;
//!
//! let mock = MockGen::new();
//! let bank = mock.random_bank();
//! assert!(bank.is_some());
//!
//! let password = mockgen::generate_password(12, true, true, true);
//! assert_eq!(password.chars().count(), 12);
//! ```

mod address;
mod chance;
mod codegen;
mod dataset;
mod date;
mod entropy;
mod errors;
mod mockgen;
mod secret;
mod store;
mod websites;

pub use address::{random_address, random_address_with_rng};
pub use chance::{random_bool, random_bool_with_rng};
pub use codegen::{
    generate_password, generate_password_with_rng, random_alphanumeric,
    random_alphanumeric_with_rng, random_password, random_password_with_rng,
};
pub use dataset::{DatasetKind, DatasetRepository};
pub use date::{
    from_millis, millis_since_epoch, random_date, random_date_between,
    random_date_between_with_rng, random_date_with_rng, short_date, short_date_with_time,
};
pub use entropy::{random_bytes, random_bytes_with_rng};
pub use errors::DatasetError;
pub use mockgen::MockGen;
pub use secret::{
    encode_secret, secret, secret_in_range, secret_in_range_with_rng, secret_with_rng,
};
pub use store::{BundledStore, MemoryStore, ResourceStore};
pub use websites::WebsiteEntry;
