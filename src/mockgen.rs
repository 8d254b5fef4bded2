use chrono::{DateTime, Utc};
use tracing::warn;

use crate::address;
use crate::chance;
use crate::dataset::{DatasetKind, DatasetRepository};
use crate::date;
use crate::secret;
use crate::store::ResourceStore;

/// Fallback secret spliced into the OTP template when generation fails.
const DEFAULT_OTP_SECRET: &str = "GEZDGNBV";

/// OTP secret length bounds, max exclusive.
const OTP_SECRET_MIN: usize = 8;
const OTP_SECRET_MAX: usize = 16;

/// Composite mock-data facade.
///
/// Assembles domain-flavored random values on top of an injected
/// [`DatasetRepository`]: bank names, notes, emails, OTP provisioning URIs,
/// dates and skewed boolean flags. Every dataset-backed accessor returns
/// `None` when the backing data is unavailable; nothing here panics.
pub struct MockGen {
    repository: DatasetRepository,
}

impl Default for MockGen {
    fn default() -> Self {
        Self::new()
    }
}

impl MockGen {
    /// Facade over the bundled datasets.
    pub fn new() -> Self {
        Self {
            repository: DatasetRepository::new(),
        }
    }

    /// Facade over fixture datasets served by `store`.
    pub fn with_store(store: impl ResourceStore + 'static) -> Self {
        Self {
            repository: DatasetRepository::with_store(store),
        }
    }

    /// The underlying dataset repository.
    pub fn repository(&self) -> &DatasetRepository {
        &self.repository
    }

    /// Random bank name.
    pub fn random_bank(&self) -> Option<String> {
        self.repository.random_line(DatasetKind::Banks)
    }

    /// Random note text.
    pub fn random_note(&self) -> Option<String> {
        self.repository.random_line(DatasetKind::Notes)
    }

    /// Random full name.
    pub fn random_full_name(&self) -> Option<String> {
        self.repository.random_line(DatasetKind::Names)
    }

    /// Random wifi network name.
    pub fn random_ssid(&self) -> Option<String> {
        self.repository.random_line(DatasetKind::Ssids)
    }

    /// Random credit card issuer name.
    pub fn random_issuer(&self) -> Option<String> {
        self.repository.random_line(DatasetKind::CreditIssuers)
    }

    /// Random word from the bundled word list.
    pub fn random_word(&self) -> Option<String> {
        self.repository.random_line(DatasetKind::Words)
    }

    /// Random brand name.
    pub fn random_brand(&self) -> Option<String> {
        self.repository.random_brand()
    }

    /// First whitespace token of a random full name.
    pub fn random_first_name(&self) -> Option<String> {
        let Some(full_name) = self.random_full_name() else {
            warn!("no full name available");
            return None;
        };
        let Some(first) = full_name.split_whitespace().next() else {
            warn!(full_name = %full_name, "unable to split full name");
            return None;
        };
        Some(first.to_string())
    }

    /// The website for a company, brand overrides first, case-insensitive.
    pub fn website_for(&self, company: &str) -> Option<String> {
        self.repository.website_for(company)
    }

    /// Lowercased `name` joined with the brand's website, or `None` when the
    /// brand has no known website.
    pub fn get_email(&self, name: &str, brand: &str) -> Option<String> {
        let website = self.website_for(brand)?;
        Some(format!("{}@{}", name.to_lowercase(), website))
    }

    /// Random email built from a random first name and a random brand.
    pub fn random_email(&self) -> Option<String> {
        let name = self.random_first_name()?;
        let brand = self.random_brand()?;
        self.get_email(&name, &brand)
    }

    /// OTP provisioning URI with a freshly generated secret.
    ///
    /// Falls back to a literal default secret when generation fails, so this
    /// always succeeds.
    pub fn random_otp_uri(&self) -> String {
        let secret = secret::secret_in_range(OTP_SECRET_MIN, OTP_SECRET_MAX)
            .unwrap_or_else(|| DEFAULT_OTP_SECRET.to_string());
        format!(
            "otpauth://totp/ACME%20Co:john.doe@email.com?secret={secret}&algorithm=SHA512&digits=6&period=30.0&issuer=ACME%20Co&image=https://www.images.com/image.png"
        )
    }

    /// Random street address.
    pub fn random_address(&self) -> String {
        address::random_address()
    }

    /// Uniformly random instant in `[start, end]`.
    pub fn random_date_between(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> DateTime<Utc> {
        date::random_date_between(start, end)
    }

    /// Random date between the Unix epoch and now, formatted `MM/DD/YYYY`.
    pub fn random_date(&self) -> String {
        date::random_date()
    }

    /// Weighted boolean draw, true with probability `(1/2)^(chance + 1)`.
    pub fn random_bool(&self, chance: u32) -> bool {
        chance::random_bool(chance)
    }

    /// Favorite flag, true with probability 1/16.
    pub fn random_favorite(&self) -> bool {
        chance::random_bool(3)
    }

    /// Archive flag, true with probability 1/32.
    pub fn random_archive(&self) -> bool {
        chance::random_bool(4)
    }

    /// Trash flag, true with probability 1/64.
    pub fn random_trash(&self) -> bool {
        chance::random_bool(5)
    }
}
