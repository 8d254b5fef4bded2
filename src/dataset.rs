use std::sync::OnceLock;

use rand::Rng;
use rand::seq::IndexedRandom;
use tracing::warn;

use crate::errors::DatasetError;
use crate::store::{BundledStore, ResourceStore};
use crate::websites::{self, WebsiteEntry};

/// Record separator used by the comma-newline CSV lists.
const CSV_SEPARATOR: &str = ",\n";

/// Brand names, a JSON string array rather than a CSV list.
const BRANDS_FILE: &str = "brands.json";

/// Brand-specific website overrides, consulted before the general list.
const BRAND_SITES_FILE: &str = "brandsites.csv";

/// General company → website list.
const WEBSITES_FILE: &str = "websites.csv";

/// The bundled line-list datasets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetKind {
    Banks,
    Notes,
    Names,
    Ssids,
    CreditIssuers,
    Words,
}

impl DatasetKind {
    /// Every dataset kind, in cache order.
    pub const ALL: [DatasetKind; 6] = [
        DatasetKind::Banks,
        DatasetKind::Notes,
        DatasetKind::Names,
        DatasetKind::Ssids,
        DatasetKind::CreditIssuers,
        DatasetKind::Words,
    ];

    /// File name in the resource store.
    pub fn file_name(self) -> &'static str {
        match self {
            DatasetKind::Banks => "Banks.csv",
            DatasetKind::Notes => "Notes.csv",
            DatasetKind::Names => "Names.csv",
            DatasetKind::Ssids => "SSIDS.csv",
            DatasetKind::CreditIssuers => "CreditIssuers.csv",
            DatasetKind::Words => "english.txt",
        }
    }

    /// Record separator for the backing file.
    pub fn separator(self) -> &'static str {
        match self {
            DatasetKind::Words => "\n",
            _ => CSV_SEPARATOR,
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Loads named datasets from a [`ResourceStore`] and caches each at most once
/// for the lifetime of the repository.
///
/// Missing or malformed files degrade to an empty dataset with a logged
/// diagnostic; callers treat an empty dataset as "no data available."
pub struct DatasetRepository {
    store: Box<dyn ResourceStore>,
    lists: [OnceLock<Vec<String>>; DatasetKind::ALL.len()],
    brands: OnceLock<Vec<String>>,
    websites: OnceLock<Vec<WebsiteEntry>>,
}

impl Default for DatasetRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl DatasetRepository {
    /// Repository over the bundled assets.
    pub fn new() -> Self {
        Self::with_store(BundledStore)
    }

    /// Repository over an injected store, typically a fixture store in tests.
    pub fn with_store(store: impl ResourceStore + 'static) -> Self {
        Self {
            store: Box::new(store),
            lists: std::array::from_fn(|_| OnceLock::new()),
            brands: OnceLock::new(),
            websites: OnceLock::new(),
        }
    }

    /// The lines of a dataset, empty when the backing file is unavailable.
    pub fn lines(&self, kind: DatasetKind) -> &[String] {
        self.lists[kind.index()].get_or_init(|| {
            self.load_list(kind.file_name(), kind.separator())
                .unwrap_or_else(|error| {
                    warn!(%error, dataset = kind.file_name(), "dataset unavailable");
                    Vec::new()
                })
        })
    }

    /// One uniformly selected line, `None` when the dataset is empty.
    pub fn random_line(&self, kind: DatasetKind) -> Option<String> {
        self.random_line_with_rng(&mut rand::rng(), kind)
    }

    /// Same as [`DatasetRepository::random_line`], drawing from the provided
    /// generator.
    pub fn random_line_with_rng(&self, rng: &mut impl Rng, kind: DatasetKind) -> Option<String> {
        self.lines(kind).choose(rng).cloned()
    }

    /// Brand names from `brands.json`, sorted; empty on a parse failure.
    pub fn brands(&self) -> &[String] {
        self.brands.get_or_init(|| {
            self.load_brands().unwrap_or_else(|error| {
                warn!(%error, "brand list unavailable");
                Vec::new()
            })
        })
    }

    /// One uniformly selected brand name.
    pub fn random_brand(&self) -> Option<String> {
        self.random_brand_with_rng(&mut rand::rng())
    }

    /// Same as [`DatasetRepository::random_brand`], drawing from the provided
    /// generator.
    pub fn random_brand_with_rng(&self, rng: &mut impl Rng) -> Option<String> {
        self.brands().choose(rng).cloned()
    }

    /// The website for a company, case-insensitive, brand overrides first.
    pub fn website_for(&self, company: &str) -> Option<String> {
        let website = websites::lookup(self.website_entries(), company);
        if website.is_none() {
            warn!(company, "no website for company");
        }
        website.map(str::to_string)
    }

    /// The merged website table: `brandsites.csv` entries precede
    /// `websites.csv` entries, so overrides win the first-match lookup.
    pub fn website_entries(&self) -> &[WebsiteEntry] {
        self.websites.get_or_init(|| {
            let mut entries =
                websites::parse_entries(&self.load_list_or_empty(BRAND_SITES_FILE, CSV_SEPARATOR));
            entries.extend(websites::parse_entries(
                &self.load_list_or_empty(WEBSITES_FILE, CSV_SEPARATOR),
            ));
            entries
        })
    }

    fn load_list(&self, name: &str, separator: &str) -> Result<Vec<String>, DatasetError> {
        let contents = self.store.read_file(name).ok_or_else(|| DatasetError::Missing {
            name: name.to_string(),
        })?;
        Ok(split_list(&contents, separator))
    }

    fn load_list_or_empty(&self, name: &str, separator: &str) -> Vec<String> {
        self.load_list(name, separator).unwrap_or_else(|error| {
            warn!(%error, dataset = name, "dataset unavailable");
            Vec::new()
        })
    }

    fn load_brands(&self) -> Result<Vec<String>, DatasetError> {
        let contents = self
            .store
            .read_file(BRANDS_FILE)
            .ok_or_else(|| DatasetError::Missing {
                name: BRANDS_FILE.to_string(),
            })?;
        let mut brands: Vec<String> =
            serde_json::from_str(&contents).map_err(|error| DatasetError::Parse {
                name: BRANDS_FILE.to_string(),
                message: error.to_string(),
            })?;
        brands.sort();
        Ok(brands)
    }
}

/// Splits raw file contents on `separator`, trimming stray whitespace and
/// dropping empty records.
fn split_list(contents: &str, separator: &str) -> Vec<String> {
    contents
        .split(separator)
        .map(|record| record.trim().to_string())
        .filter(|record| !record.is_empty())
        .collect()
}
