use serde::{Deserialize, Serialize};
use tracing::debug;

/// Field separator inside a record (`company, website`).
const FIELD_SEPARATOR: &str = ", ";

/// A `(company, website)` pair from one of the website tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebsiteEntry {
    /// Company name as listed in the backing file.
    pub company: String,
    /// Website URL associated with the company.
    pub website: String,
}

/// Parses `company, website` records; records without the field separator
/// are skipped with a diagnostic.
pub(crate) fn parse_entries(lines: &[String]) -> Vec<WebsiteEntry> {
    lines
        .iter()
        .filter_map(|line| {
            let Some((company, website)) = line.split_once(FIELD_SEPARATOR) else {
                debug!(line = %line, "website record has no separator");
                return None;
            };
            Some(WebsiteEntry {
                company: company.trim().to_string(),
                website: website.trim().to_string(),
            })
        })
        .collect()
}

/// Case-insensitive first match over a merged entry table.
pub(crate) fn lookup<'a>(entries: &'a [WebsiteEntry], company: &str) -> Option<&'a str> {
    let company = company.to_lowercase();
    entries
        .iter()
        .find(|entry| entry.company.to_lowercase() == company)
        .map(|entry| entry.website.as_str())
}
