use thiserror::Error;

/// Failure to produce a dataset from the backing store.
///
/// These are logged at the cache boundary and degrade to an empty dataset;
/// they never cross the public API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DatasetError {
    /// The store has no resource under the given file name.
    #[error("no resource found for '{name}'")]
    Missing {
        /// File name that was requested.
        name: String,
    },

    /// The resource exists but its contents could not be parsed.
    #[error("failed to parse '{name}': {message}")]
    Parse {
        /// File name that failed to parse.
        name: String,
        /// Description of the parse failure.
        message: String,
    },
}
