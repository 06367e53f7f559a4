//! Prefix selection over documentation keys.

use super::{Document, FilteredDocument};

/// Key prefix shared by every Luau-owned documentation entry
pub const LUAU_PREFIX: &str = "@luau";

/// Keep the entries whose key starts with `prefix`.
///
/// Matching is a case-sensitive literal prefix test. Entries keep their
/// relative order and their values are copied untouched. An empty result is
/// not an error.
pub fn filter(doc: &Document, prefix: &str) -> FilteredDocument {
    let filtered: FilteredDocument = doc
        .iter()
        .filter(|(key, _)| key.starts_with(prefix))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();

    log::debug!(
        "Kept {} of {} entries with prefix '{}'",
        filtered.len(),
        doc.len(),
        prefix
    );

    filtered
}
