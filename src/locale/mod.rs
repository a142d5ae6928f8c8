//! Bidirectional mapping between ISO language tags and the legacy numeric
//! locale identifiers used by the TRANSTEXT dialect's `PRIMARY_LANGID`
//! directive.

mod table;

/// Canonical tag for the source language of TRANSTEXT catalogs.
pub const ENGLISH_TAG: &str = "en";

/// Resolves ISO language tags to legacy numeric locale identifiers and back.
///
/// The table is immutable process-wide reference data; the resolver is a view
/// over it and is free to share across conversions.
#[derive(Debug, Clone, Copy)]
pub struct LocaleResolver {
    table: &'static [(&'static str, u32)],
}

impl Default for LocaleResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl LocaleResolver {
    /// Create a resolver over the built-in locale table.
    #[must_use]
    pub fn new() -> Self {
        Self { table: table::PRIMARY_LANGUAGES }
    }

    /// Reverse lookup: numeric id → ISO tag.
    ///
    /// First match in table order wins; there is no fallback fuzziness in
    /// this direction.
    #[must_use]
    pub fn to_iso(&self, id: u32) -> Option<&'static str> {
        self.table.iter().find(|&&(_, n)| n == id).map(|&(iso, _)| iso)
    }

    /// Forward lookup: ISO tag → numeric id.
    ///
    /// Tries the raw tag first. On a miss, hyphens are normalized to
    /// underscores and trailing subtags are dropped one at a time (most
    /// specific prefix first) until a table entry matches. `fr_CA` resolves
    /// through `fr`; a tag whose primary subtag is absent from the table
    /// resolves to `None`.
    #[must_use]
    pub fn to_numeric(&self, tag: &str) -> Option<u32> {
        if let Some(id) = self.exact(tag) {
            return Some(id);
        }

        let normalized = tag.replace('-', "_");
        let chunks: Vec<&str> = normalized.split('_').collect();
        for len in (1..chunks.len()).rev() {
            let prefix = chunks.get(..len)?.join("_");
            if let Some(id) = self.exact(&prefix) {
                return Some(id);
            }
        }

        None
    }

    fn exact(&self, tag: &str) -> Option<u32> {
        self.table.iter().find(|&&(iso, _)| iso == tag).map(|&(_, id)| id)
    }
}
