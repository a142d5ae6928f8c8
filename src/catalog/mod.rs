//! 翻訳カタログの中間表現
//!
//! TRANSTEXT CSV と gettext の両方向から使われる、順序付きの翻訳エントリ集合。

use std::collections::HashMap;

/// gettext flag for entries whose original text contains printf-style
/// conversion specifiers that translators must keep intact.
pub const C_FORMAT_FLAG: &str = "c-format";

/// A single translatable string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationEntry {
    /// 項目の種別 (空文字列の場合もある)
    pub context: String,

    /// ソース言語のテキスト。`context` と合わせてエントリの識別キーになる。
    pub original: String,

    /// 翻訳済みテキスト。空文字列は「未翻訳」を意味する。
    pub translation: String,

    /// gettext スタイルのフラグ。一度追加されたフラグは削除されない。
    pub flags: Vec<String>,
}

impl TranslationEntry {
    /// Create an untranslated entry.
    #[must_use]
    pub fn new(context: impl Into<String>, original: impl Into<String>) -> Self {
        Self {
            context: context.into(),
            original: original.into(),
            translation: String::new(),
            flags: Vec::new(),
        }
    }

    /// Whether the entry carries a non-empty translation.
    #[must_use]
    pub fn has_translation(&self) -> bool {
        !self.translation.is_empty()
    }

    /// Add a flag unless it is already present.
    pub fn add_flag(&mut self, flag: &str) {
        if !self.has_flag(flag) {
            self.flags.push(flag.to_string());
        }
    }

    /// Whether the entry carries the given flag.
    #[must_use]
    pub fn has_flag(&self, flag: &str) -> bool {
        self.flags.iter().any(|f| f == flag)
    }
}

/// An ordered collection of unique [`TranslationEntry`] values plus the
/// declared catalog language.
///
/// Entries are keyed by (context, original). Inserting a duplicate key merges
/// into the existing entry instead of appending; iteration preserves the
/// original insertion order, which the CSV encoder relies on for grouping
/// consecutive entries with equal original text.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: Vec<TranslationEntry>,
    index: HashMap<(String, String), usize>,
    language: Option<String>,
}

impl Catalog {
    /// Create an empty catalog with no language set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry, merging when the (context, original) key exists.
    ///
    /// 重複キーのマージでは「より長い翻訳が勝つ」。同じソース行が繰り返しの
    /// エクスポートで重複した場合に、最も充実した翻訳を残すための方針で、
    /// 行の新旧ではなく文字列長で決まる。既存エントリのフラグは保持される。
    pub fn upsert(&mut self, entry: TranslationEntry) {
        let key = (entry.context.clone(), entry.original.clone());
        if let Some(&slot) = self.index.get(&key) {
            if let Some(existing) = self.entries.get_mut(slot)
                && entry.translation.len() > existing.translation.len()
            {
                existing.translation = entry.translation;
            }
        } else {
            self.index.insert(key, self.entries.len());
            self.entries.push(entry);
        }
    }

    /// Whether an entry with the given key exists.
    #[must_use]
    pub fn contains(&self, context: &str, original: &str) -> bool {
        self.index.contains_key(&(context.to_string(), original.to_string()))
    }

    /// Look up an entry by key.
    #[must_use]
    pub fn get(&self, context: &str, original: &str) -> Option<&TranslationEntry> {
        self.index
            .get(&(context.to_string(), original.to_string()))
            .and_then(|&slot| self.entries.get(slot))
    }

    /// Iterate entries in insertion order.
    pub fn entries(&self) -> impl Iterator<Item = &TranslationEntry> {
        self.entries.iter()
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Declare the catalog language (ISO form, e.g. `de_DE`).
    pub fn set_language(&mut self, language: impl Into<String>) {
        self.language = Some(language.into());
    }

    /// The declared catalog language, if set.
    #[must_use]
    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }
}
