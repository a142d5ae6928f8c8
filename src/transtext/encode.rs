//! カタログを TRANSTEXT CSV テキストへ書き出す

use crate::catalog::{
    Catalog,
    TranslationEntry,
};
use crate::locale::LocaleResolver;
use crate::transtext::error::EncodeError;

/// Encode a [`Catalog`] into TRANSTEXT CSV text.
///
/// Output order is fixed: `TRANSTEXT <version>` header, `PRIMARY_LANGID`
/// directive, column-header line, then untranslated entries under a
/// `NEED_TRANSLATION` marker followed by translated entries under a
/// `TRANSLATED` marker (each marker omitted when its group is empty).
/// The result carries a UTF-8 BOM and a trailing line break.
///
/// # Errors
/// Returns [`EncodeError`] if the version string is not dotted-numeric, the
/// catalog has no language, or the language cannot be resolved to a numeric
/// locale id.
pub fn encode(
    catalog: &Catalog,
    version: &str,
    resolver: &LocaleResolver,
) -> Result<String, EncodeError> {
    if !is_valid_version(version) {
        return Err(EncodeError::InvalidVersion(version.to_string()));
    }
    let language = catalog.language().ok_or(EncodeError::MissingLanguage)?;
    let id = resolver
        .to_numeric(language)
        .ok_or_else(|| EncodeError::UnknownLanguage(language.to_string()))?;

    let mut lines = vec![
        format!("TRANSTEXT {version}"),
        format!("PRIMARY_LANGID {id}"),
        "English Text\tTranslated Text\tItem Type".to_string(),
    ];

    let mut need_translation: Vec<String> = Vec::new();
    let mut translated: Vec<String> = Vec::new();
    let mut previous: Option<&TranslationEntry> = None;

    for entry in catalog.entries() {
        let mut serialized = format!(
            "\"{}\"\t\"{}\"\t\"{}\"",
            escape(&entry.original),
            escape(&entry.translation),
            escape(&entry.context),
        );
        // 直前のエントリと原文・翻訳状態が同じ行は「前行の続き」として
        // 2 スペースでインデントする (見た目だけの印で、再パース時は無視される)
        if let Some(prev) = previous
            && prev.has_translation() == entry.has_translation()
            && prev.original == entry.original
        {
            serialized.insert_str(0, "  ");
        }

        if entry.has_translation() {
            if translated.is_empty() {
                translated.push("TRANSLATED".to_string());
            }
            translated.push(serialized);
        } else {
            if need_translation.is_empty() {
                need_translation.push("NEED_TRANSLATION".to_string());
            }
            need_translation.push(serialized);
        }
        previous = Some(entry);
    }

    lines.append(&mut need_translation);
    lines.append(&mut translated);

    Ok(format!("\u{feff}{}\n", lines.join("\n")))
}

/// The format version must match `digits(.digits)*`.
fn is_valid_version(version: &str) -> bool {
    !version.is_empty()
        && version
            .split('.')
            .all(|part| !part.is_empty() && part.chars().all(|c| c.is_ascii_digit()))
}

/// Replace control characters with the literal two-character sequences the
/// dialect uses (the reverse of the decode substitutions).
fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            '\n' => out.push_str("\\n"),
            _ => out.push(c),
        }
    }
    out
}
