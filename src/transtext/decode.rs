//! TRANSTEXT CSV テキストをカタログへ読み込む

use crate::catalog::{
    C_FORMAT_FLAG,
    Catalog,
    TranslationEntry,
};
use crate::locale::{
    ENGLISH_TAG,
    LocaleResolver,
};
use crate::transtext::error::FormatError;

/// Decode TRANSTEXT CSV text into a [`Catalog`].
///
/// Every non-blank line must be a quoted three-field record, the
/// `PRIMARY_LANGID` directive, or recognized boilerplate (`TRANSTEXT` header,
/// column-header line, section markers); anything else fails the whole
/// decode. In source-language mode the translation column is ignored and the
/// resulting catalog language is forced to the canonical English tag.
///
/// # Errors
/// Returns [`FormatError`] if:
/// - A line is malformed (the error carries its 1-based number and content)
/// - The `PRIMARY_LANGID` directive is missing or duplicated
/// - The numeric locale id cannot be resolved for the requested mode
pub fn decode(
    text: &str,
    is_source_language: bool,
    resolver: &LocaleResolver,
) -> Result<Catalog, FormatError> {
    let mut catalog = Catalog::new();
    let mut primary_lang_id: Option<u32> = None;

    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let normalized = text.replace("\r\n", "\n").replace('\r', "\n");

    for (index, raw_line) in normalized.split('\n').enumerate() {
        let line = raw_line.trim();
        if line.is_empty() {
            continue;
        }

        if line.starts_with('"') {
            let Some(entry) = parse_record_line(line, is_source_language) else {
                return Err(FormatError::BadLine {
                    line: index + 1,
                    content: raw_line.to_string(),
                });
            };
            catalog.upsert(entry);
        } else if let Some(id) = parse_primary_langid(line) {
            if primary_lang_id.is_some() {
                return Err(FormatError::DuplicateLangId {
                    line: index + 1,
                    content: raw_line.to_string(),
                });
            }
            primary_lang_id = Some(id);
        } else if !is_boilerplate(line) {
            return Err(FormatError::BadLine { line: index + 1, content: raw_line.to_string() });
        }
    }

    let id = primary_lang_id.ok_or(FormatError::MissingLangId)?;
    let iso = resolver.to_iso(id);

    let language = if is_source_language {
        // ソース言語モードでは英語以外の id を拒否し、タグは常に `en` に固定する
        match iso {
            Some(tag) if tag != ENGLISH_TAG => return Err(FormatError::SourceLangId(id)),
            _ => ENGLISH_TAG,
        }
    } else {
        iso.ok_or(FormatError::UnknownLangId(id))?
    };
    catalog.set_language(language);
    tracing::debug!(entries = catalog.len(), language, "decoded TRANSTEXT document");

    Ok(catalog)
}

/// Parse a quoted record line into an entry, running the format-flag
/// heuristic on the original text.
///
/// The three tab-separated fields are positional: original text, translation
/// candidate (dropped in source mode), context. Each field must be wrapped in
/// quote characters. `None` means invalid field structure.
fn parse_record_line(line: &str, is_source_language: bool) -> Option<TranslationEntry> {
    let chunks: Vec<&str> = line.split('\t').collect();
    let [original, translation, context] = chunks.as_slice() else {
        return None;
    };

    let original = unquote_field(original)?;
    let translation = unquote_field(translation)?;
    let context = unquote_field(context)?;

    let mut entry = TranslationEntry {
        context,
        translation: if is_source_language { String::new() } else { translation },
        flags: Vec::new(),
        original,
    };
    if has_format_specifier(&entry.original) {
        entry.add_flag(C_FORMAT_FLAG);
    }
    Some(entry)
}

/// Strip the surrounding quote characters and apply escape substitutions.
fn unquote_field(field: &str) -> Option<String> {
    if field.len() < 2 || !field.starts_with('"') || !field.ends_with('"') {
        return None;
    }
    field.get(1..field.len() - 1).map(unescape)
}

/// Replace the literal two-character sequences `\t`, `\r`, `\n` with the
/// corresponding control characters. Any other backslash passes through
/// unchanged, and the character after it may still start a new sequence.
fn unescape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.peek() {
                Some('t') => {
                    chars.next();
                    out.push('\t');
                }
                Some('r') => {
                    chars.next();
                    out.push('\r');
                }
                Some('n') => {
                    chars.next();
                    out.push('\n');
                }
                _ => out.push('\\'),
            }
        } else {
            out.push(c);
        }
    }
    out
}

/// Parse a `PRIMARY_LANGID <digits>` directive.
fn parse_primary_langid(line: &str) -> Option<u32> {
    let rest = line.strip_prefix("PRIMARY_LANGID")?;
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }
    let digits = rest.trim_start();
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

/// Recognized data-free lines: the `TRANSTEXT <version>` header, the fixed
/// column-header line and the two section markers.
fn is_boilerplate(line: &str) -> bool {
    if line == "NEED_TRANSLATION" || line == "TRANSLATED" {
        return true;
    }

    if let Some(rest) = line.strip_prefix("TRANSTEXT")
        && rest.starts_with(char::is_whitespace)
    {
        let version = rest.trim_start();
        let mut chars = version.chars();
        if chars.next().is_some_and(|c| c.is_ascii_digit())
            && chars.all(|c| c.is_ascii_digit() || c == '.')
        {
            return true;
        }
    }

    let words: Vec<&str> = line.split_whitespace().collect();
    words == ["English", "Text", "Translated", "Text", "Item", "Type"]
}

/// Heuristic: does the original text contain a `%` conversion specifier for
/// `d`, `s`, `c` or `f` (not preceded by another `%`, so `%%` escapes are
/// skipped), or a precision-qualified float specifier like `%5.2f`?
fn has_format_specifier(text: &str) -> bool {
    let bytes = text.as_bytes();
    for (i, &b) in bytes.iter().enumerate() {
        if b != b'%' || (i > 0 && bytes.get(i - 1) == Some(&b'%')) {
            continue;
        }
        if matches!(bytes.get(i + 1), Some(b'd' | b's' | b'c' | b'f')) {
            return true;
        }
        if bytes.get(i + 1..).is_some_and(is_precision_float) {
            return true;
        }
    }
    false
}

/// Matches `<digits>*.<digits>+f` immediately after a `%`.
fn is_precision_float(bytes: &[u8]) -> bool {
    let mut i = 0;
    while bytes.get(i).is_some_and(u8::is_ascii_digit) {
        i += 1;
    }
    if bytes.get(i) != Some(&b'.') {
        return false;
    }
    i += 1;
    let fraction_start = i;
    while bytes.get(i).is_some_and(u8::is_ascii_digit) {
        i += 1;
    }
    i > fraction_start && bytes.get(i) == Some(&b'f')
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use googletest::prelude::*;
    use rstest::*;

    use super::*;

    const HEADER: &str = "English Text\tTranslated Text\tItem Type";

    fn decode_lines(lines: &[&str], is_source_language: bool) -> Result<Catalog, FormatError> {
        decode(&lines.join("\n"), is_source_language, &LocaleResolver::new())
    }

    #[rstest]
    fn decodes_minimal_source_document() {
        let catalog = decode_lines(
            &["TRANSTEXT 7.0.0.0", "PRIMARY_LANGID 1033", HEADER, "\"Hello\"\t\"\"\t\"UI\""],
            true,
        )
        .unwrap();

        assert_that!(catalog.len(), eq(1));
        assert_that!(catalog.language(), some(eq("en")));
        let entry = catalog.get("UI", "Hello").unwrap();
        assert_that!(entry.translation, eq(""));
        assert_that!(entry.has_translation(), eq(false));
    }

    #[rstest]
    fn decodes_translated_document() {
        let catalog = decode_lines(
            &[
                "TRANSTEXT 7.0.0.0",
                "PRIMARY_LANGID 1031",
                HEADER,
                "TRANSLATED",
                "\"Open\"\t\"Öffnen\"\t\"MENUITEM\"",
            ],
            false,
        )
        .unwrap();

        assert_that!(catalog.language(), some(eq("de")));
        assert_that!(catalog.get("MENUITEM", "Open").unwrap().translation, eq("Öffnen"));
    }

    /// 重複キーはマージされ、長い方の翻訳が残る。順序には依存しない。
    #[rstest]
    #[case("\"abc\"", "\"abcdefg\"")]
    #[case("\"abcdefg\"", "\"abc\"")]
    fn duplicate_records_merge_to_longer_translation(#[case] first: &str, #[case] second: &str) {
        let catalog = decode_lines(
            &[
                "PRIMARY_LANGID 1036",
                &format!("\"Hello\"\t{first}\t\"UI\""),
                &format!("\"Hello\"\t{second}\t\"UI\""),
            ],
            false,
        )
        .unwrap();

        assert_that!(catalog.len(), eq(1));
        assert_that!(catalog.get("UI", "Hello").unwrap().translation, eq("abcdefg"));
    }

    #[rstest]
    #[case::plain_d("Found %d items", true)]
    #[case::plain_s("Hello %s", true)]
    #[case::plain_c("Key %c pressed", true)]
    #[case::plain_f("Value %f", true)]
    #[case::escaped_percent("100%% done", false)]
    #[case::precision_float("Value: %.2f", true)]
    #[case::width_precision_float("Value: %5.2f", true)]
    #[case::width_only("Value: %5f", false)]
    #[case::no_specifier("Hello world", false)]
    #[case::percent_other("50% off", false)]
    fn format_flag_heuristic(#[case] original: &str, #[case] flagged: bool) {
        let catalog = decode_lines(
            &["PRIMARY_LANGID 1033", &format!("\"{original}\"\t\"\"\t\"UI\"")],
            true,
        )
        .unwrap();

        let entry = catalog.get("UI", original).unwrap();
        assert_that!(entry.has_flag(C_FORMAT_FLAG), eq(flagged));
    }

    #[rstest]
    fn escape_sequences_become_control_characters() {
        let catalog = decode_lines(
            &["PRIMARY_LANGID 1036", "\"Line1\\nLine2\\tEnd\"\t\"a\\rb\"\t\"X\""],
            false,
        )
        .unwrap();

        let entry = catalog.get("X", "Line1\nLine2\tEnd").unwrap();
        assert_that!(entry.translation, eq("a\rb"));
    }

    #[rstest]
    fn backslash_before_unknown_character_passes_through() {
        assert_that!(unescape("a\\xb"), eq("a\\xb"));
        // 連続したバックスラッシュ: 2 文字目が新しいシーケンスを開始できる
        assert_that!(unescape("a\\\\nb"), eq("a\\\nb"));
    }

    #[rstest]
    fn source_mode_ignores_translation_column() {
        let catalog =
            decode_lines(&["PRIMARY_LANGID 1033", "\"Hello\"\t\"Bonjour\"\t\"UI\""], true)
                .unwrap();

        assert_that!(catalog.get("UI", "Hello").unwrap().translation, eq(""));
    }

    #[rstest]
    fn source_mode_accepts_unknown_id_and_forces_english() {
        let catalog = decode_lines(&["PRIMARY_LANGID 64999", "\"A\"\t\"\"\t\"\""], true).unwrap();

        assert_that!(catalog.language(), some(eq("en")));
    }

    #[rstest]
    fn source_mode_rejects_non_english_id() {
        let result = decode_lines(&["PRIMARY_LANGID 1031", "\"A\"\t\"\"\t\"\""], true);

        assert_that!(result, err(eq(&FormatError::SourceLangId(1031))));
    }

    #[rstest]
    fn unknown_id_fails_outside_source_mode() {
        let result = decode_lines(&["PRIMARY_LANGID 64999", "\"A\"\t\"x\"\t\"\""], false);

        assert_that!(result, err(eq(&FormatError::UnknownLangId(64999))));
    }

    #[rstest]
    fn duplicate_directive_cites_second_line() {
        let result =
            decode_lines(&["PRIMARY_LANGID 1033", "PRIMARY_LANGID 1033", HEADER], true);

        assert_that!(
            result,
            err(eq(&FormatError::DuplicateLangId {
                line: 2,
                content: "PRIMARY_LANGID 1033".to_string()
            }))
        );
    }

    #[rstest]
    fn missing_directive_is_fatal() {
        let result = decode_lines(&[HEADER, "\"Hello\"\t\"\"\t\"UI\""], true);

        assert_that!(result, err(eq(&FormatError::MissingLangId)));
    }

    #[rstest]
    #[case::two_fields("\"Hello\"\t\"UI\"")]
    #[case::four_fields("\"a\"\t\"b\"\t\"c\"\t\"d\"")]
    #[case::unquoted_field("\"Hello\"\tworld\t\"UI\"")]
    #[case::bare_quote("\"\t\"\"\t\"\"")]
    #[case::random_text("not a record")]
    #[case::header_without_version("TRANSTEXT")]
    fn malformed_lines_carry_position_and_content(#[case] bad: &str) {
        let result = decode_lines(&["PRIMARY_LANGID 1033", bad], true);

        assert_that!(
            result,
            err(eq(&FormatError::BadLine { line: 2, content: bad.to_string() }))
        );
    }

    #[rstest]
    fn blank_lines_and_boilerplate_are_skipped() {
        let catalog = decode_lines(
            &[
                "TRANSTEXT 7.0.0.0",
                "",
                "PRIMARY_LANGID 1033",
                "   ",
                HEADER,
                "NEED_TRANSLATION",
                "\"Hello\"\t\"\"\t\"UI\"",
                "TRANSLATED",
            ],
            true,
        )
        .unwrap();

        assert_that!(catalog.len(), eq(1));
    }

    /// 行末コードの混在と BOM、先頭の継続インデントを吸収できる。
    #[rstest]
    fn normalizes_newlines_bom_and_indentation() {
        let text = "\u{feff}PRIMARY_LANGID 1033\r\n\"A\"\t\"\"\t\"T\"\r  \"A\"\t\"\"\t\"T\"\n";

        let catalog = decode(text, true, &LocaleResolver::new()).unwrap();

        assert_that!(catalog.len(), eq(1));
        assert_that!(catalog.language(), some(eq("en")));
    }

    #[rstest]
    fn directive_tolerates_tab_separator() {
        assert_that!(parse_primary_langid("PRIMARY_LANGID\t1033"), some(eq(1033)));
        assert_that!(parse_primary_langid("PRIMARY_LANGID1033"), none());
        assert_that!(parse_primary_langid("PRIMARY_LANGID 10a3"), none());
    }

    #[rstest]
    fn header_line_tolerates_flexible_whitespace() {
        assert_that!(is_boilerplate("English  Text\tTranslated Text  Item\tType"), eq(true));
        assert_that!(is_boilerplate("English Text"), eq(false));
    }
}
