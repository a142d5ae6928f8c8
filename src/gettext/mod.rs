//! gettext PO テキストとカタログの橋渡し
//!
//! 外部の翻訳サービスとやり取りする PO 形式を読み書きする。扱うのは単数形
//! エントリのみ (msgctxt / msgid / msgstr、フラグ行、ヘッダ疑似エントリ)。

use thiserror::Error;

use crate::catalog::{
    Catalog,
    TranslationEntry,
};

/// Defines errors that may occur while parsing PO text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PoError {
    /// A line that is neither a keyword line, a string continuation, a
    /// comment nor blank.
    #[error("Bad gettext line {line}:\n{content}")]
    BadLine {
        /// 1-based line number.
        line: usize,
        /// The offending line, untrimmed.
        content: String,
    },
}

/// Render a catalog as PO text.
///
/// The header pseudo-entry carries the catalog language (when set) and the
/// UTF-8 content type; each entry renders as `msgctxt` (omitted when the
/// context is empty), `msgid`, `msgstr` plus a flag line when flags exist.
#[must_use]
pub fn render(catalog: &Catalog) -> String {
    let mut out = String::new();

    out.push_str("msgid \"\"\n");
    out.push_str("msgstr \"\"\n");
    out.push_str("\"MIME-Version: 1.0\\n\"\n");
    out.push_str("\"Content-Type: text/plain; charset=UTF-8\\n\"\n");
    out.push_str("\"Content-Transfer-Encoding: 8bit\\n\"\n");
    if let Some(language) = catalog.language() {
        out.push_str(&format!("\"Language: {language}\\n\"\n"));
    }

    for entry in catalog.entries() {
        out.push('\n');
        if !entry.flags.is_empty() {
            out.push_str(&format!("#, {}\n", entry.flags.join(", ")));
        }
        if !entry.context.is_empty() {
            out.push_str(&format!("msgctxt \"{}\"\n", escape(&entry.context)));
        }
        out.push_str(&format!("msgid \"{}\"\n", escape(&entry.original)));
        out.push_str(&format!("msgstr \"{}\"\n", escape(&entry.translation)));
    }

    out
}

/// Parse PO text into a catalog.
///
/// Untranslated entries (empty `msgstr`) are kept: the CSV encoder needs
/// them for its `NEED_TRANSLATION` group. The header pseudo-entry (empty
/// `msgid` without context) is not turned into an entry; its `Language:`
/// field becomes the catalog language when present.
///
/// # Errors
/// Returns [`PoError::BadLine`] for any line that cannot be classified,
/// including plural-form keywords, which this tool does not handle.
pub fn parse(text: &str) -> Result<Catalog, PoError> {
    let mut catalog = Catalog::new();
    let mut language: Option<String> = None;
    let mut draft = Draft::default();

    for (index, raw_line) in text.lines().enumerate() {
        let line = raw_line.trim();

        if line.is_empty() {
            draft.flush(&mut catalog, &mut language);
            continue;
        }

        if let Some(rest) = line.strip_prefix("#,") {
            for flag in rest.split(',') {
                let flag = flag.trim();
                if !flag.is_empty() {
                    draft.flags.push(flag.to_string());
                }
            }
            continue;
        }
        if line.starts_with('#') {
            // translator / reference / obsolete comments carry no data here
            continue;
        }

        let bad_line =
            || PoError::BadLine { line: index + 1, content: raw_line.to_string() };

        if let Some(rest) = line.strip_prefix("msgctxt ") {
            if draft.msgstr.is_some() {
                draft.flush(&mut catalog, &mut language);
            }
            draft.context = Some(unquote(rest).ok_or_else(bad_line)?);
            draft.field = Field::Context;
        } else if let Some(rest) = line.strip_prefix("msgid ") {
            if draft.msgstr.is_some() {
                draft.flush(&mut catalog, &mut language);
            }
            draft.msgid = Some(unquote(rest).ok_or_else(bad_line)?);
            draft.field = Field::Id;
        } else if let Some(rest) = line.strip_prefix("msgstr ") {
            draft.msgstr = Some(unquote(rest).ok_or_else(bad_line)?);
            draft.field = Field::Str;
        } else if line.starts_with('"') {
            let continued = unquote(line).ok_or_else(bad_line)?;
            match draft.field {
                Field::Context => draft.context.get_or_insert_default().push_str(&continued),
                Field::Id => draft.msgid.get_or_insert_default().push_str(&continued),
                Field::Str => draft.msgstr.get_or_insert_default().push_str(&continued),
                Field::None => return Err(bad_line()),
            }
        } else {
            return Err(bad_line());
        }
    }
    draft.flush(&mut catalog, &mut language);

    if let Some(language) = language {
        catalog.set_language(language);
    }

    Ok(catalog)
}

/// Which multi-line string the parser is currently extending.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum Field {
    #[default]
    None,
    Context,
    Id,
    Str,
}

/// One PO entry under construction.
#[derive(Debug, Default)]
struct Draft {
    context: Option<String>,
    msgid: Option<String>,
    msgstr: Option<String>,
    flags: Vec<String>,
    field: Field,
}

impl Draft {
    /// Move the collected entry into the catalog and reset.
    ///
    /// The header pseudo-entry is recognized here and only contributes its
    /// `Language:` value.
    fn flush(&mut self, catalog: &mut Catalog, language: &mut Option<String>) {
        let context = self.context.take();
        let msgid = self.msgid.take();
        let msgstr = self.msgstr.take();
        let flags = std::mem::take(&mut self.flags);
        self.field = Field::None;

        let Some(msgid) = msgid else {
            return;
        };

        if msgid.is_empty() && context.is_none() {
            let header = msgstr.unwrap_or_default();
            for header_line in header.lines() {
                if let Some(value) = header_line.strip_prefix("Language:") {
                    let value = value.trim();
                    if !value.is_empty() {
                        *language = Some(value.to_string());
                    }
                }
            }
            return;
        }

        catalog.upsert(TranslationEntry {
            context: context.unwrap_or_default(),
            original: msgid,
            translation: msgstr.unwrap_or_default(),
            flags,
        });
    }
}

/// Escape a string for a PO quoted literal.
fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            _ => out.push(c),
        }
    }
    out
}

/// Strip surrounding quotes and unescape a PO quoted literal.
///
/// Single pass so that `\\n` stays a literal backslash + `n` instead of
/// being double-unescaped into a newline. `None` means the payload is not a
/// quoted string.
fn unquote(raw: &str) -> Option<String> {
    let raw = raw.trim();
    if raw.len() < 2 || !raw.starts_with('"') || !raw.ends_with('"') {
        return None;
    }
    let inner = raw.get(1..raw.len() - 1)?;

    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.next() {
                Some('n') => out.push('\n'),
                Some('t') => out.push('\t'),
                Some('r') => out.push('\r'),
                Some('"') => out.push('"'),
                Some('\\') => out.push('\\'),
                Some(other) => {
                    out.push('\\');
                    out.push(other);
                }
                None => out.push('\\'),
            }
        } else {
            out.push(c);
        }
    }
    Some(out)
}
