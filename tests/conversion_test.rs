//! カタログ変換のエンドツーエンドテスト

#![allow(clippy::unwrap_used)]
#![allow(missing_docs)]

use googletest::prelude::*;
use rstest::rstest;
use transtext_sync::catalog::C_FORMAT_FLAG;
use transtext_sync::locale::LocaleResolver;
use transtext_sync::{
    gettext,
    transtext,
};

const SOURCE_CSV: &str = "\u{feff}TRANSTEXT 7.0.0.0\n\
    PRIMARY_LANGID 1033\n\
    English Text\tTranslated Text\tItem Type\n\
    NEED_TRANSLATION\n\
    \"Hello\"\t\"\"\t\"UI\"\n\
    \"Found %d items\"\t\"\"\t\"UI\"\n\
    \"Cancel\"\t\"\"\t\"BUTTON\"\n";

#[rstest]
fn source_round_trip_preserves_keys_and_language() {
    let resolver = LocaleResolver::new();

    let first = transtext::decode(SOURCE_CSV, true, &resolver).unwrap();
    let encoded = transtext::encode(&first, "7.0.0.0", &resolver).unwrap();
    let second = transtext::decode(&encoded, true, &resolver).unwrap();

    assert_that!(second.len(), eq(first.len()));
    assert_that!(second.language(), some(eq("en")));
    for entry in first.entries() {
        assert_that!(second.get(&entry.context, &entry.original), some(anything()));
    }

    // 2 回目のエンコードはバイト単位で安定している
    assert_that!(transtext::encode(&second, "7.0.0.0", &resolver).unwrap(), eq(encoded.as_str()));
}

#[rstest]
fn minimal_document_encodes_to_the_exact_dialect_lines() {
    let resolver = LocaleResolver::new();
    let csv = "TRANSTEXT 7.0.0.0\nPRIMARY_LANGID 1033\n\
        English Text\tTranslated Text\tItem Type\n\"Hello\"\t\"\"\t\"UI\"\n";

    let catalog = transtext::decode(csv, true, &resolver).unwrap();

    assert_that!(catalog.len(), eq(1));
    let entry = catalog.get("UI", "Hello").unwrap();
    assert_that!(entry.translation, eq(""));

    let encoded = transtext::encode(&catalog, "7.0.0.0", &resolver).unwrap();
    assert_that!(
        encoded,
        eq("\u{feff}TRANSTEXT 7.0.0.0\n\
            PRIMARY_LANGID 1033\n\
            English Text\tTranslated Text\tItem Type\n\
            NEED_TRANSLATION\n\
            \"Hello\"\t\"\"\t\"UI\"\n")
    );
}

/// CSV → PO → CSV のパイプライン (download コマンドの逆向きと同じ経路)。
#[rstest]
fn csv_to_po_to_csv_pipeline_preserves_catalog() {
    let resolver = LocaleResolver::new();
    let translated_csv = "TRANSTEXT 7.0.0.0\nPRIMARY_LANGID 1031\n\
        English Text\tTranslated Text\tItem Type\n\
        TRANSLATED\n\
        \"Open %s\"\t\"%s \u{f6}ffnen\"\t\"MENU\"\n\
        \"Close\"\t\"Schlie\u{df}en\"\t\"MENU\"\n";

    let catalog = transtext::decode(translated_csv, false, &resolver).unwrap();
    let po = gettext::render(&catalog);
    let reparsed = gettext::parse(&po).unwrap();
    let csv_again = transtext::encode(&reparsed, "7.0.0.0", &resolver).unwrap();

    assert_that!(reparsed.language(), some(eq("de")));
    let entry = reparsed.get("MENU", "Open %s").unwrap();
    assert_that!(entry.translation, eq("%s \u{f6}ffnen"));
    assert_that!(entry.has_flag(C_FORMAT_FLAG), eq(true));

    assert_that!(csv_again, contains_substring("PRIMARY_LANGID 1031"));
    assert_that!(csv_again, contains_substring("\"Close\"\t\"Schlie\u{df}en\"\t\"MENU\""));
}

/// ロケールの往復: id 1036 を読み込んで再エンコードすると 1036 に戻る。
#[rstest]
fn locale_id_survives_decode_then_encode() {
    let resolver = LocaleResolver::new();
    let csv = "PRIMARY_LANGID 1036\n\"Yes\"\t\"Oui\"\t\"\"\n";

    let catalog = transtext::decode(csv, false, &resolver).unwrap();
    let encoded = transtext::encode(&catalog, "7.0", &resolver).unwrap();

    assert_that!(encoded, contains_substring("PRIMARY_LANGID 1036"));
}

#[rstest]
fn untranslated_entries_come_back_from_po_for_the_need_translation_group() {
    let resolver = LocaleResolver::new();
    let po = concat!(
        "msgid \"\"\n",
        "msgstr \"\"\n",
        "\"Language: fr\\n\"\n",
        "\n",
        "msgid \"Done\"\n",
        "msgstr \"Fini\"\n",
        "\n",
        "msgid \"Pending\"\n",
        "msgstr \"\"\n",
    );

    let catalog = gettext::parse(po).unwrap();
    let csv = transtext::encode(&catalog, "7.0.0.0", &resolver).unwrap();

    assert_that!(csv, contains_substring("NEED_TRANSLATION\n\"Pending\"\t\"\"\t\"\""));
    assert_that!(csv, contains_substring("TRANSLATED\n\"Done\"\t\"Fini\"\t\"\""));
}
