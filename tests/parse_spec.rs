use std::collections::HashSet;

use jmdict_reader::{entities, parse, JmdictError};

/// Wrap entry markup in a minimal JMdict document.
fn document(entries: &str) -> String {
    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<JMdict>\n{entries}\n</JMdict>\n"
    )
}

const MINIMAL_ENTRY: &str = "\
<entry>
<ent_seq>1582710</ent_seq>
<k_ele>
<keb>日本</keb>
</k_ele>
<r_ele>
<reb>にほん</reb>
</r_ele>
<sense>
<pos>&n;</pos>
<gloss>Japan</gloss>
</sense>
</entry>";

#[test]
fn entity_table_is_complete_and_collision_free() {
    let mut seen = HashSet::new();
    for (name, expansion) in entities::all() {
        assert_eq!(
            entities::resolve(name),
            Some(expansion),
            "lookup failed for {name}"
        );
        assert!(seen.insert(name), "duplicate entity key {name}");
    }

    // Spot checks against the documented expansions.
    assert_eq!(entities::resolve("n"), Some("noun common"));
    assert_eq!(entities::resolve("v1"), Some("ichidan verb"));
    assert_eq!(entities::resolve("v5k"), Some("godan verb"));
    assert_eq!(entities::resolve("ksb"), Some("kansai-ben"));
    assert_eq!(entities::resolve("comp"), Some("computer terminology"));
    assert_eq!(entities::resolve("med"), Some("medicine, etc. term"));
    assert_eq!(entities::resolve("col"), Some("colloquialism"));
    assert_eq!(
        entities::resolve("hon"),
        Some("honorific or respectful (sonkeigo) language")
    );
    // The one non-descriptive entry: a literal double quote.
    assert_eq!(entities::resolve("quote"), Some("\""));

    // Case-sensitive, no normalization.
    assert_eq!(entities::resolve("N"), None);
    assert_eq!(entities::resolve("nonexistent"), None);
}

#[test]
fn minimal_document_resolves_pos_entity() {
    let dictionary = parse(document(MINIMAL_ENTRY).as_bytes()).expect("parse minimal document");

    assert_eq!(dictionary.entries.len(), 1);
    let entry = &dictionary.entries[0];
    assert_eq!(entry.sequence, 1582710);
    assert_eq!(entry.kanji.len(), 1);
    assert_eq!(entry.kanji[0].expression, "日本");
    assert_eq!(entry.readings.len(), 1);
    assert_eq!(entry.readings[0].reading, "にほん");
    assert_eq!(entry.senses.len(), 1);
    assert_eq!(entry.senses[0].parts_of_speech, vec!["noun common"]);
    assert_eq!(entry.senses[0].glosses[0].content, "Japan");
}

#[test]
fn full_entry_decodes_every_element() {
    let body = "\
<entry>
<ent_seq>1000225</ent_seq>
<k_ele>
<keb>明白</keb>
<ke_inf>&ateji;</ke_inf>
<ke_pri>news1</ke_pri>
<ke_pri>nf10</ke_pri>
</k_ele>
<k_ele>
<keb>餡</keb>
</k_ele>
<r_ele>
<reb>あからさま</reb>
<re_restr>明白</re_restr>
<re_inf>&gikun;</re_inf>
<re_pri>news1</re_pri>
</r_ele>
<r_ele>
<reb>メイハク</reb>
<re_nokanji/>
</r_ele>
<sense>
<stagk>明白</stagk>
<stagr>あからさま</stagr>
<pos>&adj-na;</pos>
<pos>&adj-no;</pos>
<xref>明らか</xref>
<ant>不明</ant>
<field>&ling;</field>
<misc>&uk;</misc>
<s_inf>usually as 〜に</s_inf>
<dial>&ksb;</dial>
<lsource xml:lang=\"fre\" ls_type=\"part\" ls_wasei=\"y\">clair</lsource>
<gloss g_type=\"lit\">plain</gloss>
<gloss>frank</gloss>
</sense>
<sense>
<pos>&n;</pos>
<gloss xml:lang=\"dut\" g_gend=\"masc\">duidelijk</gloss>
</sense>
</entry>";

    let dictionary = parse(document(body).as_bytes()).expect("parse full entry");
    assert_eq!(dictionary.entries.len(), 1);
    let entry = &dictionary.entries[0];

    assert_eq!(entry.sequence, 1000225);

    assert_eq!(entry.kanji.len(), 2);
    assert_eq!(entry.kanji[0].expression, "明白");
    assert_eq!(entry.kanji[0].information, vec!["ateji (phonetic) reading"]);
    assert_eq!(entry.kanji[0].priorities, vec!["news1", "nf10"]);
    assert_eq!(entry.kanji[1].expression, "餡");

    assert_eq!(entry.readings.len(), 2);
    let first = &entry.readings[0];
    assert_eq!(first.reading, "あからさま");
    assert!(!first.no_kanji);
    assert_eq!(first.restrictions, vec!["明白"]);
    assert_eq!(
        first.information,
        vec!["gikun (meaning as reading) or jukujikun (special kanji reading)"]
    );
    assert_eq!(first.priorities, vec!["news1"]);
    assert!(entry.readings[1].no_kanji);

    assert_eq!(entry.senses.len(), 2);
    let sense = &entry.senses[0];
    assert_eq!(sense.restricted_kanji, vec!["明白"]);
    assert_eq!(sense.restricted_readings, vec!["あからさま"]);
    assert_eq!(
        sense.parts_of_speech,
        vec!["adjective adjectival-noun", "adjective no-adjective"]
    );
    assert_eq!(sense.references, vec!["明らか"]);
    assert_eq!(sense.antonyms, vec!["不明"]);
    assert_eq!(sense.fields, vec!["linguistics terminology"]);
    assert_eq!(sense.misc, vec!["word usually written using kana alone"]);
    assert_eq!(sense.information, vec!["usually as 〜に"]);
    assert_eq!(sense.dialects, vec!["kansai-ben"]);

    assert_eq!(sense.source_languages.len(), 1);
    let source = &sense.source_languages[0];
    assert_eq!(source.content, "clair");
    assert_eq!(source.language.as_deref(), Some("fre"));
    assert_eq!(source.source_type.as_deref(), Some("part"));
    assert!(source.wasei);

    assert_eq!(sense.glosses.len(), 2);
    assert_eq!(sense.glosses[0].content, "plain");
    assert_eq!(sense.glosses[0].gloss_type.as_deref(), Some("lit"));
    assert_eq!(sense.glosses[1].content, "frank");
    assert!(sense.glosses[1].gloss_type.is_none());

    let dutch = &entry.senses[1].glosses[0];
    assert_eq!(dutch.content, "duidelijk");
    assert_eq!(dutch.language.as_deref(), Some("dut"));
    assert_eq!(dutch.gender.as_deref(), Some("masc"));
}

#[test]
fn entities_resolve_inside_attribute_values() {
    let body = "\
<entry>
<ent_seq>3</ent_seq>
<r_ele><reb>テスト</reb></r_ele>
<sense>
<gloss g_type=\"&col;\">test gloss</gloss>
</sense>
</entry>";

    let dictionary = parse(document(body).as_bytes()).unwrap();
    let gloss = &dictionary.entries[0].senses[0].glosses[0];
    assert_eq!(gloss.gloss_type.as_deref(), Some("colloquialism"));
    assert_eq!(gloss.content, "test gloss");
}

#[test]
fn character_and_predefined_references_resolve_in_text() {
    let body = "\
<entry>
<ent_seq>4</ent_seq>
<r_ele><reb>reading</reb></r_ele>
<sense>
<gloss>&#x65E5;&#26412; &amp; more &lt;x&gt;</gloss>
<s_inf>&quote;quoted&quote;</s_inf>
</sense>
</entry>";

    let dictionary = parse(document(body).as_bytes()).unwrap();
    let sense = &dictionary.entries[0].senses[0];
    assert_eq!(sense.glosses[0].content, "日本 & more <x>");
    assert_eq!(sense.information, vec!["\"quoted\""]);
}

#[test]
fn undefined_entity_fails_without_a_document() {
    let body = "\
<entry>
<ent_seq>5</ent_seq>
<r_ele><reb>reading</reb></r_ele>
<sense><pos>&zzz;</pos><gloss>never seen</gloss></sense>
</entry>";

    let err = parse(document(body).as_bytes()).unwrap_err();
    match err {
        JmdictError::UndefinedEntity { name, .. } => assert_eq!(name, "zzz"),
        other => panic!("expected UndefinedEntity, got {other:?}"),
    }
}

#[test]
fn stray_ampersand_is_absorbed_by_lenient_parsing() {
    let body = "\
<entry>
<ent_seq>6</ent_seq>
<r_ele><reb>フィッシュ</reb></r_ele>
<sense><gloss>fish & chips</gloss></sense>
</entry>";

    let dictionary = parse(document(body).as_bytes()).unwrap();
    assert_eq!(
        dictionary.entries[0].senses[0].glosses[0].content,
        "fish & chips"
    );
}

#[test]
fn parsing_is_idempotent() {
    let input = document(MINIMAL_ENTRY);
    let first = parse(input.as_bytes()).unwrap();
    let second = parse(input.as_bytes()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn empty_stream_fails() {
    let err = parse(&b""[..]).unwrap_err();
    assert!(
        matches!(err, JmdictError::UnexpectedEof { .. }),
        "got {err:?}"
    );
}

#[test]
fn truncated_document_fails() {
    let full = document(MINIMAL_ENTRY);
    // Cut off mid-entry, before the closing tags.
    let truncated = &full[..full.find("<gloss>").unwrap()];
    let err = parse(truncated.as_bytes()).unwrap_err();
    assert!(
        matches!(err, JmdictError::UnexpectedEof { .. }),
        "got {err:?}"
    );
}

#[test]
fn unknown_elements_are_skipped() {
    let body = "\
<entry>
<ent_seq>7</ent_seq>
<audit><upd_date>2010-06-03</upd_date><upd_detl>added</upd_detl></audit>
<r_ele><reb>かな</reb></r_ele>
<sense><gloss>kana</gloss></sense>
</entry>
<unknown_block><nested/></unknown_block>";

    let dictionary = parse(document(body).as_bytes()).unwrap();
    assert_eq!(dictionary.entries.len(), 1);
    assert_eq!(dictionary.entries[0].readings[0].reading, "かな");
}

#[test]
fn doctype_with_internal_subset_is_ignored() {
    let input = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>
<!DOCTYPE JMdict [
<!ELEMENT JMdict (entry*)>
<!ENTITY n \"noun (common) (futsuumeishi)\">
]>
<JMdict>
<entry>
<ent_seq>8</ent_seq>
<r_ele><reb>めい</reb></r_ele>
<sense><pos>&n;</pos><gloss>test</gloss></sense>
</entry>
</JMdict>";

    let dictionary = parse(input.as_bytes()).unwrap();
    assert_eq!(dictionary.entries.len(), 1);
    // Resolution uses the fixed table, not the inline DTD text.
    assert_eq!(
        dictionary.entries[0].senses[0].parts_of_speech,
        vec!["noun common"]
    );
}

#[test]
fn multiple_entries_decode_in_document_order() {
    let body = "\
<entry>
<ent_seq>100</ent_seq>
<r_ele><reb>いち</reb></r_ele>
<sense><gloss>one</gloss></sense>
</entry>
<entry>
<ent_seq>200</ent_seq>
<r_ele><reb>に</reb></r_ele>
<sense><gloss>two</gloss></sense>
</entry>
<entry>
<ent_seq>300</ent_seq>
<r_ele><reb>さん</reb></r_ele>
<sense><gloss>three</gloss></sense>
</entry>";

    let dictionary = parse(document(body).as_bytes()).unwrap();
    let sequences: Vec<u64> = dictionary.entries.iter().map(|e| e.sequence).collect();
    assert_eq!(sequences, vec![100, 200, 300]);
}
