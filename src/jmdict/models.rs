//! Data structures representing a decoded JMdict document.
//!
//! The tree mirrors the JMdict DTD: a root document owning entries, each
//! entry owning its kanji elements, reading elements and senses. Every
//! string has already had entity references resolved by the decoder, so
//! classification fields hold expansions like "noun common" rather than
//! raw codes like `n`.

/// A fully decoded JMdict document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Jmdict {
    pub entries: Vec<Entry>,
}

/// A single dictionary entry (`<entry>`).
///
/// Carries a unique sequence number, zero or more written forms, one or
/// more readings, and one or more senses.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Entry {
    /// Unique entry sequence number (`<ent_seq>`).
    pub sequence: u64,
    /// Written (kanji) forms (`<k_ele>`).
    pub kanji: Vec<KanjiElement>,
    /// Phonetic (kana) forms (`<r_ele>`).
    pub readings: Vec<ReadingElement>,
    /// Translational senses (`<sense>`).
    pub senses: Vec<Sense>,
}

/// A written form of an entry (`<k_ele>`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KanjiElement {
    /// The written form itself (`<keb>`).
    pub expression: String,
    /// Orthography notes, e.g. "word containing irregular kanji usage"
    /// (`<ke_inf>`).
    pub information: Vec<String>,
    /// Frequency-of-use priority codes such as `news1` (`<ke_pri>`).
    pub priorities: Vec<String>,
}

/// A reading of an entry (`<r_ele>`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReadingElement {
    /// The reading in kana (`<reb>`).
    pub reading: String,
    /// True if this reading cannot be regarded as a true reading of the
    /// kanji forms (`<re_nokanji/>`, an empty element).
    pub no_kanji: bool,
    /// Written forms this reading applies to; empty means all (`<re_restr>`).
    pub restrictions: Vec<String>,
    /// Reading notes (`<re_inf>`).
    pub information: Vec<String>,
    /// Frequency-of-use priority codes (`<re_pri>`).
    pub priorities: Vec<String>,
}

/// One sense of an entry (`<sense>`): a group of glosses plus the
/// classification tags that apply to them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sense {
    /// Kanji forms this sense is restricted to (`<stagk>`).
    pub restricted_kanji: Vec<String>,
    /// Readings this sense is restricted to (`<stagr>`).
    pub restricted_readings: Vec<String>,
    /// Part-of-speech expansions, e.g. "noun common" (`<pos>`).
    pub parts_of_speech: Vec<String>,
    /// Cross-references to related entries (`<xref>`).
    pub references: Vec<String>,
    /// Antonym references (`<ant>`).
    pub antonyms: Vec<String>,
    /// Field-of-use expansions, e.g. "computer terminology" (`<field>`).
    pub fields: Vec<String>,
    /// Usage-register expansions, e.g. "colloquialism" (`<misc>`).
    pub misc: Vec<String>,
    /// Free-form sense notes (`<s_inf>`).
    pub information: Vec<String>,
    /// Loanword source languages (`<lsource>`).
    pub source_languages: Vec<SourceLanguage>,
    /// Dialect expansions, e.g. "kansai-ben" (`<dial>`).
    pub dialects: Vec<String>,
    /// Target-language glosses (`<gloss>`).
    pub glosses: Vec<Gloss>,
}

/// A target-language gloss (`<gloss>`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Gloss {
    pub content: String,
    /// Gloss language (`xml:lang` attribute); absent means English.
    pub language: Option<String>,
    /// Gender of the gloss, for languages that mark it (`g_gend`).
    pub gender: Option<String>,
    /// Gloss type such as "lit" or "fig" (`g_type`).
    pub gloss_type: Option<String>,
}

/// The source language of a loanword (`<lsource>`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceLanguage {
    /// The source word or phrase; may be empty when only the language is
    /// recorded.
    pub content: String,
    /// Source language (`xml:lang` attribute); absent means English.
    pub language: Option<String>,
    /// "full" or "part", for complete vs partial source descriptions
    /// (`ls_type`).
    pub source_type: Option<String>,
    /// True for wasei-eigo, words constructed in Japanese from foreign
    /// material (`ls_wasei="y"`).
    pub wasei: bool,
}
