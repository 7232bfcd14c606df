//! # jmdict-reader
//!
//! A parser for the JMdict Japanese-Multilingual dictionary interchange
//! format. JMdict files are available from
//! <http://www.edrdg.org/jmdict/j_jmdict.html>.
//!
//! The parser resolves the custom entities defined by the JMdict DTD
//! (part-of-speech, field, dialect and usage codes such as `&n;` or
//! `&ksb;`) to their descriptive expansions while decoding, so the
//! resulting object model contains "noun common" rather than `n`.
pub mod jmdict;

// Re-export the main types for convenience
pub use jmdict::{
    entities, parse,
    models::{Entry, Gloss, Jmdict, KanjiElement, ReadingElement, Sense, SourceLanguage},
    JmdictError, Result,
};
