//! Core JMdict parsing module

pub mod entities;
pub mod error;
pub mod models;
mod decoder;
mod escape;

use std::io::BufRead;
use log::info;

use escape::Leniency;
use models::Jmdict;
pub use error::{JmdictError, Result};

/// Parse a complete JMdict document from `input`.
///
/// The whole document is decoded into memory in a single synchronous pass,
/// with the JMdict DTD's custom entities resolved to their descriptive
/// expansions as text is read. Parsing is lenient: mismatched end tags and
/// stray unescaped ampersands, both common in redistributed dictionary
/// files, are absorbed rather than treated as fatal.
///
/// # Errors
/// Returns an error and no document if:
/// - the markup uses an entity reference not defined by the JMdict DTD
/// - the document is malformed beyond what lenient parsing tolerates
/// - the stream ends mid-document or fails with an I/O error
pub fn parse<R: BufRead>(input: R) -> Result<Jmdict> {
    let document = decoder::decode(input, Leniency::Lenient)?;
    info!("JMdict document parsed: {} entries", document.entries.len());
    Ok(document)
}
