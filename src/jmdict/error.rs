//! Custom error types for the jmdict-reader crate.

use thiserror::Error;

/// The primary error type for all operations in this crate.
#[derive(Debug, Error)]
pub enum JmdictError {
    /// An error originating from I/O operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A low-level XML error from the underlying reader (syntax, encoding,
    /// or I/O while pulling events).
    #[error("XML decode error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// The markup used an entity reference that is not defined by the
    /// JMdict DTD. Fatal to the decode.
    #[error("undefined entity reference &{name}; near byte {position}")]
    UndefinedEntity { name: String, position: u64 },

    /// The input ended before the element being decoded was closed.
    #[error("unexpected end of document while decoding <{element}>")]
    UnexpectedEof { element: &'static str },

    /// The document is structurally invalid beyond what lenient parsing
    /// tolerates.
    #[error("invalid format: {0}")]
    InvalidFormat(String),
}

/// A convenience `Result` type alias using the crate's `JmdictError` type.
pub type Result<T> = std::result::Result<T, JmdictError>;
