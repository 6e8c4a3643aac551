use thiserror::Error;

pub mod document;
pub mod types;
pub mod utils;

use types::ObjectId;

/// Errors raised while serializing an incremental update.
///
/// There are no local retries and no partial-output recovery: every variant
/// here is fatal to the `append_update` call that triggered it.
#[derive(Debug, Error)]
pub enum LowTuxPdfError {
    #[error(transparent)]
    IOError(#[from] std::io::Error),
    #[error("Invalid dictionary type for dictionary: {actual}, expected: {expected}")]
    InvalidDictionaryType {
        actual: &'static str,
        expected: &'static str,
    },
    #[error("Missing dictionary key: {0}")]
    MissingDictionaryKey(String),
    #[error("Invalid Type for Dictionary Value")]
    InvalidDictionaryValue {
        actual: &'static str,
        expected: &'static str,
    },
    /// A top-level object carried no reference, or a `null` value was
    /// written where an indirect object was expected.
    #[error("object {0:?} has no reference and cannot be written as a top-level object")]
    NullObject(Option<ObjectId>),
    /// The same object number was appended to an [`document::EntryTable`] twice.
    #[error("duplicate xref entry for object number {0}")]
    DuplicateEntry(u32),
    /// A value variant the writer does not know how to emit.
    #[error("unsupported value kind: {kind}{}", key.as_deref().map(|k| format!(" (key: {k})")).unwrap_or_default())]
    UnsupportedValueKind {
        kind: &'static str,
        key: Option<String>,
    },
    /// A raw, unescaped string was passed where an already-escaped
    /// [`types::PdfString::Literal`] or [`types::PdfString::Hexadecimal`] was required.
    #[error("invalid string kind: unescaped `(`, `)`, or `\\` in literal string content")]
    InvalidStringKind,
    /// Deflate compression of a stream's raw bytes failed.
    #[error("compression failed for object {reference:?}: {source}")]
    CompressionError {
        reference: ObjectId,
        #[source]
        source: std::io::Error,
    },
    /// A registered [`document::security::SecurityHandler`] failed to encrypt a stream.
    #[error("encryption failed for object {reference:?}: {message}")]
    EncryptionError {
        reference: ObjectId,
        message: String,
    },
}
