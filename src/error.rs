//! The error surface shared by [`parse`](crate::parse) and
//! [`build`](crate::build).

use std::io;

/// Errors produced by the conversion operations.
///
/// Inputs rejected before an engine is involved carry the fixed
/// `Invalid XML Structure` / `Invalid JSON Structure` messages; engine
/// failures pass the underlying message through unchanged.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The XML input is empty, whitespace-only, or not valid UTF-8 text.
    #[error("Invalid XML Structure")]
    InvalidXml,

    /// The JSON input is not an object, or is an object with no keys.
    #[error("Invalid JSON Structure")]
    InvalidJson,

    /// The XML engine rejected the document.
    #[error("{0}")]
    Parse(#[from] roxmltree::Error),

    /// Writing XML output failed.
    #[error("{0}")]
    Write(#[from] io::Error),

    /// A value that cannot be represented in XML.
    #[error("{0}")]
    Unsupported(String),
}

impl Error {
    /// HTTP-style status associated with this error. Every failure maps
    /// to 400.
    pub fn status(&self) -> u16 {
        400
    }
}

/// Crate-local result alias.
pub type Result<T> = std::result::Result<T, Error>;
