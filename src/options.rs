//! Configuration for the parse and build operations.
//!
//! Each struct carries documented defaults via [`Default`]; callers override
//! individual fields with struct update syntax:
//!
//! ```
//! use xmljson::ParseOptions;
//!
//! let options = ParseOptions {
//!     root: "payment".to_string(),
//!     ..ParseOptions::default()
//! };
//! ```
//!
//! Every call receives its own copy of the options; nothing is shared or
//! mutated between calls.

use indexmap::IndexMap;

use crate::processors::{ValueProcessor, parse_booleans, parse_numbers};

/// Options for [`parse_with`](crate::parse_with).
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// Top-level key to unwrap from the parsed document. When the document
    /// root has a different name, the full single-key structure is returned
    /// unchanged. Default `"root"`.
    pub root: String,

    /// Represent every child element as an array, even single occurrences.
    /// Default `false`: single children collapse to their value.
    pub explicit_array: bool,

    /// Coercions applied in order to every parsed text scalar; the first
    /// processor returning `Some` wins, otherwise the text stays a string.
    /// Default: [`parse_numbers`], [`parse_booleans`].
    pub value_processors: Vec<ValueProcessor>,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            root: "root".to_string(),
            explicit_array: false,
            value_processors: vec![parse_numbers, parse_booleans],
        }
    }
}

/// Options for [`build_with`](crate::build_with).
#[derive(Debug, Clone, Default)]
pub struct BuildOptions {
    /// The `<?xml ...?>` declaration emitted at the top of the document.
    pub decl: XmlDecl,

    /// Output rendering.
    pub render: RenderOpts,

    /// Attributes merged onto the root element. Entries override
    /// same-named attributes from the value's own `"$"` key.
    pub attrs: IndexMap<String, String>,
}

/// The XML declaration.
#[derive(Debug, Clone)]
pub struct XmlDecl {
    /// Default `"1.0"`.
    pub version: String,

    /// Default `"UTF-8"`.
    pub encoding: String,

    /// Emitted as `standalone="yes"`/`"no"` only when set. Default `None`.
    pub standalone: Option<bool>,
}

impl Default for XmlDecl {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            encoding: "UTF-8".to_string(),
            standalone: None,
        }
    }
}

/// XML output rendering options.
#[derive(Debug, Clone)]
pub struct RenderOpts {
    /// Put child elements on their own indented lines. Default `true`.
    pub pretty: bool,

    /// Spaces per indentation level when `pretty` is set. Default `2`.
    pub indent: usize,
}

impl Default for RenderOpts {
    fn default() -> Self {
        Self {
            pretty: true,
            indent: 2,
        }
    }
}
