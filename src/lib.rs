//! XML ⇄ JSON conversion utilities.
//!
//! This crate converts XML text into a [`serde_json::Value`] tree and back,
//! delegating the actual XML work to general-purpose engines: `roxmltree`
//! for parsing and `quick-xml` for writing. The crate itself is the thin
//! layer of option handling, input validation and tree conversion around
//! them. Sub-modules split it into focused areas:
//!
//! - [`parse`] – XML text → JSON value
//! - [`build`] – JSON value → XML text
//! - [`options`] – per-operation configuration with documented defaults
//! - [`processors`] – scalar coercions applied to parsed text
//! - [`error`] – the error surface shared by both operations
//!
//! The binary `xmljson` demonstrates usage: it converts `.xml` files to
//! JSON and `.json` files to XML on stdout.

pub mod build;
pub mod error;
pub mod options;
pub mod parse;
pub mod processors;

pub use build::{build, build_with};
pub use error::{Error, Result};
pub use options::{BuildOptions, ParseOptions, RenderOpts, XmlDecl};
pub use parse::{parse, parse_bytes, parse_with};
pub use processors::{ValueProcessor, parse_booleans, parse_numbers};

/// Key under which element attributes are stored in converted values.
pub const ATTR_KEY: &str = "$";

/// Key under which mixed text content is stored in converted values.
pub const TEXT_KEY: &str = "_";
