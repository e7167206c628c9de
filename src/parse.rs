//! Parse XML text into a JSON value tree.
//!
//! XML parsing is delegated to [`roxmltree`]; this module converts the
//! resulting element tree into [`serde_json::Value`]s. Attributes land
//! under the [`ATTR_KEY`](crate::ATTR_KEY) key, mixed text under
//! [`TEXT_KEY`](crate::TEXT_KEY), repeated sibling tags collect into
//! arrays, and leaf text is run through the configured value processors.

use roxmltree::{Document, Node};
use serde_json::{Map, Value};

use crate::error::{Error, Result};
use crate::options::ParseOptions;
use crate::processors;
use crate::{ATTR_KEY, TEXT_KEY};

/// Parse XML text with default options.
pub fn parse(xml: &str) -> Result<Value> {
    parse_with(xml, &ParseOptions::default())
}

/// Parse a UTF-8 byte buffer with default options.
///
/// Buffers that are not valid UTF-8 are rejected as `Invalid XML Structure`
/// before the engine is involved.
pub fn parse_bytes(bytes: &[u8]) -> Result<Value> {
    let xml = std::str::from_utf8(bytes).map_err(|_| Error::InvalidXml)?;
    parse(xml)
}

/// Parse XML text into a JSON value.
///
/// The document converts to a single-key structure `{ <root tag>: value }`.
/// When the top-level key equals `options.root` the inner value is returned
/// directly; otherwise the full structure is returned unchanged.
///
/// # Errors
///
/// Empty or whitespace-only input yields [`Error::InvalidXml`]; malformed
/// documents yield [`Error::Parse`] with the engine's message.
pub fn parse_with(xml: &str, options: &ParseOptions) -> Result<Value> {
    if xml.trim().is_empty() {
        return Err(Error::InvalidXml);
    }

    let doc = Document::parse(xml)?;
    let root = doc.root_element();

    let mut top = Map::new();
    top.insert(
        root.tag_name().name().to_string(),
        element_to_value(root, options),
    );

    match top.remove(&options.root) {
        Some(inner) => Ok(inner),
        None => Ok(Value::Object(top)),
    }
}

fn element_to_value(node: Node, options: &ParseOptions) -> Value {
    let mut children = Map::new();
    let mut text = String::new();
    let mut has_elements = false;

    for child in node.children() {
        if child.is_element() {
            has_elements = true;
            let value = element_to_value(child, options);
            insert_child(
                &mut children,
                child.tag_name().name(),
                value,
                options.explicit_array,
            );
        } else if child.is_text() {
            if let Some(t) = child.text() {
                text.push_str(t);
            }
        }
    }

    let attrs: Map<String, Value> = node
        .attributes()
        .map(|a| (a.name().to_string(), Value::String(a.value().to_string())))
        .collect();

    // Leaf element: its value is the processed text content.
    if attrs.is_empty() && !has_elements {
        return processors::apply(&options.value_processors, &text);
    }

    let mut object = Map::new();
    if !attrs.is_empty() {
        object.insert(ATTR_KEY.to_string(), Value::Object(attrs));
    }
    object.extend(children);
    // Whitespace-only text between elements is formatting, not content.
    if !text.trim().is_empty() {
        object.insert(
            TEXT_KEY.to_string(),
            processors::apply(&options.value_processors, &text),
        );
    }
    Value::Object(object)
}

/// Insert a child value, collecting repeated tags into arrays.
fn insert_child(map: &mut Map<String, Value>, tag: &str, value: Value, explicit_array: bool) {
    match map.get_mut(tag) {
        Some(Value::Array(items)) => items.push(value),
        Some(existing) => {
            let first = std::mem::take(existing);
            *existing = Value::Array(vec![first, value]);
        }
        None if explicit_array => {
            map.insert(tag.to_string(), Value::Array(vec![value]));
        }
        None => {
            map.insert(tag.to_string(), value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn repeated_tags_collect_into_arrays() {
        let mut map = Map::new();
        insert_child(&mut map, "item", json!(1), false);
        assert_eq!(map.get("item"), Some(&json!(1)));
        insert_child(&mut map, "item", json!(2), false);
        insert_child(&mut map, "item", json!(3), false);
        assert_eq!(map.get("item"), Some(&json!([1, 2, 3])));
    }

    #[test]
    fn explicit_array_wraps_first_occurrence() {
        let mut map = Map::new();
        insert_child(&mut map, "item", json!(1), true);
        assert_eq!(map.get("item"), Some(&json!([1])));
        insert_child(&mut map, "item", json!(2), true);
        assert_eq!(map.get("item"), Some(&json!([1, 2])));
    }

    #[test]
    fn empty_element_parses_to_empty_string() {
        let value = parse("<root><note/></root>").expect("parse XML");
        assert_eq!(value, json!({ "note": "" }));
    }
}
