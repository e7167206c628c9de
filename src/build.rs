//! Build XML text from a JSON value tree.
//!
//! The inverse of [`parse`](crate::parse): objects become elements with
//! `"$"` entries as attributes and `"_"` as text content, arrays become
//! repeated sibling elements, scalars become text, `null` becomes an empty
//! element. Event writing and escaping are delegated to
//! [`quick_xml::Writer`].

use std::io::Write;

use indexmap::IndexMap;
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesText, Event};
use serde_json::{Map, Value};

use crate::error::{Error, Result};
use crate::options::BuildOptions;
use crate::{ATTR_KEY, TEXT_KEY};

/// Name of the synthetic root element wrapped around multi-key input.
const DEFAULT_ROOT: &str = "root";

/// Build XML text with default options.
pub fn build(json: &Value) -> Result<String> {
    build_with(json, &BuildOptions::default())
}

/// Build XML text from a JSON value.
///
/// Input must be an object with at least one key. A single top-level key
/// becomes the root element name; otherwise the whole object is wrapped
/// under a synthetic `root` element. `options.attrs` is merged onto the
/// root element either way.
///
/// # Errors
///
/// Non-object or empty input yields [`Error::InvalidJson`]; values that
/// cannot be represented in XML yield [`Error::Unsupported`]. No partial
/// output is returned on failure.
pub fn build_with(json: &Value, options: &BuildOptions) -> Result<String> {
    let map = match json {
        Value::Object(map) if !map.is_empty() => map,
        _ => return Err(Error::InvalidJson),
    };

    let mut buf = Vec::with_capacity(256);
    let mut writer = if options.render.pretty {
        Writer::new_with_indent(&mut buf, b' ', options.render.indent)
    } else {
        Writer::new(&mut buf)
    };

    let standalone = options
        .decl
        .standalone
        .map(|s| if s { "yes" } else { "no" });
    writer.write_event(Event::Decl(BytesDecl::new(
        options.decl.version.as_str(),
        Some(options.decl.encoding.as_str()),
        standalone,
    )))?;

    match single_entry(map) {
        Some((name, value)) => write_root(&mut writer, name, value, &options.attrs)?,
        None => write_root(&mut writer, DEFAULT_ROOT, json, &options.attrs)?,
    }

    String::from_utf8(buf).map_err(|e| Error::Unsupported(e.to_string()))
}

/// The sole entry of a single-key map, `None` otherwise.
fn single_entry(map: &Map<String, Value>) -> Option<(&String, &Value)> {
    if map.len() == 1 { map.iter().next() } else { None }
}

/// Write the root element, merging `extra` attributes over the value's own
/// `"$"` entries.
fn write_root<W: Write>(
    writer: &mut Writer<W>,
    name: &str,
    value: &Value,
    extra: &IndexMap<String, String>,
) -> Result<()> {
    match value {
        Value::Object(map) => {
            let mut attrs = collect_attrs(name, map.get(ATTR_KEY))?;
            for (k, v) in extra {
                attrs.insert(k.clone(), v.clone());
            }
            write_object(writer, name, map, &attrs)
        }
        Value::Array(_) => Err(Error::Unsupported(format!(
            "an array cannot form the document root <{name}>"
        ))),
        scalar => write_scalar(writer, name, scalar, extra),
    }
}

/// Write one element (or, for arrays, a run of sibling elements).
fn write_element<W: Write>(writer: &mut Writer<W>, name: &str, value: &Value) -> Result<()> {
    match value {
        Value::Array(items) => {
            for item in items {
                write_element(writer, name, item)?;
            }
            Ok(())
        }
        Value::Object(map) => {
            let attrs = collect_attrs(name, map.get(ATTR_KEY))?;
            write_object(writer, name, map, &attrs)
        }
        scalar => write_scalar(writer, name, scalar, &IndexMap::new()),
    }
}

fn write_object<W: Write>(
    writer: &mut Writer<W>,
    name: &str,
    map: &Map<String, Value>,
    attrs: &IndexMap<String, String>,
) -> Result<()> {
    let text = match map.get(TEXT_KEY) {
        Some(value) => Some(scalar_text(value).ok_or_else(|| {
            Error::Unsupported(format!("text content of <{name}> must be a scalar"))
        })?),
        None => None,
    };
    let children: Vec<(&String, &Value)> = map
        .iter()
        .filter(|(key, _)| key.as_str() != ATTR_KEY && key.as_str() != TEXT_KEY)
        .collect();

    let element = writer
        .create_element(name)
        .with_attributes(attrs.iter().map(|(k, v)| (k.as_str(), v.as_str())));

    if children.is_empty() {
        match text {
            Some(t) => {
                element.write_text_content(BytesText::new(&t))?;
            }
            None => {
                element.write_empty()?;
            }
        }
        return Ok(());
    }

    let mut inner_err: Option<Error> = None;
    let res = element.write_inner_content(|w| -> std::io::Result<()> {
        for (child_name, child_value) in &children {
            if let Err(e) = write_element(w, child_name, child_value) {
                inner_err = Some(e);
                return Err(std::io::Error::other("inner element write failed"));
            }
        }
        if let Some(t) = &text {
            w.write_event(Event::Text(BytesText::new(t)))?;
        }
        Ok(())
    });
    if let Some(e) = inner_err {
        return Err(e);
    }
    res?;
    Ok(())
}

fn write_scalar<W: Write>(
    writer: &mut Writer<W>,
    name: &str,
    value: &Value,
    attrs: &IndexMap<String, String>,
) -> Result<()> {
    let element = writer
        .create_element(name)
        .with_attributes(attrs.iter().map(|(k, v)| (k.as_str(), v.as_str())));

    match scalar_text(value) {
        Some(text) => {
            element.write_text_content(BytesText::new(&text))?;
        }
        None if value.is_null() => {
            element.write_empty()?;
        }
        None => {
            return Err(Error::Unsupported(format!(
                "cannot render {value} as content of <{name}>"
            )));
        }
    }
    Ok(())
}

/// Convert a value's `"$"` entry into attribute pairs. Attribute values
/// must be scalars.
fn collect_attrs(name: &str, attr_value: Option<&Value>) -> Result<IndexMap<String, String>> {
    let mut attrs = IndexMap::new();
    let Some(value) = attr_value else {
        return Ok(attrs);
    };
    let Value::Object(map) = value else {
        return Err(Error::Unsupported(format!(
            "attribute map of <{name}> must be an object, got {value}"
        )));
    };
    for (attr_name, attr_val) in map {
        let text = scalar_text(attr_val).ok_or_else(|| {
            Error::Unsupported(format!(
                "attribute {attr_name} of <{name}> must be a scalar, got {attr_val}"
            ))
        })?;
        attrs.insert(attr_name.clone(), text);
    }
    Ok(attrs)
}

/// Text form of a scalar value; `None` for `null`, objects, and arrays.
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn scalars_render_as_text() {
        assert_eq!(scalar_text(&json!("payment")), Some("payment".to_string()));
        assert_eq!(scalar_text(&json!(725)), Some("725".to_string()));
        assert_eq!(scalar_text(&json!(1.5)), Some("1.5".to_string()));
        assert_eq!(scalar_text(&json!(false)), Some("false".to_string()));
        assert_eq!(scalar_text(&json!(null)), None);
        assert_eq!(scalar_text(&json!([1])), None);
    }

    #[test]
    fn attribute_values_must_be_scalars() {
        let attrs = collect_attrs("a", Some(&json!({ "id": 7, "lang": "en" })))
            .expect("scalar attributes");
        assert_eq!(attrs.get("id").map(String::as_str), Some("7"));
        assert_eq!(attrs.get("lang").map(String::as_str), Some("en"));

        assert!(collect_attrs("a", Some(&json!({ "id": [1] }))).is_err());
        assert!(collect_attrs("a", Some(&json!("flat"))).is_err());
        assert!(collect_attrs("a", None).expect("no attrs").is_empty());
    }

    #[test]
    fn single_entry_requires_exactly_one_key() {
        let one = json!({ "payment": { "amount": 725 } });
        let Value::Object(map) = &one else {
            unreachable!()
        };
        assert!(single_entry(map).is_some());

        let two = json!({ "a": 1, "b": 2 });
        let Value::Object(map) = &two else {
            unreachable!()
        };
        assert!(single_entry(map).is_none());
    }
}
