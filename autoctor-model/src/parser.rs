//! XML declaration file parser.
//!
//! This module turns a declaration file into a [`DeclarationSet`]. The file
//! stands in for the type model a host compiler would otherwise supply:
//!
//! ```xml
//! <declarations>
//!   <namespace name="Demo">
//!     <type name="Base" kind="class">
//!       <attribute name="AutoConstruct"/>
//!       <field name="_x" type="int" readonly="true"/>
//!     </type>
//!   </namespace>
//! </declarations>
//! ```

use crate::error::ParseError;
use crate::types::{
    ConstructorDecl, ContainingType, DeclarationSet, FieldDecl, Parameter, TypeDecl, TypeKey,
    TypeKind,
};
use quick_xml::Reader;
use quick_xml::escape::unescape;
use quick_xml::events::attributes::Attribute;
use quick_xml::events::{BytesStart, Event};
use std::path::Path;

/// Parses a declaration file from a string.
///
/// # Arguments
/// * `xml` - Declaration file content
///
/// # Returns
/// Parsed declarations or parse error.
///
/// # Errors
/// Returns `ParseError` if the XML is malformed or an element carries an
/// invalid or missing attribute.
pub fn parse_declarations(xml: &str) -> Result<DeclarationSet, ParseError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut set: Option<DeclarationSet> = None;
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => {
                let name_bytes = e.name().as_ref().to_vec();
                let name = std::str::from_utf8(&name_bytes)?;
                if name == "declarations" && set.is_none() {
                    let mut declarations = DeclarationSet::new();
                    parse_scope(&mut reader, &mut declarations, None)?;
                    set = Some(declarations);
                }
            }
            Ok(Event::Empty(ref e)) => {
                if e.name().as_ref() == b"declarations" && set.is_none() {
                    set = Some(DeclarationSet::new());
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(ParseError::Xml(e)),
            _ => {}
        }
        buf.clear();
    }

    let set = set.ok_or_else(|| ParseError::structure("No declarations element found"))?;
    tracing::debug!("parsed {} type declarations", set.len());
    Ok(set)
}

/// Reads and parses a declaration file.
///
/// # Errors
/// Returns `ParseError` if reading or parsing fails.
pub fn parse_declarations_file(path: &Path) -> Result<DeclarationSet, ParseError> {
    let xml = std::fs::read_to_string(path)?;
    parse_declarations(&xml)
}

/// Parses the children of `declarations` or `namespace` until the matching
/// end tag.
fn parse_scope(
    reader: &mut Reader<&[u8]>,
    set: &mut DeclarationSet,
    namespace: Option<&str>,
) -> Result<(), ParseError> {
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => {
                let name_bytes = e.name().as_ref().to_vec();
                let name = std::str::from_utf8(&name_bytes)?;
                match name {
                    "namespace" => {
                        let name = required_attr(e, "namespace", "name")?;
                        let inner = join_namespace(namespace, &name);
                        parse_scope(reader, set, Some(&inner))?;
                    }
                    "type" => {
                        for decl in parse_type(reader, e, namespace, &[])? {
                            set.add_type(decl);
                        }
                    }
                    _ => skip_to_end(reader)?,
                }
            }
            Ok(Event::Empty(ref e)) => {
                if e.name().as_ref() == b"type" {
                    set.add_type(parse_type_header(e, namespace, &[])?);
                }
            }
            Ok(Event::End(_)) => break,
            Ok(Event::Eof) => break,
            Err(e) => return Err(ParseError::Xml(e)),
            _ => {}
        }
        buf.clear();
    }

    Ok(())
}

/// Parses a `type` element with content.
///
/// Returns the declaration itself followed by every nested declaration in
/// document order.
fn parse_type(
    reader: &mut Reader<&[u8]>,
    e: &BytesStart<'_>,
    namespace: Option<&str>,
    containing: &[ContainingType],
) -> Result<Vec<TypeDecl>, ParseError> {
    let mut decl = parse_type_header(e, namespace, containing)?;
    let mut nested = Vec::new();

    let mut inner_containing = containing.to_vec();
    inner_containing.push(ContainingType {
        name: decl.name.clone(),
        kind: decl.kind,
        type_params: decl.type_params.clone(),
    });

    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => {
                let name_bytes = e.name().as_ref().to_vec();
                let tag_name = std::str::from_utf8(&name_bytes)?;
                match tag_name {
                    "type" => {
                        nested.extend(parse_type(reader, e, namespace, &inner_containing)?);
                    }
                    "constructor" => {
                        let ctor = parse_constructor(reader, e)?;
                        decl.add_constructor(ctor);
                    }
                    "attribute" => {
                        decl.add_attribute(required_attr(e, "attribute", "name")?);
                        skip_to_end(reader)?;
                    }
                    "field" => {
                        decl.add_field(parse_field(e)?);
                        skip_to_end(reader)?;
                    }
                    _ => skip_to_end(reader)?,
                }
            }
            Ok(Event::Empty(ref e)) => {
                let name_bytes = e.name().as_ref().to_vec();
                let tag_name = std::str::from_utf8(&name_bytes)?;
                match tag_name {
                    "type" => {
                        nested.push(parse_type_header(e, namespace, &inner_containing)?);
                    }
                    "constructor" => {
                        decl.add_constructor(ConstructorDecl {
                            is_static: parse_static_flag(e)?,
                            parameters: Vec::new(),
                        });
                    }
                    "attribute" => decl.add_attribute(required_attr(e, "attribute", "name")?),
                    "field" => decl.add_field(parse_field(e)?),
                    _ => {}
                }
            }
            Ok(Event::End(_)) => break,
            Ok(Event::Eof) => break,
            Err(e) => return Err(ParseError::Xml(e)),
            _ => {}
        }
        buf.clear();
    }

    let mut decls = Vec::with_capacity(nested.len() + 1);
    decls.push(decl);
    decls.extend(nested);
    Ok(decls)
}

/// Parses the attributes of a `type` element.
fn parse_type_header(
    e: &BytesStart<'_>,
    namespace: Option<&str>,
    containing: &[ContainingType],
) -> Result<TypeDecl, ParseError> {
    let mut name = None;
    let mut kind = TypeKind::Class;
    let mut base = None;
    let mut type_params = Vec::new();

    for attr in e.attributes().flatten() {
        let key = std::str::from_utf8(attr.key.as_ref())?;
        let value = attr_value(&attr)?;

        match key {
            "name" => name = Some(value),
            "kind" => {
                kind = TypeKind::parse(&value)
                    .ok_or_else(|| ParseError::invalid_attr("type", "kind", value.as_str()))?
            }
            "base" => base = Some(TypeKey::from_reference(&value)),
            "typeParams" => {
                type_params = value
                    .split(',')
                    .map(str::trim)
                    .filter(|p| !p.is_empty())
                    .map(str::to_string)
                    .collect()
            }
            _ => {}
        }
    }

    let name = name.ok_or_else(|| ParseError::missing_attr("type", "name"))?;

    let mut decl = TypeDecl::new(name, kind);
    decl.namespace = namespace.map(str::to_string);
    decl.containing = containing.to_vec();
    decl.type_params = type_params;
    decl.base = base;

    Ok(decl)
}

/// Parses a `field` element.
fn parse_field(e: &BytesStart<'_>) -> Result<FieldDecl, ParseError> {
    let mut name = None;
    let mut type_name = None;
    let mut is_readonly = false;
    let mut is_static = false;
    let mut is_implicit = false;
    let mut has_initializer = false;

    for attr in e.attributes().flatten() {
        let key = std::str::from_utf8(attr.key.as_ref())?;
        let value = attr_value(&attr)?;

        match key {
            "name" => name = Some(value),
            "type" => type_name = Some(value),
            "readonly" => is_readonly = parse_bool("field", key, &value)?,
            "static" => is_static = parse_bool("field", key, &value)?,
            "implicit" => is_implicit = parse_bool("field", key, &value)?,
            "initializer" => has_initializer = parse_bool("field", key, &value)?,
            _ => {}
        }
    }

    let name = name.ok_or_else(|| ParseError::missing_attr("field", "name"))?;
    let type_name = type_name.ok_or_else(|| ParseError::missing_attr("field", "type"))?;

    Ok(FieldDecl {
        name,
        type_name,
        is_readonly,
        is_static,
        is_implicit,
        has_initializer,
    })
}

/// Parses a `constructor` element with content.
fn parse_constructor(
    reader: &mut Reader<&[u8]>,
    e: &BytesStart<'_>,
) -> Result<ConstructorDecl, ParseError> {
    let mut ctor = ConstructorDecl {
        is_static: parse_static_flag(e)?,
        parameters: Vec::new(),
    };

    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => {
                if e.name().as_ref() == b"parameter" {
                    ctor.parameters.push(parse_parameter(e)?);
                }
                skip_to_end(reader)?;
            }
            Ok(Event::Empty(ref e)) => {
                if e.name().as_ref() == b"parameter" {
                    ctor.parameters.push(parse_parameter(e)?);
                }
            }
            Ok(Event::End(_)) => break,
            Ok(Event::Eof) => break,
            Err(e) => return Err(ParseError::Xml(e)),
            _ => {}
        }
        buf.clear();
    }

    Ok(ctor)
}

/// Parses a `parameter` element.
fn parse_parameter(e: &BytesStart<'_>) -> Result<Parameter, ParseError> {
    let mut name = None;
    let mut type_name = None;

    for attr in e.attributes().flatten() {
        let key = std::str::from_utf8(attr.key.as_ref())?;
        match key {
            "name" => name = Some(attr_value(&attr)?),
            "type" => type_name = Some(attr_value(&attr)?),
            _ => {}
        }
    }

    let name = name.ok_or_else(|| ParseError::missing_attr("parameter", "name"))?;
    let type_name = type_name.ok_or_else(|| ParseError::missing_attr("parameter", "type"))?;

    Ok(Parameter::new(type_name, name))
}

fn parse_static_flag(e: &BytesStart<'_>) -> Result<bool, ParseError> {
    for attr in e.attributes().flatten() {
        if attr.key.as_ref() == b"static" {
            return parse_bool("constructor", "static", &attr_value(&attr)?);
        }
    }
    Ok(false)
}

fn required_attr(
    e: &BytesStart<'_>,
    element: &str,
    attribute: &str,
) -> Result<String, ParseError> {
    for attr in e.attributes().flatten() {
        if attr.key.as_ref() == attribute.as_bytes() {
            return attr_value(&attr);
        }
    }
    Err(ParseError::missing_attr(element, attribute))
}

fn attr_value(attr: &Attribute<'_>) -> Result<String, ParseError> {
    let raw = std::str::from_utf8(&attr.value)?;
    Ok(unescape(raw)?.into_owned())
}

fn parse_bool(element: &str, attribute: &str, value: &str) -> Result<bool, ParseError> {
    match value {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(ParseError::invalid_attr(element, attribute, value)),
    }
}

fn join_namespace(outer: Option<&str>, inner: &str) -> String {
    match outer {
        Some(outer) => format!("{}.{}", outer, inner),
        None => inner.to_string(),
    }
}

/// Skips to the end of the current element.
fn skip_to_end(reader: &mut Reader<&[u8]>) -> Result<(), ParseError> {
    let mut buf = Vec::new();
    let mut depth = 1;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(_)) => depth += 1,
            Ok(Event::End(_)) => {
                depth -= 1;
                if depth == 0 {
                    break;
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(ParseError::Xml(e)),
            _ => {}
        }
        buf.clear();
    }

    Ok(())
}
