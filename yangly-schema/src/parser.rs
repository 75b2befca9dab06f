//! Resolved schema tree loader.
//!
//! This module reads the XML export of an already-resolved YANG module into
//! the [`Module`] / [`Entry`] tree. It does not resolve typedefs, groupings or
//! imports; every leaf is expected to carry its resolved base type.

use crate::error::ParseError;
use crate::types::{Entry, EntryKind, Module, TypeKind, YangType};
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use std::path::Path;

/// Parses a resolved module document from a string.
///
/// # Arguments
/// * `xml` - XML document content
///
/// # Returns
/// Parsed module or parse error.
///
/// # Errors
/// Returns `ParseError` if the XML is malformed, a required attribute is
/// missing, or a directory declares the same child name twice.
pub fn parse_module(xml: &str) -> Result<Module, ParseError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => {
                let name_bytes = e.name().as_ref().to_vec();
                let name = std::str::from_utf8(&name_bytes)?;
                if is_module_tag(name) {
                    let mut module = parse_module_header(e, name)?;
                    parse_module_body(&mut reader, &mut module)?;
                    return Ok(module);
                }
            }
            Ok(Event::Empty(ref e)) => {
                let name_bytes = e.name().as_ref().to_vec();
                let name = std::str::from_utf8(&name_bytes)?;
                if is_module_tag(name) {
                    return parse_module_header(e, name);
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(ParseError::Xml(e)),
            _ => {}
        }
        buf.clear();
    }

    Err(ParseError::structure("no module or submodule element found"))
}

/// Loads a resolved module document from a file.
///
/// # Errors
/// Returns `ParseError` if the file cannot be read or parsed.
pub fn load_module(path: &Path) -> Result<Module, ParseError> {
    let xml = std::fs::read_to_string(path)?;
    parse_module(&xml)
}

fn is_module_tag(name: &str) -> bool {
    matches!(name, "module" | "submodule")
}

/// Parses the module element attributes.
fn parse_module_header(e: &BytesStart<'_>, tag: &str) -> Result<Module, ParseError> {
    let mut name = None;
    let mut module = Module::default();

    for attr in e.attributes() {
        let attr = attr?;
        let key = std::str::from_utf8(attr.key.as_ref())?;
        let value = std::str::from_utf8(&attr.value)?;

        match key {
            "name" => name = Some(value.to_string()),
            "namespace" => module.namespace = Some(value.to_string()),
            "prefix" => module.prefix = Some(value.to_string()),
            "belongs-to" => module.belongs_to = Some(value.to_string()),
            "description" => module.description = Some(value.to_string()),
            _ => {}
        }
    }

    module.name = name.ok_or_else(|| ParseError::missing_attr(tag, "name"))?;

    if tag == "submodule" && module.belongs_to.is_none() {
        return Err(ParseError::missing_attr(tag, "belongs-to"));
    }

    Ok(module)
}

/// Parses the children of the module element.
fn parse_module_body(reader: &mut Reader<&[u8]>, module: &mut Module) -> Result<(), ParseError> {
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => parse_module_child(reader, e, true, module)?,
            Ok(Event::Empty(ref e)) => parse_module_child(reader, e, false, module)?,
            Ok(Event::End(_)) => break,
            Ok(Event::Eof) => {
                return Err(ParseError::structure(format!(
                    "unexpected end of document in module '{}'",
                    module.name
                )));
            }
            Err(e) => return Err(ParseError::Xml(e)),
            _ => {}
        }
        buf.clear();
    }

    Ok(())
}

fn parse_module_child(
    reader: &mut Reader<&[u8]>,
    e: &BytesStart<'_>,
    has_body: bool,
    module: &mut Module,
) -> Result<(), ParseError> {
    let name_bytes = e.name().as_ref().to_vec();
    let tag = std::str::from_utf8(&name_bytes)?;

    if tag == "revision" {
        let date = parse_revision(reader, e, has_body)?;
        module.revisions.push(date);
        return Ok(());
    }

    match entry_template(tag) {
        Some(template) => {
            let entry = parse_entry(reader, e, tag, template, has_body)?;
            let name = entry.name.clone();
            if module.add_entry(entry).is_some() {
                return Err(ParseError::duplicate("entry", format!("{}/{}", module.name, name)));
            }
            Ok(())
        }
        None if has_body => skip_to_end(reader),
        None => Ok(()),
    }
}

/// Parses a revision date, given either as a `date` attribute or as text.
fn parse_revision(
    reader: &mut Reader<&[u8]>,
    e: &BytesStart<'_>,
    has_body: bool,
) -> Result<String, ParseError> {
    let mut date = None;

    for attr in e.attributes() {
        let attr = attr?;
        if attr.key.as_ref() == b"date" {
            date = Some(std::str::from_utf8(&attr.value)?.to_string());
        }
    }

    if has_body {
        let text = read_text(reader)?;
        if date.is_none() && !text.is_empty() {
            date = Some(text);
        }
    }

    date.ok_or_else(|| ParseError::missing_attr("revision", "date"))
}

/// Returns an empty entry of the kind named by an element tag.
fn entry_template(tag: &str) -> Option<Entry> {
    let entry = match tag {
        "container" | "list" => Entry::new(String::new(), EntryKind::Directory),
        "leaf" => Entry::new(String::new(), EntryKind::Leaf),
        "leaf-list" => {
            let mut entry = Entry::new(String::new(), EntryKind::Leaf);
            entry.list_attr = true;
            entry
        }
        "anyxml" => Entry::new(String::new(), EntryKind::AnyXml),
        "anydata" => Entry::new(String::new(), EntryKind::AnyData),
        "choice" => Entry::new(String::new(), EntryKind::Choice),
        "case" => Entry::new(String::new(), EntryKind::Case),
        "notification" => Entry::new(String::new(), EntryKind::Notification),
        "rpc" | "action" => {
            let mut entry = Entry::new(String::new(), EntryKind::Directory);
            entry.rpc = true;
            entry
        }
        _ => return None,
    };
    Some(entry)
}

/// Parses an entry element and, if it has a body, its children.
fn parse_entry(
    reader: &mut Reader<&[u8]>,
    e: &BytesStart<'_>,
    tag: &str,
    mut entry: Entry,
    has_body: bool,
) -> Result<Entry, ParseError> {
    let mut name = None;

    for attr in e.attributes() {
        let attr = attr?;
        let key = std::str::from_utf8(attr.key.as_ref())?;
        let value = std::str::from_utf8(&attr.value)?;

        match key {
            "name" => name = Some(value.to_string()),
            "mandatory" => entry.mandatory = parse_bool(tag, key, value)?,
            "config-only" => entry.config_only = parse_bool(tag, key, value)?,
            "key" => entry.key = Some(value.to_string()),
            "description" => entry.description = Some(value.to_string()),
            _ => {}
        }
    }

    entry.name = name.ok_or_else(|| ParseError::missing_attr(tag, "name"))?;

    if !has_body {
        return Ok(entry);
    }

    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => parse_entry_child(reader, e, true, &mut entry)?,
            Ok(Event::Empty(ref e)) => parse_entry_child(reader, e, false, &mut entry)?,
            Ok(Event::End(_)) => break,
            Ok(Event::Eof) => {
                return Err(ParseError::structure(format!(
                    "unexpected end of document in {} '{}'",
                    tag, entry.name
                )));
            }
            Err(e) => return Err(ParseError::Xml(e)),
            _ => {}
        }
        buf.clear();
    }

    Ok(entry)
}

fn parse_entry_child(
    reader: &mut Reader<&[u8]>,
    e: &BytesStart<'_>,
    has_body: bool,
    entry: &mut Entry,
) -> Result<(), ParseError> {
    let name_bytes = e.name().as_ref().to_vec();
    let tag = std::str::from_utf8(&name_bytes)?;

    if tag == "type" {
        let yang_type = parse_type(reader, e, has_body)?;
        if entry.yang_type.replace(yang_type).is_some() {
            return Err(ParseError::duplicate("type", &entry.name));
        }
        return Ok(());
    }

    match entry_template(tag) {
        Some(template) => {
            let child = parse_entry(reader, e, tag, template, has_body)?;
            let child_name = child.name.clone();
            if entry.add_child(child).is_some() {
                return Err(ParseError::duplicate(
                    "entry",
                    format!("{}/{}", entry.name, child_name),
                ));
            }
            Ok(())
        }
        None if has_body => skip_to_end(reader),
        None => Ok(()),
    }
}

/// Parses a type descriptor, including enum values, bits and union members.
fn parse_type(
    reader: &mut Reader<&[u8]>,
    e: &BytesStart<'_>,
    has_body: bool,
) -> Result<YangType, ParseError> {
    let mut kind = None;
    let mut name = None;
    let mut path = None;

    for attr in e.attributes() {
        let attr = attr?;
        let key = std::str::from_utf8(attr.key.as_ref())?;
        let value = std::str::from_utf8(&attr.value)?;

        match key {
            "kind" => kind = Some(TypeKind::from_keyword(value)),
            "name" => name = Some(value.to_string()),
            "path" => path = Some(value.to_string()),
            _ => {}
        }
    }

    let kind = kind.ok_or_else(|| ParseError::missing_attr("type", "kind"))?;
    let mut yang_type = YangType::new(kind);
    if let Some(name) = name {
        yang_type.name = name;
    }
    yang_type.path = path;

    if !has_body {
        return Ok(yang_type);
    }

    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => parse_type_child(reader, e, true, &mut yang_type)?,
            Ok(Event::Empty(ref e)) => parse_type_child(reader, e, false, &mut yang_type)?,
            Ok(Event::End(_)) => break,
            Ok(Event::Eof) => {
                return Err(ParseError::structure(format!(
                    "unexpected end of document in type '{}'",
                    yang_type.name
                )));
            }
            Err(e) => return Err(ParseError::Xml(e)),
            _ => {}
        }
        buf.clear();
    }

    Ok(yang_type)
}

fn parse_type_child(
    reader: &mut Reader<&[u8]>,
    e: &BytesStart<'_>,
    has_body: bool,
    yang_type: &mut YangType,
) -> Result<(), ParseError> {
    let name_bytes = e.name().as_ref().to_vec();
    let tag = std::str::from_utf8(&name_bytes)?;

    match tag {
        "type" => {
            let member = parse_type(reader, e, has_body)?;
            yang_type.members.push(member);
            return Ok(());
        }
        "enum" => yang_type.enum_values.push(named_value(e, tag)?),
        "bit" => yang_type.bits.push(named_value(e, tag)?),
        _ => {}
    }

    if has_body {
        skip_to_end(reader)?;
    }

    Ok(())
}

/// Reads the required `name` attribute of an `enum` or `bit` element.
fn named_value(e: &BytesStart<'_>, tag: &str) -> Result<String, ParseError> {
    for attr in e.attributes() {
        let attr = attr?;
        if attr.key.as_ref() == b"name" {
            return Ok(std::str::from_utf8(&attr.value)?.to_string());
        }
    }
    Err(ParseError::missing_attr(tag, "name"))
}

fn parse_bool(element: &str, attribute: &str, value: &str) -> Result<bool, ParseError> {
    match value {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(ParseError::invalid_attr(element, attribute, value)),
    }
}

/// Collects the text content of the current element and consumes its end tag.
fn read_text(reader: &mut Reader<&[u8]>) -> Result<String, ParseError> {
    let mut buf = Vec::new();
    let mut text = String::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Text(ref t)) => {
                text.push_str(std::str::from_utf8(t.as_ref())?.trim());
            }
            Ok(Event::Start(_)) => skip_to_end(reader)?,
            Ok(Event::End(_)) | Ok(Event::Eof) => break,
            Err(e) => return Err(ParseError::Xml(e)),
            _ => {}
        }
        buf.clear();
    }

    Ok(text)
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
