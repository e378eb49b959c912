use super::arena::XmlDocument;
use super::node::XmlNodeData;
use super::xname::{XAttribute, XName, XMLNS_NS};
use crate::error::{RebrandError, Result};
use quick_xml::events::{BytesCData, BytesDecl, BytesEnd, BytesPI, BytesStart, BytesText, Event};
use quick_xml::Writer;
use std::collections::HashMap;
use std::io::Cursor;

/// Namespace URI -> prefix, as declared on the element being written or its ancestors.
type NamespaceMap = HashMap<String, String>;

pub fn serialize(doc: &XmlDocument) -> Result<String> {
    let bytes = serialize_bytes(doc)?;
    String::from_utf8(bytes).map_err(|e| RebrandError::XmlWrite(e.to_string()))
}

pub fn serialize_bytes(doc: &XmlDocument) -> Result<Vec<u8>> {
    let mut writer = Writer::new(Cursor::new(Vec::new()));

    writer
        .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), Some("yes"))))
        .map_err(write_error)?;

    if let Some(root_id) = doc.root() {
        write_node(doc, root_id, &mut writer, &NamespaceMap::new())?;
    }

    Ok(writer.into_inner().into_inner())
}

fn write_error(e: impl std::fmt::Display) -> RebrandError {
    RebrandError::XmlWrite(e.to_string())
}

fn extend_namespace_map(namespace_map: &mut NamespaceMap, attributes: &[XAttribute]) {
    for attr in attributes {
        match &attr.name.namespace {
            None if attr.name.local_name == "xmlns" => {
                namespace_map.insert(attr.value.clone(), String::new());
            }
            Some(ns) if ns == XMLNS_NS => {
                namespace_map.insert(attr.value.clone(), attr.name.local_name.clone());
            }
            _ => {}
        }
    }
}

fn qualified_name(name: &XName, namespace_map: &NamespaceMap, is_attribute: bool) -> String {
    let Some(ns) = &name.namespace else {
        return name.local_name.clone();
    };
    if ns == XMLNS_NS {
        return format!("xmlns:{}", name.local_name);
    }

    let prefix = match namespace_map.get(ns.as_str()) {
        // A default namespace never applies to attributes.
        Some(prefix) if !(is_attribute && prefix.is_empty()) => prefix.as_str(),
        _ => well_known_prefix(ns),
    };

    if prefix.is_empty() {
        name.local_name.clone()
    } else {
        format!("{}:{}", prefix, name.local_name)
    }
}

fn write_node<W: std::io::Write>(
    doc: &XmlDocument,
    node_id: indextree::NodeId,
    writer: &mut Writer<W>,
    namespace_map: &NamespaceMap,
) -> Result<()> {
    let Some(node_data) = doc.get(node_id) else {
        return Ok(());
    };

    match node_data {
        XmlNodeData::Element { name, attributes } => {
            write_element(doc, node_id, name, attributes, writer, namespace_map)?;
        }
        XmlNodeData::Text(text) => {
            writer
                .write_event(Event::Text(BytesText::new(text)))
                .map_err(write_error)?;
        }
        XmlNodeData::CData(text) => {
            writer
                .write_event(Event::CData(BytesCData::new(text)))
                .map_err(write_error)?;
        }
        XmlNodeData::Comment(text) => {
            writer
                .write_event(Event::Comment(BytesText::new(text)))
                .map_err(write_error)?;
        }
        XmlNodeData::ProcessingInstruction { target, data } => {
            let pi_content = if data.is_empty() {
                target.clone()
            } else {
                format!("{} {}", target, data)
            };
            writer
                .write_event(Event::PI(BytesPI::new(&pi_content)))
                .map_err(write_error)?;
        }
    }

    Ok(())
}

fn write_element<W: std::io::Write>(
    doc: &XmlDocument,
    node_id: indextree::NodeId,
    name: &XName,
    attributes: &[XAttribute],
    writer: &mut Writer<W>,
    namespace_map: &NamespaceMap,
) -> Result<()> {
    let mut scoped_map = namespace_map.clone();
    extend_namespace_map(&mut scoped_map, attributes);

    let tag_name = qualified_name(name, &scoped_map, false);
    let mut elem = BytesStart::new(tag_name.as_str());

    for attr in attributes {
        let attr_name = qualified_name(&attr.name, &scoped_map, true);
        elem.push_attribute((attr_name.as_str(), attr.value.as_str()));
    }

    let children: Vec<_> = doc.children(node_id).collect();

    if children.is_empty() {
        writer.write_event(Event::Empty(elem)).map_err(write_error)?;
    } else {
        writer.write_event(Event::Start(elem)).map_err(write_error)?;

        for child_id in children {
            write_node(doc, child_id, writer, &scoped_map)?;
        }

        writer
            .write_event(Event::End(BytesEnd::new(tag_name.as_str())))
            .map_err(write_error)?;
    }

    Ok(())
}

fn well_known_prefix(namespace: &str) -> &'static str {
    match namespace {
        "http://schemas.openxmlformats.org/wordprocessingml/2006/main" => "w",
        "http://schemas.openxmlformats.org/spreadsheetml/2006/main" => "x",
        "http://schemas.openxmlformats.org/presentationml/2006/main" => "p",
        "http://schemas.openxmlformats.org/drawingml/2006/main" => "a",
        "http://schemas.openxmlformats.org/drawingml/2006/spreadsheetDrawing" => "xdr",
        "http://schemas.openxmlformats.org/drawingml/2006/wordprocessingDrawing" => "wp",
        "http://schemas.openxmlformats.org/drawingml/2006/picture" => "pic",
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships" => "r",
        "http://schemas.openxmlformats.org/markup-compatibility/2006" => "mc",
        "http://www.w3.org/XML/1998/namespace" => "xml",
        _ => "ns",
    }
}
