use crate::error::{RebrandError, Result};
use crate::xml::namespaces::{CT, REL};
use crate::xml::{XName, XmlDocument, XmlNodeData};
use std::collections::{BTreeSet, HashMap};
use std::io::{Cursor, Read};
use zip::read::ZipArchive;

use super::archive;
use super::relationships::{
    parse_relationships, relative_target, rels_path_for, resolve_target, Relationship,
};

pub const CONTENT_TYPES_PART: &str = "[Content_Types].xml";

/// An opened OOXML package: the untouched source archive plus an editable view
/// of its parts.
///
/// Parts changed through [`set_part`](Self::set_part) or
/// [`put_xml_part`](Self::put_xml_part) are tracked as dirty; [`save`](Self::save)
/// re-emits the source archive with only those entries replaced. Parts created
/// with [`add_part`](Self::add_part) are appended after the original entries.
pub struct OoxmlPackage {
    source: Vec<u8>,
    entry_names: Vec<String>,
    parts: HashMap<String, Vec<u8>>,
    dirty: BTreeSet<String>,
    added: Vec<String>,
}

impl OoxmlPackage {
    pub fn open(bytes: &[u8]) -> Result<Self> {
        let mut archive = ZipArchive::new(Cursor::new(bytes))?;

        let mut entry_names = Vec::with_capacity(archive.len());
        let mut parts = HashMap::with_capacity(archive.len());

        for i in 0..archive.len() {
            let mut file = archive.by_index(i)?;
            if file.is_dir() {
                continue;
            }
            let name = file.name().to_string();
            let mut content = Vec::with_capacity(archive::prealloc_for(file.size()));
            file.read_to_end(&mut content)?;
            entry_names.push(name.clone());
            parts.insert(name, content);
        }

        Ok(Self {
            source: bytes.to_vec(),
            entry_names,
            parts,
            dirty: BTreeSet::new(),
            added: Vec::new(),
        })
    }

    pub fn save(&self) -> Result<Vec<u8>> {
        let replacements: HashMap<String, Vec<u8>> = self
            .dirty
            .iter()
            .filter_map(|name| self.parts.get(name).map(|c| (name.clone(), c.clone())))
            .collect();
        let additions: Vec<(String, Vec<u8>)> = self
            .added
            .iter()
            .filter_map(|name| self.parts.get(name).map(|c| (name.clone(), c.clone())))
            .collect();
        archive::rewrite_and_append(&self.source, &replacements, &additions)
    }

    pub fn has_part(&self, path: &str) -> bool {
        self.parts.contains_key(path)
    }

    pub fn get_part(&self, path: &str) -> Option<&[u8]> {
        self.parts.get(path).map(|v| v.as_slice())
    }

    pub fn get_xml_part(&self, path: &str) -> Result<XmlDocument> {
        let bytes = self.get_part(path).ok_or_else(|| RebrandError::MissingPart {
            part_path: path.to_string(),
            document_type: "OOXML".to_string(),
        })?;
        crate::xml::parser::parse_bytes(bytes)
    }

    /// Create a new part. Returns `false` (and changes nothing) when the path
    /// is already taken.
    pub fn add_part(&mut self, path: &str, content: Vec<u8>) -> bool {
        if self.parts.contains_key(path) {
            return false;
        }
        self.parts.insert(path.to_string(), content);
        self.entry_names.push(path.to_string());
        self.added.push(path.to_string());
        true
    }

    /// First `{prefix}{n}{extension}` with `n >= 1` that names no part.
    pub fn unused_part_name(&self, prefix: &str, extension: &str) -> String {
        (1..)
            .map(|n| format!("{}{}{}", prefix, n, extension))
            .find(|candidate| !self.parts.contains_key(candidate))
            .unwrap_or_else(|| format!("{}{}", prefix, extension))
    }

    /// Replace the content of an existing part. Returns `false` (and changes
    /// nothing) when the package has no such part.
    pub fn set_part(&mut self, path: &str, content: Vec<u8>) -> bool {
        match self.parts.get_mut(path) {
            Some(existing) => {
                *existing = content;
                self.dirty.insert(path.to_string());
                true
            }
            None => {
                log::debug!("ignoring write to unknown part '{}'", path);
                false
            }
        }
    }

    pub fn put_xml_part(&mut self, path: &str, doc: &XmlDocument) -> Result<()> {
        let bytes = crate::xml::builder::serialize_bytes(doc)?;
        self.set_part(path, bytes);
        Ok(())
    }

    /// Part paths in archive order.
    pub fn part_names(&self) -> impl Iterator<Item = &str> {
        self.entry_names.iter().map(|s| s.as_str())
    }

    /// Relationships owned by `source_part`; empty when it has no rels part or
    /// the rels part is unreadable.
    pub fn relationships(&self, source_part: &str) -> Vec<Relationship> {
        let rels_path = rels_path_for(source_part);
        let Some(bytes) = self.get_part(&rels_path) else {
            return Vec::new();
        };
        match parse_relationships(bytes) {
            Ok(rels) => rels,
            Err(e) => {
                log::debug!("unreadable relationships in '{}': {}", rels_path, e);
                Vec::new()
            }
        }
    }

    /// Package path of the internal target of relationship `r_id` of `source_part`.
    pub fn resolve_relationship(&self, source_part: &str, r_id: &str) -> Option<String> {
        self.relationships(source_part)
            .into_iter()
            .find(|rel| rel.id == r_id && !rel.is_external())
            .map(|rel| resolve_target(source_part, &rel.target))
    }

    /// Targets of every internal relationship of the given type, in rels order.
    pub fn related_parts(&self, source_part: &str, rel_type: &str) -> Vec<String> {
        self.relationships(source_part)
            .into_iter()
            .filter(|rel| rel.rel_type == rel_type && !rel.is_external())
            .map(|rel| resolve_target(source_part, &rel.target))
            .collect()
    }

    /// Append a relationship from `source_part` to `target_part` and return
    /// its id (`rIdN`, one past the highest numeric id in use).
    pub fn add_relationship(
        &mut self,
        source_part: &str,
        rel_type: &str,
        target_part: &str,
    ) -> Result<String> {
        let rels_path = rels_path_for(source_part);
        let mut xml = self.get_xml_part(&rels_path)?;
        let root = xml.root().ok_or_else(|| RebrandError::MissingPart {
            part_path: rels_path.clone(),
            document_type: "relationships".to_string(),
        })?;

        let next = self
            .relationships(source_part)
            .iter()
            .filter_map(|rel| rel.id.strip_prefix("rId")?.parse::<u32>().ok())
            .max()
            .unwrap_or(0)
            + 1;
        let id = format!("rId{}", next);

        let rel = xml.add_child(root, XmlNodeData::element(REL::relationship()));
        xml.set_attribute(rel, &XName::local("Id"), &id);
        xml.set_attribute(rel, &XName::local("Type"), rel_type);
        xml.set_attribute(rel, &XName::local("Target"), &relative_target(source_part, target_part));

        self.put_xml_part(&rels_path, &xml)?;
        Ok(id)
    }

    /// Make sure `new_part` has a content type, borrowing the one declared for
    /// `like_part`. Nothing changes when an extension default already covers it.
    pub fn register_content_type_like(&mut self, like_part: &str, new_part: &str) -> Result<()> {
        let mut xml = self.get_xml_part(CONTENT_TYPES_PART)?;
        let Some(root) = xml.root() else {
            return Ok(());
        };

        let extension = archive::entry_extension(new_part)
            .map(|ext| ext.trim_start_matches('.').to_ascii_lowercase())
            .unwrap_or_default();
        let default_name = CT::default();
        let covered = xml.elements_by_name(root, &default_name).any(|node| {
            xml.attr_local(node, "Extension")
                .map(|ext| ext.eq_ignore_ascii_case(&extension))
                .unwrap_or(false)
        });
        if covered {
            return Ok(());
        }

        let override_name = CT::override_();
        let like = format!("/{}", like_part);
        let Some(content_type) = xml
            .elements_by_name(root, &override_name)
            .find(|&node| xml.attr_local(node, "PartName") == Some(like.as_str()))
            .and_then(|node| xml.attr_local(node, "ContentType"))
            .map(str::to_string)
        else {
            log::debug!("no content type known for '{}'", like_part);
            return Ok(());
        };

        let entry = xml.add_child(root, XmlNodeData::element(override_name.clone()));
        xml.set_attribute(entry, &XName::local("PartName"), &format!("/{}", new_part));
        xml.set_attribute(entry, &XName::local("ContentType"), &content_type);
        self.put_xml_part(CONTENT_TYPES_PART, &xml)
    }

    /// Main document part named by the package-level officeDocument relationship.
    pub fn main_part(&self) -> Option<String> {
        self.related_parts("", super::relationships::relationship_types::OFFICE_DOCUMENT)
            .into_iter()
            .next()
    }
}
