use crate::error::Result;
use crate::xml::parser::parse_bytes;
use crate::xml::REL;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum TargetMode {
    #[default]
    Internal,
    External,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relationship {
    pub id: String,
    pub rel_type: String,
    pub target: String,
    #[serde(default)]
    pub target_mode: TargetMode,
}

impl Relationship {
    pub fn is_external(&self) -> bool {
        self.target_mode == TargetMode::External
    }
}

pub mod relationship_types {
    pub const OFFICE_DOCUMENT: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument";
    pub const IMAGE: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/image";
    pub const WORKSHEET: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet";
    pub const DRAWING: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/drawing";
    pub const STYLES: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles";
}

/// Location of the relationship part describing `part` (`""` for the package root).
pub fn rels_path_for(part: &str) -> String {
    match part.rfind('/') {
        Some(idx) => format!("{}/_rels/{}.rels", &part[..idx], &part[idx + 1..]),
        None if part.is_empty() => "_rels/.rels".to_string(),
        None => format!("_rels/{}.rels", part),
    }
}

/// Resolve a relationship target against the folder of the part that owns it.
///
/// `..` pops a segment (never above the package root), `.` and empty segments
/// are dropped, and a leading `/` makes the target package-absolute.
pub fn resolve_target(base_part: &str, target: &str) -> String {
    let mut stack: Vec<&str> = if target.starts_with('/') {
        Vec::new()
    } else {
        let dir = base_part.rsplit_once('/').map(|(dir, _)| dir).unwrap_or("");
        dir.split('/').filter(|s| !s.is_empty()).collect()
    };

    for segment in target.split('/') {
        match segment {
            ".." => {
                stack.pop();
            }
            "." | "" => {}
            other => stack.push(other),
        }
    }

    stack.join("/")
}

/// Relationship target that reaches `target_part` from the folder of
/// `base_part`; the inverse of [`resolve_target`].
pub fn relative_target(base_part: &str, target_part: &str) -> String {
    let base_dir: Vec<&str> = base_part
        .rsplit_once('/')
        .map(|(dir, _)| dir.split('/').collect())
        .unwrap_or_default();
    let target: Vec<&str> = target_part.split('/').collect();

    let shared = base_dir
        .iter()
        .zip(&target)
        .take_while(|(a, b)| a == b)
        .count()
        .min(target.len().saturating_sub(1));

    let mut segments: Vec<&str> = vec![".."; base_dir.len() - shared];
    segments.extend(&target[shared..]);
    segments.join("/")
}

pub fn parse_relationships(bytes: &[u8]) -> Result<Vec<Relationship>> {
    let doc = parse_bytes(bytes)?;
    let Some(root) = doc.root() else {
        return Ok(Vec::new());
    };

    let rel_name = REL::relationship();
    let rels = doc
        .elements_by_name(root, &rel_name)
        .filter_map(|rel| {
            let id = doc.attr_local(rel, "Id")?;
            let target = doc.attr_local(rel, "Target")?;
            let target_mode = match doc.attr_local(rel, "TargetMode") {
                Some("External") => TargetMode::External,
                _ => TargetMode::Internal,
            };
            Some(Relationship {
                id: id.to_string(),
                rel_type: doc.attr_local(rel, "Type").unwrap_or_default().to_string(),
                target: target.to_string(),
                target_mode,
            })
        })
        .collect();

    Ok(rels)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rels_path_for_nested_and_root_parts() {
        assert_eq!(rels_path_for("ppt/slides/slide1.xml"), "ppt/slides/_rels/slide1.xml.rels");
        assert_eq!(rels_path_for("ppt/theme/theme1.xml"), "ppt/theme/_rels/theme1.xml.rels");
        assert_eq!(rels_path_for(""), "_rels/.rels");
    }

    #[test]
    fn resolve_target_normalizes_segments() {
        assert_eq!(resolve_target("ppt/slides/slide1.xml", "../media/image1.png"), "ppt/media/image1.png");
        assert_eq!(resolve_target("ppt/theme/theme1.xml", "./../media/./bg.jpeg"), "ppt/media/bg.jpeg");
        assert_eq!(resolve_target("xl/workbook.xml", "worksheets/sheet1.xml"), "xl/worksheets/sheet1.xml");
        assert_eq!(resolve_target("xl/workbook.xml", "/xl/worksheets/sheet2.xml"), "xl/worksheets/sheet2.xml");
        assert_eq!(resolve_target("word/document.xml", "../../../media/x.png"), "media/x.png");
    }

    #[test]
    fn relative_target_inverts_resolution() {
        assert_eq!(relative_target("xl/drawings/drawing1.xml", "xl/media/image2.png"), "../media/image2.png");
        assert_eq!(relative_target("word/document.xml", "word/media/image1.png"), "media/image1.png");
        assert_eq!(relative_target("", "xl/workbook.xml"), "xl/workbook.xml");
        for (base, target) in [
            ("ppt/slides/slide1.xml", "ppt/media/image9.jpeg"),
            ("a/b/c/part.xml", "a/x/y.bin"),
        ] {
            assert_eq!(resolve_target(base, &relative_target(base, target)), target);
        }
    }

    #[test]
    fn parse_relationships_reads_ids_types_and_modes() {
        let xml = br#"<?xml version="1.0" encoding="UTF-8"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
  <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/image" Target="../media/image1.png"/>
  <Relationship Id="rId2" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/hyperlink" Target="https://example.com" TargetMode="External"/>
</Relationships>"#;

        let rels = parse_relationships(xml).unwrap();
        assert_eq!(rels.len(), 2);
        assert_eq!(rels[0].id, "rId1");
        assert_eq!(rels[0].rel_type, relationship_types::IMAGE);
        assert!(!rels[0].is_external());
        assert!(rels[1].is_external());
    }
}
