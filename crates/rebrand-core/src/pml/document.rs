use crate::error::{RebrandError, Result};
use crate::inventory::ImageKind;
use crate::package::OoxmlPackage;
use crate::xml::arena::XmlDocument;
use crate::xml::namespaces::{P, R};
use crate::xml::XName;

pub const PRESENTATION_PART: &str = "ppt/presentation.xml";

/// Which kind of slide-like part a traversal step is in, with its 0-based
/// position in traversal order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartScope {
    Master(usize),
    Layout(usize),
    Slide(usize),
}

impl PartScope {
    /// Uid component for shapes in this part (`3`, `layout0`, `master1`).
    pub fn key(self) -> String {
        match self {
            Self::Master(i) => format!("master{}", i),
            Self::Layout(i) => format!("layout{}", i),
            Self::Slide(i) => i.to_string(),
        }
    }

    /// 1-based human label, also used as the image group.
    pub fn label(self) -> String {
        match self {
            Self::Master(i) => format!("Master {}", i + 1),
            Self::Layout(i) => format!("Layout {}", i + 1),
            Self::Slide(i) => format!("Slide {}", i + 1),
        }
    }

    pub fn background_uid(self) -> String {
        match self {
            Self::Master(i) => format!("pptx_master_bg_{}", i),
            Self::Layout(i) => format!("pptx_layout_bg_{}", i),
            Self::Slide(i) => format!("pptx_slide_bg_{}", i),
        }
    }

    pub fn background_kind(self) -> ImageKind {
        match self {
            Self::Master(_) => ImageKind::MasterBackground,
            Self::Layout(_) => ImageKind::LayoutBackground,
            Self::Slide(_) => ImageKind::SlideBackground,
        }
    }
}

pub struct PmlDocument {
    package: OoxmlPackage,
}

impl PmlDocument {
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let package = OoxmlPackage::open(bytes)?;
        Ok(Self { package })
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        self.package.save()
    }

    pub fn package(&self) -> &OoxmlPackage {
        &self.package
    }

    pub fn package_mut(&mut self) -> &mut OoxmlPackage {
        &mut self.package
    }

    pub fn presentation_part(&self) -> String {
        self.package
            .main_part()
            .filter(|part| self.package.has_part(part))
            .unwrap_or_else(|| PRESENTATION_PART.to_string())
    }

    pub fn presentation(&self) -> Result<XmlDocument> {
        let part = self.presentation_part();
        if !self.package.has_part(&part) {
            return Err(RebrandError::MissingPart {
                part_path: part,
                document_type: "PowerPoint".to_string(),
            });
        }
        self.package.get_xml_part(&part)
    }

    /// Masters, their layouts, then slides, each in declaration order.
    pub fn parts_in_order(&self) -> Result<Vec<(PartScope, String)>> {
        let presentation_part = self.presentation_part();
        let presentation = self.presentation()?;

        let masters = self.id_list_targets(
            &presentation,
            &presentation_part,
            &P::sldMasterIdLst(),
            &P::sldMasterId(),
        );
        let slides =
            self.id_list_targets(&presentation, &presentation_part, &P::sldIdLst(), &P::sldId());

        let mut parts = Vec::new();
        let mut layouts = Vec::new();
        for (i, master) in masters.into_iter().enumerate() {
            match self.package.get_xml_part(&master) {
                Ok(xml) => {
                    for layout in self.id_list_targets(
                        &xml,
                        &master,
                        &P::sldLayoutIdLst(),
                        &P::sldLayoutId(),
                    ) {
                        if !layouts.contains(&layout) {
                            layouts.push(layout);
                        }
                    }
                }
                Err(e) => log::debug!("cannot read layouts of '{}': {}", master, e),
            }
            parts.push((PartScope::Master(i), master));
        }
        parts.extend(
            layouts
                .into_iter()
                .enumerate()
                .map(|(i, part)| (PartScope::Layout(i), part)),
        );
        parts.extend(
            slides
                .into_iter()
                .enumerate()
                .map(|(i, part)| (PartScope::Slide(i), part)),
        );
        Ok(parts)
    }

    /// Slide width and height in EMU.
    pub fn slide_size(&self) -> Option<(u64, u64)> {
        let presentation = self.presentation().ok()?;
        let root = presentation.root()?;
        let size = presentation.first_child(root, &P::sldSz())?;
        let cx = presentation.attr_local(size, "cx")?.parse().ok()?;
        let cy = presentation.attr_local(size, "cy")?.parse().ok()?;
        Some((cx, cy))
    }

    /// Theme parts (`ppt/theme/themeN.xml`) in archive order.
    pub fn theme_parts(&self) -> Vec<String> {
        self.package
            .part_names()
            .filter(|name| {
                name.strip_prefix("ppt/theme/")
                    .map(|file| !file.contains('/') && file.ends_with(".xml"))
                    .unwrap_or(false)
            })
            .map(str::to_string)
            .collect()
    }

    fn id_list_targets(
        &self,
        xml: &XmlDocument,
        part: &str,
        list: &XName,
        item: &XName,
    ) -> Vec<String> {
        let Some(root) = xml.root() else {
            return Vec::new();
        };
        let Some(list) = xml.first_child(root, list) else {
            return Vec::new();
        };

        let rels = self.package.relationships(part);
        xml.elements_by_name(list, item)
            .filter_map(|node| {
                let r_id = xml.attr(node, &R::id())?;
                let rel = rels.iter().find(|rel| rel.id == r_id && !rel.is_external());
                if rel.is_none() {
                    log::debug!("unresolved relationship '{}' in '{}'", r_id, part);
                }
                rel.map(|rel| crate::package::relationships::resolve_target(part, &rel.target))
            })
            .filter(|target| self.package.has_part(target))
            .collect()
    }
}
