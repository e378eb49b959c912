use crate::error::{RebrandError, Result};
use crate::package::relationships::relationship_types;
use crate::package::OoxmlPackage;
use crate::xml::arena::XmlDocument;
use crate::xml::namespaces::{R, S};

pub const WORKBOOK_PART: &str = "xl/workbook.xml";
pub const STYLES_PART: &str = "xl/styles.xml";

/// A worksheet as listed in the workbook.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetRef {
    pub title: String,
    pub part: String,
}

pub struct SmlDocument {
    package: OoxmlPackage,
}

impl SmlDocument {
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

    pub fn workbook_part(&self) -> String {
        self.package
            .main_part()
            .filter(|part| self.package.has_part(part))
            .unwrap_or_else(|| WORKBOOK_PART.to_string())
    }

    pub fn workbook(&self) -> Result<XmlDocument> {
        let part = self.workbook_part();
        if !self.package.has_part(&part) {
            return Err(RebrandError::MissingPart {
                part_path: part,
                document_type: "Excel".to_string(),
            });
        }
        self.package.get_xml_part(&part)
    }

    /// Worksheets in workbook order. Sheets whose part cannot be resolved
    /// (chart sheets, dangling ids) are left out.
    pub fn sheets(&self) -> Result<Vec<SheetRef>> {
        let part = self.workbook_part();
        let workbook = self.workbook()?;
        let Some(root) = workbook.root() else {
            return Ok(Vec::new());
        };
        let Some(sheets) = workbook.first_child(root, &S::sheets()) else {
            return Ok(Vec::new());
        };

        let rels = self.package.relationships(&part);
        let refs = workbook
            .elements_by_name(sheets, &S::sheet())
            .filter_map(|sheet| {
                let title = workbook.attr_local(sheet, "name")?;
                let r_id = workbook.attr(sheet, &R::id())?;
                let rel = rels.iter().find(|rel| {
                    rel.id == r_id
                        && rel.rel_type == relationship_types::WORKSHEET
                        && !rel.is_external()
                })?;
                let target = crate::package::relationships::resolve_target(&part, &rel.target);
                self.package.has_part(&target).then(|| SheetRef {
                    title: title.to_string(),
                    part: target,
                })
            })
            .collect();
        Ok(refs)
    }

    pub fn styles_part(&self) -> Option<String> {
        self.package
            .related_parts(&self.workbook_part(), relationship_types::STYLES)
            .into_iter()
            .next()
            .or_else(|| Some(STYLES_PART.to_string()))
            .filter(|part| self.package.has_part(part))
    }

    /// Drawing part attached to a worksheet, if any.
    pub fn drawing_part(&self, sheet_part: &str, sheet: &XmlDocument) -> Option<String> {
        let root = sheet.root()?;
        match sheet
            .first_child(root, &S::drawing())
            .and_then(|drawing| sheet.attr(drawing, &R::id()))
        {
            Some(r_id) => self.package.resolve_relationship(sheet_part, r_id),
            None => self
                .package
                .related_parts(sheet_part, relationship_types::DRAWING)
                .into_iter()
                .next(),
        }
    }
}
