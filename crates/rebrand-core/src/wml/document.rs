use crate::error::Result;
use crate::package::OoxmlPackage;
use crate::xml::arena::XmlDocument;

pub const MAIN_DOCUMENT_PART: &str = "word/document.xml";
pub const STYLES_PART: &str = "word/styles.xml";

pub struct WmlDocument {
    package: OoxmlPackage,
}

impl WmlDocument {
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

    pub fn main_part(&self) -> String {
        self.package
            .main_part()
            .filter(|part| self.package.has_part(part))
            .unwrap_or_else(|| MAIN_DOCUMENT_PART.to_string())
    }

    /// Parts holding document text: the main document, then headers,
    /// footers, footnotes and endnotes in archive order.
    pub fn story_parts(&self) -> Vec<String> {
        let mut parts = vec![self.main_part()];
        parts.extend(
            self.package
                .part_names()
                .filter(|name| is_secondary_story(name))
                .map(str::to_string),
        );
        parts
    }

    pub fn styles(&self) -> Result<Option<XmlDocument>> {
        match self.package.get_part(STYLES_PART) {
            Some(_) => Ok(Some(self.package.get_xml_part(STYLES_PART)?)),
            None => Ok(None),
        }
    }
}

fn is_secondary_story(name: &str) -> bool {
    let Some(file) = name.strip_prefix("word/") else {
        return false;
    };
    if file.contains('/') || !file.ends_with(".xml") {
        return false;
    }
    file.starts_with("header")
        || file.starts_with("footer")
        || file == "footnotes.xml"
        || file == "endnotes.xml"
}
