use super::sites::rfonts_family;
use crate::xml::arena::XmlDocument;
use crate::xml::namespaces::W;
use indextree::NodeId;
use std::collections::{HashMap, HashSet};

#[derive(Debug, Default)]
struct StyleEntry {
    based_on: Option<String>,
    font: Option<String>,
}

/// Font families declared by paragraph styles, for runs that name no font of
/// their own.
#[derive(Debug, Default)]
pub struct StyleFonts {
    styles: HashMap<String, StyleEntry>,
    default_paragraph: Option<String>,
    doc_default: Option<String>,
}

impl StyleFonts {
    pub fn from_styles(doc: &XmlDocument) -> Self {
        let mut table = Self::default();
        let Some(root) = doc.root() else {
            return table;
        };

        let style = W::style();
        for node in doc.elements_by_name(root, &style) {
            let Some(id) = doc.attr(node, &W::styleId()) else {
                continue;
            };

            let is_paragraph = doc.attr(node, &W::type_()) == Some("paragraph");
            let is_default = matches!(doc.attr(node, &W::default()), Some("1" | "true" | "on"));
            if is_paragraph && is_default && table.default_paragraph.is_none() {
                table.default_paragraph = Some(id.to_string());
            }

            let based_on = doc
                .first_child(node, &W::basedOn())
                .and_then(|b| doc.attr(b, &W::val()))
                .map(str::to_string);

            table.styles.insert(
                id.to_string(),
                StyleEntry {
                    based_on,
                    font: rpr_font(doc, node),
                },
            );
        }

        table.doc_default = doc
            .first_child(root, &W::docDefaults())
            .and_then(|d| doc.first_child(d, &W::rPrDefault()))
            .and_then(|d| rpr_font(doc, d));

        table
    }

    /// Font for a paragraph with the given `w:pStyle` (or none): the style's
    /// `basedOn` chain, then the default paragraph style, then `w:docDefaults`.
    pub fn resolve(&self, style_id: Option<&str>) -> Option<&str> {
        style_id
            .and_then(|id| self.chain_font(id))
            .or_else(|| {
                self.default_paragraph
                    .as_deref()
                    .and_then(|id| self.chain_font(id))
            })
            .or(self.doc_default.as_deref())
    }

    fn chain_font(&self, start: &str) -> Option<&str> {
        let mut seen = HashSet::new();
        let mut current = Some(start);
        while let Some(id) = current {
            if !seen.insert(id) {
                break;
            }
            let entry = self.styles.get(id)?;
            if let Some(font) = entry.font.as_deref() {
                return Some(font);
            }
            current = entry.based_on.as_deref();
        }
        None
    }
}

fn rpr_font(doc: &XmlDocument, owner: NodeId) -> Option<String> {
    let rpr = doc.first_child(owner, &W::rPr())?;
    let rfonts = doc.first_child(rpr, &W::rFonts())?;
    rfonts_family(doc, rfonts).map(str::to_string)
}
