//! Attribute locations in WordprocessingML that carry colors and fonts.
//!
//! Extraction reads these sites and rewriting writes them, so both passes see
//! exactly the same attributes.

use crate::inventory::ColorScope;
use crate::xml::arena::XmlDocument;
use crate::xml::namespaces::W;
use crate::xml::XName;
use indextree::NodeId;

#[derive(Debug, Clone, PartialEq)]
pub struct ColorSite {
    pub node: NodeId,
    pub attr: XName,
    pub scope: ColorScope,
}

impl ColorSite {
    /// Theme attributes on the same element that Word resolves before the
    /// literal value.
    pub fn theme_overrides(&self) -> [XName; 3] {
        if self.attr == W::fill() {
            W::theme_fill_attributes()
        } else {
            W::theme_color_attributes()
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FontSite {
    pub node: NodeId,
    pub attr: XName,
}

/// Run colors, shading fills, border colors and the page background, in
/// document order.
pub fn color_sites(doc: &XmlDocument) -> Vec<ColorSite> {
    let Some(root) = doc.root() else {
        return Vec::new();
    };

    let color = W::color();
    let shd = W::shd();
    let background = W::background();
    let bdr = W::bdr();

    let mut sites = Vec::new();
    for node in doc.descendants(root) {
        let Some(name) = doc.name(node) else {
            continue;
        };

        let site = if name == &color {
            Some((W::val(), ColorScope::Text))
        } else if name == &shd {
            Some((W::fill(), ColorScope::Shape))
        } else if name == &background {
            Some((W::color_attr(), ColorScope::Background))
        } else if name == &bdr || parent_is_border_container(doc, node) {
            Some((W::color_attr(), ColorScope::Shape))
        } else {
            None
        };

        if let Some((attr, scope)) = site {
            if doc.attr(node, &attr).is_some() {
                sites.push(ColorSite { node, attr, scope });
            }
        }
    }
    sites
}

/// Every family-name attribute of every `w:rFonts`.
pub fn font_sites(doc: &XmlDocument) -> Vec<FontSite> {
    let Some(root) = doc.root() else {
        return Vec::new();
    };

    let rfonts = W::rFonts();
    let mut sites = Vec::new();
    for node in doc.descendants(root).filter(|&n| doc.is(n, &rfonts)) {
        for attr in W::font_attributes() {
            if doc.attr(node, &attr).is_some() {
                sites.push(FontSite { node, attr });
            }
        }
    }
    sites
}

/// First literal family named by a `w:rFonts` element.
pub fn rfonts_family(doc: &XmlDocument, rfonts: NodeId) -> Option<&str> {
    W::font_attributes()
        .into_iter()
        .filter_map(|attr| doc.attr(rfonts, &attr))
        .find(|name| !name.is_empty() && !name.starts_with('+'))
}

/// `w:pBdr`, `w:tblBorders`, `w:tcBorders`, `w:pgBorders` and friends.
fn parent_is_border_container(doc: &XmlDocument, node: NodeId) -> bool {
    doc.parent(node)
        .and_then(|parent| doc.name(parent))
        .map(|name| {
            name.namespace.as_deref() == Some(W::NS)
                && (name.local_name.contains("Border") || name.local_name.ends_with("Bdr"))
        })
        .unwrap_or(false)
}
