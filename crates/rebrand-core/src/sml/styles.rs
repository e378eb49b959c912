//! Cell formats of `xl/styles.xml` and the attributes of the font, fill and
//! border entries that cells reference.

use crate::xml::arena::XmlDocument;
use crate::xml::namespaces::S;
use crate::xml::XName;
use indextree::NodeId;
use std::collections::BTreeSet;

/// One `cellXfs/xf` entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CellFormat {
    pub font_id: Option<usize>,
    pub fill_id: Option<usize>,
    pub border_id: Option<usize>,
}

/// Positional index of the style sheet collections.
#[derive(Debug, Default)]
pub struct StyleSheet {
    formats: Vec<CellFormat>,
    fonts: Vec<NodeId>,
    fills: Vec<NodeId>,
    borders: Vec<NodeId>,
}

impl StyleSheet {
    pub fn index(doc: &XmlDocument) -> Self {
        let Some(root) = doc.root() else {
            return Self::default();
        };

        let collection = |list: XName, item: XName| -> Vec<NodeId> {
            doc.first_child(root, &list)
                .map(|l| doc.elements_by_name(l, &item).collect())
                .unwrap_or_default()
        };

        let formats = collection(S::cellXfs(), S::xf())
            .into_iter()
            .map(|xf| CellFormat {
                font_id: doc.attr_local(xf, "fontId").and_then(|v| v.parse().ok()),
                fill_id: doc.attr_local(xf, "fillId").and_then(|v| v.parse().ok()),
                border_id: doc.attr_local(xf, "borderId").and_then(|v| v.parse().ok()),
            })
            .collect();

        Self {
            formats,
            fonts: collection(S::fonts(), S::font()),
            fills: collection(S::fills(), S::fill()),
            borders: collection(S::borders(), S::border()),
        }
    }

    pub fn format(&self, style_index: usize) -> Option<&CellFormat> {
        self.formats.get(style_index)
    }
}

/// Font, fill and border ids referenced by at least one visited cell.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct StyleUsage {
    pub fonts: BTreeSet<usize>,
    pub fills: BTreeSet<usize>,
    pub borders: BTreeSet<usize>,
}

impl StyleUsage {
    pub fn record(&mut self, format: &CellFormat) {
        if let Some(id) = format.font_id {
            self.fonts.insert(id);
        }
        if let Some(id) = format.fill_id {
            self.fills.insert(id);
        }
        if let Some(id) = format.border_id {
            self.borders.insert(id);
        }
    }
}

/// Record the formats of every cell in a worksheet's `sheetData`. Cells
/// without an `s` attribute use format 0.
pub fn record_sheet_usage(sheet_xml: &XmlDocument, styles: &StyleSheet, usage: &mut StyleUsage) {
    let Some(root) = sheet_xml.root() else {
        return;
    };
    let Some(data) = sheet_xml.first_child(root, &S::sheetData()) else {
        return;
    };

    let cell = S::c();
    for row in sheet_xml.elements_by_name(data, &S::row()) {
        for c in sheet_xml.elements_by_name(row, &cell) {
            let style_index = match sheet_xml.attr_local(c, "s") {
                Some(raw) => match raw.parse() {
                    Ok(index) => index,
                    Err(_) => {
                        log::debug!("ignoring cell with style index '{}'", raw);
                        continue;
                    }
                },
                None => 0,
            };
            if let Some(format) = styles.format(style_index) {
                usage.record(format);
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleRole {
    FontName,
    FontColor,
    FillColor,
    BorderColor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleSite {
    pub node: NodeId,
    pub role: StyleRole,
}

impl StyleSite {
    /// Attribute holding the value: `val` for names, `rgb` for colors.
    pub fn attr(&self) -> &'static str {
        match self.role {
            StyleRole::FontName => "val",
            _ => "rgb",
        }
    }
}

/// Name and color attributes of the referenced style entries, fonts first,
/// then fills, then borders.
pub fn style_sites(doc: &XmlDocument, sheet: &StyleSheet, usage: &StyleUsage) -> Vec<StyleSite> {
    let mut sites = Vec::new();

    for font in usage.fonts.iter().filter_map(|&id| sheet.fonts.get(id)) {
        if let Some(name) = doc.first_child(*font, &S::name()) {
            if doc.attr_local(name, "val").is_some() {
                sites.push(StyleSite { node: name, role: StyleRole::FontName });
            }
        }
        if let Some(color) = doc.first_child(*font, &S::color()) {
            if doc.attr_local(color, "rgb").is_some() {
                sites.push(StyleSite { node: color, role: StyleRole::FontColor });
            }
        }
    }

    for fill in usage.fills.iter().filter_map(|&id| sheet.fills.get(id)) {
        let Some(pattern) = doc.first_child(*fill, &S::patternFill()) else {
            continue;
        };
        if doc.attr_local(pattern, "patternType") != Some("solid") {
            continue;
        }
        if let Some(fg) = doc.first_child(pattern, &S::fgColor()) {
            if doc.attr_local(fg, "rgb").is_some() {
                sites.push(StyleSite { node: fg, role: StyleRole::FillColor });
            }
        }
    }

    for border in usage.borders.iter().filter_map(|&id| sheet.borders.get(id)) {
        for side in S::BORDER_SIDES {
            let Some(side) = doc.first_child(*border, &XName::new(S::NS, side)) else {
                continue;
            };
            if let Some(color) = doc.first_child(side, &S::color()) {
                if doc.attr_local(color, "rgb").is_some() {
                    sites.push(StyleSite { node: color, role: StyleRole::BorderColor });
                }
            }
        }
    }

    sites
}
