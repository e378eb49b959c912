use super::document::{SheetRef, SmlDocument};
use super::drawing::sheet_pictures;
use super::styles::{record_sheet_usage, style_sites, StyleRole, StyleSheet, StyleUsage};
use crate::error::Result;
use crate::inventory::{ColorScope, Findings, ImageKind, ImageResource};
use crate::xml::arena::XmlDocument;
use crate::xml::namespaces::S;

/// Walk every worksheet, the style entries its cells reference, its tab color
/// and its floating pictures.
pub fn extract_findings(doc: &SmlDocument) -> Result<Findings> {
    let mut findings = Findings::new();
    let sheets = doc.sheets()?;

    let styles_part = doc.styles_part();
    let styles_xml = styles_part
        .as_deref()
        .and_then(|part| match doc.package().get_xml_part(part) {
            Ok(xml) => Some(xml),
            Err(e) => {
                log::debug!("skipping unreadable style sheet '{}': {}", part, e);
                None
            }
        });
    let style_sheet = styles_xml
        .as_ref()
        .map(StyleSheet::index)
        .unwrap_or_default();

    let mut usage = StyleUsage::default();
    for sheet in &sheets {
        let sheet_xml = match doc.package().get_xml_part(&sheet.part) {
            Ok(xml) => xml,
            Err(e) => {
                log::debug!("skipping worksheet '{}': {}", sheet.part, e);
                continue;
            }
        };

        record_sheet_usage(&sheet_xml, &style_sheet, &mut usage);

        if let Some(tab) = tab_color(&sheet_xml) {
            findings.add_color(ColorScope::Background, tab);
        }

        collect_pictures(doc, sheet, &sheet_xml, &mut findings);
    }

    if let Some(styles_xml) = &styles_xml {
        for site in style_sites(styles_xml, &style_sheet, &usage) {
            let Some(value) = styles_xml.attr_local(site.node, site.attr()) else {
                continue;
            };
            match site.role {
                StyleRole::FontName => findings.add_font(value),
                StyleRole::FontColor => findings.add_color(ColorScope::Text, value),
                StyleRole::FillColor => {
                    findings.add_color(ColorScope::Shape, value);
                    findings.add_color(ColorScope::Background, value);
                }
                StyleRole::BorderColor => findings.add_color(ColorScope::Shape, value),
            }
        }
    }

    Ok(findings)
}

/// `sheetPr/tabColor/@rgb`.
pub(crate) fn tab_color(sheet_xml: &XmlDocument) -> Option<&str> {
    let root = sheet_xml.root()?;
    let pr = sheet_xml.first_child(root, &S::sheetPr())?;
    let tab = sheet_xml.first_child(pr, &S::tabColor())?;
    sheet_xml.attr_local(tab, "rgb")
}

fn collect_pictures(doc: &SmlDocument, sheet: &SheetRef, sheet_xml: &XmlDocument, findings: &mut Findings) {
    let Some(drawing) = doc.drawing_part(&sheet.part, sheet_xml) else {
        return;
    };

    for (index, media_path) in sheet_pictures(doc, &drawing).into_iter().enumerate() {
        let raw_bytes = media_path
            .as_deref()
            .and_then(|path| doc.package().get_part(path))
            .map(<[u8]>::to_vec);
        findings.add_image(ImageResource {
            uid: format!("xlsx_{}_{}", sheet.title, index),
            raw_bytes,
            media_path,
            display_name: format!("{} Image {}", sheet.title, index + 1),
            group_label: format!("Sheet {}", sheet.title),
            kind: ImageKind::SheetImage,
        });
    }
}
