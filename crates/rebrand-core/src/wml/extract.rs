use super::document::WmlDocument;
use super::sites::{color_sites, font_sites, rfonts_family};
use super::styles::StyleFonts;
use crate::error::Result;
use crate::inventory::{Findings, ImageKind, ImageResource};
use crate::package::archive::entry_file_name;
use crate::settings::RebrandSettings;
use crate::xml::arena::XmlDocument;
use crate::xml::namespaces::W;
use indextree::NodeId;

/// Walk every story part, the style sheet and the media folders of a Word
/// package.
pub fn extract_findings(doc: &WmlDocument, settings: &RebrandSettings) -> Result<Findings> {
    let mut findings = Findings::new();

    let styles_xml = match doc.styles() {
        Ok(styles) => styles,
        Err(e) => {
            log::debug!("skipping unreadable styles part: {}", e);
            None
        }
    };
    let style_fonts = styles_xml
        .as_ref()
        .map(StyleFonts::from_styles)
        .unwrap_or_default();

    let main_part = doc.main_part();
    for part in doc.story_parts() {
        let xml = match doc.package().get_xml_part(&part) {
            Ok(xml) => xml,
            // The main document is required; other stories are best effort.
            Err(e) if part == main_part => return Err(e),
            Err(e) => {
                log::debug!("skipping story part '{}': {}", part, e);
                continue;
            }
        };
        collect_story(&xml, &style_fonts, &mut findings);
    }

    if let Some(styles_xml) = &styles_xml {
        for site in font_sites(styles_xml) {
            if let Some(name) = styles_xml.attr(site.node, &site.attr) {
                findings.add_font(name);
            }
        }
    }

    collect_media(doc, settings, &mut findings);
    Ok(findings)
}

fn collect_story(xml: &XmlDocument, style_fonts: &StyleFonts, findings: &mut Findings) {
    for site in color_sites(xml) {
        if let Some(raw) = xml.attr(site.node, &site.attr) {
            findings.add_color(site.scope, raw);
        }
    }

    for site in font_sites(xml) {
        if let Some(name) = xml.attr(site.node, &site.attr) {
            findings.add_font(name);
        }
    }

    let Some(root) = xml.root() else {
        return;
    };
    let run = W::r();
    for node in xml.descendants(root).filter(|&n| xml.is(n, &run)) {
        if has_direct_font(xml, node) {
            continue;
        }
        let style_id = paragraph_style(xml, node);
        if let Some(font) = style_fonts.resolve(style_id) {
            findings.add_font(font);
        }
    }
}

fn has_direct_font(xml: &XmlDocument, run: NodeId) -> bool {
    xml.first_child(run, &W::rPr())
        .and_then(|rpr| xml.first_child(rpr, &W::rFonts()))
        .and_then(|rfonts| rfonts_family(xml, rfonts))
        .is_some()
}

fn paragraph_style(xml: &XmlDocument, run: NodeId) -> Option<&str> {
    let paragraph = xml.ancestor_named(run, &W::p())?;
    let ppr = xml.first_child(paragraph, &W::pPr())?;
    let pstyle = xml.first_child(ppr, &W::pStyle())?;
    xml.attr(pstyle, &W::val())
}

fn collect_media(doc: &WmlDocument, settings: &RebrandSettings, findings: &mut Findings) {
    let package = doc.package();

    for name in package.part_names().filter(|n| n.starts_with("word/media/")) {
        findings.add_image(ImageResource {
            uid: name.to_string(),
            raw_bytes: package.get_part(name).map(<[u8]>::to_vec),
            media_path: Some(name.to_string()),
            display_name: entry_file_name(name).to_string(),
            group_label: "Document".to_string(),
            kind: ImageKind::BulkMedia,
        });
    }

    if !settings.include_embedded_objects {
        return;
    }
    for name in package
        .part_names()
        .filter(|n| n.contains("embeddings") || n.contains("oleObject"))
    {
        findings.add_image(ImageResource {
            uid: format!("embed_{}", name),
            raw_bytes: package.get_part(name).map(<[u8]>::to_vec),
            media_path: Some(name.to_string()),
            display_name: format!("Embedded: {}", entry_file_name(name)),
            group_label: "Embedded Objects".to_string(),
            kind: ImageKind::EmbeddedObject,
        });
    }
}
