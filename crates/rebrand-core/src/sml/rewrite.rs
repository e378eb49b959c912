use super::document::{SheetRef, SmlDocument};
use super::drawing::{drawing_pictures, sheet_pictures};
use super::extract::tab_color;
use super::styles::{record_sheet_usage, style_sites, StyleRole, StyleSheet, StyleUsage};
use crate::error::Result;
use crate::imaging::reencode_image;
use crate::inventory::{ColorMap, FontMap, ImageReplacements};
use crate::package::archive::entry_extension;
use crate::package::relationships::relationship_types;
use crate::xml::namespaces::{R, S};
use crate::xml::XName;
use std::collections::HashMap;

/// Rewrite referenced style entries, tab colors and sheet pictures, and
/// return the saved package.
///
/// Style entries are edited in place, so every other attribute and child of a
/// font, fill or border entry is kept. A replaced picture whose media part is
/// shared with other pictures gets a media part of its own.
pub fn rewrite(
    mut doc: SmlDocument,
    colors: &ColorMap,
    fonts: &FontMap,
    images: &ImageReplacements,
) -> Result<Vec<u8>> {
    let sheets = doc.sheets()?;
    let mut media_refs = media_reference_counts(&doc, &sheets);
    let styles_part = doc.styles_part();
    let style_sheet_xml = match styles_part.as_deref().map(|p| doc.package().get_xml_part(p)) {
        Some(Ok(xml)) => Some(xml),
        Some(Err(e)) => {
            log::debug!("style sheet left untouched: {}", e);
            None
        }
        None => None,
    };
    let style_sheet = style_sheet_xml
        .as_ref()
        .map(StyleSheet::index)
        .unwrap_or_default();

    let mut usage = StyleUsage::default();
    for sheet in &sheets {
        let mut sheet_xml = match doc.package().get_xml_part(&sheet.part) {
            Ok(xml) => xml,
            Err(e) => {
                log::debug!("worksheet '{}' left untouched: {}", sheet.part, e);
                continue;
            }
        };

        record_sheet_usage(&sheet_xml, &style_sheet, &mut usage);

        if let Some(new) = tab_color(&sheet_xml).and_then(|raw| colors.lookup_raw(raw)).cloned() {
            let tab = sheet_xml
                .root()
                .and_then(|root| sheet_xml.first_child(root, &S::sheetPr()))
                .and_then(|pr| sheet_xml.first_child(pr, &S::tabColor()));
            if let Some(tab) = tab {
                sheet_xml.set_attribute(tab, &XName::local("rgb"), &new.to_argb());
                doc.package_mut().put_xml_part(&sheet.part, &sheet_xml)?;
            }
        }

        if let Some(drawing) = doc.drawing_part(&sheet.part, &sheet_xml) {
            if let Err(e) = replace_pictures(&mut doc, &sheet.title, &drawing, images, &mut media_refs) {
                log::debug!("pictures in '{}' left as they were: {}", drawing, e);
            }
        }
    }

    if let (Some(part), Some(mut xml)) = (styles_part, style_sheet_xml) {
        let mut changed = 0;
        for site in style_sites(&xml, &style_sheet, &usage) {
            let Some(current) = xml.attr_local(site.node, site.attr()) else {
                continue;
            };
            let new = match site.role {
                StyleRole::FontName => fonts.lookup(current).map(str::to_string),
                _ => colors.lookup_raw(current).map(|c| c.to_argb()),
            };
            if let Some(new) = new {
                xml.set_attribute(site.node, &XName::local(site.attr()), &new);
                changed += 1;
            }
        }
        if changed > 0 {
            log::debug!("{} substitutions in '{}'", changed, part);
            doc.package_mut().put_xml_part(&part, &xml)?;
        }
    }

    doc.to_bytes()
}

/// How many sheet pictures point at each media part.
fn media_reference_counts(doc: &SmlDocument, sheets: &[SheetRef]) -> HashMap<String, usize> {
    let mut counts = HashMap::new();
    for sheet in sheets {
        let Ok(sheet_xml) = doc.package().get_xml_part(&sheet.part) else {
            continue;
        };
        let Some(drawing) = doc.drawing_part(&sheet.part, &sheet_xml) else {
            continue;
        };
        for media_path in sheet_pictures(doc, &drawing).into_iter().flatten() {
            *counts.entry(media_path).or_insert(0) += 1;
        }
    }
    counts
}

/// Write replacements for the pictures of one drawing. Media used by a single
/// picture is overwritten; shared media is left alone and the picture is
/// re-pointed at a new part.
fn replace_pictures(
    doc: &mut SmlDocument,
    sheet_title: &str,
    drawing: &str,
    images: &ImageReplacements,
    media_refs: &mut HashMap<String, usize>,
) -> Result<()> {
    let mut xml = doc.package().get_xml_part(drawing)?;
    let pictures = drawing_pictures(doc, drawing, &xml);
    let mut repointed = false;

    for (index, picture) in pictures.into_iter().enumerate() {
        let uid = format!("xlsx_{}_{}", sheet_title, index);
        let (Some(bytes), Some(media_path), Some(blip)) =
            (images.for_uid(&uid), picture.media_path, picture.blip)
        else {
            continue;
        };
        let extension = entry_extension(&media_path).unwrap_or(".png").to_string();
        let Some(encoded) = reencode_image(bytes, &extension) else {
            continue;
        };

        let refs = media_refs.get(&media_path).copied().unwrap_or(0);
        if refs <= 1 {
            doc.package_mut().set_part(&media_path, encoded);
            continue;
        }

        let prefix = match media_path.rsplit_once('/') {
            Some((dir, _)) => format!("{}/image", dir),
            None => "image".to_string(),
        };
        let package = doc.package_mut();
        let new_path = package.unused_part_name(&prefix, &extension);
        package.register_content_type_like(&media_path, &new_path)?;
        package.add_part(&new_path, encoded);
        let r_id = package.add_relationship(drawing, relationship_types::IMAGE, &new_path)?;
        xml.set_attribute(blip, &R::embed(), &r_id);
        media_refs.insert(media_path, refs - 1);
        repointed = true;
        log::debug!("'{}' moved to its own media part '{}'", uid, new_path);
    }

    if repointed {
        doc.package_mut().put_xml_part(drawing, &xml)?;
    }
    Ok(())
}
