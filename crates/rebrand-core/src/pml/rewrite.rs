use super::document::{PartScope, PmlDocument};
use super::sites::{locate, PartSites, COLOR_ATTR, TYPEFACE_ATTR};
use crate::error::Result;
use crate::imaging::reencode_image;
use crate::inventory::{ColorMap, FontMap, ImageReplacements};
use crate::package::archive::entry_extension;
use crate::settings::RebrandSettings;
use crate::xml::arena::XmlDocument;
use crate::xml::XName;

/// Rewrite colors, fonts and model-owned pictures in every master, layout and
/// slide, and return the saved package.
pub fn rewrite(
    mut doc: PmlDocument,
    colors: &ColorMap,
    fonts: &FontMap,
    images: &ImageReplacements,
    settings: &RebrandSettings,
) -> Result<Vec<u8>> {
    let parts = doc.parts_in_order()?;

    for (scope, part) in parts {
        if let Err(e) = rewrite_part(&mut doc, scope, &part, colors, fonts, images, settings) {
            log::debug!("leaving part '{}' as it was: {}", part, e);
        }
    }

    doc.to_bytes()
}

fn rewrite_part(
    doc: &mut PmlDocument,
    scope: PartScope,
    part: &str,
    colors: &ColorMap,
    fonts: &FontMap,
    images: &ImageReplacements,
    settings: &RebrandSettings,
) -> Result<()> {
    let mut xml = doc.package().get_xml_part(part)?;
    let sites = locate(&xml, scope, settings.max_group_depth);

    let changed = rewrite_colors(&mut xml, &sites, colors) + rewrite_fonts(&mut xml, &sites, fonts);
    replace_pictures(doc, part, &xml, &sites, images);

    if changed > 0 {
        log::debug!("{} substitutions in '{}'", changed, part);
        doc.package_mut().put_xml_part(part, &xml)?;
    }
    Ok(())
}

fn rewrite_colors(xml: &mut XmlDocument, sites: &PartSites, colors: &ColorMap) -> usize {
    let attr = XName::local(COLOR_ATTR);
    let mut changed = 0;
    for site in &sites.colors {
        let Some(new) = xml
            .attr_local(site.node, COLOR_ATTR)
            .and_then(|raw| colors.lookup_raw(raw))
            .map(|c| c.hex().to_string())
        else {
            continue;
        };
        xml.set_attribute(site.node, &attr, &new);
        changed += 1;
    }
    changed
}

fn rewrite_fonts(xml: &mut XmlDocument, sites: &PartSites, fonts: &FontMap) -> usize {
    let attr = XName::local(TYPEFACE_ATTR);
    let mut changed = 0;
    for site in &sites.fonts {
        let Some(new) = xml
            .attr_local(site.node, TYPEFACE_ATTR)
            .and_then(|name| fonts.lookup(name))
            .map(str::to_string)
        else {
            continue;
        };
        xml.set_attribute(site.node, &attr, &new);
        changed += 1;
    }
    changed
}

/// Write replacement bytes into the media parts behind picture sites.
fn replace_pictures(
    doc: &mut PmlDocument,
    part: &str,
    xml: &XmlDocument,
    sites: &PartSites,
    images: &ImageReplacements,
) {
    for site in &sites.images {
        let Some(bytes) = images.for_uid(&site.uid) else {
            continue;
        };
        let Some(media_path) = site
            .relationship_id(xml)
            .and_then(|r_id| doc.package().resolve_relationship(part, r_id))
        else {
            log::debug!("no media behind '{}', replacement skipped", site.uid);
            continue;
        };

        let extension = entry_extension(&media_path).unwrap_or(".png").to_string();
        let Some(encoded) = reencode_image(bytes, &extension) else {
            continue;
        };
        doc.package_mut().set_part(&media_path, encoded);
    }
}
