use super::document::{PartScope, PmlDocument};
use super::sites::{locate, COLOR_ATTR, TYPEFACE_ATTR};
use crate::error::Result;
use crate::inventory::{Findings, ImageKind, ImageResource};
use crate::package::archive::entry_file_name;
use crate::package::relationships::resolve_target;
use crate::settings::RebrandSettings;

/// Walk masters, layouts and slides, then theme assets and the media folder.
pub fn extract_findings(doc: &PmlDocument, settings: &RebrandSettings) -> Result<Findings> {
    let mut findings = Findings::new();
    let parts = doc.parts_in_order()?;

    for (scope, part) in &parts {
        collect_part(doc, *scope, part, settings, &mut findings);
    }

    collect_theme_assets(doc, &mut findings);

    if settings.include_media_fallback {
        collect_media_fallback(doc, &mut findings);
    }

    if settings.render_previews {
        collect_previews(doc, &parts, settings, &mut findings);
    }

    Ok(findings)
}

fn collect_part(
    doc: &PmlDocument,
    scope: PartScope,
    part: &str,
    settings: &RebrandSettings,
    findings: &mut Findings,
) {
    let xml = match doc.package().get_xml_part(part) {
        Ok(xml) => xml,
        Err(e) => {
            log::debug!("skipping part '{}': {}", part, e);
            return;
        }
    };

    let sites = locate(&xml, scope, settings.max_group_depth);

    for site in &sites.colors {
        if let Some(raw) = xml.attr_local(site.node, COLOR_ATTR) {
            findings.add_color(site.scope, raw);
        }
    }

    for site in &sites.fonts {
        if let Some(name) = xml.attr_local(site.node, TYPEFACE_ATTR) {
            findings.add_font(name);
        }
    }

    for site in sites.images {
        let media_path = site
            .relationship_id(&xml)
            .and_then(|r_id| doc.package().resolve_relationship(part, r_id));
        let Some(bytes) = media_path
            .as_deref()
            .and_then(|path| doc.package().get_part(path))
        else {
            log::debug!("picture '{}' in '{}' has no readable media", site.uid, part);
            continue;
        };

        findings.add_image(ImageResource {
            uid: site.uid,
            raw_bytes: Some(bytes.to_vec()),
            media_path,
            display_name: site.display_name,
            group_label: site.group_label,
            kind: site.kind,
        });
    }
}

fn collect_theme_assets(doc: &PmlDocument, findings: &mut Findings) {
    let package = doc.package();
    for theme in doc.theme_parts() {
        let theme_file = entry_file_name(&theme).to_string();
        for rel in package.relationships(&theme) {
            if rel.is_external() || !rel.target.contains("media/") {
                continue;
            }
            let media_path = resolve_target(&theme, &rel.target);
            let Some(bytes) = package.get_part(&media_path) else {
                continue;
            };
            findings.add_image(ImageResource {
                uid: format!("pptx_theme_img_{}_{}", theme_file, rel.id),
                raw_bytes: Some(bytes.to_vec()),
                display_name: entry_file_name(&media_path).to_string(),
                media_path: Some(media_path),
                group_label: format!("Theme {}", theme_file),
                kind: ImageKind::ThemeAsset,
            });
        }
    }
}

fn collect_media_fallback(doc: &PmlDocument, findings: &mut Findings) {
    let package = doc.package();
    let remaining: Vec<&str> = package
        .part_names()
        .filter(|name| name.starts_with("ppt/media/") && !findings.has_media_path(name))
        .collect();

    for name in remaining {
        findings.add_image(ImageResource {
            uid: name.to_string(),
            raw_bytes: package.get_part(name).map(<[u8]>::to_vec),
            media_path: Some(name.to_string()),
            display_name: entry_file_name(name).to_string(),
            group_label: "All Media".to_string(),
            kind: ImageKind::BulkMedia,
        });
    }
}

#[cfg(feature = "imaging")]
fn collect_previews(
    doc: &PmlDocument,
    parts: &[(PartScope, String)],
    settings: &RebrandSettings,
    findings: &mut Findings,
) {
    for (scope, part) in parts {
        let PartScope::Slide(index) = scope else {
            continue;
        };
        if let Some(jpeg) = super::preview::render_slide(doc, part, settings) {
            findings.previews.insert(index + 1, jpeg);
        }
    }
}

#[cfg(not(feature = "imaging"))]
fn collect_previews(
    _doc: &PmlDocument,
    _parts: &[(PartScope, String)],
    _settings: &RebrandSettings,
    _findings: &mut Findings,
) {
    log::debug!("slide previews need the `imaging` feature");
}
