//! Format detection and the extract/apply entry points.

use crate::error::{RebrandError, Result};
use crate::imaging::reencode_image;
use crate::inventory::{
    ColorMap, DocumentModel, Findings, FontMap, ImageKind, ImageReplacements, ImageResource,
    Inventory,
};
use crate::package::archive::{entry_extension, rewrite_entries};
use crate::settings::RebrandSettings;
use crate::types::DocumentFormat;
use std::collections::HashMap;

/// Classify a file by its extension alone (case-insensitive).
pub fn infer_format(file_name: &str) -> DocumentFormat {
    let extension = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();
    match extension.as_str() {
        "docx" => DocumentFormat::Word,
        "pptx" => DocumentFormat::Presentation,
        "xlsx" => DocumentFormat::Spreadsheet,
        "pdf" => DocumentFormat::Pdf,
        _ => DocumentFormat::Unknown,
    }
}

/// `deck.pptx` + `_rebranded` -> `deck_rebranded.pptx`.
pub fn output_file_name(file_name: &str, suffix: &str) -> String {
    let (dir, base) = match file_name.rfind(['/', '\\']) {
        Some(idx) => file_name.split_at(idx + 1),
        None => ("", file_name),
    };
    match base.rfind('.') {
        Some(idx) if idx > 0 => format!("{}{}{}{}", dir, &base[..idx], suffix, &base[idx..]),
        _ => format!("{}{}{}", dir, base, suffix),
    }
}

/// Infer the format from `file_name` and extract.
pub fn extract_file(file_name: &str, bytes: &[u8], settings: &RebrandSettings) -> Result<Inventory> {
    match infer_format(file_name) {
        DocumentFormat::Unknown => Err(RebrandError::UnsupportedFormat {
            file_name: file_name.to_string(),
        }),
        format => extract(bytes, format, settings),
    }
}

/// Parse a document and inventory its colors, fonts and images.
///
/// PDF input yields an empty inventory that carries the bytes through
/// unchanged.
pub fn extract(bytes: &[u8], format: DocumentFormat, settings: &RebrandSettings) -> Result<Inventory> {
    let inventory = match format {
        DocumentFormat::Unknown => {
            return Err(RebrandError::UnsupportedFormat {
                file_name: format!("<{}>", format),
            })
        }
        DocumentFormat::Pdf => Inventory::new(
            format,
            Findings::new(),
            DocumentModel::Pdf(bytes.to_vec()),
            settings,
        ),
        DocumentFormat::Word => extract_word(bytes, settings)?,
        DocumentFormat::Presentation => extract_presentation(bytes, settings)?,
        DocumentFormat::Spreadsheet => extract_spreadsheet(bytes, settings)?,
    };

    log::info!(
        "{}: {} text, {} shape, {} background colors, {} fonts, {} images",
        format,
        inventory.text_colors.len(),
        inventory.shape_colors.len(),
        inventory.background_colors.len(),
        inventory.fonts.len(),
        inventory.images.len()
    );
    Ok(inventory)
}

#[cfg(feature = "wml")]
fn extract_word(bytes: &[u8], settings: &RebrandSettings) -> Result<Inventory> {
    let doc = crate::wml::WmlDocument::from_bytes(bytes).map_err(into_parse_error)?;
    let findings = crate::wml::extract_findings(&doc, settings).map_err(into_parse_error)?;
    Ok(Inventory::new(DocumentFormat::Word, findings, DocumentModel::Word(doc), settings))
}

#[cfg(not(feature = "wml"))]
fn extract_word(_bytes: &[u8], _settings: &RebrandSettings) -> Result<Inventory> {
    Err(capability_missing(DocumentFormat::Word))
}

#[cfg(feature = "pml")]
fn extract_presentation(bytes: &[u8], settings: &RebrandSettings) -> Result<Inventory> {
    let doc = crate::pml::PmlDocument::from_bytes(bytes).map_err(into_parse_error)?;
    let findings = crate::pml::extract_findings(&doc, settings).map_err(into_parse_error)?;
    Ok(Inventory::new(
        DocumentFormat::Presentation,
        findings,
        DocumentModel::Presentation(doc),
        settings,
    ))
}

#[cfg(not(feature = "pml"))]
fn extract_presentation(_bytes: &[u8], _settings: &RebrandSettings) -> Result<Inventory> {
    Err(capability_missing(DocumentFormat::Presentation))
}

#[cfg(feature = "sml")]
fn extract_spreadsheet(bytes: &[u8], settings: &RebrandSettings) -> Result<Inventory> {
    let doc = crate::sml::SmlDocument::from_bytes(bytes).map_err(into_parse_error)?;
    let findings = crate::sml::extract_findings(&doc).map_err(into_parse_error)?;
    Ok(Inventory::new(
        DocumentFormat::Spreadsheet,
        findings,
        DocumentModel::Spreadsheet(doc),
        settings,
    ))
}

#[cfg(not(feature = "sml"))]
fn extract_spreadsheet(_bytes: &[u8], _settings: &RebrandSettings) -> Result<Inventory> {
    Err(capability_missing(DocumentFormat::Spreadsheet))
}

#[allow(dead_code)]
fn capability_missing(format: DocumentFormat) -> RebrandError {
    RebrandError::CapabilityMissing {
        format: format.display_name().to_string(),
    }
}

/// Loading errors surface as parse errors; missing parts keep their own kind.
fn into_parse_error(err: RebrandError) -> RebrandError {
    match err {
        RebrandError::MissingPart { .. } | RebrandError::Parse { .. } => err,
        other => RebrandError::parse(other),
    }
}

/// Apply substitution maps to the document owned by `inventory` and return
/// the rebranded file.
///
/// Colors and fonts are rewritten through the parsed model. Model-owned
/// pictures are written into their media parts before the package is saved;
/// everything else is substituted in the saved archive afterwards, and those
/// archive-level writes win over earlier ones for the same entry.
pub fn apply(
    inventory: Inventory,
    colors: &ColorMap,
    fonts: &FontMap,
    images: &ImageReplacements,
) -> Result<Vec<u8>> {
    let format = inventory.format;
    let (model, resources, settings) = inventory.into_parts();

    let saved = match model {
        DocumentModel::Pdf(bytes) => return Ok(bytes),
        #[cfg(feature = "wml")]
        DocumentModel::Word(doc) => crate::wml::rewrite(doc, colors, fonts)?,
        #[cfg(feature = "pml")]
        DocumentModel::Presentation(doc) => {
            crate::pml::rewrite(doc, colors, fonts, images, &settings)?
        }
        #[cfg(feature = "sml")]
        DocumentModel::Spreadsheet(doc) => crate::sml::rewrite(doc, colors, fonts, images)?,
    };

    let archive_level = archive_replacements(&resources, images);
    log::info!(
        "{}: applied {} color and {} font mappings, {} archive-level image substitutions",
        format,
        colors.len(),
        fonts.len(),
        archive_level.len()
    );

    if archive_level.is_empty() {
        return Ok(saved);
    }
    rewrite_entries(&saved, &archive_level)
}

/// Entry replacements applied after the package is saved: archive-level
/// resources by uid, then media paths used directly as keys, then theme
/// media. Later sources override earlier ones for the same entry.
fn archive_replacements(
    resources: &[ImageResource],
    images: &ImageReplacements,
) -> HashMap<String, Vec<u8>> {
    let mut entries = HashMap::new();

    for resource in resources.iter().filter(|r| !r.kind.is_model_owned()) {
        let (Some(bytes), Some(media_path)) =
            (images.for_uid(&resource.uid), resource.media_path.as_ref())
        else {
            continue;
        };
        let content = match resource.kind {
            ImageKind::EmbeddedObject => Some(bytes.to_vec()),
            _ => reencode_for(media_path, bytes),
        };
        if let Some(content) = content {
            entries.insert(media_path.clone(), content);
        }
    }

    for (key, bytes) in &images.by_uid {
        if key.contains("/media/") {
            if let Some(content) = reencode_for(key, bytes) {
                entries.insert(key.clone(), content);
            }
        }
    }

    for (media_path, bytes) in &images.theme_by_media_path {
        if let Some(content) = reencode_for(media_path, bytes) {
            entries.insert(media_path.clone(), content);
        }
    }

    entries
}

fn reencode_for(media_path: &str, bytes: &[u8]) -> Option<Vec<u8>> {
    reencode_image(bytes, entry_extension(media_path).unwrap_or(".png"))
}
