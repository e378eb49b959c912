//! Archive rewriting, image re-encoding and the replacement session.

mod common;

use common::*;
use pretty_assertions::assert_eq;
use rebrand_core::imaging::reencode_image;
use rebrand_core::package::{list_entries, read_entry, rewrite_entries};
use rebrand_core::{
    apply, extract, ColorMap, DocumentFormat, FontMap, RebrandSettings, ReplacementSession,
};
use std::collections::HashMap;

#[test]
fn pk001_rewrite_with_no_replacements_keeps_every_entry() {
    let original = pptx(&branded_slide());
    let rewritten = rewrite_entries(&original, &HashMap::new()).unwrap();

    let names = list_entries(&original).unwrap();
    assert_eq!(list_entries(&rewritten).unwrap(), names);
    for name in &names {
        assert_eq!(
            read_entry(&rewritten, name).unwrap(),
            read_entry(&original, name).unwrap()
        );
    }
}

#[test]
fn pk002_rewrite_replaces_only_named_entries() {
    let original = docx(&branded_document_body());
    let mut replacements = HashMap::new();
    replacements.insert("word/media/image1.png".to_string(), b"swapped".to_vec());
    replacements.insert("word/media/absent.png".to_string(), b"ignored".to_vec());

    let rewritten = rewrite_entries(&original, &replacements).unwrap();

    assert_eq!(read_entry(&rewritten, "word/media/image1.png").unwrap(), b"swapped");
    assert_eq!(list_entries(&rewritten).unwrap(), list_entries(&original).unwrap());
    assert!(read_entry(&rewritten, "word/media/absent.png").is_err());
}

#[cfg(feature = "imaging")]
#[test]
fn pk003_malformed_replacement_bytes_leave_the_original_media() {
    let garbage = b"\x89PNG but truncated".to_vec();
    assert_eq!(reencode_image(&garbage, ".png"), None);
    assert_eq!(reencode_image(&garbage, ".jpg"), None);
    assert_eq!(reencode_image(&[], ".png"), None);

    let mut session = ReplacementSession::new();
    session.persist_image("pptx_0_1", garbage.clone());
    session.persist_image("ppt/media/image3.png", Vec::new());
    session.persist_theme_image("ppt/media/image2.png", garbage);

    let bytes = pptx(&branded_slide());
    let inventory = extract(&bytes, DocumentFormat::Presentation, &RebrandSettings::default()).unwrap();
    let out = apply(inventory, &ColorMap::new(), &FontMap::new(), &session.replacements()).unwrap();

    assert_eq!(read_entry(&out, "ppt/media/image1.png").unwrap(), PNG_LOGO);
    assert_eq!(read_entry(&out, "ppt/media/image2.png").unwrap(), PNG_THEME);
    assert_eq!(read_entry(&out, "ppt/media/image3.png").unwrap(), PNG_ORPHAN);
}

#[test]
fn pk004_session_feeds_apply_and_can_be_cleared() {
    let mut session = ReplacementSession::new();
    session.persist_image("pptx_0_1", solid_png([255, 0, 0, 255]));
    session.persist_theme_image("ppt/media/image2.png", solid_png([0, 0, 255, 255]));

    let settings = RebrandSettings::default();
    let bytes = pptx(&branded_slide());
    let inventory = extract(&bytes, DocumentFormat::Presentation, &settings).unwrap();
    let out = apply(inventory, &ColorMap::new(), &FontMap::new(), &session.replacements()).unwrap();

    assert_eq!(first_pixel(&read_entry(&out, "ppt/media/image1.png").unwrap()), [255, 0, 0, 255]);
    assert_eq!(first_pixel(&read_entry(&out, "ppt/media/image2.png").unwrap()), [0, 0, 255, 255]);

    session.clear_all();
    let inventory = extract(&bytes, DocumentFormat::Presentation, &settings).unwrap();
    let out = apply(inventory, &ColorMap::new(), &FontMap::new(), &session.replacements()).unwrap();
    assert_eq!(read_entry(&out, "ppt/media/image1.png").unwrap(), PNG_LOGO);
}

#[test]
fn pk005_pdf_bytes_round_trip() {
    let pdf = b"%PDF-1.4\n%\xE2\xE3\xCF\xD3\n".to_vec();
    let inventory = rebrand_core::extract_file("deck.pdf", &pdf, &RebrandSettings::default()).unwrap();
    assert_eq!(inventory.format, DocumentFormat::Pdf);

    let colors: ColorMap = [("#000000", "#FFFFFF")].into_iter().collect();
    let out = apply(inventory, &colors, &FontMap::new(), &Default::default()).unwrap();
    assert_eq!(out, pdf);
}

#[cfg(feature = "imaging")]
#[test]
fn pk010_replacement_png_is_reencoded_for_a_jpeg_slot() {
    let mut png = Vec::new();
    image::RgbaImage::from_pixel(4, 4, image::Rgba([232, 119, 34, 255]))
        .write_to(&mut std::io::Cursor::new(&mut png), image::ImageFormat::Png)
        .unwrap();

    let jpeg = reencode_image(&png, ".jpeg").unwrap();
    assert_eq!(&jpeg[..2], &[0xFF, 0xD8]);
    assert_eq!(
        image::guess_format(&jpeg).unwrap(),
        image::ImageFormat::Jpeg
    );
}
