//! Best-effort JPEG thumbnails of slides: background picture plus picture
//! shapes at their positions. Text and vector shapes are not drawn.

use super::document::PmlDocument;
use super::shapes::{collect_shapes, fill_of, Fill, Shape, ShapeKind};
use super::sites::background_properties;
use crate::settings::RebrandSettings;
use crate::xml::arena::XmlDocument;
use crate::xml::namespaces::{A, P, R};
use image::codecs::jpeg::JpegEncoder;
use image::imageops::{self, FilterType};
use image::{DynamicImage, Rgba, RgbaImage};
use indextree::NodeId;
use std::io::Cursor;

const JPEG_QUALITY: u8 = 85;
/// Longest preview side in pixels, whatever the slide aspect ratio.
const MAX_PREVIEW_SIDE: u32 = 8192;
/// Pictures may overhang the canvas, but never by more than this many canvas
/// widths or heights.
const MAX_OVERHANG: u32 = 4;

/// Render `slide_part` at `settings.preview_width` pixels wide. `None` when
/// the slide size is unknown or encoding fails.
pub fn render_slide(doc: &PmlDocument, slide_part: &str, settings: &RebrandSettings) -> Option<Vec<u8>> {
    let (slide_cx, slide_cy) = doc.slide_size().filter(|(cx, cy)| *cx > 0 && *cy > 0)?;
    let width = settings.preview_width.clamp(1, MAX_PREVIEW_SIDE);
    let height = (u64::from(width).saturating_mul(slide_cy) / slide_cx)
        .clamp(1, u64::from(MAX_PREVIEW_SIDE)) as u32;
    let scale = Scale {
        px_per_emu: f64::from(width) / slide_cx as f64,
    };

    let xml = match doc.package().get_xml_part(slide_part) {
        Ok(xml) => xml,
        Err(e) => {
            log::debug!("no preview for '{}': {}", slide_part, e);
            return None;
        }
    };
    let root = xml.root()?;
    let c_sld = xml.first_child(root, &P::cSld())?;

    let mut canvas = RgbaImage::from_pixel(width, height, Rgba([255, 255, 255, 255]));

    if let Some(background) = background_blip(&xml, c_sld)
        .and_then(|blip| load_blip(doc, slide_part, &xml, blip))
    {
        let stretched = background.resize_exact(width, height, FilterType::Triangle);
        imageops::overlay(&mut canvas, &stretched.to_rgba8(), 0, 0);
    }

    if let Some(sp_tree) = xml.first_child(c_sld, &P::spTree()) {
        let shapes = collect_shapes(&xml, sp_tree, settings.max_group_depth);
        for shape in shapes.iter().filter(|s| s.kind == ShapeKind::Picture) {
            paste_picture(doc, slide_part, &xml, &shapes, shape, scale, &mut canvas);
        }
    }

    let rgb = DynamicImage::ImageRgba8(canvas).to_rgb8();
    let mut buffer = Cursor::new(Vec::new());
    let encoded = JpegEncoder::new_with_quality(&mut buffer, JPEG_QUALITY).encode_image(&rgb);
    if let Err(e) = encoded {
        log::debug!("preview encoding failed for '{}': {}", slide_part, e);
        return None;
    }
    Some(buffer.into_inner())
}

#[derive(Debug, Clone, Copy)]
struct Scale {
    px_per_emu: f64,
}

impl Scale {
    fn px(self, emu: i64) -> i64 {
        (emu as f64 * self.px_per_emu).round() as i64
    }
}

fn paste_picture(
    doc: &PmlDocument,
    slide_part: &str,
    xml: &XmlDocument,
    shapes: &[Shape],
    shape: &Shape,
    scale: Scale,
    canvas: &mut RgbaImage,
) {
    let Some((mut x, mut y, cx, cy)) = placement(xml, shape) else {
        return;
    };

    let mut parent = shape.parent;
    while let Some(index) = parent {
        let group = &shapes[index];
        if let Some((gx, gy, _, _)) = placement(xml, group) {
            x += gx;
            y += gy;
        }
        parent = group.parent;
    }

    let limit_w = canvas.width().saturating_mul(MAX_OVERHANG);
    let limit_h = canvas.height().saturating_mul(MAX_OVERHANG);
    let (Some(w), Some(h)) = (pixel_extent(scale.px(cx), limit_w), pixel_extent(scale.px(cy), limit_h)) else {
        return;
    };
    let Some(picture) = shape
        .blip(xml)
        .and_then(|blip| load_blip(doc, slide_part, xml, blip))
    else {
        return;
    };

    let resized = picture.resize_exact(w, h, FilterType::Triangle);
    imageops::overlay(canvas, &resized.to_rgba8(), scale.px(x), scale.px(y));
}

/// A positive pixel length clamped to `limit`; `None` when empty.
fn pixel_extent(px: i64, limit: u32) -> Option<u32> {
    if px <= 0 {
        return None;
    }
    Some(u32::try_from(px).unwrap_or(u32::MAX).min(limit))
}

/// Offset and extent in EMU from the shape's transform.
fn placement(xml: &XmlDocument, shape: &Shape) -> Option<(i64, i64, i64, i64)> {
    let xfrm = shape.transform(xml)?;
    let off = xml.first_child(xfrm, &A::off())?;
    let x = xml.attr_local(off, "x")?.parse().ok()?;
    let y = xml.attr_local(off, "y")?.parse().ok()?;
    let (cx, cy) = xml
        .first_child(xfrm, &A::ext())
        .and_then(|ext| -> Option<(i64, i64)> {
            Some((
                xml.attr_local(ext, "cx")?.parse().ok()?,
                xml.attr_local(ext, "cy")?.parse().ok()?,
            ))
        })
        .unwrap_or((0, 0));
    Some((x, y, cx, cy))
}

fn background_blip(xml: &XmlDocument, c_sld: NodeId) -> Option<NodeId> {
    match fill_of(xml, background_properties(xml, c_sld)?)? {
        Fill::Picture(blip_fill) => xml.first_child(blip_fill, &A::blip()),
        _ => None,
    }
}

fn load_blip(doc: &PmlDocument, part: &str, xml: &XmlDocument, blip: NodeId) -> Option<DynamicImage> {
    let r_id = xml.attr(blip, &R::embed())?;
    let media_path = doc.package().resolve_relationship(part, r_id)?;
    let bytes = doc.package().get_part(&media_path)?;
    match image::load_from_memory(bytes) {
        Ok(img) => Some(img),
        Err(e) => {
            log::debug!("cannot decode '{}' for preview: {}", media_path, e);
            None
        }
    }
}
