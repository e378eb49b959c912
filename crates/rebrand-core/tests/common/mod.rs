//! In-memory OOXML packages shared by the integration tests.
#![allow(dead_code)]

use std::io::{Cursor, Write};
use zip::write::{SimpleFileOptions, ZipWriter};

pub const PNG_LOGO: &[u8] = b"original-logo-bytes";
pub const PNG_THEME: &[u8] = b"theme-texture-bytes";
pub const PNG_ORPHAN: &[u8] = b"orphan-media-bytes";

const NS_P: &str = "http://schemas.openxmlformats.org/presentationml/2006/main";
const NS_A: &str = "http://schemas.openxmlformats.org/drawingml/2006/main";
const NS_R: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";
const NS_W: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";
const NS_S: &str = "http://schemas.openxmlformats.org/spreadsheetml/2006/main";
const NS_XDR: &str = "http://schemas.openxmlformats.org/drawingml/2006/spreadsheetDrawing";

const REL_BASE: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";

pub fn zip_package(entries: &[(&str, &[u8])]) -> Vec<u8> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    for (name, content) in entries {
        writer
            .start_file(*name, SimpleFileOptions::default())
            .unwrap();
        writer.write_all(content).unwrap();
    }
    writer.finish().unwrap().into_inner()
}

/// A 2x2 PNG filled with one color.
pub fn solid_png(rgba: [u8; 4]) -> Vec<u8> {
    let mut out = Cursor::new(Vec::new());
    image::RgbaImage::from_pixel(2, 2, image::Rgba(rgba))
        .write_to(&mut out, image::ImageFormat::Png)
        .unwrap();
    out.into_inner()
}

pub fn first_pixel(bytes: &[u8]) -> [u8; 4] {
    image::load_from_memory(bytes).unwrap().to_rgba8().get_pixel(0, 0).0
}

/// `(Id, short type, Target)` triples as a relationships part.
pub fn rels(items: &[(&str, &str, &str)]) -> String {
    let mut xml = String::from(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#,
    );
    for (id, short_type, target) in items {
        xml.push_str(&format!(
            r#"<Relationship Id="{}" Type="{}/{}" Target="{}"/>"#,
            id, REL_BASE, short_type, target
        ));
    }
    xml.push_str("</Relationships>");
    xml
}

// ============================================================================
// PRESENTATION
// ============================================================================

/// Slide tree with an orange rectangle holding dark grey Arial text, and a
/// picture named "Logo" pointing at `rId2`.
pub fn branded_slide() -> String {
    slide_with_tree(
        r#"<p:sp>
      <p:nvSpPr><p:cNvPr id="2" name="Rectangle 1"/><p:cNvSpPr/><p:nvPr/></p:nvSpPr>
      <p:spPr><a:xfrm><a:off x="0" y="0"/><a:ext cx="914400" cy="914400"/></a:xfrm><a:prstGeom prst="rect"><a:avLst/></a:prstGeom><a:solidFill><a:srgbClr val="E87722"/></a:solidFill></p:spPr>
      <p:txBody><a:bodyPr/><a:lstStyle/><a:p><a:r><a:rPr lang="en-US" sz="1800" dirty="0"><a:solidFill><a:srgbClr val="3C3C3C"/></a:solidFill><a:latin typeface="Arial" panose="020B0604020202020204" pitchFamily="34" charset="0"/></a:rPr><a:t>Hello</a:t></a:r></a:p></p:txBody>
    </p:sp>
    <p:pic>
      <p:nvPicPr><p:cNvPr id="3" name="Logo"/><p:cNvPicPr/><p:nvPr/></p:nvPicPr>
      <p:blipFill><a:blip r:embed="rId2"/><a:stretch><a:fillRect/></a:stretch></p:blipFill>
      <p:spPr><a:xfrm><a:off x="914400" y="914400"/><a:ext cx="457200" cy="457200"/></a:xfrm></p:spPr>
    </p:pic>"#,
    )
}

pub fn slide_with_tree(shapes: &str) -> String {
    slide_with_background("", shapes)
}

/// Slide whose `p:cSld` starts with `bg` (a whole `p:bg` element, or empty).
pub fn slide_with_background(bg: &str, shapes: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<p:sld xmlns:a="{a}" xmlns:r="{r}" xmlns:p="{p}"><p:cSld>{bg}<p:spTree><p:nvGrpSpPr><p:cNvPr id="1" name=""/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr><p:grpSpPr/>
    {shapes}
</p:spTree></p:cSld></p:sld>"#,
        a = NS_A,
        r = NS_R,
        p = NS_P,
        bg = bg,
        shapes = shapes
    )
}

fn master(bg: &str) -> String {
    format!(
        r#"<p:sldMaster xmlns:a="{a}" xmlns:r="{r}" xmlns:p="{p}"><p:cSld>{bg}<p:spTree><p:nvGrpSpPr><p:cNvPr id="1" name=""/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr><p:grpSpPr/></p:spTree></p:cSld><p:sldLayoutIdLst><p:sldLayoutId id="2147483649" r:id="rId1"/></p:sldLayoutIdLst></p:sldMaster>"#,
        a = NS_A,
        r = NS_R,
        p = NS_P,
        bg = bg
    )
}

fn layout(bg: &str) -> String {
    format!(
        r#"<p:sldLayout xmlns:a="{a}" xmlns:r="{r}" xmlns:p="{p}"><p:cSld>{bg}<p:spTree><p:nvGrpSpPr><p:cNvPr id="1" name=""/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr><p:grpSpPr/></p:spTree></p:cSld></p:sldLayout>"#,
        a = NS_A,
        r = NS_R,
        p = NS_P,
        bg = bg
    )
}

pub const MASTER_BG: &str =
    r#"<p:bg><p:bgPr><a:solidFill><a:srgbClr val="FFFFFF"/></a:solidFill><a:effectLst/></p:bgPr></p:bg>"#;

/// One master (white solid background), one layout, one slide with
/// `slide_xml`, a themed texture and an unreferenced media entry. The slide's
/// `rId2` points at `ppt/media/image1.png`.
pub fn pptx(slide_xml: &str) -> Vec<u8> {
    pptx_with_backgrounds(MASTER_BG, "", slide_xml)
}

/// Like [`pptx`] with explicit master and layout `p:bg` elements.
pub fn pptx_with_backgrounds(master_bg: &str, layout_bg: &str, slide_xml: &str) -> Vec<u8> {
    let root_rels = rels(&[("rId1", "officeDocument", "ppt/presentation.xml")]);
    let presentation = format!(
        r#"<p:presentation xmlns:a="{a}" xmlns:r="{r}" xmlns:p="{p}"><p:sldMasterIdLst><p:sldMasterId id="2147483648" r:id="rId1"/></p:sldMasterIdLst><p:sldIdLst><p:sldId id="256" r:id="rId2"/></p:sldIdLst><p:sldSz cx="9144000" cy="5143500"/><p:notesSz cx="6858000" cy="9144000"/></p:presentation>"#,
        a = NS_A,
        r = NS_R,
        p = NS_P
    );
    let presentation_rels = rels(&[
        ("rId1", "slideMaster", "slideMasters/slideMaster1.xml"),
        ("rId2", "slide", "slides/slide1.xml"),
        ("rId3", "theme", "theme/theme1.xml"),
    ]);
    let master = master(master_bg);
    let master_rels = rels(&[
        ("rId1", "slideLayout", "../slideLayouts/slideLayout1.xml"),
        ("rId2", "theme", "../theme/theme1.xml"),
    ]);
    let layout = layout(layout_bg);
    let layout_rels = rels(&[("rId1", "slideMaster", "../slideMasters/slideMaster1.xml")]);
    let slide_rels = rels(&[
        ("rId1", "slideLayout", "../slideLayouts/slideLayout1.xml"),
        ("rId2", "image", "../media/image1.png"),
    ]);
    let theme = format!(
        r#"<a:theme xmlns:a="{a}" xmlns:r="{r}" name="Office Theme"><a:themeElements><a:clrScheme name="Office"><a:dk1><a:sysClr val="windowText" lastClr="000000"/></a:dk1></a:clrScheme><a:fmtScheme name="Office"><a:bgFillStyleLst><a:blipFill><a:blip r:embed="rId1"/></a:blipFill></a:bgFillStyleLst></a:fmtScheme></a:themeElements></a:theme>"#,
        a = NS_A,
        r = NS_R
    );
    let theme_rels = rels(&[("rId1", "image", "../media/image2.png")]);

    zip_package(&[
        ("[Content_Types].xml", content_types().as_bytes()),
        ("_rels/.rels", root_rels.as_bytes()),
        ("ppt/presentation.xml", presentation.as_bytes()),
        ("ppt/_rels/presentation.xml.rels", presentation_rels.as_bytes()),
        ("ppt/slideMasters/slideMaster1.xml", master.as_bytes()),
        ("ppt/slideMasters/_rels/slideMaster1.xml.rels", master_rels.as_bytes()),
        ("ppt/slideLayouts/slideLayout1.xml", layout.as_bytes()),
        ("ppt/slideLayouts/_rels/slideLayout1.xml.rels", layout_rels.as_bytes()),
        ("ppt/slides/slide1.xml", slide_xml.as_bytes()),
        ("ppt/slides/_rels/slide1.xml.rels", slide_rels.as_bytes()),
        ("ppt/theme/theme1.xml", theme.as_bytes()),
        ("ppt/theme/_rels/theme1.xml.rels", theme_rels.as_bytes()),
        ("ppt/media/image1.png", PNG_LOGO),
        ("ppt/media/image2.png", PNG_THEME),
        ("ppt/media/image3.png", PNG_ORPHAN),
    ])
}

fn content_types() -> String {
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/><Default Extension="xml" ContentType="application/xml"/><Default Extension="png" ContentType="image/png"/></Types>"#.to_string()
}

// ============================================================================
// WORD
// ============================================================================

/// Body with a red Arial run, a shaded paragraph, a bordered paragraph and a
/// run that takes its font from the `Heading1` style.
pub fn branded_document_body() -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="{w}" xmlns:r="{r}"><w:background w:color="F2F2F2"/><w:body>
  <w:p><w:r><w:rPr><w:rFonts w:ascii="Arial" w:hAnsi="Arial" w:cs="Times New Roman" w:asciiTheme="minorHAnsi"/><w:color w:val="C00000"/></w:rPr><w:t>Brand</w:t></w:r></w:p>
  <w:p><w:pPr><w:shd w:val="clear" w:color="auto" w:fill="E87722"/><w:pBdr><w:top w:val="single" w:sz="4" w:space="1" w:color="1F3864"/></w:pBdr></w:pPr><w:r><w:t>Shaded</w:t></w:r></w:p>
  <w:p><w:pPr><w:pStyle w:val="Heading1"/></w:pPr><w:r><w:t>Styled</w:t></w:r></w:p>
  <w:sectPr/>
</w:body></w:document>"#,
        w = NS_W,
        r = NS_R
    )
}

pub fn docx(body_xml: &str) -> Vec<u8> {
    let root_rels = rels(&[("rId1", "officeDocument", "word/document.xml")]);
    let document_rels = rels(&[("rId1", "styles", "styles.xml")]);
    let styles = format!(
        r#"<w:styles xmlns:w="{w}"><w:docDefaults><w:rPrDefault><w:rPr><w:rFonts w:ascii="Calibri" w:hAnsi="Calibri"/></w:rPr></w:rPrDefault></w:docDefaults><w:style w:type="paragraph" w:default="1" w:styleId="Normal"><w:name w:val="Normal"/></w:style><w:style w:type="paragraph" w:styleId="Heading1"><w:name w:val="heading 1"/><w:basedOn w:val="Normal"/><w:rPr><w:rFonts w:ascii="Georgia" w:hAnsi="Georgia"/><w:color w:val="2F5496"/></w:rPr></w:style></w:styles>"#,
        w = NS_W
    );
    let header = format!(
        r#"<w:hdr xmlns:w="{w}"><w:p><w:r><w:rPr><w:color w:val="00B050"/></w:rPr><w:t>Header</w:t></w:r></w:p></w:hdr>"#,
        w = NS_W
    );

    zip_package(&[
        ("[Content_Types].xml", content_types().as_bytes()),
        ("_rels/.rels", root_rels.as_bytes()),
        ("word/document.xml", body_xml.as_bytes()),
        ("word/_rels/document.xml.rels", document_rels.as_bytes()),
        ("word/styles.xml", styles.as_bytes()),
        ("word/header1.xml", header.as_bytes()),
        ("word/media/image1.png", PNG_LOGO),
        ("word/embeddings/oleObject1.bin", &b"ole-object-bytes"[..]),
    ])
}

// ============================================================================
// SPREADSHEET
// ============================================================================

/// `xl/styles.xml` where cell format 1 references an Arial font, a solid
/// orange fill and a thin green left border.
pub fn branded_styles() -> String {
    format!(
        r#"<styleSheet xmlns="{s}"><fonts count="2"><font><sz val="11"/><name val="Calibri"/></font><font><b/><sz val="14"/><color rgb="FF3C3C3C"/><name val="Arial"/><family val="2"/></font></fonts><fills count="3"><fill><patternFill patternType="none"/></fill><fill><patternFill patternType="gray125"/></fill><fill><patternFill patternType="solid"><fgColor rgb="FFE87722"/><bgColor indexed="64"/></patternFill></fill></fills><borders count="2"><border><left/><right/><top/><bottom/><diagonal/></border><border><left style="thin"><color rgb="FF00B050"/></left><right/><top/><bottom/><diagonal/></border></borders><cellXfs count="2"><xf numFmtId="0" fontId="0" fillId="0" borderId="0"/><xf numFmtId="0" fontId="1" fillId="2" borderId="1" applyFont="1" applyFill="1" applyBorder="1"/></cellXfs></styleSheet>"#,
        s = NS_S
    )
}

/// Two sheets: "Summary" with a styled cell, a tab color and one picture;
/// "Data" with default-styled cells only.
pub fn xlsx(styles_xml: &str) -> Vec<u8> {
    xlsx_package(styles_xml, true)
}

/// Like [`xlsx`], optionally without the picture's media entry.
pub fn xlsx_package(styles_xml: &str, with_media: bool) -> Vec<u8> {
    xlsx_with_pictures(styles_xml, 1, with_media)
}

/// Like [`xlsx`] with two anchors on "Summary" that both show
/// `xl/media/image1.png` through the same relationship.
pub fn xlsx_shared_media(styles_xml: &str) -> Vec<u8> {
    xlsx_with_pictures(styles_xml, 2, true)
}

fn picture_anchor(index: usize) -> String {
    let row = index * 5 + 1;
    format!(
        r#"<xdr:twoCellAnchor><xdr:from><xdr:col>1</xdr:col><xdr:colOff>0</xdr:colOff><xdr:row>{row}</xdr:row><xdr:rowOff>0</xdr:rowOff></xdr:from><xdr:to><xdr:col>3</xdr:col><xdr:colOff>0</xdr:colOff><xdr:row>{end}</xdr:row><xdr:rowOff>0</xdr:rowOff></xdr:to><xdr:pic><xdr:nvPicPr><xdr:cNvPr id="{id}" name="Logo {id}"/><xdr:cNvPicPr/></xdr:nvPicPr><xdr:blipFill><a:blip r:embed="rId1"/><a:stretch><a:fillRect/></a:stretch></xdr:blipFill><xdr:spPr/></xdr:pic><xdr:clientData/></xdr:twoCellAnchor>"#,
        row = row,
        end = row + 4,
        id = index + 2
    )
}

fn xlsx_with_pictures(styles_xml: &str, pictures: usize, with_media: bool) -> Vec<u8> {
    let root_rels = rels(&[("rId1", "officeDocument", "xl/workbook.xml")]);
    let workbook = format!(
        r#"<workbook xmlns="{s}" xmlns:r="{r}"><sheets><sheet name="Summary" sheetId="1" r:id="rId1"/><sheet name="Data" sheetId="2" r:id="rId2"/></sheets></workbook>"#,
        s = NS_S,
        r = NS_R
    );
    let workbook_rels = rels(&[
        ("rId1", "worksheet", "worksheets/sheet1.xml"),
        ("rId2", "worksheet", "worksheets/sheet2.xml"),
        ("rId3", "styles", "styles.xml"),
    ]);
    let summary = format!(
        r#"<worksheet xmlns="{s}" xmlns:r="{r}"><sheetPr><tabColor rgb="FF1F3864"/></sheetPr><sheetData><row r="1"><c r="A1" s="1" t="s"><v>0</v></c></row></sheetData><drawing r:id="rId1"/></worksheet>"#,
        s = NS_S,
        r = NS_R
    );
    let summary_rels = rels(&[("rId1", "drawing", "../drawings/drawing1.xml")]);
    let data = format!(
        r#"<worksheet xmlns="{s}"><sheetData><row r="1"><c r="A1"><v>42</v></c></row></sheetData></worksheet>"#,
        s = NS_S
    );
    let anchors: String = (0..pictures).map(picture_anchor).collect();
    let drawing = format!(
        r#"<xdr:wsDr xmlns:xdr="{xdr}" xmlns:a="{a}" xmlns:r="{r}">{anchors}</xdr:wsDr>"#,
        xdr = NS_XDR,
        a = NS_A,
        r = NS_R,
        anchors = anchors
    );
    let drawing_rels = rels(&[("rId1", "image", "../media/image1.png")]);
    let content_types = content_types();

    let mut entries: Vec<(&str, &[u8])> = vec![
        ("[Content_Types].xml", content_types.as_bytes()),
        ("_rels/.rels", root_rels.as_bytes()),
        ("xl/workbook.xml", workbook.as_bytes()),
        ("xl/_rels/workbook.xml.rels", workbook_rels.as_bytes()),
        ("xl/styles.xml", styles_xml.as_bytes()),
        ("xl/worksheets/sheet1.xml", summary.as_bytes()),
        ("xl/worksheets/_rels/sheet1.xml.rels", summary_rels.as_bytes()),
        ("xl/worksheets/sheet2.xml", data.as_bytes()),
        ("xl/drawings/drawing1.xml", drawing.as_bytes()),
        ("xl/drawings/_rels/drawing1.xml.rels", drawing_rels.as_bytes()),
    ];
    if with_media {
        entries.push(("xl/media/image1.png", PNG_LOGO));
    }
    zip_package(&entries)
}
