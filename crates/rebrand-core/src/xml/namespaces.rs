#![allow(non_snake_case)]

use super::xname::XName;

/// WordprocessingML
pub mod W {
    use super::XName;
    pub const NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

    pub fn document() -> XName { XName::new(NS, "document") }
    pub fn body() -> XName { XName::new(NS, "body") }
    pub fn background() -> XName { XName::new(NS, "background") }
    pub fn p() -> XName { XName::new(NS, "p") }
    pub fn pPr() -> XName { XName::new(NS, "pPr") }
    pub fn pStyle() -> XName { XName::new(NS, "pStyle") }
    pub fn r() -> XName { XName::new(NS, "r") }
    pub fn rPr() -> XName { XName::new(NS, "rPr") }
    pub fn rFonts() -> XName { XName::new(NS, "rFonts") }
    pub fn color() -> XName { XName::new(NS, "color") }
    pub fn shd() -> XName { XName::new(NS, "shd") }
    pub fn bdr() -> XName { XName::new(NS, "bdr") }
    pub fn styles() -> XName { XName::new(NS, "styles") }
    pub fn style() -> XName { XName::new(NS, "style") }
    pub fn basedOn() -> XName { XName::new(NS, "basedOn") }
    pub fn docDefaults() -> XName { XName::new(NS, "docDefaults") }
    pub fn rPrDefault() -> XName { XName::new(NS, "rPrDefault") }

    // Attributes
    pub fn val() -> XName { XName::new(NS, "val") }
    pub fn fill() -> XName { XName::new(NS, "fill") }
    pub fn color_attr() -> XName { XName::new(NS, "color") }
    pub fn ascii() -> XName { XName::new(NS, "ascii") }
    pub fn hAnsi() -> XName { XName::new(NS, "hAnsi") }
    pub fn eastAsia() -> XName { XName::new(NS, "eastAsia") }
    pub fn cs() -> XName { XName::new(NS, "cs") }
    pub fn styleId() -> XName { XName::new(NS, "styleId") }
    pub fn type_() -> XName { XName::new(NS, "type") }
    pub fn default() -> XName { XName::new(NS, "default") }

    /// Theme references that take precedence over a literal `w:val`/`w:color`.
    pub fn theme_color_attributes() -> [XName; 3] {
        [
            XName::new(NS, "themeColor"),
            XName::new(NS, "themeShade"),
            XName::new(NS, "themeTint"),
        ]
    }

    /// Theme references that take precedence over a literal `w:fill`.
    pub fn theme_fill_attributes() -> [XName; 3] {
        [
            XName::new(NS, "themeFill"),
            XName::new(NS, "themeFillShade"),
            XName::new(NS, "themeFillTint"),
        ]
    }

    /// Font attributes of `w:rFonts` that carry literal family names.
    pub fn font_attributes() -> [XName; 4] {
        [ascii(), hAnsi(), eastAsia(), cs()]
    }
}

/// SpreadsheetML
pub mod S {
    use super::XName;
    pub const NS: &str = "http://schemas.openxmlformats.org/spreadsheetml/2006/main";

    pub fn workbook() -> XName { XName::new(NS, "workbook") }
    pub fn sheets() -> XName { XName::new(NS, "sheets") }
    pub fn sheet() -> XName { XName::new(NS, "sheet") }
    pub fn worksheet() -> XName { XName::new(NS, "worksheet") }
    pub fn sheetPr() -> XName { XName::new(NS, "sheetPr") }
    pub fn tabColor() -> XName { XName::new(NS, "tabColor") }
    pub fn sheetData() -> XName { XName::new(NS, "sheetData") }
    pub fn row() -> XName { XName::new(NS, "row") }
    pub fn c() -> XName { XName::new(NS, "c") }
    pub fn drawing() -> XName { XName::new(NS, "drawing") }
    pub fn styleSheet() -> XName { XName::new(NS, "styleSheet") }
    pub fn fonts() -> XName { XName::new(NS, "fonts") }
    pub fn font() -> XName { XName::new(NS, "font") }
    pub fn name() -> XName { XName::new(NS, "name") }
    pub fn color() -> XName { XName::new(NS, "color") }
    pub fn fills() -> XName { XName::new(NS, "fills") }
    pub fn fill() -> XName { XName::new(NS, "fill") }
    pub fn patternFill() -> XName { XName::new(NS, "patternFill") }
    pub fn fgColor() -> XName { XName::new(NS, "fgColor") }
    pub fn borders() -> XName { XName::new(NS, "borders") }
    pub fn border() -> XName { XName::new(NS, "border") }
    pub fn cellXfs() -> XName { XName::new(NS, "cellXfs") }
    pub fn xf() -> XName { XName::new(NS, "xf") }

    /// Border sides whose colors are inventoried, in reporting order.
    pub const BORDER_SIDES: [&str; 4] = ["left", "right", "top", "bottom"];
}

/// PresentationML
pub mod P {
    use super::XName;
    pub const NS: &str = "http://schemas.openxmlformats.org/presentationml/2006/main";

    pub fn presentation() -> XName { XName::new(NS, "presentation") }
    pub fn sldMasterIdLst() -> XName { XName::new(NS, "sldMasterIdLst") }
    pub fn sldMasterId() -> XName { XName::new(NS, "sldMasterId") }
    pub fn sldLayoutIdLst() -> XName { XName::new(NS, "sldLayoutIdLst") }
    pub fn sldLayoutId() -> XName { XName::new(NS, "sldLayoutId") }
    pub fn sldIdLst() -> XName { XName::new(NS, "sldIdLst") }
    pub fn sldId() -> XName { XName::new(NS, "sldId") }
    pub fn sldSz() -> XName { XName::new(NS, "sldSz") }
    pub fn cSld() -> XName { XName::new(NS, "cSld") }
    pub fn bg() -> XName { XName::new(NS, "bg") }
    pub fn bgPr() -> XName { XName::new(NS, "bgPr") }
    pub fn spTree() -> XName { XName::new(NS, "spTree") }
    pub fn sp() -> XName { XName::new(NS, "sp") }
    pub fn pic() -> XName { XName::new(NS, "pic") }
    pub fn grpSp() -> XName { XName::new(NS, "grpSp") }
    pub fn grpSpPr() -> XName { XName::new(NS, "grpSpPr") }
    pub fn graphicFrame() -> XName { XName::new(NS, "graphicFrame") }
    pub fn cxnSp() -> XName { XName::new(NS, "cxnSp") }
    pub fn spPr() -> XName { XName::new(NS, "spPr") }
    pub fn txBody() -> XName { XName::new(NS, "txBody") }
    pub fn blipFill() -> XName { XName::new(NS, "blipFill") }
    pub fn nvPicPr() -> XName { XName::new(NS, "nvPicPr") }
    pub fn cNvPr() -> XName { XName::new(NS, "cNvPr") }
    pub fn xfrm() -> XName { XName::new(NS, "xfrm") }
}

/// DrawingML
pub mod A {
    use super::XName;
    pub const NS: &str = "http://schemas.openxmlformats.org/drawingml/2006/main";
    pub const TABLE_URI: &str = "http://schemas.openxmlformats.org/drawingml/2006/table";

    pub fn srgbClr() -> XName { XName::new(NS, "srgbClr") }
    pub fn solidFill() -> XName { XName::new(NS, "solidFill") }
    pub fn noFill() -> XName { XName::new(NS, "noFill") }
    pub fn gradFill() -> XName { XName::new(NS, "gradFill") }
    pub fn gsLst() -> XName { XName::new(NS, "gsLst") }
    pub fn gs() -> XName { XName::new(NS, "gs") }
    pub fn pattFill() -> XName { XName::new(NS, "pattFill") }
    pub fn fgClr() -> XName { XName::new(NS, "fgClr") }
    pub fn bgClr() -> XName { XName::new(NS, "bgClr") }
    pub fn blipFill() -> XName { XName::new(NS, "blipFill") }
    pub fn blip() -> XName { XName::new(NS, "blip") }
    pub fn ln() -> XName { XName::new(NS, "ln") }
    pub fn p() -> XName { XName::new(NS, "p") }
    pub fn pPr() -> XName { XName::new(NS, "pPr") }
    pub fn defRPr() -> XName { XName::new(NS, "defRPr") }
    pub fn r() -> XName { XName::new(NS, "r") }
    pub fn fld() -> XName { XName::new(NS, "fld") }
    pub fn rPr() -> XName { XName::new(NS, "rPr") }
    pub fn latin() -> XName { XName::new(NS, "latin") }
    pub fn ea() -> XName { XName::new(NS, "ea") }
    pub fn cs() -> XName { XName::new(NS, "cs") }
    pub fn graphic() -> XName { XName::new(NS, "graphic") }
    pub fn graphicData() -> XName { XName::new(NS, "graphicData") }
    pub fn tbl() -> XName { XName::new(NS, "tbl") }
    pub fn tr() -> XName { XName::new(NS, "tr") }
    pub fn tc() -> XName { XName::new(NS, "tc") }
    pub fn tcPr() -> XName { XName::new(NS, "tcPr") }
    pub fn txBody() -> XName { XName::new(NS, "txBody") }
    pub fn xfrm() -> XName { XName::new(NS, "xfrm") }
    pub fn off() -> XName { XName::new(NS, "off") }
    pub fn ext() -> XName { XName::new(NS, "ext") }

    /// Text typeface elements inside run properties.
    pub fn typefaces() -> [XName; 3] {
        [latin(), ea(), cs()]
    }

    /// Table cell border lines.
    pub fn cell_borders() -> [XName; 6] {
        [
            XName::new(NS, "lnL"),
            XName::new(NS, "lnR"),
            XName::new(NS, "lnT"),
            XName::new(NS, "lnB"),
            XName::new(NS, "lnTlToBr"),
            XName::new(NS, "lnBlToTr"),
        ]
    }
}

/// SpreadsheetML drawing
pub mod XDR {
    use super::XName;
    pub const NS: &str = "http://schemas.openxmlformats.org/drawingml/2006/spreadsheetDrawing";

    pub fn pic() -> XName { XName::new(NS, "pic") }
    pub fn blipFill() -> XName { XName::new(NS, "blipFill") }

    /// Anchor elements that may hold a floating picture.
    pub fn anchors() -> [XName; 3] {
        [
            XName::new(NS, "twoCellAnchor"),
            XName::new(NS, "oneCellAnchor"),
            XName::new(NS, "absoluteAnchor"),
        ]
    }
}

/// Office document relationship attributes
pub mod R {
    use super::XName;
    pub const NS: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";

    pub fn id() -> XName { XName::new(NS, "id") }
    pub fn embed() -> XName { XName::new(NS, "embed") }
}

/// Package relationship parts (`_rels/*.rels`)
pub mod REL {
    use super::XName;
    pub const NS: &str = "http://schemas.openxmlformats.org/package/2006/relationships";

    pub fn relationship() -> XName { XName::new(NS, "Relationship") }
}

/// Package content types (`[Content_Types].xml`)
pub mod CT {
    use super::XName;
    pub const NS: &str = "http://schemas.openxmlformats.org/package/2006/content-types";

    pub fn default() -> XName { XName::new(NS, "Default") }
    pub fn override_() -> XName { XName::new(NS, "Override") }
}
