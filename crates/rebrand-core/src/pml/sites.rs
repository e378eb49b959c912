//! Locations of colors, fonts and pictures in a slide, layout or master part.
//!
//! Both the extractor and the rewriter call [`locate`] on a freshly parsed
//! part, so every reported color, font and uid maps back to the same node.

use super::document::PartScope;
use super::shapes::{collect_shapes, fill_of, line_color, solid_color, Fill, Shape, ShapeKind};
use crate::inventory::{ColorScope, ImageKind};
use crate::xml::arena::XmlDocument;
use crate::xml::namespaces::{A, P, R};
use indextree::NodeId;

/// An `a:srgbClr` whose `val` belongs to `scope`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorSite {
    pub node: NodeId,
    pub scope: ColorScope,
}

/// An `a:latin`, `a:ea` or `a:cs` element with a `typeface`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontSite {
    pub node: NodeId,
}

/// An `a:blip` that identifies a replaceable picture.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageSite {
    pub uid: String,
    pub blip: NodeId,
    pub kind: ImageKind,
    pub display_name: String,
    pub group_label: String,
}

impl ImageSite {
    pub fn relationship_id<'a>(&self, doc: &'a XmlDocument) -> Option<&'a str> {
        doc.attr(self.blip, &R::embed())
    }
}

#[derive(Debug, Default)]
pub struct PartSites {
    pub colors: Vec<ColorSite>,
    pub fonts: Vec<FontSite>,
    pub images: Vec<ImageSite>,
}

impl PartSites {
    fn color(&mut self, node: Option<NodeId>, scope: ColorScope) {
        if let Some(node) = node {
            self.colors.push(ColorSite { node, scope });
        }
    }
}

pub const COLOR_ATTR: &str = "val";
pub const TYPEFACE_ATTR: &str = "typeface";

pub fn locate(doc: &XmlDocument, scope: PartScope, max_depth: usize) -> PartSites {
    let mut sites = PartSites::default();
    let Some(root) = doc.root() else {
        return sites;
    };
    let Some(c_sld) = doc.first_child(root, &P::cSld()) else {
        return sites;
    };

    if let Some(bg_pr) = background_properties(doc, c_sld) {
        match fill_of(doc, bg_pr) {
            Some(Fill::Solid(solid)) => {
                sites.color(solid_color(doc, solid), ColorScope::Background)
            }
            Some(Fill::Picture(blip_fill)) => {
                if let Some(blip) = doc.first_child(blip_fill, &A::blip()) {
                    sites.images.push(ImageSite {
                        uid: scope.background_uid(),
                        blip,
                        kind: scope.background_kind(),
                        display_name: format!("{} Background", scope.label()),
                        group_label: scope.label(),
                    });
                }
            }
            _ => {}
        }
    }

    if let Some(sp_tree) = doc.first_child(c_sld, &P::spTree()) {
        for shape in collect_shapes(doc, sp_tree, max_depth) {
            locate_shape(doc, scope, &shape, &mut sites);
        }
    }

    sites
}

/// `p:cSld/p:bg/p:bgPr` of a slide-like part.
pub fn background_properties(doc: &XmlDocument, c_sld: NodeId) -> Option<NodeId> {
    let bg = doc.first_child(c_sld, &P::bg())?;
    doc.first_child(bg, &P::bgPr())
}

fn locate_shape(doc: &XmlDocument, scope: PartScope, shape: &Shape, sites: &mut PartSites) {
    let shape_name = shape
        .name(doc)
        .map(str::to_string)
        .unwrap_or_else(|| format!("Shape_{}", shape.path));

    if let Some(body) = shape.text_body(doc) {
        locate_text(doc, body, sites);
    }

    if let Some(table) = shape.table() {
        locate_table(doc, scope, &shape.path, table, sites);
    }

    if let Some(fill) = shape.fill(doc) {
        let fill_image = || PendingImage {
            uid: format!("pptx_fill_{}_{}", scope.key(), shape.path),
            kind: ImageKind::ShapeFill,
            display_name: format!("{} Shape Fill Picture ({})", scope.label(), shape_name),
            group_label: scope.label(),
        };
        locate_fill(doc, fill, fill_image, sites);
    }

    if let Some(line) = shape.line(doc) {
        sites.color(line_color(doc, line), ColorScope::Shape);
    }

    if shape.kind == ShapeKind::Picture {
        if let Some(blip) = shape.blip(doc) {
            sites.images.push(ImageSite {
                uid: format!("pptx_{}_{}", scope.key(), shape.path),
                blip,
                kind: ImageKind::ShapePicture,
                display_name: format!("{} Picture ({})", scope.label(), shape_name),
                group_label: scope.label(),
            });
        }
    }
}

struct PendingImage {
    uid: String,
    kind: ImageKind,
    display_name: String,
    group_label: String,
}

/// Solid, gradient and pattern colors of a fill go to the shape colors; a
/// picture fill becomes an image site built from `image`.
fn locate_fill(
    doc: &XmlDocument,
    fill: Fill,
    image: impl FnOnce() -> PendingImage,
    sites: &mut PartSites,
) {
    match fill {
        Fill::Solid(solid) => sites.color(solid_color(doc, solid), ColorScope::Shape),
        Fill::Gradient(grad) => {
            if let Some(stops) = doc.first_child(grad, &A::gsLst()) {
                for stop in doc.elements_by_name(stops, &A::gs()) {
                    sites.color(solid_color(doc, stop), ColorScope::Shape);
                }
            }
        }
        Fill::Pattern(pattern) => {
            for part in [A::fgClr(), A::bgClr()] {
                if let Some(container) = doc.first_child(pattern, &part) {
                    sites.color(solid_color(doc, container), ColorScope::Shape);
                }
            }
        }
        Fill::Picture(blip_fill) => {
            if let Some(blip) = doc.first_child(blip_fill, &A::blip()) {
                let pending = image();
                sites.images.push(ImageSite {
                    uid: pending.uid,
                    blip,
                    kind: pending.kind,
                    display_name: pending.display_name,
                    group_label: pending.group_label,
                });
            }
        }
        Fill::NoFill => {}
    }
}

fn locate_table(
    doc: &XmlDocument,
    scope: PartScope,
    path: &str,
    table: NodeId,
    sites: &mut PartSites,
) {
    for (row_idx, row) in doc.elements_by_name(table, &A::tr()).enumerate() {
        for (col_idx, cell) in doc.elements_by_name(row, &A::tc()).enumerate() {
            let cell_path = format!("{}_tbl_r{}_c{}", path, row_idx, col_idx);

            if let Some(body) = doc.first_child(cell, &A::txBody()) {
                locate_text(doc, body, sites);
            }

            let Some(tc_pr) = doc.first_child(cell, &A::tcPr()) else {
                continue;
            };

            if let Some(fill) = fill_of(doc, tc_pr) {
                let cell_image = || PendingImage {
                    uid: format!("pptx_fill_{}_{}", scope.key(), cell_path),
                    kind: ImageKind::CellFill,
                    display_name: format!("{} Table Cell Picture ({})", scope.label(), cell_path),
                    group_label: scope.label(),
                };
                locate_fill(doc, fill, cell_image, sites);
            }

            for border in A::cell_borders() {
                if let Some(line) = doc.first_child(tc_pr, &border) {
                    sites.color(line_color(doc, line), ColorScope::Shape);
                }
            }
        }
    }
}

/// Paragraph default run properties and the properties of every run and
/// field in a text body.
fn locate_text(doc: &XmlDocument, body: NodeId, sites: &mut PartSites) {
    let run = A::r();
    let field = A::fld();

    for paragraph in doc.elements_by_name(body, &A::p()) {
        let mut properties = Vec::new();

        if let Some(def_rpr) = doc
            .first_child(paragraph, &A::pPr())
            .and_then(|ppr| doc.first_child(ppr, &A::defRPr()))
        {
            properties.push(def_rpr);
        }

        for child in doc.child_elements(paragraph) {
            if doc.is(child, &run) || doc.is(child, &field) {
                if let Some(rpr) = doc.first_child(child, &A::rPr()) {
                    properties.push(rpr);
                }
            }
        }

        for rpr in properties {
            for typeface in A::typefaces() {
                if let Some(node) = doc.first_child(rpr, &typeface) {
                    if doc.attr_local(node, TYPEFACE_ATTR).is_some() {
                        sites.fonts.push(FontSite { node });
                    }
                }
            }
            if let Some(solid) = doc.first_child(rpr, &A::solidFill()) {
                sites.color(solid_color(doc, solid), ColorScope::Text);
            }
        }
    }
}
