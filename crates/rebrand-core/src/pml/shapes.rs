//! Shapes of a slide tree as a closed set of variants.

use crate::xml::arena::XmlDocument;
use crate::xml::namespaces::{A, P};
use indextree::NodeId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    AutoShape,
    Picture,
    Group,
    /// `table` is the `a:tbl` element when the frame hosts a table.
    GraphicFrame { table: Option<NodeId> },
    Connector,
}

/// A shape located in a `p:spTree`.
///
/// `path` is the shape's index among its siblings, with `_g<idx>` appended
/// for each group level below the top. `parent` indexes the enclosing group
/// in the list returned by [`collect_shapes`].
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    pub node: NodeId,
    pub kind: ShapeKind,
    pub path: String,
    pub depth: usize,
    pub parent: Option<usize>,
}

/// Fill of a shape, table cell or background properties element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fill {
    Solid(NodeId),
    Picture(NodeId),
    Gradient(NodeId),
    Pattern(NodeId),
    NoFill,
}

impl Shape {
    pub fn name<'a>(&self, doc: &'a XmlDocument) -> Option<&'a str> {
        let non_visual = doc.child_elements(self.node).next()?;
        let c_nv_pr = doc.first_child(non_visual, &P::cNvPr())?;
        doc.attr_local(c_nv_pr, "name")
    }

    pub fn text_body(&self, doc: &XmlDocument) -> Option<NodeId> {
        match self.kind {
            ShapeKind::AutoShape => doc.first_child(self.node, &P::txBody()),
            _ => None,
        }
    }

    /// `p:spPr`, or `p:grpSpPr` for groups.
    pub fn properties(&self, doc: &XmlDocument) -> Option<NodeId> {
        match self.kind {
            ShapeKind::Group => doc.first_child(self.node, &P::grpSpPr()),
            ShapeKind::GraphicFrame { .. } => None,
            _ => doc.first_child(self.node, &P::spPr()),
        }
    }

    pub fn fill(&self, doc: &XmlDocument) -> Option<Fill> {
        fill_of(doc, self.properties(doc)?)
    }

    pub fn line(&self, doc: &XmlDocument) -> Option<NodeId> {
        match self.kind {
            ShapeKind::Group => None,
            _ => doc.first_child(self.properties(doc)?, &A::ln()),
        }
    }

    /// `a:blip` of a picture shape.
    pub fn blip(&self, doc: &XmlDocument) -> Option<NodeId> {
        match self.kind {
            ShapeKind::Picture => {
                let blip_fill = doc.first_child(self.node, &P::blipFill())?;
                doc.first_child(blip_fill, &A::blip())
            }
            _ => None,
        }
    }

    pub fn table(&self) -> Option<NodeId> {
        match self.kind {
            ShapeKind::GraphicFrame { table } => table,
            _ => None,
        }
    }

    /// `a:xfrm` (or `p:xfrm` for graphic frames).
    pub fn transform(&self, doc: &XmlDocument) -> Option<NodeId> {
        match self.kind {
            ShapeKind::GraphicFrame { .. } => doc.first_child(self.node, &P::xfrm()),
            _ => doc.first_child(self.properties(doc)?, &A::xfrm()),
        }
    }
}

/// Flatten a shape tree in document order, descending into groups while the
/// depth stays within `max_depth`.
pub fn collect_shapes(doc: &XmlDocument, sp_tree: NodeId, max_depth: usize) -> Vec<Shape> {
    let mut shapes = Vec::new();
    collect_into(doc, sp_tree, None, 0, None, max_depth, &mut shapes);
    shapes
}

fn collect_into(
    doc: &XmlDocument,
    container: NodeId,
    prefix: Option<&str>,
    depth: usize,
    parent: Option<usize>,
    max_depth: usize,
    out: &mut Vec<Shape>,
) {
    if depth > max_depth {
        log::debug!("group nesting deeper than {} levels not traversed", max_depth);
        return;
    }

    let mut index = 0;
    for child in doc.child_elements(container) {
        let Some(kind) = classify(doc, child) else {
            continue;
        };
        let path = match prefix {
            None => index.to_string(),
            Some(prefix) => format!("{}_g{}", prefix, index),
        };
        index += 1;

        let position = out.len();
        out.push(Shape {
            node: child,
            kind,
            path: path.clone(),
            depth,
            parent,
        });

        if kind == ShapeKind::Group {
            collect_into(doc, child, Some(&path), depth + 1, Some(position), max_depth, out);
        }
    }
}

fn classify(doc: &XmlDocument, node: NodeId) -> Option<ShapeKind> {
    let name = doc.name(node)?;
    if name == &P::sp() {
        Some(ShapeKind::AutoShape)
    } else if name == &P::pic() {
        Some(ShapeKind::Picture)
    } else if name == &P::grpSp() {
        Some(ShapeKind::Group)
    } else if name == &P::cxnSp() {
        Some(ShapeKind::Connector)
    } else if name == &P::graphicFrame() {
        Some(ShapeKind::GraphicFrame {
            table: frame_table(doc, node),
        })
    } else {
        None
    }
}

fn frame_table(doc: &XmlDocument, frame: NodeId) -> Option<NodeId> {
    let graphic = doc.first_child(frame, &A::graphic())?;
    let data = doc.first_child(graphic, &A::graphicData())?;
    if doc.attr_local(data, "uri") != Some(A::TABLE_URI) {
        return None;
    }
    doc.first_child(data, &A::tbl())
}

/// The fill element among the children of a properties element.
pub fn fill_of(doc: &XmlDocument, properties: NodeId) -> Option<Fill> {
    doc.child_elements(properties).find_map(|child| {
        let name = doc.name(child)?;
        if name == &A::solidFill() {
            Some(Fill::Solid(child))
        } else if name == &A::blipFill() {
            Some(Fill::Picture(child))
        } else if name == &A::gradFill() {
            Some(Fill::Gradient(child))
        } else if name == &A::pattFill() {
            Some(Fill::Pattern(child))
        } else if name == &A::noFill() {
            Some(Fill::NoFill)
        } else {
            None
        }
    })
}

/// The `a:srgbClr` carrying the color of a color container: a direct child
/// first, otherwise the first descendant.
pub fn solid_color(doc: &XmlDocument, container: NodeId) -> Option<NodeId> {
    let srgb = A::srgbClr();
    doc.first_child(container, &srgb)
        .or_else(|| doc.descendants_by_name(container, &srgb).next())
}

/// Color node of an outline that is drawn with a solid fill.
pub fn line_color(doc: &XmlDocument, line: NodeId) -> Option<NodeId> {
    if doc.first_child(line, &A::noFill()).is_some() {
        return None;
    }
    let solid = doc.first_child(line, &A::solidFill())?;
    solid_color(doc, solid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xml::parser::parse;

    const TREE: &str = r#"<p:spTree xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main" xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main">
  <p:nvGrpSpPr/><p:grpSpPr/>
  <p:sp><p:nvSpPr><p:cNvPr id="2" name="Title"/></p:nvSpPr><p:spPr><a:solidFill><a:srgbClr val="E87722"/></a:solidFill><a:ln><a:noFill/></a:ln></p:spPr></p:sp>
  <p:grpSp>
    <p:nvGrpSpPr><p:cNvPr id="3" name="Group"/></p:nvGrpSpPr><p:grpSpPr/>
    <p:pic><p:nvPicPr><p:cNvPr id="4" name="Logo"/></p:nvPicPr><p:blipFill><a:blip/></p:blipFill><p:spPr/></p:pic>
    <p:grpSp><p:nvGrpSpPr/><p:grpSpPr/><p:cxnSp><p:spPr/></p:cxnSp></p:grpSp>
  </p:grpSp>
  <p:graphicFrame><p:xfrm/><a:graphic><a:graphicData uri="http://schemas.openxmlformats.org/drawingml/2006/table"><a:tbl/></a:graphicData></a:graphic></p:graphicFrame>
</p:spTree>"#;

    #[test]
    fn collect_shapes_builds_group_paths() {
        let doc = parse(TREE).unwrap();
        let shapes = collect_shapes(&doc, doc.root().unwrap(), 10);

        let paths: Vec<_> = shapes.iter().map(|s| s.path.as_str()).collect();
        assert_eq!(paths, vec!["0", "1", "1_g0", "1_g1", "1_g1_g0", "2"]);
        assert_eq!(shapes[2].kind, ShapeKind::Picture);
        assert_eq!(shapes[2].parent, Some(1));
        assert_eq!(shapes[4].kind, ShapeKind::Connector);
        assert_eq!(shapes[4].depth, 2);
        assert!(shapes[5].table().is_some());
        assert_eq!(shapes[2].name(&doc), Some("Logo"));
    }

    #[test]
    fn depth_cap_stops_descent() {
        let doc = parse(TREE).unwrap();
        let shapes = collect_shapes(&doc, doc.root().unwrap(), 0);
        let paths: Vec<_> = shapes.iter().map(|s| s.path.as_str()).collect();
        assert_eq!(paths, vec!["0", "1", "2"]);
    }

    #[test]
    fn fill_and_line_accessors() {
        let doc = parse(TREE).unwrap();
        let shapes = collect_shapes(&doc, doc.root().unwrap(), 10);

        let Some(Fill::Solid(solid)) = shapes[0].fill(&doc) else {
            panic!("expected solid fill");
        };
        let color = solid_color(&doc, solid).unwrap();
        assert_eq!(doc.attr_local(color, "val"), Some("E87722"));

        let line = shapes[0].line(&doc).unwrap();
        assert_eq!(line_color(&doc, line), None);
        assert!(shapes[2].blip(&doc).is_some());
        assert!(shapes[0].blip(&doc).is_none());
    }
}
