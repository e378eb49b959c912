use super::document::SmlDocument;
use crate::xml::arena::XmlDocument;
use crate::xml::namespaces::{A, R, XDR};
use indextree::NodeId;

/// A floating picture in a sheet drawing.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetPicture {
    /// `a:blip` element carrying the `r:embed` reference, when present.
    pub blip: Option<NodeId>,
    /// Resolved media part; `None` when the relationship cannot be resolved.
    pub media_path: Option<String>,
}

/// Media paths of the floating pictures in a sheet drawing, in anchor order.
/// An entry is `None` when the picture's relationship cannot be resolved.
pub fn sheet_pictures(doc: &SmlDocument, drawing_part: &str) -> Vec<Option<String>> {
    match doc.package().get_xml_part(drawing_part) {
        Ok(xml) => drawing_pictures(doc, drawing_part, &xml)
            .into_iter()
            .map(|picture| picture.media_path)
            .collect(),
        Err(e) => {
            log::debug!("skipping drawing '{}': {}", drawing_part, e);
            Vec::new()
        }
    }
}

/// Pictures of an already parsed drawing, in anchor order.
pub fn drawing_pictures(doc: &SmlDocument, drawing_part: &str, xml: &XmlDocument) -> Vec<SheetPicture> {
    let Some(root) = xml.root() else {
        return Vec::new();
    };

    let anchors = XDR::anchors();
    let pic = XDR::pic();
    let mut pictures = Vec::new();

    for anchor in xml
        .child_elements(root)
        .filter(|&n| anchors.iter().any(|a| xml.is(n, a)))
    {
        for picture in xml.descendants_by_name(anchor, &pic) {
            let blip = xml
                .first_child(picture, &XDR::blipFill())
                .and_then(|fill| xml.first_child(fill, &A::blip()));
            let media_path = blip
                .and_then(|blip| xml.attr(blip, &R::embed()))
                .and_then(|r_id| doc.package().resolve_relationship(drawing_part, r_id))
                .filter(|path| doc.package().has_part(path));
            pictures.push(SheetPicture { blip, media_path });
        }
    }

    pictures
}
