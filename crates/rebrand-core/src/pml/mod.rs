//! PresentationML (`.pptx`) inventory, rewrite and slide previews.

mod document;
mod extract;
#[cfg(feature = "imaging")]
mod preview;
mod rewrite;
mod shapes;
mod sites;

pub use document::{PartScope, PmlDocument, PRESENTATION_PART};
pub use extract::extract_findings;
#[cfg(feature = "imaging")]
pub use preview::render_slide;
pub use rewrite::rewrite;
pub use shapes::{collect_shapes, fill_of, line_color, solid_color, Fill, Shape, ShapeKind};
pub use sites::{locate, ColorSite, FontSite, ImageSite, PartSites};
