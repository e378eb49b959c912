//! WordprocessingML (`.docx`) inventory and rewrite.

mod document;
mod extract;
mod rewrite;
mod sites;
mod styles;

pub use document::{WmlDocument, MAIN_DOCUMENT_PART, STYLES_PART};
pub use extract::extract_findings;
pub use rewrite::rewrite;
pub use sites::{color_sites, font_sites, ColorSite, FontSite};
pub use styles::StyleFonts;
