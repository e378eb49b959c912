//! SpreadsheetML (`.xlsx`) inventory and rewrite.

mod document;
mod drawing;
mod extract;
mod rewrite;
mod styles;

pub use document::{SheetRef, SmlDocument, STYLES_PART, WORKBOOK_PART};
pub use drawing::sheet_pictures;
pub use extract::extract_findings;
pub use rewrite::rewrite;
pub use styles::{style_sites, CellFormat, StyleRole, StyleSheet, StyleSite, StyleUsage};
