pub mod color;
pub mod dispatch;
pub mod error;
pub mod imaging;
pub mod inventory;
pub mod package;
pub mod session;
pub mod settings;
pub mod types;
pub mod xml;
#[cfg(feature = "wml")]
pub mod wml;
#[cfg(feature = "pml")]
pub mod pml;
#[cfg(feature = "sml")]
pub mod sml;

pub use error::{RebrandError, Result};

pub use color::{canonical_color, Color};
pub use dispatch::{apply, extract, extract_file, infer_format, output_file_name};
pub use inventory::{
    ColorMap, ColorScope, DocumentModel, FontMap, ImageKind, ImageReplacements, ImageResource,
    Inventory,
};
pub use session::ReplacementSession;
pub use settings::RebrandSettings;
pub use types::DocumentFormat;

#[cfg(feature = "pml")]
pub use pml::PmlDocument;
#[cfg(feature = "sml")]
pub use sml::SmlDocument;
#[cfg(feature = "wml")]
pub use wml::WmlDocument;
