//! What extraction reports and what `apply` consumes: the inventory of a
//! document plus the substitution maps applied to it.

use crate::color::{canonical_color, Color};
use crate::settings::RebrandSettings;
use crate::types::DocumentFormat;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashMap};

#[cfg(feature = "pml")]
use crate::pml::PmlDocument;
#[cfg(feature = "sml")]
use crate::sml::SmlDocument;
#[cfg(feature = "wml")]
use crate::wml::WmlDocument;

/// Which of the three color sets a located color belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorScope {
    Text,
    Shape,
    Background,
}

/// Where an image resource was found, which decides how it is written back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageKind {
    ShapePicture,
    ShapeFill,
    CellFill,
    SlideBackground,
    LayoutBackground,
    MasterBackground,
    ThemeAsset,
    SheetImage,
    BulkMedia,
    EmbeddedObject,
}

impl ImageKind {
    /// Resources written through the parsed model before the package is
    /// serialized. The rest are substituted in the saved archive.
    pub fn is_model_owned(self) -> bool {
        matches!(
            self,
            Self::ShapePicture
                | Self::ShapeFill
                | Self::CellFill
                | Self::SlideBackground
                | Self::LayoutBackground
                | Self::MasterBackground
                | Self::SheetImage
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImageResource {
    pub uid: String,
    #[serde(skip)]
    pub raw_bytes: Option<Vec<u8>>,
    pub media_path: Option<String>,
    pub display_name: String,
    pub group_label: String,
    pub kind: ImageKind,
}

/// The parsed document, owned by the inventory until `apply` consumes it.
pub enum DocumentModel {
    #[cfg(feature = "wml")]
    Word(WmlDocument),
    #[cfg(feature = "pml")]
    Presentation(PmlDocument),
    #[cfg(feature = "sml")]
    Spreadsheet(SmlDocument),
    Pdf(Vec<u8>),
}

/// Colors, fonts and images gathered while walking a document, before the
/// parsed model is handed over to the [`Inventory`].
#[derive(Debug, Clone, Default)]
pub struct Findings {
    pub text_colors: BTreeSet<Color>,
    pub shape_colors: BTreeSet<Color>,
    pub background_colors: BTreeSet<Color>,
    pub fonts: BTreeSet<String>,
    pub images: Vec<ImageResource>,
    pub previews: BTreeMap<usize, Vec<u8>>,
}

impl Findings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_color(&mut self, scope: ColorScope, raw: &str) {
        let Some(color) = canonical_color(raw) else {
            return;
        };
        match scope {
            ColorScope::Text => self.text_colors.insert(color),
            ColorScope::Shape => self.shape_colors.insert(color),
            ColorScope::Background => self.background_colors.insert(color),
        };
    }

    pub fn add_font(&mut self, name: &str) {
        if is_literal_font(name) {
            self.fonts.insert(name.to_string());
        }
    }

    pub fn add_image(&mut self, image: ImageResource) {
        self.images.push(image);
    }

    pub fn has_media_path(&self, path: &str) -> bool {
        self.images
            .iter()
            .any(|img| img.media_path.as_deref() == Some(path))
    }
}

pub struct Inventory {
    pub format: DocumentFormat,
    pub text_colors: BTreeSet<Color>,
    pub shape_colors: BTreeSet<Color>,
    pub background_colors: BTreeSet<Color>,
    pub fonts: BTreeSet<String>,
    pub images: Vec<ImageResource>,
    /// JPEG slide previews keyed by 1-based slide number.
    pub previews: BTreeMap<usize, Vec<u8>>,
    settings: RebrandSettings,
    model: DocumentModel,
}

impl Inventory {
    pub fn new(
        format: DocumentFormat,
        findings: Findings,
        model: DocumentModel,
        settings: &RebrandSettings,
    ) -> Self {
        Self {
            format,
            text_colors: findings.text_colors,
            shape_colors: findings.shape_colors,
            background_colors: findings.background_colors,
            fonts: findings.fonts,
            images: findings.images,
            previews: findings.previews,
            settings: settings.clone(),
            model,
        }
    }

    /// Settings the inventory was extracted with; rewriting reuses them so
    /// that uids resolve to the same nodes.
    pub fn settings(&self) -> &RebrandSettings {
        &self.settings
    }

    pub fn into_parts(self) -> (DocumentModel, Vec<ImageResource>, RebrandSettings) {
        (self.model, self.images, self.settings)
    }

    pub fn image(&self, uid: &str) -> Option<&ImageResource> {
        self.images.iter().find(|img| img.uid == uid)
    }

    /// Every distinct color across the three scopes.
    pub fn all_colors(&self) -> BTreeSet<Color> {
        self.text_colors
            .iter()
            .chain(&self.shape_colors)
            .chain(&self.background_colors)
            .cloned()
            .collect()
    }
}

/// Theme font references such as `+mn-lt` resolve through the theme and are
/// not literal family names.
pub fn is_literal_font(name: &str) -> bool {
    !name.is_empty() && !name.starts_with('+')
}

/// Old color to new color. Entries whose new value is empty or not a color
/// are dropped when the map is built, so a hit always carries a color.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "BTreeMap<String, String>")]
pub struct ColorMap(BTreeMap<Color, Color>);

impl ColorMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` when either side is not a color.
    pub fn insert(&mut self, old: &str, new: &str) -> bool {
        match (canonical_color(old), canonical_color(new)) {
            (Some(old), Some(new)) => {
                self.0.insert(old, new);
                true
            }
            _ => false,
        }
    }

    pub fn lookup(&self, old: &Color) -> Option<&Color> {
        self.0.get(old)
    }

    /// Canonicalize `raw` and look it up in one step.
    pub fn lookup_raw(&self, raw: &str) -> Option<&Color> {
        canonical_color(raw).and_then(|old| self.0.get(&old))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl From<BTreeMap<String, String>> for ColorMap {
    fn from(raw: BTreeMap<String, String>) -> Self {
        let mut map = Self::new();
        for (old, new) in &raw {
            if !map.insert(old, new) {
                log::debug!("ignoring color mapping '{}' -> '{}'", old, new);
            }
        }
        map
    }
}

impl<'a> FromIterator<(&'a str, &'a str)> for ColorMap {
    fn from_iter<I: IntoIterator<Item = (&'a str, &'a str)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (old, new) in iter {
            map.insert(old, new);
        }
        map
    }
}

/// Old font family to new font family, exact match.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "BTreeMap<String, String>")]
pub struct FontMap(BTreeMap<String, String>);

impl FontMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` (and records nothing) for an empty new name or a theme
    /// font reference.
    pub fn insert(&mut self, old: &str, new: &str) -> bool {
        let new = new.trim();
        if new.is_empty() || !is_literal_font(old) {
            return false;
        }
        self.0.insert(old.to_string(), new.to_string());
        true
    }

    pub fn lookup(&self, old: &str) -> Option<&str> {
        self.0.get(old).map(|s| s.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl From<BTreeMap<String, String>> for FontMap {
    fn from(raw: BTreeMap<String, String>) -> Self {
        let mut map = Self::new();
        for (old, new) in &raw {
            map.insert(old, new);
        }
        map
    }
}

impl<'a> FromIterator<(&'a str, &'a str)> for FontMap {
    fn from_iter<I: IntoIterator<Item = (&'a str, &'a str)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (old, new) in iter {
            map.insert(old, new);
        }
        map
    }
}

/// Replacement image bytes, keyed by resource uid (or media path for bulk
/// media) and by media path for theme assets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageReplacements {
    pub by_uid: HashMap<String, Vec<u8>>,
    pub theme_by_media_path: HashMap<String, Vec<u8>>,
}

impl ImageReplacements {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn for_uid(&self, uid: &str) -> Option<&[u8]> {
        self.by_uid.get(uid).map(|v| v.as_slice())
    }

    pub fn is_empty(&self) -> bool {
        self.by_uid.is_empty() && self.theme_by_media_path.is_empty()
    }
}
