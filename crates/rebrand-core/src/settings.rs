use serde::{Deserialize, Serialize};

/// Settings for controlling extraction and rewrite behavior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RebrandSettings {
    /// Deepest group nesting level that is still traversed (top level is 0).
    pub max_group_depth: usize,

    /// Whether Word packages list their embedded OLE objects as replaceable resources.
    pub include_embedded_objects: bool,

    /// Whether presentations list every `ppt/media/` entry not reached through a shape.
    pub include_media_fallback: bool,

    /// Whether presentation extraction composes JPEG slide previews.
    pub render_previews: bool,

    /// Preview canvas width in pixels.
    pub preview_width: u32,

    /// Inserted before the extension of the output file name.
    pub output_suffix: String,
}

impl Default for RebrandSettings {
    fn default() -> Self {
        Self {
            max_group_depth: 10,
            include_embedded_objects: true,
            include_media_fallback: true,
            render_previews: false,
            preview_width: 900,
            output_suffix: "_rebranded".to_string(),
        }
    }
}
