use crate::inventory::ImageReplacements;

/// Image replacements collected over the lifetime of one editing session.
///
/// Each session owns its own value; nothing is shared between sessions.
#[derive(Debug, Clone, Default)]
pub struct ReplacementSession {
    pending: ImageReplacements,
}

impl ReplacementSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stage replacement bytes for an inventoried resource (or a bulk media path).
    pub fn persist_image(&mut self, uid: impl Into<String>, bytes: Vec<u8>) {
        self.pending.by_uid.insert(uid.into(), bytes);
    }

    /// Stage replacement bytes for a theme media entry.
    pub fn persist_theme_image(&mut self, media_path: impl Into<String>, bytes: Vec<u8>) {
        self.pending.theme_by_media_path.insert(media_path.into(), bytes);
    }

    pub fn forget_image(&mut self, uid: &str) -> bool {
        self.pending.by_uid.remove(uid).is_some()
    }

    pub fn clear_all(&mut self) {
        self.pending.by_uid.clear();
        self.pending.theme_by_media_path.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Snapshot of everything staged so far.
    pub fn replacements(&self) -> ImageReplacements {
        self.pending.clone()
    }
}
