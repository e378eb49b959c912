use serde::{Deserialize, Serialize};
use std::fmt;

/// Document kinds the engine knows about, inferred from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentFormat {
    Word,
    Presentation,
    Spreadsheet,
    Pdf,
    Unknown,
}

impl DocumentFormat {
    /// Human-facing name used in error messages and log lines.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Word => "Word",
            Self::Presentation => "PowerPoint",
            Self::Spreadsheet => "Excel",
            Self::Pdf => "PDF",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
