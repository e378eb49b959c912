use thiserror::Error;

#[derive(Error, Debug)]
pub enum RebrandError {
    #[error("Support for {format} documents is not available in this build")]
    CapabilityMissing { format: String },

    #[error("Unsupported file type: '{file_name}'")]
    UnsupportedFormat { file_name: String },

    #[error("Failed to parse document: {message}")]
    Parse { message: String },

    #[error("Corrupt archive: {0}")]
    CorruptArchive(#[from] zip::result::ZipError),

    #[error("Archive entry '{path}' not found")]
    EntryNotFound { path: String },

    #[error("Missing required part '{part_path}' in {document_type} document")]
    MissingPart { part_path: String, document_type: String },

    #[error("XML parsing error at {location}: {message}")]
    XmlParse { message: String, location: String },

    #[error("XML serialization error: {0}")]
    XmlWrite(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl RebrandError {
    /// Wrap a model-loading failure as a parse error, keeping the cause text.
    pub fn parse(cause: impl std::fmt::Display) -> Self {
        Self::Parse {
            message: cause.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, RebrandError>;
