//! Error type for the DXF importer.
//!
//! Every variant renders the message returned to API clients in the
//! `error` field of a failed [`CadImportResult`](crate::CadImportResult).

use conveyor_core::error::AppError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CadImportError {
    /// The file extension is neither `.dxf` nor `.dwg`.
    #[error("Unsupported file format: {extension}. Supported formats: .dwg, .dxf")]
    UnsupportedFormat {
        /// Lowercased extension including the dot, empty when missing.
        extension: String,
    },

    /// DWG is accepted as a format but cannot be read.
    #[error("Failed to parse CAD file: DWG parsing is not supported, save the drawing as DXF")]
    DwgNotSupported,

    /// The upload exceeds the configured size limit.
    #[error("CAD file is {size} bytes, exceeding the limit of {limit} bytes")]
    FileTooLarge {
        /// Upload size.
        size: usize,
        /// Configured maximum.
        limit: usize,
    },

    /// The DXF reader rejected the file.
    #[error("Failed to parse CAD file: {0}")]
    Dxf(#[from] dxf::DxfError),
}

impl CadImportError {
    /// Whether the failure was detected before any parsing started.
    pub fn is_rejected_upload(&self) -> bool {
        matches!(self, Self::UnsupportedFormat { .. } | Self::FileTooLarge { .. })
    }
}

impl From<CadImportError> for AppError {
    fn from(err: CadImportError) -> Self {
        match &err {
            CadImportError::UnsupportedFormat { .. }
            | CadImportError::FileTooLarge { .. }
            | CadImportError::DwgNotSupported => AppError::validation(err.to_string()),
            CadImportError::Dxf(_) => AppError::plugin(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use conveyor_core::error::ErrorKind;

    use super::*;

    #[test]
    fn test_unsupported_format_message() {
        let err = CadImportError::UnsupportedFormat {
            extension: ".step".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Unsupported file format: .step. Supported formats: .dwg, .dxf"
        );
        assert!(err.is_rejected_upload());
        assert_eq!(AppError::from(err).kind, ErrorKind::Validation);
    }

    #[test]
    fn test_dwg_is_a_parse_failure() {
        let err = CadImportError::DwgNotSupported;
        assert!(err.to_string().starts_with("Failed to parse CAD file:"));
        assert!(!err.is_rejected_upload());
    }
}
