use thiserror::Error;

/// Module classification errors. These indicate a caller bug, not bad source.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClassifyError {
    /// Empty or whitespace-only statement.
    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },

    /// Input was not text (e.g. bytes that are not valid UTF-8).
    #[error("import statement should be str, not {found}")]
    TypeMismatch { found: String },
}

impl ClassifyError {
    pub fn empty_statement() -> Self {
        Self::InvalidArgument {
            message: "import statement cannot be empty".to_string(),
        }
    }
}
