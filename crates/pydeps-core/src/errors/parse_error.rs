use thiserror::Error;

/// Failures setting up the Python grammar.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("grammar not available for {language}: {message}")]
    GrammarNotFound { language: String, message: String },
}
