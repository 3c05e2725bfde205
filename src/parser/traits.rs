//! Version extractor trait definition

/// Trait for reading a declared version out of a source file without running it
pub trait VersionExtractor: Send + Sync {
    /// Returns the literal version text declared in `content`
    fn extract(&self, content: &str) -> Result<String, ExtractError>;
}

/// Error type for extraction operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExtractError {
    /// No version declaration in the file
    #[error("no version declared")]
    NotDeclared,

    /// A version is declared but not as a literal we can read statically
    #[error("version is not a literal: {0}")]
    NotLiteral(String),
}
