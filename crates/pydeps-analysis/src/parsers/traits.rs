//! Parser capability seam used by the orchestrator.

/// Turns file content into import statements.
pub trait ImportParser: Send + Sync {
    /// Recognized import statements of a file, in source order.
    fn extract_imports(&self, source: &str) -> Vec<String>;
}
