use thiserror::Error;

/// Errors raised by the config-tree layer.
///
/// The transforms themselves are tolerant (unmatched keys are skipped,
/// missing defaults are treated as empty), so the only failure mode is
/// being handed input of the wrong shape.
#[derive(Debug, Error)]
pub enum TreeError {
    /// The supplied top-level value is not a mapping.
    #[error("expected a top-level mapping, found {found}")]
    NotAMapping {
        /// Short description of the value that was found instead.
        found: String,
    },
}
