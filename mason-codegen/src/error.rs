use thiserror::Error;

use crate::host::HostError;

/// Reasons a generation pass is abandoned.
///
/// Any of these means nothing was written.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("could not read the compilation unit")]
    Resolve(#[source] HostError),

    #[error("class `{class}` is malformed: {reason}")]
    StructuralMismatch { class: String, reason: String },

    #[error("could not rewrite class `{class}`")]
    Rewrite {
        class: String,
        #[source]
        source: HostError,
    },

    #[error("could not apply generated members")]
    Commit(#[source] HostError),
}

impl GenerateError {
    pub(crate) fn mismatch(class: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::StructuralMismatch {
            class: class.into(),
            reason: reason.into(),
        }
    }
}
