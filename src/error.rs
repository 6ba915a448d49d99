//! Error types for projfind
//!
//! Only two failure kinds exist, and neither escapes `find_file`:
//! - [`ResolveError`]: one candidate could not produce an absolute location
//!   and is skipped.
//! - [`TraversalError`]: the tree walk itself failed and is aborted, keeping
//!   whatever result had been accumulated.

use thiserror::Error;

/// A file resource could not be resolved to an absolute on-disk path.
///
/// The finder recovers from this locally: the candidate is skipped and the
/// search continues with the next resource.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// The resource has no resolvable storage location (e.g. a broken link).
    #[error("resource '{0}' has no resolvable location")]
    Unresolved(String),

    /// A linked resource stores a relative target, which cannot yield an
    /// absolute path on its own.
    #[error("link target for '{0}' is not an absolute path")]
    RelativeLinkTarget(String),

    /// The project root is not an absolute path, so rooted resources cannot
    /// be located.
    #[error("project root is not an absolute path")]
    RelativeRoot,
}

/// The underlying tree-read operation failed mid-walk.
///
/// `find_file` never propagates this to its caller; it is logged and the
/// accumulated result is returned as-is.
#[derive(Debug, Error)]
pub enum TraversalError {
    /// I/O or access failure while reading the tree.
    #[error("tree read failed: {0}")]
    Io(#[from] std::io::Error),

    /// The host project model refused the walk (e.g. project closed).
    #[error("project model error: {0}")]
    Model(String),
}

impl TraversalError {
    /// Create a model-level traversal error.
    pub fn model(message: impl Into<String>) -> Self {
        Self::Model(message.into())
    }
}
