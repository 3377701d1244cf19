//! Construction of chain nodes and wrap sources

use std::error::Error as StdError;

use once_cell::sync::OnceCell;

use super::frames;
use super::types::{ChainError, Sentinel, Source};

impl ChainError {
    /// Starts a chain from a bare message, capturing the call stack here.
    ///
    /// Equivalent to `ChainError::wrap(Source::Absent, message)`.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self::from_source(Source::Absent, message.into())
    }

    /// Wraps `source` with a contextual message. The sole construction
    /// entry point; never fails.
    ///
    /// Wrapping an existing [`ChainError`] links it as the predecessor and
    /// captures nothing. Any other source (or [`Source::Absent`]) starts a
    /// new chain and takes a bounded stack snapshot at this call site.
    #[must_use]
    pub fn wrap(source: impl Into<Source>, message: impl Into<String>) -> Self {
        Self::from_source(source.into(), message.into())
    }

    fn from_source(source: Source, message: String) -> Self {
        match source {
            Source::Chain(prev) => Self {
                message,
                foreign: None,
                prev: Some(prev),
                stack: None,
                rendered: OnceCell::new(),
            },
            Source::Foreign(foreign) => Self {
                message,
                foreign: Some(foreign),
                prev: None,
                stack: Some(frames::capture()),
                rendered: OnceCell::new(),
            },
            Source::Absent => Self {
                message,
                foreign: None,
                prev: None,
                stack: Some(frames::capture()),
                rendered: OnceCell::new(),
            },
        }
    }

    /// Context supplied when this node was created.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The previous node in the chain, if this node extended one.
    #[must_use]
    pub fn prev(&self) -> Option<&ChainError> {
        self.prev.as_deref()
    }

    /// The foreign error this chain was started from, if any. Present only
    /// on the root-of-capture node.
    #[must_use]
    pub fn foreign(&self) -> Option<&(dyn StdError + Send + Sync + 'static)> {
        self.foreign.as_deref()
    }

    /// Number of raw frames captured at this node. Nonzero only at the
    /// root-of-capture node; later wraps never recapture.
    #[must_use]
    pub fn captured_frames(&self) -> usize {
        self.stack.as_ref().map_or(0, Vec::len)
    }
}

impl Source {
    /// Classifies an already-boxed error without boxing it again.
    #[must_use]
    pub fn from_boxed(err: Box<dyn StdError + Send + Sync>) -> Self {
        match err.downcast::<ChainError>() {
            Ok(chain) => Source::Chain(chain),
            Err(foreign) => Source::Foreign(foreign),
        }
    }
}

// The anyhow-style blanket: any concrete error value is boxed once and
// classified at runtime. `Source` must never implement `std::error::Error`
// or this impl would be incoherent.
impl<E> From<E> for Source
where
    E: StdError + Send + Sync + 'static,
{
    fn from(err: E) -> Self {
        Source::from_boxed(Box::new(err))
    }
}

impl Sentinel {
    /// Builds an immutable sentinel error from a literal message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}
