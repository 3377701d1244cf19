//! Core chain types and definitions

use std::error::Error as StdError;

use once_cell::sync::OnceCell;
use thiserror::Error;

/// Upper bound on the number of raw frames retained by a capture; deeper
/// stacks are truncated silently.
pub(super) const MAX_FRAMES: usize = 200;

/// Chained diagnostic error.
///
/// Each wrap call produces one node. Nodes are immutable after construction
/// except for the one-time population of the render cache, and each node
/// exclusively owns its predecessor, so a chain is a finite singly linked
/// list ending at the node that first wrapped a non-chain source.
pub struct ChainError {
    /// Context supplied at this wrap point. May be empty.
    pub(super) message: String,
    /// Foreign error captured when this node started a chain; absent on
    /// nodes created by wrapping an existing chain.
    pub(super) foreign: Option<Box<dyn StdError + Send + Sync>>,
    /// Predecessor in the chain, owned exclusively by this node.
    pub(super) prev: Option<Box<ChainError>>,
    /// Raw program-counter frames, present only on the root-of-capture
    /// node. Symbol resolution is deferred until render time.
    pub(super) stack: Option<Vec<backtrace::Frame>>,
    /// One-time render cache; all concurrent first callers observe the
    /// same completed value.
    pub(super) rendered: OnceCell<String>,
}

/// What a wrap call starts from.
///
/// Classification happens once, at construction: an existing [`ChainError`]
/// extends the chain without a new capture, anything else becomes a
/// root-of-capture node.
pub enum Source {
    /// No originating error; the chain starts from a bare message.
    Absent,
    /// An existing chain to extend.
    Chain(Box<ChainError>),
    /// A non-chain error value to capture at the root.
    Foreign(Box<dyn StdError + Send + Sync>),
}

/// Immutable foreign error built from a literal message, for defining
/// comparable constant error values.
///
/// Sentinels compare by value: ownership moves a sentinel into a chain, so
/// identity comparison against the original constant would never hold.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct Sentinel(pub(super) String);

/// Result type alias using [`ChainError`].
pub type Result<T> = std::result::Result<T, ChainError>;
