//! Error chaining with deferred stack rendering
//!
//! Provides the chained diagnostic error used across seahorse services:
//! - Context wrapping as a failure propagates up a call chain
//! - One-shot bounded stack capture at the point a chain starts
//! - Lazy, cached, concurrency-safe rendering of the whole chain
//! - Generic `is`/`downcast_ref`/`unwrap` inspection across chains

pub mod constructors;
pub mod display;
pub mod inspect;
pub mod logging;
pub mod macros;
pub mod types;

// Capture and symbolication stay internal; only rendered output is public.
mod frames;

pub use inspect::{downcast_ref, is, unwrap};
pub use logging::DiagnosticLog;
pub use types::{ChainError, Result, Sentinel, Source};
