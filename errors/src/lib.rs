//! Chained diagnostic errors for seahorse services
//!
//! This crate provides the failure-reporting core shared by seahorse
//! components:
//! - Error chaining with contextual messages at every wrap point
//! - Call-stack capture exactly once per chain, resolved lazily
//! - A single human-readable rendering, computed once and cached
//! - Interop with generic error inspection (`is`, `downcast_ref`, `unwrap`)

pub mod error;

pub use error::*;
