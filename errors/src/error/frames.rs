//! Stack capture and frame symbolication.
//!
//! Capture records raw program counters only; resolving them to
//! `{file, line, function}` is deferred until a chain is rendered, which
//! keeps the capture on the failure path cheap.

use std::path::Path;

use super::types::MAX_FRAMES;

/// Placeholder emitted for locations that cannot be resolved.
pub(super) const UNRESOLVED: &str = "???";

/// Standard-library sources resolve under `/rustc/<commit>/` on release
/// toolchains.
const RUSTC_SOURCE_PREFIX: &str = "/rustc/";

/// Path fragments marking runtime and standard-library sources on locally
/// built toolchains.
const RUNTIME_SOURCE_MARKERS: [&str; 4] = [
    "/library/std/src/",
    "/library/core/src/",
    "/library/alloc/src/",
    "/library/test/src/",
];

/// Symbols under this prefix belong to the wrap/capture path itself and are
/// elided from the head of a rendered trace.
const CAPTURE_MODULE: &str = concat!(env!("CARGO_CRATE_NAME"), "::error");

/// A raw frame resolved for display. Any part may be unavailable.
pub(super) struct FrameInfo {
    /// Fully qualified demangled symbol name, hash suffix stripped.
    pub(super) name: Option<String>,
    /// Source file the frame resolves to.
    pub(super) file: Option<String>,
    /// Line within `file`.
    pub(super) line: Option<u32>,
}

impl FrameInfo {
    /// True when the frame belongs to the capture machinery (this crate's
    /// error module or the unwinder) rather than to the caller.
    pub(super) fn is_capture_machinery(&self) -> bool {
        self.name.as_deref().is_some_and(|name| {
            name.starts_with("backtrace::") || name.contains(CAPTURE_MODULE)
        })
    }

    /// True when the frame resolves into the language runtime or standard
    /// library; such frames carry no diagnostic value and are omitted.
    pub(super) fn is_runtime(&self) -> bool {
        self.file.as_deref().is_some_and(is_runtime_file)
    }
}

/// Takes a bounded snapshot of the current call stack as raw frames.
pub(super) fn capture() -> Vec<backtrace::Frame> {
    let mut frames = Vec::with_capacity(64);
    backtrace::trace(|frame| {
        frames.push(frame.clone());
        frames.len() < MAX_FRAMES
    });
    frames
}

/// Resolves one raw frame. Every field degrades independently; a frame the
/// symbol table knows nothing about yields all-`None`.
pub(super) fn resolve(frame: &backtrace::Frame) -> FrameInfo {
    let mut info = FrameInfo {
        name: None,
        file: None,
        line: None,
    };
    let mut resolved = false;
    backtrace::resolve_frame(frame, |symbol| {
        if resolved {
            return;
        }
        resolved = true;
        info.name = symbol.name().map(|name| format!("{name:#}"));
        info.file = symbol
            .filename()
            .and_then(Path::to_str)
            .map(str::to_string);
        info.line = symbol.lineno();
    });
    info
}

fn is_runtime_file(file: &str) -> bool {
    file.starts_with(RUSTC_SOURCE_PREFIX)
        || RUNTIME_SOURCE_MARKERS
            .iter()
            .any(|marker| file.contains(marker))
}

/// Collapses a demangled symbol to its trailing identifier, keeping closure
/// markers attached to the function that owns them.
pub(super) fn simplify_name(full: &str) -> String {
    let segments: Vec<&str> = full.split("::").collect();
    let last_named = segments
        .iter()
        .rposition(|segment| !segment.starts_with('{'))
        .unwrap_or(0);
    segments[last_named..].join("::")
}
