//! Rendering and trait implementations for chain nodes

use std::error::Error as StdError;
use std::fmt::{self, Write as _};

use log::trace;

use super::frames::{self, FrameInfo};
use super::types::ChainError;

impl ChainError {
    /// Renders the whole chain as a multi-line diagnostic.
    ///
    /// The computation runs at most once per node, even under concurrent
    /// invocation; every caller observes the identical cached string for
    /// the rest of the node's lifetime.
    pub fn render(&self) -> &str {
        self.rendered.get_or_init(|| self.render_chain()).as_str()
    }

    fn render_chain(&self) -> String {
        let mut messages: Vec<String> = Vec::new();
        let mut stack: Option<&[backtrace::Frame]> = None;
        let mut node = Some(self);
        while let Some(current) = node {
            stack = current.stack.as_deref();
            messages.push(match current.foreign.as_deref() {
                Some(foreign) => format!("{} err:{}", current.message, foreign),
                None => current.message.clone(),
            });
            node = current.prev.as_deref();
        }

        let raw = stack.unwrap_or(&[]);
        let infos: Vec<FrameInfo> = raw.iter().map(frames::resolve).collect();
        // Frames up to and including the last capture-machinery frame
        // belong to the wrap path; the entry after them is the caller.
        let start = infos
            .iter()
            .rposition(FrameInfo::is_capture_machinery)
            .map_or(0, |last| last + 1);

        let mut buf = String::with_capacity(512);
        for (index, info) in infos[start..].iter().enumerate() {
            // Innermost frame pairs with the root message; frames past the
            // message count keep an empty annotation.
            let annotation = messages
                .len()
                .checked_sub(index + 1)
                .map_or("", |slot| messages[slot].as_str());
            if info.is_runtime() {
                // An elided runtime frame still consumes its annotation slot.
                continue;
            }
            push_entry(&mut buf, info, annotation);
        }
        trace!(
            "rendered error chain: {} wraps, {} frames",
            messages.len(),
            infos.len()
        );
        buf
    }
}

fn push_entry(buf: &mut String, info: &FrameInfo, annotation: &str) {
    let func = info
        .name
        .as_deref()
        .map_or_else(|| frames::UNRESOLVED.to_string(), frames::simplify_name);
    let file = info.file.as_deref().unwrap_or(frames::UNRESOLVED);
    let line = info.line.unwrap_or(0);
    // The space after '[' lets IDEs recognize file:line and link to it.
    let _ = write!(buf, "\n\t[ {file}:{line} {func}:{annotation}]");
}

impl fmt::Display for ChainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.render())
    }
}

// Raw captured frames carry no useful `Debug` form, so the stack shows up
// only as a frame count.
impl fmt::Debug for ChainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChainError")
            .field("message", &self.message)
            .field("foreign", &self.foreign)
            .field("prev", &self.prev)
            .field("captured_frames", &self.captured_frames())
            .finish()
    }
}

impl StdError for ChainError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        // A node unwraps to its delegate's source, not the delegate itself;
        // the generic predicates reach the delegate through downcasting.
        if let Some(foreign) = self.foreign.as_deref() {
            foreign.source()
        } else if let Some(prev) = self.prev.as_deref() {
            prev.source()
        } else {
            None
        }
    }
}
