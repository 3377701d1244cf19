//! Tests for capture placement, runtime-frame elision, and truncation

use seahorse_errors::{ChainError, DiagnosticLog, Sentinel};

#[inline(never)]
fn fail_probe() -> ChainError {
    ChainError::wrap(Sentinel::new("probe timeout"), "probing transport")
}

#[test]
fn only_the_first_wrap_captures_a_stack() {
    let mut err = fail_probe();
    for attempt in 0..4 {
        err = ChainError::wrap(err, format!("retry {attempt}"));
    }

    let mut captures = 0;
    let mut node = Some(&err);
    while let Some(current) = node {
        if current.captured_frames() > 0 {
            captures += 1;
        }
        node = current.prev();
    }
    assert_eq!(captures, 1, "exactly one node in the chain holds a capture");
    assert_eq!(err.captured_frames(), 0, "later wraps must not recapture");
    assert!(!err.render().is_empty());
}

#[test]
fn first_entry_is_the_wrapping_callers_site() {
    let err = fail_probe();
    let rendered = err.render();
    let first_entry = rendered
        .lines()
        .find(|line| line.contains('['))
        .expect("at least one entry");
    assert!(
        first_entry.contains("fail_probe"),
        "capture must start at the wrapping caller: {first_entry}"
    );
    assert!(first_entry.contains("probing transport err:probe timeout"));
}

#[test]
fn runtime_frames_never_appear_in_rendered_output() {
    let err = (0..3)
        .map(|attempt| ChainError::wrap(Sentinel::new("flaky"), format!("attempt {attempt}")))
        .last()
        .expect("iterator yields a chain");
    let rendered = err.render();
    assert!(!rendered.contains("/rustc/"));
    assert!(!rendered.contains("/library/std/"));
    assert!(!rendered.contains("/library/core/"));
    assert!(rendered.contains("attempt 2"));
}

#[inline(never)]
fn recurse(depth: usize) -> ChainError {
    if depth == 0 {
        return ChainError::new("bottom of deep recursion");
    }
    recurse(depth - 1)
}

#[test]
fn deep_stacks_truncate_silently() {
    let err = recurse(250);
    let rendered = err.render();
    assert!(rendered.matches("\n\t[").count() <= 200);
    assert!(rendered.contains("bottom of deep recursion"));
}

#[test]
fn failures_log_their_rendered_chain() {
    DiagnosticLog::init_test();
    let err = fail_probe();
    // Must not panic; output is inspected via RUST_LOG when needed.
    DiagnosticLog::log_failure("device plugin restart", &err);
    DiagnosticLog::log_warning("device plugin restart", &err);
}
