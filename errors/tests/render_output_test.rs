//! Tests for chain rendering - output format, message ordering, caching

use seahorse_errors::{ChainError, Sentinel, Source};

#[inline(never)]
fn read_device() -> ChainError {
    ChainError::wrap(Sentinel::new("device not ready"), "probe failed")
}

#[inline(never)]
fn open_device() -> ChainError {
    ChainError::wrap(read_device(), "open /dev/sh0")
}

#[test]
fn messages_pair_outward_from_the_capture_site() {
    let top = ChainError::wrap(open_device(), "starting plugin server");
    let rendered = top.render();

    let innermost = rendered
        .find("probe failed err:device not ready")
        .expect("root annotation missing");
    let mid = rendered.find("open /dev/sh0").expect("mid annotation missing");
    let outer = rendered
        .find("starting plugin server")
        .expect("outermost annotation missing");
    assert!(
        innermost < mid && mid < outer,
        "annotations must move outward from the capture site:\n{rendered}"
    );
    assert!(rendered.contains("read_device"));
    assert!(rendered.contains("open_device"));
}

#[test]
fn entries_are_bracketed_with_file_and_line() {
    let err = read_device();
    let rendered = err.render();
    assert!(rendered.starts_with("\n\t[ "));
    assert!(rendered.ends_with(']'));
    assert!(rendered.contains("render_output_test.rs:"));
}

#[inline(never)]
fn lone() -> ChainError {
    ChainError::new("solo")
}

#[test]
fn frames_beyond_messages_render_empty_annotations() {
    let err = lone();
    let rendered = err.render();
    assert!(rendered.contains("solo]"));
    assert!(
        rendered.contains(":]"),
        "caller frames past the message count keep an empty annotation:\n{rendered}"
    );
}

#[test]
fn render_is_idempotent_and_cached() {
    let err = ChainError::wrap(Sentinel::new("io stall"), "flush");
    let first = err.render();
    let second = err.render();
    assert_eq!(first, second);
    assert!(
        std::ptr::eq(first.as_ptr(), second.as_ptr()),
        "render must return the cached string"
    );
}

#[test]
fn display_matches_render() {
    let err = ChainError::new("display me");
    assert_eq!(format!("{err}"), err.render());
}

#[test]
fn wrap_of_absent_renders_message_without_foreign_annotation() {
    let err = ChainError::wrap(Source::Absent, "only message");
    let rendered = err.render();
    assert!(rendered.contains("only message"));
    assert!(!rendered.contains("err:"));
}

#[test]
fn empty_messages_render_as_empty_annotations() {
    let err = ChainError::wrap(ChainError::new(""), "");
    let rendered = err.render();
    assert!(!rendered.is_empty());
    assert!(rendered.contains(":]"));
}
