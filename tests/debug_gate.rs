// SPDX-License-Identifier: MIT OR Apache-2.0

//! The debug gate is one-way for the whole process, so everything that
//! depends on its before/after behavior lives in this single test.

#[test]
fn debug_gate_flips_once_for_the_process() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("debug.log");

    sevlog::init_path(&path).unwrap();

    // Before enable_debug: silent whether stopped or started.
    sevlog::log_debug!("probe", "hidden while uninitialized-ish");
    sevlog::start();
    sevlog::log_debug!("probe", "hidden while started {n}", n = 1);
    sevlog::stop();
    sevlog::log_debug!("probe", "hidden while stopped");
    sevlog::start();

    assert!(!sevlog::debug_logging_enabled());
    sevlog::enable_debug();
    assert!(sevlog::debug_logging_enabled());

    sevlog::log_debug!("probe", "visible {n}", n = 1);
    sevlog::log_debug!("", "untagged line");
    sevlog::deinit().unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    assert!(!contents.contains("hidden"), "contents were:\n{contents}");

    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains("<debug>"));
    assert!(lines[0].ends_with("probe: visible 1"));
    // Empty tag means no prefix on debug lines.
    assert!(lines[1].ends_with("> untagged line"));
    assert!(!lines[1].contains(": untagged line"));

    // The flag survives re-init: a fresh sink starts with the lowered filter.
    let second = dir.path().join("debug2.log");
    sevlog::init_path(&second).unwrap();
    sevlog::start();
    sevlog::log_debug!("probe", "still visible");
    sevlog::deinit().unwrap();

    let contents = std::fs::read_to_string(&second).unwrap();
    assert!(contents.contains("probe: still visible"));
}
