// SPDX-License-Identifier: MIT OR Apache-2.0

//! End-to-end walks of the lifecycle against a real file sink.
//!
//! The facade is process-wide state, so tests in this binary serialize on a
//! guard mutex.  Debug-flag behavior lives in its own test binary
//! (`debug_gate.rs`) because `enable_debug` is one-way for the process.

use std::sync::Mutex;

static GUARD: Mutex<()> = Mutex::new(());

#[test]
fn lifecycle_walk_produces_tagged_lines() {
    let _guard = GUARD.lock().unwrap_or_else(|e| e.into_inner());
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("walk.log");

    sevlog::init_path(&path).unwrap();
    sevlog::start();

    sevlog::log_info!("main", "service coming up");
    sevlog::log_warning!("main", "config {name} missing", name = "app.toml");
    sevlog::log_error!("main", "bind failed on port {port}", port = 8080);
    // Debug is off for this whole binary; this must leave no trace.
    sevlog::log_debug!("main", "invisible");

    sevlog::stop();
    sevlog::log_error!("main", "after stop");
    sevlog::deinit().unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 3, "contents were:\n{contents}");

    assert!(lines[0].contains("< info>"));
    assert!(lines[0].ends_with("main: service coming up"));
    assert!(lines[1].contains("< warn>"));
    assert!(lines[1].ends_with("main: config app.toml missing"));
    assert!(lines[2].contains("<error>"));
    assert!(lines[2].ends_with("main: bind failed on port 8080"));

    for line in &lines {
        // `YYYY-MM-DD, HH:MM:SS.ffffff` prefix and a thread identifier.
        assert_eq!(&line[4..5], "-");
        assert_eq!(&line[10..12], ", ");
        assert!(line.contains("<ThreadId("), "line was: {line}");
    }
    assert!(!contents.contains("invisible"));
    assert!(!contents.contains("after stop"));
}

#[test]
fn reinit_supersedes_old_sink() {
    let _guard = GUARD.lock().unwrap_or_else(|e| e.into_inner());
    let dir = tempfile::tempdir().unwrap();
    let first = dir.path().join("first.log");
    let second = dir.path().join("second.log");

    sevlog::init_path(&first).unwrap();
    sevlog::start();
    sevlog::log_info!("reinit", "goes to first");

    sevlog::init_path(&second).unwrap();
    // The replacement sink starts disabled; nothing lands anywhere yet.
    sevlog::log_info!("reinit", "limbo");
    sevlog::start();
    sevlog::log_info!("reinit", "goes to second");
    sevlog::deinit().unwrap();

    let first_contents = std::fs::read_to_string(&first).unwrap();
    let second_contents = std::fs::read_to_string(&second).unwrap();

    assert!(first_contents.contains("goes to first"));
    assert!(!first_contents.contains("limbo"));
    assert!(!first_contents.contains("goes to second"));

    assert!(second_contents.contains("goes to second"));
    assert!(!second_contents.contains("limbo"));
    assert!(!second_contents.contains("goes to first"));
}

#[test]
fn oversized_message_is_bounded() {
    let _guard = GUARD.lock().unwrap_or_else(|e| e.into_inner());
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("trunc.log");

    sevlog::init_path(&path).unwrap();
    sevlog::start();

    let huge = "x".repeat(sevlog::MAX_MESSAGE_LEN * 2);
    sevlog::log_info!("bulk", "payload {data}", data = huge);
    sevlog::deinit().unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 1);
    let line = lines[0];
    assert!(line.contains("bulk: payload "));
    assert!(line.ends_with(sevlog::TRUNCATION_MARKER));

    // The message portion starts after the `<thread>` field.
    let message_start = line.find("> bulk:").unwrap() + 2;
    assert!(line.len() - message_start <= sevlog::MAX_MESSAGE_LEN);
}

#[test]
fn logging_after_deinit_is_counted_not_fatal() {
    let _guard = GUARD.lock().unwrap_or_else(|e| e.into_inner());
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("torn.log");

    sevlog::init_path(&path).unwrap();
    sevlog::start();
    sevlog::log_info!("teardown", "last line");
    sevlog::deinit().unwrap();

    let before = sevlog::dropped_records();
    sevlog::log_error!("teardown", "into the void");
    assert_eq!(sevlog::dropped_records(), before + 1);

    let contents = std::fs::read_to_string(&path).unwrap();
    assert!(contents.contains("last line"));
    assert!(!contents.contains("into the void"));
}

#[test]
fn unwritable_path_fails_init_only() {
    let _guard = GUARD.lock().unwrap_or_else(|e| e.into_inner());
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, "").unwrap();

    let err = sevlog::init_path(blocker.join("sink.log")).unwrap_err();
    assert!(matches!(err, sevlog::LogError::SinkCreation { .. }));

    // The failure left no sink behind; the process is still usable.
    sevlog::start();
    let good = dir.path().join("good.log");
    sevlog::init_path(&good).unwrap();
    sevlog::start();
    sevlog::log_info!("recovery", "back on our feet");
    sevlog::deinit().unwrap();
    assert!(std::fs::read_to_string(&good).unwrap().contains("back on our feet"));
}
