//! Integration Tests für den Zeilen-Empfänger
//!
//! Simulierte Uhr: jeder Tick ist 1 ms, höchstens ein Byte pro Tick

mod common;

use common::Harness;
use esp_core::{
    LINE_BUFFER_CAPACITY, PollEvent, ReceiverState, Response, STALE_TIMEOUT_MS, StripCommand,
};
use rgb::RGB8;

// ============================================================================
// Tests: Zeilen-Empfang
// ============================================================================

#[test]
fn test_red_line_one_byte_per_tick() {
    let mut h = Harness::new();

    let events = h.feed(b"red");
    assert_eq!(events, [PollEvent::Buffered; 3]);
    assert!(h.output().is_empty());

    let event = h.tick(Some(b'\n'));
    assert_eq!(event, PollEvent::Dispatched(Response::Ok(StripCommand::Red)));
    assert_eq!(h.output(), ["ok (red)"]);
    assert!(h.dispatcher.strip().all_shown(RGB8 { r: 255, g: 0, b: 0 }));
}

#[test]
fn test_carriage_return_terminates() {
    let mut h = Harness::new();
    h.feed(b"blue\r");
    assert_eq!(h.output(), ["ok (blue)"]);
}

#[test]
fn test_crlf_dispatches_empty_line() {
    let mut h = Harness::new();
    h.feed(b"on\r\n");
    assert_eq!(h.output(), ["ok (on)", "failed"]);
}

#[test]
fn test_buffer_cleared_after_dispatch() {
    let mut h = Harness::new();

    h.feed(b"green\n");
    assert_eq!(h.receiver.cursor(), 0);
    assert!(h.receiver.pending().is_empty());
    assert_eq!(h.receiver.state(), ReceiverState::Idle);

    h.feed(b"nope\n");
    assert_eq!(h.receiver.cursor(), 0);
    assert!(h.receiver.pending().is_empty());

    // Kein Rest der vorherigen Zeile
    h.feed(b"off\n");
    assert_eq!(h.output(), ["ok (green)", "failed", "ok (off)"]);
}

#[test]
fn test_pending_tracks_partial_line() {
    let mut h = Harness::new();
    h.feed(b"gre");

    assert_eq!(h.receiver.pending(), b"gre");
    assert_eq!(h.receiver.cursor(), 3);
    assert_eq!(h.receiver.state(), ReceiverState::Accumulating);
}

#[test]
fn test_off_twice_two_acks() {
    let mut h = Harness::new();
    h.feed(b"off\noff\n");

    assert_eq!(h.output(), ["ok (off)", "ok (off)"]);
    assert!(!h.dispatcher.indicator().active);
    assert!(h.dispatcher.strip().all_shown(RGB8::default()));
}

// ============================================================================
// Tests: Staleness / Timeout
// ============================================================================

#[test]
fn test_stale_partial_reports_error_once() {
    let mut h = Harness::new();
    h.feed(b"re");

    let events = h.idle_for(STALE_TIMEOUT_MS + 1);
    assert_eq!(h.output(), ["error"]);
    assert_eq!(
        events.last(),
        Some(&PollEvent::TimedOut { reported: true })
    );
    assert_eq!(h.receiver.cursor(), 0);

    // Weitere leere Ticks melden nichts mehr
    let events = h.idle_for(5 * STALE_TIMEOUT_MS);
    assert!(events.iter().all(|event| *event == PollEvent::Idle));
    assert!(h.output().is_empty());
}

#[test]
fn test_no_error_within_timeout_window() {
    let mut h = Harness::new();
    h.feed(b"re");

    h.idle_for(STALE_TIMEOUT_MS);
    assert!(h.output().is_empty());
    assert_eq!(h.receiver.pending(), b"re");

    h.feed(b"d\n");
    assert_eq!(h.output(), ["ok (red)"]);
}

#[test]
fn test_new_input_starts_new_episode() {
    let mut h = Harness::new();

    h.feed(b"gr");
    h.idle_for(STALE_TIMEOUT_MS + 1);
    h.feed(b"bl");
    h.idle_for(STALE_TIMEOUT_MS + 1);

    assert_eq!(h.output(), ["error", "error"]);
}

#[test]
fn test_stale_prefix_not_joined_with_next_line() {
    let mut h = Harness::new();

    h.feed(b"gre");
    h.idle_for(STALE_TIMEOUT_MS + 1);
    h.feed(b"en\n");

    assert_eq!(h.output(), ["error", "failed"]);
}

#[test]
fn test_slow_typing_keeps_line_alive() {
    let mut h = Harness::new();

    for byte in b"blue" {
        h.tick(Some(*byte));
        h.idle_for(STALE_TIMEOUT_MS - 1);
    }
    h.tick(Some(b'\n'));

    assert_eq!(h.output(), ["ok (blue)"]);
}

// ============================================================================
// Tests: Überlauf
// ============================================================================

#[test]
fn test_full_buffer_is_accepted() {
    let mut h = Harness::new();

    let line = vec![b'x'; LINE_BUFFER_CAPACITY];
    let events = h.feed(&line);
    assert!(events.iter().all(|event| *event == PollEvent::Buffered));
    assert_eq!(h.receiver.cursor(), LINE_BUFFER_CAPACITY);

    h.tick(Some(b'\n'));
    assert_eq!(h.output(), ["failed"]);
}

#[test]
fn test_overflow_reports_error_and_swallows_rest() {
    let mut h = Harness::new();

    let mut line = vec![b'x'; LINE_BUFFER_CAPACITY];
    line.extend_from_slice(b"red");
    let events = h.feed(&line);

    assert_eq!(events[LINE_BUFFER_CAPACITY], PollEvent::Overflow);
    assert_eq!(events[LINE_BUFFER_CAPACITY + 1], PollEvent::Discarded);
    assert_eq!(h.receiver.state(), ReceiverState::Discarding);
    assert_eq!(h.receiver.cursor(), 0);

    // Terminator beendet die verworfene Zeile ohne Dispatch
    assert_eq!(h.tick(Some(b'\n')), PollEvent::Discarded);
    assert_eq!(h.output(), ["error"]);
    assert_eq!(h.dispatcher.strip().show_count, 0);

    // Nächste Zeile wird normal verarbeitet
    h.feed(b"green\n");
    assert_eq!(h.output(), ["ok (green)"]);
}

#[test]
fn test_overflow_then_silence_returns_to_idle() {
    let mut h = Harness::new();

    let line = vec![b'x'; LINE_BUFFER_CAPACITY + 10];
    h.feed(&line);
    h.idle_for(STALE_TIMEOUT_MS + 1);

    assert_eq!(h.receiver.state(), ReceiverState::Idle);
    assert_eq!(h.output(), ["error"]);
}
