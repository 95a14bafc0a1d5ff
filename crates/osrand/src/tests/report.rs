// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::sync::Arc;

use crate::error::{OsRandError, Reason};
use crate::report::{ErrorQueue, Reporter};

#[test]
fn test_reason_codes_are_stable() {
    assert_eq!(Reason::DeviceOpenFailure.code(), 1);
    assert_eq!(Reason::DeviceReadFailure.code(), 2);
    assert_eq!(Reason::GetrandomFailure.code(), 3);
    assert_eq!(Reason::UnknownMode.code(), 4);
}

#[test]
fn test_disabled_reporter_drops_records() {
    let reporter = Reporter::disabled();

    assert!(!reporter.is_wired());
    reporter.raise(&OsRandError::UnknownMode("bogus".into()));
}

#[test]
fn test_raise_records_reason_message_and_location() {
    let queue = Arc::new(ErrorQueue::new());
    let reporter = Reporter::new(queue.clone());
    let error = OsRandError::GetrandomShort {
        requested: 16,
        received: 4,
    };

    let line = line!() + 1;
    reporter.raise(&error);

    let records = queue.drain();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].reason, Reason::GetrandomFailure);
    assert!(records[0].file.ends_with("report.rs"));
    assert_eq!(records[0].line, line);
    assert!(records[0].message.contains("16"));
    assert!(records[0].message.contains("only 4 received"));
}

#[test]
fn test_raise_with_explicit_reason() {
    let queue = Arc::new(ErrorQueue::new());
    let reporter = Reporter::new(queue.clone());

    reporter.raise_with(Reason::DeviceReadFailure, format_args!("read {} failed", 7));

    let records = queue.drain();
    assert_eq!(records[0].reason, Reason::DeviceReadFailure);
    assert_eq!(records[0].message, "read 7 failed");
}

#[test]
fn test_queue_drain_empties_queue() {
    let queue = Arc::new(ErrorQueue::new());
    let reporter = Reporter::new(queue.clone());

    reporter.raise(&OsRandError::UnknownMode("a".into()));
    reporter.raise(&OsRandError::UnknownMode("b".into()));
    assert_eq!(queue.len(), 2);

    let records = queue.drain();
    assert_eq!(records.len(), 2);
    assert!(records[0].message.contains("\"a\""));
    assert!(queue.is_empty());
}

#[test]
fn test_cloned_reporters_share_sink() {
    let queue = Arc::new(ErrorQueue::new());
    let reporter = Reporter::new(queue.clone());
    let clone = reporter.clone();

    reporter.raise(&OsRandError::UnknownMode("a".into()));
    clone.raise(&OsRandError::UnknownMode("b".into()));

    assert_eq!(queue.len(), 2);
}
