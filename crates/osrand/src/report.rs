// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::fmt;
use std::panic::Location;
use std::sync::{Arc, Mutex, PoisonError};

use log::debug;

use crate::error::{OsRandError, Reason};
use crate::traits::ErrorSink;

/// A raised error, tagged with the location that raised it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorRecord {
    /// Reason code.
    pub reason: Reason,
    /// Source file of the raising call.
    pub file: &'static str,
    /// Source line of the raising call.
    pub line: u32,
    /// Formatted message.
    pub message: String,
}

/// Raises errors into an optional [`ErrorSink`].
///
/// A reporter without a sink silently drops records.
#[derive(Clone, Default)]
pub struct Reporter {
    sink: Option<Arc<dyn ErrorSink>>,
}

impl Reporter {
    /// Creates a reporter wired to `sink`.
    pub fn new(sink: Arc<dyn ErrorSink>) -> Self {
        Self { sink: Some(sink) }
    }

    /// Creates a reporter with no sink.
    pub fn disabled() -> Self {
        Self { sink: None }
    }

    /// Returns `true` if a sink is wired up.
    pub fn is_wired(&self) -> bool {
        self.sink.is_some()
    }

    /// Pushes a record describing `error`.
    #[track_caller]
    pub fn raise(&self, error: &OsRandError) {
        self.raise_with(error.reason(), format_args!("{error}"));
    }

    /// Pushes a record with an explicit reason and message.
    #[track_caller]
    pub fn raise_with(&self, reason: Reason, message: fmt::Arguments<'_>) {
        let location = Location::caller();
        debug!("Error: {message}");

        let Some(sink) = &self.sink else {
            return;
        };

        sink.push(ErrorRecord {
            reason,
            file: location.file(),
            line: location.line(),
            message: message.to_string(),
        });
    }
}

impl fmt::Debug for Reporter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Reporter")
            .field("wired", &self.is_wired())
            .finish()
    }
}

/// In-memory error queue, usable as an [`ErrorSink`].
#[derive(Debug, Default)]
pub struct ErrorQueue {
    records: Mutex<Vec<ErrorRecord>>,
}

impl ErrorQueue {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of queued records.
    pub fn len(&self) -> usize {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Returns `true` if nothing has been raised.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Removes and returns every queued record, oldest first.
    pub fn drain(&self) -> Vec<ErrorRecord> {
        let mut records = self.records.lock().unwrap_or_else(PoisonError::into_inner);
        core::mem::take(&mut *records)
    }
}

impl ErrorSink for ErrorQueue {
    fn push(&self, record: ErrorRecord) {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(record);
    }
}
