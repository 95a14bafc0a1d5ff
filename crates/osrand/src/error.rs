// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Numeric reason codes attached to every raised error record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum Reason {
    /// The entropy device could not be opened.
    DeviceOpenFailure = 1,
    /// A read from an opened entropy device failed.
    DeviceReadFailure = 2,
    /// The getrandom syscall failed or could not fill the buffer.
    GetrandomFailure = 3,
    /// A mode value outside the known set.
    UnknownMode = 4,
}

impl Reason {
    /// Returns the stable numeric code of this reason.
    pub fn code(self) -> u32 {
        self as u32
    }
}

/// Errors that can occur when generating random data.
#[derive(Debug, Error)]
pub enum OsRandError {
    /// Opening the device (or establishing its identity) failed.
    #[error("failed to open device {}", path.display())]
    DeviceOpen {
        /// Device path that was opened.
        path: PathBuf,
        /// Underlying OS error.
        #[source]
        source: io::Error,
    },

    /// Reading from an opened device failed or hit end of file.
    #[error("failed to read from device {}", path.display())]
    DeviceRead {
        /// Device path that was read.
        path: PathBuf,
        /// Underlying OS error.
        #[source]
        source: io::Error,
    },

    /// The getrandom syscall returned an error.
    #[error("failed to get {requested} bytes using getrandom due to error")]
    Getrandom {
        /// Number of bytes requested.
        requested: usize,
        /// Underlying OS error.
        #[source]
        source: io::Error,
    },

    /// The getrandom syscall stopped making progress.
    #[error("failed to get {requested} bytes using getrandom, only {received} received")]
    GetrandomShort {
        /// Number of bytes requested.
        requested: usize,
        /// Number of bytes written before the syscall stalled.
        received: usize,
    },

    /// A mode name or code that does not map to a known source.
    #[error("unknown mode {0:?}")]
    UnknownMode(String),
}

impl OsRandError {
    /// Maps this error onto its reporting reason.
    pub fn reason(&self) -> Reason {
        match self {
            Self::DeviceOpen { .. } => Reason::DeviceOpenFailure,
            Self::DeviceRead { .. } => Reason::DeviceReadFailure,
            Self::Getrandom { .. } | Self::GetrandomShort { .. } => Reason::GetrandomFailure,
            Self::UnknownMode(_) => Reason::UnknownMode,
        }
    }
}
