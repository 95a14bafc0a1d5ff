// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::params::ParamValue;
use crate::report::ErrorRecord;

/// Destination for raised error records.
///
/// Implementations must not fail or panic: records are pushed from failure
/// paths that have no way to report a second error.
pub trait ErrorSink: Send + Sync {
    /// Appends a record to the caller-visible error queue.
    fn push(&self, record: ErrorRecord);
}

/// Status returned to a host framework by the named RAND operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum Status {
    /// Operation failed.
    Err = 0,
    /// Operation succeeded.
    Ok = 1,
}

impl Status {
    /// Returns `true` for [`Status::Ok`].
    pub fn is_ok(self) -> bool {
        self == Self::Ok
    }
}

impl<T, E> From<Result<T, E>> for Status {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(_) => Self::Ok,
            Err(_) => Self::Err,
        }
    }
}

/// Fixed set of named operations a host binds once at load time.
///
/// This is the only surface a registration adapter needs: every call
/// reports a [`Status`], errors having already been raised to the
/// provider's [`ErrorSink`].
pub trait RandOperations: Send {
    /// Moves the context to the ready state.
    fn instantiate(
        &mut self,
        strength: u32,
        prediction_resistance: bool,
        personalization: &[u8],
    ) -> Status;

    /// Releases cached resources and moves the context back to uninitialized.
    fn uninstantiate(&mut self) -> Status;

    /// Fills `out` with random bytes.
    fn generate(&mut self, out: &mut [u8], strength: u32, prediction_resistance: bool) -> Status;

    /// Accepts (and ignores) reseed material.
    fn reseed(&mut self, prediction_resistance: bool, entropy: &[u8], additional: &[u8]) -> Status;

    /// Hook for the host locking protocol.
    fn enable_locking(&mut self) -> Status;

    /// Hook for the host locking protocol.
    fn lock(&mut self) -> Status;

    /// Hook for the host locking protocol.
    fn unlock(&mut self);

    /// Looks up a gettable context parameter by name.
    fn get_ctx_param(&self, name: &str) -> Option<ParamValue>;

    /// Names of the gettable context parameters.
    fn gettable_ctx_params(&self) -> &'static [&'static str];

    /// Names of the settable context parameters.
    fn settable_ctx_params(&self) -> &'static [&'static str];
}
