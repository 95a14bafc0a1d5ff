// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::collections::VecDeque;
use std::io;

/// Byte written into the buffer by [`SyscallStep::Fill`].
pub const SCRIPTED_FILL_BYTE: u8 = 0xA5;

/// Result of one scripted syscall.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyscallStep {
    /// Write up to `n` bytes (clamped to the buffer) and return the count.
    Fill(usize),
    /// Fail with `EINTR`.
    Interrupt,
    /// Fail with the given errno.
    Fail(i32),
}

/// Replays a script of syscall results into a retry loop.
///
/// Once the script is exhausted every call fills the whole buffer.
#[derive(Debug, Default)]
pub struct ScriptedSyscall {
    steps: VecDeque<SyscallStep>,
    calls: usize,
}

impl ScriptedSyscall {
    /// Creates a syscall that replays `steps` in order.
    pub fn new(steps: impl IntoIterator<Item = SyscallStep>) -> Self {
        Self {
            steps: steps.into_iter().collect(),
            calls: 0,
        }
    }

    /// Performs one call against `dest`.
    pub fn call(&mut self, dest: &mut [u8]) -> io::Result<usize> {
        self.calls += 1;

        match self.steps.pop_front() {
            Some(SyscallStep::Fill(n)) => {
                let n = n.min(dest.len());
                dest[..n].fill(SCRIPTED_FILL_BYTE);
                Ok(n)
            }
            Some(SyscallStep::Interrupt) => Err(io::Error::from(io::ErrorKind::Interrupted)),
            Some(SyscallStep::Fail(errno)) => Err(io::Error::from_raw_os_error(errno)),
            None => {
                dest.fill(SCRIPTED_FILL_BYTE);
                Ok(dest.len())
            }
        }
    }

    /// Number of calls performed so far.
    pub fn call_count(&self) -> usize {
        self.calls
    }

    /// Number of scripted steps not yet replayed.
    pub fn remaining(&self) -> usize {
        self.steps.len()
    }
}
