// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Test utilities for driving the retry loops and inspecting raised errors.

mod capture;
mod scripted_syscall;

pub use capture::capturing_context;
pub use scripted_syscall::{SCRIPTED_FILL_BYTE, ScriptedSyscall, SyscallStep};
