// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # osrand
//!
//! Random bytes straight from the operating system, behind a RAND provider
//! interface.
//!
//! `osrand` does not generate or condition entropy. Each [`Session`] hands the
//! request to one OS source selected by the provider configuration:
//!
//! - [`Mode::Getrandom`]: the `getrandom(2)` syscall (default)
//! - [`Mode::DevLrng`]: full reads from `/dev/lrng`
//! - [`Mode::DevRandom`]: full reads from `/dev/random`
//!
//! Device-backed sessions keep their descriptor open between calls and
//! re-validate its identity (device, inode, file type, rdev) before every
//! reuse, reopening transparently if the node behind the path changed.
//!
//! ## Core Types
//!
//! - [`Provider`]: loads configuration and exposes the algorithm table
//! - [`ProviderContext`]: shared, immutable mode and error reporter
//! - [`Session`]: instantiate / generate / uninstantiate lifecycle
//! - [`RandomDevice`]: cached, identity-checked device handle
//!
//! ## Traits
//!
//! - [`RandOperations`]: the fixed named-operation set a host binds to
//! - [`ErrorSink`]: destination of raised error records
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//! use osrand::{ErrorQueue, Provider, Reporter};
//!
//! let errors = Arc::new(ErrorQueue::new());
//! let provider = Provider::load([("osrand-mode", "getrandom")], Reporter::new(errors.clone()));
//!
//! let mut session = provider.new_session();
//! session.instantiate(256, false, &[]).expect("Failed to instantiate");
//!
//! let mut key = [0u8; 32];
//! session.generate(&mut key, 256, false).expect("Failed to generate");
//! assert!(errors.is_empty());
//! ```
//!
//! ## Platform Support
//!
//! Unix only. `getrandom(2)` is called directly on Linux/Android and through
//! the `getrandom` crate elsewhere.

#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

#[cfg(test)]
mod tests;

mod config;
mod device;
mod error;
mod provider;
mod report;
mod session;
mod source;
mod support;
mod traits;

pub mod diagnostics;
pub mod params;

pub use config::{DEV_LRNG_PATH, DEV_RANDOM_PATH, MODE_SETTING, Mode, ProviderContext};
pub use device::{DeviceIdentity, RandomDevice};
pub use error::{OsRandError, Reason};
pub use provider::{
    Algorithm, OperationId, PROVIDER_NAME, PROVIDER_VERSION, Provider, ProviderParams,
};
pub use report::{ErrorQueue, ErrorRecord, Reporter};
pub use session::{Session, State};
pub use source::ByteSource;
pub use traits::{ErrorSink, RandOperations, Status};

#[cfg(any(test, feature = "test-utils"))]
pub use support::test_utils;
