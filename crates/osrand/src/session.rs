// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::sync::Arc;

use log::debug;

use crate::config::{Mode, ProviderContext};
use crate::device::RandomDevice;
use crate::error::OsRandError;
use crate::params::SessionParams;
use crate::source::ByteSource;

/// Lifecycle state of a [`Session`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum State {
    /// Created, or uninstantiated.
    #[default]
    Uninitialized,
    /// Instantiated.
    Ready,
}

impl State {
    /// Integer code exposed through the `state` parameter.
    pub fn code(self) -> i32 {
        match self {
            Self::Uninitialized => 0,
            Self::Ready => 1,
        }
    }
}

/// One generation context bound to a shared [`ProviderContext`].
///
/// # Caller contract
///
/// `generate` must only be called while the session is [`State::Ready`].
/// The state is bookkeeping exposed through [`Session::params`]; it is not
/// checked by `generate`.
///
/// A session is not synchronized. Sharing one between threads requires
/// external locking; the `lock`/`unlock` hooks do nothing.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use osrand::{Mode, ProviderContext, Reporter, Session};
///
/// let context = Arc::new(ProviderContext::new(Mode::Getrandom, Reporter::disabled()));
/// let mut session = Session::new(context);
///
/// session.instantiate(256, false, &[]).expect("Failed to instantiate");
///
/// let mut key = [0u8; 32];
/// session.generate(&mut key, 256, false).expect("Failed to generate");
/// ```
#[derive(Debug)]
pub struct Session {
    context: Arc<ProviderContext>,
    device: RandomDevice,
    state: State,
}

impl Session {
    /// Creates an uninitialized session with a closed device handle.
    pub fn new(context: Arc<ProviderContext>) -> Self {
        debug!("Creating new RAND context");

        Self {
            context,
            device: RandomDevice::new(),
            state: State::Uninitialized,
        }
    }

    /// Shared provider context.
    pub fn context(&self) -> &ProviderContext {
        &self.context
    }

    /// Mode inherited from the provider context.
    pub fn mode(&self) -> Mode {
        self.context.mode()
    }

    /// Current lifecycle state.
    pub fn state(&self) -> State {
        self.state
    }

    /// Cached device handle.
    pub fn device(&self) -> &RandomDevice {
        &self.device
    }

    /// Moves the session to [`State::Ready`]. Always succeeds; there is no
    /// pool to seed, so the inputs are ignored.
    pub fn instantiate(
        &mut self,
        _strength: u32,
        _prediction_resistance: bool,
        _personalization: &[u8],
    ) -> Result<(), OsRandError> {
        self.state = State::Ready;

        Ok(())
    }

    /// Closes the cached device and moves back to [`State::Uninitialized`].
    /// Always succeeds.
    pub fn uninstantiate(&mut self) -> Result<(), OsRandError> {
        self.device.release();
        self.state = State::Uninitialized;

        Ok(())
    }

    /// Fills `out` from the configured source.
    ///
    /// The OS sources have no tunable strength, so the hints are ignored.
    /// On failure exactly one error is raised to the provider reporter and
    /// the contents of `out` are unspecified.
    pub fn generate(
        &mut self,
        out: &mut [u8],
        _strength: u32,
        _prediction_resistance: bool,
    ) -> Result<(), OsRandError> {
        let result = ByteSource::for_mode(self.mode()).produce(&mut self.device, out);

        if let Err(err) = &result {
            self.context.reporter().raise(err);
        }

        result
    }

    /// No-op; the OS sources reseed themselves.
    pub fn reseed(
        &mut self,
        _prediction_resistance: bool,
        _entropy: &[u8],
        _additional: &[u8],
    ) -> Result<(), OsRandError> {
        Ok(())
    }

    /// Locking hook. Does nothing.
    pub fn enable_locking(&mut self) -> Result<(), OsRandError> {
        Ok(())
    }

    /// Locking hook. Does nothing.
    pub fn lock(&mut self) -> Result<(), OsRandError> {
        Ok(())
    }

    /// Locking hook. Does nothing.
    pub fn unlock(&mut self) {}

    /// Snapshot of the gettable parameters.
    pub fn params(&self) -> SessionParams {
        SessionParams::new(self.state)
    }

    /// Releases the device handle and drops the session.
    pub fn destroy(self) {
        drop(self);
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        self.device.release();
        debug!("Freeing RAND context");
    }
}
