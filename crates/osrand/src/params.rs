// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Queryable session parameters.

use crate::session::State;

/// Largest single request, in bytes.
pub const MAX_REQUEST: &str = "max_request";
/// Nominal security strength, in bits.
pub const STRENGTH: &str = "strength";
/// Lifecycle state code.
pub const STATE: &str = "state";

/// Value of [`MAX_REQUEST`].
pub const MAX_REQUEST_BYTES: usize = isize::MAX as usize;

/// Value of [`STRENGTH`].
pub const NOMINAL_STRENGTH: u32 = 256;

/// Names a host may query.
pub const GETTABLE: &[&str] = &[MAX_REQUEST, STRENGTH, STATE];

/// Names a host may set. Configuration is fixed at load time.
pub const SETTABLE: &[&str] = &[];

/// A typed parameter value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamValue {
    /// A `size_t` value.
    Size(usize),
    /// An unsigned integer.
    UInt(u32),
    /// A signed integer.
    Int(i32),
}

/// Snapshot of every gettable parameter of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionParams {
    /// See [`MAX_REQUEST`].
    pub max_request: usize,
    /// See [`STRENGTH`].
    pub strength: u32,
    /// See [`STATE`].
    pub state: State,
}

impl SessionParams {
    pub(crate) fn new(state: State) -> Self {
        Self {
            max_request: MAX_REQUEST_BYTES,
            strength: NOMINAL_STRENGTH,
            state,
        }
    }

    /// Looks up a parameter by name.
    pub fn get(&self, name: &str) -> Option<ParamValue> {
        match name {
            MAX_REQUEST => Some(ParamValue::Size(self.max_request)),
            STRENGTH => Some(ParamValue::UInt(self.strength)),
            STATE => Some(ParamValue::Int(self.state.code())),
            _ => None,
        }
    }
}
