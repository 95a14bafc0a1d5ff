// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Source selection, parsed once when the provider is loaded.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use log::debug;

use crate::error::OsRandError;
use crate::report::Reporter;

/// Configuration key selecting the [`Mode`].
pub const MODE_SETTING: &str = "osrand-mode";

/// Path of the LRNG entropy device.
pub const DEV_LRNG_PATH: &str = "/dev/lrng";

/// Path of the legacy blocking entropy device.
pub const DEV_RANDOM_PATH: &str = "/dev/random";

/// Which OS source a session draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    /// The `getrandom(2)` syscall.
    #[default]
    Getrandom,
    /// Reads from `/dev/lrng`.
    DevLrng,
    /// Reads from `/dev/random`.
    DevRandom,
}

impl Mode {
    /// Every mode, in code order.
    pub const ALL: [Mode; 3] = [Mode::Getrandom, Mode::DevLrng, Mode::DevRandom];

    /// Canonical setting value.
    pub fn name(self) -> &'static str {
        match self {
            Self::Getrandom => "getrandom",
            Self::DevLrng => "devlrng",
            Self::DevRandom => "devrandom",
        }
    }

    /// Numeric code of this mode.
    pub fn code(self) -> u32 {
        match self {
            Self::Getrandom => 0,
            Self::DevLrng => 1,
            Self::DevRandom => 2,
        }
    }

    /// Device backing this mode, if any.
    pub fn device_path(self) -> Option<&'static Path> {
        match self {
            Self::Getrandom => None,
            Self::DevLrng => Some(Path::new(DEV_LRNG_PATH)),
            Self::DevRandom => Some(Path::new(DEV_RANDOM_PATH)),
        }
    }

    /// Resolves a configuration value, falling back to [`Mode::Getrandom`]
    /// when the value is absent or not recognized.
    pub fn from_setting(value: Option<&str>) -> Self {
        let Some(value) = value else {
            return Self::default();
        };

        value.parse().unwrap_or_else(|_| {
            debug!("Unknown {MODE_SETTING} {value:?}, using {}", Self::default());
            Self::default()
        })
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Mode {
    type Err = OsRandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.name() == s)
            .ok_or_else(|| OsRandError::UnknownMode(s.to_owned()))
    }
}

impl TryFrom<u32> for Mode {
    type Error = OsRandError;

    fn try_from(code: u32) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.code() == code)
            .ok_or_else(|| OsRandError::UnknownMode(code.to_string()))
    }
}

/// Provider-scope state shared by every session.
///
/// Immutable once built; sessions hold it through an `Arc`.
#[derive(Debug, Clone, Default)]
pub struct ProviderContext {
    mode: Mode,
    reporter: Reporter,
}

impl ProviderContext {
    /// Creates a context with an explicit mode.
    pub fn new(mode: Mode, reporter: Reporter) -> Self {
        Self { mode, reporter }
    }

    /// Builds a context from host key/value settings.
    ///
    /// Only [`MODE_SETTING`] is consulted; the last occurrence wins.
    pub fn from_settings<'a, I>(settings: I, reporter: Reporter) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let value = settings
            .into_iter()
            .filter(|(key, _)| *key == MODE_SETTING)
            .map(|(_, value)| value)
            .last();

        Self::new(Mode::from_setting(value), reporter)
    }

    /// Selected mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Error reporter for this provider.
    pub fn reporter(&self) -> &Reporter {
        &self.reporter
    }
}
