// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Opt-in trace output configured from `OSRAND_PROVIDER_DEBUG`.
//!
//! The variable holds comma separated tokens:
//!
//! - `file:<path>` appends trace lines to `<path>` instead of stderr
//! - `level:<n>` sets verbosity (`1` = debug, `2` or more = trace)
//!
//! Any value enables tracing at level 1 or higher. Paths cannot contain `,`.

use std::env;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Once;

use log::LevelFilter;

/// Environment variable read by [`init`].
pub const DEBUG_ENV: &str = "OSRAND_PROVIDER_DEBUG";

static INIT: Once = Once::new();

/// Parsed form of [`DEBUG_ENV`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DebugSettings {
    /// Trace destination; stderr when `None`.
    pub file: Option<PathBuf>,
    /// Verbosity, at least 1.
    pub level: u32,
}

impl DebugSettings {
    /// Parses a [`DEBUG_ENV`] value.
    pub fn parse(value: &str) -> Self {
        let mut file = None;
        let mut level: u32 = 0;

        for token in value.split(',') {
            if let Some(path) = token.strip_prefix("file:") {
                file = Some(PathBuf::from(path));
            } else if let Some(n) = token.strip_prefix("level:") {
                level = n.trim().parse().unwrap_or(0);
            }
        }

        Self {
            file,
            level: level.max(1),
        }
    }

    /// Log filter for the configured verbosity.
    pub fn level_filter(&self) -> LevelFilter {
        match self.level {
            0 => LevelFilter::Off,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

/// Installs the trace logger if [`DEBUG_ENV`] is set.
///
/// Runs once per process. Does nothing if the variable is unset, if the
/// trace file cannot be opened, or if the host already installed a logger.
pub fn init() {
    INIT.call_once(|| {
        if let Some(value) = env::var_os(DEBUG_ENV) {
            install(&DebugSettings::parse(&value.to_string_lossy()));
        }
    });
}

fn install(settings: &DebugSettings) {
    let mut builder = env_logger::Builder::new();

    builder
        .filter_module(env!("CARGO_CRATE_NAME"), settings.level_filter())
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}:{}] {}: {}",
                record.file().unwrap_or("?"),
                record.line().unwrap_or(0),
                record.module_path().unwrap_or("?"),
                record.args()
            )
        });

    match &settings.file {
        Some(path) => match OpenOptions::new().append(true).create(true).open(path) {
            Ok(file) => {
                builder.target(env_logger::Target::Pipe(Box::new(file)));
            }
            Err(_) => return,
        },
        None => {
            builder.target(env_logger::Target::Stderr);
        }
    }

    let _ = builder.try_init();
}
