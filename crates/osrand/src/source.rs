// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::io::{self, Read};
use std::path::Path;

use log::debug;

use crate::config::Mode;
use crate::device::RandomDevice;
use crate::error::OsRandError;

/// One OS call that writes up to `dest.len()` bytes.
pub(crate) type FillFn<'a> = dyn FnMut(&mut [u8]) -> io::Result<usize> + 'a;

/// Strategy used to obtain random bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteSource {
    /// The `getrandom(2)` syscall.
    Getrandom,
    /// A full read from an entropy device.
    Device(&'static Path),
}

impl ByteSource {
    /// Strategy selected by `mode`.
    pub fn for_mode(mode: Mode) -> Self {
        match mode.device_path() {
            Some(path) => Self::Device(path),
            None => Self::Getrandom,
        }
    }

    /// Fills `dest` completely, or fails.
    ///
    /// `device` is only touched by device-backed strategies and stays cached
    /// after the call.
    pub fn produce(self, device: &mut RandomDevice, dest: &mut [u8]) -> Result<(), OsRandError> {
        match self {
            Self::Getrandom => fill_from_getrandom(dest),
            Self::Device(path) => fill_from_device(device, path, dest),
        }
    }
}

pub(crate) fn fill_from_getrandom(dest: &mut [u8]) -> Result<(), OsRandError> {
    getrandom_with(&mut sys_getrandom, dest)
}

/// Calls `fetch` until `dest` is full.
///
/// Interrupted calls are retried. A call that writes nothing fails with the
/// byte count reached so far.
pub(crate) fn getrandom_with(fetch: &mut FillFn<'_>, dest: &mut [u8]) -> Result<(), OsRandError> {
    let requested = dest.len();
    let mut received = 0;

    while received < requested {
        match fetch(&mut dest[received..]) {
            Ok(0) => return Err(OsRandError::GetrandomShort { requested, received }),
            Ok(n) => received += n.min(requested - received),
            Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
            Err(source) => return Err(OsRandError::Getrandom { requested, source }),
        }
    }

    debug!("Generated {requested} bytes using getrandom");

    Ok(())
}

pub(crate) fn fill_from_device(
    device: &mut RandomDevice,
    path: &Path,
    dest: &mut [u8],
) -> Result<(), OsRandError> {
    if dest.is_empty() {
        return Ok(());
    }

    let mut file = device
        .acquire(path)
        .map_err(|source| OsRandError::DeviceOpen {
            path: path.to_path_buf(),
            source,
        })?;

    read_exact_with(&mut |buf: &mut [u8]| file.read(buf), path, dest)
}

/// Calls `read` until `dest` is full.
///
/// Interrupted reads are retried without progress. End of file or any other
/// error fails the whole read.
pub(crate) fn read_exact_with(
    read: &mut FillFn<'_>,
    path: &Path,
    dest: &mut [u8],
) -> Result<(), OsRandError> {
    let mut total = 0;

    while total < dest.len() {
        match read(&mut dest[total..]) {
            Ok(0) => {
                return Err(OsRandError::DeviceRead {
                    path: path.to_path_buf(),
                    source: io::ErrorKind::UnexpectedEof.into(),
                });
            }
            Ok(n) => total += n.min(dest.len() - total),
            Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
            Err(source) => {
                return Err(OsRandError::DeviceRead {
                    path: path.to_path_buf(),
                    source,
                });
            }
        }
    }

    debug!("Generated {total} bytes from {} device", path.display());

    Ok(())
}

#[cfg(any(target_os = "linux", target_os = "android"))]
fn sys_getrandom(dest: &mut [u8]) -> io::Result<usize> {
    // SAFETY: `dest` is a valid, writable buffer of `dest.len()` bytes.
    let ret = unsafe { libc::getrandom(dest.as_mut_ptr().cast::<libc::c_void>(), dest.len(), 0) };

    if ret < 0 {
        Err(io::Error::last_os_error())
    } else {
        Ok(ret as usize)
    }
}

#[cfg(not(any(target_os = "linux", target_os = "android")))]
fn sys_getrandom(dest: &mut [u8]) -> io::Result<usize> {
    getrandom::fill(dest).map_err(|err| match err.raw_os_error() {
        Some(code) => io::Error::from_raw_os_error(code),
        None => io::Error::other(err.to_string()),
    })?;

    Ok(dest.len())
}
