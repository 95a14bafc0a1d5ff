// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Cached entropy device handle with identity re-validation.
//!
//! A handle opened on an entropy device is kept across `generate` calls, but
//! is only reused while both the descriptor and the device path still report
//! the identity recorded at open time (`st_dev`, `st_ino`, `st_rdev` and the
//! file type bits of `st_mode`). A device node that was deleted, recreated or
//! swapped behind the path is detected and the handle reopened.

use std::fs::{self, File, Metadata};
use std::io;
use std::os::fd::{AsRawFd, RawFd};
use std::os::unix::fs::MetadataExt;
use std::path::{Path, PathBuf};

use log::{debug, trace};

/// `S_IRWXU | S_IRWXG | S_IRWXO`
const PERMISSION_BITS: u32 = 0o777;

/// Identity of an open device, as reported by `fstat(2)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DeviceIdentity {
    /// Device containing the node.
    pub dev: u64,
    /// Inode number.
    pub ino: u64,
    /// Mode bits with permissions masked out.
    pub mode: u32,
    /// Device number of the special file.
    pub rdev: u64,
}

impl DeviceIdentity {
    fn from_metadata(metadata: &Metadata) -> Self {
        Self {
            dev: metadata.dev(),
            ino: metadata.ino(),
            mode: metadata.mode() & !PERMISSION_BITS,
            rdev: metadata.rdev(),
        }
    }

    /// Queries the identity of an open file.
    pub fn of_file(file: &File) -> io::Result<Self> {
        file.metadata().map(|metadata| Self::from_metadata(&metadata))
    }

    /// Queries the identity of whatever `path` currently resolves to.
    pub fn of_path(path: &Path) -> io::Result<Self> {
        fs::metadata(path).map(|metadata| Self::from_metadata(&metadata))
    }
}

#[derive(Debug)]
struct OpenDevice {
    file: File,
    path: PathBuf,
    identity: DeviceIdentity,
}

impl OpenDevice {
    fn open(path: &Path) -> io::Result<Self> {
        let file = File::open(path)?;

        // Dropping `file` on error closes the new descriptor.
        let identity = DeviceIdentity::of_file(&file).inspect_err(|_| {
            debug!("New random device fd {} stat failed", file.as_raw_fd());
        })?;

        debug!("Opened random device fd {}", file.as_raw_fd());

        Ok(Self {
            file,
            path: path.to_path_buf(),
            identity,
        })
    }

    fn is_valid(&self) -> bool {
        let matches = |current: io::Result<DeviceIdentity>| {
            current.is_ok_and(|current| current == self.identity)
        };

        matches(DeviceIdentity::of_file(&self.file)) && matches(DeviceIdentity::of_path(&self.path))
    }
}

/// At most one open entropy device, closed when dropped.
#[derive(Debug, Default)]
pub struct RandomDevice {
    open: Option<OpenDevice>,
}

impl RandomDevice {
    /// Creates a closed handle.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if a descriptor is currently held, valid or not.
    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    /// Raw descriptor of the held device.
    pub fn raw_fd(&self) -> Option<RawFd> {
        self.open.as_ref().map(|device| device.file.as_raw_fd())
    }

    /// Identity recorded when the held device was opened.
    pub fn identity(&self) -> Option<DeviceIdentity> {
        self.open.as_ref().map(|device| device.identity)
    }

    /// Path the held device was opened from.
    pub fn path(&self) -> Option<&Path> {
        self.open.as_ref().map(|device| device.path.as_path())
    }

    /// Returns `true` iff a device is held and its descriptor and path both
    /// still match the recorded identity.
    pub fn validate(&self) -> bool {
        self.open.as_ref().is_some_and(OpenDevice::is_valid)
    }

    /// Returns the held device if it is still valid for `path`, otherwise
    /// opens `path` read-only and caches it.
    ///
    /// On error the handle is left closed.
    pub fn acquire(&mut self, path: &Path) -> io::Result<&File> {
        let device = match self.open.take() {
            Some(device) if device.path == path && device.is_valid() => {
                trace!("Reusing random device fd {}", device.file.as_raw_fd());
                device
            }
            stale => {
                if let Some(stale) = stale {
                    debug!("Dropping stale random device fd {}", stale.file.as_raw_fd());
                }
                OpenDevice::open(path)?
            }
        };

        Ok(&self.open.insert(device).file)
    }

    /// Closes the held device, if any. Safe to call repeatedly.
    pub fn release(&mut self) {
        if let Some(device) = self.open.take() {
            debug!("Closing random device fd {}", device.file.as_raw_fd());
        }
    }
}
