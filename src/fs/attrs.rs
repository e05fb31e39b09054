//! Ownership and permission syscalls.
//!
//! Ownership goes through `nix::unistd::fchownat` and honors the caller's symlink choice via
//! `AT_SYMLINK_NOFOLLOW`. Permissions go through `rustix` and always dereference, since Linux has
//! no meaningful mode for a symlink itself.
use std::path::Path;

use nix::fcntl::AtFlags as NixAtFlags;
use nix::unistd::{fchownat, Gid, Uid};
use rustix::fs::{chmodat, AtFlags, Mode, RawMode, CWD};
use rustix::io::Errno;

fn errno_to_io(e: Errno) -> std::io::Error {
    std::io::Error::from_raw_os_error(e.raw_os_error())
}

/// Change owner and/or group of `path`. `None` leaves that id untouched.
///
/// # Errors
///
/// Returns the IO error reported by `fchownat(2)`.
pub fn change_owner(
    path: &Path,
    uid: Option<u32>,
    gid: Option<u32>,
    follow: bool,
) -> std::io::Result<()> {
    let flags = if follow {
        NixAtFlags::empty()
    } else {
        NixAtFlags::AT_SYMLINK_NOFOLLOW
    };
    // `None` as dirfd resolves relative paths against the current directory.
    fchownat(
        None,
        path,
        uid.map(Uid::from_raw),
        gid.map(Gid::from_raw),
        flags,
    )
    .map_err(std::io::Error::from)
}

/// Set the 12 permission bits of `path` (following symlinks) from `mode`.
///
/// # Errors
///
/// Returns the IO error reported by `fchmodat(2)`.
pub fn change_mode(path: &Path, mode: u32) -> std::io::Result<()> {
    let bits = Mode::from_raw_mode((mode & crate::constants::PERM_BITS) as RawMode);
    chmodat(CWD, path, bits, AtFlags::empty()).map_err(errno_to_io)
}
