//! Filesystem metadata helpers used by the mutator and the walker.
//!
//! These probes are non-mutating. `follow` selects stat (true) or lstat (false) semantics.
use std::os::unix::fs::MetadataExt;
use std::path::Path;

/// Kind of node found at a path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Dir,
    Symlink,
    Other,
}

/// Ownership and mode snapshot of a single entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EntryState {
    pub uid: u32,
    pub gid: u32,
    /// Full `st_mode`, file-type bits included.
    pub mode: u32,
    pub kind: EntryKind,
    pub dev: u64,
    pub ino: u64,
}

/// Read the current state of `path`.
///
/// # Errors
///
/// Returns the underlying IO error when the path cannot be stat'ed (missing, permission denied,
/// or a dangling link when `follow` is set).
pub fn read_state(path: &Path, follow: bool) -> std::io::Result<EntryState> {
    let md = if follow {
        std::fs::metadata(path)?
    } else {
        std::fs::symlink_metadata(path)?
    };
    let ft = md.file_type();
    let kind = if ft.is_symlink() {
        EntryKind::Symlink
    } else if ft.is_dir() {
        EntryKind::Dir
    } else if ft.is_file() {
        EntryKind::File
    } else {
        EntryKind::Other
    };
    Ok(EntryState {
        uid: md.uid(),
        gid: md.gid(),
        mode: md.mode(),
        kind,
        dev: md.dev(),
        ino: md.ino(),
    })
}
