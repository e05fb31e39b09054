use std::path::PathBuf;

use serde::Serialize;

use crate::constants::PERM_BITS;

/// Before/after state of one visited entry.
///
/// Built from the entry's metadata right before mutation and finalized right after. When a
/// syscall fails the `new_*` fields describe what was actually applied, not what was requested.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ChangeRecord {
    pub path: PathBuf,
    pub old_uid: u32,
    pub new_uid: u32,
    pub old_gid: u32,
    pub new_gid: u32,
    pub old_mode: u32,
    pub new_mode: u32,
    /// A mode token was supplied, so permission changes count as changes.
    pub perms_requested: bool,
    pub failed: bool,
}

impl ChangeRecord {
    #[must_use]
    pub fn ownership_changed(&self) -> bool {
        self.old_uid != self.new_uid || self.old_gid != self.new_gid
    }

    #[must_use]
    pub fn permissions_changed(&self) -> bool {
        self.perms_requested && (self.old_mode & PERM_BITS) != (self.new_mode & PERM_BITS)
    }

    #[must_use]
    pub fn changed(&self) -> bool {
        self.ownership_changed() || self.permissions_changed()
    }
}

/// Aggregate outcome of one invocation over all roots.
///
/// Records are reported and dropped as the walk goes; only counters and failures are kept.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunReport {
    /// Entries whose metadata could be read.
    pub visited: usize,
    /// Entries that actually changed.
    pub changed: usize,
    /// Human-readable per-path failures in the order they happened.
    pub errors: Vec<String>,
}

impl RunReport {
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.errors.is_empty()
    }

    /// Process exit status: 0 when every entry was processed cleanly, 1 otherwise.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        i32::from(!self.is_success())
    }

    pub(crate) fn tally(&mut self, record: &ChangeRecord) {
        self.visited += 1;
        if !record.failed && record.changed() {
            self.changed += 1;
        }
    }

    pub(crate) fn merge(&mut self, other: RunReport) {
        self.visited += other.visited;
        self.changed += other.changed;
        self.errors.extend(other.errors);
    }
}
