//! Single-entry mutation: read state, compute targets, chown then chmod.
use std::path::Path;

use super::Request;
use crate::constants::PERM_BITS;
use crate::fs::{change_mode, change_owner, read_state, EntryKind};
use crate::policy::Options;
use crate::types::{ChangeRecord, Error, Operation};

/// Result of mutating one entry. `record` is absent only when the pre-state could not be read.
#[derive(Debug)]
pub(crate) struct Outcome {
    pub record: Option<ChangeRecord>,
    pub error: Option<Error>,
}

pub(crate) fn mutate_entry(path: &Path, req: &Request, opts: &Options) -> Outcome {
    let follow = opts.symlinks.follows_links();
    let before = match read_state(path, follow) {
        Ok(state) => state,
        Err(source) => {
            return Outcome {
                record: None,
                error: Some(Error::PathUnavailable {
                    path: path.to_path_buf(),
                    source,
                }),
            }
        }
    };

    // chmod always dereferences, so a link's mode baseline is its target's.
    let baseline_mode = if before.kind == EntryKind::Symlink && opts.apply_permissions {
        read_state(path, true).map_or(before.mode, |target| target.mode)
    } else {
        before.mode
    };

    let mut record = ChangeRecord {
        path: path.to_path_buf(),
        old_uid: before.uid,
        new_uid: before.uid,
        old_gid: before.gid,
        new_gid: before.gid,
        old_mode: baseline_mode,
        new_mode: baseline_mode,
        perms_requested: opts.apply_permissions,
        failed: false,
    };

    let new_uid = req.ownership.uid_or(before.uid);
    let new_gid = req.ownership.gid_or(before.gid);
    let owner_changes = new_uid != before.uid || new_gid != before.gid;
    if owner_changes {
        if let Err(source) = change_owner(path, req.ownership.uid, req.ownership.gid, follow) {
            return failed(record, path, Operation::Ownership, source);
        }
        record.new_uid = new_uid;
        record.new_gid = new_gid;
    }

    if opts.apply_permissions {
        let target_mode = req.mode.apply_to(baseline_mode);
        // chown may have dropped setuid/setgid, so re-apply after any ownership change
        if owner_changes || (target_mode & PERM_BITS) != (baseline_mode & PERM_BITS) {
            if let Err(source) = change_mode(path, target_mode) {
                return failed(record, path, Operation::Permissions, source);
            }
        }
        record.new_mode = target_mode;
    }

    log::debug!(
        "{}: uid {}->{} gid {}->{} mode {:o}->{:o}",
        path.display(),
        record.old_uid,
        record.new_uid,
        record.old_gid,
        record.new_gid,
        record.old_mode,
        record.new_mode
    );
    Outcome {
        record: Some(record),
        error: None,
    }
}

fn failed(mut record: ChangeRecord, path: &Path, op: Operation, source: std::io::Error) -> Outcome {
    record.failed = true;
    Outcome {
        record: Some(record),
        error: Some(Error::MutationFailed {
            path: path.to_path_buf(),
            op,
            source,
        }),
    }
}
