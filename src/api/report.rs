//! Human-readable change lines for `-v` / `-c`.
use crate::adapters::IdentityDb;
use crate::constants::PERM_BITS;
use crate::policy::Options;
use crate::types::{rwx_string, ChangeRecord};

/// Whether `record` should be printed under `opts`. Failed entries are never reported as changes.
#[must_use]
pub fn should_report(record: &ChangeRecord, opts: &Options) -> bool {
    if record.failed {
        return false;
    }
    opts.verbose || (opts.changes_only && record.changed())
}

/// Render one record, e.g.
/// `'f' ownership changed from alice:staff to root:root, permissions changed from rw-r--r-- (0644) to rwxr-xr-x (0755)`.
#[must_use]
pub fn render(record: &ChangeRecord, db: &dyn IdentityDb) -> String {
    let path = record.path.display();
    let owner = record.ownership_changed();
    let perms = record.permissions_changed();

    if !owner && !perms {
        let mut line = format!(
            "ownership and permissions of '{path}' retained as {}",
            owner_pair(db, record.new_uid, record.new_gid)
        );
        if record.perms_requested {
            line.push_str(&format!(" with permissions {}", mode_pair(record.new_mode)));
        }
        return line;
    }

    let mut line = format!("'{path}' ");
    if owner {
        line.push_str(&format!(
            "ownership changed from {} to {}",
            owner_pair(db, record.old_uid, record.old_gid),
            owner_pair(db, record.new_uid, record.new_gid)
        ));
        if perms {
            line.push_str(", ");
        }
    }
    if perms {
        line.push_str(&format!(
            "permissions changed from {} to {}",
            mode_pair(record.old_mode),
            mode_pair(record.new_mode)
        ));
    }
    line
}

fn owner_pair(db: &dyn IdentityDb, uid: u32, gid: u32) -> String {
    let user = db.user_name(uid).unwrap_or_else(|| uid.to_string());
    let group = db.group_name(gid).unwrap_or_else(|| gid.to_string());
    format!("{user}:{group}")
}

fn mode_pair(mode: u32) -> String {
    format!("{} ({:04o})", rwx_string(mode), mode & PERM_BITS)
}
