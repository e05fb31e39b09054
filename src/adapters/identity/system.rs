// Default IdentityDb implementation backed by the passwd/group databases (via NSS).

use nix::unistd::{Gid, Group, Uid, User};

use crate::adapters::IdentityDb;

#[derive(Copy, Clone, Debug, Default)]
pub struct SystemIdentityDb;

impl IdentityDb for SystemIdentityDb {
    fn lookup_user(&self, name: &str) -> Option<u32> {
        match User::from_name(name) {
            Ok(found) => found.map(|u| u.uid.as_raw()),
            Err(e) => {
                log::debug!("user lookup for '{name}' failed: {e}");
                None
            }
        }
    }

    fn lookup_group(&self, name: &str) -> Option<u32> {
        match Group::from_name(name) {
            Ok(found) => found.map(|g| g.gid.as_raw()),
            Err(e) => {
                log::debug!("group lookup for '{name}' failed: {e}");
                None
            }
        }
    }

    fn user_name(&self, uid: u32) -> Option<String> {
        User::from_uid(Uid::from_raw(uid)).ok().flatten().map(|u| u.name)
    }

    fn group_name(&self, gid: u32) -> Option<String> {
        Group::from_gid(Gid::from_raw(gid)).ok().flatten().map(|g| g.name)
    }
}
