use std::os::unix::fs::{symlink, MetadataExt};
use std::path::Path;

use chperm::policy::{Options, SymlinkPolicy};
use chperm::types::ResolvedOwnership;
use chperm::Request;

use crate::common::{api, write_file};

/// A group the caller belongs to that differs from `current`; any user may chgrp to it.
fn other_member_group(current: u32) -> Option<u32> {
    nix::unistd::getgroups()
        .ok()?
        .into_iter()
        .map(|g| g.as_raw())
        .find(|&g| g != current)
}

fn group_request(gid: u32) -> Request {
    Request {
        ownership: ResolvedOwnership { uid: None, gid: Some(gid) },
        ..Request::default()
    }
}

fn link_pair(dir: &Path) -> (std::path::PathBuf, std::path::PathBuf) {
    let target = write_file(&dir.join("t"), 0o644);
    let link = dir.join("l");
    symlink(&target, &link).unwrap();
    (target, link)
}

#[test]
fn no_dereference_regroups_the_link_only() {
    let td = tempfile::tempdir().unwrap();
    let (target, link) = link_pair(td.path());
    let before = std::fs::metadata(&target).unwrap().gid();
    let Some(gid) = other_member_group(before) else {
        eprintln!("SKIP: caller belongs to a single group");
        return;
    };

    let opts = Options {
        symlinks: SymlinkPolicy::NoDereference,
        ..Options::default()
    };
    let (api, _f, _a) = api(opts);
    let report = api.run(&group_request(gid), &[link.clone()], &mut Vec::new());
    assert!(report.is_success(), "{:?}", report.errors);
    assert_eq!(report.changed, 1);
    assert_eq!(std::fs::symlink_metadata(&link).unwrap().gid(), gid);
    assert_eq!(std::fs::metadata(&target).unwrap().gid(), before);
}

#[test]
fn dereference_regroups_the_target() {
    let td = tempfile::tempdir().unwrap();
    let (target, link) = link_pair(td.path());
    let before = std::fs::symlink_metadata(&link).unwrap().gid();
    let Some(gid) = other_member_group(before) else {
        eprintln!("SKIP: caller belongs to a single group");
        return;
    };

    let opts = Options {
        symlinks: SymlinkPolicy::Dereference,
        ..Options::default()
    };
    let (api, _f, _a) = api(opts);
    let report = api.run(&group_request(gid), &[link.clone()], &mut Vec::new());
    assert!(report.is_success(), "{:?}", report.errors);
    assert_eq!(std::fs::metadata(&target).unwrap().gid(), gid);
    assert_eq!(std::fs::symlink_metadata(&link).unwrap().gid(), before);
}
