use std::os::unix::fs::{symlink, MetadataExt};

use chperm::policy::{Options, SymlinkPolicy};
use chperm::types::ResolvedOwnership;
use chperm::Request;

use crate::common::{api, is_root, perm_bits, write_file};

fn owner_request(uid: u32, gid: Option<u32>) -> Request {
    Request {
        ownership: ResolvedOwnership { uid: Some(uid), gid },
        ..Request::default()
    }
}

#[test]
fn no_dereference_changes_the_link_not_the_target() {
    if !is_root() {
        eprintln!("SKIP: changing ownership needs root");
        return;
    }
    let td = tempfile::tempdir().unwrap();
    let target = write_file(&td.path().join("t"), 0o644);
    let link = td.path().join("l");
    symlink(&target, &link).unwrap();

    let opts = Options {
        symlinks: SymlinkPolicy::NoDereference,
        ..Options::default()
    };
    let (api, _f, _a) = api(opts);
    let report = api.run(&owner_request(4242, None), &[link.clone()], &mut Vec::new());
    assert!(report.is_success(), "{:?}", report.errors);
    assert_eq!(std::fs::symlink_metadata(&link).unwrap().uid(), 4242);
    assert_eq!(std::fs::metadata(&target).unwrap().uid(), 0);
}

#[test]
fn dereference_changes_the_target() {
    if !is_root() {
        eprintln!("SKIP: changing ownership needs root");
        return;
    }
    let td = tempfile::tempdir().unwrap();
    let target = write_file(&td.path().join("t"), 0o644);
    let link = td.path().join("l");
    symlink(&target, &link).unwrap();

    let opts = Options {
        symlinks: SymlinkPolicy::Dereference,
        ..Options::default()
    };
    let (api, _f, _a) = api(opts);
    let report = api.run(&owner_request(4242, Some(4343)), &[link.clone()], &mut Vec::new());
    assert!(report.is_success(), "{:?}", report.errors);
    let md = std::fs::metadata(&target).unwrap();
    assert_eq!((md.uid(), md.gid()), (4242, 4343));
    assert_eq!(std::fs::symlink_metadata(&link).unwrap().uid(), 0);
}

#[test]
fn setuid_is_restored_after_chown() {
    if !is_root() {
        eprintln!("SKIP: changing ownership needs root");
        return;
    }
    let td = tempfile::tempdir().unwrap();
    let f = write_file(&td.path().join("f"), 0o755);
    let opts = Options {
        apply_permissions: true,
        ..Options::default()
    };
    let (api, _f, _a) = api(opts);
    let req = Request {
        ownership: ResolvedOwnership {
            uid: Some(4242),
            gid: None,
        },
        mode: chperm::types::ModeSpec::parse("4755").unwrap(),
    };
    let report = api.run(&req, &[f.clone()], &mut Vec::new());
    assert!(report.is_success(), "{:?}", report.errors);
    assert_eq!(perm_bits(&f), 0o4755);
    assert_eq!(std::fs::metadata(&f).unwrap().uid(), 4242);
}
