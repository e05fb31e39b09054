use chperm::policy::Options;

use crate::common::{api, is_root, mode_request, perm_bits, set_mode, small_tree};

#[test]
fn unreadable_directory_is_reported_and_walk_continues() {
    if is_root() {
        eprintln!("SKIP: root can read any directory");
        return;
    }
    let td = tempfile::tempdir().unwrap();
    let root = small_tree(td.path());
    std::fs::create_dir(root.join("d")).unwrap();
    crate::common::write_file(&root.join("d/z"), 0o600);
    set_mode(&root.join("b"), 0o000);

    let opts = Options {
        recursive: true,
        apply_permissions: true,
        ..Options::default()
    };
    let (api, facts, audit) = api(opts);
    let report = api.run(&mode_request("o+r"), &[root.clone()], &mut Vec::new());

    // the chmod of b itself (o+r) succeeds, listing its children does not
    set_mode(&root.join("b"), 0o700);
    assert_eq!(report.exit_code(), 1);
    assert_eq!(report.errors.len(), 1);
    assert!(report.errors[0].contains("cannot read directory"), "{:?}", report.errors);
    assert_eq!(audit.lines.lock().unwrap().len(), 1);
    assert_eq!(facts.events_named("walk.error").len(), 1);

    // siblings after the unreadable directory were still processed
    assert_eq!(perm_bits(&root.join("d/z")), 0o604);
    assert_eq!(perm_bits(&root.join("b/c")), 0o640);
}
