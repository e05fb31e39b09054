use std::path::PathBuf;

use chperm::policy::Options;

use crate::common::{api, mode_request, perm_bits, small_tree};

#[test]
fn parent_is_visited_before_sorted_children() {
    let td = tempfile::tempdir().unwrap();
    let root = small_tree(td.path());
    let opts = Options {
        recursive: true,
        apply_permissions: true,
        ..Options::default()
    };
    let (api, facts, _audit) = api(opts);

    let mut out = Vec::new();
    let report = api.run(&mode_request("u+r"), &[root.clone()], &mut out);
    assert!(report.is_success(), "errors: {:?}", report.errors);
    assert_eq!(report.visited, 4);

    let visited: Vec<PathBuf> = facts.visited_paths();
    assert_eq!(
        visited,
        vec![root.clone(), root.join("a"), root.join("b"), root.join("b/c")]
    );
}

#[test]
fn symbolic_mode_is_relative_to_each_entry() {
    let td = tempfile::tempdir().unwrap();
    let root = small_tree(td.path());
    let opts = Options {
        recursive: true,
        apply_permissions: true,
        ..Options::default()
    };
    let (api, _facts, _audit) = api(opts);

    let mut out = Vec::new();
    let report = api.run(&mode_request("u+x"), &[root.clone()], &mut out);
    assert!(report.is_success());
    assert_eq!(perm_bits(&root.join("a")), 0o700);
    assert_eq!(perm_bits(&root.join("b/c")), 0o740);
}

#[test]
fn without_recursion_only_the_root_is_touched() {
    let td = tempfile::tempdir().unwrap();
    let root = small_tree(td.path());
    let opts = Options {
        apply_permissions: true,
        ..Options::default()
    };
    let (api, _facts, _audit) = api(opts);

    let mut out = Vec::new();
    let report = api.run(&mode_request("700"), &[root.clone()], &mut out);
    assert!(report.is_success());
    assert_eq!(report.visited, 1);
    assert_eq!(report.changed, 1);
    assert_eq!(perm_bits(&root), 0o700);
    assert_eq!(perm_bits(&root.join("a")), 0o600);
}

#[test]
fn verbose_lists_every_entry_changes_lists_only_changed() {
    let td = tempfile::tempdir().unwrap();
    let root = small_tree(td.path());

    let verbose = Options {
        recursive: true,
        verbose: true,
        apply_permissions: true,
        ..Options::default()
    };
    let (api_v, _f, _a) = api(verbose);
    let mut out = Vec::new();
    api_v.run(&mode_request("g+r"), &[root.clone()], &mut out);
    let text = String::from_utf8(out).unwrap();
    assert_eq!(text.lines().count(), 4, "{text}");

    let changes = Options {
        recursive: true,
        changes_only: true,
        apply_permissions: true,
        ..Options::default()
    };
    let (api_c, _f, _a) = api(changes);
    let mut out = Vec::new();
    api_c.run(&mode_request("o+r"), &[root.join("a")], &mut out);
    let text = String::from_utf8(out).unwrap();
    assert_eq!(text.lines().count(), 1, "{text}");
    assert!(text.contains("permissions changed from rw-r----- (0640) to rw-r--r-- (0644)"), "{text}");
}
