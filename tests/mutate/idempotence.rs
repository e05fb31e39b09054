use chperm::policy::Options;

use crate::common::{api, mode_request, perm_bits, write_file};

#[test]
fn second_run_reports_nothing_under_changes() {
    let td = tempfile::tempdir().unwrap();
    let f = write_file(&td.path().join("f"), 0o600);
    let opts = Options {
        changes_only: true,
        apply_permissions: true,
        ..Options::default()
    };
    let (api, _facts, _audit) = api(opts);
    let req = mode_request("755");

    let mut first = Vec::new();
    let report = api.run(&req, &[f.clone()], &mut first);
    assert_eq!(report.changed, 1);
    assert!(!first.is_empty());

    let mut second = Vec::new();
    let report = api.run(&req, &[f.clone()], &mut second);
    assert!(report.is_success());
    assert_eq!(report.changed, 0);
    assert!(second.is_empty(), "{}", String::from_utf8_lossy(&second));
    assert_eq!(perm_bits(&f), 0o755);
}

#[test]
fn verbose_reports_retained_state() {
    let td = tempfile::tempdir().unwrap();
    let f = write_file(&td.path().join("f"), 0o644);
    let opts = Options {
        verbose: true,
        apply_permissions: true,
        ..Options::default()
    };
    let (api, _facts, _audit) = api(opts);

    let mut out = Vec::new();
    api.run(&mode_request("u-x"), &[f.clone()], &mut out);
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("retained as"), "{text}");
    assert!(text.trim_end().ends_with("with permissions rw-r--r-- (0644)"), "{text}");
}

#[test]
fn special_bits_survive_symbolic_but_not_numeric() {
    let td = tempfile::tempdir().unwrap();
    let f = write_file(&td.path().join("f"), 0o1644);
    let opts = Options {
        apply_permissions: true,
        ..Options::default()
    };
    let (api, _facts, _audit) = api(opts);

    api.run(&mode_request("g+w"), &[f.clone()], &mut Vec::new());
    assert_eq!(perm_bits(&f), 0o1664);

    api.run(&mode_request("664"), &[f.clone()], &mut Vec::new());
    assert_eq!(perm_bits(&f), 0o664);
}
