//! Depth-first, parent-before-children traversal over one root.
use std::collections::HashSet;
use std::io::Write;
use std::path::{Path, PathBuf};

use super::{Chperm, Request};
use crate::fs::{read_state, EntryKind};
use crate::logging::{AuditSink, FactsEmitter};
use crate::types::{Error, RunReport};

pub(super) fn run<E: FactsEmitter, A: AuditSink>(
    api: &Chperm<E, A>,
    root: &Path,
    req: &Request,
    out: &mut dyn Write,
) -> RunReport {
    let opts = api.options();
    let mut report = RunReport::default();
    let mut seen_dirs: HashSet<(u64, u64)> = HashSet::new();
    let mut stack: Vec<PathBuf> = vec![root.to_path_buf()];

    while let Some(path) = stack.pop() {
        api.process_entry(&path, req, out, &mut report);
        if !opts.recursive {
            continue;
        }

        let state = match read_state(&path, opts.symlinks.descends_links()) {
            Ok(state) => state,
            Err(e) => {
                log::debug!("{}: not descending, cannot stat: {e}", path.display());
                continue;
            }
        };
        if state.kind != EntryKind::Dir {
            continue;
        }
        if !seen_dirs.insert((state.dev, state.ino)) {
            log::debug!("{}: directory already visited, not descending", path.display());
            continue;
        }

        let (children, errors) = list_children(&path);
        for e in errors {
            api.record_error(e, &mut report);
        }
        // reversed so the first name is popped first
        stack.extend(children.into_iter().rev());
    }
    report
}

/// Entries of `dir` sorted by name, plus any enumeration errors met on the way.
fn list_children(dir: &Path) -> (Vec<PathBuf>, Vec<Error>) {
    let unreadable = |source: std::io::Error| Error::DirectoryUnreadable {
        path: dir.to_path_buf(),
        source,
    };
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => return (Vec::new(), vec![unreadable(e)]),
    };

    let mut names = Vec::new();
    let mut errors = Vec::new();
    for entry in entries {
        match entry {
            Ok(entry) => names.push(entry.file_name()),
            Err(e) => errors.push(unreadable(e)),
        }
    }
    names.sort();
    let children = names.into_iter().map(|name| dir.join(name)).collect();
    (children, errors)
}
