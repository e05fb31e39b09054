// Facade for API module; delegates to submodules under src/api/

use std::io::Write;
use std::path::{Path, PathBuf};

use log::Level;
use serde_json::json;

use crate::adapters::{IdentityDb, SystemIdentityDb};
use crate::logging::{AuditSink, Decision, FactsEmitter, StageLogger};
use crate::policy::Options;
use crate::types::{Error, ModeSpec, OwnershipSpec, ResolvedOwnership, Result, RunReport};

pub mod errors;
mod mutate;
pub mod report;
pub mod resolve;
mod walk;

/// Fully resolved request applied to every visited entry.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Request {
    pub ownership: ResolvedOwnership,
    pub mode: ModeSpec,
}

pub struct Chperm<E: FactsEmitter, A: AuditSink> {
    facts: E,
    audit: A,
    options: Options,
    identity: Box<dyn IdentityDb>,
}

impl<E: FactsEmitter, A: AuditSink> Chperm<E, A> {
    pub fn new(facts: E, audit: A, options: Options) -> Self {
        Self {
            facts,
            audit,
            options,
            identity: Box::new(SystemIdentityDb),
        }
    }

    pub fn with_identity_db(mut self, identity: Box<dyn IdentityDb>) -> Self {
        self.identity = identity;
        self
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Parse and resolve the owner/group and mode tokens into a [`Request`].
    ///
    /// Nothing on disk is touched; every error returned here is fatal for the invocation.
    ///
    /// # Errors
    ///
    /// `InvalidIdentifier` for an unusable owner/group token, `InvalidMode` for a bad mode token.
    pub fn prepare(&self, owner_group: &str, mode: Option<&str>) -> Result<Request> {
        let spec = OwnershipSpec::parse(owner_group)?;
        let ownership = self.resolve(&spec)?;
        let mode = mode.map(ModeSpec::parse).transpose()?.unwrap_or_default();
        Ok(Request { ownership, mode })
    }

    /// Resolve an ownership spec against the identity database.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidIdentifier` for the first half that cannot be resolved.
    pub fn resolve(&self, spec: &OwnershipSpec) -> Result<ResolvedOwnership> {
        let slog = StageLogger::new(&self.facts);
        match resolve::resolve_ownership(self.identity.as_ref(), spec) {
            Ok(r) => {
                slog.resolve()
                    .merge(json!({ "uid": r.uid, "gid": r.gid }))
                    .emit_success();
                Ok(r)
            }
            Err(e) => {
                slog.resolve()
                    .field("error", json!(e.to_string()))
                    .field("error_id", json!(errors::id_str(errors::error_id(&e))))
                    .emit_failure();
                Err(e)
            }
        }
    }

    /// Apply `req` to every root in order, writing change lines to `out`.
    pub fn run(&self, req: &Request, roots: &[PathBuf], out: &mut dyn Write) -> RunReport {
        let mut report = RunReport::default();
        for root in roots {
            report.merge(self.change(root, req, out));
        }
        StageLogger::new(&self.facts)
            .run_summary()
            .merge(json!({
                "roots": roots.len(),
                "visited": report.visited,
                "changed": report.changed,
                "errors": report.errors.len(),
            }))
            .emit(if report.is_success() { Decision::Success } else { Decision::Failure });
        report
    }

    /// Apply `req` to a single root (and its descendants under `-R`).
    pub fn change(&self, root: &Path, req: &Request, out: &mut dyn Write) -> RunReport {
        walk::run(self, root, req, out)
    }

    fn process_entry(&self, path: &Path, req: &Request, out: &mut dyn Write, totals: &mut RunReport) {
        let outcome = mutate::mutate_entry(path, req, &self.options);
        if let Some(record) = &outcome.record {
            if report::should_report(record, &self.options) {
                let _ = writeln!(out, "{}", report::render(record, self.identity.as_ref()));
            }
            totals.tally(record);
        }

        let mut fact = StageLogger::new(&self.facts)
            .mutate_result()
            .path(path.display().to_string());
        if let Some(record) = &outcome.record {
            fact = fact.merge(serde_json::to_value(record).unwrap_or_default());
        }
        match outcome.error {
            None => fact.emit_success(),
            Some(e) => {
                fact.field("error", json!(e.to_string()))
                    .field("error_id", json!(errors::id_str(errors::error_id(&e))))
                    .emit_failure();
                self.note_failure(&e, totals);
            }
        }
    }

    fn record_error(&self, e: Error, totals: &mut RunReport) {
        StageLogger::new(&self.facts)
            .walk_error()
            .field("error", json!(e.to_string()))
            .field("error_id", json!(errors::id_str(errors::error_id(&e))))
            .emit_failure();
        self.note_failure(&e, totals);
    }

    fn note_failure(&self, e: &Error, totals: &mut RunReport) {
        let msg = e.to_string();
        log::debug!("{msg}");
        if !self.options.quiet {
            self.audit.log(Level::Error, &msg);
        }
        totals.errors.push(msg);
    }
}
