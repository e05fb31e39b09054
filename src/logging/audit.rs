// Audit helpers that emit structured facts across chperm stages.
//
// Side-effects:
// - Emits JSON facts via `FactsEmitter` for the following stages:
//   `resolve`, `mutate.result` (one per visited entry), `walk.error` and `run.summary`.
// - Ensures a minimal envelope is present on every fact: `schema_version`, `stage`, `decision`.
use crate::constants::FACTS_SUBSYSTEM;
use crate::logging::FactsEmitter;
use serde_json::{json, Value};

pub(crate) const SCHEMA_VERSION: i64 = 1;

/// Stage for typed audit emission.
#[derive(Clone, Copy, Debug)]
pub enum Stage {
    Resolve,
    MutateResult,
    WalkError,
    RunSummary,
}

impl Stage {
    fn as_event(&self) -> &'static str {
        match self {
            Stage::Resolve => "resolve",
            Stage::MutateResult => "mutate.result",
            Stage::WalkError => "walk.error",
            Stage::RunSummary => "run.summary",
        }
    }
}

/// Decision severity for audit events.
#[derive(Clone, Copy, Debug)]
pub enum Decision {
    Success,
    Failure,
}

impl Decision {
    fn as_str(&self) -> &'static str {
        match self {
            Decision::Success => "success",
            Decision::Failure => "failure",
        }
    }
}

/// Builder facade over audit emission with a centralized envelope.
pub struct StageLogger<'a> {
    facts: &'a dyn FactsEmitter,
}

impl<'a> StageLogger<'a> {
    pub(crate) fn new(facts: &'a dyn FactsEmitter) -> Self {
        Self { facts }
    }

    pub fn resolve(&self) -> EventBuilder<'a> { EventBuilder::new(self.facts, Stage::Resolve) }
    pub fn mutate_result(&self) -> EventBuilder<'a> { EventBuilder::new(self.facts, Stage::MutateResult) }
    pub fn walk_error(&self) -> EventBuilder<'a> { EventBuilder::new(self.facts, Stage::WalkError) }
    pub fn run_summary(&self) -> EventBuilder<'a> { EventBuilder::new(self.facts, Stage::RunSummary) }
}

pub struct EventBuilder<'a> {
    facts: &'a dyn FactsEmitter,
    stage: Stage,
    fields: serde_json::Map<String, Value>,
}

impl<'a> EventBuilder<'a> {
    fn new(facts: &'a dyn FactsEmitter, stage: Stage) -> Self {
        let mut fields = serde_json::Map::new();
        fields.insert("stage".to_string(), json!(stage.as_event()));
        Self { facts, stage, fields }
    }

    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.fields.insert("path".into(), json!(path.into()));
        self
    }

    pub fn field(mut self, key: &str, value: Value) -> Self {
        self.fields.insert(key.to_string(), value);
        self
    }

    pub fn merge(mut self, extra: Value) -> Self {
        if let Value::Object(obj) = extra {
            self.fields.extend(obj);
        }
        self
    }

    pub fn emit(mut self, decision: Decision) {
        self.fields.entry("schema_version").or_insert(json!(SCHEMA_VERSION));
        self.fields.entry("decision").or_insert(json!(decision.as_str()));
        self.facts.emit(
            FACTS_SUBSYSTEM,
            self.stage.as_event(),
            decision.as_str(),
            Value::Object(self.fields),
        );
    }

    pub fn emit_success(self) { self.emit(Decision::Success) }
    pub fn emit_failure(self) { self.emit(Decision::Failure) }
}
