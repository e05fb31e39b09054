use std::io::Write;

use log::Level;
use serde_json::Value;

use crate::constants::PROGRAM_NAME;

/// Receiver of structured facts (one JSON object per stage event).
pub trait FactsEmitter {
    fn emit(&self, subsystem: &str, event: &str, decision: &str, fields: Value);
}

/// Receiver of human-facing diagnostic lines (per-path errors).
pub trait AuditSink {
    fn log(&self, level: Level, msg: &str);
}

/// Discards everything. Used when no structured output is wanted.
#[derive(Default)]
pub struct JsonlSink;

impl FactsEmitter for JsonlSink {
    fn emit(&self, _subsystem: &str, _event: &str, _decision: &str, _fields: Value) {}
}

impl AuditSink for JsonlSink {
    fn log(&self, _level: Level, _msg: &str) {}
}

/// Writes diagnostic lines to stderr as `chperm: <msg>`.
#[derive(Default)]
pub struct StderrSink;

impl AuditSink for StderrSink {
    fn log(&self, _level: Level, msg: &str) {
        let _ = writeln!(std::io::stderr().lock(), "{PROGRAM_NAME}: {msg}");
    }
}
