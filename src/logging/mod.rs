pub mod audit;
pub mod facts;
pub mod stderr;

pub use audit::{Decision, EventBuilder, Stage, StageLogger};
pub use facts::{AuditSink, FactsEmitter, JsonlSink, StderrSink};
