//! Data models shared by the resolver, its collaborators and the CLI

pub mod config;
pub mod request;
pub mod result;
pub mod scan;

pub use config::{OutputFormat, PartialSettings, Settings};
pub use request::{EvaluationMode, ResolutionRequest};
pub use result::{BatchEntry, BatchOutcome, ResolutionResult};
pub use scan::{Reexport, RuntimeValue, ScanResult, ScanTask, ValueKind};
