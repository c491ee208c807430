pub mod config;
pub mod presenter;
pub mod types;

use std::time::Duration;

use anyhow::Result;
use serde::Serialize;

pub use presenter::Emitter;

use self::config::OutputConfig;
use self::types::{Envelope, Meta};

/// Wrap `result` in an envelope and print it to stdout.
pub fn emit_result<T: Serialize>(op: &'static str, result: &T, elapsed: Option<Duration>) -> Result<()> {
    let meta = elapsed.map(|d| Meta { duration_ms: Some(d.as_millis()) });
    let env = Envelope::result(op, result, meta)?;
    let emitter = Emitter::from_config(OutputConfig::from_env());
    emitter.emit(&env)?;
    Ok(())
}
