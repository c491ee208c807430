use anyhow::Result;
use serde::Serialize;
use std::marker::PhantomData;
use std::time::Duration;
use tracing::{info, debug, warn, Span};

use crate::output;

pub trait PhaseSpan {
    fn name(&self) -> &'static str;
    fn span(&self) -> Span;
}

pub trait OpMarker {
    const NAME: &'static str;
    type Phase: PhaseSpan;
    fn root_span() -> Span;
}

pub struct LogCtx<O: OpMarker> {
    pub(crate) json: bool,
    pub(crate) _marker: PhantomData<O>,
}

impl<O: OpMarker> LogCtx<O> {
    fn op_name(&self) -> &'static str { O::NAME }

    pub fn root_span_kv<'a, T>(&self, fields: T) -> Span
    where
        T: IntoIterator<Item = (&'a str, String)>,
    {
        let span = O::root_span();
        let details = kv_to_string(fields);
        span.in_scope(|| {
            if details.is_empty() { info!(op = %self.op_name(), "start"); }
            else { info!(op = %self.op_name(), details = %details, "start"); }
        });
        span
    }

    pub fn span(&self, ph: &O::Phase) -> Span { ph.span() }

    pub fn span_kv<'a, T>(&self, ph: &O::Phase, fields: T) -> Span
    where
        T: IntoIterator<Item = (&'a str, String)>,
    {
        let span = self.span(ph);
        let details = kv_to_string(fields);
        span.in_scope(|| {
            if details.is_empty() { debug!(op = %self.op_name(), phase = ph.name(), "span_start"); }
            else { debug!(op = %self.op_name(), phase = ph.name(), details = %details, "span_start"); }
        });
        span
    }

    pub fn info(&self, msg: impl AsRef<str>) { if self.json { info!(op = %self.op_name(), "{}", msg.as_ref()); } else { info!("{}", msg.as_ref()); } }

    pub fn debug_kv<'a, D>(&self, msg: &str, kv: D)
    where
        D: IntoIterator<Item = (&'a str, String)>,
    {
        let details = kv_to_string(kv);
        if self.json { debug!(op = %self.op_name(), details = %details, "{}", msg); }
        else { debug!("{} {}", msg, details); }
    }

    pub fn warn_kv<'a, D>(&self, msg: &str, kv: D)
    where
        D: IntoIterator<Item = (&'a str, String)>,
    {
        let details = kv_to_string(kv);
        if self.json { warn!(op = %self.op_name(), details = %details, "{}", msg); }
        else { warn!("{} {}", msg, details); }
    }

    pub fn result<T: Serialize>(&self, op: &'static str, result: &T, elapsed: Option<Duration>) -> Result<()> {
        output::emit_result(op, result, elapsed)
    }
}

impl LogCtx<crate::telemetry::ops::scrape::Scrape> {
    pub fn scraped(&self, url: &str, records: usize, missing: &[String]) {
        if self.json {
            info!(op = %self.op_name(), url, records, missing = missing.len(), "scraped");
        } else {
            info!("✅ {} — records={} missing={}", url, records, missing.len());
        }
        if !missing.is_empty() {
            debug!(fields = %missing.join(","), "fields absent from markup");
        }
    }
}

fn kv_to_string<'a, T>(kv: T) -> String
where
    T: IntoIterator<Item = (&'a str, String)>,
{
    let mut parts: Vec<String> = Vec::new();
    for (k, v) in kv { parts.push(format!("{}={}", k, v)); }
    parts.join(" ")
}
