use tracing::Span;
use tracing::info_span;

use crate::telemetry::ctx::{OpMarker, PhaseSpan};

#[derive(Copy, Clone, Debug)]
pub struct Browse;

#[derive(Copy, Clone, Debug)]
pub enum Phase { Request, Render }

impl PhaseSpan for Phase {
    fn name(&self) -> &'static str { match self { Phase::Request => "request", Phase::Render => "render" } }
    fn span(&self) -> Span { match self { Phase::Request => info_span!("request"), Phase::Render => info_span!("render") } }
}

impl OpMarker for Browse {
    const NAME: &'static str = "browse";
    type Phase = Phase;
    fn root_span() -> Span { info_span!("browse") }
}
