//! Terminal browser over the scrape operations.
//!
//! A line-oriented loop: each command becomes an [`Intent`], the current
//! [`ViewState`] plans it into a fetch, and the next snapshot is rendered.
//! Only one fetch is ever in flight.

pub mod render;
pub mod state;

use std::io::Write;

use anyhow::Result;
use clap::Args;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tracing::Instrument;

use crate::client::ScrapeService;
use crate::telemetry::{self, ctx::LogCtx};
use crate::telemetry::ops::browse::{Browse, Phase as BrowsePhase};

pub use render::render;
pub use state::{Intent, Payload, Request, ViewState};

const HELP: &str = "\
commands:
  n, next        next page
  p, prev        previous page
  h, home        home listing
  g <slug>       genre listing
  o <n>          open entry n (listing item or related title)
  b, back        back to the listing
  ?, help        this text
  q, quit        exit
";

#[derive(Args, Debug)]
pub struct BrowseCmd {
    /// Start on this genre instead of the home listing
    #[arg(long)]
    pub genre: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Go(Intent),
    Open(usize),
    Help,
    Quit,
    Unknown(String),
}

/// None for blank lines.
pub fn parse_command(line: &str) -> Option<Command> {
    let mut words = line.split_whitespace();
    let head = words.next()?;
    let arg = words.next();
    let cmd = match (head, arg) {
        ("n" | "next", None) => Command::Go(Intent::Next),
        ("p" | "prev", None) => Command::Go(Intent::Prev),
        ("h" | "home", None) => Command::Go(Intent::Home),
        ("b" | "back", None) => Command::Go(Intent::Back),
        ("g" | "genre", Some(slug)) => Command::Go(Intent::SelectGenre(slug.to_string())),
        ("o" | "open", Some(n)) => match n.parse() {
            Ok(n) => Command::Open(n),
            Err(_) => Command::Unknown(line.trim().to_string()),
        },
        ("?" | "help", None) => Command::Help,
        ("q" | "quit", None) => Command::Quit,
        _ => Command::Unknown(line.trim().to_string()),
    };
    Some(cmd)
}

pub async fn run(service: ScrapeService, args: BrowseCmd) -> Result<()> {
    let start = match args.genre {
        Some(slug) => Intent::SelectGenre(slug),
        None => Intent::Load,
    };
    let input = BufReader::new(tokio::io::stdin());
    let mut out = std::io::stdout();
    session(&service, start, input, &mut out).await
}

pub async fn session<R, W>(service: &ScrapeService, start: Intent, input: R, out: &mut W) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let log = telemetry::browse();
    let root = log.root_span_kv([("start", format!("{:?}", start))]);
    async {
        let mut state = step(&log, service, &ViewState::default(), start, out).await?;
        let mut lines = input.lines();
        while let Some(line) = lines.next_line().await? {
            let Some(cmd) = parse_command(&line) else { continue };
            match cmd {
                Command::Quit => break,
                Command::Help => out.write_all(HELP.as_bytes())?,
                Command::Unknown(s) => writeln!(out, "unknown command: {} (? for help)", s)?,
                Command::Open(n) => match state.link_at(n) {
                    Some(url) => state = step(&log, service, &state, Intent::Open(url), out).await?,
                    None => writeln!(out, "no entry {}", n)?,
                },
                Command::Go(intent) => state = step(&log, service, &state, intent, out).await?,
            }
            out.flush()?;
        }
        log.debug_kv("browse finished", [("view", format!("{:?}", state.view)), ("page", state.page.to_string())]);
        Ok(())
    }
    .instrument(root)
    .await
}

async fn step<W: Write>(
    log: &LogCtx<Browse>,
    service: &ScrapeService,
    state: &ViewState,
    intent: Intent,
    out: &mut W,
) -> Result<ViewState> {
    let Some(req) = state.plan(intent.clone()) else {
        writeln!(out, "nothing to do for {:?}", intent)?;
        return Ok(state.clone());
    };
    let loading = state.begin();
    out.write_all(render(&loading).as_bytes())?;
    out.flush()?;

    let span = log.span_kv(&BrowsePhase::Request, [("request", format!("{:?}", req))]);
    let next = match perform(service, req).instrument(span).await {
        Ok(payload) => loading.succeed(payload),
        Err(err) => {
            log.warn_kv("request failed", [("error", format!("{:#}", err))]);
            loading.fail()
        }
    };
    log.span(&BrowsePhase::Render).in_scope(|| out.write_all(render(&next).as_bytes()))?;
    Ok(next)
}

async fn perform(service: &ScrapeService, req: Request) -> Result<Payload> {
    Ok(match req {
        Request::Home { page } => Payload::Home(service.home(page).await?.data),
        Request::Genre { slug, page } => Payload::Genre(service.genre(&slug, page).await?.data),
        Request::Detail { url } => Payload::Detail(service.detail(&url).await?.data),
    })
}
