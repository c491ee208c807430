use std::io::{self, Write};

use super::config::{OutputConfig, OutputFormat};
use super::types::Envelope;

pub trait Presenter: Send + Sync {
    fn emit(&self, env: &Envelope, w: &mut dyn Write) -> io::Result<()>;
}

pub struct JsonPresenter { pub pretty: bool }
impl Presenter for JsonPresenter {
    fn emit(&self, env: &Envelope, w: &mut dyn Write) -> io::Result<()> {
        if self.pretty { serde_json::to_writer_pretty(&mut *w, env).map_err(to_io)? } else { serde_json::to_writer(&mut *w, env).map_err(to_io)? }
        writeln!(w)
    }
}

pub struct TextPresenter { pub pretty: bool }
impl Presenter for TextPresenter {
    fn emit(&self, env: &Envelope, w: &mut dyn Write) -> io::Result<()> {
        writeln!(w, "Result: {}", env.op)?;
        if self.pretty { serde_json::to_writer_pretty(&mut *w, &env.result).map_err(to_io)?; }
        else { serde_json::to_writer(&mut *w, &env.result).map_err(to_io)?; }
        writeln!(w)
    }
}

pub struct Emitter {
    presenter: Box<dyn Presenter>,
}

impl Emitter {
    pub fn from_config(cfg: OutputConfig) -> Self {
        let presenter: Box<dyn Presenter> = match cfg.format {
            OutputFormat::Json => Box::new(JsonPresenter { pretty: cfg.pretty }),
            OutputFormat::Text => Box::new(TextPresenter { pretty: cfg.pretty }),
        };
        Emitter { presenter }
    }

    pub fn emit(&self, env: &Envelope) -> io::Result<()> {
        let mut out = io::stdout();
        self.presenter.emit(env, &mut out)?;
        out.flush()
    }
}

fn to_io(e: serde_json::Error) -> io::Error { io::Error::new(io::ErrorKind::Other, e) }

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn json_presenter_writes_one_line() {
        let env = Envelope::result("genre", &json!({"genre": "action"}), None).unwrap();
        let mut buf = Vec::new();
        JsonPresenter { pretty: false }.emit(&env, &mut buf).unwrap();
        let s = String::from_utf8(buf).unwrap();
        assert_eq!(s.lines().count(), 1);
        assert!(s.contains("\"genre\":\"action\""));
    }

    #[test]
    fn text_presenter_names_the_op() {
        let env = Envelope::result("detail", &json!({"title": "x"}), None).unwrap();
        let mut buf = Vec::new();
        TextPresenter { pretty: true }.emit(&env, &mut buf).unwrap();
        let s = String::from_utf8(buf).unwrap();
        assert!(s.starts_with("Result: detail\n"));
        assert!(s.contains("\"title\": \"x\""));
    }
}
