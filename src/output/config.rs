use std::env;

use crate::telemetry;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub pretty: bool,
}

impl OutputConfig {
    // --json wins over SCRAPE_OUTPUT_FORMAT
    pub fn from_env() -> Self {
        let format = if telemetry::config::json_mode() {
            OutputFormat::Json
        } else {
            parse_format(env::var("SCRAPE_OUTPUT_FORMAT").ok().as_deref())
        };
        let pretty = parse_flag(env::var("SCRAPE_OUTPUT_PRETTY").ok().as_deref());
        OutputConfig { format, pretty }
    }
}

fn parse_format(v: Option<&str>) -> OutputFormat {
    match v {
        Some("json") => OutputFormat::Json,
        _ => OutputFormat::Text,
    }
}

pub(crate) fn parse_flag(v: Option<&str>) -> bool {
    match v {
        Some(v) => v.eq_ignore_ascii_case("1") || v.eq_ignore_ascii_case("true") || v.eq_ignore_ascii_case("yes"),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_defaults_to_text() {
        assert_eq!(parse_format(None), OutputFormat::Text);
        assert_eq!(parse_format(Some("yaml")), OutputFormat::Text);
        assert_eq!(parse_format(Some("json")), OutputFormat::Json);
    }

    #[test]
    fn pretty_flag_spellings() {
        assert!(parse_flag(Some("TRUE")));
        assert!(parse_flag(Some("1")));
        assert!(!parse_flag(Some("0")));
        assert!(!parse_flag(None));
    }
}
