//! Command-line argument parsing.

use std::time::Duration;

use clap::Parser;

use crate::poller::config::DEFAULT_URL;
use crate::poller::PollerConfig;

/// Poll a host's statistics endpoint and print resource usage warnings.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "statmon", version, about)]
pub struct Cli {
    /// URL to fetch stats from (GET).
    #[arg(long, default_value = DEFAULT_URL, value_name = "URL")]
    pub url: String,

    /// Poll interval (e.g. 1s, 500ms, 2m).
    #[arg(long, default_value = "1s", value_name = "DURATION", value_parser = parse_interval)]
    pub interval: Duration,
}

impl Cli {
    /// Poller configuration for these flags; the timeout keeps its default.
    pub fn poller_config(&self) -> PollerConfig {
        PollerConfig::default()
            .with_url(self.url.clone())
            .with_interval(self.interval)
    }
}

/// Parse an interval such as `500ms`, `1s`, `2m`, or `1h`.
///
/// A bare number is taken as seconds. Zero is rejected.
pub fn parse_interval(input: &str) -> Result<Duration, String> {
    let input = input.trim();
    let split = input
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(input.len());
    let (digits, unit) = input.split_at(split);

    let value: u64 = digits
        .parse()
        .map_err(|_| format!("invalid interval '{}': expected e.g. 500ms, 1s, 2m", input))?;

    let duration = match unit.trim() {
        "ms" => Duration::from_millis(value),
        "" | "s" => Duration::from_secs(value),
        "m" => Duration::from_secs(value.saturating_mul(60)),
        "h" => Duration::from_secs(value.saturating_mul(3600)),
        other => return Err(format!("unknown interval unit '{}': use ms, s, m or h", other)),
    };

    if duration.is_zero() {
        return Err("interval must be greater than zero".to_string());
    }
    Ok(duration)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("statmon").chain(args.iter().copied()))
    }

    #[test]
    fn test_parse_no_args() {
        let cli = parse(&[]).unwrap();
        assert_eq!(cli.url, "http://srv.msk01.gigacorp.local/_stats");
        assert_eq!(cli.interval, Duration::from_secs(1));
    }

    #[test]
    fn test_parse_url_and_interval() {
        let cli = parse(&["--url", "http://10.0.0.1/_stats", "--interval", "500ms"]).unwrap();
        assert_eq!(cli.url, "http://10.0.0.1/_stats");
        assert_eq!(cli.interval, Duration::from_millis(500));
    }

    #[test]
    fn test_parse_equals_syntax() {
        let cli = parse(&["--interval=2m"]).unwrap();
        assert_eq!(cli.interval, Duration::from_secs(120));
    }

    #[test]
    fn test_parse_rejects_bad_interval() {
        assert!(parse(&["--interval", "soon"]).is_err());
        assert!(parse(&["--interval", "0s"]).is_err());
    }

    #[test]
    fn test_parse_unknown_flag() {
        assert!(parse(&["--unknown"]).is_err());
    }

    #[test]
    fn test_poller_config() {
        let cli = parse(&["--url", "http://host/_stats", "--interval", "3s"]).unwrap();
        let config = cli.poller_config();
        assert_eq!(config.url, "http://host/_stats");
        assert_eq!(config.interval, Duration::from_secs(3));
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_parse_interval_units() {
        assert_eq!(parse_interval("250ms").unwrap(), Duration::from_millis(250));
        assert_eq!(parse_interval("7").unwrap(), Duration::from_secs(7));
        assert_eq!(parse_interval("7s").unwrap(), Duration::from_secs(7));
        assert_eq!(parse_interval("1h").unwrap(), Duration::from_secs(3600));
        assert_eq!(parse_interval(" 2m ").unwrap(), Duration::from_secs(120));
    }

    #[test]
    fn test_parse_interval_errors() {
        assert!(parse_interval("").is_err());
        assert!(parse_interval("ms").is_err());
        assert!(parse_interval("5d").is_err());
        assert!(parse_interval("-1s").is_err());
        assert!(parse_interval("1.5s").is_err());
        assert!(parse_interval("0ms").is_err());
    }
}
