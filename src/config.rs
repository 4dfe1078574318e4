//! Runtime configuration.
//!
//! Values are read from environment variables first, then overridden by
//! command-line flags. Every setting has a default, so the service runs with no
//! configuration at all.

use crate::catalog::loader::{CatalogSource, DEFAULT_CATALOG_URL};
use crate::search::query::DEFAULT_QUERY_PARAM;
use anyhow::{Context, Result, anyhow};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Timeout for the one-time catalog download.
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 2;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub source: CatalogSource,
    pub query_param: String,
    pub fetch_timeout: Duration,
}

impl Config {
    /// Reads the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_addr = lookup("BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse()
            .context("BIND_ADDR is not a valid socket address")?;

        let source = match lookup("CATALOG_FILE") {
            Some(path) => CatalogSource::File(PathBuf::from(path)),
            None => CatalogSource::Remote(
                lookup("CATALOG_URL").unwrap_or_else(|| DEFAULT_CATALOG_URL.to_string()),
            ),
        };

        let query_param =
            lookup("QUERY_PARAM").unwrap_or_else(|| DEFAULT_QUERY_PARAM.to_string());

        let fetch_timeout = match lookup("FETCH_TIMEOUT_SECS") {
            Some(secs) => parse_timeout(&secs).context("FETCH_TIMEOUT_SECS")?,
            None => Duration::from_secs(DEFAULT_FETCH_TIMEOUT_SECS),
        };

        Ok(Self {
            bind_addr,
            source,
            query_param,
            fetch_timeout,
        })
    }

    /// Applies command-line flags on top of the current values.
    ///
    /// `args` excludes the program name.
    pub fn apply_args(mut self, args: &[String]) -> Result<Self> {
        let mut i = 0;
        while i < args.len() {
            let flag = args[i].as_str();
            match flag {
                "--bind" | "--url" | "--file" | "--param" | "--timeout" => {
                    let value = args
                        .get(i + 1)
                        .ok_or_else(|| anyhow!("{} requires a value", flag))?;
                    match flag {
                        "--bind" => {
                            self.bind_addr = value
                                .parse()
                                .with_context(|| format!("invalid --bind address {}", value))?;
                        }
                        "--url" => self.source = CatalogSource::Remote(value.clone()),
                        "--file" => self.source = CatalogSource::File(PathBuf::from(value)),
                        "--param" => self.query_param = value.clone(),
                        _ => self.fetch_timeout = parse_timeout(value).context("--timeout")?,
                    }
                    i += 2;
                }
                _ => {
                    tracing::warn!("Ignoring unknown argument {}", flag);
                    i += 1;
                }
            }
        }

        if self.query_param.is_empty() {
            return Err(anyhow!("query parameter name must not be empty"));
        }

        Ok(self)
    }
}

pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|arg| arg == "--help" || arg == "-h")
}

pub fn usage(program: &str) -> String {
    format!(
        "Usage: {program} [--bind <addr:port>] [--url <catalog url> | --file <catalog path>] \
         [--param <name>] [--timeout <secs>]\n\
         Example: {program} --bind 127.0.0.1:8080\n\
         Example: {program} --file ./books.json --param search"
    )
}

fn parse_timeout(value: &str) -> Result<Duration> {
    let secs: u64 = value
        .parse()
        .with_context(|| format!("invalid timeout {:?}", value))?;
    Ok(Duration::from_secs(secs))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(|_| None).unwrap();

        assert_eq!(config.bind_addr, "0.0.0.0:8080".parse().unwrap());
        assert_eq!(
            config.source,
            CatalogSource::Remote(DEFAULT_CATALOG_URL.to_string())
        );
        assert_eq!(config.query_param, "q");
        assert_eq!(config.fetch_timeout, Duration::from_secs(2));
    }

    #[test]
    fn test_env_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("BIND_ADDR", "127.0.0.1:9000"),
            ("CATALOG_URL", "https://example.org/books.json"),
            ("QUERY_PARAM", "term"),
            ("FETCH_TIMEOUT_SECS", "10"),
        ]))
        .unwrap();

        assert_eq!(config.bind_addr, "127.0.0.1:9000".parse().unwrap());
        assert_eq!(
            config.source,
            CatalogSource::Remote("https://example.org/books.json".to_string())
        );
        assert_eq!(config.query_param, "term");
        assert_eq!(config.fetch_timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_catalog_file_wins_over_url() {
        let config = Config::from_lookup(lookup_from(&[
            ("CATALOG_URL", "https://example.org/books.json"),
            ("CATALOG_FILE", "/data/books.json"),
        ]))
        .unwrap();

        assert_eq!(config.source, CatalogSource::File("/data/books.json".into()));
    }

    #[test]
    fn test_invalid_env_values_are_errors() {
        assert!(Config::from_lookup(lookup_from(&[("BIND_ADDR", "nowhere")])).is_err());
        assert!(Config::from_lookup(lookup_from(&[("FETCH_TIMEOUT_SECS", "soon")])).is_err());
    }

    #[test]
    fn test_args_override_env() {
        let config = Config::from_lookup(lookup_from(&[("QUERY_PARAM", "term")]))
            .unwrap()
            .apply_args(&args(&[
                "--bind",
                "127.0.0.1:7000",
                "--file",
                "books.json",
                "--param",
                "s",
                "--timeout",
                "5",
            ]))
            .unwrap();

        assert_eq!(config.bind_addr, "127.0.0.1:7000".parse().unwrap());
        assert_eq!(config.source, CatalogSource::File("books.json".into()));
        assert_eq!(config.query_param, "s");
        assert_eq!(config.fetch_timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_last_source_flag_wins() {
        let config = Config::from_lookup(|_| None)
            .unwrap()
            .apply_args(&args(&["--file", "books.json", "--url", "http://localhost/b.json"]))
            .unwrap();

        assert_eq!(
            config.source,
            CatalogSource::Remote("http://localhost/b.json".to_string())
        );
    }

    #[test]
    fn test_flag_without_value_is_error() {
        let result = Config::from_lookup(|_| None)
            .unwrap()
            .apply_args(&args(&["--bind"]));

        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_flags_are_ignored() {
        let config = Config::from_lookup(|_| None)
            .unwrap()
            .apply_args(&args(&["--verbose", "--param", "query"]))
            .unwrap();

        assert_eq!(config.query_param, "query");
    }

    #[test]
    fn test_empty_query_param_is_rejected() {
        let result = Config::from_lookup(|_| None)
            .unwrap()
            .apply_args(&args(&["--param", ""]));

        assert!(result.is_err());
    }

    #[test]
    fn test_wants_help() {
        assert!(wants_help(&args(&["--help"])));
        assert!(wants_help(&args(&["--bind", "127.0.0.1:1", "-h"])));
        assert!(!wants_help(&args(&["--bind", "127.0.0.1:1"])));
        assert!(usage("catalog-search").contains("--file"));
    }
}
