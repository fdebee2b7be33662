//! Application configuration management

use std::env;
use std::net::{IpAddr, SocketAddr};

use anyhow::{Context, Result, bail};

use crate::cli::CliOptions;
use crate::db::events::DEFAULT_CAPACITY;
use crate::logging::LogFormat;
use crate::service_kind::ServiceKind;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Interface to bind
    pub host: IpAddr,

    /// Server port
    pub port: u16,

    /// Which GraphQL service to serve
    pub service: ServiceKind,

    /// Log output format
    pub log_format: LogFormat,

    /// Undelivered `bookAdded` events buffered per subscriber
    pub book_events_capacity: usize,

    /// Attach the fixed `{field: "name", message: "bad"}` entry to every
    /// `addBook` response of the events service
    pub legacy_add_book_error: bool,

    /// Resolve the CRUD service's `authors` query against the books collection
    pub legacy_authors_query: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::from([0, 0, 0, 0]),
            port: 4000,
            service: ServiceKind::default(),
            log_format: LogFormat::default(),
            book_events_capacity: DEFAULT_CAPACITY,
            legacy_add_book_error: true,
            legacy_authors_query: false,
        }
    }
}

fn parse_flag(value: &str) -> bool {
    value == "true" || value == "1"
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup. Unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let host = match lookup("HOST") {
            Some(v) => v.parse().with_context(|| format!("Invalid HOST: {v}"))?,
            None => defaults.host,
        };

        let port = match lookup("PORT") {
            Some(v) => v.parse().with_context(|| format!("Invalid PORT: {v}"))?,
            None => defaults.port,
        };

        let service = match lookup("SERVICE") {
            Some(v) => ServiceKind::from_arg(&v)
                .with_context(|| format!("Invalid SERVICE: {v} (expected events, crud or users)"))?,
            None => defaults.service,
        };

        let log_format = match lookup("LOG_FORMAT") {
            Some(v) => v.parse()?,
            None => defaults.log_format,
        };

        let book_events_capacity = match lookup("BOOK_EVENTS_CAPACITY") {
            Some(v) => v
                .parse()
                .with_context(|| format!("Invalid BOOK_EVENTS_CAPACITY: {v}"))?,
            None => defaults.book_events_capacity,
        };
        if book_events_capacity == 0 {
            bail!("BOOK_EVENTS_CAPACITY must be greater than zero");
        }

        Ok(Self {
            host,
            port,
            service,
            log_format,
            book_events_capacity,
            legacy_add_book_error: lookup("LEGACY_ADD_BOOK_ERROR")
                .map(|v| parse_flag(&v))
                .unwrap_or(defaults.legacy_add_book_error),
            legacy_authors_query: lookup("LEGACY_AUTHORS_QUERY")
                .map(|v| parse_flag(&v))
                .unwrap_or(defaults.legacy_authors_query),
        })
    }

    /// Apply command-line overrides on top of the environment
    pub fn with_cli(mut self, cli: &CliOptions) -> Self {
        if let Some(service) = cli.service_override {
            self.service = service;
        }
        if let Some(port) = cli.port_override {
            self.port = port;
        }
        self
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
