//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;
use std::time::Duration;

use clap::builder::TypedValueParser;
use clap::{Parser, ValueEnum};

use crate::config::constants::{DEFAULT_MAX_CONCURRENCY, DNS_ATTEMPTS, DNS_TIMEOUT_SECS};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Result output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Every string field quoted with backslash escapes, booleans bare (default)
    Quoted,
    /// RFC 4180 CSV, fields quoted only when needed
    Csv,
    /// One JSON object per line, no header
    Jsonl,
}

/// Which upstream nameservers the resolver talks to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ResolverChoice {
    /// Nameservers from the operating system configuration (e.g. /etc/resolv.conf)
    System,
    /// Google Public DNS (8.8.8.8, 8.8.4.4)
    Google,
    /// Cloudflare (1.1.1.1, 1.0.0.1)
    Cloudflare,
    /// Quad9 (9.9.9.9)
    Quad9,
}

/// Command-line options and library configuration.
///
/// The same struct is parsed by `clap` in the binary and can be constructed
/// programmatically by library users.
///
/// # Examples
///
/// ```bash
/// # Read domains from stdin, write CSV to stdout
/// cat domains.txt | domain_mailcheck
///
/// # Read from a file, verify 20 domains at a time, write JSON lines to a file
/// domain_mailcheck domains.txt --max-concurrency 20 --output-format jsonl --output out.jsonl
/// ```
///
/// ```no_run
/// use domain_mailcheck::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     file: PathBuf::from("domains.txt"),
///     max_concurrency: 20,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "domain_mailcheck",
    about = "Checks domains for MX, SPF and DMARC records and prints one CSV row per domain."
)]
pub struct Config {
    /// File to read domains from, one per line ("-" reads stdin)
    #[arg(value_parser, default_value = "-")]
    pub file: PathBuf,

    /// File to write results to (defaults to stdout)
    #[arg(long, value_parser)]
    pub output: Option<PathBuf>,

    /// Output format: quoted|csv|jsonl
    #[arg(long, value_enum, default_value_t = OutputFormat::Quoted)]
    pub output_format: OutputFormat,

    /// Maximum number of domains verified at once (output order is always input order)
    #[arg(long, default_value_t = DEFAULT_MAX_CONCURRENCY,
          value_parser = clap::value_parser!(u32).range(1..).map(|n| n as usize))]
    pub max_concurrency: usize,

    /// Per-query DNS timeout in seconds
    #[arg(long, default_value_t = DNS_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// Attempts the resolver makes per query
    #[arg(long, default_value_t = DNS_ATTEMPTS)]
    pub dns_attempts: usize,

    /// Upstream nameservers: system|google|cloudflare|quad9
    #[arg(long, value_enum, default_value_t = ResolverChoice::System)]
    pub resolver: ResolverChoice,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

impl Config {
    /// Returns true when domains are read from standard input.
    pub fn reads_stdin(&self) -> bool {
        self.file.as_os_str() == "-"
    }

    /// Hard upper bound for one lookup, covering every resolver attempt.
    pub fn lookup_timeout(&self) -> Duration {
        let attempts = self.dns_attempts.max(1) as u64;
        Duration::from_secs(self.timeout_seconds.saturating_mul(attempts).saturating_add(1))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            file: PathBuf::from("-"),
            output: None,
            output_format: OutputFormat::Quoted,
            max_concurrency: DEFAULT_MAX_CONCURRENCY,
            timeout_seconds: DNS_TIMEOUT_SECS,
            dns_attempts: DNS_ATTEMPTS,
            resolver: ResolverChoice::System,
            log_level: LogLevel::Warn,
            log_format: LogFormat::Plain,
        }
    }
}
