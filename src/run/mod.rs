//! The verification pipeline: read, verify, emit.

mod shutdown;

use std::io::Write;
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use futures::StreamExt;
use log::info;
use tokio::io::{AsyncBufRead, BufReader};
use tokio_util::sync::CancellationToken;

use crate::config::{Config, OutputFormat, LOGGING_INTERVAL};
use crate::dns::DomainResolver;
use crate::error_handling::{PipelineError, ProcessingStats};
use crate::export::ResultEmitter;
use crate::initialization::init_resolver;
use crate::input::read_domains;
use crate::verify::{VerificationResult, Verifier};

pub use shutdown::spawn_interrupt_listener;

/// Pipeline settings that don't concern where input and output live.
#[derive(Debug, Clone)]
pub struct CheckOptions {
    pub output_format: OutputFormat,
    /// Domains verified at once; values below 1 are treated as 1
    pub max_concurrency: usize,
    /// Hard cap for each DNS lookup
    pub lookup_timeout: Option<Duration>,
}

impl Default for CheckOptions {
    fn default() -> Self {
        Self {
            output_format: OutputFormat::Quoted,
            max_concurrency: 1,
            lookup_timeout: None,
        }
    }
}

impl From<&Config> for CheckOptions {
    fn from(config: &Config) -> Self {
        Self {
            output_format: config.output_format,
            max_concurrency: config.max_concurrency,
            lookup_timeout: Some(config.lookup_timeout()),
        }
    }
}

/// Summary of a completed (or interrupted) run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CheckReport {
    /// Result rows written
    pub total_domains: usize,
    /// Domains rejected by the syntax gate (no `.`)
    pub rejected_syntax: usize,
    pub with_mx: usize,
    pub with_spf: usize,
    pub with_dmarc: usize,
    /// Lookups that failed and were reported as absent
    pub lookup_failures: usize,
    pub elapsed_seconds: f64,
    /// True when the run stopped on an interrupt before the input ended
    pub interrupted: bool,
}

impl CheckReport {
    fn record(&mut self, result: &VerificationResult) {
        self.total_domains += 1;
        if result.has_mx {
            self.with_mx += 1;
        }
        if result.has_spf() {
            self.with_spf += 1;
        }
        if result.has_dmarc() {
            self.with_dmarc += 1;
        }
    }
}

/// Verifies every domain read from `input` and writes one row per domain to
/// `output`.
///
/// Up to `options.max_concurrency` domains are verified at once, but rows
/// are always written in input order: a finished domain waits for every
/// earlier one. The header is written before anything is read.
///
/// When `cancel` fires, reading stops, domains still being verified are
/// dropped without a row, and the report comes back with `interrupted` set.
///
/// Returns the report together with the output writer, flushed.
///
/// # Errors
///
/// - [`PipelineError::Input`] if reading fails. Rows for domains read before
///   the fault are written first; nothing is written for the faulting line.
/// - [`PipelineError::Output`] if writing fails.
pub async fn check_stream<I, W, R>(
    input: I,
    output: W,
    resolver: R,
    options: &CheckOptions,
    cancel: CancellationToken,
) -> Result<(CheckReport, W), PipelineError>
where
    I: AsyncBufRead + Unpin,
    W: Write,
    R: DomainResolver,
{
    let start_time = Instant::now();
    let stats = Arc::new(ProcessingStats::new());
    let mut verifier = Verifier::new(resolver, Arc::clone(&stats));
    if let Some(limit) = options.lookup_timeout {
        verifier = verifier.with_lookup_timeout(limit);
    }

    let mut emitter =
        ResultEmitter::new(output, options.output_format).map_err(PipelineError::Output)?;
    let mut report = CheckReport::default();

    let verifier = &verifier;
    let results = read_domains(input)
        .map(move |item| async move {
            match item {
                Ok(domain) => Ok(verifier.verify(domain).await),
                Err(e) => Err(e),
            }
        })
        // buffered() yields in submission order, which re-sequences concurrent verifications
        .buffered(options.max_concurrency.max(1));
    tokio::pin!(results);

    loop {
        let next = tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                report.interrupted = true;
                break;
            }
            next = results.next() => next,
        };
        let Some(item) = next else {
            break;
        };

        let result = item.map_err(PipelineError::Input)?;
        emitter.emit(&result).map_err(PipelineError::Output)?;
        report.record(&result);

        if report.total_domains % LOGGING_INTERVAL == 0 {
            log_progress(report.total_domains, start_time);
        }
    }

    let output = emitter.finish().map_err(PipelineError::Output)?;

    report.rejected_syntax = stats.rejected_syntax();
    report.lookup_failures = stats.total_lookup_failures();
    report.elapsed_seconds = start_time.elapsed().as_secs_f64();

    info!(
        "Checked {} domains in {:.1}s: {} with MX, {} with SPF, {} with DMARC, {} rejected by syntax",
        report.total_domains,
        report.elapsed_seconds,
        report.with_mx,
        report.with_spf,
        report.with_dmarc,
        report.rejected_syntax
    );
    stats.log_summary();

    Ok((report, output))
}

fn log_progress(done: usize, start_time: Instant) {
    let elapsed = start_time.elapsed().as_secs_f64();
    #[allow(clippy::cast_precision_loss)]
    let rate = if elapsed > 0.0 {
        done as f64 / elapsed
    } else {
        0.0
    };
    info!("Processed {done} domains in {elapsed:.1}s ({rate:.1} domains/s)");
}

/// Runs a check with the provided configuration.
///
/// Reads domains from the configured file (or stdin for `-`), verifies them
/// against the configured resolver and writes rows to the configured output
/// (or stdout). Ctrl-C stops the run cleanly.
///
/// # Errors
///
/// Returns an error if the input or output can't be opened, or if reading
/// or writing fails mid-run.
///
/// # Example
///
/// ```no_run
/// use domain_mailcheck::{run_check, Config};
///
/// # async fn example() -> anyhow::Result<()> {
/// let report = run_check(Config::default()).await?;
/// eprintln!("{} domains checked", report.total_domains);
/// # Ok(())
/// # }
/// ```
pub async fn run_check(config: Config) -> Result<CheckReport> {
    let resolver = init_resolver(&config);
    let options = CheckOptions::from(&config);

    let input: Box<dyn AsyncBufRead + Unpin + Send> = if config.reads_stdin() {
        info!("Reading domains from stdin");
        Box::new(BufReader::new(tokio::io::stdin()))
    } else {
        let file = tokio::fs::File::open(&config.file)
            .await
            .with_context(|| format!("Failed to open input file: {}", config.file.display()))?;
        Box::new(BufReader::new(file))
    };

    let output: Box<dyn Write> = match &config.output {
        Some(path) => Box::new(
            std::fs::File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?,
        ),
        None => Box::new(std::io::stdout()),
    };

    let cancel = CancellationToken::new();
    let interrupt_listener = spawn_interrupt_listener(cancel.clone());

    let outcome = check_stream(input, output, resolver, &options, cancel).await;
    interrupt_listener.abort();

    let (report, _output) = outcome.context("Domain check aborted")?;
    Ok(report)
}
