//! DNS resolver initialization.

use std::time::Duration;

use hickory_resolver::config::{ResolverConfig, ResolverOpts};
use hickory_resolver::TokioAsyncResolver;

use crate::config::{Config, ResolverChoice};
use crate::dns::HickoryResolver;

/// Initializes the DNS resolver used for verification.
///
/// With [`ResolverChoice::System`] the nameservers come from the operating
/// system; if that configuration can't be read the resolver falls back to
/// Google Public DNS and logs a warning. Timeout and attempts come from the
/// config. The resolver's own cache is kept, it lives only for this run.
pub fn init_resolver(config: &Config) -> HickoryResolver {
    let (resolver_config, mut opts) = resolver_config(config.resolver);

    opts.timeout = Duration::from_secs(config.timeout_seconds);
    opts.attempts = config.dns_attempts.max(1);
    // Set ndots to 0 to prevent search domain appending
    opts.ndots = 0;

    log::info!(
        "DNS resolver: {:?} ({} nameservers), timeout {}s, {} attempts",
        config.resolver,
        resolver_config.name_servers().len(),
        config.timeout_seconds,
        opts.attempts
    );

    HickoryResolver::new(TokioAsyncResolver::tokio(resolver_config, opts))
}

fn resolver_config(choice: ResolverChoice) -> (ResolverConfig, ResolverOpts) {
    match choice {
        ResolverChoice::System => match hickory_resolver::system_conf::read_system_conf() {
            Ok(pair) => pair,
            Err(e) => {
                log::warn!(
                    "Failed to read system DNS configuration ({e}); falling back to Google Public DNS"
                );
                (ResolverConfig::google(), ResolverOpts::default())
            }
        },
        ResolverChoice::Google => (ResolverConfig::google(), ResolverOpts::default()),
        ResolverChoice::Cloudflare => (ResolverConfig::cloudflare(), ResolverOpts::default()),
        ResolverChoice::Quad9 => (ResolverConfig::quad9(), ResolverOpts::default()),
    }
}
