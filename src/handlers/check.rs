//! Handler for the `check` command.

use super::{load_hosts, mark};
use crate::config::Config;
use anyhow::{bail, Result};
use colored::Colorize;
use hoststate::engine::resolver::HostResolver;
use hoststate::{Host, Requirement};

/// Gates on a host meeting every requirement.
///
/// # Errors
/// Returns error if the host cannot be resolved or any requirement fails,
/// which makes the process exit non-zero.
pub fn handle(config: &Config, query: &str, required: &[Requirement], strict: bool) -> Result<()> {
    let hosts = load_hosts(config)?;
    let resolver = if strict {
        HostResolver::strict(&hosts)
    } else {
        HostResolver::new(&hosts)
    };
    let host = resolver.resolve(query)?;

    println!("Checking [{}] {}", host.name().yellow(), host.state().dimmed());

    let failed = failing(host, required);
    for req in required {
        println!("   {} {req}", mark(!failed.contains(req)));
    }

    if !failed.is_empty() {
        tracing::info!(host = host.name(), state = %host.state(), "requirements not met");
        let names: Vec<String> = failed.iter().map(ToString::to_string).collect();
        bail!("Host {} does not satisfy: {}", host.name(), names.join(", "));
    }

    println!("{} Host [{}] is ready", "✓".green(), host.name().green());
    Ok(())
}

fn failing(host: &Host, required: &[Requirement]) -> Vec<Requirement> {
    required.iter().copied().filter(|r| !r.holds(host)).collect()
}
