//! Handler for the `list` command.

use super::{load_hosts, mark};
use crate::config::Config;
use anyhow::Result;
use colored::Colorize;
use hoststate::{classify, Classification, Host};

/// Lists every host in the snapshot with its state.
///
/// # Errors
/// Returns error if the snapshot cannot be loaded.
pub fn handle(config: &Config, json: bool) -> Result<()> {
    let hosts = load_hosts(config)?;

    if json {
        return print_json(&hosts);
    }

    print_human(&hosts);
    Ok(())
}

fn print_json(hosts: &[Host]) -> Result<()> {
    let output: Vec<Classification> = hosts.iter().map(classify).collect();
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_human(hosts: &[Host]) {
    println!("{} Hosts:", "🖥".cyan());

    if hosts.is_empty() {
        println!("   (Snapshot contains no hosts)");
        return;
    }

    let width = hosts.iter().map(|h| h.name().len()).max().unwrap_or(0);

    for host in hosts {
        println!(
            "   {} {}  {}  {} {}  {} {}",
            status_icon(host),
            format!("{:<width$}", host.name()).yellow(),
            host.state(),
            mark(host.stable()),
            "stable".dimmed(),
            mark(host.is_inventory_collected()),
            "inventoried".dimmed(),
        );
    }
}

fn status_icon(host: &Host) -> colored::ColoredString {
    if host.is_unlocked_available() {
        "●".green()
    } else if host.is_unlocked_enabled() {
        "●".yellow()
    } else if host.is_locked_disabled() {
        "○".blue()
    } else if !host.idle() {
        "⚡".yellow()
    } else {
        "✗".red()
    }
}
