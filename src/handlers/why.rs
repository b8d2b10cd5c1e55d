//! Handler for the `why` command.

use super::{load_hosts, mark};
use crate::config::Config;
use anyhow::Result;
use colored::Colorize;
use hoststate::engine::resolver::HostResolver;
use hoststate::{Host, Requirement};

/// Explains every classification of one host.
///
/// # Errors
/// Returns error if the snapshot cannot be loaded or the host not resolved.
pub fn handle(config: &Config, query: &str, strict: bool) -> Result<()> {
    let hosts = load_hosts(config)?;
    let resolver = if strict {
        HostResolver::strict(&hosts)
    } else {
        HostResolver::new(&hosts)
    };
    let host = resolver.resolve(query)?;

    println!("{} [{}] {}", "🖥".cyan(), host.name().cyan().bold(), host.uuid.dimmed());
    if let Some(personality) = &host.personality {
        println!("   Personality: {personality}");
    }
    println!("   State:       {}", host.state());
    println!();

    for req in Requirement::ALL {
        println!(
            "   {} {:<20} {}",
            mark(req.holds(host)),
            req.to_string(),
            explain(req, host).dimmed()
        );
    }
    Ok(())
}

fn explain(req: Requirement, host: &Host) -> String {
    let pair = format!("{}/{}", host.administrative_state, host.operational_status);
    match req {
        Requirement::Idle => match host.task.as_deref() {
            Some(task) if !task.is_empty() => format!("task '{task}' in progress"),
            _ => "no task running".to_string(),
        },
        Requirement::Stable if !host.idle() => "task in progress".to_string(),
        Requirement::Stable => {
            if host.stable() {
                format!("{pair} agree")
            } else {
                format!("{pair} disagree, still transitioning")
            }
        }
        Requirement::UnlockedEnabled | Requirement::LockedDisabled => {
            if host.idle() {
                pair
            } else {
                format!("{pair}, not idle")
            }
        }
        Requirement::UnlockedAvailable => {
            format!("{pair}, availability {}", host.availability_status)
        }
        Requirement::InventoryCollected => match &host.inventory_state {
            Some(state) => format!("inventory state {state}"),
            None => "inventory state not reported".to_string(),
        },
    }
}
