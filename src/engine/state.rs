//! Derived State Engine: classifies a host snapshot.
//!
//! Answers "is it safe to lock, unlock or configure this host right now?"
//! by combining the administrative, operational, availability, task and
//! inventory fields of a `Host`. Everything here is a pure function of the
//! snapshot: no I/O, no mutation, no failure.

use super::types::{AdministrativeState, AvailabilityStatus, Host, InventoryState, OperationalStatus};
use serde::Serialize;

impl Host {
    /// Returns true when no maintenance task is running on the host.
    #[must_use]
    pub fn idle(&self) -> bool {
        self.task.as_deref().map_or(true, str::is_empty)
    }

    /// Returns true when administrative intent and operational status agree
    /// and nothing is in progress.
    ///
    /// A host that is not stable is still transitioning.
    #[must_use]
    pub fn stable(&self) -> bool {
        use AdministrativeState::{Locked, Unlocked};
        use OperationalStatus::{Disabled, Enabled};

        self.idle()
            && matches!(
                (&self.administrative_state, &self.operational_status),
                (Unlocked, Enabled) | (Locked, Disabled)
            )
    }

    #[must_use]
    pub fn is_unlocked_enabled(&self) -> bool {
        self.administrative_state == AdministrativeState::Unlocked
            && self.operational_status == OperationalStatus::Enabled
            && self.idle()
    }

    #[must_use]
    pub fn is_locked_disabled(&self) -> bool {
        self.administrative_state == AdministrativeState::Locked
            && self.operational_status == OperationalStatus::Disabled
            && self.idle()
    }

    #[must_use]
    pub fn is_unlocked_available(&self) -> bool {
        self.is_unlocked_enabled() && self.availability_status == AvailabilityStatus::Available
    }

    /// Returns true once initial inventory collection has completed.
    ///
    /// Configuring or unlocking a host before this point is unsafe. A
    /// missing inventory state counts as not collected.
    #[must_use]
    pub fn is_inventory_collected(&self) -> bool {
        self.inventory_state == Some(InventoryState::Collected)
    }

    /// Formats `admin/operational/availability/task` for logs.
    ///
    /// `task` is the lower-cased task name, or `idle` when none is running.
    #[must_use]
    pub fn state(&self) -> String {
        let task = match self.task.as_deref() {
            Some(task) if !task.is_empty() => task.to_lowercase(),
            _ => "idle".to_string(),
        };
        format!(
            "{}/{}/{}/{}",
            self.administrative_state, self.operational_status, self.availability_status, task
        )
    }
}

/// A named classification a caller can require of a host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Requirement {
    Idle,
    Stable,
    UnlockedEnabled,
    LockedDisabled,
    UnlockedAvailable,
    InventoryCollected,
}

impl Requirement {
    pub const ALL: [Requirement; 6] = [
        Requirement::Idle,
        Requirement::Stable,
        Requirement::UnlockedEnabled,
        Requirement::LockedDisabled,
        Requirement::UnlockedAvailable,
        Requirement::InventoryCollected,
    ];

    #[must_use]
    pub fn holds(&self, host: &Host) -> bool {
        match self {
            Requirement::Idle => host.idle(),
            Requirement::Stable => host.stable(),
            Requirement::UnlockedEnabled => host.is_unlocked_enabled(),
            Requirement::LockedDisabled => host.is_locked_disabled(),
            Requirement::UnlockedAvailable => host.is_unlocked_available(),
            Requirement::InventoryCollected => host.is_inventory_collected(),
        }
    }
}

impl std::fmt::Display for Requirement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Requirement::Idle => write!(f, "idle"),
            Requirement::Stable => write!(f, "stable"),
            Requirement::UnlockedEnabled => write!(f, "unlocked-enabled"),
            Requirement::LockedDisabled => write!(f, "locked-disabled"),
            Requirement::UnlockedAvailable => write!(f, "unlocked-available"),
            Requirement::InventoryCollected => write!(f, "inventory-collected"),
        }
    }
}

/// Every classification of one host, pre-computed for JSON output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub uuid: String,
    pub hostname: Option<String>,
    pub state: String,
    pub idle: bool,
    pub stable: bool,
    pub unlocked_enabled: bool,
    pub locked_disabled: bool,
    pub unlocked_available: bool,
    pub inventory_collected: bool,
}

#[must_use]
pub fn classify(host: &Host) -> Classification {
    Classification {
        uuid: host.uuid.clone(),
        hostname: host.hostname.clone(),
        state: host.state(),
        idle: host.idle(),
        stable: host.stable(),
        unlocked_enabled: host.is_unlocked_enabled(),
        locked_disabled: host.is_locked_disabled(),
        unlocked_available: host.is_unlocked_available(),
        inventory_collected: host.is_inventory_collected(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_host(
        admin: AdministrativeState,
        oper: OperationalStatus,
        avail: AvailabilityStatus,
        task: Option<&str>,
    ) -> Host {
        let host = Host::new("0c3bd2a8", admin, oper, avail);
        match task {
            Some(t) => host.with_task(t),
            None => host,
        }
    }

    fn all_hosts() -> Vec<Host> {
        let mut hosts = Vec::new();
        for admin in [
            AdministrativeState::Unlocked,
            AdministrativeState::Locked,
            AdministrativeState::Other("shutdown".to_string()),
        ] {
            for oper in [
                OperationalStatus::Enabled,
                OperationalStatus::Disabled,
                OperationalStatus::Other("failed".to_string()),
            ] {
                for avail in [
                    AvailabilityStatus::Available,
                    AvailabilityStatus::Degraded,
                    AvailabilityStatus::Offline,
                ] {
                    for task in [None, Some(""), Some("Unlocking")] {
                        hosts.push(make_host(admin.clone(), oper.clone(), avail.clone(), task));
                    }
                }
            }
        }
        hosts
    }

    #[test]
    fn test_idle_absent_or_empty_task() {
        use AdministrativeState::Unlocked;
        use OperationalStatus::Enabled;
        let avail = AvailabilityStatus::Available;
        assert!(make_host(Unlocked, Enabled, avail.clone(), None).idle());
        assert!(make_host(Unlocked, Enabled, avail.clone(), Some("")).idle());
        assert!(!make_host(Unlocked, Enabled, avail, Some("Rebooting")).idle());
    }

    #[test]
    fn test_unlocked_available_scenario() {
        let host = make_host(
            AdministrativeState::Unlocked,
            OperationalStatus::Enabled,
            AvailabilityStatus::Available,
            None,
        );
        assert!(host.idle());
        assert!(host.stable());
        assert!(host.is_unlocked_enabled());
        assert!(host.is_unlocked_available());
        assert!(!host.is_locked_disabled());
        assert_eq!(host.state(), "unlocked/enabled/available/idle");
    }

    #[test]
    fn test_locked_booting_scenario() {
        let host = make_host(
            AdministrativeState::Locked,
            OperationalStatus::Disabled,
            AvailabilityStatus::Offline,
            Some("Booting"),
        );
        assert!(!host.idle());
        assert!(!host.stable());
        assert!(!host.is_locked_disabled());
        assert_eq!(host.state(), "locked/disabled/offline/booting");
    }

    #[test]
    fn test_stable_requires_matching_pair() {
        for host in all_hosts() {
            let matching = matches!(
                (&host.administrative_state, &host.operational_status),
                (AdministrativeState::Unlocked, OperationalStatus::Enabled)
                    | (AdministrativeState::Locked, OperationalStatus::Disabled)
            );
            assert_eq!(host.stable(), matching && host.idle(), "{}", host.state());
        }
    }

    #[test]
    fn test_unlocked_available_implies_unlocked_enabled() {
        for host in all_hosts() {
            if host.is_unlocked_available() {
                assert!(host.is_unlocked_enabled(), "{}", host.state());
            }
        }
    }

    #[test]
    fn test_degraded_is_enabled_but_not_available() {
        let host = make_host(
            AdministrativeState::Unlocked,
            OperationalStatus::Enabled,
            AvailabilityStatus::Degraded,
            None,
        );
        assert!(host.is_unlocked_enabled());
        assert!(!host.is_unlocked_available());
    }

    #[test]
    fn test_inventory_collected() {
        let host = make_host(
            AdministrativeState::Locked,
            OperationalStatus::Disabled,
            AvailabilityStatus::Online,
            None,
        );
        assert!(!host.is_inventory_collected());

        let pending = host
            .clone()
            .with_inventory_state(InventoryState::Other("inventorying".to_string()));
        assert!(!pending.is_inventory_collected());

        let collected = host.with_inventory_state(InventoryState::Collected);
        assert!(collected.is_inventory_collected());
    }

    #[test]
    fn test_state_echoes_unknown_availability() {
        let host = make_host(
            AdministrativeState::Unlocked,
            OperationalStatus::Disabled,
            AvailabilityStatus::Other("dependency".to_string()),
            Some("Enabling Worker"),
        );
        assert_eq!(host.state(), "unlocked/disabled/dependency/enabling worker");
    }

    #[test]
    fn test_unrecognised_pair_never_stable() {
        let host = make_host(
            AdministrativeState::Other("shutdown".to_string()),
            OperationalStatus::Enabled,
            AvailabilityStatus::Available,
            None,
        );
        assert!(host.idle());
        assert!(!host.stable());
        assert!(!host.is_unlocked_enabled());
        assert!(!host.is_unlocked_available());
        assert_eq!(host.state(), "shutdown/enabled/available/idle");
    }

    #[test]
    fn test_classification_json_fields() {
        let host = make_host(
            AdministrativeState::Unlocked,
            OperationalStatus::Enabled,
            AvailabilityStatus::Available,
            None,
        )
        .with_hostname("controller-0")
        .with_inventory_state(InventoryState::Collected);

        let value = serde_json::to_value(classify(&host)).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "uuid": "0c3bd2a8",
                "hostname": "controller-0",
                "state": "unlocked/enabled/available/idle",
                "idle": true,
                "stable": true,
                "unlocked_enabled": true,
                "locked_disabled": false,
                "unlocked_available": true,
                "inventory_collected": true
            })
        );
    }

    #[test]
    fn test_requirement_dispatch() {
        for host in all_hosts() {
            let c = classify(&host);
            assert_eq!(Requirement::Idle.holds(&host), c.idle);
            assert_eq!(Requirement::Stable.holds(&host), c.stable);
            assert_eq!(Requirement::UnlockedEnabled.holds(&host), c.unlocked_enabled);
            assert_eq!(Requirement::LockedDisabled.holds(&host), c.locked_disabled);
            assert_eq!(Requirement::UnlockedAvailable.holds(&host), c.unlocked_available);
            assert_eq!(Requirement::InventoryCollected.holds(&host), c.inventory_collected);
        }
    }

    #[test]
    fn test_requirement_names() {
        use clap::ValueEnum;
        for req in Requirement::ALL {
            let parsed = <Requirement as ValueEnum>::from_str(&req.to_string(), false).unwrap();
            assert_eq!(parsed, req);
        }
    }
}
