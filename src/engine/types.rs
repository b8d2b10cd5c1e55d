//! Core types for host snapshots.
//!
//! Field names and wire values follow the inventory `ihosts` API. The
//! derived classifications over these fields live in `state.rs`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Operator intent for a host.
///
/// The inventory service only reports `unlocked` and `locked`; anything
/// else is kept in `Other` and satisfies no classification.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AdministrativeState {
    Unlocked,
    Locked,
    Other(String),
}

impl AdministrativeState {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Unlocked => "unlocked",
            Self::Locked => "locked",
            Self::Other(s) => s,
        }
    }
}

impl From<String> for AdministrativeState {
    fn from(s: String) -> Self {
        match s.as_str() {
            "unlocked" => Self::Unlocked,
            "locked" => Self::Locked,
            _ => Self::Other(s),
        }
    }
}

/// Observed run state of a host, independent of intent.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum OperationalStatus {
    Enabled,
    Disabled,
    Other(String),
}

impl OperationalStatus {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Enabled => "enabled",
            Self::Disabled => "disabled",
            Self::Other(s) => s,
        }
    }
}

impl From<String> for OperationalStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "enabled" => Self::Enabled,
            "disabled" => Self::Disabled,
            _ => Self::Other(s),
        }
    }
}

/// Finer-grained readiness reported by the inventory service.
///
/// Values this crate does not know about are kept verbatim in `Other` so a
/// newer server never makes a snapshot undecodable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AvailabilityStatus {
    Available,
    Online,
    Offline,
    Degraded,
    Failed,
    InTest,
    PowerOff,
    OffDuty,
    Other(String),
}

impl AvailabilityStatus {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Available => "available",
            Self::Online => "online",
            Self::Offline => "offline",
            Self::Degraded => "degraded",
            Self::Failed => "failed",
            Self::InTest => "intest",
            Self::PowerOff => "power-off",
            Self::OffDuty => "offduty",
            Self::Other(s) => s,
        }
    }
}

impl From<String> for AvailabilityStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "available" => Self::Available,
            "online" => Self::Online,
            "offline" => Self::Offline,
            "degraded" => Self::Degraded,
            "failed" => Self::Failed,
            "intest" => Self::InTest,
            "power-off" => Self::PowerOff,
            "offduty" => Self::OffDuty,
            _ => Self::Other(s),
        }
    }
}

/// Progress of the initial hardware/software inventory discovery.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum InventoryState {
    /// Discovery finished; the host may be configured.
    Collected,
    Other(String),
}

impl InventoryState {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Collected => "inventoried",
            Self::Other(s) => s,
        }
    }
}

impl From<String> for InventoryState {
    fn from(s: String) -> Self {
        if s == "inventoried" {
            Self::Collected
        } else {
            Self::Other(s)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Personality {
    Controller,
    Worker,
    Storage,
    Other(String),
}

impl Personality {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Controller => "controller",
            Self::Worker => "worker",
            Self::Storage => "storage",
            Self::Other(s) => s,
        }
    }
}

impl From<String> for Personality {
    fn from(s: String) -> Self {
        match s.as_str() {
            "controller" => Self::Controller,
            "worker" => Self::Worker,
            "storage" => Self::Storage,
            _ => Self::Other(s),
        }
    }
}

macro_rules! wire_string {
    ($($ty:ty),+) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }

            impl From<$ty> for String {
                fn from(value: $ty) -> Self {
                    value.as_str().to_string()
                }
            }
        )+
    };
}

wire_string!(
    AdministrativeState,
    OperationalStatus,
    AvailabilityStatus,
    InventoryState,
    Personality
);

/// A point-in-time copy of one host as reported by the inventory service.
///
/// Nothing in this crate mutates a `Host`; see `state.rs` for the
/// classifications derived from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Host {
    pub uuid: String,
    pub hostname: Option<String>,
    pub personality: Option<Personality>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subfunctions: Option<String>,
    #[serde(rename = "administrative")]
    pub administrative_state: AdministrativeState,
    #[serde(rename = "operational")]
    pub operational_status: OperationalStatus,
    #[serde(rename = "availability")]
    pub availability_status: AvailabilityStatus,
    /// Maintenance task in progress; `None` or empty means none.
    pub task: Option<String>,
    #[serde(rename = "inv_state")]
    pub inventory_state: Option<InventoryState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl Host {
    #[must_use]
    pub fn new(
        uuid: &str,
        administrative_state: AdministrativeState,
        operational_status: OperationalStatus,
        availability_status: AvailabilityStatus,
    ) -> Self {
        Self {
            uuid: uuid.to_string(),
            hostname: None,
            personality: None,
            subfunctions: None,
            administrative_state,
            operational_status,
            availability_status,
            task: None,
            inventory_state: None,
            location: None,
            created_at: None,
            updated_at: None,
        }
    }

    #[must_use]
    pub fn with_hostname(mut self, hostname: &str) -> Self {
        self.hostname = Some(hostname.to_string());
        self
    }

    #[must_use]
    pub fn with_task(mut self, task: &str) -> Self {
        self.task = Some(task.to_string());
        self
    }

    #[must_use]
    pub fn with_inventory_state(mut self, state: InventoryState) -> Self {
        self.inventory_state = Some(state);
        self
    }

    /// Hostname when reported, otherwise the uuid.
    #[must_use]
    pub fn name(&self) -> &str {
        self.hostname.as_deref().unwrap_or(&self.uuid)
    }
}
