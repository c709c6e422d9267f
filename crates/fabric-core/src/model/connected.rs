// ── Live router sessions ──
//
// Only exists while a router holds an open control channel. Never
// persisted and never owned by `Router`; looked up by router id.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Build metadata a router reports when its session is established.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionInfo {
    pub arch: String,
    pub build_date: String,
    pub os: String,
    pub revision: String,
    pub version: String,
}

/// An address a router accepts links on, with the link protocol served there.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Listener {
    address: String,
    protocol: String,
}

impl Listener {
    pub fn new(address: impl Into<String>, protocol: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            protocol: protocol.into(),
        }
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn protocol(&self) -> &str {
        &self.protocol
    }
}

/// Session state for a connected router.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectedRouter {
    pub id: String,
    pub version_info: Option<VersionInfo>,
    /// In the order the router advertised them.
    pub listeners: Vec<Listener>,
    pub connected_at: DateTime<Utc>,
}

impl ConnectedRouter {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            version_info: None,
            listeners: Vec::new(),
            connected_at: Utc::now(),
        }
    }

    #[must_use]
    pub fn with_version_info(mut self, version_info: VersionInfo) -> Self {
        self.version_info = Some(version_info);
        self
    }

    #[must_use]
    pub fn with_listener(mut self, listener: Listener) -> Self {
        self.listeners.push(listener);
        self
    }
}
