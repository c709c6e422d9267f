//! REST model for the router resource of the management API.
//!
//! Request types are deserialized from client bodies; response types are
//! serialized back. Field names use camelCase via `#[serde(rename_all = "camelCase")]`.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Error;
use crate::patch::PatchField;

// ── Shared pieces ────────────────────────────────────────────────────

/// Free-form key/value metadata attached to any entity.
pub type Tags = BTreeMap<String, Value>;

/// Relation name -> link. Ordered so encodings are stable.
pub type Links = BTreeMap<String, Link>;

/// A single hypermedia reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Link {
    pub href: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl Link {
    pub fn new(href: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            method: None,
            comment: None,
        }
    }
}

/// Fields every entity detail response starts with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseEntity {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(rename = "_links")]
    pub links: Links,
    pub tags: Tags,
}

// ── Router requests ──────────────────────────────────────────────────

/// Body of `POST /routers`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouterCreate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fingerprint: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub no_traversal: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Tags>,
}

/// Body of `PUT /routers/{id}`. The id comes from the path, never the body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouterUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fingerprint: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub no_traversal: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Tags>,
}

/// Body of `PATCH /routers/{id}`. Every field may be left out.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouterPatch {
    #[serde(default, skip_serializing_if = "PatchField::is_absent")]
    pub name: PatchField<String>,
    #[serde(default, skip_serializing_if = "PatchField::is_absent")]
    pub fingerprint: PatchField<String>,
    #[serde(default, skip_serializing_if = "PatchField::is_absent")]
    pub cost: PatchField<i64>,
    #[serde(default, skip_serializing_if = "PatchField::is_absent")]
    pub no_traversal: PatchField<bool>,
    #[serde(default, skip_serializing_if = "PatchField::is_absent")]
    pub disabled: PatchField<bool>,
    #[serde(default, skip_serializing_if = "PatchField::is_absent")]
    pub tags: PatchField<Tags>,
}

impl RouterCreate {
    pub fn from_json(body: &[u8]) -> Result<Self, Error> {
        serde_json::from_slice(body).map_err(|source| Error::Decode {
            shape: "router create",
            source,
        })
    }
}

impl RouterUpdate {
    pub fn from_json(body: &[u8]) -> Result<Self, Error> {
        serde_json::from_slice(body).map_err(|source| Error::Decode {
            shape: "router update",
            source,
        })
    }
}

impl RouterPatch {
    pub fn from_json(body: &[u8]) -> Result<Self, Error> {
        serde_json::from_slice(body).map_err(|source| Error::Decode {
            shape: "router patch",
            source,
        })
    }
}

// ── Router responses ─────────────────────────────────────────────────

/// Build metadata reported by a connected router.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionInfo {
    pub arch: String,
    pub build_date: String,
    pub os: String,
    pub revision: String,
    pub version: String,
}

/// An address a connected router accepts links on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouterListener {
    pub address: String,
    pub protocol: String,
}

/// A local network interface reported by a router.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(clippy::struct_excessive_bools)]
pub struct Interface {
    pub hardware_address: String,
    pub index: i64,
    pub is_broadcast: bool,
    pub is_loopback: bool,
    pub is_multicast: bool,
    pub is_running: bool,
    pub is_up: bool,
    pub mtu: i64,
    pub name: String,
    pub addresses: Vec<String>,
}

/// Response body of `GET /routers/{id}` and the items of `GET /routers`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouterDetail {
    #[serde(flatten)]
    pub base: BaseEntity,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fingerprint: Option<String>,
    pub name: String,
    pub connected: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version_info: Option<VersionInfo>,
    pub cost: i64,
    pub no_traversal: bool,
    pub disabled: bool,
    #[serde(default)]
    pub listener_addresses: Vec<RouterListener>,
    #[serde(default)]
    pub interfaces: Vec<Interface>,
}
