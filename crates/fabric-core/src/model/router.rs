// ── Router domain types ──

use std::collections::{BTreeSet, btree_set};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, IntoEnumIterator};

use super::interface::Interface;

pub type Tags = fabric_api::Tags;

/// The canonical router entity as the controller stores it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Router {
    /// Empty until the store assigns one on create.
    pub id: String,
    pub name: String,
    /// Identity credential; `None` until enrollment provides one.
    pub fingerprint: Option<String>,
    /// Routing priority weight. Lower is preferred.
    pub cost: u16,
    /// Forbids using this router as an intermediate hop.
    pub no_traversal: bool,
    pub disabled: bool,
    /// Reported by the router while connected. Never written by the mutation mappers.
    pub interfaces: Vec<Interface>,
    pub tags: Tags,

    // Set by the store
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Router {
    /// Merge a mapped patch into this router, touching only `fields`.
    ///
    /// Identity, interfaces and timestamps are never taken from `patch`.
    pub fn apply_patch(&mut self, patch: Router, fields: &UpdatedFields) {
        let Router {
            name,
            fingerprint,
            cost,
            no_traversal,
            disabled,
            tags,
            ..
        } = patch;

        if fields.contains(RouterField::Name) {
            self.name = name;
        }
        if fields.contains(RouterField::Fingerprint) {
            self.fingerprint = fingerprint;
        }
        if fields.contains(RouterField::Cost) {
            self.cost = cost;
        }
        if fields.contains(RouterField::NoTraversal) {
            self.no_traversal = no_traversal;
        }
        if fields.contains(RouterField::Disabled) {
            self.disabled = disabled;
        }
        if fields.contains(RouterField::Tags) {
            self.tags = tags;
        }
    }
}

/// Mutable router fields, named as they appear on the wire.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, AsRefStr, EnumIter,
)]
#[strum(serialize_all = "camelCase")]
pub enum RouterField {
    Name,
    Fingerprint,
    Cost,
    NoTraversal,
    Disabled,
    Tags,
}

/// The set of fields a partial update actually carried.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdatedFields(BTreeSet<RouterField>);

impl UpdatedFields {
    pub fn none() -> Self {
        Self::default()
    }

    /// Every mutable field, i.e. full-replace semantics.
    pub fn all() -> Self {
        Self(RouterField::iter().collect())
    }

    pub fn insert(&mut self, field: RouterField) {
        self.0.insert(field);
    }

    pub fn contains(&self, field: RouterField) -> bool {
        self.0.contains(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::iter::Copied<btree_set::Iter<'_, RouterField>> {
        self.0.iter().copied()
    }
}

impl<'a> IntoIterator for &'a UpdatedFields {
    type Item = RouterField;
    type IntoIter = std::iter::Copied<btree_set::Iter<'a, RouterField>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<RouterField> for UpdatedFields {
    fn from_iter<I: IntoIterator<Item = RouterField>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
