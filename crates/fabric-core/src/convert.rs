// ── Request-to-domain conversions ──
//
// Turns the three router mutation bodies into `Router` values ready for the
// store. Every function here is total: absent fields are coerced to the
// domain defaults and nothing is rejected.

use fabric_api::coerce::{bool_or_default, int64_or_default, string_or_empty, tags_or_default};
use fabric_api::{RouterCreate, RouterPatch, RouterUpdate};
use tracing::{debug, warn};

use crate::model::{Router, RouterField, UpdatedFields};

// ── Helpers ────────────────────────────────────────────────────────

/// Narrow a wire cost to the stored `u16`, clamping out-of-range values.
fn cost_from_wire(raw: Option<i64>) -> u16 {
    let raw = int64_or_default(raw);
    u16::try_from(raw).unwrap_or_else(|_| {
        let clamped = if raw < 0 { 0 } else { u16::MAX };
        warn!(raw, clamped, "router cost out of range, clamping");
        clamped
    })
}

// ── Create ─────────────────────────────────────────────────────────

/// Map a create body. An absent id stays empty so the store assigns one.
///
/// A cost outside `0..=65535` is clamped to the nearest bound, not wrapped.
pub fn map_create_router_to_model(router: RouterCreate) -> Router {
    let ret = Router {
        id: string_or_empty(router.id),
        name: string_or_empty(router.name),
        fingerprint: router.fingerprint,
        cost: cost_from_wire(router.cost),
        no_traversal: bool_or_default(router.no_traversal),
        disabled: bool_or_default(router.disabled),
        tags: tags_or_default(router.tags),
        ..Router::default()
    };
    debug!(router_id = %ret.id, name = %ret.name, "mapped router create");
    ret
}

impl From<RouterCreate> for Router {
    fn from(router: RouterCreate) -> Self {
        map_create_router_to_model(router)
    }
}

// ── Update ─────────────────────────────────────────────────────────

/// Map a full-replace body onto `id`. Omitted fields become zero values.
/// Cost is clamped as in [`map_create_router_to_model`].
pub fn map_update_router_to_model(id: impl Into<String>, router: RouterUpdate) -> Router {
    let ret = Router {
        id: id.into(),
        name: string_or_empty(router.name),
        fingerprint: router.fingerprint,
        cost: cost_from_wire(router.cost),
        no_traversal: bool_or_default(router.no_traversal),
        disabled: bool_or_default(router.disabled),
        tags: tags_or_default(router.tags),
        ..Router::default()
    };
    debug!(router_id = %ret.id, "mapped router update");
    ret
}

// ── Patch ──────────────────────────────────────────────────────────

/// Map a partial body onto `id`.
///
/// Name and fingerprint are taken as sent. Cost and the two flags are
/// coerced exactly as for an update, so on their own they cannot tell
/// "absent" from "default"; pair the result with [`UpdatedFields::from`]
/// and [`Router::apply_patch`] to leave unsent fields untouched. Cost is
/// clamped as in [`map_create_router_to_model`].
pub fn map_patch_router_to_model(id: impl Into<String>, router: RouterPatch) -> Router {
    let ret = Router {
        id: id.into(),
        name: string_or_empty(router.name.into_option()),
        fingerprint: router.fingerprint.into_option(),
        cost: cost_from_wire(router.cost.into_option()),
        no_traversal: bool_or_default(router.no_traversal.into_option()),
        disabled: bool_or_default(router.disabled.into_option()),
        tags: tags_or_default(router.tags.into_option()),
        ..Router::default()
    };
    debug!(router_id = %ret.id, "mapped router patch");
    ret
}

impl From<&RouterPatch> for UpdatedFields {
    fn from(patch: &RouterPatch) -> Self {
        let sent = [
            (RouterField::Name, patch.name.is_present()),
            (RouterField::Fingerprint, patch.fingerprint.is_present()),
            (RouterField::Cost, patch.cost.is_present()),
            (RouterField::NoTraversal, patch.no_traversal.is_present()),
            (RouterField::Disabled, patch.disabled.is_present()),
            (RouterField::Tags, patch.tags.is_present()),
        ];
        sent.into_iter()
            .filter_map(|(field, present)| present.then_some(field))
            .collect()
    }
}
