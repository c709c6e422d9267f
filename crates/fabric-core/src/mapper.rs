// ── Domain-to-API projections ──
//
// Builds read representations from stored entities plus live session
// state. Projections borrow their inputs and never mutate them.

use chrono::{DateTime, Utc};
use fabric_api::{self as api, BaseEntity, RouterDetail, RouterListener};
use tracing::trace;

use crate::context::RequestContext;
use crate::error::CoreError;
use crate::links::{LinkEntity, LinkFactory, RouterLinkFactory};
use crate::model::{Interface, Listener, Router, Tags, VersionInfo};
use crate::network::NetworkState;

// ── Shared projection plumbing ─────────────────────────────────────

/// Fields every projected entity exposes through [`BaseEntity`].
pub trait ApiEntity: LinkEntity {
    fn tags(&self) -> &Tags;
    fn created_at(&self) -> Option<DateTime<Utc>>;
    fn updated_at(&self) -> Option<DateTime<Utc>>;
}

impl ApiEntity for Router {
    fn tags(&self) -> &Tags {
        &self.tags
    }

    fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }

    fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }
}

/// Base fields (id, timestamps, links, tags) of any entity detail.
pub fn base_entity_to_rest_model<E: ApiEntity>(entity: &E, links: &dyn LinkFactory) -> BaseEntity {
    BaseEntity {
        id: entity.id().to_owned(),
        created_at: entity.created_at(),
        updated_at: entity.updated_at(),
        links: links.links(entity),
        tags: entity.tags().clone(),
    }
}

/// Projects one entity type into its API representation.
///
/// Fallible so projections that need lookups beyond the entity itself share
/// one signature with those that cannot fail.
pub trait ModelMapper<E> {
    type Output;

    fn to_api(
        &self,
        network: &dyn NetworkState,
        ctx: &RequestContext,
        entity: &E,
    ) -> Result<Self::Output, CoreError>;

    /// Project a page of entities, stopping at the first failure.
    fn to_api_list(
        &self,
        network: &dyn NetworkState,
        ctx: &RequestContext,
        entities: &[E],
    ) -> Result<Vec<Self::Output>, CoreError> {
        entities
            .iter()
            .map(|entity| self.to_api(network, ctx, entity))
            .collect()
    }
}

// ── Router ─────────────────────────────────────────────────────────

impl From<&VersionInfo> for api::VersionInfo {
    fn from(v: &VersionInfo) -> Self {
        Self {
            arch: v.arch.clone(),
            build_date: v.build_date.clone(),
            os: v.os.clone(),
            revision: v.revision.clone(),
            version: v.version.clone(),
        }
    }
}

impl From<&Listener> for RouterListener {
    fn from(l: &Listener) -> Self {
        Self {
            address: l.address().to_owned(),
            protocol: l.protocol().to_owned(),
        }
    }
}

impl From<&Interface> for api::Interface {
    fn from(intf: &Interface) -> Self {
        Self {
            hardware_address: intf.hardware_address.clone(),
            index: intf.index,
            is_broadcast: intf.is_broadcast(),
            is_loopback: intf.is_loopback(),
            is_multicast: intf.is_multicast(),
            is_running: intf.is_running(),
            is_up: intf.is_up(),
            mtu: intf.mtu,
            name: intf.name.clone(),
            addresses: intf.addresses.clone(),
        }
    }
}

/// Projects [`Router`] into [`RouterDetail`].
#[derive(Debug, Clone, Default)]
pub struct RouterModelMapper {
    links: RouterLinkFactory,
}

impl RouterModelMapper {
    pub fn new(links: RouterLinkFactory) -> Self {
        Self { links }
    }
}

impl ModelMapper<Router> for RouterModelMapper {
    type Output = RouterDetail;

    fn to_api(
        &self,
        network: &dyn NetworkState,
        ctx: &RequestContext,
        router: &Router,
    ) -> Result<RouterDetail, CoreError> {
        // One lookup; the session may close right after and that is fine.
        let connected = network.connected_router(&router.id);

        trace!(
            router_id = %router.id,
            connected = connected.is_some(),
            request_id = %ctx.request_id(),
            "projecting router"
        );

        let version_info = connected
            .as_ref()
            .and_then(|c| c.version_info.as_ref())
            .map(api::VersionInfo::from);

        let listener_addresses: Vec<RouterListener> = connected
            .as_ref()
            .map(|c| c.listeners.iter().map(RouterListener::from).collect())
            .unwrap_or_default();

        Ok(RouterDetail {
            base: base_entity_to_rest_model(router, &self.links),
            fingerprint: router.fingerprint.clone(),
            name: router.name.clone(),
            connected: connected.is_some(),
            version_info,
            cost: i64::from(router.cost),
            no_traversal: router.no_traversal,
            disabled: router.disabled,
            listener_addresses,
            interfaces: router.interfaces.iter().map(api::Interface::from).collect(),
        })
    }
}
