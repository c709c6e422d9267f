// ── Live network state ──
//
// Sessions arrive and depart concurrently with every read. Projections do
// a single point-in-time lookup through `NetworkState` and never hold a
// reference into the registry across calls.

use std::sync::Arc;

use dashmap::DashMap;
use tracing::debug;

use crate::model::ConnectedRouter;

/// Read-only view of which routers currently hold a session.
pub trait NetworkState: Send + Sync {
    /// The live session for `router_id`, or `None` when disconnected.
    fn connected_router(&self, router_id: &str) -> Option<Arc<ConnectedRouter>>;
}

/// Concurrent in-memory registry of router sessions.
///
/// Uses `DashMap` for lock-free lookups; entries are handed out as `Arc`
/// snapshots so a disconnect never invalidates a projection in flight.
#[derive(Debug, Default)]
pub struct ConnectedRouters {
    by_id: DashMap<String, Arc<ConnectedRouter>>,
}

impl ConnectedRouters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a new session. Returns the session it replaced, if any.
    pub fn connect(&self, router: ConnectedRouter) -> Option<Arc<ConnectedRouter>> {
        debug!(
            router_id = %router.id,
            listeners = router.listeners.len(),
            connected_at = %router.connected_at,
            "router session established"
        );
        self.by_id.insert(router.id.clone(), Arc::new(router))
    }

    /// Drop the session for `router_id`. Returns it if it existed.
    pub fn disconnect(&self, router_id: &str) -> Option<Arc<ConnectedRouter>> {
        let removed = self.by_id.remove(router_id).map(|(_, v)| v);
        if removed.is_some() {
            debug!(router_id, "router session closed");
        }
        removed
    }

    pub fn is_connected(&self, router_id: &str) -> bool {
        self.by_id.contains_key(router_id)
    }

    /// Ids of all connected routers, sorted.
    pub fn ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.by_id.iter().map(|r| r.key().clone()).collect();
        ids.sort_unstable();
        ids
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

impl NetworkState for ConnectedRouters {
    fn connected_router(&self, router_id: &str) -> Option<Arc<ConnectedRouter>> {
        self.by_id.get(router_id).map(|r| Arc::clone(r.value()))
    }
}

impl<T: NetworkState + ?Sized> NetworkState for Arc<T> {
    fn connected_router(&self, router_id: &str) -> Option<Arc<ConnectedRouter>> {
        (**self).connected_router(router_id)
    }
}
