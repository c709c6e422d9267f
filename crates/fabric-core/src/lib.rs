//! Router domain model and the mapping layer between it and the REST model.
//!
//! - **Mutation mappers** ([`convert`]) -- turn [`RouterCreate`],
//!   [`RouterUpdate`] and [`RouterPatch`] bodies into a [`Router`] ready for
//!   persistence. Patch bodies also yield the [`UpdatedFields`] a store needs
//!   to merge only what the caller sent.
//!
//! - **Projection** ([`RouterModelMapper`]) -- combines a stored [`Router`]
//!   with the live session state exposed through [`NetworkState`] into a
//!   [`RouterDetail`] response.
//!
//! - **Links** ([`RouterLinkFactory`]) -- builds the `self` and nested
//!   `terminators` references advertised for each router.
//!
//! - **Live state** ([`ConnectedRouters`]) -- concurrent in-memory registry of
//!   router sessions, keyed by router id.
//!
//! [`RouterCreate`]: fabric_api::RouterCreate
//! [`RouterUpdate`]: fabric_api::RouterUpdate
//! [`RouterPatch`]: fabric_api::RouterPatch
//! [`RouterDetail`]: fabric_api::RouterDetail

pub mod config;
pub mod context;
pub mod convert;
pub mod error;
pub mod links;
pub mod mapper;
pub mod model;
pub mod network;

// ── Primary re-exports ──────────────────────────────────────────────
pub use config::LinkConfig;
pub use context::RequestContext;
pub use convert::{
    map_create_router_to_model, map_patch_router_to_model, map_update_router_to_model,
};
pub use error::CoreError;
pub use links::{BasicLinkFactory, EntityName, LinkEntity, LinkFactory, RouterLinkFactory};
pub use mapper::{ApiEntity, ModelMapper, RouterModelMapper, base_entity_to_rest_model};
pub use network::{ConnectedRouters, NetworkState};

pub use model::{
    ConnectedRouter, Interface, Listener, Router, RouterField, UpdatedFields, VersionInfo,
};
