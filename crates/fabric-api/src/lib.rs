//! Wire-facing REST model for fabric controller routers.
//!
//! Everything in this crate mirrors the JSON exchanged with the management
//! API. Field names use camelCase; optional response fields are omitted from
//! the encoding when absent rather than written as zero values.
//!
//! - **Requests** ([`RouterCreate`], [`RouterUpdate`], [`RouterPatch`]) --
//!   the three mutation shapes. Patch fields use [`PatchField`] so "absent"
//!   and "present" are distinguishable for every field type.
//! - **Responses** ([`RouterDetail`]) -- the read shape, built on
//!   [`BaseEntity`] with its [`Links`] and [`Tags`].
//! - **Coercion** ([`coerce`]) -- helpers normalizing absent request fields
//!   into internal defaults.

pub mod coerce;
pub mod error;
pub mod patch;
pub mod rest_model;

pub use error::Error;
pub use patch::PatchField;
pub use rest_model::{
    BaseEntity, Interface, Link, Links, RouterCreate, RouterDetail, RouterListener, RouterPatch,
    RouterUpdate, Tags, VersionInfo,
};
