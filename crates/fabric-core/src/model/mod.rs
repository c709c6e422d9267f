// ── Domain model ──
//
// Canonical router types shared by the mappers. Stored state lives in
// `router`; session state that only exists while a router is connected
// lives in `connected`.

pub mod connected;
pub mod interface;
pub mod router;

pub use connected::{ConnectedRouter, Listener, VersionInfo};
pub use interface::Interface;
pub use router::{Router, RouterField, Tags, UpdatedFields};
