// ── Router network interfaces ──

use serde::{Deserialize, Serialize};

/// Interface flag bits as reported by routers.
pub mod flags {
    pub const UP: u64 = 1 << 0;
    pub const BROADCAST: u64 = 1 << 1;
    pub const LOOPBACK: u64 = 1 << 2;
    pub const POINT_TO_POINT: u64 = 1 << 3;
    pub const MULTICAST: u64 = 1 << 4;
    pub const RUNNING: u64 = 1 << 5;
}

/// A local network interface on a router host.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interface {
    pub name: String,
    pub hardware_address: String,
    pub mtu: i64,
    pub index: i64,
    pub flags: u64,
    pub addresses: Vec<String>,
}

impl Interface {
    pub fn is_up(&self) -> bool {
        self.has_flag(flags::UP)
    }

    pub fn is_broadcast(&self) -> bool {
        self.has_flag(flags::BROADCAST)
    }

    pub fn is_loopback(&self) -> bool {
        self.has_flag(flags::LOOPBACK)
    }

    pub fn is_point_to_point(&self) -> bool {
        self.has_flag(flags::POINT_TO_POINT)
    }

    pub fn is_multicast(&self) -> bool {
        self.has_flag(flags::MULTICAST)
    }

    pub fn is_running(&self) -> bool {
        self.has_flag(flags::RUNNING)
    }

    fn has_flag(&self, flag: u64) -> bool {
        self.flags & flag != 0
    }
}
