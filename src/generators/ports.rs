// src/generators/ports.rs
use std::collections::HashSet;

use rand::Rng;

use crate::models::PortMapping;

/// Services that receive a port in every generated mapping, in display order.
pub const SERVICES: [&str; 7] = [
    "HTTP",
    "HTTPS",
    "LuCI HTTP",
    "LuCI HTTPS",
    "SSH",
    "WG",
    "BACKUP",
];

pub const PORT_MIN: u16 = 10000;
pub const PORT_MAX: u16 = 65535;

/// Assign every service a uniformly random port in [PORT_MIN, PORT_MAX],
/// distinct within the batch. Collisions are resampled; with 7 draws from
/// 55k+ ports the loop is effectively a handful of iterations at worst.
pub fn generate_ports() -> Vec<PortMapping> {
    let mut rng = rand::thread_rng();
    let mut used = HashSet::new();

    SERVICES
        .iter()
        .map(|name| {
            let mut port = rng.gen_range(PORT_MIN..=PORT_MAX);
            while !used.insert(port) {
                port = rng.gen_range(PORT_MIN..=PORT_MAX);
            }
            PortMapping { name, port }
        })
        .collect()
}

/// One `NAME: PORT` line per mapping, for display and clipboard export.
pub fn format_mappings(mappings: &[PortMapping]) -> String {
    mappings
        .iter()
        .map(|m| format!("{}: {}", m.name, m.port))
        .collect::<Vec<_>>()
        .join("\n")
}
