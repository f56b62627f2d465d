//! Core type definitions using newtype patterns for type safety.

mod host;
mod port;

pub use host::{normalize_subdomain, Host};
pub use port::{join_ports, Port, PortError, PortRange, PortSpec};
