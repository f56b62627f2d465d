//! Verification strategies and the preset port tables.

use crate::types::Port;
use serde::{Deserialize, Serialize};
use std::fmt;

const fn p(port: u16) -> Port {
    Port::new_unchecked(port)
}

/// Ports probed by the `top10` method.
pub const TOP_10_PORTS: [Port; 10] = [
    p(80),
    p(443),
    p(22),
    p(21),
    p(25),
    p(53),
    p(445),
    p(3389),
    p(3306),
    p(8080),
];

/// Ports probed by the `top100` method.
#[rustfmt::skip]
pub const TOP_100_PORTS: [Port; 100] = [
    p(7), p(9), p(13), p(21), p(22), p(23), p(25), p(26), p(37), p(53),
    p(79), p(80), p(81), p(88), p(106), p(110), p(111), p(113), p(119), p(135),
    p(139), p(143), p(144), p(179), p(199), p(389), p(427), p(443), p(444), p(445),
    p(465), p(513), p(514), p(515), p(543), p(544), p(548), p(554), p(587), p(631),
    p(646), p(873), p(990), p(993), p(995), p(1025), p(1026), p(1027), p(1028), p(1029),
    p(1110), p(1433), p(1720), p(1723), p(1755), p(1900), p(2000), p(2001), p(2049), p(2121),
    p(2717), p(3000), p(3128), p(3306), p(3389), p(3986), p(4899), p(5000), p(5009), p(5051),
    p(5060), p(5101), p(5190), p(5357), p(5432), p(5631), p(5666), p(5800), p(5900), p(6000),
    p(6001), p(6646), p(7070), p(8000), p(8008), p(8009), p(8080), p(8081), p(8443), p(8888),
    p(9100), p(9999), p(10000), p(32768), p(49152), p(49153), p(49154), p(49155), p(49156), p(49157),
];

/// How each host's liveness is decided.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "ports", rename_all = "snake_case")]
pub enum Strategy {
    /// ICMP echo only.
    Ping,
    /// A preset port table.
    FixedPorts(Vec<Port>),
    /// Ports supplied by the user. Must not be empty.
    CustomPorts(Vec<Port>),
}

impl Strategy {
    /// Resolve a method name as accepted on the command line.
    ///
    /// Unknown names resolve to `FixedPorts([])`: nothing is probed and every
    /// host reports dead. Callers may want to warn about it.
    pub fn from_method(method: &str, custom_ports: &[Port]) -> Self {
        match method {
            "ping" => Self::Ping,
            "top10" => Self::FixedPorts(TOP_10_PORTS.to_vec()),
            "top100" => Self::FixedPorts(TOP_100_PORTS.to_vec()),
            "custom" => Self::CustomPorts(custom_ports.to_vec()),
            _ => Self::FixedPorts(Vec::new()),
        }
    }

    /// Whether `method` is one of the recognized names.
    pub fn is_known_method(method: &str) -> bool {
        matches!(method, "ping" | "top10" | "top100" | "custom")
    }

    /// Ports to probe; empty for `Ping`.
    pub fn ports(&self) -> &[Port] {
        match self {
            Self::Ping => &[],
            Self::FixedPorts(ports) | Self::CustomPorts(ports) => ports,
        }
    }

    pub fn is_ping(&self) -> bool {
        matches!(self, Self::Ping)
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ping => write!(f, "ICMP ping"),
            Self::FixedPorts(ports) => write!(f, "TCP connect ({} preset ports)", ports.len()),
            Self::CustomPorts(ports) => write!(f, "TCP connect ({} custom ports)", ports.len()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_preset_tables() {
        assert_eq!(TOP_10_PORTS[0].as_u16(), 80);
        assert_eq!(TOP_10_PORTS[9].as_u16(), 8080);
        let unique: HashSet<_> = TOP_100_PORTS.iter().collect();
        assert_eq!(unique.len(), 100);
        assert!(TOP_100_PORTS.iter().all(|p| p.as_u16() >= 1));
    }

    #[test]
    fn test_from_method() {
        let custom = [Port::new(8443).unwrap(), Port::new(22).unwrap()];

        assert_eq!(Strategy::from_method("ping", &custom), Strategy::Ping);
        assert_eq!(
            Strategy::from_method("top10", &custom),
            Strategy::FixedPorts(TOP_10_PORTS.to_vec())
        );
        assert_eq!(Strategy::from_method("top100", &[]).ports().len(), 100);
        assert_eq!(
            Strategy::from_method("custom", &custom),
            Strategy::CustomPorts(custom.to_vec())
        );
    }

    #[test]
    fn test_unknown_method_probes_nothing() {
        let strategy = Strategy::from_method("top1000", &[Port::new(80).unwrap()]);
        assert_eq!(strategy, Strategy::FixedPorts(Vec::new()));
        assert!(!Strategy::is_known_method("top1000"));
        assert!(Strategy::is_known_method("custom"));
    }

    #[test]
    fn test_ping_has_no_ports() {
        assert!(Strategy::Ping.ports().is_empty());
        assert!(Strategy::Ping.is_ping());
    }
}
