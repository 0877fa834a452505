use std::sync::{Arc, Once};

use gwport::registry::PrefixRegistry;
use gwport::{GatewayPortBinding, Prefix, PrefixId};
use simplelog::{Config, LevelFilter, TestLogger};

static LOGGER: Once = Once::new();

pub fn init_logging() {
    LOGGER.call_once(|| {
        let _ = TestLogger::init(LevelFilter::Debug, Config::default());
    });
}

pub fn prefix_with_id(id: u32) -> Arc<Prefix> {
    Arc::new(Prefix::new(id, format!("10.{id}.0.0/24"), None))
}

pub fn binding(gw: &str, active: bool, prefix: u32) -> GatewayPortBinding {
    GatewayPortBinding::new(gw, active, prefix_with_id(prefix))
}

/// A router with two vlans, each with an HSRP pair, and a plain routed /31 uplink
pub fn campus_router() -> (PrefixRegistry<Prefix>, Vec<GatewayPortBinding>) {
    let mut registry = PrefixRegistry::new();
    registry.insert(Prefix::new(10, "192.168.10.0/24", Some(10)));
    registry.insert(Prefix::new(20, "192.168.20.0/24", Some(20)));
    registry.insert(Prefix::new(99, "172.16.0.0/31", None));

    let bindings = [
        ("192.168.10.1", true, 10),
        ("192.168.10.2", false, 10),
        ("192.168.20.1", true, 20),
        ("192.168.20.3", false, 20),
        ("172.16.0.0", false, 99),
    ]
    .into_iter()
    .map(|(gw, active, id)| registry.bind(gw, active, &PrefixId(id)))
    .collect::<Result<Vec<_>, _>>()
    .unwrap();
    (registry, bindings)
}
