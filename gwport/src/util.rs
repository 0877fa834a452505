use std::cmp::Ordering;

use crate::concepts::binding::GatewayPortBinding;
use crate::framework::PrefixEntity;

/// Reads the mask length from a CIDR string
///
/// # Arguments
///
/// * `net_address`: network address in CIDR notation, ie `10.0.0.0/24`
///
/// returns: Option<u8>, None if there is no mask or it is not a valid length
///
/// # Examples
///
/// ```
/// assert_eq!(gwport::util::parse_prefix_len("10.0.0.0/24"), Some(24));
/// assert_eq!(gwport::util::parse_prefix_len("2001:db8::/48"), Some(48));
///
/// assert_eq!(gwport::util::parse_prefix_len("10.0.0.1"), None);
/// assert_eq!(gwport::util::parse_prefix_len("10.0.0.0/33"), None);
/// assert_eq!(gwport::util::parse_prefix_len("10.0.0.0/64"), None);
/// assert_eq!(gwport::util::parse_prefix_len("2001:db8::/129"), None);
/// ```
pub fn parse_prefix_len(net_address: &str) -> Option<u8> {
    let (addr, len) = net_address.rsplit_once('/')?;
    let len: u8 = len.trim().parse().ok()?;
    let max = if addr.contains(':') { 128 } else { 32 };
    if len > max {
        return None;
    }
    Some(len)
}

/// Total order used whenever bindings are listed: gateway address, then prefix id, then flag
pub fn binding_order<P: PrefixEntity>(
    a: &GatewayPortBinding<P>,
    b: &GatewayPortBinding<P>,
) -> Ordering {
    a.gateway_address()
        .cmp(b.gateway_address())
        .then_with(|| a.prefix_id().cmp(&b.prefix_id()))
        .then_with(|| a.is_redundancy_active().cmp(&b.is_redundancy_active()))
}
